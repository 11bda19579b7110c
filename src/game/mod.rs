mod direction;
mod food;
mod grid;
mod snake;
pub(crate) use self::direction::Direction;
use self::food::Food;
pub(crate) use self::grid::Grid;
use self::grid::{Cell, Geometry};
use self::snake::Snake;
use crate::consts;
use crate::util::center_rect;
use log::{debug, info};
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
    Frame,
};

/// Layout of the grid on the terminal: each cell is two columns wide so that
/// it comes out roughly square, and the grid is inset by one cell for the
/// border.
const TERMINAL_GEOMETRY: Geometry = Geometry {
    cell_size: Size {
        width: consts::CELL_WIDTH,
        height: consts::CELL_HEIGHT,
    },
    offset: 1,
};

/// The state of a game: the snake, the food, and the current round
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    grid: Grid,
    snake: Snake,
    food: Food,
    score: u32,
    running: bool,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(grid: Grid) -> Self {
        Game::new_with_rng(grid, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(grid: Grid, mut rng: R) -> Game<R> {
        let snake = Snake::new();
        let food = Food::new(grid, snake.body(), &mut rng);
        Game {
            rng,
            grid,
            snake,
            food,
            score: 0,
            running: true,
        }
    }

    /// Advance the game by one step.  Does nothing if the round has ended
    /// and the player has not yet steered the snake again.
    pub(crate) fn update(&mut self) -> Tick {
        let mut tick = Tick::default();
        if !self.running {
            return tick;
        }
        self.snake.advance();
        let head = self.snake.head();
        let mut board_full = false;
        if head == self.food.position() {
            board_full = !self
                .food
                .resample(self.grid, self.snake.body(), &mut self.rng);
            self.snake.grow();
            self.score += 1;
            tick.ate = true;
            debug!(
                "Ate food at {head:?}; score is now {}, next food at {:?}",
                self.score,
                self.food.position()
            );
        }
        if board_full {
            tick.collision = Some(Collision::Full);
        } else if !self.grid.contains(head) {
            tick.collision = Some(Collision::Edge);
        } else if self.snake.tail().any(|c| c == head) {
            tick.collision = Some(Collision::Tail);
        }
        if let Some(collision) = tick.collision {
            self.fail(collision);
        }
        tick
    }

    fn fail(&mut self, collision: Collision) {
        info!(
            "Snake hit {} at {:?}; round over with score {} and length {}",
            collision.as_str(),
            self.snake.head(),
            self.score,
            self.snake.len()
        );
        self.snake.reset();
        let _ = self
            .food
            .resample(self.grid, self.snake.body(), &mut self.rng);
        self.score = 0;
        self.running = false;
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    /// Point the snake in `direction`.  If the snake accepts the new heading
    /// (i.e., it isn't a U-turn), a stopped round starts running again.
    /// Returns whether the heading was accepted.
    pub(crate) fn steer(&mut self, direction: Direction) -> bool {
        let accepted = self.snake.turn(direction);
        if accepted && !self.running {
            debug!("Resuming play heading {direction:?}");
            self.running = true;
        }
        accepted
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn running(&self) -> bool {
        self.running
    }
}

/// What happened during a call to [`Game::update()`]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Tick {
    /// The snake ate the food
    pub(crate) ate: bool,

    /// The snake collided with something, ending the round
    pub(crate) collision: Option<Collision>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Collision {
    /// The snake's head left the grid
    Edge,

    /// The snake's head ran into the rest of its body
    Tail,

    /// The snake covers the whole grid, leaving no cell for the food
    Full,
}

impl Collision {
    fn as_str(self) -> &'static str {
        match self {
            Collision::Edge => "the edge",
            Collision::Tail => "its tail",
            Collision::Full => "the last free cell",
        }
    }
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let field_size = TERMINAL_GEOMETRY.screen_size(self.grid);
        let display = center_rect(
            area,
            Size {
                width: field_size.width,
                height: field_size.height.saturating_add(2),
            },
        );
        let [score_area, field_area, msg_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(field_size.height),
            Constraint::Length(1),
        ])
        .areas(display);
        Line::styled(
            format!(" {} | Score: {}", consts::TITLE, self.score),
            consts::SCORE_BAR_STYLE,
        )
        .render(score_area, buf);

        Block::bordered()
            .style(consts::FIELD_STYLE)
            .render(field_area, buf);
        let mut canvas = Canvas {
            area: field_area,
            grid: self.grid,
            buf,
        };
        canvas.draw_cell(self.food.position(), consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        for cell in self.snake.tail() {
            canvas.draw_cell(cell, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        }
        let head_symbol = match self.snake.direction() {
            Direction::North => consts::SNAKE_HEAD_NORTH_SYMBOL,
            Direction::South => consts::SNAKE_HEAD_SOUTH_SYMBOL,
            Direction::East => consts::SNAKE_HEAD_EAST_SYMBOL,
            Direction::West => consts::SNAKE_HEAD_WEST_SYMBOL,
        };
        canvas.draw_cell(self.snake.head(), head_symbol, consts::SNAKE_STYLE);

        if !self.running() {
            Line::from_iter([
                Span::raw(" Turn ("),
                Span::styled("wasd", consts::KEY_STYLE),
                Span::raw(") to play"),
            ])
            .render(msg_area, buf);
        }
    }
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    grid: Grid,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    /// Draw `symbol` across the screen rectangle for `cell`, one character
    /// per column.  Cells outside of the grid, or that do not fit entirely
    /// inside the border of the (possibly shrunken) field, are not drawn.
    fn draw_cell(&mut self, cell: Cell, symbol: &str, style: Style) {
        if !self.grid.contains(cell) {
            return;
        }
        let Some(rect) = TERMINAL_GEOMETRY.cell_rect(cell) else {
            return;
        };
        let target = Rect {
            x: self.area.x.saturating_add(rect.x),
            y: self.area.y.saturating_add(rect.y),
            ..rect
        };
        let interior = self.area.inner(Margin::new(
            TERMINAL_GEOMETRY.offset,
            TERMINAL_GEOMETRY.offset,
        ));
        if interior.intersection(target) != target {
            return;
        }
        let y = target.y;
        for (x, ch) in (target.x..target.right()).zip(symbol.chars()) {
            if let Some(c) = self.buf.cell_mut((x, y)) {
                c.set_char(ch);
                c.set_style(style);
            }
        }
    }
}
