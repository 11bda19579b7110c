//! Assorted constants & hard-coded configuration
use ratatui::style::{Color, Modifier, Style};
use std::time::Duration;

/// Default time between movements of the snake
pub(crate) const TICK_INTERVAL: Duration = Duration::from_millis(200);

/// How long to wait for input before drawing the next frame (roughly 60 FPS)
pub(crate) const FRAME_PERIOD: Duration = Duration::from_millis(16);

/// Default number of cells along each side of the (square) grid
pub(crate) const CELL_COUNT: u16 = 25;

/// The snake's body at the start of every round, head first
pub(crate) const INITIAL_SNAKE: [(i16, i16); 3] = [(6, 9), (5, 9), (4, 9)];

/// Number of uniform draws to try when placing food before falling back to
/// enumerating the free cells
pub(crate) const MAX_FOOD_ATTEMPTS: usize = 1000;

/// Width in terminal columns of a single grid cell
pub(crate) const CELL_WIDTH: u16 = 2;

/// Height in terminal rows of a single grid cell
pub(crate) const CELL_HEIGHT: u16 = 1;

/// Title shown above the grid
pub(crate) const TITLE: &str = "Snake";

/// Glyph for the snake's head when it is moving north/up
pub(crate) const SNAKE_HEAD_NORTH_SYMBOL: &str = "^^";

/// Glyph for the snake's head when it is moving south/down
pub(crate) const SNAKE_HEAD_SOUTH_SYMBOL: &str = "vv";

/// Glyph for the snake's head when it is moving east/right
pub(crate) const SNAKE_HEAD_EAST_SYMBOL: &str = "█>";

/// Glyph for the snake's head when it is moving west/left
pub(crate) const SNAKE_HEAD_WEST_SYMBOL: &str = "<█";

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: &str = "██";

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: &str = "()";

/// Style for the snake's head and body
pub(crate) const SNAKE_STYLE: Style = Style::new()
    .fg(Color::Rgb(43, 51, 24))
    .add_modifier(Modifier::BOLD);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed).add_modifier(Modifier::BOLD);

/// Style for the playing field, including its border
pub(crate) const FIELD_STYLE: Style = Style::new()
    .fg(Color::Rgb(43, 51, 24))
    .bg(Color::Rgb(173, 204, 96));

/// Style for the title & score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for key names shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);
