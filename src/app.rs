use crate::command::Command;
use crate::consts;
use crate::game::Game;
use crate::sound::Sounds;
use crate::ticker::{Clock, Ticker};
use crossterm::event::{poll, read, Event};
use log::info;
use rand::Rng;
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;

/// The game loop: steps the game at a fixed interval, feeds it input, and
/// draws it each frame
#[derive(Clone, Debug)]
pub(crate) struct App<R, C, S> {
    game: Game<R>,
    ticker: Ticker,
    tick_interval: Duration,
    clock: C,
    sounds: S,
    quitting: bool,
}

impl<R: Rng, C: Clock, S: Sounds> App<R, C, S> {
    pub(crate) fn new(game: Game<R>, tick_interval: Duration, clock: C, sounds: S) -> Self {
        App {
            game,
            ticker: Ticker::new(),
            tick_interval,
            clock,
            sounds,
            quitting: false,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        info!("Starting game");
        while !self.quitting {
            self.update();
            self.process_input()?;
            terminal.draw(|frame| self.game.draw(frame))?;
        }
        info!("Quitting with score {}", self.game.score());
        Ok(())
    }

    /// Step the game if the tick interval has elapsed, and play sounds for
    /// whatever happened
    fn update(&mut self) {
        if !self
            .ticker
            .should_tick(self.tick_interval, self.clock.elapsed())
        {
            return;
        }
        let tick = self.game.update();
        if tick.ate {
            self.sounds.play_eat();
        }
        if tick.collision.is_some() {
            self.sounds.play_fail();
        }
    }

    /// Wait up to one frame for input, then handle every pending event
    fn process_input(&mut self) -> io::Result<()> {
        if poll(consts::FRAME_PERIOD)? {
            self.handle_event(read()?);
            while poll(Duration::ZERO)? {
                self.handle_event(read()?);
            }
        }
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        let Some(ev) = event.as_key_press_event() else {
            return;
        };
        match Command::from_key_event(ev) {
            Some(Command::Quit) => self.quitting = true,
            Some(Command::Steer(direction)) => {
                let _ = self.game.steer(direction);
            }
            None => (),
        }
    }
}
