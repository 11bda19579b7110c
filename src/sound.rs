//! Audible feedback for game events
use log::{trace, warn};
use serde::Deserialize;
use std::io::Write;

/// Fire-and-forget sound effects triggered by the game
pub(crate) trait Sounds {
    /// The snake ate the food
    fn play_eat(&mut self);

    /// The snake crashed and the round is over
    fn play_fail(&mut self);
}

/// Which game events should ring the terminal bell
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum BellMode {
    /// Never ring the bell
    None,

    /// Ring the bell when a round ends
    #[default]
    Fail,

    /// Ring the bell when the snake eats and when a round ends
    All,
}

/// Plays sounds by writing the BEL control character to a terminal
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct TerminalBell<W> {
    mode: BellMode,
    out: W,
}

impl<W: Write> TerminalBell<W> {
    pub(crate) fn new(mode: BellMode, out: W) -> Self {
        TerminalBell { mode, out }
    }

    fn ring(&mut self) {
        trace!("Ringing terminal bell");
        if let Err(e) = self.out.write_all(b"\x07").and_then(|()| self.out.flush()) {
            warn!("Failed to ring terminal bell: {e}");
        }
    }
}

impl<W: Write> Sounds for TerminalBell<W> {
    fn play_eat(&mut self) {
        if self.mode == BellMode::All {
            self.ring();
        }
    }

    fn play_fail(&mut self) {
        if self.mode != BellMode::None {
            self.ring();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(BellMode::None, b"")]
    #[case(BellMode::Fail, b"\x07")]
    #[case(BellMode::All, b"\x07\x07")]
    fn rings(#[case] mode: BellMode, #[case] expected: &[u8]) {
        let mut bell = TerminalBell::new(mode, Vec::new());
        bell.play_eat();
        bell.play_fail();
        assert_eq!(bell.out, expected);
    }
}
