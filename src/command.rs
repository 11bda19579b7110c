use crate::game::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Steer(Direction),
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Quit),
            (_, KeyCode::Esc) => Some(Command::Quit),
            (m, code) if normal_modifiers.contains(m) => match code {
                KeyCode::Char('q' | 'Q') => Some(Command::Quit),
                KeyCode::Char('w' | 'W' | 'k' | 'K') | KeyCode::Up => {
                    Some(Command::Steer(Direction::North))
                }
                KeyCode::Char('s' | 'S' | 'j' | 'J') | KeyCode::Down => {
                    Some(Command::Steer(Direction::South))
                }
                KeyCode::Char('a' | 'A' | 'h' | 'H') | KeyCode::Left => {
                    Some(Command::Steer(Direction::West))
                }
                KeyCode::Char('d' | 'D' | 'l' | 'L') | KeyCode::Right => {
                    Some(Command::Steer(Direction::East))
                }
                _ => None,
            },
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), Some(Command::Quit))]
    #[case(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE), Some(Command::Quit))]
    #[case(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE), Some(Command::Quit))]
    #[case(
        KeyEvent::new(KeyCode::Char('w'), KeyModifiers::NONE),
        Some(Command::Steer(Direction::North))
    )]
    #[case(
        KeyEvent::new(KeyCode::Char('W'), KeyModifiers::SHIFT),
        Some(Command::Steer(Direction::North))
    )]
    #[case(
        KeyEvent::new(KeyCode::Up, KeyModifiers::NONE),
        Some(Command::Steer(Direction::North))
    )]
    #[case(
        KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE),
        Some(Command::Steer(Direction::South))
    )]
    #[case(
        KeyEvent::new(KeyCode::Left, KeyModifiers::NONE),
        Some(Command::Steer(Direction::West))
    )]
    #[case(
        KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE),
        Some(Command::Steer(Direction::East))
    )]
    #[case(
        KeyEvent::new(KeyCode::Char('l'), KeyModifiers::NONE),
        Some(Command::Steer(Direction::East))
    )]
    #[case(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL), None)]
    #[case(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE), None)]
    #[case(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE), None)]
    fn test_from_key_event(#[case] ev: KeyEvent, #[case] cmd: Option<Command>) {
        assert_eq!(Command::from_key_event(ev), cmd);
    }
}
