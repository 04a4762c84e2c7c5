use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::grid::Dir;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Move(Dir),
    Quit,
}

/// Arrow keys (or h/j/k/l) move, q/Esc quits, anything else is ignored.
pub fn command_for(key: KeyEvent) -> Option<Command> {
    match key.kind {
        KeyEventKind::Press | KeyEventKind::Repeat => {}
        _ => return None,
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Command::Move(Dir::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Command::Move(Dir::Down)),
        KeyCode::Left | KeyCode::Char('h') => Some(Command::Move(Dir::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Command::Move(Dir::Right)),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}
