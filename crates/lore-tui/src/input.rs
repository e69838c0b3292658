//! Input handling - convert key events to viewer actions

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Something the viewer can do in response to a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    NextRace,
    PrevRace,
    FirstRace,
    LastRace,
    ScrollDown,
    ScrollUp,
    CycleMode,
    ToggleLanguage,
    Quit,
}

/// Map a key to an action; vi keys and arrows both work
pub fn key_to_action(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('n') => Some(Action::NextRace),
            KeyCode::Char('p') => Some(Action::PrevRace),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => Some(Action::NextRace),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevRace),
        KeyCode::Char('g') | KeyCode::Home => Some(Action::FirstRace),
        KeyCode::Char('G') | KeyCode::End => Some(Action::LastRace),
        KeyCode::Char(' ') | KeyCode::PageDown => Some(Action::ScrollDown),
        KeyCode::Char('b') | KeyCode::PageUp => Some(Action::ScrollUp),
        KeyCode::Char('m') | KeyCode::Tab => Some(Action::CycleMode),
        KeyCode::Char('L') => Some(Action::ToggleLanguage),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}
