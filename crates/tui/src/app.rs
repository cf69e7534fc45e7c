use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use showcase_core::{PhaseIndex, Showcase};

/// What a keypress asks the event loop to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Select(PhaseIndex),
    Quit,
    Ignore,
}

/// Map a key to an action given the current selection.
pub fn action_for_key(key: &KeyEvent, showcase: &Showcase) -> Action {
    if key.kind != KeyEventKind::Press {
        return Action::Ignore;
    }
    let active = showcase.active();
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => Action::Select(active.next()),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => Action::Select(active.prev()),
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(|d| (d as usize).checked_sub(1))
            .and_then(|i| PhaseIndex::new(i).ok())
            .map_or(Action::Ignore, Action::Select),
        _ => Action::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn index(i: usize) -> PhaseIndex {
        PhaseIndex::new(i).expect("index within timeline")
    }

    #[test]
    fn arrows_cycle_with_wrap() {
        let mut view = Showcase::new();
        assert_eq!(
            action_for_key(&press(KeyCode::Left), &view),
            Action::Select(index(2))
        );
        view.select_phase(index(2));
        assert_eq!(
            action_for_key(&press(KeyCode::Right), &view),
            Action::Select(index(0))
        );
        assert_eq!(
            action_for_key(&press(KeyCode::Tab), &view),
            Action::Select(index(0))
        );
    }

    #[test]
    fn digits_select_directly() {
        let view = Showcase::new();
        assert_eq!(
            action_for_key(&press(KeyCode::Char('2')), &view),
            Action::Select(index(1))
        );
        assert_eq!(action_for_key(&press(KeyCode::Char('0')), &view), Action::Ignore);
        assert_eq!(action_for_key(&press(KeyCode::Char('4')), &view), Action::Ignore);
    }

    #[test]
    fn quit_keys() {
        let view = Showcase::new();
        assert_eq!(action_for_key(&press(KeyCode::Char('q')), &view), Action::Quit);
        assert_eq!(action_for_key(&press(KeyCode::Esc), &view), Action::Quit);
    }

    #[test]
    fn releases_are_ignored() {
        let view = Showcase::new();
        let mut key = press(KeyCode::Right);
        key.kind = KeyEventKind::Release;
        assert_eq!(action_for_key(&key, &view), Action::Ignore);
    }
}
