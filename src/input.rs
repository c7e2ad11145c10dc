use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Action {
    TogglePause,
    /// Lengthen the inter-generation delay.
    Slower,
    /// Shorten the inter-generation delay.
    Faster,
    Randomize,
    Quit,
}

/// Block for up to `window`, collecting any actions typed in the meantime.
/// The window doubles as the inter-generation delay.
pub(crate) fn wait_actions(window: Duration) -> anyhow::Result<Vec<Action>> {
    let mut out = Vec::new();
    let deadline = Instant::now() + window;
    loop {
        let left = deadline.saturating_duration_since(Instant::now());
        if !event::poll(left)? {
            break;
        }
        if let Event::Key(k) = event::read()? {
            if k.kind == KeyEventKind::Press || k.kind == KeyEventKind::Repeat {
                if let Some(action) = map_key(k.code, k.modifiers) {
                    out.push(action);
                    if action == Action::Quit || out.len() >= 32 {
                        break;
                    }
                }
            }
        }
        // Resize is picked up by the size check each frame.
    }
    Ok(out)
}

fn map_key(code: KeyCode, mods: KeyModifiers) -> Option<Action> {
    if code == KeyCode::Char('c') && mods.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char(' ') => Some(Action::TogglePause),
        KeyCode::Char('>') | KeyCode::Right => Some(Action::Slower),
        KeyCode::Char('<') | KeyCode::Left => Some(Action::Faster),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Randomize),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_bindings() {
        let none = KeyModifiers::empty();
        assert_eq!(map_key(KeyCode::Char('s'), none), Some(Action::TogglePause));
        assert_eq!(map_key(KeyCode::Char('>'), none), Some(Action::Slower));
        assert_eq!(map_key(KeyCode::Left, none), Some(Action::Faster));
        assert_eq!(map_key(KeyCode::Char('r'), none), Some(Action::Randomize));
        assert_eq!(map_key(KeyCode::Char('q'), none), Some(Action::Quit));
        assert_eq!(
            map_key(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(Action::Quit)
        );
        assert_eq!(map_key(KeyCode::Char('z'), none), None);
    }
}
