use crate::input::KeyCode;
use crate::input::KeyEvent;
use crate::input::KeyModifiers;
use crate::nav::NavDirection;

/// A key the carousel listens for. `modifiers: None` matches the code with any modifiers held.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: Option<KeyModifiers>,
}

impl KeyBinding {
    pub fn any(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: None,
        }
    }

    pub fn exact(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: Some(event.modifiers),
        }
    }

    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.code == event.code
            && self
                .modifiers
                .is_none_or(|m| modifiers_match(m, event.modifiers))
    }
}

fn modifiers_match(pattern: KeyModifiers, event: KeyModifiers) -> bool {
    pattern.shift == event.shift && pattern.ctrl == event.ctrl && pattern.alt == event.alt
}

/// Keys the carousel region intercepts.
///
/// Only `←` and `→` are bound by default, whatever modifiers are held, so `Shift+←` moves the
/// carousel too and never reaches a focused descendant.
#[derive(Clone, Debug)]
pub struct CarouselBindings {
    pub prev: Vec<KeyBinding>,
    pub next: Vec<KeyBinding>,
}

impl Default for CarouselBindings {
    fn default() -> Self {
        Self {
            prev: vec![KeyBinding::any(KeyCode::Left)],
            next: vec![KeyBinding::any(KeyCode::Right)],
        }
    }
}

impl CarouselBindings {
    pub fn action_for(&self, key: &KeyEvent) -> Option<NavDirection> {
        if self.prev.iter().any(|b| b.matches(key)) {
            return Some(NavDirection::Previous);
        }
        if self.next.iter().any(|b| b.matches(key)) {
            return Some(NavDirection::Next);
        }
        None
    }
}
