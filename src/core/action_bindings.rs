use crate::core::event::{Action, NavAction};
use crate::core::router::Route;
use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn key(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub fn from_key_event(event: &KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}

pub struct ActionBindings<A> {
    bindings: HashMap<KeyBinding, A>,
}

impl<A: Clone> ActionBindings<A> {
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    pub fn bind(&mut self, key: KeyBinding, action: A) {
        self.bindings.insert(key, action);
    }

    pub fn unbind(&mut self, key: &KeyBinding) {
        self.bindings.remove(key);
    }

    pub fn handle_key(&self, key_event: &KeyEvent) -> Option<A> {
        let binding = KeyBinding::from_key_event(key_event);
        self.bindings.get(&binding).cloned()
    }
}

impl ActionBindings<Action> {
    pub fn registration() -> Self {
        let mut bindings = Self::empty();
        bindings.bind(KeyBinding::ctrl(KeyCode::Char('c')), Action::Exit);
        bindings.bind(KeyBinding::key(KeyCode::Esc), Action::Exit);

        bindings.bind(KeyBinding::key(KeyCode::Tab), Action::NextFocus);
        bindings.bind(KeyBinding::key(KeyCode::BackTab), Action::PrevFocus);
        bindings.bind(
            KeyBinding::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            Action::PrevFocus,
        );

        bindings.bind(KeyBinding::ctrl(KeyCode::Char('s')), Action::Submit);

        bindings.bind(KeyBinding::ctrl(KeyCode::Backspace), Action::DeleteWord);
        bindings.bind(KeyBinding::ctrl(KeyCode::Char('w')), Action::DeleteWord);
        bindings.bind(KeyBinding::ctrl(KeyCode::Delete), Action::DeleteWordForward);
        bindings
    }
}

impl ActionBindings<NavAction> {
    pub fn routes() -> Self {
        let mut bindings = Self::empty();
        bindings.bind(KeyBinding::ctrl(KeyCode::Char('c')), NavAction::Exit);
        bindings.bind(KeyBinding::key(KeyCode::Esc), NavAction::Exit);
        bindings.bind(KeyBinding::key(KeyCode::Char('q')), NavAction::Exit);

        for (idx, route) in Route::ALL.into_iter().enumerate() {
            let digit = char::from_digit(idx as u32 + 1, 10).unwrap_or('0');
            bindings.bind(KeyBinding::key(KeyCode::Char(digit)), NavAction::Go(route));
        }
        bindings.bind(KeyBinding::key(KeyCode::Char('h')), NavAction::Go(Route::Home));
        bindings.bind(KeyBinding::key(KeyCode::Char('a')), NavAction::Go(Route::About));
        bindings.bind(KeyBinding::key(KeyCode::Char('c')), NavAction::Go(Route::Contact));

        bindings.bind(KeyBinding::key(KeyCode::Right), NavAction::NextLink);
        bindings.bind(KeyBinding::key(KeyCode::Tab), NavAction::NextLink);
        bindings.bind(KeyBinding::key(KeyCode::Left), NavAction::PrevLink);
        bindings.bind(KeyBinding::key(KeyCode::BackTab), NavAction::PrevLink);
        bindings.bind(
            KeyBinding::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            NavAction::PrevLink,
        );
        bindings.bind(KeyBinding::key(KeyCode::Enter), NavAction::ActivateLink);
        bindings.bind(KeyBinding::key(KeyCode::Backspace), NavAction::Back);
        bindings
    }
}

impl Default for ActionBindings<Action> {
    fn default() -> Self {
        Self::registration()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_bindings() {
        let bindings = ActionBindings::registration();
        assert_eq!(
            bindings.handle_key(&KeyEvent::ctrl(KeyCode::Char('s'))),
            Some(Action::Submit)
        );
        assert_eq!(
            bindings.handle_key(&KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)),
            Some(Action::PrevFocus)
        );
        assert_eq!(bindings.handle_key(&KeyEvent::plain(KeyCode::Char('s'))), None);
    }

    #[test]
    fn route_digits_follow_link_order() {
        let bindings = ActionBindings::routes();
        assert_eq!(
            bindings.handle_key(&KeyEvent::plain(KeyCode::Char('2'))),
            Some(NavAction::Go(Route::About))
        );
        assert_eq!(
            bindings.handle_key(&KeyEvent::plain(KeyCode::Char('3'))),
            Some(NavAction::Go(Route::Contact))
        );
    }

    #[test]
    fn unbind_removes_binding() {
        let mut bindings = ActionBindings::routes();
        let key = KeyBinding::key(KeyCode::Char('q'));
        bindings.unbind(&key);
        assert_eq!(bindings.handle_key(&KeyEvent::plain(KeyCode::Char('q'))), None);
    }
}
