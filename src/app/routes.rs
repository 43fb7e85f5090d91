use crate::app::App;
use crate::core::action_bindings::ActionBindings;
use crate::core::confirm::Confirm;
use crate::core::event::NavAction;
use crate::core::navigation::NavState;
use crate::terminal::{KeyEvent, TerminalSize};
use crate::ui::frame::Frame;
use crate::ui::pages::render_routes;
use crate::ui::theme::Theme;
use std::collections::VecDeque;

pub struct RoutesApp {
    pub nav: NavState,
    action_bindings: ActionBindings<NavAction>,
    pending: VecDeque<NavAction>,
    theme: Theme,
}

impl RoutesApp {
    pub fn new(start_path: &str) -> Self {
        Self {
            nav: NavState::new(start_path),
            action_bindings: ActionBindings::routes(),
            pending: VecDeque::new(),
            theme: Theme::default_theme(),
        }
    }
}

impl App for RoutesApp {
    fn handle_key(&mut self, key_event: KeyEvent) {
        match self.action_bindings.handle_key(&key_event) {
            Some(action) => self.pending.push_back(action),
            None => tracing::trace!(?key_event, "unbound key"),
        }
    }

    fn tick(&mut self, _confirm: &mut dyn Confirm) -> bool {
        let mut changed = false;
        while let Some(action) = self.pending.pop_front() {
            changed |= self.nav.reduce(action);
        }
        changed
    }

    fn frame(&self, size: TerminalSize) -> Frame {
        render_routes(&self.nav, &self.theme, size)
    }

    fn should_exit(&self) -> bool {
        self.nav.should_exit
    }
}
