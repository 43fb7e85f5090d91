use crate::app::App;
use crate::core::action_bindings::ActionBindings;
use crate::core::confirm::Confirm;
use crate::core::event::Action;
use crate::core::event_queue::{AppEvent, EventQueue};
use crate::core::reducer::{Effect, Reducer};
use crate::core::registration::Registration;
use crate::core::state::AppState;
use crate::input::Input;
use crate::terminal::{KeyEvent, TerminalSize};
use crate::ui::form_view::render_registration;
use crate::ui::frame::Frame;
use crate::ui::theme::Theme;
use std::time::Instant;

pub struct RegisterApp {
    pub state: AppState,
    action_bindings: ActionBindings<Action>,
    event_queue: EventQueue,
    theme: Theme,
}

impl RegisterApp {
    pub fn new(courses: &[String], clear_prompt: &str) -> Self {
        let registration = Registration::new().with_clear_prompt(clear_prompt);
        Self {
            state: AppState::new(registration, courses),
            action_bindings: ActionBindings::registration(),
            event_queue: EventQueue::new(),
            theme: Theme::default_theme(),
        }
    }

    fn dispatch_event(&mut self, event: AppEvent, confirm: &mut dyn Confirm) {
        match event {
            AppEvent::Key(key_event) => {
                let focused_input = self
                    .state
                    .engine
                    .focused()
                    .field()
                    .map(|field| self.state.inputs.field(field));
                let captured = focused_input.is_some_and(|input| {
                    let captured = input
                        .capabilities()
                        .captures_key(key_event.code, key_event.modifiers);
                    if captured {
                        tracing::trace!(input = input.id(), ?key_event, "key captured by input");
                    }
                    captured
                });

                let action = match self.action_bindings.handle_key(&key_event) {
                    Some(action) if !captured => action,
                    _ => Action::InputKey(key_event),
                };
                let effects = Reducer::reduce(&mut self.state, action, confirm);
                self.apply_effects(effects);
            }
            AppEvent::Action(action) => {
                let effects = Reducer::reduce(&mut self.state, action, confirm);
                self.apply_effects(effects);
            }
            AppEvent::InputChanged { field, value } => {
                tracing::trace!(field = field.key(), len = value.len(), "input changed");
            }
            notification => {
                match &notification {
                    AppEvent::EntryAdded(id) => tracing::info!(%id, "entry added"),
                    AppEvent::EntryRemoved(id) => tracing::info!(%id, "entry removed"),
                    AppEvent::EntriesCleared { count } => tracing::info!(count, "entries cleared"),
                    AppEvent::SubmitRejected { fields } => {
                        tracing::debug!(?fields, "submit rejected")
                    }
                    _ => {}
                }
                let effects = Reducer::on_event(&mut self.state, &notification);
                self.apply_effects(effects);
            }
        }
    }

    fn apply_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Emit(event) => self.event_queue.emit(event),
                Effect::EmitAfter(event, delay) => self.event_queue.emit_after(event, delay),
                Effect::CancelClearStatus => self.event_queue.cancel_clear_status(),
            }
        }
    }
}

impl App for RegisterApp {
    fn handle_key(&mut self, key_event: KeyEvent) {
        self.event_queue.emit(AppEvent::Key(key_event));
    }

    fn tick(&mut self, confirm: &mut dyn Confirm) -> bool {
        let mut processed_any = false;
        loop {
            let now = Instant::now();
            let Some(event) = self.event_queue.next_ready(now) else {
                break;
            };
            self.dispatch_event(event, confirm);
            processed_any = true;
        }
        processed_any
    }

    fn frame(&self, size: TerminalSize) -> Frame {
        render_registration(&self.state, &self.theme, size)
    }

    fn should_exit(&self) -> bool {
        self.state.should_exit
    }
}
