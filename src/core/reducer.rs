use crate::core::confirm::Confirm;
use crate::core::event::Action;
use crate::core::event_queue::AppEvent;
use crate::core::form_engine::FocusTarget;
use crate::core::registration::{Field, SubmitOutcome};
use crate::core::state::AppState;
use crate::input::{Input, KeyResult};
use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

pub const STATUS_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Emit(AppEvent),
    EmitAfter(AppEvent, Duration),
    CancelClearStatus,
}

pub struct Reducer;

impl Reducer {
    pub fn reduce(state: &mut AppState, action: Action, confirm: &mut dyn Confirm) -> Vec<Effect> {
        match action {
            Action::Exit => {
                state.should_exit = true;
                vec![]
            }
            Action::NextFocus => Self::move_focus(state, 1),
            Action::PrevFocus => Self::move_focus(state, -1),
            Action::Submit => Self::handle_submit(state),
            Action::DeleteWord => Self::edit_focused(state, |input| input.delete_word()),
            Action::DeleteWordForward => {
                Self::edit_focused(state, |input| input.delete_word_forward())
            }
            Action::InputKey(key) => Self::handle_key(state, key, confirm),
            Action::SelectRow(delta) => {
                Self::select_row(state, delta);
                vec![]
            }
            Action::DeleteSelected => match state.selected_entry() {
                Some(id) => Self::reduce(state, Action::DeleteEntry(id), confirm),
                None => vec![],
            },
            Action::DeleteEntry(id) => {
                if !state.registration.delete(id) {
                    return vec![];
                }
                state.sync_focus();
                vec![Effect::Emit(AppEvent::EntryRemoved(id))]
            }
            Action::ClearAll => {
                let count = state.registration.len();
                if !state.registration.clear_all(confirm) {
                    return vec![];
                }
                state.selected_row = 0;
                state.sync_focus();
                vec![Effect::Emit(AppEvent::EntriesCleared { count })]
            }
            Action::ClearStatus => {
                state.status = None;
                vec![]
            }
        }
    }

    /// Turns notifications into a transient status line.
    pub fn on_event(state: &mut AppState, event: &AppEvent) -> Vec<Effect> {
        let message = match event {
            AppEvent::EntryAdded(_) => "Student registered".to_string(),
            AppEvent::EntryRemoved(_) => "Entry removed".to_string(),
            AppEvent::EntriesCleared { count } => match count {
                1 => "Removed 1 entry".to_string(),
                n => format!("Removed {n} entries"),
            },
            AppEvent::SubmitRejected { .. } => "Please fix the highlighted fields".to_string(),
            _ => return vec![],
        };
        state.status = Some(message);
        vec![
            Effect::CancelClearStatus,
            Effect::EmitAfter(AppEvent::Action(Action::ClearStatus), STATUS_TIMEOUT),
        ]
    }

    fn move_focus(state: &mut AppState, direction: isize) -> Vec<Effect> {
        state.engine.move_focus(direction);
        state.sync_focus();
        vec![]
    }

    fn focus(state: &mut AppState, target: FocusTarget) {
        state.engine.focus(target);
        state.sync_focus();
    }

    fn handle_submit(state: &mut AppState) -> Vec<Effect> {
        match state.registration.submit() {
            SubmitOutcome::Accepted(id) => {
                state.inputs.reset();
                Self::focus(state, FocusTarget::Input(Field::Name));
                vec![Effect::Emit(AppEvent::EntryAdded(id))]
            }
            SubmitOutcome::Rejected(errors) => {
                if let Some(first) = errors.first_field() {
                    Self::focus(state, FocusTarget::Input(first));
                }
                let fields = errors.iter().map(|(field, _)| field).collect();
                vec![Effect::Emit(AppEvent::SubmitRejected { fields })]
            }
        }
    }

    fn edit_focused<F>(state: &mut AppState, update: F) -> Vec<Effect>
    where
        F: FnOnce(&mut dyn Input),
    {
        let Some(field) = state.engine.focused().field() else {
            return vec![];
        };
        let input = state.inputs.field_mut(field);
        let before = input.value();
        update(input);
        let after = input.value();
        Self::sync_field(state, field, before, after)
    }

    fn sync_field(state: &mut AppState, field: Field, before: String, after: String) -> Vec<Effect> {
        if before == after {
            return vec![];
        }
        state.registration.edit_field(field, after.clone());
        vec![Effect::Emit(AppEvent::InputChanged { field, value: after })]
    }

    fn handle_key(state: &mut AppState, key: KeyEvent, confirm: &mut dyn Confirm) -> Vec<Effect> {
        match state.engine.focused() {
            FocusTarget::Input(field) => {
                let input = state.inputs.field_mut(field);
                let before = input.value();
                let result = input.handle_key(key.code, key.modifiers);
                let after = input.value();
                let mut effects = Self::sync_field(state, field, before, after);
                match result {
                    KeyResult::Submit => effects.extend(Self::move_focus(state, 1)),
                    KeyResult::NotHandled => effects.extend(Self::arrow_focus(state, key)),
                    KeyResult::Handled => {}
                }
                effects
            }
            FocusTarget::SubmitButton => match state.inputs.submit.handle_key(key.code, key.modifiers) {
                KeyResult::Submit => Self::handle_submit(state),
                _ => Self::arrow_focus(state, key),
            },
            FocusTarget::ClearButton => match state.inputs.clear.handle_key(key.code, key.modifiers) {
                KeyResult::Submit => Self::reduce(state, Action::ClearAll, confirm),
                _ => Self::arrow_focus(state, key),
            },
            FocusTarget::Table => Self::handle_table_key(state, key, confirm),
        }
    }

    fn handle_table_key(state: &mut AppState, key: KeyEvent, confirm: &mut dyn Confirm) -> Vec<Effect> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return vec![];
        }
        let last = state.registration.len().saturating_sub(1);
        match key.code {
            KeyCode::Up if state.selected_row == 0 => Self::move_focus(state, -1),
            KeyCode::Up => Self::reduce(state, Action::SelectRow(-1), confirm),
            KeyCode::Down if state.selected_row >= last => Self::move_focus(state, 1),
            KeyCode::Down => Self::reduce(state, Action::SelectRow(1), confirm),
            KeyCode::Home => {
                state.selected_row = 0;
                vec![]
            }
            KeyCode::End => {
                state.selected_row = last;
                vec![]
            }
            KeyCode::Delete | KeyCode::Char('d') => Self::reduce(state, Action::DeleteSelected, confirm),
            KeyCode::Char('c') => Self::reduce(state, Action::ClearAll, confirm),
            _ => vec![],
        }
    }

    fn arrow_focus(state: &mut AppState, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Up => Self::move_focus(state, -1),
            KeyCode::Down => Self::move_focus(state, 1),
            _ => vec![],
        }
    }

    fn select_row(state: &mut AppState, delta: isize) {
        let len = state.registration.len();
        if len == 0 {
            state.selected_row = 0;
            return;
        }
        let next = state.selected_row as isize + delta;
        state.selected_row = next.clamp(0, len as isize - 1) as usize;
    }
}
