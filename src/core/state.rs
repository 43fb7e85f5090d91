use crate::core::form_engine::{FocusTarget, FormEngine};
use crate::core::registration::{EntryId, Field, Registration};
use crate::input::{ButtonInput, Input, SelectInput, SelectOption, TextInput};
use crate::ui::style::{Color, Style};

pub const COURSE_PLACEHOLDER: &str = "Select a course";

pub const DEFAULT_COURSES: [&str; 6] = [
    "Computer Science",
    "Information Technology",
    "Electronics Engineering",
    "Mechanical Engineering",
    "Civil Engineering",
    "Business Administration",
];

/// Editing widgets bound to the form fields, plus the two buttons.
pub struct FieldInputs {
    pub name: TextInput,
    pub email: TextInput,
    pub course: SelectInput,
    pub submit: ButtonInput,
    pub clear: ButtonInput,
}

impl FieldInputs {
    pub fn new(courses: &[String]) -> Self {
        let mut options = vec![SelectOption::new(COURSE_PLACEHOLDER, "")];
        options.extend(courses.iter().cloned().map(SelectOption::plain));

        Self {
            name: TextInput::new(Field::Name.key(), Field::Name.label())
                .with_placeholder("Your full name")
                .with_min_width(24),
            email: TextInput::new(Field::Email.key(), Field::Email.label())
                .with_placeholder("example@gmail.com")
                .with_min_width(24),
            course: SelectInput::new(Field::Course.key(), Field::Course.label(), options)
                .with_min_width(24),
            submit: ButtonInput::new("submit", "Register Student")
                .with_style(Style::new().color(Color::Blue).bold()),
            clear: ButtonInput::new("clear", "Clear All")
                .with_style(Style::new().color(Color::Red).bold()),
        }
    }

    pub fn field(&self, field: Field) -> &dyn Input {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Course => &self.course,
        }
    }

    pub fn field_mut(&mut self, field: Field) -> &mut dyn Input {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Course => &mut self.course,
        }
    }

    pub fn reset(&mut self) {
        for field in Field::ALL {
            self.field_mut(field).set_value(String::new());
        }
    }
}

pub struct AppState {
    pub registration: Registration,
    pub inputs: FieldInputs,
    pub engine: FormEngine,
    pub selected_row: usize,
    pub status: Option<String>,
    pub should_exit: bool,
}

impl AppState {
    pub fn new(registration: Registration, courses: &[String]) -> Self {
        let mut state = Self {
            registration,
            inputs: FieldInputs::new(courses),
            engine: FormEngine::new(),
            selected_row: 0,
            status: None,
            should_exit: false,
        };
        state.sync_focus();
        state
    }

    pub fn with_default_courses() -> Self {
        let courses: Vec<String> = DEFAULT_COURSES.iter().map(|c| c.to_string()).collect();
        Self::new(Registration::new(), &courses)
    }

    pub fn selected_entry(&self) -> Option<EntryId> {
        self.registration
            .entries()
            .get(self.selected_row)
            .map(|entry| entry.id())
    }

    /// Keeps the focus flags on widgets, the tab order and the row
    /// selection consistent with the current entry list.
    pub fn sync_focus(&mut self) {
        self.engine.sync(!self.registration.is_empty());
        let last = self.registration.len().saturating_sub(1);
        self.selected_row = self.selected_row.min(last);

        let focused = self.engine.focused();
        for field in Field::ALL {
            let input = self.inputs.field_mut(field);
            input.set_focused(focused.field() == Some(field));
        }
        self.inputs
            .submit
            .set_focused(focused == FocusTarget::SubmitButton);
        self.inputs
            .clear
            .set_focused(focused == FocusTarget::ClearButton);
    }
}

#[cfg(test)]
mod tests {
    use super::AppState;
    use crate::core::registration::Field;
    use crate::input::Input;

    #[test]
    fn inputs_are_keyed_by_field() {
        let state = AppState::with_default_courses();
        for field in Field::ALL {
            let input = state.inputs.field(field);
            assert_eq!(input.id(), field.key());
            assert_eq!(input.label(), field.label());
        }
        assert_eq!(state.inputs.course.value(), "");
        assert_eq!(state.inputs.course.selected_index(), 0);
    }
}
