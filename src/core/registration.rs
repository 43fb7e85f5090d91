use crate::core::confirm::Confirm;
use crate::core::validation::{self, ValidationErrors};
use std::fmt;

pub const DEFAULT_CLEAR_PROMPT: &str = "Do you really want to remove all entries?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Course,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Course];

    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Course => "course",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Full Name",
            Field::Email => "Email Address",
            Field::Course => "Course",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub course: String,
}

impl FormData {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Course => &self.course,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Course => self.course = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u64);

impl EntryId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic id source; ids are never reused within one session.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> EntryId {
        self.last += 1;
        EntryId(self.last)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    id: EntryId,
    name: String,
    email: String,
    course: String,
}

impl Entry {
    fn from_form(id: EntryId, form: FormData) -> Self {
        Self {
            id,
            name: form.name,
            email: form.email,
            course: form.course,
        }
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn course(&self) -> &str {
        &self.course
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Course => &self.course,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted(EntryId),
    Rejected(ValidationErrors),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted(_))
    }
}

/// State of the registration form: in-progress input, per-field errors and
/// the accepted entries in display order.
#[derive(Debug, Clone)]
pub struct Registration {
    form: FormData,
    errors: ValidationErrors,
    entries: Vec<Entry>,
    ids: IdGenerator,
    clear_prompt: String,
}

impl Registration {
    pub fn new() -> Self {
        Self {
            form: FormData::default(),
            errors: ValidationErrors::new(),
            entries: Vec::new(),
            ids: IdGenerator::new(),
            clear_prompt: DEFAULT_CLEAR_PROMPT.to_string(),
        }
    }

    pub fn with_clear_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.clear_prompt = prompt.into();
        self
    }

    pub fn form(&self) -> &FormData {
        &self.form
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Stores the new value and drops a stale error on that field only.
    pub fn edit_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value.into());
        if self.errors.clear_field(field) {
            tracing::debug!(field = %field, "cleared stale validation error");
        }
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        let errors = validation::validate(&self.form);
        if !errors.is_empty() {
            tracing::debug!(count = errors.len(), "submission rejected");
            self.errors = errors.clone();
            return SubmitOutcome::Rejected(errors);
        }

        let id = self.ids.next_id();
        let form = std::mem::take(&mut self.form);
        self.entries.push(Entry::from_form(id, form));
        self.errors.clear();
        tracing::info!(id = id.get(), total = self.entries.len(), "entry registered");
        SubmitOutcome::Accepted(id)
    }

    /// Removes the entry with `id`. Unknown ids are ignored.
    pub fn delete(&mut self, id: EntryId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        let removed = self.entries.len() != before;
        if removed {
            tracing::info!(id = id.get(), total = self.entries.len(), "entry deleted");
        }
        removed
    }

    /// Empties the list only after `confirm` agrees. Nothing is asked when
    /// the list is already empty.
    pub fn clear_all(&mut self, confirm: &mut dyn Confirm) -> bool {
        if self.entries.is_empty() {
            return false;
        }
        if !confirm.confirm(&self.clear_prompt) {
            tracing::debug!("clear all cancelled");
            return false;
        }
        let removed = self.entries.len();
        self.entries.clear();
        tracing::info!(removed, "all entries cleared");
        true
    }
}

impl Default for Registration {
    fn default() -> Self {
        Self::new()
    }
}
