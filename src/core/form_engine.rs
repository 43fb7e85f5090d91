use crate::core::registration::Field;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Input(Field),
    SubmitButton,
    Table,
    ClearButton,
}

impl FocusTarget {
    pub fn field(self) -> Option<Field> {
        match self {
            FocusTarget::Input(field) => Some(field),
            _ => None,
        }
    }
}

/// Tab order over the registration screen. The table and the clear button
/// only take part while there are entries to show.
#[derive(Debug, Clone)]
pub struct FormEngine {
    targets: Vec<FocusTarget>,
    focus_index: usize,
}

impl FormEngine {
    pub fn new() -> Self {
        Self {
            targets: Self::targets_for(false),
            focus_index: 0,
        }
    }

    fn targets_for(has_entries: bool) -> Vec<FocusTarget> {
        let mut targets: Vec<FocusTarget> = Field::ALL.into_iter().map(FocusTarget::Input).collect();
        targets.push(FocusTarget::SubmitButton);
        if has_entries {
            targets.push(FocusTarget::Table);
            targets.push(FocusTarget::ClearButton);
        }
        targets
    }

    pub fn targets(&self) -> &[FocusTarget] {
        &self.targets
    }

    pub fn focused(&self) -> FocusTarget {
        self.targets
            .get(self.focus_index)
            .copied()
            .unwrap_or(FocusTarget::Input(Field::Name))
    }

    pub fn is_focused(&self, target: FocusTarget) -> bool {
        self.focused() == target
    }

    /// Rebuilds the tab order; focus stays put when its target survives,
    /// otherwise it falls back to the submit button.
    pub fn sync(&mut self, has_entries: bool) {
        let current = self.focused();
        self.targets = Self::targets_for(has_entries);
        if !self.focus(current) {
            self.focus(FocusTarget::SubmitButton);
        }
    }

    pub fn focus(&mut self, target: FocusTarget) -> bool {
        match self.targets.iter().position(|t| *t == target) {
            Some(idx) => {
                self.focus_index = idx;
                true
            }
            None => false,
        }
    }

    /// Returns (from, to).
    pub fn move_focus(&mut self, direction: isize) -> (FocusTarget, FocusTarget) {
        let from = self.focused();
        let len = self.targets.len() as isize;
        if len > 0 {
            self.focus_index = ((self.focus_index as isize + direction).rem_euclid(len)) as usize;
        }
        (from, self.focused())
    }
}

impl Default for FormEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_order_without_entries_wraps() {
        let mut engine = FormEngine::new();
        assert_eq!(engine.focused(), FocusTarget::Input(Field::Name));
        engine.move_focus(1);
        engine.move_focus(1);
        engine.move_focus(1);
        assert_eq!(engine.focused(), FocusTarget::SubmitButton);
        engine.move_focus(1);
        assert_eq!(engine.focused(), FocusTarget::Input(Field::Name));
        let (from, to) = engine.move_focus(-1);
        assert_eq!(from, FocusTarget::Input(Field::Name));
        assert_eq!(to, FocusTarget::SubmitButton);
    }

    #[test]
    fn table_targets_follow_entries() {
        let mut engine = FormEngine::new();
        assert!(!engine.focus(FocusTarget::Table));
        engine.sync(true);
        assert!(engine.focus(FocusTarget::ClearButton));
        engine.sync(false);
        assert_eq!(engine.focused(), FocusTarget::SubmitButton);
        assert_eq!(engine.targets().len(), 4);
    }
}
