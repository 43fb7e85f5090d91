use crate::core::registration::EntryId;
use crate::core::router::Route;
use crate::terminal::KeyEvent;

/// Registration screen actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Exit,
    Submit,
    NextFocus,
    PrevFocus,
    DeleteWord,
    DeleteWordForward,
    InputKey(KeyEvent),
    SelectRow(isize),
    DeleteSelected,
    DeleteEntry(EntryId),
    ClearAll,
    ClearStatus,
}

/// Routing demo actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavAction {
    Exit,
    Go(Route),
    Navigate(String),
    NextLink,
    PrevLink,
    ActivateLink,
    Back,
}
