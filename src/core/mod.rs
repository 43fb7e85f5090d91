pub mod action_bindings;
pub mod confirm;
pub mod event;
pub mod event_queue;
pub mod form_engine;
pub mod navigation;
pub mod reducer;
pub mod registration;
pub mod router;
pub mod state;
pub mod validation;

pub use confirm::{Confirm, FixedAnswer};
pub use registration::{Entry, EntryId, Field, FormData, Registration, SubmitOutcome};
pub use router::{Route, Router, StaticRouter, View};
pub use validation::ValidationErrors;
