pub mod field;
pub mod form_view;
pub mod frame;
pub mod frame_json;
pub mod layout;
pub mod pages;
pub mod span;
pub mod style;
pub mod table;
pub mod theme;

pub use frame::{CursorPos, Frame, Line};
pub use theme::Theme;
