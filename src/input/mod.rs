pub mod button_input;
pub mod input;
pub mod select_input;
pub mod text_input;
pub mod validators;

pub use button_input::ButtonInput;
pub use input::{Input, InputBase, InputCaps, KeyResult};
pub use select_input::{SelectInput, SelectOption};
pub use text_input::TextInput;
