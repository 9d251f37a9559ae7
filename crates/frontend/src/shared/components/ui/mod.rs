pub mod button;
pub mod checkbox;
pub mod quantity_input;
pub mod select;
pub mod text_input;

pub use button::Button;
pub use checkbox::Checkbox;
pub use quantity_input::QuantityInput;
pub use select::FilterSelect;
pub use text_input::{TextArea, TextInput};
