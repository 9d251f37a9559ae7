pub mod identity;
pub mod store;
pub mod ui;
