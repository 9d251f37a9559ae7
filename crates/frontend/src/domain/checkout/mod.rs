pub mod api;
pub mod assembler;
pub mod gate;
pub mod ui;
