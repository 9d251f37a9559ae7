pub mod global_context;
pub mod loading;
pub mod modal;
pub mod steps;

pub use loading::LoadingService;
pub use modal::ModalService;
