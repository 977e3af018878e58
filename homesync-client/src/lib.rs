pub mod app;
pub mod errors;
pub mod registry;
pub mod services;
pub mod settings;
pub mod sync;
pub mod updates;
