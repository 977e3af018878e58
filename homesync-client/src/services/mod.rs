mod activity_log;
mod command_service;

pub use activity_log::*;
pub use command_service::*;
