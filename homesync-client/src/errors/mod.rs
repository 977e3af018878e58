pub mod dispatch;

pub use dispatch::DispatchError;
