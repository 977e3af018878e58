mod device;

pub use device::*;

pub type Id = i32;
