pub mod ports;
pub mod prompts;
pub mod services;
pub mod value_objects;

pub use ports::*;
pub use value_objects::*;
