pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use ports::*;
pub use services::{classify_diet, classify_weight, compute_bmi, overall_category};
pub use value_objects::*;
