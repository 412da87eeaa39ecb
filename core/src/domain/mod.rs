pub mod advice;
pub mod common;
pub mod nutrition;
