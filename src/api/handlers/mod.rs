//! HTTP request handlers.

mod employees;
mod system;


pub use employees::*;
pub use system::*;
