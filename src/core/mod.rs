//! Core application primitives (scanning, scheduling, HTTP surface)

pub mod http;
pub mod scanner;
pub mod scheduler;

pub use http::*;
pub use scanner::*;
pub use scheduler::*;
