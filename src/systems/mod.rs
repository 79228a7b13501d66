//! Application systems
//!
//! The console session and the line I/O it runs on, kept out of main.rs so
//! they can be driven from tests with in-memory readers and writers.

mod console;
mod session;

pub use console::Console;
pub use session::Session;
