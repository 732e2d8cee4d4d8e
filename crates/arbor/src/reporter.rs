//! Built-in reporters.

mod console;
mod log;

pub use self::{console::ConsoleReporter, log::LogReporter};
