//! Console views.

mod banner;
mod console;
mod layout;

pub use banner::{capabilities, farewell, greeting, welcome};
pub use console::ConsoleDisplay;
