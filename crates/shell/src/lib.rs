//! Interactive text shell over the workshop inventory.
//!
//! Generic over its reader/writer so the same loop drives a terminal session
//! and in-memory scripted sessions in tests.

pub mod errors;
pub mod menu;
pub mod render;
pub mod shell;

pub use errors::ShellError;
pub use menu::MenuChoice;
pub use shell::Shell;
