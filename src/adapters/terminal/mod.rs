//! Terminal presentation layer.
//!
//! Draws step views as text, parses typed commands into intents, and owns
//! the print and reset-confirmation concerns that stay out of the core.

mod command;
mod renderer;
mod session;

pub use command::TerminalCommand;
pub use renderer::{render, render_help, RESET_CONFIRMATION};
pub use session::TerminalSession;
