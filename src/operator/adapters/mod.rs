//! Prompt implementations.

pub mod console;
pub mod scripted;

pub use console::ConsolePrompt;
pub use scripted::{ScriptedAnswer, ScriptedPrompt};
