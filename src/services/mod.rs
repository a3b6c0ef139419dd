pub mod assets;
mod console_prompt;
mod filesystem_context;
mod swoole_runtime;

pub use console_prompt::ConsolePrompt;
pub use filesystem_context::FilesystemProjectContext;
pub use swoole_runtime::{SwooleRuntime, VERSION_ENV};
