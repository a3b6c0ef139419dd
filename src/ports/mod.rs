mod project_context;
mod prompt;
mod runtime_engine;

pub use project_context::ProjectContext;
pub use prompt::OverwritePrompt;
pub use runtime_engine::RuntimeEngine;
