use crate::ports::{ProjectContext, RuntimeEngine};

/// Dependencies threaded through command execution.
pub struct AppContext<C: ProjectContext, R: RuntimeEngine> {
    project: C,
    runtime: R,
}

impl<C: ProjectContext, R: RuntimeEngine> AppContext<C, R> {
    /// Create a new application context.
    pub fn new(project: C, runtime: R) -> Self {
        Self { project, runtime }
    }

    /// Get a reference to the project context.
    pub fn project(&self) -> &C {
        &self.project
    }

    /// Mutable access, for the configuration load step.
    pub fn project_mut(&mut self) -> &mut C {
        &mut self.project
    }

    /// Get a reference to the runtime engine.
    pub fn runtime(&self) -> &R {
        &self.runtime
    }
}
