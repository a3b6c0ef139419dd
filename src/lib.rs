//! laravels: prepare LaravelS runtime configuration and publish its
//! bootstrap artifacts into a host Laravel/Lumen project.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use app::{
    AppContext,
    commands::{config, info, publish},
};
use services::{ConsolePrompt, FilesystemProjectContext, SwooleRuntime};

pub use app::commands::publish::PublishedFile;
pub use domain::{AppError, CliOverrides, Operation};

/// Normalize, validate, and persist the merged configuration artifact to
/// `storage/laravels.json` in the current project.
pub fn prepare_config(overrides: &CliOverrides) -> Result<(), AppError> {
    let project = FilesystemProjectContext::current()?;
    let mut ctx = AppContext::new(project, SwooleRuntime);
    config::execute(&mut ctx, overrides)?;
    Ok(())
}

/// Install the config template and launcher scripts into the current
/// project tree, reporting one line per installed file.
pub fn publish() -> Result<(), AppError> {
    let project = FilesystemProjectContext::current()?;
    let mut ctx = AppContext::new(project, SwooleRuntime);
    let published = publish::execute(&mut ctx, &ConsolePrompt)?;
    for file in &published {
        println!(
            "{} file [{}] To [{}]",
            file.operation.label(),
            file.source.display(),
            file.destination.display()
        );
    }
    Ok(())
}

/// Print the banner and component versions.
pub fn info() -> Result<(), AppError> {
    let project = FilesystemProjectContext::current()?;
    let ctx = AppContext::new(project, SwooleRuntime);
    println!("{}", info::LOGO);
    println!("Speed up your Laravel/Lumen");
    for (component, version) in info::execute(&ctx) {
        println!("{component:<12} {version}");
    }
    Ok(())
}
