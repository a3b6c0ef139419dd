//! The `info` action: banner and component versions.

use crate::app::AppContext;
use crate::ports::{ProjectContext, RuntimeEngine};

pub const LOGO: &str = r"
 _                               _  _____
| |                             | |/ ____|
| |     __ _ _ __ __ ___   _____| | (___
| |    / _` | '__/ _` \ \ / / _ \ |\___ \
| |___| (_| | | | (_| |\ V /  __/ |____) |
|______\__,_|_|  \__,_| \_/ \___|_|_____/
";

/// Component/version rows for the banner. Never fails; an unreachable
/// runtime shows as "-".
pub fn execute<C: ProjectContext, R: RuntimeEngine>(
    ctx: &AppContext<C, R>,
) -> Vec<(&'static str, String)> {
    let engine = match ctx.runtime().version() {
        Ok(version) => version.to_string(),
        Err(_) => "-".to_string(),
    };
    vec![
        ("LaravelS", env!("CARGO_PKG_VERSION").to_string()),
        ("Swoole", engine),
        ("Framework", ctx.project().variant().label().to_string()),
    ]
}
