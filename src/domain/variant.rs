/// Host application skeleton flavor, resolved once at startup.
///
/// The two variants differ in how the host loads configuration files: the
/// full framework auto-loads everything under `config/`, the minimal one
/// requires each file to be registered manually.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameworkVariant {
    /// Full-featured host (Laravel).
    Full,
    /// Minimal host (Lumen).
    Minimal,
}

impl FrameworkVariant {
    pub fn is_minimal(self) -> bool {
        matches!(self, FrameworkVariant::Minimal)
    }

    pub fn label(self) -> &'static str {
        match self {
            FrameworkVariant::Full => "Laravel",
            FrameworkVariant::Minimal => "Lumen",
        }
    }
}
