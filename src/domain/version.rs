use std::cmp::Ordering;
use std::fmt;

/// Dotted numeric version (e.g. "4.1.0") used to gate runtime-engine behavior.
#[derive(Debug, Clone)]
pub struct Version {
    segments: Vec<u32>,
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Version {
    /// Parse a version string; returns `None` on any non-numeric segment.
    pub fn parse(s: &str) -> Option<Self> {
        let segments = s
            .trim()
            .split('.')
            .map(|segment| segment.parse::<u32>().ok())
            .collect::<Option<Vec<_>>>()?;
        Some(Self { segments })
    }

    /// Build a version from explicit segments, for fixed thresholds.
    pub fn from_segments(segments: &[u32]) -> Self {
        Self { segments: segments.to_vec() }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.segments.iter().map(u32::to_string).collect();
        write!(f, "{}", rendered.join("."))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        // Missing segments compare as zero, so "4.1" == "4.1.0".
        let len = self.segments.len().max(other.segments.len());
        for idx in 0..len {
            let left = self.segments.get(idx).copied().unwrap_or(0);
            let right = other.segments.get(idx).copied().unwrap_or(0);
            match left.cmp(&right) {
                Ordering::Equal => {}
                unequal => return unequal,
            }
        }
        Ordering::Equal
    }
}
