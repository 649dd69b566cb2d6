//! Failures collected while resolving, one per skipped mod.

use std::fmt;

use fmm_core::dependency::Dependency;
use fmm_util::errors::{ErrorKind, FmmError};

/// Everything that went wrong during one resolution. A failure never stops
/// the resolution; the failing mod and its subtree are simply left out.
#[derive(Debug, Default)]
pub struct ResolutionReport {
    pub failures: Vec<ResolveFailure>,
}

/// A dependency that could not be resolved.
#[derive(Debug)]
pub struct ResolveFailure {
    pub dependency: Dependency,
    pub error: FmmError,
}

impl ResolveFailure {
    pub fn kind(&self) -> ErrorKind {
        self.error.kind()
    }
}

impl ResolutionReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, failure: ResolveFailure) {
        self.failures.push(failure);
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }

    /// Number of failures of the given kind.
    pub fn count(&self, kind: ErrorKind) -> usize {
        self.failures.iter().filter(|f| f.kind() == kind).count()
    }
}

impl fmt::Display for ResolutionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.failures.is_empty() {
            return write!(f, "All mods resolved.");
        }
        writeln!(f, "Unresolved mods ({}):", self.failures.len())?;
        for failure in &self.failures {
            writeln!(f, "  {failure}")?;
        }
        Ok(())
    }
}

impl fmt::Display for ResolveFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.dependency, self.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report() {
        let report = ResolutionReport::new();
        assert!(report.is_empty());
        assert_eq!(report.len(), 0);
        assert_eq!(report.to_string(), "All mods resolved.");
    }

    #[test]
    fn report_with_failures() {
        let mut report = ResolutionReport::new();
        report.add(ResolveFailure {
            dependency: "flib >= 0.12.0".parse().unwrap(),
            error: FmmError::NotFound {
                name: "flib".to_string(),
            },
        });
        report.add(ResolveFailure {
            dependency: "stdlib".parse().unwrap(),
            error: FmmError::CatalogUnreachable {
                message: "timeout".to_string(),
            },
        });
        assert_eq!(report.len(), 2);
        assert_eq!(report.count(ErrorKind::NotFound), 1);
        assert_eq!(report.count(ErrorKind::CatalogUnreachable), 1);
        let s = report.to_string();
        assert!(s.contains("Unresolved mods (2)"));
        assert!(s.contains("flib >= 0.12.0: flib was not found"));
    }
}
