//! External scoring collaborator seam.

use crate::report::ExternalScore;

/// An external password scoring collaborator.
///
/// Consulted with the raw password string; returns an ordinal score in
/// `0..=4` (higher is stronger) plus optional structured feedback. This
/// crate treats the collaborator as an opaque oracle: the verdict is carried
/// alongside the locally computed entropy band, never interpreted, and never
/// folded into it.
pub trait ExternalScorer: Send + Sync {
    fn score(&self, password: &str) -> ExternalScore;
}
