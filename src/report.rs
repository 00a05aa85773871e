//! Report types: entropy score, strength band, combined analysis report.

use std::fmt;

/// Heuristic search-space estimate for one password, in bits.
///
/// Computed as `length * log2(charset size)` and carried with two-decimal
/// precision. This is a coarse sizing heuristic, not a cryptographic
/// unpredictability measure.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct EntropyScore(f64);

impl EntropyScore {
    /// Wraps an entropy value, rounded to two decimal places.
    pub fn new(bits: f64) -> Self {
        Self((bits * 100.0).round() / 100.0)
    }

    /// The entropy value in bits.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// The strength band this entropy falls into.
    pub fn band(&self) -> StrengthBand {
        StrengthBand::from_entropy(self.0)
    }
}

impl fmt::Display for EntropyScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Qualitative strength label derived from entropy thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthBand {
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl StrengthBand {
    /// Maps an entropy value to its band.
    ///
    /// Thresholds are exclusive upper bounds: `<28` VeryWeak, `<36` Weak,
    /// `<60` Moderate, `<80` Strong, everything else VeryStrong.
    pub fn from_entropy(bits: f64) -> Self {
        if bits < 28.0 {
            StrengthBand::VeryWeak
        } else if bits < 36.0 {
            StrengthBand::Weak
        } else if bits < 60.0 {
            StrengthBand::Moderate
        } else if bits < 80.0 {
            StrengthBand::Strong
        } else {
            StrengthBand::VeryStrong
        }
    }
}

impl fmt::Display for StrengthBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StrengthBand::VeryWeak => "Very Weak",
            StrengthBand::Weak => "Weak",
            StrengthBand::Moderate => "Moderate",
            StrengthBand::Strong => "Strong",
            StrengthBand::VeryStrong => "Very Strong",
        };
        f.write_str(label)
    }
}

/// Verdict from an external scoring collaborator.
///
/// The score is ordinal, `0..=4`, higher is stronger. Feedback strings are
/// passed through verbatim; this crate never interprets them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalScore {
    pub score: u8,
    pub feedback: Vec<String>,
}

impl ExternalScore {
    pub fn new(score: u8) -> Self {
        Self {
            score,
            feedback: Vec::new(),
        }
    }
}

/// Combined result of one password analysis.
///
/// `entropy` is `None` when the evaluation was cancelled before completion;
/// `external` is `None` when no scoring collaborator was consulted.
#[derive(Debug, Clone)]
pub struct PasswordReport {
    pub entropy: Option<EntropyScore>,
    pub recommendations: Vec<String>,
    pub external: Option<ExternalScore>,
}

impl PasswordReport {
    /// The local strength band, if the evaluation completed.
    pub fn band(&self) -> Option<StrengthBand> {
        self.entropy.map(|e| e.band())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(StrengthBand::from_entropy(0.0), StrengthBand::VeryWeak);
        assert_eq!(StrengthBand::from_entropy(27.99), StrengthBand::VeryWeak);
        assert_eq!(StrengthBand::from_entropy(28.0), StrengthBand::Weak);
        assert_eq!(StrengthBand::from_entropy(35.99), StrengthBand::Weak);
        assert_eq!(StrengthBand::from_entropy(36.0), StrengthBand::Moderate);
        assert_eq!(StrengthBand::from_entropy(59.99), StrengthBand::Moderate);
        assert_eq!(StrengthBand::from_entropy(60.0), StrengthBand::Strong);
        assert_eq!(StrengthBand::from_entropy(79.99), StrengthBand::Strong);
        assert_eq!(StrengthBand::from_entropy(80.0), StrengthBand::VeryStrong);
        assert_eq!(StrengthBand::from_entropy(200.0), StrengthBand::VeryStrong);
    }

    #[test]
    fn test_band_ordering() {
        assert!(StrengthBand::VeryWeak < StrengthBand::Weak);
        assert!(StrengthBand::Weak < StrengthBand::Moderate);
        assert!(StrengthBand::Moderate < StrengthBand::Strong);
        assert!(StrengthBand::Strong < StrengthBand::VeryStrong);
    }

    #[test]
    fn test_band_labels() {
        assert_eq!(StrengthBand::VeryWeak.to_string(), "Very Weak");
        assert_eq!(StrengthBand::VeryStrong.to_string(), "Very Strong");
    }

    #[test]
    fn test_entropy_score_rounding() {
        let score = EntropyScore::new(18.807_354_922_057_604);
        assert_eq!(score.value(), 18.81);
        assert_eq!(score.to_string(), "18.81");
    }

    #[test]
    fn test_entropy_score_band() {
        assert_eq!(EntropyScore::new(18.81).band(), StrengthBand::VeryWeak);
        assert_eq!(EntropyScore::new(95.0).band(), StrengthBand::VeryStrong);
    }

    #[test]
    fn test_report_band_requires_entropy() {
        let report = PasswordReport {
            entropy: None,
            recommendations: Vec::new(),
            external: None,
        };
        assert_eq!(report.band(), None);

        let report = PasswordReport {
            entropy: Some(EntropyScore::new(40.0)),
            recommendations: Vec::new(),
            external: None,
        };
        assert_eq!(report.band(), Some(StrengthBand::Moderate));
    }
}
