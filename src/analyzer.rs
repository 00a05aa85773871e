//! Password analyzer - main orchestration logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::entropy::estimate_entropy;
use crate::report::PasswordReport;
use crate::scorer::ExternalScorer;
use crate::sections::{
    SectionResult, digit_section, length_section, lowercase_section, special_section,
    uppercase_section,
};

/// Recommendation sections in emission order; precedence is fixed.
const SECTIONS: [(&str, fn(&SecretString) -> SectionResult); 5] = [
    ("length", length_section),
    ("lowercase", lowercase_section),
    ("uppercase", uppercase_section),
    ("digit", digit_section),
    ("special", special_section),
];

/// Produces the ordered list of improvement suggestions for a password.
///
/// Sections are gated independently; an empty list means no further
/// suggestions. The caller distinguishes that from "no password entered".
pub fn recommendations(password: &SecretString) -> Vec<String> {
    SECTIONS
        .iter()
        .filter_map(|(_, section_fn)| section_fn(password))
        .collect()
}

/// Analyzes a password and returns a combined report.
///
/// Runs the recommendation sections, the entropy estimator, and finally the
/// external scoring collaborator when one is supplied. With the `async`
/// feature, a cancellation token may be passed; cancellation observed
/// between stages yields a report without an entropy score (`band()` is
/// `None`).
///
/// # Arguments
/// * `password` - The password to analyze
/// * `scorer` - Optional external scoring collaborator
/// * `token` - Optional cancellation token (async feature only)
pub fn analyze_password(
    password: &SecretString,
    scorer: Option<&dyn ExternalScorer>,
    #[cfg(feature = "async")] token: Option<CancellationToken>,
) -> PasswordReport {
    let mut recommendations = Vec::new();
    let mut is_cancelled = false;

    for (section_name, section_fn) in SECTIONS {
        // Check cancellation before each section (async only)
        #[cfg(feature = "async")]
        {
            if let Some(ref t) = token {
                if t.is_cancelled() {
                    is_cancelled = true;
                    break;
                }
            }
        }

        if let Some(suggestion) = section_fn(password) {
            #[cfg(feature = "tracing")]
            tracing::debug!("recommendation section fired: {}", section_name);
            recommendations.push(suggestion);
        }
    }

    if is_cancelled {
        return PasswordReport {
            entropy: None,
            recommendations,
            external: None,
        };
    }

    let entropy = estimate_entropy(password.expose_secret());

    // The collaborator is the only potentially slow stage; check once more
    // before consulting it.
    #[cfg(feature = "async")]
    {
        if let Some(ref t) = token {
            if t.is_cancelled() {
                return PasswordReport {
                    entropy: None,
                    recommendations,
                    external: None,
                };
            }
        }
    }

    let external = scorer.map(|s| s.score(password.expose_secret()));

    PasswordReport {
        entropy: Some(entropy),
        recommendations,
        external,
    }
}

/// Async version that sends the analysis result via channel.
#[cfg(feature = "async")]
pub async fn analyze_password_tx(
    password: &SecretString,
    scorer: Option<&dyn ExternalScorer>,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordReport>,
) {
    use std::time::Duration;

    #[cfg(feature = "tracing")]
    tracing::info!("password analysis is about to start...");

    tokio::time::sleep(Duration::from_millis(300)).await;
    let report = analyze_password(password, scorer, Some(token));

    if let Err(e) = tx.send(report).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password report: {}", e);
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    #[tokio::test]
    async fn test_analyze_with_cancellation() {
        let token = CancellationToken::new();
        token.cancel();

        let pwd = SecretString::new("SomePassword123!".to_string().into());
        let report = analyze_password(&pwd, None, Some(token));

        assert!(report.entropy.is_none());
        assert_eq!(report.band(), None);
    }

    #[tokio::test]
    async fn test_analyze_without_cancellation() {
        let token = CancellationToken::new();

        let pwd = SecretString::new("TestPass123!".to_string().into());
        let report = analyze_password(&pwd, None, Some(token));

        assert!(report.entropy.is_some());
        assert!(report.band().is_some());
    }

    #[tokio::test]
    async fn test_analyze_password_tx() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        let pwd = SecretString::new("TestPass123!".to_string().into());

        analyze_password_tx(&pwd, None, token, tx).await;

        let report = rx.recv().await.expect("Should receive report");
        assert!(report.entropy.is_some());
    }
}
