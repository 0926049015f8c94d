//! Speed categories and their animal option lists.
//!
//! The table is process-constant: three categories, each with a fixed,
//! ordered list of animal names and an artificial delay used by the
//! slow-backend demo endpoint.

use std::time::Duration;

/// A speed category selecting one of the fixed option lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Speed {
    #[default]
    Slow,
    Medium,
    Fast,
}

impl Speed {
    /// Resolve a raw request parameter to a category.
    ///
    /// Lookup is ASCII-case-insensitive. Missing, empty, or unrecognized
    /// values fall back to [`Speed::Slow`]; resolution never fails.
    pub fn resolve(raw: Option<&str>) -> Self {
        match raw {
            Some(value) if value.eq_ignore_ascii_case("slow") => Self::Slow,
            Some(value) if value.eq_ignore_ascii_case("medium") => Self::Medium,
            Some(value) if value.eq_ignore_ascii_case("fast") => Self::Fast,
            _ => Self::Slow,
        }
    }

    /// Canonical lowercase token for the category.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Slow => "slow",
            Self::Medium => "medium",
            Self::Fast => "fast",
        }
    }

    /// The fixed, ordered option list for this category.
    pub fn animals(self) -> &'static [&'static str] {
        match self {
            Self::Slow => &["snail", "tortoise", "koala"],
            Self::Medium => &["elephant", "bear", "cat"],
            // "lion," is stored like this in the source data; the trailing
            // comma stays until the data owner confirms it is a typo.
            Self::Fast => &["cheetah", "lion,", "greyhound"],
        }
    }

    /// Artificial latency for the category, used to mimic a
    /// variable-latency backend.
    pub fn delay(self) -> Duration {
        match self {
            Self::Slow => Duration::from_secs(10),
            Self::Medium => Duration::from_secs(6),
            Self::Fast => Duration::from_secs(1),
        }
    }
}

/// Resolve a raw parameter and wait out the resolved category's delay.
///
/// The pause is a timer suspension, not a blocking sleep: the caller
/// observes the full wall-clock latency while the worker stays free.
pub async fn resolve_delayed(raw: Option<&str>) -> Speed {
    let speed = Speed::resolve(raw);
    tokio::time::sleep(speed.delay()).await;
    speed
}
