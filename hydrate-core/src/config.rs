use log::warn;
use std::env;

pub const STREAM_THRESHOLD_VAR: &str = "HYDRATE_STREAM_THRESHOLD";
pub const DEFAULT_STREAM_THRESHOLD: u64 = 1500;

/// Tunables of a [`Hydrator`](crate::Hydrator).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HydratorConfig {
    /// Row count from which results are streamed instead of fetched at once,
    /// `None` always fetches eagerly.
    pub stream_threshold: Option<u64>,
}

impl Default for HydratorConfig {
    fn default() -> Self {
        Self {
            stream_threshold: Some(DEFAULT_STREAM_THRESHOLD),
        }
    }
}

impl HydratorConfig {
    /// Default configuration, overridden by `HYDRATE_STREAM_THRESHOLD` when set.
    ///
    /// The variable holds either a row count or `none`/`off` to disable streaming.
    pub fn from_env() -> Self {
        let mut result = Self::default();
        if let Ok(value) = env::var(STREAM_THRESHOLD_VAR) {
            match Self::parse_threshold(&value) {
                Some(threshold) => result.stream_threshold = threshold,
                None => warn!(
                    "Ignoring {STREAM_THRESHOLD_VAR}=`{value}`, expected a row count or `none`"
                ),
            }
        }
        result
    }

    fn parse_threshold(value: &str) -> Option<Option<u64>> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("none") || value.eq_ignore_ascii_case("off") {
            return Some(None);
        }
        value.parse::<u64>().ok().map(Some)
    }

    /// Whether a result reporting `row_count` rows is iterated lazily.
    pub fn streams(&self, row_count: u64) -> bool {
        self.stream_threshold
            .is_some_and(|threshold| row_count >= threshold)
    }
}
