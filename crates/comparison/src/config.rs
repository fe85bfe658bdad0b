use std::{env, time::Duration};

pub const LOOKUP_TIMEOUT_ENV: &str = "COMPARISON_LOOKUP_TIMEOUT_MS";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComparisonConfig {
    /// Upper bound for each individual lookup. `None` waits indefinitely.
    pub lookup_timeout: Option<Duration>,
}

impl ComparisonConfig {
    /// Reads the timeout in milliseconds from `COMPARISON_LOOKUP_TIMEOUT_MS`.
    /// A missing, zero or unparsable value means no timeout.
    pub fn from_env() -> Self {
        Self {
            lookup_timeout: env::var(LOOKUP_TIMEOUT_ENV)
                .ok()
                .and_then(|value| parse_timeout(&value)),
        }
    }

    pub fn with_lookup_timeout(mut self, timeout: Duration) -> Self {
        self.lookup_timeout = Some(timeout);
        self
    }
}

fn parse_timeout(value: &str) -> Option<Duration> {
    value
        .trim()
        .parse::<u64>()
        .ok()
        .filter(|millis| *millis > 0)
        .map(Duration::from_millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_milliseconds() {
        assert_eq!(parse_timeout("1500"), Some(Duration::from_millis(1500)));
        assert_eq!(parse_timeout(" 250 "), Some(Duration::from_millis(250)));
    }

    #[test]
    fn invalid_values_disable_the_timeout() {
        assert_eq!(parse_timeout("0"), None);
        assert_eq!(parse_timeout("-5"), None);
        assert_eq!(parse_timeout("soon"), None);
        assert_eq!(ComparisonConfig::default().lookup_timeout, None);
    }
}
