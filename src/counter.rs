//! Live character counter for the message field.

use crate::config::CounterConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterTier {
    Normal,
    Warning,
    Alert,
}

impl CounterTier {
    /// Boundary values belong to the lower tier: `warn_above` itself is still
    /// normal, `alert_above` itself is still a warning.
    pub fn for_len(len: usize, cfg: &CounterConfig) -> Self {
        if len > cfg.alert_above {
            CounterTier::Alert
        } else if len > cfg.warn_above {
            CounterTier::Warning
        } else {
            CounterTier::Normal
        }
    }

    pub fn color(self, cfg: &CounterConfig) -> &str {
        match self {
            CounterTier::Normal => &cfg.normal_color,
            CounterTier::Warning => &cfg.warn_color,
            CounterTier::Alert => &cfg.alert_color,
        }
    }
}

/// Length as the browser counts it for `maxlength` (UTF-16 code units).
pub fn message_len(text: &str) -> usize {
    text.encode_utf16().count()
}
