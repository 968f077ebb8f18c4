use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::form::MessageTimings;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Message windows and event loop cadence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// How long the validation error stays visible (default: 3000).
    #[serde(default = "default_error_visible_ms")]
    pub error_visible_ms: u64,
    /// How long the thank-you message stays visible before the form resets (default: 2000).
    #[serde(default = "default_thank_you_visible_ms")]
    pub thank_you_visible_ms: u64,
    /// Event loop tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// Terminal presentation options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Draw the Spidr logo next to the form (default: true).
    #[serde(default = "default_show_logo")]
    pub show_logo: bool,
}

fn default_error_visible_ms() -> u64 {
    3000
}

fn default_thank_you_visible_ms() -> u64 {
    2000
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_show_logo() -> bool {
    true
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            error_visible_ms: default_error_visible_ms(),
            thank_you_visible_ms: default_thank_you_visible_ms(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_logo: default_show_logo(),
        }
    }
}

impl TimingConfig {
    pub fn message_timings(&self) -> MessageTimings {
        MessageTimings {
            error: Duration::from_millis(self.error_visible_ms),
            thank_you: Duration::from_millis(self.thank_you_visible_ms),
        }
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}
