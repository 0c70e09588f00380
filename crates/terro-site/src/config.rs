//! Site configuration
//!
//! Every timing constant and threshold the behaviors use. The defaults are
//! what the production site ships with; hosts may override any subset by
//! passing JSON to [`SiteConfig::from_json`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::SiteResult;

/// Site configuration options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub reveal: RevealConfig,
    pub counter: CounterConfig,
    pub parallax: ParallaxConfig,
    pub gradient: GradientConfig,
    pub floating: FloatingConfig,
    pub header: HeaderConfig,
    pub scroll_spy: ScrollSpyConfig,
    pub anchors: AnchorsConfig,
    pub form: FormConfig,
}

impl SiteConfig {
    /// Parse a (possibly partial) JSON override on top of the defaults
    pub fn from_json(json: &str) -> SiteResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Scroll-triggered reveal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealConfig {
    /// Intersection root margin, CSS shorthand
    pub root_margin: String,
    pub threshold: f64,
    /// Highest stagger index written to `data-delay`
    pub max_stagger: usize,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            root_margin: "0px 0px -50px 0px".to_string(),
            threshold: 0.1,
            max_stagger: 5,
        }
    }
}

/// Counting animation for `[data-count]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CounterConfig {
    pub threshold: f64,
    pub default_duration_ms: u64,
}

impl CounterConfig {
    pub fn default_duration(&self) -> Duration {
        Duration::from_millis(self.default_duration_ms)
    }
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            default_duration_ms: 2000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParallaxConfig {
    pub throttle_ms: u64,
    /// Speed used when `data-parallax` is empty, zero or not a number
    pub default_speed: f64,
}

impl ParallaxConfig {
    pub fn throttle(&self) -> Duration {
        Duration::from_millis(self.throttle_ms)
    }
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            throttle_ms: 10,
            default_speed: 0.5,
        }
    }
}

/// Hero background gradient sweep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GradientConfig {
    pub start_angle: f64,
    /// Degrees per frame
    pub step: f64,
    pub min_angle: f64,
    pub max_angle: f64,
    pub stops: Vec<String>,
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self {
            start_angle: 135.0,
            step: 0.1,
            min_angle: 90.0,
            max_angle: 180.0,
            stops: vec![
                "rgba(0, 212, 255, 0.1) 0%".to_string(),
                "rgba(139, 92, 246, 0.1) 50%".to_string(),
                "rgba(255, 61, 113, 0.1) 100%".to_string(),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FloatingConfig {
    /// Seconds of `animation-delay` added per element
    pub delay_step_secs: f64,
}

impl Default for FloatingConfig {
    fn default() -> Self {
        Self { delay_step_secs: 0.5 }
    }
}

/// Sticky header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeaderConfig {
    /// `scrolled` is set once `scrollY` exceeds this
    pub scrolled_offset: f64,
    pub throttle_ms: u64,
}

impl HeaderConfig {
    pub fn throttle(&self) -> Duration {
        Duration::from_millis(self.throttle_ms)
    }
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            scrolled_offset: 50.0,
            throttle_ms: 10,
        }
    }
}

/// Smooth in-page anchor scrolling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnchorsConfig {
    /// Header height assumed when the header is missing or has no height
    pub fallback_header_height: f64,
}

impl Default for AnchorsConfig {
    fn default() -> Self {
        Self { fallback_header_height: 80.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScrollSpyConfig {
    /// Distance below the top of the viewport used as the probe line
    pub offset: f64,
    pub throttle_ms: u64,
}

impl ScrollSpyConfig {
    pub fn throttle(&self) -> Duration {
        Duration::from_millis(self.throttle_ms)
    }
}

impl Default for ScrollSpyConfig {
    fn default() -> Self {
        Self {
            offset: 100.0,
            throttle_ms: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormConfig {
    /// Delay of the simulated submission
    pub submit_delay_ms: u64,
    pub loading_label: String,
    pub failure_message: String,
}

impl FormConfig {
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 1500,
            loading_label: "Sending...".to_string(),
            failure_message: "Something went wrong. Please try again.".to_string(),
        }
    }
}
