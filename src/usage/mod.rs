//! Usage pattern and billing period resolution

use crate::core::{Error, Result};

/// How long the device runs each day
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UsagePattern {
    /// Runs around the clock
    AllDay,
    /// Bounded selection; out-of-range values are clamped
    Slider(f64),
    /// Free numeric entry; out-of-range values are rejected
    Custom(f64),
}

impl UsagePattern {
    /// Hours per day in `[0, 24]`
    pub fn hours_per_day(self) -> Result<f64> {
        match self {
            UsagePattern::AllDay => Ok(24.0),
            UsagePattern::Slider(hours) => {
                if hours.is_nan() {
                    return Err(Error::InvalidHours(hours));
                }
                Ok(hours.clamp(0.0, 24.0))
            }
            UsagePattern::Custom(hours) => {
                if !(0.0..=24.0).contains(&hours) {
                    return Err(Error::InvalidHours(hours));
                }
                Ok(hours)
            }
        }
    }
}

/// Length of the calculation period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Day,
    Week,
    Month,
    Custom(i64),
}

impl Period {
    /// Days in the period, at least 1
    pub fn days(self) -> Result<u32> {
        match self {
            Period::Day => Ok(1),
            Period::Week => Ok(7),
            Period::Month => Ok(30),
            Period::Custom(days) => u32::try_from(days)
                .ok()
                .filter(|d| *d >= 1)
                .ok_or(Error::InvalidDays(days)),
        }
    }
}
