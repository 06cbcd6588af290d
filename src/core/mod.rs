//! Core module - Configuration, errors, and common types

mod config;
mod error;
mod types;

pub use config::{AdvancedConfig, Config, GeneralConfig, PricingConfig, UsageConfig};
pub use error::{Error, Result};
pub use types::{ApplianceRecord, ChartPoint, LedgerSummary};
