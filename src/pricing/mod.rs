//! Pricing engine for electricity cost calculation
//!
//! Holds the energy and cost formulas, the fixed PLN household tariff
//! schedule, and the precedence rule between a scheduled rate and a rate
//! typed in by the user.

use crate::core::{Error, PricingConfig, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Upper bound accepted for a user-supplied rate per kWh
pub const MAX_CUSTOM_RATE: f64 = 10_000.0;

/// Energy in kWh drawn by a device of `power_watts` over the usage pattern
pub fn compute_energy(power_watts: f64, hours_per_day: f64, days: u32) -> f64 {
    let power_kw = power_watts / 1000.0;
    power_kw * hours_per_day * f64::from(days)
}

/// Cost of `energy_kwh` at `rate_per_kwh`
pub fn compute_cost(energy_kwh: f64, rate_per_kwh: f64) -> f64 {
    energy_kwh * rate_per_kwh
}

/// PLN household tariff categories (2024)
#[derive(ValueEnum, Serialize, Deserialize, Copy, Clone, Default, PartialEq, Eq, Debug)]
pub enum TariffCategory {
    #[value(name = "r1-450va-subsidi")]
    #[serde(rename = "r1-450va-subsidi")]
    Subsidized450Va,
    #[value(name = "r1-900va-subsidi")]
    #[serde(rename = "r1-900va-subsidi")]
    Subsidized900Va,
    #[value(name = "r1-900va")]
    #[serde(rename = "r1-900va")]
    Household900Va,
    #[default]
    #[value(name = "r1-1300va")]
    #[serde(rename = "r1-1300va")]
    Household1300Va,
    #[value(name = "r1-2200va")]
    #[serde(rename = "r1-2200va")]
    Household2200Va,
    /// R2, 3500 to 5500 VA
    #[value(name = "r2-3500va")]
    #[serde(rename = "r2-3500va")]
    Medium3500Va,
    /// R3, 6600 VA and above
    #[value(name = "r3-6600va")]
    #[serde(rename = "r3-6600va")]
    Large6600Va,
}

impl TariffCategory {
    /// All categories in schedule order
    pub const ALL: [TariffCategory; 7] = [
        TariffCategory::Subsidized450Va,
        TariffCategory::Subsidized900Va,
        TariffCategory::Household900Va,
        TariffCategory::Household1300Va,
        TariffCategory::Household2200Va,
        TariffCategory::Medium3500Va,
        TariffCategory::Large6600Va,
    ];

    /// Label as printed on the electricity bill
    pub fn label(self) -> &'static str {
        match self {
            TariffCategory::Subsidized450Va => "R1 / 450 VA - Subsidi",
            TariffCategory::Subsidized900Va => "R1 / 900 VA - Subsidi",
            TariffCategory::Household900Va => "R1 / 900 VA",
            TariffCategory::Household1300Va => "R1 / 1300 VA",
            TariffCategory::Household2200Va => "R1 / 2200 VA",
            TariffCategory::Medium3500Va => "R2 / 3500-5500 VA",
            TariffCategory::Large6600Va => "R3 / 6600 VA keatas",
        }
    }

    /// Scheduled rate in Rupiah per kWh
    pub fn rate_per_kwh(self) -> f64 {
        match self {
            TariffCategory::Subsidized450Va => 415.0,
            TariffCategory::Subsidized900Va => 605.0,
            TariffCategory::Household900Va => 1352.0,
            TariffCategory::Household1300Va | TariffCategory::Household2200Va => 1444.70,
            TariffCategory::Medium3500Va | TariffCategory::Large6600Va => 1699.53,
        }
    }
}

/// Effective rate: the custom rate wins whenever it differs from the schedule
pub fn resolve_rate(tariff: TariffCategory, custom_rate: Option<f64>) -> Result<f64> {
    let scheduled = tariff.rate_per_kwh();
    match custom_rate {
        Some(rate) if rate != scheduled => {
            if !rate.is_finite() || rate <= 0.0 || rate > MAX_CUSTOM_RATE {
                return Err(Error::InvalidRate(rate));
            }
            Ok(rate)
        }
        _ => Ok(scheduled),
    }
}

/// Pricing engine that calculates electricity costs
#[derive(Debug, Clone)]
pub struct PricingEngine {
    config: PricingConfig,
    rate: f64,
}

impl PricingEngine {
    /// Create a new pricing engine with the given configuration
    pub fn new(config: &PricingConfig) -> Result<Self> {
        let rate = resolve_rate(config.tariff, config.custom_rate)?;
        Ok(Self {
            config: config.clone(),
            rate,
        })
    }

    /// Update the pricing configuration; the old one stays active on error
    pub fn update_config(&mut self, config: &PricingConfig) -> Result<()> {
        self.rate = resolve_rate(config.tariff, config.custom_rate)?;
        self.config = config.clone();
        log::info!("Active rate set to {:.2} per kWh", self.rate);
        Ok(())
    }

    /// Rate per kWh applied to new records
    pub fn current_rate(&self) -> f64 {
        self.rate
    }

    /// Calculate cost for a given energy consumption in kWh
    pub fn calculate_cost(&self, kwh: f64) -> f64 {
        compute_cost(kwh, self.rate)
    }

    /// Selected schedule category
    pub fn tariff(&self) -> TariffCategory {
        self.config.tariff
    }

    /// Whether a user-supplied rate overrides the schedule
    pub fn uses_custom_rate(&self) -> bool {
        self.rate != self.config.tariff.rate_per_kwh()
    }

    /// Get the currency symbol
    pub fn currency_symbol(&self) -> &str {
        &self.config.currency_symbol
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pricing_config(tariff: TariffCategory, custom_rate: Option<f64>) -> PricingConfig {
        PricingConfig {
            tariff,
            custom_rate,
            currency_symbol: "Rp".to_string(),
        }
    }

    #[test]
    fn test_compute_energy() {
        assert_eq!(compute_energy(1000.0, 1.0, 1), 1.0);
        assert_eq!(compute_energy(0.0, 12.5, 30), 0.0);
        assert_eq!(compute_energy(0.0, 24.0, 1), 0.0);
        assert!((compute_energy(150.0, 24.0, 30) - 108.0).abs() < 1e-9);
    }

    #[test]
    fn test_compute_cost() {
        assert_eq!(compute_cost(2.0, 1500.0), 3000.0);
        assert_eq!(compute_cost(0.0, 1444.70), 0.0);
    }

    #[test]
    fn test_schedule_rates() {
        assert_eq!(TariffCategory::Subsidized450Va.rate_per_kwh(), 415.0);
        assert_eq!(TariffCategory::Household900Va.rate_per_kwh(), 1352.0);
        assert_eq!(TariffCategory::Household2200Va.rate_per_kwh(), 1444.70);
        assert_eq!(TariffCategory::Large6600Va.rate_per_kwh(), 1699.53);
        assert_eq!(TariffCategory::default(), TariffCategory::Household1300Va);
    }

    #[test]
    fn test_custom_rate_takes_precedence() {
        let rate = resolve_rate(TariffCategory::Household900Va, Some(1200.0)).unwrap();
        assert_eq!(rate, 1200.0);

        // Same as the schedule: nothing to override
        let rate = resolve_rate(TariffCategory::Household900Va, Some(1352.0)).unwrap();
        assert_eq!(rate, 1352.0);

        let rate = resolve_rate(TariffCategory::Household900Va, None).unwrap();
        assert_eq!(rate, 1352.0);
    }

    #[test]
    fn test_invalid_custom_rate() {
        for bad in [0.0, -5.0, 10_000.5, f64::NAN] {
            let result = resolve_rate(TariffCategory::Household1300Va, Some(bad));
            assert!(matches!(result, Err(Error::InvalidRate(_))), "rate {bad} accepted");
        }
    }

    #[test]
    fn test_engine_rate_and_cost() {
        let engine = PricingEngine::new(&pricing_config(TariffCategory::Household1300Va, None)).unwrap();
        assert_eq!(engine.current_rate(), 1444.70);
        assert!(!engine.uses_custom_rate());
        assert!((engine.calculate_cost(108.0) - 156_027.6).abs() < 1e-6);
        assert_eq!(engine.currency_symbol(), "Rp");
    }

    #[test]
    fn test_update_config_keeps_old_rate_on_error() {
        let mut engine = PricingEngine::new(&pricing_config(TariffCategory::Household900Va, None)).unwrap();

        let bad = pricing_config(TariffCategory::Subsidized450Va, Some(-1.0));
        assert!(engine.update_config(&bad).is_err());
        assert_eq!(engine.current_rate(), 1352.0);
        assert_eq!(engine.tariff(), TariffCategory::Household900Va);

        let good = pricing_config(TariffCategory::Subsidized450Va, Some(500.0));
        engine.update_config(&good).unwrap();
        assert_eq!(engine.current_rate(), 500.0);
        assert!(engine.uses_custom_rate());
    }
}
