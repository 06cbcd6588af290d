//! Common types used across the calculator

use crate::pricing::{compute_cost, compute_energy};

/// A single validated appliance entry in the ledger.
///
/// Energy and cost are derived once at construction; fields are private so a
/// record can never drift out of sync with its inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplianceRecord {
    name: String,
    power_watts: f64,
    hours_per_day: f64,
    days: u32,
    energy_kwh: f64,
    cost: f64,
}

impl ApplianceRecord {
    /// Build a record from already-validated inputs
    pub(crate) fn new(name: &str, power_watts: f64, hours_per_day: f64, days: u32, rate_per_kwh: f64) -> Self {
        let energy_kwh = compute_energy(power_watts, hours_per_day, days);
        Self {
            name: name.trim().to_string(),
            power_watts,
            hours_per_day,
            days,
            energy_kwh,
            cost: compute_cost(energy_kwh, rate_per_kwh),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolved device power in watts
    pub fn power_watts(&self) -> f64 {
        self.power_watts
    }

    pub fn hours_per_day(&self) -> f64 {
        self.hours_per_day
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    /// Energy over the whole period in kWh
    pub fn energy_kwh(&self) -> f64 {
        self.energy_kwh
    }

    /// Cost over the whole period in currency units
    pub fn cost(&self) -> f64 {
        self.cost
    }
}

/// Aggregates over the current ledger, returned to the front-end
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerSummary {
    /// Number of devices in the ledger
    pub device_count: usize,
    /// Sum of energy over all devices in kWh
    pub total_energy_kwh: f64,
    /// Sum of cost over all devices
    pub total_cost: f64,
    /// Total cost spread over a 30-day month
    pub daily_cost_estimate: f64,
    /// Whether the total cost is high enough to show saving tips
    pub show_saving_tips: bool,
}

/// One bar of a chart series
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}
