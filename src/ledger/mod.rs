//! In-memory ledger of appliance records for one session

use crate::core::{ApplianceRecord, ChartPoint, LedgerSummary};

/// Days used to spread the total cost into a daily figure
const DAYS_PER_MONTH: f64 = 30.0;

/// Appliance records kept sorted by descending cost
#[derive(Debug, Clone, Default)]
pub struct DeviceLedger {
    records: Vec<ApplianceRecord>,
}

impl DeviceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record and restore descending cost order
    pub fn append(&mut self, record: ApplianceRecord) {
        log::info!(
            "Adding device '{}': {:.1} kWh, cost {:.2}",
            record.name(),
            record.energy_kwh(),
            record.cost()
        );
        self.records.push(record);
        // Stable: equal costs keep insertion order
        self.records.sort_by(|a, b| b.cost().total_cmp(&a.cost()));
    }

    /// Remove every record
    pub fn clear(&mut self) {
        log::info!("Clearing {} device(s)", self.records.len());
        self.records.clear();
    }

    pub fn records(&self) -> &[ApplianceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn total_cost(&self) -> f64 {
        self.records.iter().map(ApplianceRecord::cost).sum()
    }

    pub fn total_energy(&self) -> f64 {
        self.records.iter().map(ApplianceRecord::energy_kwh).sum()
    }

    /// Aggregates for the summary view
    pub fn summary(&self, savings_tip_threshold: f64) -> LedgerSummary {
        let total_cost = self.total_cost();
        LedgerSummary {
            device_count: self.len(),
            total_energy_kwh: self.total_energy(),
            total_cost,
            daily_cost_estimate: total_cost / DAYS_PER_MONTH,
            show_saving_tips: total_cost > savings_tip_threshold,
        }
    }

    /// Cost per device, smallest first
    pub fn cost_series(&self) -> Vec<ChartPoint> {
        self.series(ApplianceRecord::cost)
    }

    /// Energy per device, smallest first
    pub fn energy_series(&self) -> Vec<ChartPoint> {
        self.series(ApplianceRecord::energy_kwh)
    }

    fn series(&self, value: fn(&ApplianceRecord) -> f64) -> Vec<ChartPoint> {
        let mut points: Vec<ChartPoint> = self
            .records
            .iter()
            .map(|r| ChartPoint {
                label: r.name().to_string(),
                value: value(r),
            })
            .collect();
        points.sort_by(|a, b| a.value.total_cmp(&b.value));
        points
    }
}
