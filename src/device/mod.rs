//! Device form validation
//!
//! Turns the raw inputs collected by a front-end into a validated
//! [`ApplianceRecord`] or a named failure. Nothing here touches the ledger,
//! so a rejected form can never leave a partial record behind.

use crate::catalog::Appliance;
use crate::core::{ApplianceRecord, Error, Result};
use crate::usage::{Period, UsagePattern};

/// Raw inputs for one device
#[derive(Debug, Clone)]
pub struct DeviceForm {
    pub name: String,
    /// Catalog choice, if any
    pub appliance: Option<&'static Appliance>,
    /// Manual wattage; `None` keeps the catalog value
    pub manual_power: Option<f64>,
    pub voltage: f64,
    pub current: f64,
    pub usage: UsagePattern,
    pub period: Period,
}

impl DeviceForm {
    /// Manual power as the form shows it: the override, else the catalog wattage
    pub fn effective_manual_power(&self) -> f64 {
        self.manual_power
            .or_else(|| self.appliance.map(|a| a.power_watts))
            .unwrap_or(0.0)
    }
}

/// Power from voltage and current, when a current is given
pub fn computed_power(voltage: f64, current: f64) -> Option<f64> {
    (current > 0.0).then(|| voltage * current)
}

/// Resolve the effective device power from manual and V x A inputs.
///
/// Supplying both a manual power and a current is a conflict. A current wins
/// otherwise; the result must be finite and strictly positive.
pub fn resolve_power(manual_power: f64, voltage: f64, current: f64) -> Result<f64> {
    if manual_power > 0.0 && current > 0.0 {
        return Err(Error::ConflictingInput);
    }

    let power = computed_power(voltage, current).unwrap_or(manual_power);

    if !power.is_finite() || power <= 0.0 {
        return Err(Error::InvalidPower(power));
    }
    Ok(power)
}

/// Validate a form and compute its record at `rate_per_kwh`
pub fn build_record(form: &DeviceForm, rate_per_kwh: f64) -> Result<ApplianceRecord> {
    if form.name.trim().is_empty() {
        return Err(Error::MissingName);
    }

    let power = resolve_power(form.effective_manual_power(), form.voltage, form.current)?;
    let hours = form.usage.hours_per_day()?;
    let days = form.period.days()?;

    Ok(ApplianceRecord::new(&form.name, power, hours, days, rate_per_kwh))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn form(name: &str) -> DeviceForm {
        DeviceForm {
            name: name.to_string(),
            appliance: None,
            manual_power: None,
            voltage: 220.0,
            current: 0.0,
            usage: UsagePattern::Slider(8.0),
            period: Period::Month,
        }
    }

    #[test]
    fn test_resolve_manual_power() {
        assert_eq!(resolve_power(500.0, 220.0, 0.0).unwrap(), 500.0);
    }

    #[test]
    fn test_resolve_voltage_current() {
        assert_eq!(resolve_power(0.0, 220.0, 2.0).unwrap(), 440.0);
    }

    #[test]
    fn test_resolve_conflict() {
        assert!(matches!(resolve_power(500.0, 220.0, 2.0), Err(Error::ConflictingInput)));
    }

    #[test]
    fn test_resolve_nothing_supplied() {
        assert!(matches!(resolve_power(0.0, 220.0, 0.0), Err(Error::InvalidPower(_))));
        // Zero voltage with a current still resolves to no power
        assert!(matches!(resolve_power(0.0, 0.0, 3.0), Err(Error::InvalidPower(_))));
    }

    #[test]
    fn test_resolve_rejects_non_finite() {
        assert!(matches!(resolve_power(f64::INFINITY, 220.0, 0.0), Err(Error::InvalidPower(_))));
        assert!(matches!(resolve_power(f64::NAN, 220.0, 0.0), Err(Error::InvalidPower(_))));
        // V x A overflowing to infinity
        assert!(matches!(resolve_power(0.0, 1e200, 1e200), Err(Error::InvalidPower(_))));
    }

    #[test]
    fn test_infinite_power_never_reaches_ledger() {
        let mut f = form("Rusak");
        f.manual_power = Some(f64::INFINITY);
        f.usage = UsagePattern::Slider(0.0);
        assert!(matches!(build_record(&f, 1352.0), Err(Error::InvalidPower(_))));
    }

    #[test]
    fn test_computed_power() {
        assert_eq!(computed_power(220.0, 5.0), Some(1100.0));
        assert_eq!(computed_power(220.0, 0.0), None);
        assert_eq!(computed_power(220.0, -1.0), None);
    }

    #[test]
    fn test_missing_name_checked_first() {
        let mut blank = form("   ");
        blank.current = 2.0;
        blank.manual_power = Some(100.0);
        assert!(matches!(build_record(&blank, 1352.0), Err(Error::MissingName)));
    }

    #[test]
    fn test_catalog_prefills_manual_power() {
        let mut f = form("Kulkas");
        f.appliance = catalog::find("Kulkas 2 Pintu");
        assert_eq!(f.effective_manual_power(), 150.0);

        f.manual_power = Some(120.0);
        assert_eq!(f.effective_manual_power(), 120.0);
    }

    #[test]
    fn test_catalog_with_current_conflicts_unless_cleared() {
        let mut f = form("AC kamar");
        f.appliance = catalog::find("AC (1 PK)");
        f.current = 3.0;
        assert!(matches!(build_record(&f, 1352.0), Err(Error::ConflictingInput)));

        f.manual_power = Some(0.0);
        let record = build_record(&f, 1352.0).unwrap();
        assert_eq!(record.power_watts(), 660.0);
    }

    #[test]
    fn test_sentinel_alone_is_invalid() {
        let mut f = form("Something");
        f.appliance = catalog::lookup("0").ok();
        assert!(matches!(build_record(&f, 1352.0), Err(Error::InvalidPower(_))));
    }

    #[test]
    fn test_build_record_trims_name() {
        let mut f = form("  Setrika  ");
        f.manual_power = Some(1000.0);
        f.usage = UsagePattern::Custom(1.0);
        f.period = Period::Day;

        let record = build_record(&f, 1500.0).unwrap();
        assert_eq!(record.name(), "Setrika");
        assert_eq!(record.energy_kwh(), 1.0);
        assert_eq!(record.cost(), 1500.0);
    }

    #[test]
    fn test_usage_errors_propagate() {
        let mut f = form("Pompa");
        f.manual_power = Some(125.0);
        f.usage = UsagePattern::Custom(30.0);
        assert!(matches!(build_record(&f, 1352.0), Err(Error::InvalidHours(_))));

        f.usage = UsagePattern::AllDay;
        f.period = Period::Custom(0);
        assert!(matches!(build_record(&f, 1352.0), Err(Error::InvalidDays(0))));
    }
}
