//! English translations

use std::collections::HashMap;

pub fn get_translations() -> HashMap<String, String> {
    let mut t = HashMap::new();

    // App general
    t.insert("app.title".into(), "Electricity Cost Calculator".into());
    t.insert("app.subtitle".into(), "Work out what your appliances cost to run".into());
    t.insert("app.goodbye".into(), "Bye!".into());

    // Menu
    t.insert("menu.prompt".into(), "[a] add device  [l] results  [c] clear all  [t] tariff  [q] quit".into());
    t.insert("menu.unknown".into(), "Unknown choice: {}".into());

    // Tariff
    t.insert("tariff.header".into(), "Electricity Tariff".into());
    t.insert("tariff.category".into(), "Choose your PLN tariff category".into());
    t.insert("tariff.rate".into(), "Rate: {} {} per kWh".into());
    t.insert("tariff.custom".into(), "Or enter a custom rate per kWh".into());
    t.insert("tariff.custom_active".into(), "Using custom rate".into());

    // Device form
    t.insert("form.header".into(), "Device Details".into());
    t.insert("form.name".into(), "Device name (e.g. Living room AC)".into());
    t.insert("form.appliance".into(), "Pick a device from the list (number or name, empty for none)".into());
    t.insert("form.catalog_power".into(), "Power: {} watt".into());
    t.insert("form.manual_power".into(), "Adjust power (watt)".into());
    t.insert("form.voltage".into(), "Voltage (Volt)".into());
    t.insert("form.current".into(), "Current (Ampere)".into());
    t.insert("form.computed_power".into(), "Power from V x A: {} watt".into());
    t.insert("form.usage_header".into(), "Usage Pattern".into());
    t.insert("form.usage".into(), "How long is the device used? [1] 24 hours  [2] some hours per day  [3] custom".into());
    t.insert("form.usage_all_day".into(), "The device will be counted for 24 hours of use".into());
    t.insert("form.hours_slider".into(), "Hours per day (0-24)".into());
    t.insert("form.hours_custom".into(), "Enter hours per day".into());
    t.insert("form.period".into(), "Calculation period: [1] 1 day  [2] 1 week  [3] 1 month  [4] custom".into());
    t.insert("form.days".into(), "Number of days".into());
    t.insert("form.not_a_number".into(), "Please enter a number".into());
    t.insert("form.added".into(), "Device added!".into());

    // Validation errors
    t.insert("error.missing_name".into(), "Please enter a device name!".into());
    t.insert("error.conflicting_input".into(), "Use either the current-based power or your own power value, not both!".into());
    t.insert("error.invalid_power".into(), "Device power must be more than 0 watt!".into());
    t.insert("error.invalid_hours".into(), "Hours per day must be between 0 and 24!".into());
    t.insert("error.invalid_days".into(), "The period must be at least 1 day!".into());
    t.insert("error.invalid_rate".into(), "The rate must be more than 0 and at most 10000!".into());
    t.insert("error.unknown_appliance".into(), "That device is not in the list!".into());

    // Results
    t.insert("results.header".into(), "Calculation Results".into());
    t.insert("results.empty".into(), "No devices added yet. Add one with [a].".into());
    t.insert("results.cleared".into(), "All devices removed".into());
    t.insert("summary.total_energy".into(), "Total Consumption".into());
    t.insert("summary.total_cost".into(), "Total Cost".into());
    t.insert("summary.devices".into(), "{} device(s)".into());
    t.insert("summary.per_day".into(), "{}/day".into());

    // Table
    t.insert("table.name".into(), "Name".into());
    t.insert("table.power".into(), "Power".into());
    t.insert("table.energy".into(), "Energy".into());
    t.insert("table.cost".into(), "Cost".into());
    t.insert("table.hours".into(), "Hours/day".into());
    t.insert("table.days".into(), "Days".into());

    // Units
    t.insert("unit.hours".into(), "h".into());
    t.insert("unit.days".into(), "days".into());

    // Charts
    t.insert("chart.cost".into(), "Cost Chart".into());
    t.insert("chart.energy".into(), "Consumption Chart".into());

    // Saving tips
    t.insert("tips.header".into(), "Energy Saving Tips:".into());
    t.insert("tips.1".into(), "Use energy-efficient (Energy Star) appliances".into());
    t.insert("tips.2".into(), "Switch devices off when not in use".into());
    t.insert("tips.3".into(), "Make use of daylight during the day".into());
    t.insert("tips.4".into(), "Set the AC to 24-26 C".into());
    t.insert("tips.5".into(), "Use timers for devices that need not run 24 hours".into());

    t
}
