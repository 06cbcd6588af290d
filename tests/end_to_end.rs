use powercost_calculator_lib::catalog;
use powercost_calculator_lib::core::{Error, PricingConfig};
use powercost_calculator_lib::device::{build_record, DeviceForm};
use powercost_calculator_lib::ledger::DeviceLedger;
use powercost_calculator_lib::pricing::{PricingEngine, TariffCategory};
use powercost_calculator_lib::usage::{Period, UsagePattern};

fn engine(tariff: TariffCategory) -> PricingEngine {
    PricingEngine::new(&PricingConfig {
        tariff,
        ..Default::default()
    })
    .unwrap()
}

fn manual_form(name: &str, watts: f64, hours: f64) -> DeviceForm {
    DeviceForm {
        name: name.to_string(),
        appliance: None,
        manual_power: Some(watts),
        voltage: 220.0,
        current: 0.0,
        usage: UsagePattern::Slider(hours),
        period: Period::Month,
    }
}

#[test]
fn fridge_from_catalog_for_a_month() {
    let pricing = engine(TariffCategory::Household1300Va);
    let form = DeviceForm {
        name: "Kulkas".to_string(),
        appliance: catalog::find("Kulkas 2 Pintu"),
        manual_power: None,
        voltage: 220.0,
        current: 0.0,
        usage: UsagePattern::AllDay,
        period: Period::Month,
    };

    let record = build_record(&form, pricing.current_rate()).unwrap();
    assert_eq!(record.power_watts(), 150.0);
    assert!((record.energy_kwh() - 108.0).abs() < 1e-9);
    assert!((record.cost() - 156_027.6).abs() < 1e-6);
}

#[test]
fn voltage_times_current_for_a_week() {
    let pricing = engine(TariffCategory::Household900Va);
    let form = DeviceForm {
        name: "Pompa".to_string(),
        appliance: None,
        manual_power: None,
        voltage: 220.0,
        current: 5.0,
        usage: UsagePattern::Custom(8.0),
        period: Period::Week,
    };

    let record = build_record(&form, pricing.current_rate()).unwrap();
    assert_eq!(record.power_watts(), 1100.0);
    assert!((record.energy_kwh() - 61.6).abs() < 1e-9);
    assert!((record.cost() - 83_283.2).abs() < 1e-6);
}

#[test]
fn rejected_forms_leave_ledger_untouched() {
    let pricing = engine(TariffCategory::Household1300Va);
    let mut ledger = DeviceLedger::new();
    ledger.append(build_record(&manual_form("TV", 60.0, 5.0), pricing.current_rate()).unwrap());

    let mut conflicting = manual_form("Setrika", 1000.0, 1.0);
    conflicting.current = 2.0;
    let mut unnamed = manual_form("", 100.0, 1.0);
    unnamed.name = "  ".to_string();
    let powerless = manual_form("Kosong", 0.0, 1.0);

    for (form, expected) in [
        (conflicting, "conflict"),
        (unnamed, "name"),
        (powerless, "power"),
    ] {
        match build_record(&form, pricing.current_rate()) {
            Err(Error::ConflictingInput) => assert_eq!(expected, "conflict"),
            Err(Error::MissingName) => assert_eq!(expected, "name"),
            Err(Error::InvalidPower(_)) => assert_eq!(expected, "power"),
            other => panic!("unexpected result for {expected}: {other:?}"),
        }
    }

    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.records()[0].name(), "TV");
}

#[test]
fn ledger_accumulates_sorted_and_clears() {
    let pricing = engine(TariffCategory::Medium3500Va);
    let mut ledger = DeviceLedger::new();

    let devices = [("Lampu", 13.0, 10.0), ("AC", 700.0, 8.0), ("Laptop", 65.0, 6.0), ("Dispenser", 350.0, 24.0)];
    for (name, watts, hours) in devices {
        let record = build_record(&manual_form(name, watts, hours), pricing.current_rate()).unwrap();
        ledger.append(record);
    }

    let costs: Vec<f64> = ledger.records().iter().map(|r| r.cost()).collect();
    assert!(costs.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(ledger.records()[0].name(), "Dispenser");

    let sum: f64 = costs.iter().sum();
    assert!((ledger.total_cost() - sum).abs() < 1e-9);

    let extra = build_record(&manual_form("Microwave", 800.0, 0.5), pricing.current_rate()).unwrap();
    ledger.append(extra);
    assert_eq!(ledger.len(), devices.len() + 1);

    ledger.clear();
    assert!(ledger.is_empty());
    assert_eq!(ledger.total_cost(), 0.0);
}

#[test]
fn custom_rate_overrides_schedule() {
    let pricing = PricingEngine::new(&PricingConfig {
        tariff: TariffCategory::Subsidized450Va,
        custom_rate: Some(1500.0),
        ..Default::default()
    })
    .unwrap();

    let record = build_record(&manual_form("Heater", 1000.0, 2.0), pricing.current_rate()).unwrap();
    // 1 kW x 2 h x 30 d = 60 kWh
    assert!((record.cost() - 90_000.0).abs() < 1e-6);
}
