//! PowerCost Calculator - Demo CLI
//!
//! Non-interactive walkthrough of the calculation core: fills a ledger with
//! a few typical household devices, shows a rejected form, and prints the
//! results panel.

use powercost_calculator_lib::catalog;
use powercost_calculator_lib::core::PricingConfig;
use powercost_calculator_lib::device::{build_record, DeviceForm};
use powercost_calculator_lib::i18n::I18n;
use powercost_calculator_lib::ledger::DeviceLedger;
use powercost_calculator_lib::pricing::{PricingEngine, TariffCategory};
use powercost_calculator_lib::report::{format_thousands, render_results};
use powercost_calculator_lib::usage::{Period, UsagePattern};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let i18n = I18n::new(std::env::args().nth(1).as_deref().unwrap_or("auto"));

    println!("==============================================");
    println!("   {} - Demo", i18n.get("app.title"));
    println!("==============================================\n");

    // 1. Pricing
    println!("[1/3] Pricing...");
    let pricing_config = PricingConfig {
        tariff: TariffCategory::Household1300Va,
        ..Default::default()
    };
    let pricing = PricingEngine::new(&pricing_config)?;
    println!(
        "      {}: {} {}/kWh\n",
        pricing.tariff().label(),
        pricing.currency_symbol(),
        format_thousands(pricing.current_rate(), 2)
    );

    // 2. Devices
    println!("[2/3] Adding devices...");
    let mut ledger = DeviceLedger::new();
    let forms = [
        DeviceForm {
            name: "Kulkas".to_string(),
            appliance: catalog::find("Kulkas 2 Pintu"),
            manual_power: None,
            voltage: 220.0,
            current: 0.0,
            usage: UsagePattern::AllDay,
            period: Period::Month,
        },
        DeviceForm {
            name: "AC Kamar".to_string(),
            appliance: catalog::find("AC (1 PK)"),
            manual_power: None,
            voltage: 220.0,
            current: 0.0,
            usage: UsagePattern::Slider(8.0),
            period: Period::Month,
        },
        DeviceForm {
            name: "Pompa Air".to_string(),
            appliance: None,
            manual_power: None,
            voltage: 220.0,
            current: 0.6,
            usage: UsagePattern::Custom(2.0),
            period: Period::Month,
        },
        DeviceForm {
            name: "Lampu Teras".to_string(),
            appliance: catalog::find("Lampu LED 9W"),
            manual_power: None,
            voltage: 220.0,
            current: 0.0,
            usage: UsagePattern::Slider(12.0),
            period: Period::Month,
        },
        // Rejected: catalog wattage and a current at the same time
        DeviceForm {
            name: "Setrika".to_string(),
            appliance: catalog::find("Setrika"),
            manual_power: None,
            voltage: 220.0,
            current: 4.5,
            usage: UsagePattern::Custom(1.0),
            period: Period::Custom(30),
        },
    ];

    for form in &forms {
        match build_record(form, pricing.current_rate()) {
            Ok(record) => {
                println!("      + {:<12} {:>6.0} W", record.name(), record.power_watts());
                ledger.append(record);
            }
            Err(e) => {
                let message = e.message_key().map(|k| i18n.get(k)).unwrap_or_else(|| e.to_string());
                println!("      ! {:<12} {}", form.name, message);
            }
        }
    }
    println!();

    // 3. Results
    println!("[3/3] Results\n");
    print!(
        "{}",
        render_results(&ledger, &i18n, pricing.currency_symbol(), 500_000.0, 40)
    );

    Ok(())
}
