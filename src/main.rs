//! PowerCost Calculator - Main entry point
//!
//! Terminal front-end for estimating household electricity consumption and
//! cost. Runs an interactive session by default; `estimate` calculates a
//! single device and exits.

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use powercost_calculator_lib::catalog;
use powercost_calculator_lib::core::{Config, Error};
use powercost_calculator_lib::device::{build_record, DeviceForm};
use powercost_calculator_lib::form::Prompter;
use powercost_calculator_lib::i18n::I18n;
use powercost_calculator_lib::ledger::DeviceLedger;
use powercost_calculator_lib::pricing::{PricingEngine, TariffCategory};
use powercost_calculator_lib::report::{format_thousands, render_results};
use powercost_calculator_lib::usage::{Period, UsagePattern};
use std::io;
use std::path::PathBuf;

/// Household electricity cost calculator.
/// Add appliances with their power draw and usage pattern to see how much
/// energy they use and what it costs at your PLN tariff.
#[derive(Parser, Debug)]
#[command(version, long_about)]
struct Cli {
    /// Configuration file to use instead of the one in the user config directory
    #[arg(long)]
    config: Option<PathBuf>,
    /// Interface language: auto, en or id
    #[arg(long, value_parser = parse_language)]
    lang: Option<String>,
    /// PLN tariff category
    #[arg(short, long, value_enum)]
    tariff: Option<TariffCategory>,
    /// Custom rate per kWh; wins over the tariff category when it differs
    #[arg(short, long)]
    rate: Option<f64>,
    #[command(subcommand)]
    command: Option<Command>,
}

fn parse_language(lang: &str) -> Result<String, String> {
    if I18n::is_supported(lang) {
        return Ok(lang.to_string());
    }
    let codes: Vec<&str> = I18n::available_languages().iter().map(|(code, _)| *code).collect();
    Err(format!("unsupported language '{}', expected auto or one of: {}", lang, codes.join(", ")))
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Calculate a single device and exit
    Estimate(EstimateArgs),
}

#[derive(Args, Debug)]
struct EstimateArgs {
    /// Device name
    #[arg(short, long)]
    name: String,
    /// Appliance from the built-in list (name or number); its wattage becomes the default power
    #[arg(short, long)]
    appliance: Option<String>,
    /// Power in watts, overriding the appliance wattage
    #[arg(short = 'w', long)]
    power: Option<f64>,
    /// Voltage in volts for V x A power
    #[arg(long)]
    voltage: Option<f64>,
    /// Current in amperes; power becomes voltage x current
    #[arg(short = 'i', long, default_value_t = 0.0)]
    current: f64,
    /// Device runs 24 hours a day
    #[arg(long, conflicts_with = "hours")]
    all_day: bool,
    /// Hours of use per day (0-24)
    #[arg(long)]
    hours: Option<f64>,
    /// Calculation period
    #[arg(short, long, value_enum, default_value = "month")]
    period: PeriodArg,
    /// Number of days for `--period custom`
    #[arg(long, required_if_eq("period", "custom"))]
    days: Option<i64>,
}

#[derive(ValueEnum, Copy, Clone, PartialEq, Eq, Debug)]
enum PeriodArg {
    Day,
    Week,
    Month,
    Custom,
}

/// Session state owned by the front-end for the lifetime of the process
struct AppState {
    config: Config,
    pricing: PricingEngine,
    ledger: DeviceLedger,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging; keep the form readable unless RUST_LOG asks for more
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    log::info!("Starting PowerCost Calculator v{}", env!("CARGO_PKG_VERSION"));

    let mut config = load_config(cli.config.as_ref())?;
    if let Some(lang) = &cli.lang {
        config.general.language = lang.clone();
    }
    if let Some(tariff) = cli.tariff {
        config.pricing.tariff = tariff;
        config.pricing.custom_rate = None;
    }
    if let Some(rate) = cli.rate {
        config.pricing.custom_rate = Some(rate);
    }

    let i18n = I18n::new(&config.general.language);

    let pricing = match PricingEngine::new(&config.pricing) {
        Ok(pricing) => pricing,
        Err(e) => exit_with(&i18n, &e),
    };

    let mut state = AppState {
        config,
        pricing,
        ledger: DeviceLedger::new(),
    };

    match cli.command {
        Some(Command::Estimate(args)) => run_estimate(&mut state, &i18n, args),
        None => run_interactive(&mut state, &i18n),
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(Config::load().unwrap_or_else(|e| {
            log::warn!("Failed to load config, using defaults: {}", e);
            Config::default()
        })),
    }
}

/// Translated message for validation errors, plain text otherwise
fn user_message(i18n: &I18n, err: &Error) -> String {
    match err.message_key() {
        Some(key) => i18n.get(key),
        None => err.to_string(),
    }
}

fn exit_with(i18n: &I18n, err: &Error) -> ! {
    log::warn!("{}", err);
    eprintln!("{}", user_message(i18n, err));
    std::process::exit(2);
}

fn run_estimate(state: &mut AppState, i18n: &I18n, args: EstimateArgs) -> anyhow::Result<()> {
    let appliance = match args.appliance.as_deref().map(catalog::lookup).transpose() {
        Ok(appliance) => appliance.filter(|a| !a.is_sentinel()),
        Err(e) => exit_with(i18n, &e),
    };

    let default_hours = state.config.usage.default_hours;
    let usage = if args.all_day {
        UsagePattern::AllDay
    } else {
        UsagePattern::Custom(args.hours.unwrap_or(default_hours))
    };
    let period = match args.period {
        PeriodArg::Day => Period::Day,
        PeriodArg::Week => Period::Week,
        PeriodArg::Month => Period::Month,
        PeriodArg::Custom => Period::Custom(args.days.unwrap_or(i64::from(state.config.usage.default_custom_days))),
    };

    let form = DeviceForm {
        name: args.name,
        appliance,
        manual_power: args.power,
        voltage: args.voltage.unwrap_or(state.config.usage.default_voltage),
        current: args.current,
        usage,
        period,
    };

    match build_record(&form, state.pricing.current_rate()) {
        Ok(record) => state.ledger.append(record),
        Err(e) => exit_with(i18n, &e),
    }

    print_rate(state, i18n);
    print!("{}", results(state, i18n));
    Ok(())
}

fn run_interactive(state: &mut AppState, i18n: &I18n) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout(), i18n);

    prompter.say(&format!("=== {} ===", i18n.get("app.title")))?;
    prompter.say(&i18n.get("app.subtitle"))?;
    print_rate(state, i18n);

    loop {
        prompter.say("")?;
        let Some(choice) = prompter.ask(&i18n.get("menu.prompt"), None)? else {
            break;
        };

        match choice.to_lowercase().as_str() {
            "a" => {
                let Some(form) = prompter.read_device_form(&state.config.usage)? else {
                    break;
                };
                match build_record(&form, state.pricing.current_rate()) {
                    Ok(record) => {
                        state.ledger.append(record);
                        prompter.say(&i18n.get("form.added"))?;
                        prompter.say(&results(state, i18n))?;
                    }
                    Err(e) if e.is_validation() => {
                        log::warn!("Rejected device: {}", e);
                        prompter.say(&user_message(i18n, &e))?;
                    }
                    Err(e) => return Err(e.into()),
                }
            }
            "l" => prompter.say(&results(state, i18n))?,
            "c" => {
                state.ledger.clear();
                prompter.say(&i18n.get("results.cleared"))?;
            }
            "t" => {
                let Some(pricing) = prompter.read_pricing(&state.config.pricing)? else {
                    break;
                };
                match state.pricing.update_config(&pricing) {
                    Ok(()) => {
                        state.config.pricing = pricing;
                        print_rate(state, i18n);
                    }
                    Err(e) => prompter.say(&user_message(i18n, &e))?,
                }
            }
            "q" => break,
            "" => {}
            other => prompter.say(&i18n.format("menu.unknown", &[other]))?,
        }
    }

    prompter.say(&i18n.get("app.goodbye"))?;
    Ok(())
}

fn print_rate(state: &AppState, i18n: &I18n) {
    let pricing = &state.pricing;
    println!(
        "{} - {}",
        pricing.tariff().label(),
        i18n.format(
            "tariff.rate",
            &[pricing.currency_symbol(), &format_thousands(pricing.current_rate(), 2)],
        )
    );
    if pricing.uses_custom_rate() {
        println!("{}", i18n.get("tariff.custom_active"));
    }
}

fn results(state: &AppState, i18n: &I18n) -> String {
    render_results(
        &state.ledger,
        i18n,
        state.pricing.currency_symbol(),
        state.config.advanced.savings_tip_threshold,
        state.config.advanced.chart_width,
    )
}
