//! Interactive terminal form
//!
//! Prompts for the same fields as the calculator's input panel and hands
//! back raw values. Validation is left to [`crate::device::build_record`] and
//! [`crate::pricing::resolve_rate`].

use crate::catalog::{self, Appliance};
use crate::core::{PricingConfig, Result, UsageConfig};
use crate::device::{computed_power, DeviceForm};
use crate::i18n::I18n;
use crate::pricing::TariffCategory;
use crate::report::format_thousands;
use crate::usage::{Period, UsagePattern};
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Line-oriented prompter; every `ask*` returns `Ok(None)` once input ends
pub struct Prompter<'a, R, W> {
    input: R,
    output: W,
    i18n: &'a I18n,
}

impl<'a, R: BufRead, W: Write> Prompter<'a, R, W> {
    pub fn new(input: R, output: W, i18n: &'a I18n) -> Self {
        Self { input, output, i18n }
    }

    /// Print a line
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Ask for a line of text, trimmed
    pub fn ask(&mut self, label: &str, default: Option<&str>) -> Result<Option<String>> {
        match default {
            Some(default) => write!(self.output, "{} [{}]: ", label, default)?,
            None => write!(self.output, "{}: ", label)?,
        }
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let line = line.trim();
        if line.is_empty() {
            return Ok(Some(default.unwrap_or("").to_string()));
        }
        Ok(Some(line.to_string()))
    }

    /// Ask for a number, re-prompting until one parses
    pub fn ask_number<T>(&mut self, label: &str, default: T) -> Result<Option<T>>
    where
        T: FromStr + Display + Copy,
    {
        let default_text = default.to_string();
        loop {
            let Some(answer) = self.ask(label, Some(&default_text))? else {
                return Ok(None);
            };
            match answer.parse::<T>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => {
                    let msg = self.i18n.get("form.not_a_number");
                    self.say(&msg)?;
                }
            }
        }
    }

    /// Ask for a tariff category and an optional custom rate
    pub fn read_pricing(&mut self, current: &PricingConfig) -> Result<Option<PricingConfig>> {
        let i18n = self.i18n;
        self.say(&format!("--- {} ---", i18n.get("tariff.header")))?;
        for (i, category) in TariffCategory::ALL.iter().enumerate() {
            self.say(&format!(
                "  [{}] {} ({})",
                i + 1,
                category.label(),
                format_thousands(category.rate_per_kwh(), 2)
            ))?;
        }

        let current_index = TariffCategory::ALL
            .iter()
            .position(|c| *c == current.tariff)
            .unwrap_or(0)
            + 1;
        let tariff = loop {
            let Some(choice) = self.ask_number(&i18n.get("tariff.category"), current_index)? else {
                return Ok(None);
            };
            match choice.checked_sub(1).and_then(|i| TariffCategory::ALL.get(i)) {
                Some(category) => break *category,
                None => {
                    let msg = i18n.format("menu.unknown", &[&choice.to_string()]);
                    self.say(&msg)?;
                }
            }
        };

        let scheduled = tariff.rate_per_kwh();
        self.say(&i18n.format(
            "tariff.rate",
            &[&current.currency_symbol, &format_thousands(scheduled, 2)],
        ))?;

        let Some(custom) = self.ask_number(&i18n.get("tariff.custom"), scheduled)? else {
            return Ok(None);
        };

        Ok(Some(PricingConfig {
            tariff,
            custom_rate: (custom != scheduled).then_some(custom),
            currency_symbol: current.currency_symbol.clone(),
        }))
    }

    /// Ask for every field of one device
    pub fn read_device_form(&mut self, defaults: &UsageConfig) -> Result<Option<DeviceForm>> {
        let i18n = self.i18n;
        self.say(&format!("--- {} ---", i18n.get("form.header")))?;

        let Some(name) = self.ask(&i18n.get("form.name"), None)? else {
            return Ok(None);
        };

        let Some(appliance) = self.read_appliance()? else {
            return Ok(None);
        };
        let catalog_power = appliance.map(|a| a.power_watts).unwrap_or(0.0);
        if catalog_power > 0.0 {
            self.say(&i18n.format("form.catalog_power", &[&format!("{:.0}", catalog_power)]))?;
        }

        let Some(manual_power) = self.ask_number(&i18n.get("form.manual_power"), catalog_power)? else {
            return Ok(None);
        };
        let Some(voltage) = self.ask_number(&i18n.get("form.voltage"), defaults.default_voltage)? else {
            return Ok(None);
        };
        let Some(current) = self.ask_number(&i18n.get("form.current"), 0.0)? else {
            return Ok(None);
        };
        if let Some(power) = computed_power(voltage, current) {
            self.say(&i18n.format("form.computed_power", &[&format!("{:.1}", power)]))?;
        }

        self.say(&format!("--- {} ---", i18n.get("form.usage_header")))?;
        let Some(usage) = self.read_usage(defaults.default_hours)? else {
            return Ok(None);
        };
        let Some(period) = self.read_period(defaults.default_custom_days)? else {
            return Ok(None);
        };

        Ok(Some(DeviceForm {
            name,
            appliance,
            manual_power: (manual_power != catalog_power).then_some(manual_power),
            voltage,
            current,
            usage,
            period,
        }))
    }

    fn read_appliance(&mut self) -> Result<Option<Option<&'static Appliance>>> {
        let i18n = self.i18n;
        for (i, appliance) in catalog::all().iter().enumerate().skip(1) {
            self.say(&format!("  [{}] {} ({:.0} W)", i, appliance.name, appliance.power_watts))?;
        }
        loop {
            let Some(choice) = self.ask(&i18n.get("form.appliance"), None)? else {
                return Ok(None);
            };
            match catalog::lookup(&choice) {
                Ok(appliance) if appliance.is_sentinel() => return Ok(Some(None)),
                Ok(appliance) => return Ok(Some(Some(appliance))),
                Err(e) => {
                    log::debug!("{}", e);
                    self.say(&i18n.get("error.unknown_appliance"))?;
                }
            }
        }
    }

    fn read_usage(&mut self, default_hours: f64) -> Result<Option<UsagePattern>> {
        let i18n = self.i18n;
        loop {
            let Some(choice) = self.ask_number(&i18n.get("form.usage"), 2u8)? else {
                return Ok(None);
            };
            let pattern = match choice {
                1 => {
                    self.say(&i18n.get("form.usage_all_day"))?;
                    Some(UsagePattern::AllDay)
                }
                2 => self
                    .ask_number(&i18n.get("form.hours_slider"), default_hours)?
                    .map(UsagePattern::Slider),
                3 => self
                    .ask_number(&i18n.get("form.hours_custom"), default_hours)?
                    .map(UsagePattern::Custom),
                other => {
                    self.say(&i18n.format("menu.unknown", &[&other.to_string()]))?;
                    continue;
                }
            };
            return Ok(pattern);
        }
    }

    fn read_period(&mut self, default_days: u32) -> Result<Option<Period>> {
        let i18n = self.i18n;
        loop {
            let Some(choice) = self.ask_number(&i18n.get("form.period"), 3u8)? else {
                return Ok(None);
            };
            let period = match choice {
                1 => Some(Period::Day),
                2 => Some(Period::Week),
                3 => Some(Period::Month),
                4 => self
                    .ask_number(&i18n.get("form.days"), i64::from(default_days))?
                    .map(Period::Custom),
                other => {
                    self.say(&i18n.format("menu.unknown", &[&other.to_string()]))?;
                    continue;
                }
            };
            return Ok(period);
        }
    }
}
