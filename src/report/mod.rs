//! Text rendering of ledger contents
//!
//! Produces the device table, the summary block, horizontal bar charts and
//! the saving tips shown by the terminal front-end.

use crate::core::{ApplianceRecord, ChartPoint, LedgerSummary};
use crate::i18n::I18n;
use crate::ledger::DeviceLedger;

/// Format a number with `,` thousands separators and fixed decimals
pub fn format_thousands(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(formatted.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let negative = value < 0.0 && formatted.chars().any(|c| c != '0' && c != '.');
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(frac_part) = frac_part {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Whole-unit amount with currency symbol, e.g. "Rp 156,028"
pub fn format_money(symbol: &str, value: f64) -> String {
    format!("{} {}", symbol, format_thousands(value, 0))
}

/// Device table, ranked from most to least expensive
pub fn render_table(records: &[ApplianceRecord], i18n: &I18n, currency_symbol: &str) -> String {
    let header = vec![
        "#".to_string(),
        i18n.get("table.name"),
        i18n.get("table.power"),
        i18n.get("table.energy"),
        i18n.get("table.cost"),
        i18n.get("table.hours"),
        i18n.get("table.days"),
    ];
    let hours_unit = i18n.get("unit.hours");
    let days_unit = i18n.get("unit.days");

    let rows: Vec<Vec<String>> = records
        .iter()
        .enumerate()
        .map(|(i, r)| {
            vec![
                (i + 1).to_string(),
                r.name().to_string(),
                format!("{:.0} W", r.power_watts()),
                format!("{:.1} kWh", r.energy_kwh()),
                format_money(currency_symbol, r.cost()),
                format!("{:.1} {}", r.hours_per_day(), hours_unit),
                format!("{} {}", r.days(), days_unit),
            ]
        })
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &header, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, &rule, &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(col, (cell, width))| {
            // Name column reads better left-aligned, numbers right-aligned
            if col == 1 {
                format!("{:<width$}", cell, width = *width)
            } else {
                format!("{:>width$}", cell, width = *width)
            }
        })
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}

/// Totals block
pub fn render_summary(summary: &LedgerSummary, i18n: &I18n, currency_symbol: &str) -> String {
    let mut out = String::new();
    let count = summary.device_count.to_string();
    out.push_str(&format!(
        "{}: {:.1} kWh ({})\n",
        i18n.get("summary.total_energy"),
        summary.total_energy_kwh,
        i18n.format("summary.devices", &[&count])
    ));

    out.push_str(&format!(
        "{}: {}",
        i18n.get("summary.total_cost"),
        format_money(currency_symbol, summary.total_cost)
    ));
    if summary.total_cost > 0.0 {
        let per_day = format_money(currency_symbol, summary.daily_cost_estimate);
        out.push_str(&format!(" ({})", i18n.format("summary.per_day", &[&per_day])));
    }
    out.push('\n');
    out
}

/// Horizontal bar chart; the largest value spans `width` cells
pub fn render_bar_chart(
    title: &str,
    points: &[ChartPoint],
    width: usize,
    format_value: impl Fn(f64) -> String,
) -> String {
    let mut out = String::new();
    out.push_str(title);
    out.push('\n');

    let max_value = points.iter().map(|p| p.value).fold(0.0_f64, f64::max);
    let label_width = points.iter().map(|p| p.label.chars().count()).max().unwrap_or(0);

    for point in points {
        let bar_len = if max_value > 0.0 {
            ((point.value / max_value) * width as f64).round() as usize
        } else {
            0
        };
        out.push_str(&format!(
            "{:<label_width$} | {} {}\n",
            point.label,
            "#".repeat(bar_len),
            format_value(point.value),
            label_width = label_width
        ));
    }
    out
}

/// Energy saving tips
pub fn render_tips(i18n: &I18n) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", i18n.get("tips.header")));
    for n in 1..=5 {
        out.push_str(&format!("{}. {}\n", n, i18n.get(&format!("tips.{}", n))));
    }
    out
}

/// Everything the results panel shows for the current ledger
pub fn render_results(
    ledger: &DeviceLedger,
    i18n: &I18n,
    currency_symbol: &str,
    savings_tip_threshold: f64,
    chart_width: usize,
) -> String {
    let mut out = String::new();
    out.push_str(&format!("=== {} ===\n", i18n.get("results.header")));

    if ledger.is_empty() {
        out.push_str(&format!("{}\n", i18n.get("results.empty")));
        return out;
    }

    let summary = ledger.summary(savings_tip_threshold);
    out.push_str(&render_summary(&summary, i18n, currency_symbol));
    out.push('\n');
    out.push_str(&render_table(ledger.records(), i18n, currency_symbol));
    out.push('\n');
    out.push_str(&render_bar_chart(
        &i18n.get("chart.cost"),
        &ledger.cost_series(),
        chart_width,
        |v| format_money(currency_symbol, v),
    ));
    out.push('\n');
    out.push_str(&render_bar_chart(
        &i18n.get("chart.energy"),
        &ledger.energy_series(),
        chart_width,
        |v| format!("{:.1} kWh", v),
    ));

    if summary.show_saving_tips {
        out.push('\n');
        out.push_str(&render_tips(i18n));
    }
    out
}
