//! Text and JSON rendering of dashboard views.

use std::fmt::{self, Write};

use rust_decimal::Decimal;
use wealthfolio_demo_core::assets::AssetDetails;
use wealthfolio_demo_core::constants::{DASHBOARD_TITLE, DEMO_DATA_NOTICE};
use wealthfolio_demo_core::metrics::DescriptiveStatistics;
use wealthfolio_demo_core::views::{
    AllocationView, DetailedAnalysisView, HistoryView, OverviewView, RiskReturnView,
};
use wealthfolio_demo_core::DashboardView;

use crate::config::OutputFormat;

const NOT_APPLICABLE: &str = "n/a";

/// Renders one view. JSON is a single compact line, so the views of a batch
/// run read as JSON Lines.
pub fn render(view: &DashboardView, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(view)?),
        OutputFormat::Text => Ok(render_text(view)?),
    }
}

/// Page title, followed by the seed that replays this session when known.
pub fn header(seed: Option<u64>) -> String {
    let mut out = format!("{}\n{}\n", DASHBOARD_TITLE, "=".repeat(DASHBOARD_TITLE.len()));
    if let Some(seed) = seed {
        out.push_str(&format!("Seed: {} (replay with --seed {})\n", seed, seed));
    }
    out
}

pub fn footer() -> String {
    format!("---\n*Note: {}*\n", DEMO_DATA_NOTICE)
}

pub fn render_text(view: &DashboardView) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let title = view.title();
    writeln!(out, "\n{}\n{}", title, "-".repeat(title.len()))?;
    match view {
        DashboardView::Overview(v) => write_overview(&mut out, v)?,
        DashboardView::Allocation(v) => write_allocation(&mut out, v)?,
        DashboardView::History(v) => write_history(&mut out, v)?,
        DashboardView::RiskReturn(v) => write_risk_return(&mut out, v)?,
        DashboardView::DetailedAnalysis(v) => write_detailed_analysis(&mut out, v)?,
    }
    Ok(out)
}

fn write_overview(out: &mut String, view: &OverviewView) -> fmt::Result {
    writeln!(out, "Raw Portfolio Data")?;
    write_asset_table(out, &view.assets)?;

    let metrics = &view.metrics;
    writeln!(
        out,
        "\nTotal Portfolio Value: {}",
        format_currency(metrics.total_value)
    )?;
    writeln!(
        out,
        "Average Return: {}",
        format_optional(metrics.average_return, format_percent)
    )?;
    writeln!(
        out,
        "Average Risk: {}",
        format_optional(metrics.average_risk, format_percent)
    )?;
    writeln!(
        out,
        "Generated at: {}",
        view.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    )
}

fn write_allocation(out: &mut String, view: &AllocationView) -> fmt::Result {
    writeln!(out, "Asset Allocation Data")?;
    writeln!(out, "{:<16}{:>16}{:>12}", "Asset", "Value", "Percentage")?;
    for entry in &view.entries {
        writeln!(
            out,
            "{:<16}{:>16}{:>12}",
            entry.asset.as_str(),
            format_currency(entry.value),
            format_percent(entry.percentage)
        )?;
    }

    writeln!(out, "\n{}", view.chart.title)?;
    for slice in &view.chart.slices {
        writeln!(
            out,
            "  {} {} ({})",
            slice.color,
            slice.label,
            format_currency(slice.value)
        )?;
    }
    Ok(())
}

fn write_history(out: &mut String, view: &HistoryView) -> fmt::Result {
    writeln!(out, "Historical Data")?;
    writeln!(out, "{:<12}{:>18}", "Date", "Portfolio Value")?;
    for point in &view.points {
        writeln!(
            out,
            "{:<12}{:>18}",
            point.date.format("%Y-%m-%d").to_string(),
            format_currency(point.value)
        )?;
    }
    writeln!(
        out,
        "\n{} ({} points, line {})",
        view.chart.title,
        view.chart.points.len(),
        view.chart.color
    )
}

fn write_risk_return(out: &mut String, view: &RiskReturnView) -> fmt::Result {
    writeln!(out, "Risk-Return Data")?;
    writeln!(
        out,
        "{:<16}{:>10}{:>10}{:>16}",
        "Asset", "Risk", "Returns", "Value"
    )?;
    for row in &view.rows {
        writeln!(
            out,
            "{:<16}{:>10}{:>10}{:>16}",
            row.asset.as_str(),
            format_percent(row.risk_pct),
            format_percent(row.return_pct),
            format_currency(row.value)
        )?;
    }

    let chart = &view.chart;
    writeln!(
        out,
        "\n{} (x: {}, y: {})",
        chart.title, chart.x_label, chart.y_label
    )?;
    for point in &chart.points {
        writeln!(
            out,
            "  {} {} at ({:.2}, {:.2}), size {}",
            point.color,
            point.label,
            point.x,
            point.y,
            format_currency(point.size)
        )?;
    }
    Ok(())
}

fn write_detailed_analysis(out: &mut String, view: &DetailedAnalysisView) -> fmt::Result {
    writeln!(out, "Complete Asset Details")?;
    write_asset_table(out, &view.assets)?;

    writeln!(out, "\nSummary Statistics")?;
    writeln!(out, "{:<8}{:>16}{:>12}{:>12}", "", "Value", "Returns", "Risk")?;
    let stats = &view.statistics;
    let columns = [&stats.value, &stats.return_pct, &stats.risk_pct];

    writeln!(
        out,
        "{:<8}{:>16}{:>12}{:>12}",
        "count", stats.value.count, stats.return_pct.count, stats.risk_pct.count
    )?;
    let rows: [(&str, fn(&DescriptiveStatistics) -> Option<Decimal>); 7] = [
        ("mean", |s| s.mean),
        ("std", |s| s.std),
        ("min", |s| s.min),
        ("25%", |s| s.p25),
        ("50%", |s| s.p50),
        ("75%", |s| s.p75),
        ("max", |s| s.max),
    ];
    for (label, field) in rows {
        writeln!(
            out,
            "{:<8}{:>16}{:>12}{:>12}",
            label,
            format_optional(field(columns[0]), format_currency),
            format_optional(field(columns[1]), format_number),
            format_optional(field(columns[2]), format_number)
        )?;
    }
    Ok(())
}

fn write_asset_table(out: &mut String, assets: &[AssetDetails]) -> fmt::Result {
    writeln!(
        out,
        "{:<16}{:>16}{:>10}{:>10}",
        "Asset", "Value", "Returns", "Risk"
    )?;
    for asset in assets {
        writeln!(
            out,
            "{:<16}{:>16}{:>10}{:>10}",
            asset.name.as_str(),
            format_currency(asset.value),
            format_percent(asset.return_pct),
            format_percent(asset.risk_pct)
        )?;
    }
    Ok(())
}

/// Formats a dollar amount with thousands separators, e.g. `$1,234.56`.
pub fn format_currency(value: Decimal) -> String {
    let fixed = format_number(value.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value.is_sign_negative() && !value.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}${}.{}", sign, grouped, fraction)
}

pub fn format_percent(value: Decimal) -> String {
    format!("{}%", format_number(value))
}

pub fn format_number(value: Decimal) -> String {
    format!("{:.2}", value.round_dp(2))
}

fn format_optional(value: Option<Decimal>, format: fn(Decimal) -> String) -> String {
    value.map(format).unwrap_or_else(|| NOT_APPLICABLE.to_string())
}
