//! Plain-text rendering of a [`DashboardReport`], one block per section.

use crate::core::report::{CostRow, DashboardReport};
use crate::domain::model::{Section, Trend};
use crate::utils::format::{format_amount, format_rate, format_signed, format_thousands};

/// Width, in cells, of the longest bar of the provisions chart.
pub const CHART_WIDTH: usize = 40;

/// Renders the header and the requested sections. An empty slice renders all.
pub fn render_dashboard(report: &DashboardReport, sections: &[Section]) -> String {
    let sections: &[Section] = if sections.is_empty() {
        &Section::ALL
    } else {
        sections
    };

    let mut blocks = vec![render_header(report)];
    blocks.extend(sections.iter().map(|section| render_section(report, *section)));
    blocks.join("\n")
}

pub fn render_header(report: &DashboardReport) -> String {
    let lines = [
        format!("🏙️ {}", report.community),
        format!("{} • {}", report.title, report.subtitle),
        "Track manpower, running costs, provisions, and per sq ft monthly maintenance.".to_string(),
        format!(
            "Total built-up area: {} sq ft | Additional provision (₹): {}",
            format_thousands(report.total_sqft),
            format_thousands(report.inputs.additional_provision)
        ),
    ];
    lines.join("\n") + "\n"
}

pub fn render_section(report: &DashboardReport, section: Section) -> String {
    let body = match section {
        Section::Agenda => agenda(report),
        Section::Committee => committee(report),
        Section::MaintenanceOverview => maintenance_overview(report),
        Section::Staff => staff(report),
        Section::Manpower => manpower(report),
        Section::RunningCost => running_cost(report),
        Section::Provisions => provisions(report),
        Section::Revision => revision(report),
    };
    format!("== {} ==\n{}\n", section.title(), body.join("\n"))
}

fn metric(label: &str, value: String) -> String {
    format!("{}: {}", label, value)
}

fn agenda(report: &DashboardReport) -> Vec<String> {
    let mut lines: Vec<String> = report
        .agenda
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item))
        .collect();
    lines.push(String::new());
    lines.push(
        "ℹ️ This meeting sets the foundation for transparency, clarity in processes, \
         and collaborative improvement of the community."
            .to_string(),
    );
    lines
}

fn committee(report: &DashboardReport) -> Vec<String> {
    let left_width = report
        .committee
        .left
        .iter()
        .map(|name| name.chars().count())
        .max()
        .unwrap_or(0);
    let rows = report.committee.left.len().max(report.committee.right.len());

    let mut lines: Vec<String> = (0..rows)
        .map(|i| {
            let left = report
                .committee
                .left
                .get(i)
                .map(|name| format!("• {:<width$}", name, width = left_width))
                .unwrap_or_else(|| " ".repeat(left_width + 2));
            match report.committee.right.get(i) {
                Some(name) => format!("{}    • {}", left, name),
                None => left.trim_end().to_string(),
            }
        })
        .collect();
    lines.push(String::new());
    lines.push(
        "✅ This team is responsible for governance, decision-making, and representing \
         resident interests in all key matters."
            .to_string(),
    );
    lines
}

fn maintenance_overview(report: &DashboardReport) -> Vec<String> {
    report
        .maintenance_overview
        .iter()
        .map(|note| format!("- {}", note))
        .collect()
}

fn staff(report: &DashboardReport) -> Vec<String> {
    let rows: Vec<Vec<String>> = report
        .facility
        .staff
        .iter()
        .map(|record| vec![record.role.clone(), record.name.clone()])
        .collect();

    vec![
        format!(
            "Facility Manager: {} – Responsible for overseeing all maintenance operations \
             and coordination with {}.",
            report.facility.manager, report.facility.partner
        ),
        String::new(),
        "Key Support Staff".to_string(),
        render_table(&["Role", "Name"], &rows, &[]),
        "This structure ensures quicker response, accountability, and smoother daily operations."
            .to_string(),
    ]
}

fn manpower(report: &DashboardReport) -> Vec<String> {
    let view = &report.manpower;
    let rows: Vec<Vec<String>> = view
        .rows
        .iter()
        .map(|row| {
            vec![
                row.role.clone(),
                row.previous.to_string(),
                row.current.to_string(),
                format_signed(row.change),
                row.indicator(),
            ]
        })
        .collect();

    let mut lines = vec![
        format!(
            "Manpower Deployment – {} vs {}",
            view.summary.previous_month, view.summary.current_month
        ),
        render_table(
            &[
                "Role",
                view.summary.previous_month.as_str(),
                view.summary.current_month.as_str(),
                "Change",
                "Change Indicator",
            ],
            &rows,
            &[1, 2, 3],
        ),
    ];

    for row in view.rows.iter().filter(|row| row.trend != Trend::Unchanged) {
        let verb = if row.trend == Trend::Increase {
            "increased"
        } else {
            "decreased"
        };
        lines.push(format!(
            "- {} {} from {} → {} ({})",
            row.role,
            verb,
            row.previous,
            row.current,
            format_signed(row.change)
        ));
    }
    if view.summary.unchanged > 0 {
        lines.push("- All other roles remain stable to ensure continuity.".to_string());
    }
    lines.push(format!(
        "Total headcount: {} → {}",
        view.summary.previous_total, view.summary.current_total
    ));
    lines
}

fn cost_rows(rows: &[CostRow]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| vec![row.head.clone(), format_thousands(row.amount)])
        .collect()
}

fn running_cost(report: &DashboardReport) -> Vec<String> {
    vec![
        "Cost Breakdown".to_string(),
        render_table(
            &["Head", "Amount (₹)"],
            &cost_rows(&report.running_cost.rows),
            &[1],
        ),
        metric(
            "Total Monthly Running Cost (₹)",
            format_thousands(report.running_cost.total),
        ),
        metric(
            "Monthly Running Cost / sq ft (₹)",
            format_rate(report.metrics.running_cost_per_area_per_month),
        ),
        String::new(),
        "These costs cover essential services like water, power, facility management, \
         waste management, and basic upkeep."
            .to_string(),
    ]
}

fn provisions(report: &DashboardReport) -> Vec<String> {
    let metrics = &report.metrics;
    let months = report.inputs.amortization_months;
    vec![
        "Major Provisions / Capex Items".to_string(),
        render_table(
            &["Item", "Amount (₹)"],
            &cost_rows(&report.provisions.rows),
            &[1],
        ),
        "Chart View".to_string(),
        render_bar_chart(&report.provisions.rows, CHART_WIDTH),
        metric(
            "Base Provisions / Capex (₹)",
            format_thousands(report.provisions.total),
        ),
        metric(
            "Additional Provision (₹)",
            format_thousands(report.inputs.additional_provision),
        ),
        metric(
            "Effective Provisions (₹)",
            format_thousands(metrics.effective_total_provisions),
        ),
        String::new(),
        format!("Normalized view (over {} months)", months),
        metric(
            "Per Month Provision (₹)",
            format_amount(metrics.provision_per_month),
        ),
        metric(
            "Provisions / sq ft / month (₹)",
            format_rate(metrics.provision_per_area_per_month),
        ),
        String::new(),
        format!(
            "ℹ️ Provisions are distributed over {} months and normalized by total built-up area \
             ({} sq ft) to estimate the per sq ft per month impact.",
            months,
            format_thousands(report.total_sqft)
        ),
    ]
}

fn revision(report: &DashboardReport) -> Vec<String> {
    let metrics = &report.metrics;
    vec![
        metric(
            "Total Built-up Area (sq ft)",
            format_thousands(report.total_sqft),
        ),
        metric(
            "Monthly Running Cost (₹)",
            format_thousands(report.running_cost.total),
        ),
        metric(
            "Base Provisions (₹)",
            format_thousands(report.provisions.total),
        ),
        metric(
            "Additional Provision (₹)",
            format_thousands(report.inputs.additional_provision),
        ),
        metric(
            "Running Cost / sq ft / month (₹)",
            format_rate(metrics.running_cost_per_area_per_month),
        ),
        metric(
            "Provisions / sq ft / month (₹)",
            format_rate(metrics.provision_per_area_per_month),
        ),
        "---".to_string(),
        metric(
            "💡 Total Maintenance / sq ft / month (₹)",
            format_rate(metrics.total_maintenance_per_area_per_month),
        ),
        format!(
            "(Monthly Running Cost / sq ft) + (Provisions / sq ft per month over {} months, \
             including additional provisions)",
            report.inputs.amortization_months
        ),
        "Re-run with --additional-provision to see the impact on per sq ft monthly maintenance."
            .to_string(),
    ]
}

/// Column-aligned text table. Columns listed in `right_aligned` are padded on the left.
pub fn render_table(headers: &[&str], rows: &[Vec<String>], right_aligned: &[usize]) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let format_row = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                let width = widths[i];
                if right_aligned.contains(&i) {
                    format!("{:>width$}", cell, width = width)
                } else {
                    format!("{:<width$}", cell, width = width)
                }
            })
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![format_row(headers.to_vec())];
    lines.push(
        widths
            .iter()
            .map(|width| "-".repeat(*width))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for row in rows {
        let cells: Vec<&str> = (0..headers.len())
            .map(|i| row.get(i).map(String::as_str).unwrap_or(""))
            .collect();
        lines.push(format_row(cells));
    }
    lines.join("\n")
}

/// Horizontal bar chart; bars are scaled so the largest amount spans `width` cells.
pub fn render_bar_chart(rows: &[CostRow], width: usize) -> String {
    let max = rows.iter().map(|row| row.amount).max().unwrap_or(0);
    let label_width = rows
        .iter()
        .map(|row| row.head.chars().count())
        .max()
        .unwrap_or(0);

    rows.iter()
        .map(|row| {
            let bar = "█".repeat(bar_length(row.amount, max, width));
            format!(
                "{:<label_width$} | {} {}",
                row.head,
                bar,
                format_thousands(row.amount),
                label_width = label_width
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// Non-zero amounts always get at least one cell.
fn bar_length(amount: u64, max: u64, width: usize) -> usize {
    if amount == 0 || max == 0 {
        return 0;
    }
    let scaled = (amount as f64 / max as f64 * width as f64).round() as usize;
    scaled.max(1)
}
