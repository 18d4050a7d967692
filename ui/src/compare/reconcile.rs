//! Metric reconciliation: the union row set for the export matrix and
//! the transposed matrix behind the comparison table.

use std::collections::HashSet;

use crate::core::model::{Report, NOT_AVAILABLE};

/// Metric the company header labels and sheet names are keyed on.
pub const COMPANY_NAME_METRIC: &str = "NameOfTheCompany";

/// One row of the transposed display matrix: a metric label plus one
/// value per report, in submission order.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricRow {
    pub metric: String,
    pub values: Vec<String>,
}

/// Union of all element names across `reports`, in discovery order and
/// deduplicated. Drives the export matrix row set.
pub fn metric_names(reports: &[Report]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();
    for report in reports {
        for element in &report.elements {
            if seen.insert(element.element_name.clone()) {
                names.push(element.element_name.clone());
            }
        }
    }
    names
}

/// First-occurrence name lookup of a metric value. Null-safe: an absent
/// report and an absent metric both resolve to the `N/A` marker.
pub fn extract_metric(report: Option<&Report>, metric_name: &str) -> String {
    report
        .and_then(|report| {
            report
                .elements
                .iter()
                .find(|element| element.element_name == metric_name)
        })
        .map(|element| element.fact_value.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Column header / sheet label for a report: the company name metric,
/// or a positional fallback when it is absent or blank.
pub fn company_label(report: &Report, index: usize) -> String {
    let name = extract_metric(Some(report), COMPANY_NAME_METRIC);
    if name.is_empty() || name == NOT_AVAILABLE {
        format!("Company {}", index + 1)
    } else {
        name
    }
}

/// Transposed display matrix keyed by the first report's element
/// ordering: row `i` is labelled by report 0's element `i`, and every
/// report contributes whatever sits at its own index `i`, `N/A` when
/// that slot is out of range.
//
// TODO: align rows by element_name instead of raw position once the
// display and export matrices are unified; reports whose element lists
// are ordered differently currently render misaligned values.
pub fn display_rows(reports: &[Report]) -> Vec<MetricRow> {
    let Some(first) = reports.first() else {
        return Vec::new();
    };

    first
        .elements
        .iter()
        .enumerate()
        .map(|(slot, element)| MetricRow {
            metric: element.element_name.clone(),
            values: reports
                .iter()
                .map(|report| {
                    report
                        .elements
                        .get(slot)
                        .map(|element| element.fact_value.to_string())
                        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
                })
                .collect(),
        })
        .collect()
}
