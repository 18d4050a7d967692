use dioxus::prelude::*;

use crate::compare::reconcile::{company_label, display_rows};
use crate::core::model::Report;

/// Transposed comparison table: metrics down the side, one column per
/// company in submission order. Header labels, display columns, and
/// export sheets all share that order.
#[component]
pub fn ComparisonTable(reports: Vec<Report>) -> Element {
    let headers: Vec<String> = reports
        .iter()
        .enumerate()
        .map(|(index, report)| company_label(report, index))
        .collect();
    let rows = display_rows(&reports);

    rsx! {
        div { class: "comparison-table__scroll",
            table { class: "comparison-table",
                thead {
                    tr {
                        th { class: "comparison-table__cell comparison-table__cell--head", "Metric" }
                        for (index, label) in headers.iter().enumerate() {
                            th {
                                key: "{index}",
                                class: "comparison-table__cell comparison-table__cell--head",
                                "{label}"
                            }
                        }
                    }
                }
                tbody {
                    for (row_index, row) in rows.iter().enumerate() {
                        tr { key: "{row_index}", class: "comparison-table__row",
                            td { class: "comparison-table__cell comparison-table__metric", "{row.metric}" }
                            for (col_index, value) in row.values.iter().enumerate() {
                                td { key: "{col_index}", class: "comparison-table__cell", "{value}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
