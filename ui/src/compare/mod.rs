mod reconcile;
pub use reconcile::{
    company_label, display_rows, extract_metric, metric_names, MetricRow, COMPANY_NAME_METRIC,
};

pub mod export;
pub use export::ExportStatus;

mod table;
pub use table::ComparisonTable;
