//! Workbook export: serialize the comparison matrix to a multi-sheet
//! `.xlsx` and hand it to the platform save mechanism.

use thiserror::Error;

use crate::compare::reconcile::{company_label, extract_metric, metric_names};
use crate::core::model::Report;

/// Fixed download name for the comparison workbook.
pub const EXPORT_FILENAME: &str = "brsr_comparison.xlsx";

const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Excel caps sheet names at 31 characters.
const MAX_SHEET_NAME_LEN: usize = 31;

/// Inline feedback for the export action.
#[derive(Clone, Debug, PartialEq)]
pub enum ExportStatus {
    Idle,
    Working,
    Done(String),
    Error(String),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("No data to export.")]
    Empty,
    #[error("workbook build failed: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),
    #[error("{0}")]
    Delivery(String),
}

/// Full comparison matrix: a header row of company labels followed by
/// one row per distinct metric, with its name-matched value for every
/// report in submission order, coerced to text.
pub fn comparison_matrix(reports: &[Report]) -> Vec<Vec<String>> {
    let mut header = Vec::with_capacity(reports.len() + 1);
    header.push("Metric".to_string());
    for (index, report) in reports.iter().enumerate() {
        header.push(company_label(report, index));
    }

    let mut rows = vec![header];
    for metric in metric_names(reports) {
        let mut row = Vec::with_capacity(reports.len() + 1);
        row.push(metric.clone());
        for report in reports {
            row.push(extract_metric(Some(report), &metric));
        }
        rows.push(row);
    }
    rows
}

/// Sheet names for the workbook, one per report in submission order:
/// company labels passed through the xlsx naming rules and
/// de-duplicated with the 1-based report position.
pub fn sheet_names(reports: &[Report]) -> Vec<String> {
    let mut names: Vec<String> = Vec::with_capacity(reports.len());
    for (index, report) in reports.iter().enumerate() {
        let mut name = sanitize_sheet_name(&company_label(report, index));
        if names.contains(&name) {
            let suffix = format!(" ({})", index + 1);
            let keep = MAX_SHEET_NAME_LEN.saturating_sub(suffix.chars().count());
            name = name.chars().take(keep).collect();
            name.push_str(&suffix);
        }
        names.push(name);
    }
    names
}

/// Serialize the workbook. Each report gets a sheet named after it, and
/// every sheet carries the same full matrix: sheet identity only
/// affects the tab name, not the content.
pub fn build_workbook(reports: &[Report]) -> Result<Vec<u8>, ExportError> {
    if reports.is_empty() {
        return Err(ExportError::Empty);
    }

    let matrix = comparison_matrix(reports);
    let mut workbook = rust_xlsxwriter::Workbook::new();

    for name in sheet_names(reports) {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(name.as_str())?;
        for (row_index, row) in matrix.iter().enumerate() {
            for (col_index, value) in row.iter().enumerate() {
                worksheet.write_string(row_index as u32, col_index as u16, value.as_str())?;
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}

/// Build the workbook and deliver `brsr_comparison.xlsx`. Returns the
/// written path on native platforms, `None` when the browser owns
/// delivery.
pub async fn export_comparison(reports: &[Report]) -> Result<Option<String>, ExportError> {
    let bytes = build_workbook(reports)?;
    download_bytes(EXPORT_FILENAME, XLSX_MIME, bytes)
        .await
        .map_err(ExportError::Delivery)
}

/// Blocking "nothing to export" notice: a browser alert on web; on
/// native the inline status line carries the message, so only a
/// diagnostic is recorded here.
pub fn notify_empty_export() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message("No data to export.");
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::warn!("export requested with no reports loaded");
    }
}

async fn download_bytes(
    filename: &str,
    mime: &str,
    bytes: Vec<u8>,
) -> Result<Option<String>, String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let array = js_sys::Uint8Array::from(bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());

        let opts = BlobPropertyBag::new();
        opts.set_type(mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
            .map_err(|_| "Failed to create blob".to_string())?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| "Unable to create download".to_string())?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("Document unavailable")?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| "Unable to create anchor")?
            .dyn_into()
            .map_err(|_| "Anchor cast failed")?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.style().set_property("display", "none").ok();

        document
            .body()
            .ok_or("Missing body")?
            .append_child(&anchor)
            .ok();
        anchor.click();
        anchor.remove();
        Url::revoke_object_url(&url).ok();

        Ok(None)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::fs;
        use std::io::Write;

        let _ = mime;
        let dir = native_export_dir()?;
        fs::create_dir_all(&dir).map_err(|err| err.to_string())?;
        let path = dir.join(filename);
        let mut file = fs::File::create(&path).map_err(|err| err.to_string())?;
        file.write_all(&bytes).map_err(|err| err.to_string())?;
        Ok(Some(path.to_string_lossy().to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn native_export_dir() -> Result<std::path::PathBuf, String> {
    let dirs = directories::ProjectDirs::from("in", "BRSR", "BRSR Comparator")
        .ok_or("Unable to determine export directory")?;
    Ok(dirs.data_dir().join("exports"))
}

/// Clamp a company label to Excel's sheet naming rules: reserved
/// characters become spaces, length caps at 31 chars, and leading or
/// trailing apostrophes are stripped.
fn sanitize_sheet_name(label: &str) -> String {
    let replaced: String = label
        .chars()
        .map(|ch| match ch {
            '[' | ']' | ':' | '*' | '?' | '/' | '\\' => ' ',
            other => other,
        })
        .take(MAX_SHEET_NAME_LEN)
        .collect();

    let trimmed = replaced.trim_matches('\'').trim();
    if trimmed.is_empty() {
        "Sheet".to_string()
    } else {
        trimmed.to_string()
    }
}
