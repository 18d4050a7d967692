use dioxus::prelude::*;

use crate::compare::export::{self, ExportError};
use crate::compare::{ComparisonTable, ExportStatus};
use crate::components::CinForm;
use crate::core::client::ReportClient;
use crate::core::state::CompareState;

/// The single comparison page: CIN entry, fetch and export actions,
/// and the transposed results table.
#[component]
pub fn Home() -> Element {
    let cins = use_signal(|| vec![String::new()]);
    let mut state = use_signal(CompareState::default);
    let mut export_status = use_signal(|| ExportStatus::Idle);
    let client = use_hook(ReportClient::new);

    let on_compare = {
        let client = client.clone();
        move |_| {
            if state().loading {
                return;
            }
            state.with_mut(|s| s.begin_fetch());
            export_status.set(ExportStatus::Idle);

            let client = client.clone();
            let submitted = cins();
            spawn(async move {
                let outcome = client.fetch_reports(&submitted).await;
                state.with_mut(|s| s.finish(outcome));
            });
        }
    };

    let on_export = move |_| {
        if state().loading {
            return;
        }
        let reports = state().reports;
        if reports.is_empty() {
            export::notify_empty_export();
            export_status.set(ExportStatus::Error(ExportError::Empty.to_string()));
            return;
        }

        export_status.set(ExportStatus::Working);
        spawn(async move {
            match export::export_comparison(&reports).await {
                Ok(Some(path)) => {
                    export_status.set(ExportStatus::Done(format!("Workbook saved to {path}")))
                }
                Ok(None) => {
                    export_status.set(ExportStatus::Done("Workbook download started".to_string()))
                }
                Err(err) => export_status.set(ExportStatus::Error(err.to_string())),
            }
        });
    };

    let CompareState {
        reports,
        loading,
        error,
    } = state();
    let has_results = !reports.is_empty();

    let export_feedback = match &export_status() {
        ExportStatus::Idle => None,
        ExportStatus::Working => Some((
            "compare__status".to_string(),
            "Preparing workbook…".to_string(),
        )),
        ExportStatus::Done(message) => Some((
            "compare__status compare__status--success".to_string(),
            format!("✅ {message}"),
        )),
        ExportStatus::Error(err) => Some((
            "compare__status compare__status--error".to_string(),
            format!("⚠️ {err}"),
        )),
    };

    rsx! {
        section { class: "page page-compare",
            p { class: "page-compare__intro",
                "Enter one Corporate Identification Number per field and compare the companies' BRSR metrics side by side."
            }

            CinForm { cins }

            div { class: "compare__actions",
                button {
                    r#type: "button",
                    class: "button button--primary",
                    disabled: loading,
                    onclick: on_compare,
                    "Compare"
                }
                button {
                    r#type: "button",
                    class: "button",
                    disabled: loading,
                    onclick: on_export,
                    "Export to Excel"
                }
            }

            if loading {
                div { class: "spinner", role: "status", aria_label: "Fetching reports" }
            }

            if let Some(err) = error {
                p { class: "compare__error", "{err}" }
            }

            if let Some((class_name, message)) = export_feedback {
                p { class: "{class_name}", "{message}" }
            }

            if has_results {
                ComparisonTable { reports }
            }
        }
    }
}
