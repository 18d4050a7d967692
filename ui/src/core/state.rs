//! Session state for the comparison workflow.

use super::client::FetchError;
use super::model::Report;

/// Everything the compare view renders from: the fetched reports, the
/// in-flight flag, and the single visible error slot.
///
/// Reports are replaced wholesale on every batch; nothing here survives
/// a page reload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompareState {
    pub reports: Vec<Report>,
    pub loading: bool,
    pub error: Option<String>,
}

impl CompareState {
    /// A fetch batch is starting: raise the loading flag and clear any
    /// stale error. Previously fetched reports stay visible until the
    /// batch resolves.
    pub fn begin_fetch(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// A fetch batch resolved. Success replaces the report set
    /// wholesale; failure clears it, so an errored batch never leaves a
    /// table on screen. The loading flag drops on both paths.
    pub fn finish(&mut self, outcome: Result<Vec<Report>, FetchError>) {
        match outcome {
            Ok(reports) => {
                self.reports = reports;
                self.error = None;
            }
            Err(err) => {
                self.reports.clear();
                self.error = Some(err.to_string());
            }
        }
        self.loading = false;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn has_results(&self) -> bool {
        !self.reports.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_fetch_raises_loading_and_clears_error() {
        let mut state = CompareState {
            error: Some("stale".into()),
            ..CompareState::default()
        };
        state.begin_fetch();
        assert!(state.loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn success_replaces_reports_and_drops_loading() {
        let mut state = CompareState::default();
        state.begin_fetch();
        state.finish(Ok(vec![Report::default(), Report::default()]));
        assert!(!state.loading);
        assert!(state.error.is_none());
        assert_eq!(state.reports.len(), 2);
        assert!(state.has_results());
    }

    #[test]
    fn failure_clears_reports_and_records_message() {
        let mut state = CompareState {
            reports: vec![Report::default()],
            ..CompareState::default()
        };
        state.begin_fetch();
        state.finish(Err(FetchError::NotFound));
        assert!(!state.loading);
        assert!(!state.has_results());
        assert_eq!(state.error.as_deref(), Some("One or more CINs not found."));
    }

    #[test]
    fn reset_returns_to_default() {
        let mut state = CompareState::default();
        state.finish(Ok(vec![Report::default()]));
        state.reset();
        assert_eq!(state, CompareState::default());
    }
}
