//! Payload model for reports returned by the BRSR report service.

use std::fmt;

use serde::Deserialize;

/// Sentinel rendered wherever a metric has no value for a company.
pub const NOT_AVAILABLE: &str = "N/A";

/// One company's parsed report: an ordered list of named facts.
///
/// Reports carry no identifier of their own; a report's identity is its
/// position in the submission order of the batch that fetched it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Report {
    #[serde(default)]
    pub elements: Vec<ReportElement>,
}

/// A single named fact inside a report. Element names are not
/// guaranteed unique; lookups treat the first occurrence as
/// authoritative.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReportElement {
    pub element_name: String,
    #[serde(default)]
    pub fact_value: FactValue,
}

/// Fact values arrive as free-form text or bare JSON numbers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FactValue {
    Text(String),
    Number(serde_json::Number),
}

impl Default for FactValue {
    fn default() -> Self {
        FactValue::Text(String::new())
    }
}

impl fmt::Display for FactValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FactValue::Text(text) => f.write_str(text),
            FactValue::Number(number) => write!(f, "{number}"),
        }
    }
}

/// Wire envelope around each fetched report.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ReportEnvelope {
    pub parsed_response: Report,
}
