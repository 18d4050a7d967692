//! Platform-independent plumbing: the report payload model, the report
//! service client, and the comparison session state.

pub mod client;
pub mod model;
pub mod state;
