mod poll_query_log;
mod report_sightings;

pub use poll_query_log::{PollQueryLogUseCase, PollSummary};
pub use report_sightings::{DeviceFailure, ReportSightingsUseCase, SightingReport};
