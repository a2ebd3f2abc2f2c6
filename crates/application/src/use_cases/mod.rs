pub mod devices;
pub mod knocks;
pub mod polling;
pub mod sightings;

pub use devices::{GetDevicesUseCase, RegisterDeviceUseCase, UpdateDeviceUseCase};
pub use knocks::GetKnocksUseCase;
pub use polling::{
    DeviceFailure, PollQueryLogUseCase, PollSummary, ReportSightingsUseCase, SightingReport,
};
pub use sightings::{GetSightingsUseCase, RecordSightingUseCase};
