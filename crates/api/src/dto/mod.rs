pub mod device;
pub mod knock;
pub mod sighting;

pub use device::{DeviceResponse, DevicesResponse, RegisterDeviceRequest, UpdateDeviceRequest};
pub use knock::{KnockResponse, KnocksResponse};
pub use sighting::{
    EpochParam, RecordSightingRequest, SightingResponse, SightingSummaryResponse,
    SightingWindowRequest, SightingsResponse,
};
