mod get_sightings;
mod record_sighting;

pub use get_sightings::GetSightingsUseCase;
pub use record_sighting::RecordSightingUseCase;
