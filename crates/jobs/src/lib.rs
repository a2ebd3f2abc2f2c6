pub mod runner;
pub mod sighting_poll;

pub use runner::JobRunner;
pub use sighting_poll::SightingPollJob;
