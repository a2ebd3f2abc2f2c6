pub mod devices;
pub mod health;
pub mod knocks;
pub mod sightings;

pub use health::health_check;
