pub mod last_seen_reducer;

pub use last_seen_reducer::{LastSeen, LastSeenReducer};
