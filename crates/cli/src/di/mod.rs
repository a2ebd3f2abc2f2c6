mod poller;
mod repositories;

pub use poller::Poller;
pub use repositories::Repositories;
