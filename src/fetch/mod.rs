mod client;
mod worker;

pub use worker::{spawn_worker, FetchCommand, FetchResult};
