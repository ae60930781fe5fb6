mod client;
mod error;
mod query;
mod types;
mod worker;

pub use client::{ApiClient, extension_for, pick_random, sanitize_file_name};
pub use error::ApiError;
pub use query::{ListingQuery, RANDOM_POOL_SIZE};
pub use types::{Listing, Metadata, Pagination};
pub use worker::{FetchEvent, FetchKind, FetchRequest, FetchWorker};
