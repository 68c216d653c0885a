pub mod engine;
pub mod holder;
pub mod loader;
pub mod patterns;
pub mod query;

pub use crate::domain::model::{Dataset, Query, QueryOutcome, Record};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
