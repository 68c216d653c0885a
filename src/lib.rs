pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::LocalStorage, CliConfig};

pub use config::toml_config::TomlConfig;
pub use crate::core::{engine::InsightEngine, holder::DatasetHolder, loader::load};
pub use crate::core::query::{distinct_words, execute, extract_coordinates, search_messages, top_words};
pub use domain::model::{CoordinateMatch, Dataset, Query, QueryKind, QueryOutcome, Record, WordCount};
pub use utils::error::{InsightError, Result};
