//! Sample data seeding for the essay archive.
//!
//! This crate inserts a fixed set of sample essays into the hosted essays table
//! with one bulk request, and can check that the tables the archive depends on
//! are reachable.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use essay_seed::prelude::*;
//!
//! let config = StoreConfig::from_env()?;
//! let seeder = Seeder::new(RestStore::new(config.clone())).with_table(&config.table);
//!
//! let outcome = seeder.seed().await;
//! for line in outcome.lines(seeder.table()) {
//!     println!("{line}");
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod models;
pub mod report;
pub mod seeder;
pub mod store;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::catalog::essays;
    pub use crate::config::{ConfigError, DEFAULT_TABLE, StoreConfig};
    pub use crate::models::{EssayRecord, InsertedEssay, RowId};
    pub use crate::report::{SeedOutcome, TableCheck};
    pub use crate::seeder::Seeder;
    pub use crate::store::{RestStore, RowStore, StoreError, StoreErrorKind};
}

/// Installs the fmt subscriber, filtered by `RUST_LOG` and defaulting to `info`.
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
