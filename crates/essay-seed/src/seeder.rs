//! The seed operation and the table accessibility check.

use tracing::{error, info, warn};

use crate::catalog;
use crate::config::DEFAULT_TABLE;
use crate::models::EssayRecord;
use crate::report::{SeedOutcome, TableCheck};
use crate::store::RowStore;

/// Tables the essay archive expects besides the essays table itself.
pub const COMPANION_TABLES: [&str; 2] = ["likes", "saved_essays"];

/// Inserts the sample essays into a [`RowStore`].
///
/// Each call issues exactly one bulk insert. There is no existence check and
/// no retry, so seeding twice stores every essay twice under new ids.
pub struct Seeder<S> {
    store: S,
    table: String,
}

impl<S: RowStore> Seeder<S> {
    /// Creates a seeder targeting [`DEFAULT_TABLE`].
    pub fn new(store: S) -> Self {
        Self {
            store,
            table: DEFAULT_TABLE.to_string(),
        }
    }

    /// Sets the target table.
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// Seeds the built-in catalog.
    pub async fn seed(&self) -> SeedOutcome {
        self.seed_records(catalog::essays()).await
    }

    /// Seeds the given records in a single request.
    pub async fn seed_records(&self, records: &[EssayRecord]) -> SeedOutcome {
        info!(count = records.len(), table = %self.table, "Inserting essays");

        match self.store.insert_rows(&self.table, records).await {
            Ok(rows) => {
                if rows.len() != records.len() {
                    warn!(
                        submitted = records.len(),
                        returned = rows.len(),
                        "Store returned a different number of rows than submitted"
                    );
                }
                info!(inserted = rows.len(), "Essays inserted");
                SeedOutcome::Inserted { rows }
            }
            Err(error) => {
                error!(kind = error.kind().as_str(), %error, "Failed to insert essays");
                SeedOutcome::Failed { error }
            }
        }
    }

    /// Probes the essays table and its companion tables, one request each.
    ///
    /// A failing table does not stop the remaining probes.
    pub async fn check_tables(&self) -> Vec<TableCheck> {
        let mut tables = vec![self.table.clone()];
        tables.extend(COMPANION_TABLES.iter().map(|t| t.to_string()));

        let mut checks = Vec::with_capacity(tables.len());
        for table in tables {
            let result = self.store.probe_table(&table).await;
            if let Err(e) = &result {
                warn!(%table, kind = e.kind().as_str(), "Table probe failed");
            }
            checks.push(TableCheck { table, result });
        }
        checks
    }
}
