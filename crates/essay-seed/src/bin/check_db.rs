//! Checks that the essay archive's tables are reachable with the configured key.
//!
//! Run with:
//! ```
//! cargo run -p essay-seed --bin check-db
//! ```

use std::process::ExitCode;

use anyhow::Context;
use essay_seed::prelude::*;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    essay_seed::init_logging();

    let config = StoreConfig::from_env().context("Store configuration is incomplete")?;
    let seeder = Seeder::new(RestStore::new(config.clone())).with_table(&config.table);

    println!("Testing database setup...");
    let checks = seeder.check_tables().await;
    for (i, check) in checks.iter().enumerate() {
        println!("\n{}. Testing {} table...", i + 1, check.table);
        println!("{}", check.line());
    }

    let failed = checks.iter().filter(|c| !c.is_ok()).count();
    if failed > 0 {
        tracing::warn!(failed, "Some tables are not accessible");
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
