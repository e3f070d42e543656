//! Inserts the sample essays into the hosted essays table.
//!
//! Run with:
//! ```
//! SUPABASE_URL=https://<project>.supabase.co SUPABASE_KEY=<key> cargo run -p essay-seed --bin seed
//! ```

use std::process::ExitCode;

use anyhow::Context;
use essay_seed::prelude::*;
use essay_seed::report;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    essay_seed::init_logging();

    let config = StoreConfig::from_env().context("Store configuration is incomplete")?;
    tracing::info!(url = %config.url, table = %config.table, "Loaded store configuration");

    let seeder = Seeder::new(RestStore::new(config.clone())).with_table(&config.table);

    let records = essays();
    println!("{}", report::prepared_line(records.len()));

    let outcome = seeder.seed_records(records).await;
    for line in outcome.lines(seeder.table()) {
        println!("{line}");
    }

    Ok(if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
