use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use tracing::{debug, error};

use super::{RowStore, StoreError};
use crate::config::StoreConfig;
use crate::models::{EssayRecord, InsertedEssay};

/// PostgREST client for a hosted store such as Supabase.
///
/// No request timeout is set; the reqwest defaults apply.
pub struct RestStore {
    client: Client,
    config: StoreConfig,
}

impl RestStore {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.config.url, table)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        let key = self.config.api_key();
        builder.header("apikey", key).bearer_auth(key)
    }
}

#[async_trait]
impl RowStore for RestStore {
    async fn insert_rows(
        &self,
        table: &str,
        rows: &[EssayRecord],
    ) -> Result<Vec<InsertedEssay>, StoreError> {
        let url = self.table_url(table);
        debug!(%url, rows = rows.len(), "Submitting bulk insert");

        let resp = self
            .authorized(self.client.post(&url))
            .header("Prefer", "return=representation")
            .json(rows)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let err = StoreError::from_response(status.as_u16(), &body);
            error!(kind = err.kind().as_str(), %status, "Bulk insert rejected");
            return Err(err);
        }

        let inserted: Vec<InsertedEssay> = resp.json().await?;
        debug!(inserted = inserted.len(), "Bulk insert accepted");
        Ok(inserted)
    }

    async fn probe_table(&self, table: &str) -> Result<(), StoreError> {
        let url = self.table_url(table);
        debug!(%url, "Probing table");

        let resp = self
            .authorized(self.client.get(&url))
            .query(&[("select", "*"), ("limit", "1")])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(StoreError::from_response(status.as_u16(), &body));
        }

        Ok(())
    }
}
