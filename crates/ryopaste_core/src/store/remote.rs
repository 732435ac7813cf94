//! Blocking HTTP client for the hosted table service.
//!
//! The service exposes a PostgREST-style surface: row filters are query
//! parameters (`id=eq.<id>`) and inserts are JSON POSTs to the table path.
//! Requests intentionally carry no timeout and are never retried; a failed
//! call is terminal for the page load that issued it.

use crate::config::Config;
use crate::error::AppError;
use crate::models::paste::Paste;
use crate::store::PasteStore;

const TABLE_PATH: &str = "rest/v1/Pastes";
const SELECT_COLUMNS: &str = "id,code,lang,name";

/// Client for the remote `Pastes` table.
pub struct RemoteTable {
    client: reqwest::blocking::Client,
    table_url: String,
    api_key: String,
}

impl RemoteTable {
    /// Build a client from the loaded configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            table_url: format!("{}/{}", config.store_url.trim_end_matches('/'), TABLE_PATH),
            api_key: config.store_key.clone(),
        }
    }
}

impl PasteStore for RemoteTable {
    fn fetch(&self, id: &str) -> Result<Option<Paste>, AppError> {
        let rows: Vec<Paste> = self
            .client
            .get(&self.table_url)
            .query(&[
                ("id", format!("eq.{}", id).as_str()),
                ("select", SELECT_COLUMNS),
            ])
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()?
            .error_for_status()?
            .json()?;
        Ok(rows.into_iter().next())
    }

    fn insert(&self, paste: &Paste) -> Result<(), AppError> {
        self.client
            .post(&self.table_url)
            .header("apikey", &self.api_key)
            .header("Prefer", "return=minimal")
            .bearer_auth(&self.api_key)
            .json(paste)
            .send()?
            .error_for_status()?;
        Ok(())
    }
}
