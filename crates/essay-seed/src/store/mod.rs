//! Access to the hosted essays table.
//!
//! [`RowStore`] is the seam between the seeder and whatever holds the rows.
//! [`RestStore`] talks to a PostgREST endpoint over HTTP.

mod rest;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::models::{EssayRecord, InsertedEssay};

pub use rest::RestStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store not reachable: {0}")]
    Connectivity(String),
    #[error("Authentication failed (status {status}): {message}")]
    Auth { status: u16, message: String },
    #[error("Schema mismatch ({code}): {message}")]
    Schema { code: String, message: String },
    #[error("Constraint violation ({code}): {message}")]
    Constraint { code: String, message: String },
    #[error("Unexpected response (status {status}): {body}")]
    Unexpected { status: u16, body: String },
    #[error("Could not decode store response: {0}")]
    Decode(String),
}

/// Coarse classification of a [`StoreError`], for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    Connectivity,
    Auth,
    Schema,
    Constraint,
    Unexpected,
    Decode,
}

impl StoreErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreErrorKind::Connectivity => "connectivity",
            StoreErrorKind::Auth => "auth",
            StoreErrorKind::Schema => "schema",
            StoreErrorKind::Constraint => "constraint",
            StoreErrorKind::Unexpected => "unexpected",
            StoreErrorKind::Decode => "decode",
        }
    }
}

/// Error body PostgREST returns for a failed request.
#[derive(Debug, Default, Deserialize)]
struct PostgrestError {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl StoreError {
    pub fn kind(&self) -> StoreErrorKind {
        match self {
            StoreError::Connectivity(_) => StoreErrorKind::Connectivity,
            StoreError::Auth { .. } => StoreErrorKind::Auth,
            StoreError::Schema { .. } => StoreErrorKind::Schema,
            StoreError::Constraint { .. } => StoreErrorKind::Constraint,
            StoreError::Unexpected { .. } => StoreErrorKind::Unexpected,
            StoreError::Decode(_) => StoreErrorKind::Decode,
        }
    }

    /// Classifies a non-success HTTP response.
    ///
    /// The PostgREST (or SQLSTATE) `code` in the body takes precedence over the
    /// status, since PostgREST maps several distinct failures onto 400 and 404.
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed: PostgrestError = serde_json::from_str(body).unwrap_or_default();
        let code = parsed.code.unwrap_or_default();
        let message = parsed.message.unwrap_or_else(|| body.trim().to_string());
        let code_or_status = || {
            if code.is_empty() {
                format!("HTTP {status}")
            } else {
                code.clone()
            }
        };

        match code.as_str() {
            "PGRST301" | "PGRST302" | "42501" => StoreError::Auth { status, message },
            "42P01" | "42703" | "PGRST106" | "PGRST204" | "PGRST205" => StoreError::Schema {
                code: code_or_status(),
                message,
            },
            c if c.starts_with("23") || c.starts_with("22") => StoreError::Constraint {
                code: code_or_status(),
                message,
            },
            _ => match status {
                401 | 403 => StoreError::Auth { status, message },
                404 => StoreError::Schema {
                    code: code_or_status(),
                    message,
                },
                409 => StoreError::Constraint {
                    code: code_or_status(),
                    message,
                },
                _ => StoreError::Unexpected {
                    status,
                    body: body.trim().to_string(),
                },
            },
        }
    }
}

impl From<reqwest::Error> for StoreError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            StoreError::Decode(e.to_string())
        } else {
            StoreError::Connectivity(e.to_string())
        }
    }
}

/// A table-oriented store that can take a bulk insert of essays.
#[async_trait]
pub trait RowStore: Send + Sync {
    /// Inserts all rows in one request and returns them as stored.
    async fn insert_rows(
        &self,
        table: &str,
        rows: &[EssayRecord],
    ) -> Result<Vec<InsertedEssay>, StoreError>;

    /// Confirms the table is reachable by reading at most one row.
    async fn probe_table(&self, table: &str) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_relation_is_schema_error() {
        let err = StoreError::from_response(
            404,
            r#"{"code":"42P01","details":null,"hint":null,"message":"relation \"public.essays\" does not exist"}"#,
        );

        assert_eq!(err.kind(), StoreErrorKind::Schema);
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_schema_cache_miss_is_schema_error() {
        let err = StoreError::from_response(
            404,
            r#"{"code":"PGRST205","message":"Could not find the table 'public.essays' in the schema cache"}"#,
        );
        assert_eq!(err.kind(), StoreErrorKind::Schema);

        let err = StoreError::from_response(
            400,
            r#"{"code":"PGRST204","message":"Could not find the 'verified' column of 'essays' in the schema cache"}"#,
        );
        assert_eq!(err.kind(), StoreErrorKind::Schema);
    }

    #[test]
    fn test_auth_failures() {
        let err = StoreError::from_response(401, r#"{"message":"Invalid API key"}"#);
        assert!(matches!(err, StoreError::Auth { status: 401, .. }));

        let err = StoreError::from_response(
            403,
            r#"{"code":"42501","message":"new row violates row-level security policy for table \"essays\""}"#,
        );
        assert_eq!(err.kind(), StoreErrorKind::Auth);
    }

    #[test]
    fn test_constraint_failures() {
        let err = StoreError::from_response(
            409,
            r#"{"code":"23505","message":"duplicate key value violates unique constraint \"essays_pkey\""}"#,
        );
        assert!(matches!(&err, StoreError::Constraint { code, .. } if code == "23505"));

        let err = StoreError::from_response(
            400,
            r#"{"code":"22P02","message":"invalid input syntax for type integer"}"#,
        );
        assert_eq!(err.kind(), StoreErrorKind::Constraint);

        let err = StoreError::from_response(409, "conflict");
        assert!(matches!(&err, StoreError::Constraint { code, .. } if code == "HTTP 409"));
    }

    #[test]
    fn test_unrecognized_response_keeps_body() {
        let err = StoreError::from_response(503, "  upstream unavailable\n");

        match err {
            StoreError::Unexpected { status, body } => {
                assert_eq!(status, 503);
                assert_eq!(body, "upstream unavailable");
            }
            other => panic!("expected Unexpected, got {other:?}"),
        }
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(StoreErrorKind::Connectivity.as_str(), "connectivity");
        assert_eq!(StoreError::Decode("bad".into()).kind().as_str(), "decode");
    }
}
