//! Console output for seed and check runs.
//!
//! Lines are returned rather than printed so the binaries decide where they go.

use crate::models::InsertedEssay;
use crate::store::StoreError;

/// Result of a single seed attempt.
#[derive(Debug)]
pub enum SeedOutcome {
    Inserted { rows: Vec<InsertedEssay> },
    Failed { error: StoreError },
}

impl SeedOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SeedOutcome::Inserted { .. })
    }

    /// Number of rows the store reported back, if the insert succeeded.
    pub fn inserted_count(&self) -> Option<usize> {
        match self {
            SeedOutcome::Inserted { rows } => Some(rows.len()),
            SeedOutcome::Failed { .. } => None,
        }
    }

    /// Renders the outcome. Every failure kind renders the same way.
    pub fn lines(&self, table: &str) -> Vec<String> {
        match self {
            SeedOutcome::Inserted { rows } => {
                let mut lines = vec![format!("✅ Successfully inserted {} essays!", rows.len())];
                if let Some(first) = rows.first() {
                    lines.push(String::new());
                    lines.push("📝 First essay inserted:".to_string());
                    lines.push(format!("   ID: {}", first.id));
                    lines.push(format!("   Title: {}", first.title));
                    lines.push(format!("   College: {}", first.college));
                }
                lines
            }
            SeedOutcome::Failed { error } => vec![
                format!("❌ Error inserting essays: {error}"),
                missing_table_hint(table),
            ],
        }
    }
}

pub fn prepared_line(count: usize) -> String {
    format!("📊 Prepared {count} essays for insertion")
}

pub fn missing_table_hint(table: &str) -> String {
    format!("Make sure the '{table}' table exists in your Supabase database.")
}

/// Result of probing one table.
#[derive(Debug)]
pub struct TableCheck {
    pub table: String,
    pub result: Result<(), StoreError>,
}

impl TableCheck {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    pub fn line(&self) -> String {
        match &self.result {
            Ok(()) => format!("✅ {} table accessible", self.table),
            Err(e) => format!("❌ {} table error: {e}", self.table),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_success_prints_only_count() {
        let outcome = SeedOutcome::Inserted { rows: Vec::new() };

        assert_eq!(outcome.inserted_count(), Some(0));
        assert_eq!(outcome.lines("essays"), vec!["✅ Successfully inserted 0 essays!"]);
    }

    #[test]
    fn test_failure_prints_error_and_hint() {
        let outcome = SeedOutcome::Failed {
            error: StoreError::Connectivity("connection refused".into()),
        };

        assert!(!outcome.is_success());
        assert_eq!(outcome.inserted_count(), None);
        assert_eq!(
            outcome.lines("essays"),
            vec![
                "❌ Error inserting essays: Store not reachable: connection refused",
                "Make sure the 'essays' table exists in your Supabase database.",
            ]
        );
    }

    #[test]
    fn test_table_check_lines() {
        let ok = TableCheck {
            table: "likes".into(),
            result: Ok(()),
        };
        let failed = TableCheck {
            table: "saved_essays".into(),
            result: Err(StoreError::from_response(404, "")),
        };

        assert_eq!(ok.line(), "✅ likes table accessible");
        assert!(failed.line().starts_with("❌ saved_essays table error: Schema mismatch"));
        assert!(!failed.is_ok());
    }

    #[test]
    fn test_prepared_line() {
        assert_eq!(prepared_line(5), "📊 Prepared 5 essays for insertion");
    }
}
