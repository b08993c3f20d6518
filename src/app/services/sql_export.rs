//! Bulk insert export and partition naming
//!
//! A country's normalized entries are rendered as a bounded number of
//! multi-row `INSERT` statements, one statement per line, so the deploy
//! step can execute the artifact line by line. Values that exceed the
//! target column limits fail the export instead of being truncated.

use crate::app::models::{EntryRecord, FieldValue, Partition};
use crate::constants::{
    COLUMN_LIMITS, COLUMN_NAMES, DEFAULT_STATEMENT_COUNT, PARTITION_PREFIX, TABLE_NAME,
    TABLE_SCHEMA,
};
use crate::{Error, Result};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static NAME_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z]+").expect("valid name word pattern"));

/// Target table and statement layout
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSettings {
    pub schema: String,
    pub table: String,
    /// Number of statements the entries are spread over
    pub statement_count: usize,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            schema: TABLE_SCHEMA.to_string(),
            table: TABLE_NAME.to_string(),
            statement_count: DEFAULT_STATEMENT_COUNT,
        }
    }
}

impl ExportSettings {
    pub fn with_statement_count(mut self, statement_count: usize) -> Self {
        self.statement_count = statement_count;
        self
    }
}

/// A value longer than its target column allows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnViolation {
    pub postal_code: String,
    pub column: &'static str,
    pub length: usize,
    pub limit: usize,
}

impl fmt::Display for ColumnViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "postal code '{}': {} has {} characters (limit {})",
            self.postal_code, self.column, self.length, self.limit
        )
    }
}

/// Find every value exceeding its column limit
pub fn check_column_limits(entries: &[EntryRecord]) -> Vec<ColumnViolation> {
    let mut violations = Vec::new();

    for entry in entries {
        for ((field, column), limit) in entry.fields().iter().zip(COLUMN_NAMES).zip(COLUMN_LIMITS) {
            let (FieldValue::Text(Some(value)), Some(limit)) = (field, limit) else {
                continue;
            };
            let length = value.chars().count();
            if length > limit {
                violations.push(ColumnViolation {
                    postal_code: entry.postal_code.clone(),
                    column,
                    length,
                    limit,
                });
            }
        }
    }

    violations
}

/// Render one column value as a SQL literal
pub fn render_value(value: FieldValue<'_>) -> String {
    match value {
        FieldValue::Text(Some(text)) => {
            let text = text.replace(['\n', '\r'], " ").replace('\'', "''");
            format!("'{}'", text)
        }
        FieldValue::Float(Some(number)) => number.to_string(),
        FieldValue::Integer(Some(number)) => number.to_string(),
        FieldValue::Text(None) | FieldValue::Float(None) | FieldValue::Integer(None) => {
            "NULL".to_string()
        }
    }
}

fn render_row(entry: &EntryRecord) -> String {
    let values: Vec<String> = entry.fields().into_iter().map(render_value).collect();
    format!("({})", values.join(", "))
}

/// Render the entries as multi-row insert statements
pub fn insert_statements(entries: &[EntryRecord], settings: &ExportSettings) -> Vec<String> {
    if entries.is_empty() {
        return Vec::new();
    }

    let rows_per_statement = entries.len().div_ceil(settings.statement_count.max(1));
    let header = format!(
        "INSERT INTO \"{}\".\"{}\"({}) VALUES",
        settings.schema,
        settings.table,
        COLUMN_NAMES.join(", ")
    );

    entries
        .chunks(rows_per_statement)
        .map(|chunk| {
            let rows: Vec<String> = chunk.iter().map(render_row).collect();
            format!("{} {};", header, rows.join(", "))
        })
        .collect()
}

/// Produce the export artifact content for a country
pub fn export(country: &str, entries: &[EntryRecord], settings: &ExportSettings) -> Result<String> {
    let violations = check_column_limits(entries);
    if !violations.is_empty() {
        return Err(Error::constraint_violation(
            country,
            violations.iter().map(ToString::to_string).collect(),
        ));
    }

    Ok(insert_statements(entries, settings).join("\n"))
}

/// Split export artifact content back into statements
pub fn parse_statements(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Lowercase ASCII words of a country name joined by underscores
pub fn safe_name(country_name: &str) -> String {
    NAME_WORD_RE
        .find_iter(country_name)
        .map(|word| word.as_str().to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

/// Partition table name for a country and slot
pub fn partition_name(country_name: &str, partition: Partition) -> String {
    format!(
        "{}_{}_{}",
        PARTITION_PREFIX,
        safe_name(country_name),
        partition.suffix()
    )
}

pub fn drop_partition_sql(settings: &ExportSettings, partition_name: &str) -> String {
    format!(
        "DROP TABLE IF EXISTS \"{}\".\"{}\"",
        settings.schema, partition_name
    )
}

pub fn create_partition_sql(
    settings: &ExportSettings,
    partition_name: &str,
    country_code: &str,
) -> String {
    format!(
        "CREATE TABLE \"{schema}\".\"{partition}\" PARTITION OF \"{schema}\".\"{table}\" FOR VALUES IN ('{country}')",
        schema = settings.schema,
        partition = partition_name,
        table = settings.table,
        country = country_code.replace('\'', "''"),
    )
}
