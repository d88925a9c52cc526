use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

/// One questionnaire submission as the storage collaborator returns it.
///
/// Only the fields the graph engine reads are modeled; everything else
/// (display name, question answers, timestamps) rides along opaquely in
/// `extra` and is passed through to the renderer unchanged.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub handle: String,
    #[serde(default)]
    pub referrer_handle: Option<String>,
    #[serde(default)]
    pub position_seed: Option<u32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Accepts either a bare array of records or the storage API's
/// `{"responses": [...]}` envelope. Entries that do not decode as records are
/// skipped; only an input that is not a record list at all is an error.
pub fn parse_batch(raw: &str) -> Result<Vec<SubmissionRecord>> {
    let parsed: Value = serde_json::from_str(raw).context("invalid JSON batch")?;

    let entries = match &parsed {
        Value::Array(entries) => entries,
        Value::Object(object) => object
            .get("responses")
            .and_then(Value::as_array)
            .ok_or_else(|| anyhow!("JSON object batch has no \"responses\" array"))?,
        _ => return Err(anyhow!("unexpected JSON type for a record batch")),
    };

    let mut records = Vec::with_capacity(entries.len());
    for entry in entries {
        match SubmissionRecord::deserialize(entry) {
            Ok(record) => records.push(record),
            Err(error) => warn!(%error, "skipping undecodable batch entry"),
        }
    }

    Ok(records)
}

pub fn load_batch(path: &Path) -> Result<Vec<SubmissionRecord>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read batch file {}", path.display()))?;
    parse_batch(&raw).with_context(|| format!("failed to parse batch file {}", path.display()))
}
