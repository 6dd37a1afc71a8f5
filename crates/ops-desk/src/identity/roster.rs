use chrono::NaiveTime;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use std::io::Read;
use tracing::debug;

use super::profile::OperatorProfile;

/// Errors raised while reading an operator roster export.
#[derive(Debug, thiserror::Error)]
pub enum RosterImportError {
    #[error("failed to parse roster CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Resolved roster row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(flatten)]
    pub profile: OperatorProfile,
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    #[serde(rename = "Email")]
    email: String,
    #[serde(rename = "Team", default, deserialize_with = "empty_string_as_none")]
    team: Option<String>,
}

/// Turns a CSV roster (`Email` column, optional `Team`) into operator profiles.
pub struct RosterImporter;

impl RosterImporter {
    pub fn from_reader<R: Read>(
        reader: R,
        now: NaiveTime,
    ) -> Result<Vec<RosterProfile>, RosterImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let mut seen = HashSet::new();
        let mut operators = Vec::new();
        let mut skipped = 0usize;

        for record in csv_reader.deserialize::<RosterRow>() {
            let row = record?;
            if row.email.is_empty() || !seen.insert(row.email.to_lowercase()) {
                skipped += 1;
                continue;
            }

            operators.push(RosterProfile {
                team: row.team,
                profile: OperatorProfile::from_email(&row.email, now),
            });
        }

        debug!(imported = operators.len(), skipped, "operator roster resolved");
        Ok(operators)
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|raw| !raw.trim().is_empty()))
}
