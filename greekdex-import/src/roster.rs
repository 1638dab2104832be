//! Ingest pasted CSV officer rosters.
//!
//! Expected header row: `name,email,phone,member_type,position`. The roster
//! replaces the chapter's existing officers wholesale and refreshes the
//! chapter's member count; row order is preserved because the contact
//! selector breaks ties by it.

use std::io::Read;

use greekdex_db::operations::{self, OperationError};
use greekdex_model::types::ContactCandidate;
use rusqlite::Connection;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Database error: {0}")]
    Db(#[from] OperationError),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Chapter not found: {0}")]
    UnknownChapter(String),
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    name: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    member_type: Option<String>,
    #[serde(default)]
    position: Option<String>,
}

fn non_empty(field: Option<String>) -> Option<String> {
    field.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// Parse a CSV roster into contact candidates, in row order.
pub fn parse_roster<R: Read>(reader: R) -> Result<Vec<ContactCandidate>, RosterError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut officers = Vec::new();
    for row in csv_reader.deserialize::<RosterRow>() {
        let row = row?;
        if row.name.trim().is_empty() {
            continue;
        }

        let member_type = row.member_type.as_deref().unwrap_or("").trim().to_lowercase();
        let role = non_empty(row.position.clone()).unwrap_or_else(|| "Member".to_string());

        officers.push(ContactCandidate {
            name: row.name.trim().to_string(),
            is_primary: member_type == "primary" || role.eq_ignore_ascii_case("primary"),
            is_ambassador: member_type == "ambassador",
            role,
            email: non_empty(row.email),
            phone: non_empty(row.phone),
            profile_link: None,
        });
    }
    Ok(officers)
}

/// Replace a chapter's roster with the parsed officers.
///
/// Returns the number of officers stored. The chapter's member count is set
/// from the roster length.
pub fn import_roster(
    conn: &Connection,
    chapter_id: &str,
    officers: &[ContactCandidate],
) -> Result<usize, RosterError> {
    if operations::find_chapter(conn, chapter_id)?.is_none() {
        return Err(RosterError::UnknownChapter(chapter_id.to_string()));
    }

    let stored = operations::replace_officers(conn, chapter_id, officers)?;
    operations::set_chapter_member_count(conn, chapter_id, stored as i64)?;
    log::info!("Stored {} officers for chapter {}", stored, chapter_id);
    Ok(stored)
}
