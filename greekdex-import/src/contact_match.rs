//! The contact-matching boundary.
//!
//! Takes a list of chapter lookups, matches each against the directory, and
//! returns the matched chapters with their resolved contacts. The response
//! field names and the `match_confidence` / `match_method` strings are a
//! contract with downstream consumers and must not change.

use greekdex_db::operations::OperationError;
use greekdex_db::queries::{self, ChapterCandidate};
use greekdex_model::wire::*;
use rusqlite::Connection;
use thiserror::Error;

use crate::contacts;
use crate::matcher;

/// Reason string reported for lookups that matched nothing.
pub const UNMATCHED_REASON: &str = "No matching chapter found in database";

#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Database error: {0}")]
    Db(#[from] OperationError),
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Match every chapter query in a request against the directory.
pub fn match_contacts(
    conn: &Connection,
    request: &MatchContactsRequest,
) -> Result<MatchContactsResponse, MatchError> {
    // One candidate fetch serves the whole request; the id ordering keeps
    // fuzzy-tier tie-breaks deterministic.
    let candidates = queries::chapter_candidates(conn)?;

    let mut matches = Vec::new();
    let mut unmatched = Vec::new();

    for query in &request.chapters {
        match matcher::match_chapter(query, &candidates) {
            Some(chapter_match) => {
                let candidate = chapter_match.candidate;
                let contacts = build_contact_bundle(conn, candidate)?;
                matches.push(ChapterMatchEntry {
                    input: query.clone(),
                    matched_chapter: MatchedChapter {
                        id: candidate.id.clone(),
                        chapter_name: candidate.chapter_name.clone(),
                        greek_organization: candidate.organization_name.clone(),
                        university: candidate.university_name.clone(),
                        match_confidence: chapter_match.confidence,
                        match_method: chapter_match.method,
                    },
                    contacts,
                });
            }
            None => {
                unmatched.push(UnmatchedEntry {
                    input: query.clone(),
                    reason: UNMATCHED_REASON.to_string(),
                });
            }
        }
    }

    let summary = MatchSummary {
        total_input: request.chapters.len(),
        matched: matches.len(),
        unmatched: unmatched.len(),
    };

    Ok(MatchContactsResponse {
        matches,
        unmatched,
        summary,
    })
}

/// Resolve the contact bundle for one matched chapter.
fn build_contact_bundle(
    conn: &Connection,
    candidate: &ChapterCandidate,
) -> Result<ContactBundle, MatchError> {
    let officers = queries::officers_for_chapter(conn, &candidate.id)?;

    Ok(ContactBundle {
        primary: contacts::select_primary(&officers).cloned(),
        leadership: contacts::leadership_contacts(&officers),
        ambassadors: contacts::ambassadors(&officers),
        all_officers_count: officers.len(),
        chapter_level: ChapterLevelContact {
            email: candidate.chapter_email.clone(),
            phone: candidate.chapter_phone.clone(),
        },
    })
}
