//! Read queries for the directory database.
//!
//! Candidate lists for the matcher are always fetched `ORDER BY id` so the
//! fuzzy tier's first-match-wins policy is deterministic across runs.

use greekdex_model::types::*;
use rusqlite::{params, Connection};

use crate::operations::OperationError;

// ── Matcher candidate lists ─────────────────────────────────────────────────

/// List all universities, ordered by id.
pub fn list_universities(conn: &Connection) -> Result<Vec<University>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT id, canonical_name, state, location, created_at, updated_at
         FROM universities ORDER BY id",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(University {
            id: row.get(0)?,
            canonical_name: row.get(1)?,
            state: row.get(2)?,
            location: row.get(3)?,
            created_at: row.get(4)?,
            updated_at: row.get(5)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// List organizations of one type, ordered by id.
pub fn list_organizations(
    conn: &Connection,
    org_type: OrgType,
) -> Result<Vec<Organization>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT id, name, greek_letters, organization_type, created_at
         FROM organizations WHERE organization_type = ?1 ORDER BY id",
    )?;
    let rows = stmt.query_map(params![org_type.as_str()], |row| {
        let type_str: String = row.get(3)?;
        Ok(Organization {
            id: row.get(0)?,
            name: row.get(1)?,
            greek_letters: row.get(2)?,
            organization_type: OrgType::from_str_loose(&type_str),
            created_at: row.get(4)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// A chapter joined with its parent names, as the chapter matcher sees it.
#[derive(Debug, Clone)]
pub struct ChapterCandidate {
    pub id: String,
    pub chapter_name: String,
    pub instagram_handle: Option<String>,
    pub organization_name: String,
    pub university_name: String,
    pub chapter_email: Option<String>,
    pub chapter_phone: Option<String>,
}

/// List all chapters joined with organization and university names,
/// ordered by chapter id.
pub fn chapter_candidates(conn: &Connection) -> Result<Vec<ChapterCandidate>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT c.id, c.chapter_name, c.instagram_handle, o.name, u.canonical_name,
                c.chapter_email, c.chapter_phone
         FROM chapters c
         JOIN organizations o ON c.organization_id = o.id
         JOIN universities u ON c.university_id = u.id
         ORDER BY c.id",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(ChapterCandidate {
            id: row.get(0)?,
            chapter_name: row.get(1)?,
            instagram_handle: row.get(2)?,
            organization_name: row.get(3)?,
            university_name: row.get(4)?,
            chapter_email: row.get(5)?,
            chapter_phone: row.get(6)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

// ── Officer queries ─────────────────────────────────────────────────────────

/// List a chapter's officers in roster order.
pub fn officers_for_chapter(
    conn: &Connection,
    chapter_id: &str,
) -> Result<Vec<ContactCandidate>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT name, role, email, phone, profile_link, is_primary, is_ambassador
         FROM officers WHERE chapter_id = ?1 ORDER BY position",
    )?;
    let rows = stmt.query_map(params![chapter_id], |row| {
        Ok(ContactCandidate {
            name: row.get(0)?,
            role: row.get(1)?,
            email: row.get(2)?,
            phone: row.get(3)?,
            profile_link: row.get(4)?,
            is_primary: row.get(5)?,
            is_ambassador: row.get(6)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

// ── Statistics ──────────────────────────────────────────────────────────────

/// Get overall directory statistics.
pub fn directory_stats(conn: &Connection) -> Result<DirectoryStats, OperationError> {
    let universities: i64 =
        conn.query_row("SELECT COUNT(*) FROM universities", [], |r| r.get(0))?;
    let organizations: i64 =
        conn.query_row("SELECT COUNT(*) FROM organizations", [], |r| r.get(0))?;
    let chapters: i64 = conn.query_row("SELECT COUNT(*) FROM chapters", [], |r| r.get(0))?;
    let active_chapters: i64 = conn.query_row(
        "SELECT COUNT(*) FROM chapters WHERE status = 'active'",
        [],
        |r| r.get(0),
    )?;
    let verified_chapters: i64 = conn.query_row(
        "SELECT COUNT(*) FROM chapters WHERE source_verified = 1",
        [],
        |r| r.get(0),
    )?;
    let officers: i64 = conn.query_row("SELECT COUNT(*) FROM officers", [], |r| r.get(0))?;
    let import_runs: i64 = conn.query_row("SELECT COUNT(*) FROM import_log", [], |r| r.get(0))?;

    Ok(DirectoryStats {
        universities,
        organizations,
        chapters,
        active_chapters,
        verified_chapters,
        officers,
        import_runs,
    })
}

/// Summary statistics for the directory.
#[derive(Debug)]
pub struct DirectoryStats {
    pub universities: i64,
    pub organizations: i64,
    pub chapters: i64,
    pub active_chapters: i64,
    pub verified_chapters: i64,
    pub officers: i64,
    pub import_runs: i64,
}
