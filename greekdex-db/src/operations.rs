//! Write operations for directory entities.

use greekdex_model::types::*;
use rusqlite::{params, Connection};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Entity not found: {entity_type} with id '{id}'")]
    NotFound { entity_type: String, id: String },
}

// ── University Operations ───────────────────────────────────────────────────

/// Insert a new university.
pub fn insert_university(conn: &Connection, u: &University) -> Result<(), OperationError> {
    conn.execute(
        "INSERT INTO universities (id, canonical_name, state, location)
         VALUES (?1, ?2, ?3, ?4)",
        params![u.id, u.canonical_name, u.state, u.location],
    )?;
    Ok(())
}

/// Fill a university's null fields from new sighting data.
///
/// Universities are never overwritten by imports; COALESCE keeps existing
/// non-null values and only fills the gaps.
pub fn fill_university_fields(
    conn: &Connection,
    id: &str,
    state: Option<&str>,
    location: Option<&str>,
) -> Result<(), OperationError> {
    let changed = conn.execute(
        "UPDATE universities SET
             state = COALESCE(state, ?2),
             location = COALESCE(location, ?3),
             updated_at = datetime('now')
         WHERE id = ?1",
        params![id, state, location],
    )?;
    if changed == 0 {
        return Err(OperationError::NotFound {
            entity_type: "university".to_string(),
            id: id.to_string(),
        });
    }
    Ok(())
}

/// Find a university by id.
pub fn find_university(conn: &Connection, id: &str) -> Result<Option<University>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT id, canonical_name, state, location, created_at, updated_at
         FROM universities WHERE id = ?1",
    )?;
    let result = stmt.query_row(params![id], |row| {
        Ok(University {
            id: row.get(0)?,
            canonical_name: row.get(1)?,
            state: row.get(2)?,
            location: row.get(3)?,
            created_at: row.get(4)?,
            updated_at: row.get(5)?,
        })
    });
    match result {
        Ok(u) => Ok(Some(u)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

// ── Organization Operations ─────────────────────────────────────────────────

/// Insert a new organization.
pub fn insert_organization(conn: &Connection, o: &Organization) -> Result<(), OperationError> {
    conn.execute(
        "INSERT INTO organizations (id, name, greek_letters, organization_type)
         VALUES (?1, ?2, ?3, ?4)",
        params![o.id, o.name, o.greek_letters, o.organization_type.as_str()],
    )?;
    Ok(())
}

// ── Chapter Operations ──────────────────────────────────────────────────────

/// Insert a new chapter.
pub fn insert_chapter(conn: &Connection, c: &Chapter) -> Result<(), OperationError> {
    conn.execute(
        "INSERT INTO chapters (id, university_id, organization_id, chapter_name,
             greek_letters, instagram_handle, status, source_verified, member_count,
             chapter_email, chapter_phone)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            c.id,
            c.university_id,
            c.organization_id,
            c.chapter_name,
            c.greek_letters,
            c.instagram_handle,
            c.status.as_str(),
            c.source_verified,
            c.member_count,
            c.chapter_email,
            c.chapter_phone,
        ],
    )?;
    Ok(())
}

/// Find a chapter by its natural key `(university_id, organization_id)`.
pub fn find_chapter_by_pair(
    conn: &Connection,
    university_id: &str,
    organization_id: &str,
) -> Result<Option<Chapter>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT id, university_id, organization_id, chapter_name, greek_letters,
                instagram_handle, status, source_verified, member_count,
                chapter_email, chapter_phone, created_at, updated_at
         FROM chapters WHERE university_id = ?1 AND organization_id = ?2",
    )?;
    let result = stmt.query_row(params![university_id, organization_id], row_to_chapter);
    match result {
        Ok(c) => Ok(Some(c)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Find a chapter by id.
pub fn find_chapter(conn: &Connection, id: &str) -> Result<Option<Chapter>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT id, university_id, organization_id, chapter_name, greek_letters,
                instagram_handle, status, source_verified, member_count,
                chapter_email, chapter_phone, created_at, updated_at
         FROM chapters WHERE id = ?1",
    )?;
    let result = stmt.query_row(params![id], row_to_chapter);
    match result {
        Ok(c) => Ok(Some(c)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Update a chapter's member count from a roster import.
pub fn set_chapter_member_count(
    conn: &Connection,
    id: &str,
    member_count: i64,
) -> Result<(), OperationError> {
    let changed = conn.execute(
        "UPDATE chapters SET member_count = ?2, updated_at = datetime('now') WHERE id = ?1",
        params![id, member_count],
    )?;
    if changed == 0 {
        return Err(OperationError::NotFound {
            entity_type: "chapter".to_string(),
            id: id.to_string(),
        });
    }
    Ok(())
}

// ── Officer Operations ──────────────────────────────────────────────────────

/// Replace a chapter's officer roster. Roster order is preserved in the
/// `position` column so contact selection stays deterministic.
pub fn replace_officers(
    conn: &Connection,
    chapter_id: &str,
    officers: &[ContactCandidate],
) -> Result<usize, OperationError> {
    conn.execute(
        "DELETE FROM officers WHERE chapter_id = ?1",
        params![chapter_id],
    )?;
    for (i, o) in officers.iter().enumerate() {
        conn.execute(
            "INSERT INTO officers (chapter_id, name, role, email, phone, profile_link,
                 is_primary, is_ambassador, position)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                chapter_id,
                o.name,
                o.role,
                o.email,
                o.phone,
                o.profile_link,
                o.is_primary,
                o.is_ambassador,
                i as i64,
            ],
        )?;
    }
    Ok(officers.len())
}

// ── Import Log Operations ───────────────────────────────────────────────────

/// Record an import run. Returns the generated log id.
pub fn insert_import_log(
    conn: &Connection,
    source_name: &str,
    imported_at: &str,
    counters: &ImportLogCounters,
) -> Result<i64, OperationError> {
    conn.execute(
        "INSERT INTO import_log (source_name, imported_at, universities_created,
             universities_matched, organizations_created, organizations_matched,
             chapters_created, chapters_skipped, errors)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            source_name,
            imported_at,
            counters.universities_created,
            counters.universities_matched,
            counters.organizations_created,
            counters.organizations_matched,
            counters.chapters_created,
            counters.chapters_skipped,
            counters.errors,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Counter columns of an import_log row.
#[derive(Debug, Default, Clone)]
pub struct ImportLogCounters {
    pub universities_created: i64,
    pub universities_matched: i64,
    pub organizations_created: i64,
    pub organizations_matched: i64,
    pub chapters_created: i64,
    pub chapters_skipped: i64,
    pub errors: i64,
}

// ── Row Mapping Helpers ─────────────────────────────────────────────────────

fn row_to_chapter(row: &rusqlite::Row<'_>) -> rusqlite::Result<Chapter> {
    let status_str: String = row.get(6)?;
    Ok(Chapter {
        id: row.get(0)?,
        university_id: row.get(1)?,
        organization_id: row.get(2)?,
        chapter_name: row.get(3)?,
        greek_letters: row.get(4)?,
        instagram_handle: row.get(5)?,
        status: ChapterStatus::from_str_loose(&status_str),
        source_verified: row.get(7)?,
        member_count: row.get(8)?,
        chapter_email: row.get(9)?,
        chapter_phone: row.get(10)?,
        created_at: row.get(11)?,
        updated_at: row.get(12)?,
    })
}
