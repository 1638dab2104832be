//! Import scraped batch records into the directory database.
//!
//! Each batch record is one university plus the organizations seen at it.
//! For every (university, organization) pair the resolver finds or creates
//! both parents in dependency order, then inserts the chapter unless its
//! natural key already exists. One bad record never aborts the batch: the
//! failure is logged with the record's identifying strings, counted, and the
//! run moves on.

use greekdex_db::operations::{self, ImportLogCounters, OperationError};
use greekdex_db::queries;
use greekdex_model::normalize::{clean_university_name, organization_key, slugify, university_key};
use greekdex_model::types::*;
use greekdex_model::wire::{BatchOrganization, BatchRecord};
use rusqlite::Connection;
use thiserror::Error;

use crate::cache::RunCache;
use crate::matcher;
use crate::progress::ImportProgress;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Database error: {0}")]
    Db(#[from] OperationError),
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Batch parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Options for a batch import run.
#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Compute and count every would-be write, but perform none of them.
    /// Matching still runs against real existing data, so dry-run counts
    /// are a faithful preview of a real run.
    pub dry_run: bool,
    /// Source label recorded in the import log.
    pub source_name: String,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            dry_run: false,
            source_name: "batch".to_string(),
        }
    }
}

/// Statistics from a single batch import run. This is the auditable record
/// an operator inspects to judge whether a dry run is safe to commit.
#[derive(Debug, Default, Clone)]
pub struct ImportStats {
    pub universities_processed: u64,
    pub universities_created: u64,
    pub universities_matched: u64,
    pub organizations_created: u64,
    pub organizations_matched: u64,
    pub chapters_created: u64,
    pub chapters_skipped: u64,
    pub errors: u64,
}

/// Parse a batch file's contents into records.
///
/// Malformed JSON is the one fatal condition of an import: there is nothing
/// valid to iterate, so the error propagates instead of being swallowed.
pub fn parse_batch(contents: &str) -> Result<Vec<BatchRecord>, ImportError> {
    Ok(serde_json::from_str(contents)?)
}

/// Import a slice of batch records.
///
/// The cache must be freshly constructed for the run; reusing one across
/// runs would hand out stale ids. Processing is sequential so each upsert is
/// visible to the natural-key check of the next pair in the same run.
pub fn import_batch(
    conn: &Connection,
    records: &[BatchRecord],
    options: &ImportOptions,
    cache: &mut RunCache,
    progress: Option<&dyn ImportProgress>,
) -> Result<ImportStats, ImportError> {
    let mut stats = ImportStats::default();

    for (i, record) in records.iter().enumerate() {
        stats.universities_processed += 1;

        let university_id = match resolve_university(conn, &record.university, options, cache, &mut stats)
        {
            Ok(id) => id,
            Err(e) => {
                log::warn!("Failed to resolve university '{}': {}", record.university, e);
                stats.errors += 1;
                continue;
            }
        };

        for org in &record.greek_organizations {
            if let Err(e) = import_pair(conn, &university_id, org, options, cache, &mut stats) {
                log::warn!(
                    "Failed to import '{}' at '{}': {}",
                    org.name,
                    record.university,
                    e
                );
                stats.errors += 1;
            }
        }

        if let Some(p) = progress {
            p.on_record(i + 1, records.len(), &record.university);
        }
    }

    if !options.dry_run {
        log_import(conn, &options.source_name, &stats)?;
    }

    Ok(stats)
}

/// Resolve a university by name, creating it if no existing record matches.
fn resolve_university(
    conn: &Connection,
    raw_name: &str,
    options: &ImportOptions,
    cache: &mut RunCache,
    stats: &mut ImportStats,
) -> Result<String, ImportError> {
    let key = university_key(raw_name);

    if let Some(id) = cache.get_university(&key) {
        stats.universities_matched += 1;
        return Ok(id.to_string());
    }

    let existing = queries::list_universities(conn)?;
    if let Some(outcome) = matcher::match_university(raw_name, &existing) {
        log::debug!(
            "Matched university '{}' -> {} ({:?}/{:?})",
            raw_name,
            outcome.id,
            outcome.confidence,
            outcome.method
        );
        stats.universities_matched += 1;

        // A later sighting may carry fields an earlier one lacked
        let (_, state) = clean_university_name(raw_name);
        if !options.dry_run && state.is_some() {
            operations::fill_university_fields(conn, &outcome.id, state.as_deref(), None)?;
        }

        cache.put_university(key, outcome.id.clone());
        return Ok(outcome.id);
    }

    let (clean_name, state) = clean_university_name(raw_name);
    let id = slugify(&clean_name);
    if !options.dry_run {
        operations::insert_university(
            conn,
            &University {
                id: id.clone(),
                canonical_name: clean_name.clone(),
                state,
                location: None,
                created_at: String::new(),
                updated_at: String::new(),
            },
        )?;
    }
    log::debug!("Created university '{}' ({})", clean_name, id);
    stats.universities_created += 1;
    cache.put_university(key, id.clone());
    Ok(id)
}

/// Resolve an organization by name and type, creating it if unmatched.
fn resolve_organization(
    conn: &Connection,
    org: &BatchOrganization,
    options: &ImportOptions,
    cache: &mut RunCache,
    stats: &mut ImportStats,
) -> Result<String, ImportError> {
    let org_type = OrgType::from_str_loose(&org.organization_type);
    let key = organization_key(&org.name);

    if let Some(id) = cache.get_organization(org_type, &key) {
        stats.organizations_matched += 1;
        return Ok(id.to_string());
    }

    // Candidates are pre-filtered by type: a fraternity and a sorority
    // sharing a name are distinct entities.
    let existing = queries::list_organizations(conn, org_type)?;
    if let Some(outcome) = matcher::match_organization(&org.name, &existing) {
        log::debug!(
            "Matched organization '{}' -> {} ({:?}/{:?})",
            org.name,
            outcome.id,
            outcome.confidence,
            outcome.method
        );
        stats.organizations_matched += 1;
        cache.put_organization(org_type, key, outcome.id.clone());
        return Ok(outcome.id);
    }

    let id = format!("{}:{}", org_type.as_str(), slugify(&org.name));
    if !options.dry_run {
        operations::insert_organization(
            conn,
            &Organization {
                id: id.clone(),
                name: org.name.clone(),
                greek_letters: org.greek_letters.clone(),
                organization_type: org_type,
                created_at: String::new(),
            },
        )?;
    }
    log::debug!("Created organization '{}' ({})", org.name, id);
    stats.organizations_created += 1;
    cache.put_organization(org_type, key, id.clone());
    Ok(id)
}

/// Resolve one (university, organization) pair and insert its chapter
/// unless the natural key already exists.
fn import_pair(
    conn: &Connection,
    university_id: &str,
    org: &BatchOrganization,
    options: &ImportOptions,
    cache: &mut RunCache,
    stats: &mut ImportStats,
) -> Result<(), ImportError> {
    let organization_id = resolve_organization(conn, org, options, cache, stats)?;

    // Natural-key check: at most one chapter per organization per university.
    // The cache covers pairs seen earlier in this run (dry runs write no
    // rows, so the store alone cannot answer for them); the store covers
    // everything from prior runs. The unique index on the pair is the final
    // guard either way.
    if cache.has_chapter(university_id, &organization_id)
        || operations::find_chapter_by_pair(conn, university_id, &organization_id)?.is_some()
    {
        log::debug!(
            "Skipping existing chapter ({}, {})",
            university_id,
            organization_id
        );
        stats.chapters_skipped += 1;
        return Ok(());
    }

    let chapter = Chapter {
        id: format!("{university_id}:{organization_id}"),
        university_id: university_id.to_string(),
        organization_id: organization_id.clone(),
        chapter_name: org.name.clone(),
        greek_letters: org.greek_letters.clone(),
        instagram_handle: org.instagram_handle.clone(),
        status: ChapterStatus::Active,
        source_verified: org.greekrank_url.is_some(),
        member_count: None,
        chapter_email: None,
        chapter_phone: None,
        created_at: String::new(),
        updated_at: String::new(),
    };
    if !options.dry_run {
        operations::insert_chapter(conn, &chapter)?;
    }
    log::debug!("Created chapter {}", chapter.id);
    stats.chapters_created += 1;
    cache.put_chapter(university_id.to_string(), organization_id);
    Ok(())
}

/// Record a completed run in the import log.
fn log_import(conn: &Connection, source_name: &str, stats: &ImportStats) -> Result<(), ImportError> {
    let now = chrono::Utc::now().to_rfc3339();
    let counters = ImportLogCounters {
        universities_created: stats.universities_created as i64,
        universities_matched: stats.universities_matched as i64,
        organizations_created: stats.organizations_created as i64,
        organizations_matched: stats.organizations_matched as i64,
        chapters_created: stats.chapters_created as i64,
        chapters_skipped: stats.chapters_skipped as i64,
        errors: stats.errors as i64,
    };
    operations::insert_import_log(conn, source_name, &now, &counters)?;
    Ok(())
}
