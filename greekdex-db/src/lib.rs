//! SQLite persistence layer for the Greek-life directory.
//!
//! Provides schema creation, CRUD operations, and query APIs
//! backed by SQLite (via rusqlite with bundled feature).

pub mod operations;
pub mod queries;
pub mod schema;

pub use operations::{
    fill_university_fields, find_chapter, find_chapter_by_pair, find_university, insert_chapter,
    insert_import_log, insert_organization, insert_university, replace_officers,
    set_chapter_member_count, ImportLogCounters, OperationError,
};
pub use queries::{
    chapter_candidates, directory_stats, list_organizations, list_universities,
    officers_for_chapter, ChapterCandidate, DirectoryStats,
};
pub use schema::{open_database, open_memory};
