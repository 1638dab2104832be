//! Import scraped directory data into the chapter database.
//!
//! This crate owns all resolution logic: normalizing and matching entity
//! names against existing records, finding-or-creating universities and
//! organizations, deduplicating chapters on their natural key, resolving
//! contacts for matched chapters, and ingesting pasted officer rosters.

pub mod batch_import;
pub mod cache;
pub mod contact_match;
pub mod contacts;
pub mod matcher;
pub mod progress;
pub mod roster;

pub use batch_import::{import_batch, parse_batch, ImportError, ImportOptions, ImportStats};
pub use cache::RunCache;
pub use contact_match::{match_contacts, MatchError, UNMATCHED_REASON};
pub use contacts::{
    ambassadors, is_leadership_role, leadership_contacts, select_primary, LEADERSHIP_ROLES,
};
pub use matcher::{match_chapter, match_organization, match_university, ChapterMatch};
pub use progress::{ImportProgress, LogProgress, SilentProgress};
pub use roster::{import_roster, parse_roster, RosterError};
