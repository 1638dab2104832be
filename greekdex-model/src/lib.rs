//! Data model types for the Greek-life directory.
//!
//! These types represent the persistent directory schema (universities,
//! organizations, chapters, officers), the transient match-result types,
//! and the wire formats used by batch imports and contact matching.

pub mod normalize;
pub mod types;
pub mod wire;

pub use normalize::{
    clean_university_name, handle_key, organization_key, slugify, university_key,
};
pub use types::{
    Chapter, ChapterStatus, Confidence, ContactCandidate, MatchMethod, MatchOutcome,
    Organization, OrgType, University,
};
