//! Wire formats for batch imports and contact matching.
//!
//! Field names here are contracts with external scrapers and consumers and
//! must not be renamed: batch files use `greek_organizations` /
//! `greek_letters` / `organization_type` / `greekrank_url`, and
//! contact-matching responses use `match_confidence` ∈
//! `high|medium|low|none` and `match_method` ∈ `exact|fuzzy|instagram|none`.

use serde::{Deserialize, Serialize};

use crate::types::{Confidence, ContactCandidate, MatchMethod};

// ── Batch import input ──────────────────────────────────────────────────────

/// One record of a scraped batch export: a university and the organizations
/// seen at it. Batches may be split across numbered files; each file holds
/// an array of these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchRecord {
    pub university: String,
    pub greek_organizations: Vec<BatchOrganization>,
}

/// One organization entry within a batch record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchOrganization {
    pub name: String,
    #[serde(default)]
    pub greek_letters: Option<String>,
    pub organization_type: String,
    /// Present when the scrape source verified the chapter.
    #[serde(default)]
    pub greekrank_url: Option<String>,
    #[serde(default)]
    pub instagram_handle: Option<String>,
}

// ── Contact matching request/response ───────────────────────────────────────

/// A contact-matching request: chapters to look up in the directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchContactsRequest {
    pub chapters: Vec<ChapterQuery>,
}

/// One chapter lookup within a contact-matching request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChapterQuery {
    pub greek_organization: String,
    pub university: String,
    #[serde(default)]
    pub chapter_name: Option<String>,
    #[serde(default)]
    pub instagram_handle: Option<String>,
}

/// The contact-matching response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchContactsResponse {
    pub matches: Vec<ChapterMatchEntry>,
    pub unmatched: Vec<UnmatchedEntry>,
    pub summary: MatchSummary,
}

/// A successful lookup: the input echoed back, the matched chapter, and its
/// resolved contacts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChapterMatchEntry {
    pub input: ChapterQuery,
    pub matched_chapter: MatchedChapter,
    pub contacts: ContactBundle,
}

/// The matched chapter with the rule and confidence that matched it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchedChapter {
    pub id: String,
    pub chapter_name: String,
    pub greek_organization: String,
    pub university: String,
    pub match_confidence: Confidence,
    pub match_method: MatchMethod,
}

/// Contacts resolved for a matched chapter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactBundle {
    /// The single best point of contact, if any officer qualifies.
    pub primary: Option<ContactCandidate>,
    /// All leadership-role officers with an email, in roster order.
    pub leadership: Vec<ContactCandidate>,
    /// Ambassadors are reported but never selected as primary.
    pub ambassadors: Vec<ContactCandidate>,
    pub all_officers_count: usize,
    /// Chapter-level fallback contact fields, used by callers when
    /// `primary` is null.
    pub chapter_level: ChapterLevelContact,
}

/// Generic chapter-level contact fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChapterLevelContact {
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// A lookup that matched nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnmatchedEntry {
    pub input: ChapterQuery,
    pub reason: String,
}

/// Totals for a contact-matching response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSummary {
    pub total_input: usize,
    pub matched: usize,
    pub unmatched: usize,
}
