//! Core entity and match-result types.

use serde::{Deserialize, Serialize};

// ── University ──────────────────────────────────────────────────────────────

/// A university. Created lazily on first unmatched sighting; never deleted
/// by the import engine; mutated only to fill previously-null fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct University {
    pub id: String,
    pub canonical_name: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

// ── Organization ────────────────────────────────────────────────────────────

/// A Greek-letter organization (national body, not a chapter).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub greek_letters: Option<String>,
    pub organization_type: OrgType,
    #[serde(default)]
    pub created_at: String,
}

/// Organization type. A fraternity and a sorority sharing a name are
/// distinct entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrgType {
    Fraternity,
    Sorority,
}

impl OrgType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrgType::Fraternity => "fraternity",
            OrgType::Sorority => "sorority",
        }
    }

    /// Parse a type string leniently. Unknown values default to fraternity,
    /// matching how scraped sources label mixed/unknown organizations.
    pub fn from_str_loose(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "sorority" => OrgType::Sorority,
            _ => OrgType::Fraternity,
        }
    }
}

// ── Chapter ─────────────────────────────────────────────────────────────────

/// A chapter of an organization at a university.
///
/// Natural key: `(university_id, organization_id)` — at most one chapter per
/// organization per university.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chapter {
    pub id: String,
    pub university_id: String,
    pub organization_id: String,
    pub chapter_name: String,
    #[serde(default)]
    pub greek_letters: Option<String>,
    #[serde(default)]
    pub instagram_handle: Option<String>,
    pub status: ChapterStatus,
    pub source_verified: bool,
    #[serde(default)]
    pub member_count: Option<i64>,
    #[serde(default)]
    pub chapter_email: Option<String>,
    #[serde(default)]
    pub chapter_phone: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Chapter lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChapterStatus {
    #[default]
    Active,
    Inactive,
    Unknown,
}

impl ChapterStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChapterStatus::Active => "active",
            ChapterStatus::Inactive => "inactive",
            ChapterStatus::Unknown => "unknown",
        }
    }

    pub fn from_str_loose(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "active" => ChapterStatus::Active,
            "inactive" => ChapterStatus::Inactive,
            _ => ChapterStatus::Unknown,
        }
    }
}

// ── Contacts ────────────────────────────────────────────────────────────────

/// One entry from a chapter's officer roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactCandidate {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub profile_link: Option<String>,
    #[serde(default)]
    pub is_primary: bool,
    #[serde(default)]
    pub is_ambassador: bool,
}

// ── Match results ───────────────────────────────────────────────────────────

/// How strongly a match result should be trusted. Each tier of the matcher
/// produces exactly one confidence level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
    None,
}

/// Which matching rule produced a result. These strings are an external
/// contract (the `match_method` field of contact-matching responses).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMethod {
    Exact,
    Fuzzy,
    Instagram,
    None,
}

/// A successful match against an existing record: the entity id plus the
/// rule and confidence that produced it, so every match is auditable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOutcome {
    pub id: String,
    pub confidence: Confidence,
    pub method: MatchMethod,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_serializes_to_contract_strings() {
        assert_eq!(serde_json::to_string(&Confidence::High).unwrap(), "\"high\"");
        assert_eq!(serde_json::to_string(&Confidence::Medium).unwrap(), "\"medium\"");
        assert_eq!(serde_json::to_string(&Confidence::Low).unwrap(), "\"low\"");
        assert_eq!(serde_json::to_string(&Confidence::None).unwrap(), "\"none\"");
    }

    #[test]
    fn match_method_serializes_to_contract_strings() {
        assert_eq!(serde_json::to_string(&MatchMethod::Exact).unwrap(), "\"exact\"");
        assert_eq!(serde_json::to_string(&MatchMethod::Fuzzy).unwrap(), "\"fuzzy\"");
        assert_eq!(
            serde_json::to_string(&MatchMethod::Instagram).unwrap(),
            "\"instagram\""
        );
        assert_eq!(serde_json::to_string(&MatchMethod::None).unwrap(), "\"none\"");
    }

    #[test]
    fn org_type_from_str_loose() {
        assert_eq!(OrgType::from_str_loose("Sorority"), OrgType::Sorority);
        assert_eq!(OrgType::from_str_loose("fraternity"), OrgType::Fraternity);
        assert_eq!(OrgType::from_str_loose("coed"), OrgType::Fraternity);
    }
}
