//! Tiered candidate matching.
//!
//! Three rules, applied in strict order with no score blending: exact key
//! equality (high), substring containment of normalized keys (medium), and
//! for chapters an Instagram-handle comparison (low). Each tier is scanned
//! over the full candidate list before the next tier is tried, so a record
//! that qualifies for both exact and fuzzy always reports exact.
//!
//! Candidate lists must arrive in a stable order (the query layer sorts by
//! id); within the fuzzy tier the first qualifying candidate wins, and a
//! stable scan order is what keeps that choice reproducible across runs.

use greekdex_db::queries::ChapterCandidate;
use greekdex_model::normalize::{handle_key, organization_key, university_key};
use greekdex_model::types::*;
use greekdex_model::wire::ChapterQuery;

/// How one name fragment relates to one candidate field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum NameTier {
    Exact,
    Fuzzy,
}

/// Compare two normalized keys. Exact equality beats containment; empty keys
/// never match anything.
fn name_tier(query_key: &str, candidate_key: &str) -> Option<NameTier> {
    if query_key.is_empty() || candidate_key.is_empty() {
        return None;
    }
    if query_key == candidate_key {
        return Some(NameTier::Exact);
    }
    if query_key.contains(candidate_key) || candidate_key.contains(query_key) {
        return Some(NameTier::Fuzzy);
    }
    if tokens_align(query_key, candidate_key) {
        return Some(NameTier::Fuzzy);
    }
    None
}

/// Token-aligned prefix comparison, covering abbreviated spellings that plain
/// containment misses ("penn state" vs "pennsylvania state").
///
/// Both keys must have the same token count and each token pair must agree
/// up to the shorter token. Unequal tokens shorter than three characters are
/// rejected so stray initials cannot align with everything.
fn tokens_align(a: &str, b: &str) -> bool {
    let a_tokens: Vec<&str> = a.split(' ').collect();
    let b_tokens: Vec<&str> = b.split(' ').collect();
    if a_tokens.len() != b_tokens.len() {
        return false;
    }
    a_tokens.iter().zip(&b_tokens).all(|(ta, tb)| {
        if ta == tb {
            return true;
        }
        let (short, long) = if ta.len() <= tb.len() { (ta, tb) } else { (tb, ta) };
        short.len() >= 3 && long.starts_with(short)
    })
}

/// Match a raw university name against existing universities.
pub fn match_university(raw: &str, existing: &[University]) -> Option<MatchOutcome> {
    let key = university_key(raw);

    for u in existing {
        if name_tier(&key, &university_key(&u.canonical_name)) == Some(NameTier::Exact) {
            return Some(MatchOutcome {
                id: u.id.clone(),
                confidence: Confidence::High,
                method: MatchMethod::Exact,
            });
        }
    }
    for u in existing {
        if name_tier(&key, &university_key(&u.canonical_name)) == Some(NameTier::Fuzzy) {
            return Some(MatchOutcome {
                id: u.id.clone(),
                confidence: Confidence::Medium,
                method: MatchMethod::Fuzzy,
            });
        }
    }
    None
}

/// Match a raw organization name against existing organizations.
///
/// Callers pre-filter the candidate list by organization type, so a
/// fraternity never matches a sorority sharing its name.
pub fn match_organization(raw: &str, existing: &[Organization]) -> Option<MatchOutcome> {
    let key = organization_key(raw);

    for o in existing {
        if name_tier(&key, &organization_key(&o.name)) == Some(NameTier::Exact) {
            return Some(MatchOutcome {
                id: o.id.clone(),
                confidence: Confidence::High,
                method: MatchMethod::Exact,
            });
        }
    }
    for o in existing {
        if name_tier(&key, &organization_key(&o.name)) == Some(NameTier::Fuzzy) {
            return Some(MatchOutcome {
                id: o.id.clone(),
                confidence: Confidence::Medium,
                method: MatchMethod::Fuzzy,
            });
        }
    }
    None
}

/// A chapter match: the winning candidate plus the rule that produced it.
#[derive(Debug)]
pub struct ChapterMatch<'a> {
    pub candidate: &'a ChapterCandidate,
    pub confidence: Confidence,
    pub method: MatchMethod,
}

/// Match a chapter query against the joined chapter candidates.
///
/// A name-based chapter match requires BOTH the organization fragment and
/// the university fragment to independently satisfy exact or fuzzy against
/// the candidate's parent fields. One matching parent is not enough; such a
/// record falls through to the handle tier and then to none.
pub fn match_chapter<'a>(
    query: &ChapterQuery,
    candidates: &'a [ChapterCandidate],
) -> Option<ChapterMatch<'a>> {
    let org_key = organization_key(&query.greek_organization);
    let uni_key = university_key(&query.university);

    // Tier 1: both parents exact
    for c in candidates {
        let org = name_tier(&org_key, &organization_key(&c.organization_name));
        let uni = name_tier(&uni_key, &university_key(&c.university_name));
        if org == Some(NameTier::Exact) && uni == Some(NameTier::Exact) {
            return Some(ChapterMatch {
                candidate: c,
                confidence: Confidence::High,
                method: MatchMethod::Exact,
            });
        }
    }

    // Tier 2: both parents match, at least one only fuzzily
    for c in candidates {
        let org = name_tier(&org_key, &organization_key(&c.organization_name));
        let uni = name_tier(&uni_key, &university_key(&c.university_name));
        if org.is_some() && uni.is_some() {
            return Some(ChapterMatch {
                candidate: c,
                confidence: Confidence::Medium,
                method: MatchMethod::Fuzzy,
            });
        }
    }

    // Tier 3: Instagram handle
    if let Some(ref raw_handle) = query.instagram_handle {
        let handle = handle_key(raw_handle);
        if !handle.is_empty() {
            for c in candidates {
                if let Some(ref stored) = c.instagram_handle {
                    if handle_key(stored).contains(&handle) {
                        return Some(ChapterMatch {
                            candidate: c,
                            confidence: Confidence::Low,
                            method: MatchMethod::Instagram,
                        });
                    }
                }
            }
        }
    }

    None
}
