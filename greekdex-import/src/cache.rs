//! Run-scoped identity cache.
//!
//! Maps normalized comparison keys to the entity ids resolved earlier in the
//! same run, so a batch that mentions "Ohio State" two hundred times hits the
//! database once. The cache is a performance layer only — the resolver stays
//! correct with an empty cache, because the natural-key check always goes to
//! the store.
//!
//! A fresh cache must be constructed per run. It is passed by `&mut` into the
//! resolver rather than held in any global, so concurrent test cases cannot
//! leak ids into each other.

use std::collections::{HashMap, HashSet};

use greekdex_model::types::OrgType;

/// Identity cache for a single import run.
#[derive(Debug, Default)]
pub struct RunCache {
    /// university comparison key → university id
    universities: HashMap<String, String>,
    /// (type, organization comparison key) → organization id
    organizations: HashMap<(OrgType, String), String>,
    /// Natural keys of chapters created (or observed) during this run.
    ///
    /// In dry-run mode no rows are written, so this set is what makes a
    /// second sighting of the same pair count as a skip instead of a
    /// phantom second create.
    chapters: HashSet<(String, String)>,
}

impl RunCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_university(&self, key: &str) -> Option<&str> {
        self.universities.get(key).map(String::as_str)
    }

    pub fn put_university(&mut self, key: String, id: String) {
        self.universities.insert(key, id);
    }

    pub fn get_organization(&self, org_type: OrgType, key: &str) -> Option<&str> {
        self.organizations
            .get(&(org_type, key.to_string()))
            .map(String::as_str)
    }

    pub fn put_organization(&mut self, org_type: OrgType, key: String, id: String) {
        self.organizations.insert((org_type, key), id);
    }

    pub fn has_chapter(&self, university_id: &str, organization_id: &str) -> bool {
        self.chapters
            .contains(&(university_id.to_string(), organization_id.to_string()))
    }

    pub fn put_chapter(&mut self, university_id: String, organization_id: String) {
        self.chapters.insert((university_id, organization_id));
    }
}
