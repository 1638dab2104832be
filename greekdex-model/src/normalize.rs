//! Name normalization for entity matching.
//!
//! Scraped sources spell the same entity many ways ("Ohio State University"
//! vs "The Ohio State University - OH"). These functions map a raw name to a
//! canonical comparison key used solely for equality/containment checks,
//! never for display.
//!
//! All functions here are pure and total: same input always yields the same
//! output, and already-normalized strings are fixed points
//! (`university_key(university_key(x)) == university_key(x)`). Dedup
//! correctness depends on that.

/// Filler tokens stripped from university names before comparison.
const UNIVERSITY_STOP_TOKENS: &[&str] = &["university", "college", "the"];

/// Normalize a university name to its comparison key.
///
/// Lowercases, removes hyphens/commas/periods, drops the tokens
/// "university", "college", and "the", and collapses whitespace.
///
/// # Examples
///
/// ```
/// use greekdex_model::normalize::university_key;
///
/// assert_eq!(university_key("The Ohio State University - OH"), "ohio state oh");
/// assert_eq!(university_key("Ohio State"), "ohio state");
/// ```
pub fn university_key(raw: &str) -> String {
    let mut cleaned = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '-' | ',' | '.' => cleaned.push(' '),
            _ => cleaned.extend(c.to_lowercase()),
        }
    }

    let mut out = String::with_capacity(cleaned.len());
    for token in cleaned.split_whitespace() {
        if UNIVERSITY_STOP_TOKENS.contains(&token) {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(token);
    }
    out
}

/// Normalize an organization name to its comparison key.
///
/// Lowercases and keeps only letters and spaces, then collapses whitespace.
/// Greek letters count as letters, so "ΣΧ" survives normalization.
pub fn organization_key(raw: &str) -> String {
    let mut cleaned = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c.is_alphabetic() {
            cleaned.extend(c.to_lowercase());
        } else if c.is_whitespace() {
            cleaned.push(' ');
        }
    }

    let mut out = String::with_capacity(cleaned.len());
    for token in cleaned.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(token);
    }
    out
}

/// Normalize a social handle for matching: strip a leading `@`, lowercase,
/// trim surrounding whitespace.
pub fn handle_key(raw: &str) -> String {
    raw.trim().trim_start_matches('@').to_lowercase()
}

/// Clean a scraped university name for display and extract a trailing
/// US-state suffix if present.
///
/// `"Pennsylvania State University - PA"` becomes
/// `("Pennsylvania State University", Some("PA"))`. Names without the
/// suffix pass through unchanged.
pub fn clean_university_name(raw: &str) -> (String, Option<String>) {
    let trimmed = raw.trim();
    if let Some((name, suffix)) = trimmed.rsplit_once(" - ") {
        let suffix = suffix.trim();
        if suffix.len() == 2 && suffix.chars().all(|c| c.is_ascii_uppercase()) {
            return (name.trim().to_string(), Some(suffix.to_string()));
        }
    }
    (trimmed.to_string(), None)
}

/// Convert a string to a URL-safe slug used for stable entity ids.
pub fn slugify(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut last_was_separator = false;

    for c in s.chars() {
        if c.is_ascii_alphanumeric() {
            result.push(c.to_ascii_lowercase());
            last_was_separator = false;
        } else if !last_was_separator && !result.is_empty() {
            result.push('-');
            last_was_separator = true;
        }
    }

    if result.ends_with('-') {
        result.pop();
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn university_key_strips_filler_tokens() {
        assert_eq!(university_key("The Ohio State University"), "ohio state");
        assert_eq!(university_key("Boston College"), "boston");
        assert_eq!(university_key("University of Michigan"), "of michigan");
    }

    #[test]
    fn university_key_strips_punctuation_and_suffix() {
        assert_eq!(
            university_key("The Ohio State University - OH"),
            "ohio state oh"
        );
        assert_eq!(university_key("St. John's University, NY"), "st john's ny");
    }

    #[test]
    fn university_key_is_idempotent() {
        for raw in [
            "The Ohio State University - OH",
            "Pennsylvania State University",
            "  Texas   A&M  ",
            "",
        ] {
            let once = university_key(raw);
            assert_eq!(university_key(&once), once, "not a fixed point: {raw:?}");
        }
    }

    #[test]
    fn organization_key_keeps_letters_and_spaces_only() {
        assert_eq!(organization_key("Sigma Chi"), "sigma chi");
        assert_eq!(organization_key("Sigma Chi (ΣΧ) #1!"), "sigma chi σχ");
        assert_eq!(organization_key("  Alpha   Phi  "), "alpha phi");
    }

    #[test]
    fn organization_key_is_idempotent() {
        for raw in ["Sigma Chi", "Alpha Epsilon Pi (ΑΕΠ)", ""] {
            let once = organization_key(raw);
            assert_eq!(organization_key(&once), once);
        }
    }

    #[test]
    fn handle_key_strips_at_and_lowercases() {
        assert_eq!(handle_key("@PSUSigmaChi"), "psusigmachi");
        assert_eq!(handle_key(" psusigmachi "), "psusigmachi");
    }

    #[test]
    fn clean_university_name_extracts_state_suffix() {
        assert_eq!(
            clean_university_name("The Ohio State University - OH"),
            ("The Ohio State University".to_string(), Some("OH".to_string()))
        );
        // Hyphenated names without a 2-letter suffix are left intact
        assert_eq!(
            clean_university_name("Texas A&M - Corpus Christi"),
            ("Texas A&M - Corpus Christi".to_string(), None)
        );
        assert_eq!(
            clean_university_name("Penn State"),
            ("Penn State".to_string(), None)
        );
    }

    #[test]
    fn slugify_basic() {
        assert_eq!(slugify("The Ohio State University"), "the-ohio-state-university");
        assert_eq!(slugify("Sigma Chi"), "sigma-chi");
        assert_eq!(slugify("  -- weird -- "), "weird");
    }
}
