//! Primary-contact selection from officer rosters.
//!
//! Rosters are noisy: duplicate people, placeholder rows, members with no
//! email. The selector applies a fixed priority chain and never mutates or
//! re-sorts its input, so the caller's roster order is what breaks ties.

use greekdex_model::types::ContactCandidate;

/// Roles that qualify an officer as a leadership contact.
pub const LEADERSHIP_ROLES: &[&str] = &[
    "president",
    "vice president",
    "social chair",
    "rush chair",
    "philanthropy chair",
];

/// Whether a role string names one of the fixed leadership roles.
pub fn is_leadership_role(role: &str) -> bool {
    let role = role.trim().to_lowercase();
    LEADERSHIP_ROLES.contains(&role.as_str())
}

fn has_email(c: &ContactCandidate) -> bool {
    c.email.as_deref().is_some_and(|e| !e.trim().is_empty())
}

/// Pick the single best point of contact from a roster.
///
/// Priority chain, first non-empty result wins:
/// 1. any candidate flagged primary;
/// 2. the first candidate in roster order with a leadership role and an
///    email;
/// 3. none — the caller falls back to chapter-level contact fields.
///
/// Ambassadors are deliberately not a fallback tier.
pub fn select_primary(candidates: &[ContactCandidate]) -> Option<&ContactCandidate> {
    if let Some(primary) = candidates.iter().find(|c| c.is_primary) {
        return Some(primary);
    }
    candidates
        .iter()
        .find(|c| is_leadership_role(&c.role) && has_email(c))
}

/// All leadership-role officers holding an email, in roster order.
pub fn leadership_contacts(candidates: &[ContactCandidate]) -> Vec<ContactCandidate> {
    candidates
        .iter()
        .filter(|c| is_leadership_role(&c.role) && has_email(c))
        .cloned()
        .collect()
}

/// All ambassador entries, in roster order.
pub fn ambassadors(candidates: &[ContactCandidate]) -> Vec<ContactCandidate> {
    candidates
        .iter()
        .filter(|c| c.is_ambassador)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn officer(name: &str, role: &str, email: Option<&str>) -> ContactCandidate {
        ContactCandidate {
            name: name.to_string(),
            role: role.to_string(),
            email: email.map(|s| s.to_string()),
            phone: None,
            profile_link: None,
            is_primary: false,
            is_ambassador: false,
        }
    }

    #[test]
    fn primary_flag_beats_leadership_role() {
        let mut flagged = officer("Flagged Member", "Member", None);
        flagged.is_primary = true;
        let roster = vec![
            officer("The President", "President", Some("pres@example.edu")),
            flagged,
        ];
        let picked = select_primary(&roster).unwrap();
        assert_eq!(picked.name, "Flagged Member");
    }

    #[test]
    fn leadership_requires_email() {
        let roster = vec![
            officer("No Email", "President", None),
            officer("Blank Email", "Vice President", Some("  ")),
            officer("Has Email", "Social Chair", Some("social@example.edu")),
        ];
        let picked = select_primary(&roster).unwrap();
        assert_eq!(picked.name, "Has Email");
    }

    #[test]
    fn first_qualifying_leader_in_roster_order_wins() {
        let roster = vec![
            officer("Second Listed", "Rush Chair", Some("rush@example.edu")),
            officer("The President", "President", Some("pres@example.edu")),
        ];
        let picked = select_primary(&roster).unwrap();
        assert_eq!(picked.name, "Second Listed");
    }

    #[test]
    fn non_leadership_roles_never_selected() {
        let roster = vec![
            officer("Treasurer", "Treasurer", Some("money@example.edu")),
            officer("Historian", "Historian", Some("past@example.edu")),
        ];
        assert!(select_primary(&roster).is_none());
    }

    #[test]
    fn ambassadors_are_not_a_fallback() {
        let mut amb = officer("Ambassador", "Ambassador", Some("amb@example.edu"));
        amb.is_ambassador = true;
        let roster = vec![amb];
        assert!(select_primary(&roster).is_none());
        assert_eq!(ambassadors(&roster).len(), 1);
    }

    #[test]
    fn empty_roster_is_none() {
        assert!(select_primary(&[]).is_none());
    }

    #[test]
    fn role_matching_is_case_insensitive() {
        assert!(is_leadership_role("PRESIDENT"));
        assert!(is_leadership_role(" Vice President "));
        assert!(!is_leadership_role("Assistant to the President"));
    }
}
