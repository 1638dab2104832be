use greekdex_model::types::*;
use greekdex_db::*;

fn test_university() -> University {
    University {
        id: "ohio-state".to_string(),
        canonical_name: "Ohio State University".to_string(),
        state: Some("OH".to_string()),
        location: None,
        created_at: String::new(),
        updated_at: String::new(),
    }
}

fn test_organization() -> Organization {
    Organization {
        id: "fraternity:sigma-chi".to_string(),
        name: "Sigma Chi".to_string(),
        greek_letters: Some("ΣΧ".to_string()),
        organization_type: OrgType::Fraternity,
        created_at: String::new(),
    }
}

fn test_chapter() -> Chapter {
    Chapter {
        id: "ohio-state:fraternity:sigma-chi".to_string(),
        university_id: "ohio-state".to_string(),
        organization_id: "fraternity:sigma-chi".to_string(),
        chapter_name: "Sigma Chi".to_string(),
        greek_letters: Some("ΣΧ".to_string()),
        instagram_handle: Some("sigmachi_osu".to_string()),
        status: ChapterStatus::Active,
        source_verified: true,
        member_count: None,
        chapter_email: Some("contact@sigmachi-osu.org".to_string()),
        chapter_phone: None,
        created_at: String::new(),
        updated_at: String::new(),
    }
}

fn seeded_conn() -> rusqlite::Connection {
    let conn = open_memory().unwrap();
    insert_university(&conn, &test_university()).unwrap();
    insert_organization(&conn, &test_organization()).unwrap();
    insert_chapter(&conn, &test_chapter()).unwrap();
    conn
}

#[test]
fn insert_and_find_university() {
    let conn = open_memory().unwrap();
    insert_university(&conn, &test_university()).unwrap();

    let found = find_university(&conn, "ohio-state").unwrap().unwrap();
    assert_eq!(found.canonical_name, "Ohio State University");
    assert_eq!(found.state.as_deref(), Some("OH"));

    let missing = find_university(&conn, "nowhere").unwrap();
    assert!(missing.is_none());
}

#[test]
fn fill_university_fields_keeps_existing_values() {
    let conn = open_memory().unwrap();
    insert_university(&conn, &test_university()).unwrap();

    fill_university_fields(&conn, "ohio-state", Some("XX"), Some("Columbus, OH")).unwrap();

    let u = find_university(&conn, "ohio-state").unwrap().unwrap();
    // state was already set and must survive; location was null and gets filled
    assert_eq!(u.state.as_deref(), Some("OH"));
    assert_eq!(u.location.as_deref(), Some("Columbus, OH"));
}

#[test]
fn fill_university_fields_unknown_id_errors() {
    let conn = open_memory().unwrap();
    let err = fill_university_fields(&conn, "nowhere", None, None);
    assert!(matches!(err, Err(OperationError::NotFound { .. })));
}

#[test]
fn insert_and_find_chapter_by_pair() {
    let conn = seeded_conn();

    let found = find_chapter_by_pair(&conn, "ohio-state", "fraternity:sigma-chi")
        .unwrap()
        .unwrap();
    assert_eq!(found.id, "ohio-state:fraternity:sigma-chi");
    assert_eq!(found.status, ChapterStatus::Active);
    assert!(found.source_verified);

    let missing = find_chapter_by_pair(&conn, "ohio-state", "sorority:sigma-chi").unwrap();
    assert!(missing.is_none());
}

#[test]
fn duplicate_chapter_pair_is_rejected() {
    let conn = seeded_conn();

    let mut dup = test_chapter();
    dup.id = "another-id".to_string();
    let result = insert_chapter(&conn, &dup);
    assert!(result.is_err());
}

#[test]
fn set_member_count() {
    let conn = seeded_conn();
    set_chapter_member_count(&conn, "ohio-state:fraternity:sigma-chi", 85).unwrap();

    let c = find_chapter(&conn, "ohio-state:fraternity:sigma-chi")
        .unwrap()
        .unwrap();
    assert_eq!(c.member_count, Some(85));
}

#[test]
fn replace_officers_swaps_roster() {
    let conn = seeded_conn();
    let chapter_id = "ohio-state:fraternity:sigma-chi";

    let first = vec![ContactCandidate {
        name: "Alex Papadopoulos".to_string(),
        role: "President".to_string(),
        email: Some("alex@example.edu".to_string()),
        phone: None,
        profile_link: None,
        is_primary: true,
        is_ambassador: false,
    }];
    assert_eq!(replace_officers(&conn, chapter_id, &first).unwrap(), 1);

    let second = vec![
        ContactCandidate {
            name: "Jordan Lee".to_string(),
            role: "Treasurer".to_string(),
            email: None,
            phone: None,
            profile_link: None,
            is_primary: false,
            is_ambassador: false,
        },
        ContactCandidate {
            name: "Sam Ortiz".to_string(),
            role: "Recruitment Chair".to_string(),
            email: Some("sam@example.edu".to_string()),
            phone: None,
            profile_link: None,
            is_primary: false,
            is_ambassador: false,
        },
    ];
    assert_eq!(replace_officers(&conn, chapter_id, &second).unwrap(), 2);

    let officers = officers_for_chapter(&conn, chapter_id).unwrap();
    assert_eq!(officers.len(), 2);
    // roster order preserved
    assert_eq!(officers[0].name, "Jordan Lee");
    assert_eq!(officers[1].name, "Sam Ortiz");
}

#[test]
fn import_log_roundtrip() {
    let conn = open_memory().unwrap();
    let counters = ImportLogCounters {
        universities_created: 2,
        universities_matched: 1,
        organizations_created: 5,
        organizations_matched: 3,
        chapters_created: 8,
        chapters_skipped: 1,
        errors: 0,
    };
    let id = insert_import_log(&conn, "greekrank-batch-1", "2026-08-01T00:00:00Z", &counters)
        .unwrap();
    assert!(id > 0);

    let created: i64 = conn
        .query_row(
            "SELECT chapters_created FROM import_log WHERE id = ?1",
            [id],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(created, 8);
}
