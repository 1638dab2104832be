use greekdex_db::open_memory;
use greekdex_import::{import_batch, parse_batch, ImportOptions, RunCache};
use greekdex_model::wire::{BatchOrganization, BatchRecord};

fn organization(name: &str, org_type: &str, url: Option<&str>) -> BatchOrganization {
    BatchOrganization {
        name: name.to_string(),
        greek_letters: None,
        organization_type: org_type.to_string(),
        greekrank_url: url.map(|s| s.to_string()),
        instagram_handle: None,
    }
}

fn record(university: &str, orgs: Vec<BatchOrganization>) -> BatchRecord {
    BatchRecord {
        university: university.to_string(),
        greek_organizations: orgs,
    }
}

fn chapter_count(conn: &rusqlite::Connection) -> i64 {
    conn.query_row("SELECT COUNT(*) FROM chapters", [], |r| r.get(0))
        .unwrap()
}

#[test]
fn first_run_creates_second_run_skips() {
    let conn = open_memory().unwrap();
    let records = vec![record(
        "The Ohio State University - OH",
        vec![organization("Sigma Chi", "fraternity", None)],
    )];
    let options = ImportOptions::default();

    let mut cache = RunCache::new();
    let first = import_batch(&conn, &records, &options, &mut cache, None).unwrap();
    assert_eq!(first.universities_created, 1);
    assert_eq!(first.organizations_created, 1);
    assert_eq!(first.chapters_created, 1);
    assert_eq!(first.errors, 0);

    // Fresh cache per run; matching must come from the store
    let mut cache = RunCache::new();
    let second = import_batch(&conn, &records, &options, &mut cache, None).unwrap();
    assert_eq!(second.universities_created, 0);
    assert_eq!(second.universities_matched, 1);
    assert_eq!(second.organizations_matched, 1);
    assert_eq!(second.chapters_created, 0);
    assert_eq!(second.chapters_skipped, 1);

    assert_eq!(chapter_count(&conn), 1);
}

#[test]
fn respelled_names_match_existing_entities() {
    let conn = open_memory().unwrap();
    let options = ImportOptions::default();

    let mut cache = RunCache::new();
    import_batch(
        &conn,
        &[record(
            "Ohio State University",
            vec![organization("Sigma Chi", "fraternity", None)],
        )],
        &options,
        &mut cache,
        None,
    )
    .unwrap();

    // Same university under a different spelling, same organization
    let mut cache = RunCache::new();
    let stats = import_batch(
        &conn,
        &[record(
            "The Ohio State University - OH",
            vec![organization("Sigma Chi", "fraternity", None)],
        )],
        &options,
        &mut cache,
        None,
    )
    .unwrap();

    assert_eq!(stats.universities_matched, 1);
    assert_eq!(stats.chapters_skipped, 1);
    let universities: i64 = conn
        .query_row("SELECT COUNT(*) FROM universities", [], |r| r.get(0))
        .unwrap();
    assert_eq!(universities, 1);
}

#[test]
fn matched_sighting_fills_null_university_fields() {
    let conn = open_memory().unwrap();
    let options = ImportOptions::default();

    let mut cache = RunCache::new();
    import_batch(
        &conn,
        &[record("Ohio State University", vec![])],
        &options,
        &mut cache,
        None,
    )
    .unwrap();
    let state: Option<String> = conn
        .query_row("SELECT state FROM universities", [], |r| r.get(0))
        .unwrap();
    assert_eq!(state, None);

    // The re-sighting carries a state suffix the first one lacked
    let mut cache = RunCache::new();
    import_batch(
        &conn,
        &[record("The Ohio State University - OH", vec![])],
        &options,
        &mut cache,
        None,
    )
    .unwrap();
    let state: Option<String> = conn
        .query_row("SELECT state FROM universities", [], |r| r.get(0))
        .unwrap();
    assert_eq!(state.as_deref(), Some("OH"));
}

#[test]
fn same_name_fraternity_and_sorority_are_distinct() {
    let conn = open_memory().unwrap();
    let options = ImportOptions::default();

    let mut cache = RunCache::new();
    let stats = import_batch(
        &conn,
        &[record(
            "Auburn University",
            vec![
                organization("Delta Chi", "fraternity", None),
                organization("Delta Chi", "sorority", None),
            ],
        )],
        &options,
        &mut cache,
        None,
    )
    .unwrap();

    assert_eq!(stats.organizations_created, 2);
    assert_eq!(stats.chapters_created, 2);
}

#[test]
fn verification_url_sets_source_verified() {
    let conn = open_memory().unwrap();
    let options = ImportOptions::default();

    let mut cache = RunCache::new();
    import_batch(
        &conn,
        &[record(
            "Auburn University",
            vec![
                organization("Sigma Chi", "fraternity", Some("https://example.com/sigma-chi")),
                organization("Alpha Phi", "sorority", None),
            ],
        )],
        &options,
        &mut cache,
        None,
    )
    .unwrap();

    let verified: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM chapters WHERE source_verified = 1",
            [],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(verified, 1);
}

#[test]
fn dry_run_counts_without_writing() {
    let conn = open_memory().unwrap();
    let records = vec![record(
        "Auburn University",
        vec![
            organization("Sigma Chi", "fraternity", None),
            // Second sighting of the same pair within the run
            organization("Sigma Chi", "fraternity", None),
        ],
    )];

    let dry = ImportOptions {
        dry_run: true,
        ..Default::default()
    };
    let mut cache = RunCache::new();
    let preview = import_batch(&conn, &records, &dry, &mut cache, None).unwrap();
    assert_eq!(preview.universities_created, 1);
    assert_eq!(preview.chapters_created, 1);
    assert_eq!(preview.chapters_skipped, 1);

    // No rows and no import log were written
    assert_eq!(chapter_count(&conn), 0);
    let logs: i64 = conn
        .query_row("SELECT COUNT(*) FROM import_log", [], |r| r.get(0))
        .unwrap();
    assert_eq!(logs, 0);

    // A real run over the same batch reports the same counts
    let mut cache = RunCache::new();
    let real = import_batch(&conn, &records, &ImportOptions::default(), &mut cache, None)
        .unwrap();
    assert_eq!(real.universities_created, preview.universities_created);
    assert_eq!(real.chapters_created, preview.chapters_created);
    assert_eq!(real.chapters_skipped, preview.chapters_skipped);
    assert_eq!(chapter_count(&conn), 1);
}

#[test]
fn one_bad_record_does_not_abort_the_batch() {
    let conn = open_memory().unwrap();
    let options = ImportOptions::default();

    // "Texas A&M" and "Texas A-M" normalize to different comparison keys
    // but slugify to the same id, so the second create violates the primary
    // key. The run must log it, count it, and continue.
    let records = vec![
        record("Texas A&M", vec![]),
        record("Texas A-M", vec![]),
        record(
            "Auburn University",
            vec![organization("Sigma Chi", "fraternity", None)],
        ),
    ];

    let mut cache = RunCache::new();
    let stats = import_batch(&conn, &records, &options, &mut cache, None).unwrap();
    assert_eq!(stats.errors, 1);
    assert_eq!(stats.chapters_created, 1);
    assert_eq!(chapter_count(&conn), 1);
}

#[test]
fn import_log_records_run_counters() {
    let conn = open_memory().unwrap();
    let options = ImportOptions {
        dry_run: false,
        source_name: "unit-batch".to_string(),
    };

    let mut cache = RunCache::new();
    import_batch(
        &conn,
        &[record(
            "Auburn University",
            vec![organization("Sigma Chi", "fraternity", None)],
        )],
        &options,
        &mut cache,
        None,
    )
    .unwrap();

    let (source, created): (String, i64) = conn
        .query_row(
            "SELECT source_name, chapters_created FROM import_log",
            [],
            |r| Ok((r.get(0)?, r.get(1)?)),
        )
        .unwrap();
    assert_eq!(source, "unit-batch");
    assert_eq!(created, 1);
}

#[test]
fn malformed_batch_json_is_fatal() {
    assert!(parse_batch("{not json").is_err());
    assert!(parse_batch("[]").unwrap().is_empty());

    let records = parse_batch(
        r#"[{"university": "Auburn University",
             "greek_organizations": [{"name": "Sigma Chi", "organization_type": "fraternity"}]}]"#,
    )
    .unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].greek_organizations[0].name, "Sigma Chi");
}
