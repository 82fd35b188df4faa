use vitae_core::db::{open_db, open_db_in_memory};
use vitae_core::{
    Document, DocumentRepository, Mutation, Section, SqliteDocumentRepository, DEFAULT_COLOR,
    DEFAULT_TEMPLATE, DOCUMENT_KEY,
};

fn mutated_document() -> Document {
    let mut document = Document::first_run();
    document.apply(Mutation::ScalarEdit {
        key: "fullName".to_string(),
        value: "Grace Hopper".to_string(),
    });
    document.apply(Mutation::ScalarEdit {
        key: "skills".to_string(),
        value: "COBOL, compilers".to_string(),
    });
    document.apply(Mutation::EntryFieldEdit {
        section: Section::Work,
        index: 0,
        field: "company".to_string(),
        value: "Navy".to_string(),
    });
    document.apply(Mutation::ScalarEdit {
        key: "clearance".to_string(),
        value: "yes".to_string(),
    });
    document
}

#[test]
fn load_returns_none_before_first_save() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteDocumentRepository::new(&conn);
    assert!(repo.load().unwrap().is_none());
}

#[test]
fn save_then_load_round_trips_deeply() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteDocumentRepository::new(&conn);

    let document = mutated_document();
    repo.save(&document).unwrap();

    let loaded = repo.load().unwrap().unwrap();
    assert_eq!(loaded, document);
    // Tolerant-write keys are part of the round-trip surface.
    assert_eq!(loaded.scalar("clearance"), Some("yes"));
}

#[test]
fn save_overwrites_the_single_document_slot() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteDocumentRepository::new(&conn);

    repo.save(&Document::first_run()).unwrap();
    let mut updated = Document::first_run();
    updated.full_name = "Second Save".to_string();
    repo.save(&updated).unwrap();

    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM documents;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
    assert_eq!(repo.load().unwrap().unwrap().full_name, "Second Save");
}

#[test]
fn corrupt_payload_degrades_to_absent() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO documents (key, body) VALUES (?1, ?2);",
        rusqlite::params![DOCUMENT_KEY, "{not json"],
    )
    .unwrap();

    let repo = SqliteDocumentRepository::new(&conn);
    assert!(repo.load().unwrap().is_none());
}

#[test]
fn foreign_shape_degrades_to_absent() {
    let conn = open_db_in_memory().unwrap();
    // Valid JSON, wrong shape: work must be an array of entries.
    conn.execute(
        "INSERT INTO documents (key, body) VALUES (?1, ?2);",
        rusqlite::params![DOCUMENT_KEY, r#"{"work": "none"}"#],
    )
    .unwrap();

    let repo = SqliteDocumentRepository::new(&conn);
    assert!(repo.load().unwrap().is_none());
}

#[test]
fn missing_fields_normalize_to_defaults_at_load() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO documents (key, body) VALUES (?1, ?2);",
        rusqlite::params![DOCUMENT_KEY, r#"{"fullName": "Partial Payload"}"#],
    )
    .unwrap();

    let repo = SqliteDocumentRepository::new(&conn);
    let loaded = repo.load().unwrap().unwrap();
    assert_eq!(loaded.full_name, "Partial Payload");
    assert_eq!(loaded.template, DEFAULT_TEMPLATE);
    assert_eq!(loaded.color, DEFAULT_COLOR);
    assert_eq!(loaded.email, "");
    assert!(loaded.work.is_empty());
}

#[test]
fn stored_field_names_match_the_compat_surface() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteDocumentRepository::new(&conn);
    repo.save(&Document::first_run()).unwrap();

    let body: String = conn
        .query_row(
            "SELECT body FROM documents WHERE key = ?1;",
            [DOCUMENT_KEY],
            |row| row.get(0),
        )
        .unwrap();
    for key in [
        "\"fullName\"",
        "\"jobTitle\"",
        "\"startDate\"",
        "\"endDate\"",
        "\"gradDate\"",
        "\"work\"",
        "\"education\"",
    ] {
        assert!(body.contains(key), "serialized body misses {key}: {body}");
    }
}

#[test]
fn round_trip_survives_reopening_a_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("vitae.sqlite3");

    let document = mutated_document();
    {
        let conn = open_db(&db_path).unwrap();
        SqliteDocumentRepository::new(&conn)
            .save(&document)
            .unwrap();
    }

    let conn = open_db(&db_path).unwrap();
    let loaded = SqliteDocumentRepository::new(&conn).load().unwrap().unwrap();
    assert_eq!(loaded, document);
}
