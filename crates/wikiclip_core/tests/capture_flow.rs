use wikiclip_core::db::open_db_in_memory;
use wikiclip_core::{
    CaptureDraft, CaptureError, ConfigStorage, Destination, DocumentStore, InMemoryDocumentStore,
    SqliteConfigStorage, StoreError, StoreResult, TabInfo, Tiddler,
};

fn tab() -> TabInfo {
    TabInfo::new(
        Some("Example".to_string()),
        Some("http://example.com".to_string()),
    )
}

#[test]
fn capture_creates_missing_inbox_and_appends() {
    let conn = open_db_in_memory().unwrap();
    let config = SqliteConfigStorage::new(&conn).unwrap();
    let store = InMemoryDocumentStore::new();

    let mut draft = CaptureDraft::for_destination(&config, &Destination::Inbox).unwrap();
    draft.populate(&store).unwrap();
    draft
        .append_text(&config, "first note", "quickadd_inbox", None)
        .unwrap();
    draft.submit(&store).unwrap();

    let stored = store.get_document("Inbox").unwrap();
    assert_eq!(stored.text, "\n\nfirst note\n\n");
}

#[test]
fn capture_appends_to_existing_body_without_rewriting() {
    let conn = open_db_in_memory().unwrap();
    let config = SqliteConfigStorage::new(&conn).unwrap();
    let store = InMemoryDocumentStore::new();

    let mut existing = Tiddler::blank("Inbox");
    existing.append_text("old content");
    store.put_document(&existing).unwrap();

    let mut draft = CaptureDraft::for_destination(&config, &Destination::Inbox).unwrap();
    draft.populate(&store).unwrap();
    draft
        .append_text(&config, "new note", "quickadd_inbox", None)
        .unwrap();
    draft.submit(&store).unwrap();

    let stored = store.get_document("Inbox").unwrap();
    assert_eq!(stored.text, "old content\n\nnew note\n\n");
}

#[test]
fn journal_gets_tags_only_when_created() {
    let conn = open_db_in_memory().unwrap();
    let config = SqliteConfigStorage::new(&conn).unwrap();
    let store = InMemoryDocumentStore::new();

    let mut draft = CaptureDraft::for_destination(&config, &Destination::Journal).unwrap();
    draft.populate(&store).unwrap();
    draft.submit(&store).unwrap();

    let stored = store.get_document("Journal").unwrap();
    assert_eq!(stored.tags, "journal");
}

#[test]
fn journal_title_templates_resolve_per_capture() {
    let conn = open_db_in_memory().unwrap();
    let config = SqliteConfigStorage::new(&conn).unwrap();
    config
        .set("journal_tiddler_title", "{[D|YYYY]}-{[D|0MM]}-{[D|0DD]}")
        .unwrap();

    let draft = CaptureDraft::for_destination(&config, &Destination::Journal).unwrap();
    let title = draft.title();
    assert_eq!(title.len(), 10);
    assert!(!title.contains("{["), "unresolved title: {title}");
}

#[test]
fn custom_destination_uses_explicit_title() {
    let conn = open_db_in_memory().unwrap();
    let config = SqliteConfigStorage::new(&conn).unwrap();
    let store = InMemoryDocumentStore::new();

    let destination = Destination::Custom("Reading List".to_string());
    let mut draft = CaptureDraft::for_destination(&config, &destination).unwrap();
    draft.populate(&store).unwrap();
    draft
        .append_text(&config, "an article", "quickadd_inbox", Some(&tab()))
        .unwrap();
    draft.submit(&store).unwrap();

    assert!(store.get_document("Reading List").is_ok());
}

#[test]
fn bookmark_capture_appends_link_block() {
    let conn = open_db_in_memory().unwrap();
    let config = SqliteConfigStorage::new(&conn).unwrap();
    let store = InMemoryDocumentStore::new();

    let mut draft = CaptureDraft::for_destination(&config, &Destination::Inbox).unwrap();
    draft.populate(&store).unwrap();
    draft.append_bookmark(&config, Some(&tab())).unwrap();
    draft.submit(&store).unwrap();

    let stored = store.get_document("Inbox").unwrap();
    assert_eq!(stored.text, "\n\n[[Example|http://example.com]]\n");
}

#[test]
fn template_edits_take_effect_on_next_capture() {
    let conn = open_db_in_memory().unwrap();
    let config = SqliteConfigStorage::new(&conn).unwrap();
    let store = InMemoryDocumentStore::new();

    let mut draft = CaptureDraft::for_destination(&config, &Destination::Inbox).unwrap();
    draft.populate(&store).unwrap();
    draft
        .append_text(&config, "one", "quickadd_inbox", None)
        .unwrap();

    config.set("block_quickadd_inbox_prefix", "* ").unwrap();
    config.set("block_quickadd_inbox_suffix", "").unwrap();
    draft
        .append_text(&config, "two", "quickadd_inbox", None)
        .unwrap();

    assert_eq!(draft.tiddler().text, "\n\none\n\n* two");
}

#[test]
fn store_failures_other_than_not_found_propagate() {
    struct BrokenStore;

    impl DocumentStore for BrokenStore {
        fn get_document(&self, _title: &str) -> StoreResult<Tiddler> {
            Err(StoreError::Remote {
                status: Some(401),
                message: "The Username or Password is not valid.".to_string(),
            })
        }

        fn put_document(&self, _doc: &Tiddler) -> StoreResult<()> {
            unreachable!("populate must fail first");
        }
    }

    let conn = open_db_in_memory().unwrap();
    let config = SqliteConfigStorage::new(&conn).unwrap();

    let mut draft = CaptureDraft::for_destination(&config, &Destination::Inbox).unwrap();
    let err = draft.populate(&BrokenStore).unwrap_err();
    match err {
        CaptureError::Store(StoreError::Remote { status, .. }) => assert_eq!(status, Some(401)),
        other => panic!("unexpected error: {other}"),
    }
}
