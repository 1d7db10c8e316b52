use wikiclip_core::db::open_db_in_memory;
use wikiclip_core::{
    check_templates, ConfigStorage, SqliteConfigStorage, SETTINGS_DEFAULTS,
};

#[test]
fn first_open_seeds_every_default() {
    let conn = open_db_in_memory().unwrap();
    let config = SqliteConfigStorage::new(&conn).unwrap();

    let all = config.get_all().unwrap();
    for (key, value) in SETTINGS_DEFAULTS {
        assert_eq!(all.get(*key).map(String::as_str), Some(*value), "key {key}");
    }
}

#[test]
fn seeding_does_not_clobber_user_edits() {
    let conn = open_db_in_memory().unwrap();
    {
        let config = SqliteConfigStorage::new(&conn).unwrap();
        config.set("inbox_tiddler_title", "Capture").unwrap();
    }

    let reopened = SqliteConfigStorage::new(&conn).unwrap();
    assert_eq!(
        reopened.get("inbox_tiddler_title").unwrap().as_deref(),
        Some("Capture")
    );
}

#[test]
fn reset_defaults_restores_shipped_values() {
    let conn = open_db_in_memory().unwrap();
    let config = SqliteConfigStorage::new(&conn).unwrap();
    config.set("inbox_tiddler_title", "Capture").unwrap();

    config.reset_defaults().unwrap();
    assert_eq!(
        config.get("inbox_tiddler_title").unwrap().as_deref(),
        Some("Inbox")
    );
}

#[test]
fn get_returns_none_for_unknown_keys() {
    let conn = open_db_in_memory().unwrap();
    let config = SqliteConfigStorage::new(&conn).unwrap();
    assert_eq!(config.get("no_such_key").unwrap(), None);
}

#[test]
fn server_is_configured_only_with_all_three_credentials() {
    let conn = open_db_in_memory().unwrap();
    let config = SqliteConfigStorage::new(&conn).unwrap();
    assert!(!config.is_server_configured().unwrap());

    config.set("server_url", "http://wiki.local:8080").unwrap();
    config.set("server_username", "alex").unwrap();
    assert!(!config.is_server_configured().unwrap());

    config.set("server_password", "hunter2").unwrap();
    assert!(config.is_server_configured().unwrap());
}

#[test]
fn shipped_templates_carry_no_unknown_tokens() {
    let conn = open_db_in_memory().unwrap();
    let config = SqliteConfigStorage::new(&conn).unwrap();
    assert!(check_templates(&config).unwrap().is_empty());
}

#[test]
fn template_check_flags_typoed_tokens() {
    let conn = open_db_in_memory().unwrap();
    let config = SqliteConfigStorage::new(&conn).unwrap();
    config
        .set("block_quickadd_inbox_prefix", "{[F|BRK]}{[F|BR]}")
        .unwrap();

    let warnings = check_templates(&config).unwrap();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "block_quickadd_inbox_prefix");
    assert_eq!(warnings[0].unknown_tokens, vec!["{[F|BRK]}"]);
}
