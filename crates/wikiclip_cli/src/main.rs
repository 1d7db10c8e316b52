//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `wikiclip_core` linkage.
//! - Keep output deterministic apart from resolved date tokens.

use wikiclip_core::{
    CaptureDraft, Destination, InMemoryDocumentStore, SqliteConfigStorage, TabInfo,
};

fn main() {
    println!("wikiclip_core version={}", wikiclip_core::core_version());

    // Exercise one full capture against seeded defaults and an in-memory
    // store, so wiring breaks show up without a browser or server.
    let conn = match wikiclip_core::db::open_db_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("settings db open failed: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = smoke_capture(&conn) {
        eprintln!("smoke capture failed: {err}");
        std::process::exit(1);
    }
}

fn smoke_capture(conn: &rusqlite::Connection) -> Result<(), Box<dyn std::error::Error>> {
    let config = SqliteConfigStorage::new(conn)?;
    let store = InMemoryDocumentStore::new();
    let tab = TabInfo::new(
        Some("Example Domain".to_string()),
        Some("http://example.com".to_string()),
    );

    let mut draft = CaptureDraft::for_destination(&config, &Destination::Inbox)?;
    draft.populate(&store)?;
    draft.append_text(&config, "captured selection", "selection_inbox", Some(&tab))?;
    draft.submit(&store)?;

    println!("captured into `{}`:", draft.title());
    println!("{}", draft.tiddler().text);
    Ok(())
}
