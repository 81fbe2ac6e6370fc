// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use jobdeck_app::ViewMode;
use jobdeck_store::Store;

#[test]
fn fresh_store_defaults_to_split() -> Result<()> {
    let store = Store::open_memory()?;
    store.bootstrap()?;
    assert_eq!(store.get_view_mode()?, ViewMode::Split);
    assert_eq!(store.raw_view_mode()?, None);
    Ok(())
}

#[test]
fn view_mode_round_trips_for_every_token() -> Result<()> {
    let temp = tempfile::tempdir()?;
    let path = temp.path().join("jobdeck.db");

    for mode in ViewMode::ALL {
        {
            let store = Store::open(&path)?;
            store.bootstrap()?;
            store.put_view_mode(mode)?;
        }
        // A fresh open simulates the next launch.
        let store = Store::open(&path)?;
        store.bootstrap()?;
        assert_eq!(store.get_view_mode()?, mode);
        assert_eq!(store.raw_view_mode()?, Some(mode.as_str().to_owned()));
    }
    Ok(())
}

#[test]
fn unrecognized_stored_token_falls_back_to_split() -> Result<()> {
    let store = Store::open_memory()?;
    store.bootstrap()?;
    store.put_raw_view_mode("kiosk")?;
    assert_eq!(store.get_view_mode()?, ViewMode::Split);
    // The bad token stays until the next legitimate write.
    assert_eq!(store.raw_view_mode()?, Some("kiosk".to_owned()));

    store.put_view_mode(ViewMode::Analysis)?;
    assert_eq!(store.raw_view_mode()?, Some("analysis".to_owned()));
    Ok(())
}

#[test]
fn bootstrap_is_idempotent() -> Result<()> {
    let temp = tempfile::tempdir()?;
    let path = temp.path().join("jobdeck.db");

    let store = Store::open(&path)?;
    store.bootstrap()?;
    store.put_view_mode(ViewMode::Reports)?;
    store.bootstrap()?;
    assert_eq!(store.get_view_mode()?, ViewMode::Reports);
    Ok(())
}

#[test]
fn newer_schema_versions_are_refused_with_remediation() -> Result<()> {
    let store = Store::open_memory()?;
    store
        .raw_connection()
        .pragma_update(None, "user_version", 99)?;

    let error = store.bootstrap().expect_err("future schema should fail");
    let message = error.to_string();
    assert!(message.contains("schema version 99"));
    assert!(message.contains("JOBDECK_DB_PATH"));
    Ok(())
}

#[test]
fn open_rejects_uri_style_paths() {
    let error = Store::open(std::path::Path::new("https://evil.example/jobdeck.db"))
        .err()
        .expect("URI path should fail");
    assert!(error.to_string().contains("looks like a URI"));
}

#[test]
fn writes_update_the_settings_timestamp() -> Result<()> {
    let store = Store::open_memory()?;
    store.bootstrap()?;
    store.put_view_mode(ViewMode::Analysis)?;

    let updated_at: String = store.raw_connection().query_row(
        "SELECT updated_at FROM settings WHERE key = 'ui.view_mode'",
        [],
        |row| row.get(0),
    )?;
    assert!(updated_at.contains('T'), "expected RFC3339, got {updated_at}");
    Ok(())
}
