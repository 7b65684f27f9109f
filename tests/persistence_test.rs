//! Tests for the stored scoreboard and settings records.

use tictac::{
    FileStore, GameMode, KeyValueStore, MemoryStore, Persistence, SCORES_KEY, SETTINGS_KEY,
    Scoreboard, Settings, Theme,
};

#[test]
fn test_empty_store_gives_defaults() {
    let persistence = Persistence::new(MemoryStore::new());
    assert_eq!(persistence.load_scores(), Scoreboard::default());
    assert_eq!(persistence.load_settings(), Settings::default());
}

#[test]
fn test_scores_wire_format() {
    let store = MemoryStore::new();
    let persistence = Persistence::new(store.clone());
    let scores = Scoreboard { x: 3, o: 1, draws: 2 };
    persistence.save_scores(&scores).expect("Saved");

    let raw = store.get(SCORES_KEY).expect("Readable").expect("Present");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("JSON");
    assert_eq!(value, serde_json::json!({ "x": 3, "o": 1, "draws": 2 }));
    assert_eq!(persistence.load_scores(), scores);
}

#[test]
fn test_corrupt_scores_fall_back_to_zero() {
    let store = MemoryStore::new();
    store.set(SCORES_KEY, "{not json").expect("Writable");
    assert_eq!(Persistence::new(store).load_scores(), Scoreboard::default());
}

#[test]
fn test_null_scores_fall_back_to_zero() {
    let store = MemoryStore::new();
    store.set(SCORES_KEY, "null").expect("Writable");
    assert_eq!(Persistence::new(store).load_scores(), Scoreboard::default());
}

#[test]
fn test_partial_scores_fill_missing_counters() {
    let store = MemoryStore::new();
    store.set(SCORES_KEY, r#"{"o":4}"#).expect("Writable");
    let scores = Persistence::new(store).load_scores();
    assert_eq!(scores, Scoreboard { x: 0, o: 4, draws: 0 });
}

#[test]
fn test_huge_stored_counters_total_saturates() {
    let store = MemoryStore::new();
    store
        .set(SCORES_KEY, r#"{"x":4294967295,"o":1,"draws":0}"#)
        .expect("Writable");

    let scores = Persistence::new(store).load_scores();
    assert_eq!(scores.x, u32::MAX);
    assert_eq!(scores.games(), u32::MAX);
}

#[test]
fn test_corrupt_settings_fall_back_to_defaults() {
    let store = MemoryStore::new();
    store.set(SETTINGS_KEY, "]]").expect("Writable");
    assert_eq!(Persistence::new(store).load_settings(), Settings::default());
}

#[test]
fn test_stored_settings_merged_over_defaults() {
    let store = MemoryStore::new();
    store
        .set(SETTINGS_KEY, r#"{"mode":"PVC_EASY","theme":42}"#)
        .expect("Writable");

    let settings = Persistence::new(store).load_settings();
    assert_eq!(settings.mode, GameMode::PvcEasy);
    assert_eq!(settings.theme, Theme::Light);
    assert!(settings.use_emojis);
}

#[test]
fn test_file_store_survives_reopen() {
    let dir = tempfile::tempdir().expect("Tempdir");
    let settings = Settings {
        theme: Theme::Dark,
        use_emojis: false,
        mode: GameMode::PvcEasy,
    };
    let scores = Scoreboard { x: 1, o: 2, draws: 3 };

    {
        let persistence = Persistence::new(FileStore::new(dir.path()));
        persistence.save_settings(&settings).expect("Saved");
        persistence.save_scores(&scores).expect("Saved");
    }

    let persistence = Persistence::new(FileStore::new(dir.path()));
    assert_eq!(persistence.load_settings(), settings);
    assert_eq!(persistence.load_scores(), scores);
    assert!(dir.path().join(format!("{}.json", SCORES_KEY)).exists());
    assert!(dir.path().join(format!("{}.json", SETTINGS_KEY)).exists());
}

#[test]
fn test_unreadable_store_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("Tempdir");
    // A directory where the record file should be makes reads fail.
    std::fs::create_dir(dir.path().join(format!("{}.json", SCORES_KEY))).expect("Created");

    let persistence = Persistence::new(FileStore::new(dir.path()));
    assert_eq!(persistence.load_scores(), Scoreboard::default());
    assert!(persistence.save_scores(&Scoreboard::default()).is_err());
}
