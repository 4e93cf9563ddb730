
use loopdeck_core::SettingsStore;
use loopdeck_storage::settings;
use test_helpers::*;

#[tokio::test]
async fn test_volume_unset_by_default() {
    let db = TestDb::new().await;
    assert_eq!(db.store.volume().await.unwrap(), None);
}

#[tokio::test]
async fn test_volume_survives_reopen() {
    let mut db = TestDb::new().await;

    db.store.set_volume(0.35).await.unwrap();
    db.reopen().await;

    let volume = db.store.volume().await.unwrap().unwrap();
    assert!((volume - 0.35).abs() < 1e-6);
}

#[tokio::test]
async fn test_volume_is_clamped() {
    let db = TestDb::new().await;

    db.store.set_volume(3.0).await.unwrap();
    assert_eq!(db.store.volume().await.unwrap(), Some(1.0));

    db.store.set_volume(-1.0).await.unwrap();
    assert_eq!(db.store.volume().await.unwrap(), Some(0.0));
}

#[tokio::test]
async fn test_non_numeric_volume_is_ignored() {
    let db = TestDb::new().await;
    let pool = db.store.pool();

    settings::set_setting(pool, settings::SETTING_VOLUME, &serde_json::json!("loud"))
        .await
        .unwrap();

    assert_eq!(db.store.volume().await.unwrap(), None);
}

#[tokio::test]
async fn test_set_get_setting() {
    let db = TestDb::new().await;
    let pool = db.store.pool();

    let value = serde_json::json!({"eq": "flat"});
    settings::set_setting(pool, "audio.preset", &value).await.unwrap();
    assert_eq!(
        settings::get_setting(pool, "audio.preset").await.unwrap(),
        Some(value)
    );

    assert_eq!(settings::get_setting(pool, "audio.missing").await.unwrap(), None);
}
