use muse_core::{Track, TrackId};
use muse_storage::{FavoritesManager, SqliteStore};

fn create_test_track(id: &str, title: &str) -> Track {
    Track::new(title, "Test Artist")
        .with_id(TrackId::new(id))
        .with_source_url(format!("/audio/{id}.mp3"))
}

#[tokio::test]
async fn test_toggle_adds_then_removes() {
    let store = SqliteStore::in_memory().await.unwrap();
    let mut favorites = FavoritesManager::load(store).await.unwrap();
    let track = create_test_track("1", "Blinding Lights");

    let added = favorites.toggle_favorite(track.clone()).await.unwrap();
    assert!(added);
    assert!(favorites.is_favorite(&track.id));

    let added = favorites.toggle_favorite(track.clone()).await.unwrap();
    assert!(!added);
    assert!(!favorites.is_favorite(&track.id));
    assert!(favorites.is_empty());
}

#[tokio::test]
async fn test_membership_is_by_identifier_only() {
    let store = SqliteStore::in_memory().await.unwrap();
    let mut favorites = FavoritesManager::load(store).await.unwrap();

    favorites
        .toggle_favorite(create_test_track("1", "Original Title"))
        .await
        .unwrap();

    // Same id, different metadata: still the same favorite
    let renamed = create_test_track("1", "Remastered Title");
    assert!(favorites.is_favorite(&renamed.id));

    let added = favorites.toggle_favorite(renamed).await.unwrap();
    assert!(!added);
    assert!(favorites.is_empty());
}

#[tokio::test]
async fn test_add_soft_fails_on_duplicate() {
    let store = SqliteStore::in_memory().await.unwrap();
    let mut favorites = FavoritesManager::load(store).await.unwrap();
    let track = create_test_track("1", "Blinding Lights");

    assert!(favorites.add(track.clone()).await.unwrap());
    assert!(!favorites.add(track.clone()).await.unwrap());

    assert_eq!(favorites.len(), 1);
    assert!(favorites.is_favorite(&track.id));
}

#[tokio::test]
async fn test_favorites_survive_reload() {
    let store = SqliteStore::in_memory().await.unwrap();

    let mut favorites = FavoritesManager::load(store.clone()).await.unwrap();
    favorites
        .toggle_favorite(create_test_track("1", "Levitating"))
        .await
        .unwrap();
    favorites
        .toggle_favorite(create_test_track("2", "Stay"))
        .await
        .unwrap();

    let reloaded = FavoritesManager::load(store).await.unwrap();
    assert_eq!(reloaded.len(), 2);
    assert!(reloaded.is_favorite(&TrackId::new("1")));
    assert!(reloaded.is_favorite(&TrackId::new("2")));
}

#[tokio::test]
async fn test_insertion_order_is_preserved() {
    let store = SqliteStore::in_memory().await.unwrap();
    let mut favorites = FavoritesManager::load(store.clone()).await.unwrap();

    for id in ["a", "b", "c"] {
        favorites
            .toggle_favorite(create_test_track(id, id))
            .await
            .unwrap();
    }

    let reloaded = FavoritesManager::load(store).await.unwrap();
    let ids: Vec<&str> = reloaded.favorites().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}
