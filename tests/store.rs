use chrono::{Duration, TimeZone, Utc};
use feedstate::config::{ACCOUNTS_KEY, CURRENT_USER_KEY, LIKED_POSTS_KEY, POSTS_KEY};
use feedstate::{Clock, LikedSet, ManualClock, MemoryBackend, SessionBackend, SessionStore};
use serde_json::json;

fn clock() -> ManualClock {
    ManualClock::new(Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap())
}

fn empty_store() -> SessionStore<MemoryBackend> {
    SessionStore::with_clock(MemoryBackend::new(), clock())
}

#[test]
fn test_reading_absent_collections_returns_seed_without_persisting() {
    let store = empty_store();

    let accounts = store.accounts().unwrap();
    assert_eq!(accounts.len(), 2);
    assert_eq!(accounts[0].username, "john_doe");
    assert_eq!(accounts[1].email, "jane@example.com");

    let posts = store.posts().unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].id, 1);
    assert_eq!(posts[0].likes, 45);
    assert_eq!(posts[0].comments.len(), 1);
    assert_eq!(posts[1].likes, 89);
    assert_eq!(posts[1].image.as_deref(), Some("sunset-beach.jpg"));

    assert!(store.backend().is_empty(), "reads must not seed storage");
}

#[test]
fn test_seed_timestamps_are_relative_to_clock() {
    let clock = clock();
    let store = SessionStore::with_clock(MemoryBackend::new(), clock.clone());
    let posts = store.posts().unwrap();

    assert_eq!(posts[0].created_at, clock.now() - Duration::hours(1));
    assert_eq!(posts[0].comments[0].created_at, clock.now() - Duration::minutes(50));
    assert_eq!(posts[1].created_at, clock.now() - Duration::hours(2));
}

#[test]
fn test_initialize_seeds_once_and_keeps_existing_data() {
    let mut store = empty_store();
    store.initialize().unwrap();

    assert!(store.backend().contains_key(ACCOUNTS_KEY).unwrap());
    assert!(store.backend().contains_key(POSTS_KEY).unwrap());
    assert!(!store.backend().contains_key(CURRENT_USER_KEY).unwrap());

    store.set_posts(&[]).unwrap();
    store.initialize().unwrap();
    assert!(store.posts().unwrap().is_empty(), "initialize must not overwrite stored posts");
    assert_eq!(store.accounts().unwrap().len(), 2);
}

#[test]
fn test_posts_revive_timestamps_from_raw_storage() {
    let mut backend = MemoryBackend::new();
    let raw = json!([{
        "id": 7,
        "userId": 2,
        "username": "jane_smith",
        "content": "stored",
        "likes": 3,
        "comments": [{
            "id": 4,
            "userId": 1,
            "username": "john_doe",
            "content": "reply",
            "timestamp": "2026-10-18T11:30:00Z"
        }],
        "timestamp": "2026-10-18T10:00:00.000Z"
    }]);
    backend.set_item(POSTS_KEY, &raw.to_string()).unwrap();

    let store = SessionStore::with_clock(backend, clock());
    let posts = store.posts().unwrap();

    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].author_username, "jane_smith");
    assert_eq!(posts[0].image, None);
    assert_eq!(posts[0].created_at, Utc.with_ymd_and_hms(2026, 10, 18, 10, 0, 0).unwrap());
    assert_eq!(
        posts[0].comments[0].created_at,
        Utc.with_ymd_and_hms(2026, 10, 18, 11, 30, 0).unwrap()
    );
}

#[test]
fn test_posts_written_then_read_keep_timestamps() {
    let mut store = empty_store();
    let posts = store.posts().unwrap();
    store.set_posts(&posts).unwrap();

    assert_eq!(store.posts().unwrap(), posts);
}

#[test]
fn test_current_user_absent_means_key_removed() {
    let mut store = empty_store();
    let john = store.accounts().unwrap().remove(0);

    store.set_current_user(Some(&john)).unwrap();
    assert!(store.is_logged_in().unwrap());
    assert_eq!(store.current_user().unwrap(), Some(john));

    store.set_current_user(None).unwrap();
    assert!(!store.is_logged_in().unwrap());
    assert_eq!(store.backend().get_item(CURRENT_USER_KEY).unwrap(), None);
}

#[test]
fn test_liked_set_is_stored_as_array() {
    let mut store = empty_store();
    assert!(store.liked_posts().unwrap().is_empty());

    let liked: LikedSet = [2, 1].into_iter().collect();
    store.set_liked_posts(&liked).unwrap();

    assert_eq!(store.backend().get_item(LIKED_POSTS_KEY).unwrap().as_deref(), Some("[1,2]"));
    assert_eq!(store.liked_posts().unwrap(), liked);
}

#[test]
fn test_corrupt_collection_is_an_error() {
    let mut backend = MemoryBackend::new();
    backend.set_item(ACCOUNTS_KEY, "not json").unwrap();
    let store = SessionStore::with_clock(backend, clock());

    assert!(store.accounts().is_err());
}

#[test]
fn test_clear_removes_every_collection() {
    let mut store = empty_store();
    store.initialize().unwrap();
    store.set_liked_posts(&[1].into_iter().collect()).unwrap();

    store.clear().unwrap();
    assert!(store.backend().is_empty());
}
