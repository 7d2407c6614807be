use chrono::NaiveDate;
use playforge::management::RecordStore;

async fn store() -> RecordStore {
    RecordStore::connect("sqlite::memory:")
        .await
        .expect("in-memory store")
}

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

#[tokio::test]
async fn test_insert_and_list() {
    let store = store().await;

    let record = store
        .insert("Weekly Mix", "https://open.spotify.com/playlist/p1", date(), None)
        .await
        .unwrap()
        .expect("inserted record");

    assert_eq!(record.name, "Weekly Mix");
    assert_eq!(record.link, "https://open.spotify.com/playlist/p1");
    assert_eq!(record.created_date, date());
    assert_eq!(record.rating, None);

    let all = store.list_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, record.id);
}

#[tokio::test]
async fn test_duplicate_link_is_a_silent_noop() {
    let store = store().await;

    let first = store
        .insert("Mix A", "https://open.spotify.com/playlist/p1", date(), None)
        .await
        .unwrap();
    assert!(first.is_some());

    // Same link again: no error, no record, no extra row
    let second = store
        .insert("Mix B", "https://open.spotify.com/playlist/p1", date(), None)
        .await
        .unwrap();
    assert!(second.is_none());

    let all = store.list_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "Mix A");
}

#[tokio::test]
async fn test_delete_by_id() {
    let store = store().await;

    let record = store
        .insert("Mix", "https://open.spotify.com/playlist/p1", date(), None)
        .await
        .unwrap()
        .unwrap();

    assert!(store.delete_by_id(record.id).await.unwrap());
    assert!(store.list_all().await.unwrap().is_empty());

    // Deleting again reports false
    assert!(!store.delete_by_id(record.id).await.unwrap());
}

#[tokio::test]
async fn test_set_rating_bounds() {
    let store = store().await;

    let record = store
        .insert("Mix", "https://open.spotify.com/playlist/p1", date(), None)
        .await
        .unwrap()
        .unwrap();

    // Out-of-range ratings leave the row untouched
    assert!(!store.set_rating(record.id, 11).await.unwrap());
    assert!(!store.set_rating(record.id, -1).await.unwrap());
    assert_eq!(store.list_all().await.unwrap()[0].rating, None);

    // Boundary values are accepted
    assert!(store.set_rating(record.id, 0).await.unwrap());
    assert!(store.set_rating(record.id, 10).await.unwrap());
    assert_eq!(store.list_all().await.unwrap()[0].rating, Some(10));

    // Unknown id reports false
    assert!(!store.set_rating(record.id + 1, 5).await.unwrap());
}
