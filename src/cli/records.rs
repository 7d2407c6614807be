use std::sync::Arc;

use tabled::Table;

use crate::{
    config::Config, error, info, management::RecordStore, success, types::RecordTableRow, warning,
};

pub async fn list_records(config: Arc<Config>) {
    let store = connect(&config).await;

    let records = match store.list_all().await {
        Ok(records) => records,
        Err(e) => error!("Failed to list playlists: {}", e),
    };

    if records.is_empty() {
        info!("No playlists recorded yet.");
        return;
    }

    let rows: Vec<RecordTableRow> = records
        .iter()
        .map(|record| RecordTableRow {
            id: record.id.to_string(),
            name: record.name.clone(),
            link: record.link.clone(),
            created: record.created_date.to_string(),
            rating: record
                .rating
                .map(|rating| rating.to_string())
                .unwrap_or_else(|| "-".to_string()),
        })
        .collect();

    let table = Table::new(rows);
    println!("{}", table);
}

pub async fn delete_record(config: Arc<Config>, id: i64) {
    let store = connect(&config).await;

    match store.delete_by_id(id).await {
        Ok(true) => success!("Removed playlist record {}", id),
        Ok(false) => warning!("No playlist record with id {}", id),
        Err(e) => error!("Failed to delete playlist record: {}", e),
    }
}

pub async fn rate_record(config: Arc<Config>, id: i64, rating: i64) {
    let store = connect(&config).await;

    match store.set_rating(id, rating).await {
        Ok(true) => success!("Rated playlist record {} with {}/10", id, rating),
        Ok(false) => warning!("Invalid rating or unknown record (rating must be 0-10)"),
        Err(e) => error!("Failed to rate playlist record: {}", e),
    }
}

async fn connect(config: &Config) -> RecordStore {
    match RecordStore::connect(&config.database_url).await {
        Ok(store) => store,
        Err(e) => error!("Failed to open record store: {}", e),
    }
}
