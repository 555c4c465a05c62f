use docsum::application::ports::UploadObserver;
use docsum::domain::{CacheEntry, ClientId, SummaryLength, UploadRecord};
use docsum::infrastructure::history::InMemoryUploadHistory;

fn record(client: &ClientId, filename: &str) -> UploadRecord {
    let entry = CacheEntry {
        filename: filename.to_string(),
        extracted_text: "text".to_string(),
        summary: "summary".to_string(),
        s3_url: format!("s3://bucket/uploads/{filename}"),
    };
    UploadRecord::new(client, &entry, 1024, SummaryLength::Medium)
}

#[tokio::test]
async fn given_recorded_uploads_when_listing_then_returns_newest_first() {
    let history = InMemoryUploadHistory::default();
    let client = ClientId::new("10.0.0.1");

    history.on_upload(record(&client, "a.pdf")).await.unwrap();
    history.on_upload(record(&client, "b.pdf")).await.unwrap();

    let records = history.list(&client).await;
    let names: Vec<_> = records.iter().map(|r| r.filename.as_str()).collect();
    assert_eq!(names, vec!["b.pdf", "a.pdf"]);
}

#[tokio::test]
async fn given_two_clients_when_listing_then_each_sees_only_its_own() {
    let history = InMemoryUploadHistory::default();
    let alice = ClientId::new("10.0.0.1");
    let bob = ClientId::new("10.0.0.2");

    history.on_upload(record(&alice, "a.pdf")).await.unwrap();

    assert_eq!(history.list(&alice).await.len(), 1);
    assert!(history.list(&bob).await.is_empty());
}

#[tokio::test]
async fn given_bound_reached_when_recording_then_oldest_is_dropped() {
    let history = InMemoryUploadHistory::new(2);
    let client = ClientId::new("10.0.0.1");

    for name in ["a.pdf", "b.pdf", "c.pdf"] {
        history.on_upload(record(&client, name)).await.unwrap();
    }

    let records = history.list(&client).await;
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].filename, "b.pdf");
}
