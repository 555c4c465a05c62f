use docsum::domain::{CacheEntry, ClientId, SummaryLength, UploadRecord};

fn entry(filename: &str) -> CacheEntry {
    CacheEntry {
        filename: filename.to_string(),
        extracted_text: "text".to_string(),
        summary: "summary".to_string(),
        s3_url: "s3://bucket/uploads/x".to_string(),
    }
}

#[test]
fn given_long_filename_when_recording_then_title_is_first_fifteen_chars() {
    let record = UploadRecord::new(
        &ClientId::new("10.0.0.1"),
        &entry("annual-report-final.pdf"),
        2048,
        SummaryLength::Long,
    );
    assert_eq!(record.summary_title, "annual-report-f...");
    assert_eq!(record.document_size_kb, 2.0);
    assert_eq!(record.client, "10.0.0.1");
}

#[test]
fn given_short_filename_when_recording_then_title_keeps_whole_name() {
    let record = UploadRecord::new(&ClientId::unknown(), &entry("a.pdf"), 1000, SummaryLength::Short);
    assert_eq!(record.summary_title, "a.pdf...");
    assert_eq!(record.document_size_kb, 0.98);
}
