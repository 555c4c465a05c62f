use axum::Json;
use axum::Router;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use tokio::net::TcpListener;

use docsum::application::ports::{ExtractionError, TextExtractor};
use docsum::domain::FileKind;
use docsum::infrastructure::text_processing::{AnalyzeResponse, AzureDocIntelAdapter};

const SUCCEEDED: &str = r#"{
    "status": "succeeded",
    "analyzeResult": {
        "content": "Invoice 42\nTotal: 10 EUR\nThank you",
        "pages": [
            { "lines": [ { "content": "Invoice 42" }, { "content": "Total: 10 EUR" } ] },
            { "lines": [ { "content": "Thank you" } ] }
        ]
    }
}"#;

async fn spawn_mock_service(poll_status: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let operation = format!("{base}/operations/1");

    let app = Router::new()
        .route(
            "/documentintelligence/documentModels/{model}",
            post(move |headers: HeaderMap| {
                let operation = operation.clone();
                async move {
                    assert_eq!(headers["ocp-apim-subscription-key"], "secret");
                    (
                        StatusCode::ACCEPTED,
                        [("Operation-Location", operation)],
                    )
                }
            }),
        )
        .route(
            "/operations/1",
            get(move || async move {
                if poll_status == "succeeded" {
                    Json(serde_json::from_str::<serde_json::Value>(SUCCEEDED).unwrap())
                } else {
                    Json(serde_json::json!({ "status": poll_status }))
                }
            }),
        );

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    base
}

#[test]
fn given_completed_analysis_when_parsing_then_joins_lines_in_page_order() {
    let response: AnalyzeResponse = serde_json::from_str(SUCCEEDED).unwrap();
    let result = response.analyze_result.unwrap();

    assert_eq!(result.pages.len(), 2);
    assert_eq!(result.line_text(), "Invoice 42\nTotal: 10 EUR\nThank you");
}

#[test]
fn given_file_kinds_when_building_analyze_url_then_picks_model_per_kind() {
    let adapter = AzureDocIntelAdapter::new("https://example.cognitiveservices.azure.com/", "key")
        .unwrap();

    let image = adapter.analyze_url(FileKind::Image).unwrap();
    assert!(image.starts_with(
        "https://example.cognitiveservices.azure.com/documentintelligence/documentModels/prebuilt-read:analyze"
    ));
    assert!(!image.contains("features"));

    let pdf = adapter.analyze_url(FileKind::Pdf).unwrap();
    assert!(pdf.contains("prebuilt-layout:analyze"));
    assert!(pdf.ends_with("&features=keyValuePairs"));

    assert!(matches!(
        adapter.analyze_url(FileKind::Docx),
        Err(ExtractionError::UnsupportedKind(_))
    ));
}

#[tokio::test]
async fn given_succeeding_service_when_extracting_then_returns_line_text() {
    let base = spawn_mock_service("succeeded").await;
    let adapter = AzureDocIntelAdapter::new(&base, "secret").unwrap();

    let text = adapter.extract(b"%PDF-1.4", FileKind::Pdf).await.unwrap();

    assert_eq!(text, "Invoice 42\nTotal: 10 EUR\nThank you");
}

#[tokio::test]
async fn given_failed_analysis_when_extracting_then_returns_extraction_error() {
    let base = spawn_mock_service("failed").await;
    let adapter = AzureDocIntelAdapter::new(&base, "secret").unwrap();

    let result = adapter.extract(b"png", FileKind::Image).await;

    assert!(matches!(result, Err(ExtractionError::ExtractionFailed(_))));
}
