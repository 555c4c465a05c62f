use async_trait::async_trait;
use docx_rs::{DocumentChild, Paragraph, ParagraphChild, RunChild};

use crate::application::ports::{ExtractionError, TextExtractor};
use crate::domain::FileKind;

/// Paragraph text of a DOCX body, one line per paragraph, hyperlink text
/// included. Tables and other structure are skipped.
#[derive(Default)]
pub struct DocxAdapter;

impl DocxAdapter {
    pub fn new() -> Self {
        Self
    }

    pub fn paragraphs(data: &[u8]) -> Result<Vec<String>, ExtractionError> {
        let docx = docx_rs::read_docx(data).map_err(|e| {
            ExtractionError::ExtractionFailed(format!("failed to parse DOCX: {e:?}"))
        })?;

        Ok(docx
            .document
            .children
            .iter()
            .filter_map(|child| match child {
                DocumentChild::Paragraph(paragraph) => Some(paragraph_text(paragraph)),
                _ => None,
            })
            .collect())
    }
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    push_children(&paragraph.children, &mut text);
    text
}

/// Runs are read in order, descending into hyperlinks. Tabs and breaks keep
/// their whitespace.
fn push_children(children: &[ParagraphChild], text: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for run_child in &run.children {
                    match run_child {
                        RunChild::Text(t) => text.push_str(&t.text),
                        RunChild::Tab(_) => text.push('\t'),
                        RunChild::Break(_) => text.push('\n'),
                        _ => {}
                    }
                }
            }
            ParagraphChild::Hyperlink(link) => push_children(&link.children, text),
            _ => {}
        }
    }
}

#[async_trait]
impl TextExtractor for DocxAdapter {
    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    async fn extract(&self, data: &[u8], kind: FileKind) -> Result<String, ExtractionError> {
        if kind != FileKind::Docx {
            return Err(ExtractionError::UnsupportedKind(kind.to_string()));
        }

        let owned = data.to_vec();
        let paragraphs = tokio::task::spawn_blocking(move || Self::paragraphs(&owned))
            .await
            .map_err(|e| ExtractionError::ExtractionFailed(format!("task join error: {e}")))??;

        tracing::info!(paragraphs = paragraphs.len(), "DOCX text extraction complete");

        Ok(paragraphs.join("\n"))
    }
}
