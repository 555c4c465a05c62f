mod openai_summarizer;

pub use openai_summarizer::{OpenAiSummarizer, build_prompt, max_tokens_for};
