mod openai_summarizer_test;
