mod rate_limit_window_test;
mod summary_length_test;
mod upload_record_test;
