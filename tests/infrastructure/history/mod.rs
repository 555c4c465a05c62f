mod in_memory_history_test;
