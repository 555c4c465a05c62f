mod client_identity_test;
