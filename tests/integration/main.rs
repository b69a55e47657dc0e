mod docs_client_tests;
