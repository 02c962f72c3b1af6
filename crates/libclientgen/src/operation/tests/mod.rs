mod query_documents_tests;
