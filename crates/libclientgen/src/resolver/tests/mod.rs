mod schema_field_resolver_tests;
