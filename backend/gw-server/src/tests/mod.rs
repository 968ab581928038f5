mod query_body;
