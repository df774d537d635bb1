// End-to-end integration tests for the Resource API
//
// These tests use a shared testcontainers PostgreSQL instance with a database
// pool for test isolation. Each test receives its own isolated database from
// the pool, allowing tests to run in parallel without conflicts.
//
// Architecture:
// - One shared PostgreSQL container for the entire test suite
// - Database pool creates/manages isolated databases (test_db_<uuid>)
// - Each test gets a unique database via test-context lifecycle hooks
// - Databases are cleaned and recycled after test completion
//
// The app under test is assembled with the same router builder as `main`,
// with the webhook publisher swapped for an in-memory recording double.
