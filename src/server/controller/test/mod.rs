//! HTTP contract tests running the real router against an in-memory database.

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory};

use crate::server::{router::router, state::AppState};


/// Builds a test server over a fresh camp schema.
///
/// The returned context owns the database and must outlive the server.
async fn setup() -> (TestServer, TestContext) {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap().clone();

    let server = TestServer::new(router().with_state(AppState::new(db))).unwrap();

    (server, test)
}
