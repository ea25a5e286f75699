use gateway::testing::MockTransport;
use serde_json::json;

use super::*;

#[tokio::test]
async fn reachable_backend_reports_message() {
    let transport = MockTransport::new();
    transport.reply_json(200, &json!({"message": "Exam Prep AI Backend is running"}));
    let backend = BackendClient::new(&transport, "http://127.0.0.1:8000");

    let status = log_backend_status(&backend).await;

    assert_eq!(status, BackendStatus::Reachable("Exam Prep AI Backend is running".to_owned()));
    assert_eq!(transport.last_request().unwrap().url, "http://127.0.0.1:8000/");
}

#[tokio::test]
async fn refused_connection_is_unreachable() {
    let transport = MockTransport::new();
    transport.fail("connection refused");
    let backend = BackendClient::new(&transport, "http://127.0.0.1:8000");

    let status = check_backend(&backend).await;

    assert!(matches!(status, BackendStatus::Unreachable(ref reason) if reason.contains("connection refused")));
}

#[tokio::test]
async fn non_json_root_is_unreachable() {
    let transport = MockTransport::new();
    transport.reply(502, "<html>Bad Gateway</html>");
    let backend = BackendClient::new(&transport, "http://127.0.0.1:8000");

    assert!(matches!(check_backend(&backend).await, BackendStatus::Unreachable(_)));
}
