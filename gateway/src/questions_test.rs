use serde_json::json;

use super::*;

#[test]
fn reply_with_questions_preserves_order() {
    let reply = GenerationReply::from_value(&json!({
        "questions": [
            {"question": "Q1", "answer": "A1", "type": "short"},
            {"question": "Q2", "answer": "A2", "type": "long"}
        ],
        "warning": null
    }));
    let questions = reply.questions.unwrap();
    assert_eq!(questions.len(), 2);
    assert_eq!(questions[0].question, "Q1");
    assert_eq!(questions[1].kind, "long");
    assert_eq!(reply.warning, None);
    assert_eq!(reply.error, None);
}

#[test]
fn reply_with_error_string() {
    let reply = GenerationReply::from_value(&json!({"error": "quota exceeded"}));
    assert_eq!(reply.error.as_deref(), Some("quota exceeded"));
    assert!(reply.questions.is_none());
}

#[test]
fn reply_with_padded_error_key_is_still_an_error() {
    let reply = GenerationReply::from_value(&json!({" error": "Failed to generate questions: boom"}));
    assert_eq!(reply.error.as_deref(), Some("Failed to generate questions: boom"));
}

#[test]
fn falsy_error_and_warning_are_absent() {
    let reply = GenerationReply::from_value(&json!({"error": "", "warning": false, "questions": []}));
    assert_eq!(reply.error, None);
    assert_eq!(reply.warning, None);
    assert_eq!(reply.questions, Some(Vec::new()));
}

#[test]
fn non_string_error_is_rendered_as_json() {
    let reply = GenerationReply::from_value(&json!({"error": {"code": 7}}));
    assert_eq!(reply.error.as_deref(), Some(r#"{"code":7}"#));
}

#[test]
fn missing_item_fields_default_to_empty() {
    let reply = GenerationReply::from_value(&json!({"questions": [{"question": "Only a question"}]}));
    let q = &reply.questions.unwrap()[0];
    assert_eq!(q.question, "Only a question");
    assert_eq!(q.answer, "");
    assert_eq!(q.kind, "");
}

#[test]
fn non_array_questions_are_ignored() {
    let reply = GenerationReply::from_value(&json!({"questions": "nope"}));
    assert!(reply.questions.is_none());
}

#[test]
fn question_serde_uses_type_key() {
    let q: Question = serde_json::from_value(json!({"question": "Q", "answer": "A", "type": "mcq"})).unwrap();
    assert_eq!(q.kind, "mcq");
    assert_eq!(serde_json::to_value(&q).unwrap()["type"], "mcq");
}

#[test]
fn truthiness_follows_javascript_rules() {
    assert!(!is_truthy(&json!(null)));
    assert!(!is_truthy(&json!(0)));
    assert!(!is_truthy(&json!("")));
    assert!(is_truthy(&json!("x")));
    assert!(is_truthy(&json!([])));
    assert!(is_truthy(&json!({})));
}
