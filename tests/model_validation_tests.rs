use board_backend::models::{Board, CreateBoardRequest, UpdateBoardRequest};
use chrono::Utc;
use validator::Validate;

// --- Helpers ---

fn valid_request() -> CreateBoardRequest {
    CreateBoardRequest {
        title: "First post".to_string(),
        content: "Hello board".to_string(),
        author: "alice".to_string(),
    }
}

// --- Creation Payload Constraints ---

#[test]
fn test_valid_request_passes_validation() {
    assert!(valid_request().validate().is_ok());
}

#[test]
fn test_empty_required_fields_fail_validation() {
    // Each required field, when emptied, must produce an error keyed by
    // that field's name.
    for field in ["title", "content", "author"] {
        let mut req = valid_request();
        match field {
            "title" => req.title = String::new(),
            "content" => req.content = String::new(),
            _ => req.author = String::new(),
        }
        let errors = req
            .validate()
            .expect_err(&format!("empty {} should fail", field));
        assert!(
            errors.field_errors().contains_key(field),
            "expected a validation error for {}",
            field
        );
    }
}

#[test]
fn test_title_length_bounds() {
    // 100 characters is the inclusive maximum.
    let mut req = valid_request();
    req.title = "t".repeat(100);
    assert!(req.validate().is_ok(), "100-char title must be accepted");

    req.title = "t".repeat(101);
    let errors = req.validate().expect_err("101-char title should fail");
    assert!(errors.field_errors().contains_key("title"));
}

#[test]
fn test_author_length_bounds() {
    // 50 characters is the inclusive maximum.
    let mut req = valid_request();
    req.author = "a".repeat(50);
    assert!(req.validate().is_ok(), "50-char author must be accepted");

    req.author = "a".repeat(51);
    let errors = req.validate().expect_err("51-char author should fail");
    assert!(errors.field_errors().contains_key("author"));
}

#[test]
fn test_content_is_unbounded() {
    let mut req = valid_request();
    req.content = "c".repeat(100_000);
    assert!(req.validate().is_ok());
}

// --- Update Payload Constraints ---

#[test]
fn test_update_request_optionality() {
    // Absent fields are skipped entirely: no validation error and no JSON key.
    let partial = UpdateBoardRequest {
        title: Some("New Title Only".to_string()),
        content: None,
        author: None,
    };
    assert!(partial.validate().is_ok());

    let json_output = serde_json::to_string(&partial).unwrap();
    assert!(json_output.contains(r#""title":"New Title Only""#));
    assert!(!json_output.contains("content"));
    assert!(!json_output.contains("author"));
}

#[test]
fn test_update_request_present_fields_are_constrained() {
    // A present-but-empty title is not a "leave unchanged", it is invalid.
    let req = UpdateBoardRequest {
        title: Some(String::new()),
        content: None,
        author: None,
    };
    let errors = req.validate().expect_err("empty present title should fail");
    assert!(errors.field_errors().contains_key("title"));

    let req = UpdateBoardRequest {
        title: None,
        content: None,
        author: Some("a".repeat(51)),
    };
    assert!(req.validate().is_err(), "oversized present author should fail");
}

// --- Entity Construction ---

#[test]
fn test_new_board_timestamps() {
    let before = Utc::now();
    let board = Board::new(
        "Title".to_string(),
        "Content".to_string(),
        "Author".to_string(),
    );
    let after = Utc::now();

    // created_at is stamped at construction time; updated_at stays unset
    // until an edit.
    assert!(board.created_at >= before && board.created_at <= after);
    assert!(board.updated_at.is_none());
    assert_eq!(board.id, 0, "id is a placeholder until insert");
}
