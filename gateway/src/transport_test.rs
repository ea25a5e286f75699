use super::*;

#[test]
fn guess_content_type_matches_known_extensions() {
    assert_eq!(guess_content_type("chapter.PDF"), "application/pdf");
    assert_eq!(guess_content_type("paper.jpeg"), "image/jpeg");
    assert_eq!(guess_content_type("paper.jpg"), "image/jpeg");
    assert_eq!(guess_content_type("scan.png"), "image/png");
    assert_eq!(guess_content_type("syllabus.txt"), "text/plain");
}

#[test]
fn guess_content_type_falls_back_to_octet_stream() {
    assert_eq!(guess_content_type("notes"), "application/octet-stream");
    assert_eq!(guess_content_type("archive.tar.zst"), "application/octet-stream");
}

#[test]
fn file_builder_sets_single_multipart_field() {
    let file = UploadFile::new("book.pdf", "application/pdf", vec![1, 2, 3]);
    let request = HttpRequest::post("http://x/upload/book").file("file", file.clone());
    assert_eq!(request.body, RequestBody::Multipart(vec![FormPart { field: "file".to_owned(), file }]));
}

#[test]
fn header_value_is_case_insensitive() {
    let request = HttpRequest::get("http://x").header("Authorization", "Bearer t");
    assert_eq!(request.header_value("authorization"), Some("Bearer t"));
    assert_eq!(request.header_value("apikey"), None);
}

#[test]
fn response_json_ignores_status() {
    let resp = HttpResponse::new(500, r#"{"x":1}"#);
    assert!(!resp.is_success());
    assert_eq!(resp.json().unwrap(), serde_json::json!({"x": 1}));
}

#[test]
fn response_json_rejects_non_json_body() {
    let resp = HttpResponse::new(200, "<html>oops</html>");
    assert!(matches!(resp.json(), Err(GatewayError::Parse(_))));
}

#[test]
fn from_path_reads_bytes_and_guesses_type() {
    let dir = std::env::temp_dir().join(format!("gateway-upload-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("scan.png");
    std::fs::write(&path, [9u8, 8, 7]).unwrap();

    let file = UploadFile::from_path(&path).unwrap();
    assert_eq!(file.name, "scan.png");
    assert_eq!(file.content_type, "image/png");
    assert_eq!(file.bytes, vec![9, 8, 7]);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn from_path_missing_file_is_io_error() {
    let err = UploadFile::from_path(std::path::Path::new("/definitely/not/here.pdf")).unwrap_err();
    assert!(matches!(err, GatewayError::Io(_)));
}
