//! Client for the question-generation backend.
//!
//! Each operation is exactly one request/response round trip. Bodies are
//! parsed as JSON and returned unmodified whatever the HTTP status; callers
//! look for an `error` field themselves. No retries, no timeouts.

#[cfg(test)]
#[path = "backend_test.rs"]
mod backend_test;

use serde_json::{Value, json};

use crate::error::GatewayError;
use crate::transport::{HttpRequest, Transport, UploadFile};

/// Question count requested when the caller does not choose one.
pub const DEFAULT_NUM_QUESTIONS: u32 = 5;

/// Multipart field name every upload endpoint reads.
pub const FILE_FIELD: &str = "file";

pub const UPLOAD_BOOK_PATH: &str = "/upload/book";
pub const UPLOAD_SYLLABUS_PATH: &str = "/upload/syllabus";
pub const UPLOAD_IMAGE_PATH: &str = "/upload/image";
pub const GENERATE_QUESTIONS_PATH: &str = "/generate-questions";
pub const GENERATE_FROM_IMAGE_PATH: &str = "/generate-from-image";

pub struct BackendClient<T> {
    transport: T,
    base_url: String,
}

impl<T: Transport> BackendClient<T> {
    pub fn new(transport: T, base_url: &str) -> Self {
        Self { transport, base_url: base_url.trim_end_matches('/').to_owned() }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Upload a book PDF for indexing.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the request fails, or a parse error if
    /// the body is not JSON.
    pub async fn upload_book(&self, file: UploadFile) -> Result<Value, GatewayError> {
        self.post_file(UPLOAD_BOOK_PATH, file).await
    }

    /// Upload a syllabus document.
    ///
    /// # Errors
    ///
    /// See [`BackendClient::upload_book`].
    pub async fn upload_syllabus(&self, file: UploadFile) -> Result<Value, GatewayError> {
        self.post_file(UPLOAD_SYLLABUS_PATH, file).await
    }

    /// Store a question-paper image without generating anything.
    ///
    /// # Errors
    ///
    /// See [`BackendClient::upload_book`].
    pub async fn upload_image(&self, file: UploadFile) -> Result<Value, GatewayError> {
        self.post_file(UPLOAD_IMAGE_PATH, file).await
    }

    /// Ask for `num_questions` questions covering `syllabus_text`.
    ///
    /// # Errors
    ///
    /// See [`BackendClient::upload_book`].
    pub async fn generate_questions(&self, syllabus_text: &str, num_questions: u32) -> Result<Value, GatewayError> {
        let body = json!({ "syllabus_text": syllabus_text, "num_questions": num_questions });
        let request = HttpRequest::post(self.endpoint(GENERATE_QUESTIONS_PATH)).json(body);
        self.round_trip(request).await
    }

    /// [`BackendClient::generate_questions`] with [`DEFAULT_NUM_QUESTIONS`].
    ///
    /// # Errors
    ///
    /// See [`BackendClient::upload_book`].
    pub async fn generate_questions_default(&self, syllabus_text: &str) -> Result<Value, GatewayError> {
        self.generate_questions(syllabus_text, DEFAULT_NUM_QUESTIONS).await
    }

    /// Extract questions from a question-paper image and answer them.
    ///
    /// # Errors
    ///
    /// See [`BackendClient::upload_book`].
    pub async fn generate_from_image(&self, file: UploadFile) -> Result<Value, GatewayError> {
        self.post_file(GENERATE_FROM_IMAGE_PATH, file).await
    }

    /// Fetch the backend's liveness message from `GET /`.
    ///
    /// # Errors
    ///
    /// See [`BackendClient::upload_book`].
    pub async fn status(&self) -> Result<Value, GatewayError> {
        self.round_trip(HttpRequest::get(self.endpoint("/"))).await
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn post_file(&self, path: &str, file: UploadFile) -> Result<Value, GatewayError> {
        let request = HttpRequest::post(self.endpoint(path)).file(FILE_FIELD, file);
        self.round_trip(request).await
    }

    async fn round_trip(&self, request: HttpRequest) -> Result<Value, GatewayError> {
        log::debug!("backend {} {}", request.method.as_str(), request.url);
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            log::debug!("backend replied with status {}", response.status);
        }
        response.json()
    }
}
