//! Transport-neutral HTTP request/response model.
//!
//! DESIGN
//! ======
//! Request construction lives in `backend` and `auth`; executing a request is
//! delegated to a [`Transport`]. The browser build plugs in a fetch-based
//! transport, the server a `reqwest` one, and tests a recording mock.
//!
//! Futures returned by [`Transport::send`] carry no `Send` bound because the
//! browser fetch futures are single-threaded.

#![allow(async_fn_in_trait)]

use serde_json::Value;

use crate::error::GatewayError;

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// A file selected for upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    #[must_use]
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self { name: name.into(), content_type: content_type.into(), bytes }
    }

    /// Read a local file, guessing its content type from the extension.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Io`] if the file cannot be read.
    pub fn from_path(path: &std::path::Path) -> Result<Self, GatewayError> {
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_owned());
        let content_type = guess_content_type(&name).to_owned();
        Ok(Self { name, content_type, bytes })
    }
}

/// Map a file name's extension to a MIME type for multipart uploads.
#[must_use]
pub fn guess_content_type(name: &str) -> &'static str {
    let ext = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}

/// One named field of a multipart form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormPart {
    pub field: String,
    pub file: UploadFile,
}

#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(Value),
    Multipart(Vec<FormPart>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
}

impl HttpRequest {
    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self { method: HttpMethod::Get, url: url.into(), headers: Vec::new(), body: RequestBody::Empty }
    }

    #[must_use]
    pub fn post(url: impl Into<String>) -> Self {
        Self { method: HttpMethod::Post, url: url.into(), headers: Vec::new(), body: RequestBody::Empty }
    }

    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn json(mut self, value: Value) -> Self {
        self.body = RequestBody::Json(value);
        self
    }

    /// Attach a single-file multipart body under `field`.
    #[must_use]
    pub fn file(mut self, field: impl Into<String>, file: UploadFile) -> Self {
        self.body = RequestBody::Multipart(vec![FormPart { field: field.into(), file }]);
        self
    }

    /// Look up a header value by case-insensitive name.
    #[must_use]
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse the body as JSON regardless of status.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Parse`] if the body is not valid JSON.
    pub fn json(&self) -> Result<Value, GatewayError> {
        serde_json::from_str(&self.body).map_err(|e| GatewayError::Parse(e.to_string()))
    }
}

/// Executes one HTTP request.
pub trait Transport {
    /// Send `request` and return the raw status and body.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Transport`] when no response was received.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, GatewayError>;
}

impl<T: Transport> Transport for &T {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, GatewayError> {
        (**self).send(request).await
    }
}

impl<T: Transport> Transport for std::rc::Rc<T> {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, GatewayError> {
        (**self).send(request).await
    }
}
