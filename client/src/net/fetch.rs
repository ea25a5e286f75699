//! HTTP transport over the browser `fetch` API.
//!
//! Client-side (hydrate): real requests via `gloo-net`; multipart bodies are
//! sent as `FormData` so the browser supplies the boundary header.
//! Server-side (SSR): requests fail with a transport error since these
//! endpoints are only called from the browser.

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

use gateway::{GatewayError, HttpRequest, HttpResponse, Transport};

/// Stateless fetch transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, GatewayError> {
        #[cfg(feature = "hydrate")]
        {
            browser::send(request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(GatewayError::Transport(unavailable_message(&request)))
        }
    }
}

#[cfg(any(test, not(feature = "hydrate")))]
fn unavailable_message(request: &HttpRequest) -> String {
    format!("fetch unavailable outside the browser: {} {}", request.method.as_str(), request.url)
}

#[cfg(feature = "hydrate")]
mod browser {
    use gateway::{FormPart, GatewayError, HttpMethod, HttpRequest, HttpResponse, RequestBody};
    use gloo_net::http::{Request, RequestBuilder};
    use wasm_bindgen::JsValue;

    fn js_error(e: &JsValue) -> GatewayError {
        GatewayError::Transport(format!("{e:?}"))
    }

    fn net_error(e: &gloo_net::Error) -> GatewayError {
        GatewayError::Transport(e.to_string())
    }

    fn form_data(parts: &[FormPart]) -> Result<web_sys::FormData, GatewayError> {
        let form = web_sys::FormData::new().map_err(|e| js_error(&e))?;
        for part in parts {
            let bytes = js_sys::Uint8Array::from(part.file.bytes.as_slice());
            let chunks = js_sys::Array::new();
            chunks.push(&bytes);
            let options = web_sys::BlobPropertyBag::new();
            options.set_type(&part.file.content_type);
            let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&chunks, &options)
                .map_err(|e| js_error(&e))?;
            form.append_with_blob_and_filename(&part.field, &blob, &part.file.name)
                .map_err(|e| js_error(&e))?;
        }
        Ok(form)
    }

    pub(super) async fn send(request: HttpRequest) -> Result<HttpResponse, GatewayError> {
        let mut builder: RequestBuilder = match request.method {
            HttpMethod::Get => Request::get(&request.url),
            HttpMethod::Post => Request::post(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        let prepared = match &request.body {
            RequestBody::Empty => builder.build(),
            RequestBody::Json(value) => builder.json(value),
            RequestBody::Multipart(parts) => builder.body(form_data(parts)?),
        }
        .map_err(|e| net_error(&e))?;

        let response = prepared.send().await.map_err(|e| net_error(&e))?;
        let status = response.status();
        let body = response.text().await.map_err(|e| net_error(&e))?;
        Ok(HttpResponse { status, body })
    }
}
