//! Read a picked `<input type="file">` selection into memory.

#[cfg(test)]
#[path = "files_test.rs"]
mod files_test;

/// Load the first file selected in `input`, or `None` when nothing is picked.
///
/// A file whose browser-reported type is empty falls back to a guess from its
/// extension.
#[cfg(feature = "hydrate")]
pub async fn read_selected_file(input: &web_sys::HtmlInputElement) -> Option<gateway::UploadFile> {
    use wasm_bindgen_futures::JsFuture;

    let file = input.files()?.get(0)?;
    let buffer = match JsFuture::from(file.array_buffer()).await {
        Ok(buffer) => buffer,
        Err(e) => {
            log::error!("reading {} failed: {e:?}", file.name());
            return None;
        }
    };
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    let name = file.name();
    let content_type = content_type_for(&name, &file.type_());
    Some(gateway::UploadFile::new(name, content_type, bytes))
}

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn content_type_for(name: &str, reported: &str) -> String {
    if reported.is_empty() {
        gateway::transport::guess_content_type(name).to_owned()
    } else {
        reported.to_owned()
    }
}
