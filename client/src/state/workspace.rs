//! Workspace state: the three upload/generate actions and their results.
//!
//! DESIGN
//! ======
//! Each action owns a loading slot. A trigger while its own slot is busy is
//! ignored; different slots may overlap, in which case the warning and the
//! question list reflect whichever reply lands last.
//!
//! Actions are generic over the backend transport and the [`Store`] holding
//! the state so the page and the tests drive the same code.

#[cfg(test)]
#[path = "workspace_test.rs"]
mod workspace_test;

use gateway::questions::display_value;
use gateway::{BackendClient, GatewayError, GenerationReply, Question, Transport, UploadFile};
use serde_json::Value;

use super::Store;

pub const BOOK_UPLOADED_STATUS: &str = "Book uploaded and processed successfully!";
pub const BOOK_UPLOAD_FAILED_STATUS: &str = "Failed to upload book.";
pub const GENERIC_FAILURE_WARNING: &str = "An unexpected error occurred. Please check the console.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionSlot {
    Book,
    Syllabus,
    Image,
}

impl ActionSlot {
    /// Button label while the slot's request is in flight.
    pub fn busy_label(self) -> &'static str {
        match self {
            Self::Book => "Processing...",
            Self::Syllabus => "Generating...",
            Self::Image => "Analyzing...",
        }
    }

    pub fn idle_label(self) -> &'static str {
        match self {
            Self::Book => "Upload Book",
            Self::Syllabus => "Generate Questions",
            Self::Image => "Generate from Image",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WorkspaceState {
    pub book_loading: bool,
    pub syllabus_loading: bool,
    pub image_loading: bool,
    pub upload_status: Option<String>,
    pub warning: Option<String>,
    pub questions: Vec<Question>,
}

impl WorkspaceState {
    pub fn is_loading(&self, slot: ActionSlot) -> bool {
        match slot {
            ActionSlot::Book => self.book_loading,
            ActionSlot::Syllabus => self.syllabus_loading,
            ActionSlot::Image => self.image_loading,
        }
    }

    fn slot_mut(&mut self, slot: ActionSlot) -> &mut bool {
        match slot {
            ActionSlot::Book => &mut self.book_loading,
            ActionSlot::Syllabus => &mut self.syllabus_loading,
            ActionSlot::Image => &mut self.image_loading,
        }
    }

    /// Claim `slot`. Returns `false` when it is already busy.
    ///
    /// The book slot resets only the upload status; generation slots reset
    /// the warning and question list.
    pub fn begin(&mut self, slot: ActionSlot) -> bool {
        if self.is_loading(slot) {
            return false;
        }
        *self.slot_mut(slot) = true;
        if slot == ActionSlot::Book {
            self.upload_status = None;
        } else {
            self.warning = None;
            self.questions.clear();
        }
        true
    }

    pub fn finish(&mut self, slot: ActionSlot) {
        *self.slot_mut(slot) = false;
    }

    /// Fold a generation reply into the state.
    ///
    /// An `error` wins over everything else and leaves the list empty.
    pub fn apply_generation(&mut self, reply: GenerationReply, accept_warning: bool) {
        if let Some(error) = reply.error {
            self.warning = Some(format!("Error: {error}"));
            self.questions.clear();
            return;
        }
        if let Some(questions) = reply.questions {
            self.questions = questions;
        }
        if accept_warning {
            if let Some(warning) = reply.warning {
                self.warning = Some(warning);
            }
        }
    }

    pub fn fail_generation(&mut self) {
        self.warning = Some(GENERIC_FAILURE_WARNING.to_owned());
    }
}

/// Status line for a completed book upload.
pub fn book_upload_status(result: &Result<Value, GatewayError>) -> String {
    match result {
        Ok(body) => match book_failure(body) {
            Some(message) => format!("Failed to process book: {message}"),
            None => BOOK_UPLOADED_STATUS.to_owned(),
        },
        Err(_) => BOOK_UPLOAD_FAILED_STATUS.to_owned(),
    }
}

fn book_failure(body: &Value) -> Option<String> {
    let reply = GenerationReply::from_value(body);
    if let Some(error) = reply.error {
        return Some(error);
    }
    if body.get("status").and_then(Value::as_str) == Some("error") {
        return Some(body.get("message").map(display_value).unwrap_or_default());
    }
    None
}

/// Upload a book for indexing. No-op without a file or while a book upload
/// is already running.
pub async fn upload_book<T, S>(backend: &BackendClient<T>, store: &S, file: Option<UploadFile>)
where
    T: Transport,
    S: Store<WorkspaceState>,
{
    let Some(file) = file else {
        return;
    };
    if !claim(store, ActionSlot::Book) {
        return;
    }
    log::info!("uploading book {} ({} bytes)", file.name, file.bytes.len());
    let result = backend.upload_book(file).await;
    if let Err(e) = &result {
        log::error!("book upload failed: {e}");
    }
    let status = book_upload_status(&result);
    store.mutate(|s| {
        s.upload_status = Some(status);
        s.finish(ActionSlot::Book);
    });
}

/// Generate questions from pasted syllabus text. Blank text is ignored.
pub async fn generate_from_syllabus<T, S>(backend: &BackendClient<T>, store: &S, text: &str)
where
    T: Transport,
    S: Store<WorkspaceState>,
{
    if text.trim().is_empty() {
        return;
    }
    if !claim(store, ActionSlot::Syllabus) {
        return;
    }
    let result = backend.generate_questions_default(text).await;
    settle_generation(store, ActionSlot::Syllabus, result, true);
}

/// Generate questions and answers from a question-paper image.
pub async fn generate_from_image<T, S>(backend: &BackendClient<T>, store: &S, file: Option<UploadFile>)
where
    T: Transport,
    S: Store<WorkspaceState>,
{
    let Some(file) = file else {
        return;
    };
    if !claim(store, ActionSlot::Image) {
        return;
    }
    let result = backend.generate_from_image(file).await;
    settle_generation(store, ActionSlot::Image, result, false);
}

fn claim<S: Store<WorkspaceState>>(store: &S, slot: ActionSlot) -> bool {
    let mut claimed = false;
    store.mutate(|s| claimed = s.begin(slot));
    if !claimed {
        log::debug!("{slot:?} action already running; ignoring trigger");
    }
    claimed
}

fn settle_generation<S: Store<WorkspaceState>>(
    store: &S,
    slot: ActionSlot,
    result: Result<Value, GatewayError>,
    accept_warning: bool,
) {
    match result {
        Ok(body) => {
            let reply = GenerationReply::from_value(&body);
            if let Some(error) = &reply.error {
                log::warn!("{slot:?} generation returned error: {error}");
            }
            store.mutate(|s| s.apply_generation(reply, accept_warning));
        }
        Err(e) => {
            log::error!("{slot:?} generation failed: {e}");
            store.mutate(WorkspaceState::fail_generation);
        }
    }
    store.mutate(|s| s.finish(slot));
}
