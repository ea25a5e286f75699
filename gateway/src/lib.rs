//! Outbound integrations shared by `client` and `server`.
//!
//! This crate owns every conversation with the two external collaborators:
//! the question-generation backend and the hosted auth provider. It compiles
//! natively and to WASM; the concrete HTTP stack is injected through the
//! [`transport::Transport`] seam so browser fetch, `reqwest`, and the test
//! mock all drive the same request-building code.

pub mod auth;
pub mod backend;
pub mod config;
pub mod error;
#[cfg(feature = "native")]
pub mod native;
pub mod questions;
pub mod session;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod transport;

pub use auth::{AuthClient, Identity, MemorySessionStore, Session, SessionStore, SignUpOutcome};
pub use backend::{BackendClient, DEFAULT_NUM_QUESTIONS};
pub use config::{AuthConfig, GatewayConfig};
pub use error::GatewayError;
pub use questions::{GenerationReply, Question};
pub use session::{Navigator, SessionProvider, SessionState, SessionSubject, SubscriptionId};
pub use transport::{FormPart, HttpMethod, HttpRequest, HttpResponse, RequestBody, Transport, UploadFile};
