//! Login form state and credential submission.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use gateway::{AuthClient, GatewayError, SessionStore, SignUpOutcome, Transport};

pub const AUTH_NOT_CONFIGURED_MESSAGE: &str =
    "⚠️ Auth is not configured. Set EXAM_PREP_AUTH_URL and EXAM_PREP_AUTH_ANON_KEY and rebuild.";
pub const CONFIRMATION_SENT_MESSAGE: &str = "Check your email for the confirmation link!";
pub const GENERIC_AUTH_FAILURE: &str = "An error occurred";
pub const HOME_LOCATION: &str = "/";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::SignIn => Self::SignUp,
            Self::SignUp => Self::SignIn,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::SignIn => "Login",
            Self::SignUp => "Create Account",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            Self::SignIn => "Login",
            Self::SignUp => "Sign Up",
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::SignIn => "Need an account? Sign Up",
            Self::SignUp => "Already have an account? Login",
        }
    }
}

/// What the page should do once a submission settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    Message(String),
    Redirect(&'static str),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginState {
    pub mode: AuthMode,
    pub loading: bool,
    pub message: Option<String>,
}

impl LoginState {
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    pub fn begin_submit(&mut self) {
        self.loading = true;
        self.message = None;
    }

    /// Settle a submission. A redirect leaves the message empty since the
    /// page is about to unload.
    pub fn finish_submit(&mut self, outcome: &LoginOutcome) {
        self.loading = false;
        if let LoginOutcome::Message(message) = outcome {
            self.message = Some(message.clone());
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.loading { "Processing..." } else { self.mode.submit_label() }
    }
}

/// Sign in or sign up with `email`/`password`.
///
/// `redirect_to` is where the confirmation email sends the user back to.
pub async fn submit_credentials<T, S>(
    auth: &AuthClient<T, S>,
    mode: AuthMode,
    email: &str,
    password: &str,
    redirect_to: &str,
) -> LoginOutcome
where
    T: Transport,
    S: SessionStore,
{
    if !auth.is_configured() {
        return LoginOutcome::Message(AUTH_NOT_CONFIGURED_MESSAGE.to_owned());
    }
    match mode {
        AuthMode::SignUp => match auth.sign_up(email, password, Some(redirect_to)).await {
            Ok(SignUpOutcome::ConfirmationSent | SignUpOutcome::SignedIn(_)) => {
                LoginOutcome::Message(CONFIRMATION_SENT_MESSAGE.to_owned())
            }
            Err(e) => LoginOutcome::Message(failure_message(&e)),
        },
        AuthMode::SignIn => match auth.sign_in_with_password(email, password).await {
            Ok(_) => LoginOutcome::Redirect(HOME_LOCATION),
            Err(e) => LoginOutcome::Message(failure_message(&e)),
        },
    }
}

/// User-facing text for a failed auth call.
pub fn failure_message(error: &GatewayError) -> String {
    if let GatewayError::Transport(_) | GatewayError::Parse(_) = error {
        log::error!("auth request failed: {error}");
    }
    let text = error.to_string();
    if text.trim().is_empty() { GENERIC_AUTH_FAILURE.to_owned() } else { text }
}

/// Whether `message` should be styled as an error.
pub fn is_error_message(message: &str) -> bool {
    message.contains("error") || message.contains("Invalid")
}
