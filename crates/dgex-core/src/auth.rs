//! Email/password authentication form and third-party sign-in.
//!
//! Sign-in success changes nothing locally: the session change it causes is
//! what moves the user to the dashboard (see [`session`](crate::session)).
//! Sign-up success clears the credentials and shows a confirmation banner.

use crate::backend::{Backend, Credentials, Provider, SignUpOutcome};
use crate::error::FormError;
use crate::form::{require_text, FormFlow, FormState};
use crate::state::StateCell;

pub const CONFIRMATION_MESSAGE: &str =
    "¡Revisa tu correo! Te hemos enviado un enlace de confirmación.";
pub const SIGN_IN_FAILURE_MESSAGE: &str = "Error al iniciar sesión.";
pub const SIGN_UP_FAILURE_MESSAGE: &str = "Error al registrarse.";
pub const PROVIDER_FAILURE_MESSAGE: &str = "Error al iniciar sesión con Google.";

/// Which email action the form performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        }
    }

    fn failure_default(self) -> &'static str {
        match self {
            AuthMode::SignIn => SIGN_IN_FAILURE_MESSAGE,
            AuthMode::SignUp => SIGN_UP_FAILURE_MESSAGE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthValues {
    pub mode: AuthMode,
    pub email: String,
    pub password: String,
}

/// Successful email action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcome {
    /// A session was issued; the session listener takes over
    SignedIn,
    /// Account created; the user has to confirm the address
    SignedUp,
}

impl AuthOutcome {
    /// Banner text for the success state, if one is shown.
    pub fn banner(self) -> Option<&'static str> {
        match self {
            AuthOutcome::SignedIn => None,
            AuthOutcome::SignedUp => Some(CONFIRMATION_MESSAGE),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuthFlow;

#[async_trait::async_trait(?Send)]
impl FormFlow for AuthFlow {
    type Values = AuthValues;
    type Summary = AuthOutcome;
    const NAME: &'static str = "auth";

    fn validate(&self, values: &AuthValues) -> Result<(), FormError> {
        require_text(&values.email, "Ingresa tu correo electrónico.")?;
        // Passwords are sent as typed, so only a truly empty one is missing
        if values.password.is_empty() {
            return Err(FormError::Validation("Ingresa tu contraseña.".to_string()));
        }
        Ok(())
    }

    async fn send(&self, backend: &dyn Backend, values: &AuthValues) -> Result<AuthOutcome, FormError> {
        let credentials = Credentials::new(values.email.trim(), values.password.as_str());

        match values.mode {
            AuthMode::SignIn => {
                backend.sign_in(&credentials).await?;
                Ok(AuthOutcome::SignedIn)
            }
            AuthMode::SignUp => {
                let outcome = backend.sign_up(&credentials).await?;
                let confirm = matches!(outcome, SignUpOutcome::ConfirmationSent);
                tracing::info!(confirm, "sign-up accepted");
                Ok(AuthOutcome::SignedUp)
            }
        }
    }

    fn after_success(&self, values: &mut AuthValues, summary: &AuthOutcome) {
        if *summary == AuthOutcome::SignedUp {
            values.email.clear();
            values.password.clear();
        }
    }

    fn failure_message(&self, values: &AuthValues, err: &FormError) -> String {
        match err {
            FormError::Validation(message) | FormError::Service(message) => message.clone(),
            FormError::DuplicateEntry | FormError::Unknown => {
                values.mode.failure_default().to_string()
            }
        }
    }
}

/// Switches between sign-in and sign-up. Clears the banner, keeps the fields.
pub fn toggle_mode(state: &mut FormState<AuthFlow>) {
    state.values.mode = state.values.mode.toggled();
    state.clear_status();
}

/// Starts a third-party sign-in.
///
/// Shares the in-flight flag with the email form. On success the flag stays
/// set because the browser is leaving the page; on failure it is cleared and
/// the banner shows the service message. Returns `true` if a request was issued.
pub async fn sign_in_with_provider<C>(form: &C, backend: &dyn Backend, provider: Provider) -> bool
where
    C: StateCell<FormState<AuthFlow>>,
{
    if !form.with_mut(|state| state.begin_external()) {
        tracing::debug!(provider = provider.as_str(), "provider sign-in ignored: request in flight");
        return false;
    }

    if let Err(err) = backend.sign_in_with_provider(provider).await {
        tracing::error!(provider = provider.as_str(), error = %err, "provider sign-in failed");
        let message = match FormError::from(err) {
            FormError::Service(message) => message,
            _ => PROVIDER_FAILURE_MESSAGE.to_string(),
        };
        form.with_mut(|state| state.fail(message));
    }
    true
}
