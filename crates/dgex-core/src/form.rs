//! Generic form submission flow: validate → one service call → tri-state result.
//!
//! A form is described by a [`FormFlow`] and its live state is a
//! [`FormState`]. [`submit`] drives one submission against a [`Backend`],
//! touching the state only through short [`StateCell`] accesses so no borrow
//! is held while the request is outstanding.
//!
//! ```ignore
//! let form = shared(FormState::<CommunityFlow>::new());
//! form.with_mut(|f| f.values.email = "ana@example.com".into());
//! submit(&form, &backend).await;
//! match form.snapshot().status().clone() {
//!     FormStatus::Success(summary) => { /* show summary */ }
//!     FormStatus::Error(message) => { /* show banner */ }
//!     FormStatus::Idle => {}
//! }
//! ```

use crate::backend::Backend;
use crate::error::FormError;
use crate::state::StateCell;

/// Outcome shown by a form. `S` is the form's success summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormStatus<S> {
    Idle,
    Success(S),
    Error(String),
}

impl<S> Default for FormStatus<S> {
    fn default() -> Self {
        FormStatus::Idle
    }
}

impl<S> FormStatus<S> {
    pub fn is_error(&self) -> bool {
        matches!(self, FormStatus::Error(_))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FormStatus::Success(_))
    }

    /// Error banner text, if any.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            FormStatus::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Behaviour of one concrete form.
#[async_trait::async_trait(?Send)]
pub trait FormFlow: Clone + Default + std::fmt::Debug + 'static {
    /// Field values edited by the view.
    type Values: Clone + Default + PartialEq + std::fmt::Debug + 'static;
    /// What the success view needs to know.
    type Summary: Clone + PartialEq + std::fmt::Debug + 'static;

    /// Short name used in logs.
    const NAME: &'static str;

    /// Local checks. Returns `FormError::Validation` with a field-specific message.
    fn validate(&self, values: &Self::Values) -> Result<(), FormError>;

    /// Issues exactly one request to the service.
    async fn send(
        &self,
        backend: &dyn Backend,
        values: &Self::Values,
    ) -> Result<Self::Summary, FormError>;

    /// Applies the post-success field reset.
    fn after_success(&self, values: &mut Self::Values, summary: &Self::Summary);

    /// Message for a failed submission.
    fn failure_message(&self, values: &Self::Values, err: &FormError) -> String;
}

/// Live state of one form instance.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState<F: FormFlow> {
    pub values: F::Values,
    in_flight: bool,
    status: FormStatus<F::Summary>,
    flow: F,
}

/// Work handed out by [`FormState::begin`] for one submission.
pub struct Submission<F: FormFlow> {
    pub flow: F,
    pub values: F::Values,
}

impl<F: FormFlow> Default for FormState<F> {
    fn default() -> Self {
        Self {
            values: F::Values::default(),
            in_flight: false,
            status: FormStatus::Idle,
            flow: F::default(),
        }
    }
}

impl<F: FormFlow> FormState<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// True exactly while a request is outstanding.
    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn status(&self) -> &FormStatus<F::Summary> {
        &self.status
    }

    /// Returns the banner to idle (e.g. "send another" or a mode switch).
    pub fn clear_status(&mut self) {
        self.status = FormStatus::Idle;
    }

    /// Starts a submission.
    ///
    /// Returns `None` without touching the service when a submission is
    /// already in flight (no state change) or validation fails (status
    /// becomes an error).
    pub fn begin(&mut self) -> Option<Submission<F>> {
        if self.in_flight {
            tracing::debug!(form = F::NAME, "submit ignored: request in flight");
            return None;
        }

        if let Err(err) = self.flow.validate(&self.values) {
            let message = self.flow.failure_message(&self.values, &err);
            tracing::debug!(form = F::NAME, %message, "validation failed");
            self.status = FormStatus::Error(message);
            return None;
        }

        self.in_flight = true;
        self.status = FormStatus::Idle;
        Some(Submission {
            flow: self.flow.clone(),
            values: self.values.clone(),
        })
    }

    /// Marks the state in flight for a request that is not a regular submission
    /// (third-party sign-in). Returns `false` if one is already outstanding.
    pub fn begin_external(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        self.status = FormStatus::Idle;
        true
    }

    /// Records the outcome of the outstanding request.
    pub fn finish(&mut self, outcome: Result<F::Summary, FormError>) {
        self.in_flight = false;
        match outcome {
            Ok(summary) => {
                self.flow.after_success(&mut self.values, &summary);
                self.status = FormStatus::Success(summary);
            }
            Err(err) => {
                let message = self.flow.failure_message(&self.values, &err);
                tracing::error!(form = F::NAME, error = %err, "submission failed");
                self.status = FormStatus::Error(message);
            }
        }
    }

    /// Records a failure for a request started with [`begin_external`](Self::begin_external).
    pub fn fail(&mut self, message: impl Into<String>) {
        self.in_flight = false;
        self.status = FormStatus::Error(message.into());
    }
}

/// Runs one submission of the form held in `form`.
///
/// Returns `true` if a request was issued.
pub async fn submit<F, C>(form: &C, backend: &dyn Backend) -> bool
where
    F: FormFlow,
    C: StateCell<FormState<F>>,
{
    let Some(submission) = form.with_mut(|state| state.begin()) else {
        return false;
    };

    let outcome = submission
        .flow
        .send(backend, &submission.values)
        .await;

    form.with_mut(|state| state.finish(outcome));
    true
}

/// Validation error carrying `message` when `value` is blank.
pub fn require_text(value: &str, message: &str) -> Result<(), FormError> {
    if value.trim().is_empty() {
        Err(FormError::Validation(message.to_string()))
    } else {
        Ok(())
    }
}
