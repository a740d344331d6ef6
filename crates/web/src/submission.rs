//! Submission handler: validates the form, sends one create request, and
//! reports the outcome through the notification channel.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use thiserror::Error;

use cottonwaste_core::FieldError;
use cottonwaste_infra::config::DEFAULT_TABLE;
use cottonwaste_infra::{Notification, Notifier, RecordStore, StoreError};
use cottonwaste_inventory::{Field, FormErrors, FormState, FormValues};

pub const FORM_TITLE: &str = "Submit New Inventory";
pub const SUBMIT_LABEL: &str = "Submit Inventory";
pub const SUBMITTING_LABEL: &str = "Submitting...";

pub const SUCCESS_TITLE: &str = "Success!";
pub const SUCCESS_DESCRIPTION: &str = "Your inventory has been submitted for review.";
pub const FAILURE_TITLE: &str = "Error";
pub const FAILURE_DESCRIPTION: &str = "Failed to submit inventory. Please try again.";

/// A create request that did not go through.
///
/// Caught at the handler boundary: the user sees a generic notification and
/// the entered values stay in place for a retry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("create request failed: {0}")]
    Store(#[from] StoreError),
}

/// What a call to [`InventorySubmissionForm::submit`] did.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The record was stored; the form is back to its defaults.
    Submitted,
    /// The store call failed; values are untouched.
    Failed(SubmissionError),
    /// At least one field failed validation; nothing was sent.
    Invalid(FormErrors),
    /// A submission from this form is already in flight; nothing was sent.
    Busy,
}

/// Holds the submitting flag for as long as it lives.
///
/// Acquisition fails if the flag is already set; dropping the guard clears
/// it on every exit path.
struct SubmittingGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> SubmittingGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// One inventory submission form instance.
///
/// Owns its [`FormState`] exclusively. Methods take `&self` so the UI can
/// keep editing (and re-clicking) while a submission is awaited; the
/// submitting flag turns a second submit into a no-op.
pub struct InventorySubmissionForm<S, N> {
    state: Mutex<FormState>,
    submitting: AtomicBool,
    store: S,
    notifier: N,
    table: String,
}

impl<S, N> InventorySubmissionForm<S, N>
where
    S: RecordStore,
    N: Notifier,
{
    pub fn new(store: S, notifier: N) -> Self {
        Self {
            state: Mutex::new(FormState::new()),
            submitting: AtomicBool::new(false),
            store,
            notifier,
            table: DEFAULT_TABLE.to_string(),
        }
    }

    /// Target a different table than `inventory_items`.
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    fn lock_state(&self) -> MutexGuard<'_, FormState> {
        // Form state is plain data; recover it from a poisoned lock.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Snapshot of the current form state.
    pub fn state(&self) -> FormState {
        self.lock_state().clone()
    }

    pub fn values(&self) -> FormValues {
        self.lock_state().values().clone()
    }

    pub fn value(&self, field: Field) -> String {
        self.lock_state().value(field).to_string()
    }

    pub fn error(&self, field: Field) -> Option<FieldError> {
        self.lock_state().error(field).cloned()
    }

    /// Update one field and re-validate it. Returns the field's error, if any.
    pub fn set_field(&self, field: Field, value: impl Into<String>) -> Option<FieldError> {
        self.lock_state().set_field(field, value).cloned()
    }

    pub fn reset(&self) {
        self.lock_state().reset();
    }

    pub fn is_valid(&self) -> bool {
        self.lock_state().is_valid()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::Acquire)
    }

    /// Label for the submit control, which is disabled while submitting.
    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    /// Validate and send the current values as one record.
    ///
    /// Issues at most one create request. No retry, no queue: a failed
    /// attempt is reported and left for the user to resubmit.
    pub async fn submit(&self) -> SubmitOutcome {
        let Some(_guard) = SubmittingGuard::acquire(&self.submitting) else {
            tracing::debug!("submit ignored: a submission is already in flight");
            return SubmitOutcome::Busy;
        };

        let validated = { self.lock_state().validate_all() };
        let item = match validated {
            Ok(item) => item,
            Err(errors) => {
                tracing::debug!(errors = %errors, "submit blocked by validation");
                return SubmitOutcome::Invalid(errors);
            }
        };

        let record = item.to_record();
        match self
            .store
            .insert(&self.table, std::slice::from_ref(&record))
            .await
        {
            Ok(()) => {
                tracing::info!(
                    table = %self.table,
                    waste_type = %record.waste_type,
                    quantity = record.quantity,
                    "inventory submitted"
                );
                self.notifier
                    .notify(Notification::success(SUCCESS_TITLE, SUCCESS_DESCRIPTION));
                self.lock_state().reset();
                SubmitOutcome::Submitted
            }
            Err(e) => {
                tracing::error!(table = %self.table, error = %e, "error submitting inventory");
                self.notifier
                    .notify(Notification::destructive(FAILURE_TITLE, FAILURE_DESCRIPTION));
                SubmitOutcome::Failed(SubmissionError::from(e))
            }
        }
    }
}
