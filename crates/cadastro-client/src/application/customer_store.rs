//! `CustomerStore`: the shared state every view reads and dispatches into.
//!
//! The store is the single owner of the authoritative customer list and the
//! transient session state around it.  Views never call the REST backend
//! themselves; they hand the store an intent (submit, delete, update) and
//! read the resulting state back through the `ui_bridge` commands.
//!
//! # State ownership (for beginners)
//!
//! The store is built once at startup, wrapped in an `Arc`, and handed to
//! every view.  Each field sits behind a `tokio::sync::Mutex` because the
//! command handlers are `async`: a `std::sync::Mutex` guard held across an
//! `.await` would block the Tokio worker thread, while the async mutex
//! suspends the task instead.
//!
//! # Reload over merge
//!
//! After every successful mutation the store re-fetches the *whole* list and
//! replaces its copy.  There is no incremental patching, so a record created
//! by somebody else shows up on the next reload rather than immediately —
//! acceptable for a single-user registration page and much harder to get
//! wrong than a merge.
//!
//! # In-flight flags
//!
//! `submitting` and `updating` exist so the views can disable their submit
//! buttons while a request is outstanding.  They are advisory: nothing
//! cancels a superseded request, and a second trigger that lands before the
//! view re-reads the flag will race.  There is also no request timeout, so a
//! hung backend leaves the flag set.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info};

use cadastro_core::{
    email_exists, format_phone_number, is_valid_email, Customer, CustomerDraft, CustomerUpdate,
};

use crate::application::notifications::{Notification, NotificationQueue};

/// Email error shown when the create form submits an address already in the list.
pub const EMAIL_EXISTS_MESSAGE: &str = "Esse e-mail já existe";
/// Email error shown when an address fails the syntax check.
pub const EMAIL_INVALID_MESSAGE: &str = "Insira um e-mail válido";

// ── API seam ──────────────────────────────────────────────────────────────────

/// Errors an API call can produce.
///
/// These are the only failures that cross the seam; everything validation-
/// related is caught before a request is built.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (DNS, refused connection,
    /// malformed body on the way in or out).
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with a status the operation does not accept.
    /// `update` and `delete` require exactly 200.
    #[error("{operation} returned unexpected HTTP status {status}")]
    UnexpectedStatus { operation: &'static str, status: u16 },

    /// The server rejected a create and said why; the message body is shown
    /// to the user in the email-error slot.
    #[error("{0}")]
    Server(String),
}

/// The REST `users` resource as the store consumes it.
///
/// `HttpCustomerApi` implements this against a real backend;
/// `MockCustomerApi` records calls for tests.  No retries anywhere —
/// failures propagate to the store as-is.
#[async_trait]
pub trait CustomerApi: Send + Sync {
    /// `GET /users` – the full customer list.
    async fn list(&self) -> Result<Vec<Customer>, ApiError>;
    /// `POST /users` – create; any 2xx is success and the body is the
    /// created record, id included.
    async fn create(&self, draft: &CustomerDraft) -> Result<Customer, ApiError>;
    /// `PATCH /users/{id}` – expects exactly HTTP 200.
    async fn update(&self, id: &str, draft: &CustomerDraft) -> Result<(), ApiError>;
    /// `DELETE /users/{id}` – expects exactly HTTP 200.
    async fn delete(&self, id: &str) -> Result<(), ApiError>;
}

/// Failures a store operation reports to its caller.
///
/// Validation problems never appear here — they surface through the error
/// flags the views render inline.  What does appear is a failed API call on
/// load, delete, or update, so the caller can tell the user instead of
/// dropping the rejection on the floor.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Api(#[from] ApiError),
}

// ── The store ─────────────────────────────────────────────────────────────────

/// Shared state for the registration page.  One instance per session,
/// behind an `Arc`, reset only by process restart.
pub struct CustomerStore {
    api: Arc<dyn CustomerApi>,
    /// Authoritative list, wholesale-replaced by [`load_customers`](Self::load_customers).
    customers: Mutex<Vec<Customer>>,
    /// The create form's masked phone input buffer.
    phone_input: Mutex<String>,
    /// Email error under the create form (duplicate, syntax, or server-reported).
    email_error: Mutex<Option<String>>,
    /// Create submission in flight.
    submitting: Mutex<bool>,
    /// Update submission in flight.
    updating: Mutex<bool>,
    /// Edit dialog: submitted email belongs to another customer.
    update_email_exists: Mutex<bool>,
    /// Edit dialog: submitted email failed the syntax check.
    update_email_invalid: Mutex<bool>,
    notifications: NotificationQueue,
}

impl CustomerStore {
    /// Creates an empty store over the given API implementation.
    pub fn new(api: Arc<dyn CustomerApi>) -> Arc<Self> {
        Arc::new(Self {
            api,
            customers: Mutex::new(Vec::new()),
            phone_input: Mutex::new(String::new()),
            email_error: Mutex::new(None),
            submitting: Mutex::new(false),
            updating: Mutex::new(false),
            update_email_exists: Mutex::new(false),
            update_email_invalid: Mutex::new(false),
            notifications: NotificationQueue::new(),
        })
    }

    // ── Read side ─────────────────────────────────────────────────────────────

    /// Snapshot of the authoritative list, in server order.
    pub async fn customers(&self) -> Vec<Customer> {
        self.customers.lock().await.clone()
    }

    /// Current masked value of the create form's phone field.
    pub async fn phone_input(&self) -> String {
        self.phone_input.lock().await.clone()
    }

    /// Pending email error under the create form, if any.
    pub async fn email_error(&self) -> Option<String> {
        self.email_error.lock().await.clone()
    }

    /// True while a create submission is in flight.
    pub async fn is_submitting(&self) -> bool {
        *self.submitting.lock().await
    }

    /// True while an update submission is in flight.
    pub async fn is_updating(&self) -> bool {
        *self.updating.lock().await
    }

    /// Edit-dialog duplicate-email flag.
    pub async fn update_email_exists(&self) -> bool {
        *self.update_email_exists.lock().await
    }

    /// Edit-dialog invalid-email flag.
    pub async fn update_email_invalid(&self) -> bool {
        *self.update_email_invalid.lock().await
    }

    /// Hands out all pending success notifications, each exactly once.
    pub async fn drain_notifications(&self) -> Vec<Notification> {
        self.notifications.drain().await
    }

    // ── Input buffers ─────────────────────────────────────────────────────────

    /// Reformats the create form's phone field on a keystroke and returns
    /// the new masked value for the view to display.
    pub async fn phone_input_changed(&self, raw: &str) -> String {
        let masked = format_phone_number(raw);
        let mut buffer = self.phone_input.lock().await;
        buffer.clone_from(&masked);
        masked
    }

    /// Typing in the email field dismisses a pending email error.
    pub async fn clear_email_error(&self) {
        *self.email_error.lock().await = None;
    }

    // ── Mutations ─────────────────────────────────────────────────────────────

    /// Fetches the full list and replaces the local copy.
    ///
    /// Called on initial mount and after every successful mutation.
    pub async fn load_customers(&self) -> Result<(), StoreError> {
        let list = self.api.list().await?;
        debug!(count = list.len(), "customer list reloaded");
        *self.customers.lock().await = list;
        Ok(())
    }

    /// The create form's submit intent.
    ///
    /// An incomplete draft is dropped silently — the per-field "required"
    /// messages belong to the view.  A duplicate or syntactically invalid
    /// email sets the email error and skips the network entirely.  A
    /// server-side rejection lands in the same error slot.  Only transport
    /// failures reach the caller as an `Err`.
    pub async fn submit_create(&self, draft: &CustomerDraft) -> Result<(), StoreError> {
        if !draft.is_complete() {
            return Ok(());
        }
        *self.submitting.lock().await = true;
        let result = self.submit_create_inner(draft).await;
        *self.submitting.lock().await = false;
        result
    }

    async fn submit_create_inner(&self, draft: &CustomerDraft) -> Result<(), StoreError> {
        let duplicate = {
            let customers = self.customers.lock().await;
            email_exists(&customers, &draft.email)
        };
        if duplicate {
            *self.email_error.lock().await = Some(EMAIL_EXISTS_MESSAGE.to_string());
            return Ok(());
        }
        if !is_valid_email(&draft.email) {
            *self.email_error.lock().await = Some(EMAIL_INVALID_MESSAGE.to_string());
            return Ok(());
        }

        match self.api.create(draft).await {
            Ok(created) => {
                info!(id = %created.id, "customer created");
                self.notifications.push(Notification::CustomerCreated).await;
                self.phone_input.lock().await.clear();
                *self.email_error.lock().await = None;
                // Append the created record so the list shows it right away;
                // the reload below replaces the list and resolves the
                // transient duplicate.
                self.customers.lock().await.push(created);
                self.load_customers().await
            }
            Err(ApiError::Server(message)) => {
                *self.email_error.lock().await = Some(message);
                Ok(())
            }
            Err(other) => Err(other.into()),
        }
    }

    /// The list view's per-row delete intent.
    ///
    /// Reload happens only on the success path: a failed delete leaves the
    /// list exactly as it was and returns the error to the caller.
    pub async fn delete_customer(&self, id: &str) -> Result<(), StoreError> {
        self.api.delete(id).await?;
        info!(%id, "customer deleted");
        self.load_customers().await?;
        self.notifications.push(Notification::CustomerDeleted).await;
        Ok(())
    }

    /// The edit dialog's submit intent.
    ///
    /// The duplicate check permits `email == email_used`: resubmitting your
    /// own unchanged address is not a conflict even though it "exists" in
    /// the list.  Error flags, not errors, report validation problems; an
    /// `Err` here means the PATCH itself failed.
    pub async fn submit_update(&self, update: &CustomerUpdate) -> Result<(), StoreError> {
        *self.updating.lock().await = true;
        if !update.is_complete() {
            *self.updating.lock().await = false;
            return Ok(());
        }

        *self.update_email_invalid.lock().await = false;
        *self.update_email_exists.lock().await = false;

        let duplicate = {
            let customers = self.customers.lock().await;
            email_exists(&customers, &update.email) && update.email != update.email_used
        };
        if duplicate {
            *self.updating.lock().await = false;
            *self.update_email_exists.lock().await = true;
            return Ok(());
        }

        if !is_valid_email(&update.email) {
            *self.updating.lock().await = false;
            *self.update_email_invalid.lock().await = true;
            return Ok(());
        }

        match self.api.update(&update.id, &update.draft()).await {
            Ok(()) => {
                info!(id = %update.id, "customer updated");
                *self.update_email_invalid.lock().await = false;
                *self.update_email_exists.lock().await = false;
                self.notifications.push(Notification::CustomerUpdated).await;
                *self.updating.lock().await = false;
                self.load_customers().await
            }
            Err(e) => {
                *self.updating.lock().await = false;
                Err(e.into())
            }
        }
    }
}
