//! Command bridge for the registration page.
//!
//! Exposes application-layer state (customer list, form buffers, error and
//! busy flags) to the web view through async commands.  Only this module is
//! allowed to reference both the application layer and the presentation
//! boundary.
//!
//! # How the commands are used (for beginners)
//!
//! The page has three views, each a pure rendering of store state:
//!
//! ```text
//! Create form   ── phone_input_changed / clear_email_error / submit_create_form
//! Customer list ── reload_customers / get_customers / delete_customer / open_edit_dialog
//! Edit dialog   ── format_phone / get_update_state / submit_update_form
//! Toasts        ── drain_notifications
//! ```
//!
//! A view invokes a command, receives a serializable DTO snapshot, and
//! renders it.  The Rust state itself (`CustomerStore` with its async
//! mutexes) never crosses the boundary; the DTO structs are plain
//! `serde`-derived copies that are safe to hand to any UI host.
//!
//! # `CommandResult<T>`
//!
//! Every command returns the same envelope:
//! ```json
//! { "success": true,  "data": {...}, "error": null }
//! { "success": false, "data": null,  "error": "..." }
//! ```
//! `success: false` means the operation itself failed (a failed DELETE or
//! PATCH, a dead backend).  *Validation* problems are not command failures:
//! they come back as data — field messages and flags — because the views
//! render them inline rather than treating them as errors.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use cadastro_core::{
    format_phone_number, is_valid_email, is_valid_name, is_valid_phone, Customer, CustomerDraft,
    CustomerUpdate,
};

use crate::application::customer_store::CustomerStore;
use crate::application::notifications::Notification;

// ── Field messages ────────────────────────────────────────────────────────────

/// Message under any field left empty.
pub const REQUIRED_MESSAGE: &str = "Este campo é obrigatório";
/// Message under a name containing anything besides letters and spaces.
pub const LETTERS_ONLY_MESSAGE: &str = "Por favor, insira apenas letras no campo.";
/// Message under a telephone whose digit count is not 11.
pub const PHONE_INVALID_MESSAGE: &str = "Número de telefone inválido";
/// Message under a syntactically invalid email.
pub const EMAIL_INVALID_MESSAGE: &str = "Insira um e-mail válido";

// ── DTOs ──────────────────────────────────────────────────────────────────────

/// One customer row as the list view renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDto {
    pub id: String,
    pub name: String,
    pub telephone: String,
    pub email: String,
}

impl From<Customer> for CustomerDto {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            name: customer.name,
            telephone: customer.telephone,
            email: customer.email,
        }
    }
}

/// What the create form submits.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateFormDto {
    pub name: String,
    pub telephone: String,
    pub email: String,
}

/// What the edit dialog submits.  `email_used` is the pre-edit email the
/// dialog was opened with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateFormDto {
    pub id: String,
    pub name: String,
    pub telephone: String,
    pub email: String,
    pub email_used: String,
}

/// Per-field validation messages, rendered under the matching input.
/// `None` means the field passed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrorsDto {
    pub name: Option<String>,
    pub telephone: Option<String>,
    pub email: Option<String>,
}

impl FieldErrorsDto {
    /// True when every field passed.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.telephone.is_none() && self.email.is_none()
    }
}

/// Snapshot of the create form's store-held state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFormStateDto {
    /// Masked phone buffer; the form's phone input is controlled by this.
    pub phone_input: String,
    /// Email error below the email field (duplicate, syntax, or server text).
    pub email_error: Option<String>,
    /// The submit button disables and shows "Enviando" while true.
    pub submitting: bool,
}

/// Outcome of a create submission.
///
/// `field_errors` come from the form rules; `email_error` is the store's
/// slot (duplicate, syntax, or a server-reported rejection).  All empty
/// means the record went through.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOutcomeDto {
    pub field_errors: FieldErrorsDto,
    pub email_error: Option<String>,
}

/// Pre-filled input values for the edit dialog.
///
/// The dialog re-invokes `open_edit_dialog` whenever a different row is
/// selected, which re-syncs its local buffers to the new customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditDialogDto {
    pub id: String,
    pub name: String,
    pub telephone: String,
    pub email: String,
    /// Carried back verbatim in [`UpdateFormDto::email_used`].
    pub email_used: String,
}

/// The edit dialog's store-held flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStateDto {
    /// The submit button disables and shows "Atualizando" while true.
    pub updating: bool,
    /// The submitted email belongs to another customer.
    pub email_exists: bool,
    /// The submitted email failed the syntax check.
    pub email_invalid: bool,
}

/// Outcome of an update submission: form messages plus the store flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateOutcomeDto {
    pub field_errors: FieldErrorsDto,
    pub email_exists: bool,
    pub email_invalid: bool,
}

/// One queued success event with its toast text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationDto {
    /// `"created"`, `"deleted"`, or `"updated"`.
    pub kind: String,
    pub message: String,
}

impl From<Notification> for NotificationDto {
    fn from(notification: Notification) -> Self {
        let kind = match notification {
            Notification::CustomerCreated => "created",
            Notification::CustomerDeleted => "deleted",
            Notification::CustomerUpdated => "updated",
        };
        Self {
            kind: kind.to_string(),
            message: notification.message().to_string(),
        }
    }
}

/// Unified response wrapper for bridge commands.
///
/// The caller always has a `success` flag to check before using `data`.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResult<T: Serialize> {
    /// `true` if the command completed successfully; `false` on error.
    pub success: bool,
    /// The command's return value, present only when `success` is `true`.
    pub data: Option<T>,
    /// A human-readable error message, present only when `success` is `false`.
    pub error: Option<String>,
}

impl<T: Serialize> CommandResult<T> {
    /// Constructs a successful result containing `data`.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Constructs an error result containing the given message.
    pub fn err(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}

// ── Form validation ───────────────────────────────────────────────────────────

/// The per-field rules both forms share: everything required, letters-only
/// name, 11-digit phone, syntactically valid email.
///
/// Runs before the store is involved; any message here means no network
/// call is made for this submission.
pub fn validate_form_fields(name: &str, telephone: &str, email: &str) -> FieldErrorsDto {
    let mut errors = FieldErrorsDto::default();

    if name.is_empty() {
        errors.name = Some(REQUIRED_MESSAGE.to_string());
    } else if !is_valid_name(name) {
        errors.name = Some(LETTERS_ONLY_MESSAGE.to_string());
    }

    if telephone.is_empty() {
        errors.telephone = Some(REQUIRED_MESSAGE.to_string());
    } else if !is_valid_phone(telephone) {
        errors.telephone = Some(PHONE_INVALID_MESSAGE.to_string());
    }

    if email.is_empty() {
        errors.email = Some(REQUIRED_MESSAGE.to_string());
    } else if !is_valid_email(email) {
        errors.email = Some(EMAIL_INVALID_MESSAGE.to_string());
    }

    errors
}

// ── List view commands ────────────────────────────────────────────────────────

/// Returns the current customer list snapshot, in server order.
pub async fn get_customers(store: Arc<CustomerStore>) -> CommandResult<Vec<CustomerDto>> {
    let customers = store.customers().await;
    CommandResult::ok(customers.into_iter().map(CustomerDto::from).collect())
}

/// Reloads the list from the backend and returns the fresh snapshot.
///
/// The list view invokes this once on mount.
pub async fn reload_customers(store: Arc<CustomerStore>) -> CommandResult<Vec<CustomerDto>> {
    if let Err(e) = store.load_customers().await {
        return CommandResult::err(e.to_string());
    }
    let customers = store.customers().await;
    CommandResult::ok(customers.into_iter().map(CustomerDto::from).collect())
}

/// The per-row delete action.
///
/// A failed delete is reported in the envelope so the view can tell the
/// user; the list stays as it was because the store only reloads on the
/// success path.
pub async fn delete_customer(store: Arc<CustomerStore>, id: String) -> CommandResult<()> {
    match store.delete_customer(&id).await {
        Ok(()) => CommandResult::ok(()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

/// The per-row edit action: pre-fills the dialog from the selected row.
///
/// Fails when the id is no longer in the snapshot (the row was deleted
/// under the dialog).
pub async fn open_edit_dialog(store: Arc<CustomerStore>, id: String) -> CommandResult<EditDialogDto> {
    let customers = store.customers().await;
    match customers.into_iter().find(|c| c.id == id) {
        Some(customer) => CommandResult::ok(EditDialogDto {
            id: customer.id,
            name: customer.name,
            telephone: customer.telephone,
            email_used: customer.email.clone(),
            email: customer.email,
        }),
        None => CommandResult::err(format!("no customer with id {id}")),
    }
}

// ── Create form commands ──────────────────────────────────────────────────────

/// Re-masks the create form's phone field on a keystroke and returns the
/// value the controlled input should display.
pub async fn phone_input_changed(store: Arc<CustomerStore>, raw: String) -> CommandResult<String> {
    CommandResult::ok(store.phone_input_changed(&raw).await)
}

/// Typing in the email field dismisses a pending email error.
pub async fn clear_email_error(store: Arc<CustomerStore>) -> CommandResult<()> {
    store.clear_email_error().await;
    CommandResult::ok(())
}

/// Snapshot of the create form's store-held state, polled by the form.
pub async fn get_create_form_state(store: Arc<CustomerStore>) -> CommandResult<CreateFormStateDto> {
    CommandResult::ok(CreateFormStateDto {
        phone_input: store.phone_input().await,
        email_error: store.email_error().await,
        submitting: store.is_submitting().await,
    })
}

/// The create form's submit intent.
///
/// Field validation short-circuits: with any per-field message present the
/// store is not called and nothing goes over the wire.  Otherwise the store
/// runs its own checks (duplicate email, syntax, the POST itself) and the
/// outcome reports whatever error slot it set.  On success the form resets:
/// the phone buffer is already cleared and a `created` notification is
/// queued for the toast.
pub async fn submit_create_form(
    store: Arc<CustomerStore>,
    form: CreateFormDto,
) -> CommandResult<CreateOutcomeDto> {
    let field_errors = validate_form_fields(&form.name, &form.telephone, &form.email);
    if !field_errors.is_empty() {
        return CommandResult::ok(CreateOutcomeDto {
            field_errors,
            email_error: store.email_error().await,
        });
    }

    let draft = CustomerDraft {
        name: form.name,
        telephone: form.telephone,
        email: form.email,
    };
    match store.submit_create(&draft).await {
        Ok(()) => CommandResult::ok(CreateOutcomeDto {
            field_errors,
            email_error: store.email_error().await,
        }),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

// ── Edit dialog commands ──────────────────────────────────────────────────────

/// Stateless phone re-mask for the dialog's own input buffer.
pub async fn format_phone(raw: String) -> CommandResult<String> {
    CommandResult::ok(format_phone_number(&raw))
}

/// The dialog's busy and email flags, polled while it is open.
pub async fn get_update_state(store: Arc<CustomerStore>) -> CommandResult<UpdateStateDto> {
    CommandResult::ok(UpdateStateDto {
        updating: store.is_updating().await,
        email_exists: store.update_email_exists().await,
        email_invalid: store.update_email_invalid().await,
    })
}

/// The edit dialog's submit intent.
///
/// Same short-circuit shape as the create form; the store-side flags
/// (duplicate excluding `email_used`, syntax) come back in the outcome so
/// the dialog renders them inline.  A failed PATCH lands in the envelope.
pub async fn submit_update_form(
    store: Arc<CustomerStore>,
    form: UpdateFormDto,
) -> CommandResult<UpdateOutcomeDto> {
    let field_errors = validate_form_fields(&form.name, &form.telephone, &form.email);
    if !field_errors.is_empty() {
        return CommandResult::ok(UpdateOutcomeDto {
            field_errors,
            email_exists: store.update_email_exists().await,
            email_invalid: store.update_email_invalid().await,
        });
    }

    let update = CustomerUpdate {
        id: form.id,
        name: form.name,
        telephone: form.telephone,
        email: form.email,
        email_used: form.email_used,
    };
    match store.submit_update(&update).await {
        Ok(()) => CommandResult::ok(UpdateOutcomeDto {
            field_errors,
            email_exists: store.update_email_exists().await,
            email_invalid: store.update_email_invalid().await,
        }),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

// ── Toast commands ────────────────────────────────────────────────────────────

/// Hands the pending success events to the toast layer, exactly once each.
pub async fn drain_notifications(store: Arc<CustomerStore>) -> CommandResult<Vec<NotificationDto>> {
    let notifications = store.drain_notifications().await;
    CommandResult::ok(notifications.into_iter().map(NotificationDto::from).collect())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::customer_store::CustomerApi;
    use crate::infrastructure::api::MockCustomerApi;

    fn store_with(api: MockCustomerApi) -> (Arc<MockCustomerApi>, Arc<CustomerStore>) {
        let api = Arc::new(api);
        let store = CustomerStore::new(Arc::clone(&api) as Arc<dyn CustomerApi>);
        (api, store)
    }

    fn valid_form() -> CreateFormDto {
        CreateFormDto {
            name: "Maria Silva".to_string(),
            telephone: "(11) 98765-4321".to_string(),
            email: "maria@mail.com".to_string(),
        }
    }

    #[test]
    fn test_empty_fields_get_required_messages() {
        let errors = validate_form_fields("", "", "");
        assert_eq!(errors.name.as_deref(), Some(REQUIRED_MESSAGE));
        assert_eq!(errors.telephone.as_deref(), Some(REQUIRED_MESSAGE));
        assert_eq!(errors.email.as_deref(), Some(REQUIRED_MESSAGE));
    }

    #[test]
    fn test_pattern_messages() {
        let errors = validate_form_fields("Maria 2", "(11) 9876-4321", "maria@mail");
        assert_eq!(errors.name.as_deref(), Some(LETTERS_ONLY_MESSAGE));
        assert_eq!(errors.telephone.as_deref(), Some(PHONE_INVALID_MESSAGE));
        assert_eq!(errors.email.as_deref(), Some(EMAIL_INVALID_MESSAGE));
    }

    #[test]
    fn test_valid_fields_produce_no_messages() {
        let errors =
            validate_form_fields("Maria Silva", "(11) 98765-4321", "maria@mail.com");
        assert!(errors.is_empty());
    }

    #[tokio::test]
    async fn test_submit_with_short_phone_issues_no_network_call() {
        let (api, store) = store_with(MockCustomerApi::new());
        let mut form = valid_form();
        form.telephone = "(11) 8765-4321".to_string(); // 10 digits

        let result = submit_create_form(Arc::clone(&store), form).await;

        let outcome = result.data.expect("command succeeds");
        assert_eq!(
            outcome.field_errors.telephone.as_deref(),
            Some(PHONE_INVALID_MESSAGE)
        );
        assert!(api.created.lock().unwrap().is_empty());
        assert_eq!(*api.list_calls.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_successful_submit_returns_clean_outcome() {
        let (api, store) = store_with(MockCustomerApi::new());

        let result = submit_create_form(Arc::clone(&store), valid_form()).await;

        assert!(result.success);
        let outcome = result.data.unwrap();
        assert!(outcome.field_errors.is_empty());
        assert!(outcome.email_error.is_none());
        assert_eq!(api.created.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_phone_input_command_masks_and_stores() {
        let (_, store) = store_with(MockCustomerApi::new());

        let result = phone_input_changed(Arc::clone(&store), "11987654321".to_string()).await;
        assert_eq!(result.data.as_deref(), Some("(11) 98765-4321"));

        let state = get_create_form_state(store).await.data.unwrap();
        assert_eq!(state.phone_input, "(11) 98765-4321");
    }

    #[tokio::test]
    async fn test_open_edit_dialog_prefills_from_row() {
        let api = MockCustomerApi::new();
        let (_, store) = store_with(api);
        submit_create_form(Arc::clone(&store), valid_form()).await;
        let id = store.customers().await[0].id.clone();

        let dialog = open_edit_dialog(Arc::clone(&store), id.clone())
            .await
            .data
            .unwrap();
        assert_eq!(dialog.id, id);
        assert_eq!(dialog.email, "maria@mail.com");
        assert_eq!(dialog.email_used, "maria@mail.com");

        let missing = open_edit_dialog(store, "999".to_string()).await;
        assert!(!missing.success);
    }

    #[tokio::test]
    async fn test_failed_delete_is_reported_in_the_envelope() {
        let (_, store) = store_with(MockCustomerApi::new());

        let result = delete_customer(store, "999".to_string()).await;

        assert!(!result.success);
        assert!(result.error.unwrap().contains("404"));
    }

    #[tokio::test]
    async fn test_drain_notifications_is_one_shot() {
        let (_, store) = store_with(MockCustomerApi::new());
        submit_create_form(Arc::clone(&store), valid_form()).await;

        let first = drain_notifications(Arc::clone(&store)).await.data.unwrap();
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].kind, "created");
        assert_eq!(first[0].message, "Usuário cadastrado com sucesso");

        let second = drain_notifications(store).await.data.unwrap();
        assert!(second.is_empty());
    }

    #[test]
    fn test_command_result_serializes_to_envelope_shape() {
        let ok: CommandResult<u8> = CommandResult::ok(7);
        let json = serde_json::to_value(&ok).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], 7);
        assert_eq!(json["error"], serde_json::Value::Null);

        let err: CommandResult<u8> = CommandResult::err("boom");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "boom");
    }
}
