//! Integration tests for the UI command bridge.
//!
//! These drive the page the way the web view does: commands in, DTO
//! snapshots out, with `MockCustomerApi` standing in for the backend.

use std::sync::Arc;

use cadastro_client::application::customer_store::{CustomerApi, CustomerStore};
use cadastro_client::infrastructure::api::MockCustomerApi;
use cadastro_client::infrastructure::ui_bridge::{
    self, CreateFormDto, UpdateFormDto, LETTERS_ONLY_MESSAGE, PHONE_INVALID_MESSAGE,
};

fn page() -> (Arc<MockCustomerApi>, Arc<CustomerStore>) {
    let api = Arc::new(MockCustomerApi::new());
    let store = CustomerStore::new(Arc::clone(&api) as Arc<dyn CustomerApi>);
    (api, store)
}

fn form(name: &str, telephone: &str, email: &str) -> CreateFormDto {
    CreateFormDto {
        name: name.to_string(),
        telephone: telephone.to_string(),
        email: email.to_string(),
    }
}

#[tokio::test]
async fn test_accented_name_and_short_phone_never_reach_the_network() {
    let (api, store) = page();

    // "João" trips the ASCII letters-only rule and ten digits trip the
    // phone rule; either alone is enough to keep the submission local.
    let result = ui_bridge::submit_create_form(
        store,
        form("João", "(11) 8765-4321", "joao@mail.com"),
    )
    .await;

    let outcome = result.data.expect("validation is not a command failure");
    assert_eq!(
        outcome.field_errors.telephone.as_deref(),
        Some(PHONE_INVALID_MESSAGE)
    );
    assert_eq!(
        outcome.field_errors.name.as_deref(),
        Some(LETTERS_ONLY_MESSAGE)
    );
    assert!(api.created.lock().unwrap().is_empty());
    assert_eq!(*api.list_calls.lock().unwrap(), 0);
}

#[tokio::test]
async fn test_full_page_lifecycle() {
    let (_, store) = page();

    // Mount: the list view reloads and sees an empty backend.
    let initial = ui_bridge::reload_customers(Arc::clone(&store)).await;
    assert!(initial.success);
    assert!(initial.data.unwrap().is_empty());

    // Create through the form.
    let created = ui_bridge::submit_create_form(
        Arc::clone(&store),
        form("Maria Silva", "(11) 98765-4321", "maria@mail.com"),
    )
    .await;
    assert!(created.success);

    let rows = ui_bridge::get_customers(Arc::clone(&store)).await.data.unwrap();
    assert_eq!(rows.len(), 1);
    let row = rows[0].clone();

    // Edit: open the dialog pre-filled, change the email, submit.
    let dialog = ui_bridge::open_edit_dialog(Arc::clone(&store), row.id.clone())
        .await
        .data
        .unwrap();
    assert_eq!(dialog.email_used, "maria@mail.com");

    let updated = ui_bridge::submit_update_form(
        Arc::clone(&store),
        UpdateFormDto {
            id: dialog.id,
            name: dialog.name,
            telephone: dialog.telephone,
            email: "maria.nova@mail.com".to_string(),
            email_used: dialog.email_used,
        },
    )
    .await;
    assert!(updated.success);
    let outcome = updated.data.unwrap();
    assert!(outcome.field_errors.is_empty());
    assert!(!outcome.email_exists);

    let rows = ui_bridge::get_customers(Arc::clone(&store)).await.data.unwrap();
    assert_eq!(rows[0].email, "maria.nova@mail.com");

    // Delete the row.
    let deleted = ui_bridge::delete_customer(Arc::clone(&store), row.id).await;
    assert!(deleted.success);
    assert!(ui_bridge::get_customers(Arc::clone(&store))
        .await
        .data
        .unwrap()
        .is_empty());

    // The toast layer sees each success exactly once, in order.
    let toasts = ui_bridge::drain_notifications(Arc::clone(&store)).await.data.unwrap();
    let kinds: Vec<&str> = toasts.iter().map(|t| t.kind.as_str()).collect();
    assert_eq!(kinds, ["created", "updated", "deleted"]);
    assert!(ui_bridge::drain_notifications(store)
        .await
        .data
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_dialog_flags_are_visible_through_get_update_state() {
    let (_, store) = page();
    ui_bridge::submit_create_form(
        Arc::clone(&store),
        form("Maria Silva", "(11) 98765-4321", "maria@mail.com"),
    )
    .await;
    ui_bridge::submit_create_form(
        Arc::clone(&store),
        form("Ana Souza", "(21) 91234-5678", "ana@mail.com"),
    )
    .await;

    let rows = ui_bridge::get_customers(Arc::clone(&store)).await.data.unwrap();
    let ana = rows.iter().find(|r| r.email == "ana@mail.com").unwrap();

    // Ana tries to take Maria's address.
    let outcome = ui_bridge::submit_update_form(
        Arc::clone(&store),
        UpdateFormDto {
            id: ana.id.clone(),
            name: ana.name.clone(),
            telephone: ana.telephone.clone(),
            email: "maria@mail.com".to_string(),
            email_used: "ana@mail.com".to_string(),
        },
    )
    .await
    .data
    .unwrap();
    assert!(outcome.email_exists);

    let state = ui_bridge::get_update_state(store).await.data.unwrap();
    assert!(state.email_exists);
    assert!(!state.email_invalid);
    assert!(!state.updating);
}
