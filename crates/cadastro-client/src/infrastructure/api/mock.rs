//! In-memory mock backend for unit and integration testing.
//!
//! # Why a mock backend?
//!
//! The real `HttpCustomerApi` needs a running REST server, network access,
//! and fixture data — none of which belong in a unit test.  The
//! `MockCustomerApi` replaces the network with an in-memory `Vec` and
//! records every call, so tests can assert not just the resulting state but
//! exactly which requests a flow issued ("this validation failure must not
//! produce a network call" is a call-count assertion).
//!
//! # Usage in tests
//!
//! ```ignore
//! let api = Arc::new(MockCustomerApi::with_customers(vec![ana()]));
//! let store = CustomerStore::new(Arc::clone(&api) as Arc<dyn CustomerApi>);
//!
//! store.submit_create(&duplicate_draft).await.unwrap();
//!
//! // The duplicate was caught locally; no POST went out.
//! assert!(api.created.lock().unwrap().is_empty());
//! ```
//!
//! # `fail_transport` flag
//!
//! Set `fail_transport = true` at construction time to make every call
//! return [`ApiError::Transport`], for exercising the error paths without a
//! broken network.  Unknown ids on update/delete answer 404 on their own,
//! which is how the real json-server backend behaves.

use std::sync::Mutex;

use async_trait::async_trait;

use cadastro_core::{Customer, CustomerDraft};

use crate::application::customer_store::{ApiError, CustomerApi};

/// A mock `users` resource that records all calls.
///
/// Call records live in `Mutex<Vec<...>>` fields so tests can share the
/// mock across tasks through an `Arc` and inspect it afterwards.
#[derive(Default)]
pub struct MockCustomerApi {
    /// Backing data returned by `list` and mutated by the other calls.
    pub customers: Mutex<Vec<Customer>>,
    /// Number of `list` calls issued so far.
    pub list_calls: Mutex<u32>,
    /// Every draft passed to `create`, in order.
    pub created: Mutex<Vec<CustomerDraft>>,
    /// Every `(id, draft)` pair passed to `update`.
    pub updated: Mutex<Vec<(String, CustomerDraft)>>,
    /// Every id passed to `delete`.
    pub deleted: Mutex<Vec<String>>,
    /// When `true`, every call returns `ApiError::Transport` immediately.
    pub fail_transport: bool,
    /// When set, `create` answers with this server rejection message
    /// instead of creating anything.
    pub reject_create_with: Option<String>,
    next_id: Mutex<u32>,
}

impl MockCustomerApi {
    /// An empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend pre-seeded with `customers`.
    pub fn with_customers(customers: Vec<Customer>) -> Self {
        Self {
            customers: Mutex::new(customers),
            ..Self::default()
        }
    }
}

#[async_trait]
impl CustomerApi for MockCustomerApi {
    /// Returns a copy of the backing data and bumps the call counter.
    async fn list(&self) -> Result<Vec<Customer>, ApiError> {
        if self.fail_transport {
            return Err(ApiError::Transport("mock transport failure".into()));
        }
        *self.list_calls.lock().unwrap() += 1;
        Ok(self.customers.lock().unwrap().clone())
    }

    /// Records the draft and stores it under a fresh sequential id.
    async fn create(&self, draft: &CustomerDraft) -> Result<Customer, ApiError> {
        if self.fail_transport {
            return Err(ApiError::Transport("mock transport failure".into()));
        }
        if let Some(message) = &self.reject_create_with {
            return Err(ApiError::Server(message.clone()));
        }
        self.created.lock().unwrap().push(draft.clone());

        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let created = Customer {
            id: next_id.to_string(),
            name: draft.name.clone(),
            telephone: draft.telephone.clone(),
            email: draft.email.clone(),
        };
        self.customers.lock().unwrap().push(created.clone());
        Ok(created)
    }

    /// Records the call and patches the backing record, or answers 404 for
    /// an unknown id.
    async fn update(&self, id: &str, draft: &CustomerDraft) -> Result<(), ApiError> {
        if self.fail_transport {
            return Err(ApiError::Transport("mock transport failure".into()));
        }
        self.updated
            .lock()
            .unwrap()
            .push((id.to_string(), draft.clone()));

        let mut customers = self.customers.lock().unwrap();
        match customers.iter_mut().find(|c| c.id == id) {
            Some(customer) => {
                customer.name = draft.name.clone();
                customer.telephone = draft.telephone.clone();
                customer.email = draft.email.clone();
                Ok(())
            }
            None => Err(ApiError::UnexpectedStatus {
                operation: "update",
                status: 404,
            }),
        }
    }

    /// Records the call and removes the record, or answers 404 for an
    /// unknown id.
    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        if self.fail_transport {
            return Err(ApiError::Transport("mock transport failure".into()));
        }
        self.deleted.lock().unwrap().push(id.to_string());

        let mut customers = self.customers.lock().unwrap();
        let before = customers.len();
        customers.retain(|c| c.id != id);
        if customers.len() == before {
            return Err(ApiError::UnexpectedStatus {
                operation: "delete",
                status: 404,
            });
        }
        Ok(())
    }
}
