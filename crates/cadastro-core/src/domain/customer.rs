//! The `Customer` entity and the input shapes that produce it.
//!
//! Three types live here, one per stage of a record's life:
//!
//! - [`CustomerDraft`] – what the create form submits (no id yet).
//! - [`Customer`] – the persisted record as the server returns it.
//! - [`CustomerUpdate`] – what the edit dialog submits: an id, the edited
//!   fields, and `email_used`, the pre-edit email address.
//!
//! # Why `email_used`? (for beginners)
//!
//! The duplicate-email check scans the currently loaded list.  When a user
//! opens the edit dialog and saves without changing the address, that address
//! *is* in the list — it is the customer's own row — so a naive scan would
//! reject the save as a duplicate.  `email_used` carries the pre-edit value
//! so the check can permit `email == email_used` while still rejecting a
//! change to an address some *other* customer holds.

use serde::{Deserialize, Serialize};

/// A persisted customer record.
///
/// The `id` is assigned by the server on create and is never generated
/// locally.  Email uniqueness is enforced client-side as a best effort
/// against the loaded list; the server remains the final authority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Server-assigned unique identifier.
    pub id: String,
    /// Full name as typed in the form.
    pub name: String,
    /// Masked telephone, e.g. `"(11) 98765-4321"`.
    pub telephone: String,
    /// Email address, unique within the list, compared case-sensitively.
    pub email: String,
}

/// The body of a create request: everything except the id.
///
/// Serialized as-is into the `POST /users` JSON body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDraft {
    pub name: String,
    pub telephone: String,
    pub email: String,
}

impl CustomerDraft {
    /// True when every field has at least one character.
    ///
    /// The create flow drops drafts that fail this check without reporting
    /// an error; the per-field "required" messages are the view's job.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.telephone.is_empty() && !self.email.is_empty()
    }
}

/// The edit dialog's submission: the target id, the edited fields, and the
/// pre-edit email used to allow a no-op email resubmission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerUpdate {
    /// Id of the customer being edited.
    pub id: String,
    pub name: String,
    pub telephone: String,
    pub email: String,
    /// The email address the customer had when the dialog opened.
    ///
    /// Transient: never serialized, never sent to the server.
    pub email_used: String,
}

impl CustomerUpdate {
    /// The `PATCH /users/{id}` body: the edited fields without id or
    /// `email_used`.
    pub fn draft(&self) -> CustomerDraft {
        CustomerDraft {
            name: self.name.clone(),
            telephone: self.telephone.clone(),
            email: self.email.clone(),
        }
    }

    /// True when id, name, and email are all present.
    ///
    /// The update flow silently refuses submissions failing this guard.
    pub fn is_complete(&self) -> bool {
        !self.id.is_empty() && !self.name.is_empty() && !self.email.is_empty()
    }
}
