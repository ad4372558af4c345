//! One-shot success notifications.
//!
//! Each completed mutation (create, delete, update) pushes a typed event
//! here.  A consuming view calls [`NotificationQueue::drain`] and reacts to
//! whatever it receives — typically by showing a toast — and because
//! draining empties the queue, every event is acted on exactly once, no
//! matter how often the view re-renders.
//!
//! # Why a queue and not boolean flags? (for beginners)
//!
//! A "succeeded" boolean that the consumer must remember to reset is an ad
//! hoc event channel with a footgun: forget the reset and the toast fires
//! again on the next unrelated re-render.  A drained queue has no reset
//! step to forget, and two rapid mutations produce two events instead of
//! one overwritten flag.

use std::collections::VecDeque;

use tokio::sync::Mutex;

/// A success event produced by a completed store mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    /// A customer was created via the form.
    CustomerCreated,
    /// A customer was removed from the list.
    CustomerDeleted,
    /// A customer was edited through the dialog.
    CustomerUpdated,
}

impl Notification {
    /// The toast text the views show for this event.
    pub fn message(&self) -> &'static str {
        match self {
            Notification::CustomerCreated => "Usuário cadastrado com sucesso",
            Notification::CustomerDeleted => "Usuário deletado com sucesso",
            Notification::CustomerUpdated => "Usuário atualizado com sucesso",
        }
    }
}

/// FIFO queue of pending notifications, shared across async tasks.
#[derive(Default)]
pub struct NotificationQueue {
    inner: Mutex<VecDeque<Notification>>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event for the next drain.
    pub async fn push(&self, notification: Notification) {
        self.inner.lock().await.push_back(notification);
    }

    /// Removes and returns all pending events, oldest first.
    pub async fn drain(&self) -> Vec<Notification> {
        self.inner.lock().await.drain(..).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_drain_empties_the_queue() {
        let queue = NotificationQueue::new();
        queue.push(Notification::CustomerCreated).await;
        queue.push(Notification::CustomerDeleted).await;

        let first = queue.drain().await;
        assert_eq!(
            first,
            vec![Notification::CustomerCreated, Notification::CustomerDeleted]
        );

        // A second drain sees nothing; each event is delivered once.
        assert!(queue.drain().await.is_empty());
    }

    #[test]
    fn test_toast_messages() {
        assert_eq!(
            Notification::CustomerCreated.message(),
            "Usuário cadastrado com sucesso"
        );
        assert_eq!(
            Notification::CustomerUpdated.message(),
            "Usuário atualizado com sucesso"
        );
    }
}
