use std::sync::Arc;

use tokio::sync::watch;

use crate::domain::{authentication::value_objects::Identity, common::entities::app_errors::CoreError};

/// Publishes sign-in / sign-out transitions to pipeline owners.
///
/// Owners subscribe when they are created and the subscription is released
/// when it is dropped (or explicitly via [`SessionSubscription::unsubscribe`]).
#[derive(Clone, Debug)]
pub struct SessionHub {
    sender: Arc<watch::Sender<Option<Identity>>>,
}

impl SessionHub {
    pub fn new(initial: Option<Identity>) -> Self {
        let (sender, _) = watch::channel(initial);
        Self {
            sender: Arc::new(sender),
        }
    }

    pub fn sign_in(&self, identity: Identity) {
        tracing::debug!(user_id = %identity.id(), "session signed in");
        self.sender.send_replace(Some(identity));
    }

    pub fn sign_out(&self) {
        tracing::debug!("session signed out");
        self.sender.send_replace(None);
    }

    pub fn current(&self) -> Option<Identity> {
        self.sender.borrow().clone()
    }

    pub fn subscribe(&self) -> SessionSubscription {
        SessionSubscription {
            receiver: self.sender.subscribe(),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

#[derive(Debug)]
pub struct SessionSubscription {
    receiver: watch::Receiver<Option<Identity>>,
}

impl SessionSubscription {
    pub fn current(&self) -> Option<Identity> {
        self.receiver.borrow().clone()
    }

    pub fn require_identity(&self) -> Result<Identity, CoreError> {
        self.current().ok_or(CoreError::Unauthenticated)
    }

    /// Waits for the next sign-in / sign-out and returns the new identity.
    pub async fn changed(&mut self) -> Result<Option<Identity>, CoreError> {
        self.receiver
            .changed()
            .await
            .map_err(|_| CoreError::InvalidState("session hub closed".to_string()))?;
        Ok(self.receiver.borrow_and_update().clone())
    }

    pub fn unsubscribe(self) {}
}
