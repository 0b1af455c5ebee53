use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The signed-in user on whose behalf a pipeline operation runs.
///
/// Authentication happens upstream; the core only ever sees this token and
/// scopes every read and write by `id()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    user_id: Uuid,
    email: Option<String>,
}

impl Identity {
    pub fn new(user_id: Uuid, email: Option<String>) -> Self {
        Self { user_id, email }
    }

    pub fn id(&self) -> Uuid {
        self.user_id
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}
