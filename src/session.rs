//! Session store boundary: who is signed in.
//!
//! Listing and offer logic never reads the session; it exists so a rendering
//! layer can be handed one explicitly instead of reaching for shared state.

use crate::models::User;
use tracing::info;

pub trait Session {
    fn current_user(&self) -> Option<&User>;
    fn login(&mut self, user: User);
    fn logout(&mut self);

    /// Name to show for the signed-in user, if any.
    fn display_name(&self) -> Option<&str> {
        self.current_user().map(|u| u.name.as_str())
    }

    fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemorySession {
    user: Option<User>,
}

impl InMemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(user: User) -> Self {
        Self { user: Some(user) }
    }
}

impl Session for InMemorySession {
    fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    fn login(&mut self, user: User) {
        info!(user_id = %user.id, "session login");
        self.user = Some(user);
    }

    fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            info!(user_id = %user.id, "session logout");
        }
    }
}
