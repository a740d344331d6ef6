//! Observable session value.
//!
//! The session is an explicit object handed to whoever needs it (page shell,
//! front-end root), never a global. Observers subscribe for a receiver and
//! unsubscribe by dropping it.

use tokio::sync::watch;

use crate::{AuthState, AuthenticatedUser};

/// Owner of the current [`AuthState`].
#[derive(Debug)]
pub struct AuthSession {
    tx: watch::Sender<AuthState>,
}

/// Subscription handle; drop it to unsubscribe.
pub type AuthSubscription = watch::Receiver<AuthState>;

impl Default for AuthSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthSession {
    /// Start with nobody signed in.
    pub fn new() -> Self {
        Self::with_state(AuthState::anonymous())
    }

    pub fn with_state(state: AuthState) -> Self {
        let (tx, _rx) = watch::channel(state);
        Self { tx }
    }

    /// Current value, cloned out of the channel.
    pub fn snapshot(&self) -> AuthState {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> AuthSubscription {
        self.tx.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }

    pub fn sign_in(&self, user: AuthenticatedUser) {
        tracing::info!(user_id = %user.id, role = %user.role, "session signed in");
        self.tx.send_replace(AuthState::signed_in(user));
    }

    pub fn sign_out(&self) {
        tracing::info!("session signed out");
        self.tx.send_replace(AuthState::anonymous());
    }
}
