//! Page shell: shows the submission form only when someone is signed in.

use cottonwaste_auth::{AuthSession, AuthState, AuthSubscription, AuthenticatedUser};

pub const PAGE_TITLE: &str = "Cotton Waste Management";
pub const LOGIN_PROMPT: &str = "Please log in to submit inventory.";

/// What the page renders for a given session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageView {
    /// Nobody signed in: show [`LOGIN_PROMPT`] instead of the form.
    Unauthenticated,
    /// Show the submission form.
    Authenticated(AuthenticatedUser),
}

impl PageView {
    /// Presence check only; no authentication happens here.
    pub fn for_state(state: &AuthState) -> Self {
        match state.user() {
            Some(user) => PageView::Authenticated(user.clone()),
            None => PageView::Unauthenticated,
        }
    }

    pub fn shows_form(&self) -> bool {
        matches!(self, PageView::Authenticated(_))
    }
}

/// Observes a session and maps it to the page to render.
///
/// Dropping the shell drops its subscription.
#[derive(Debug)]
pub struct PageShell {
    auth: AuthSubscription,
}

impl PageShell {
    pub fn new(session: &AuthSession) -> Self {
        Self {
            auth: session.subscribe(),
        }
    }

    pub fn title(&self) -> &'static str {
        PAGE_TITLE
    }

    /// View for the current session value.
    pub fn view(&self) -> PageView {
        PageView::for_state(&self.auth.borrow())
    }

    /// Wait for the session to change and return the new view.
    ///
    /// Returns `None` once the session has been dropped.
    pub async fn next_view(&mut self) -> Option<PageView> {
        self.auth.changed().await.ok()?;
        Some(PageView::for_state(&self.auth.borrow_and_update()))
    }

    /// Wait until the page flips between prompt and form.
    ///
    /// Session updates that keep a user signed in (repeat sign-in, token
    /// refresh, profile edits) are skipped, so a mounted form is never torn
    /// down while its user stays present.
    pub async fn next_transition(&mut self) -> Option<PageView> {
        let shows_form = self.view().shows_form();
        loop {
            let view = self.next_view().await?;
            if view.shows_form() != shows_form {
                return Some(view);
            }
        }
    }
}
