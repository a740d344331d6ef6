//! Leptos frontend for the submission page.

pub mod app;
pub mod toast;

use std::rc::Rc;

use leptos::*;
use wasm_bindgen::prelude::*;

use cottonwaste_auth::{AuthSession, AuthenticatedUser};
use cottonwaste_infra::StoreConfig;

use app::App;

/// Handle returned to the host page.
///
/// The host owns authentication: it forwards the signed-in user (and their
/// access token) here, and the page re-renders from that.
#[wasm_bindgen]
pub struct CottonWasteApp {
    session: Rc<AuthSession>,
    access_token: RwSignal<Option<String>>,
}

#[wasm_bindgen]
impl CottonWasteApp {
    /// Mount the page into `<body>`.
    #[wasm_bindgen(constructor)]
    pub fn new(store_url: String, store_key: String) -> CottonWasteApp {
        // Initialize console error panic hook for better error messages
        console_error_panic_hook::set_once();

        let session = Rc::new(AuthSession::new());
        let access_token = create_rw_signal(None::<String>);
        let config = StoreConfig::new(store_url, store_key);

        let mounted = session.clone();
        mount_to_body(move || {
            view! {
                <App session=mounted.clone() config=config.clone() access_token=access_token/>
            }
        });

        Self {
            session,
            access_token,
        }
    }

    /// `user` must deserialize as an [`AuthenticatedUser`].
    #[wasm_bindgen(js_name = signIn)]
    pub fn sign_in(&self, user: JsValue, access_token: Option<String>) -> Result<(), JsValue> {
        let user: AuthenticatedUser = serde_wasm_bindgen::from_value(user)?;
        self.access_token.set(access_token);
        self.session.sign_in(user);
        Ok(())
    }

    #[wasm_bindgen(js_name = signOut)]
    pub fn sign_out(&self) {
        self.access_token.set(None);
        self.session.sign_out();
    }
}
