//! Headless host: submit one inventory record from the command line.
//!
//! ```text
//! COTTONWASTE_STORE_URL=... COTTONWASTE_STORE_KEY=... COTTONWASTE_SESSION='{"id":..}' \
//!   cottonwaste-submit quantity=50 unit_price=12.5 location=Mumbai
//! ```

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use cottonwaste_auth::{AuthSession, AuthenticatedUser};
    use cottonwaste_infra::{RestRecordStore, TracingNotifier};
    use cottonwaste_inventory::Field;
    use cottonwaste_web::page::LOGIN_PROMPT;
    use cottonwaste_web::{InventorySubmissionForm, PageShell, PageView, SubmitOutcome};

    cottonwaste_observability::init();

    let session = AuthSession::new();
    if let Ok(raw) = std::env::var("COTTONWASTE_SESSION") {
        let user: AuthenticatedUser =
            serde_json::from_str(&raw).context("COTTONWASTE_SESSION is not a valid user")?;
        session.sign_in(user);
    }

    let shell = PageShell::new(&session);
    if let PageView::Unauthenticated = shell.view() {
        eprintln!("{LOGIN_PROMPT}");
        std::process::exit(2);
    }

    let store = RestRecordStore::from_env()?;
    store.set_access_token(std::env::var("COTTONWASTE_ACCESS_TOKEN").ok());
    let table = store.config().table.clone();
    let form = InventorySubmissionForm::new(store, TracingNotifier).with_table(table);

    for arg in std::env::args().skip(1) {
        let (name, value) = arg
            .split_once('=')
            .with_context(|| format!("expected field=value, got {arg:?}"))?;
        let field = Field::ALL
            .into_iter()
            .find(|f| f.name() == name)
            .with_context(|| format!("unknown field {name:?}"))?;
        form.set_field(field, value);
    }

    match form.submit().await {
        SubmitOutcome::Submitted => Ok(()),
        SubmitOutcome::Invalid(errors) => {
            for (field, err) in errors.iter() {
                eprintln!("{}: {}", field.label(), err);
            }
            std::process::exit(1);
        }
        SubmitOutcome::Failed(_) | SubmitOutcome::Busy => std::process::exit(1),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}
