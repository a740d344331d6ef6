//! Leptos application with routing.

use std::rc::Rc;

use leptos::*;
use leptos_router::*;

use cottonwaste_auth::AuthSession;
use cottonwaste_infra::{Notification, RestRecordStore, StoreConfig};
use cottonwaste_inventory::{Field, WasteType};

use crate::frontend::toast::{ToastList, ToastNotifier};
use crate::page::{LOGIN_PROMPT, PageShell, PageView};
use crate::submission::{FORM_TITLE, InventorySubmissionForm, SUBMIT_LABEL, SUBMITTING_LABEL};

type WebForm = InventorySubmissionForm<RestRecordStore, ToastNotifier>;

/// Main application component.
#[component]
pub fn App(
    session: Rc<AuthSession>,
    config: StoreConfig,
    access_token: RwSignal<Option<String>>,
) -> impl IntoView {
    let mut shell = PageShell::new(&session);
    let title = shell.title();
    let page = create_rw_signal(shell.view());

    // Only prompt <-> form flips reach the signal.
    spawn_local(async move {
        while let Some(view) = shell.next_transition().await {
            page.set(view);
        }
    });

    view! {
        <Router>
            <Routes>
                <Route
                    path="/"
                    view=move || {
                        view! {
                            <IndexPage
                                title=title
                                page=page
                                config=config.clone()
                                access_token=access_token
                            />
                        }
                    }
                />
            </Routes>
        </Router>
    }
}

/// Page shell: form for signed-in users, a prompt otherwise.
#[component]
fn IndexPage(
    title: &'static str,
    page: RwSignal<PageView>,
    config: StoreConfig,
    access_token: RwSignal<Option<String>>,
) -> impl IntoView {
    // The form stays mounted for as long as a user is present.
    let authed = create_memo(move |_| page.with(PageView::shows_form));

    view! {
        <div class="container">
            <h1>{title}</h1>
            {move || {
                if authed.get() {
                    view! { <SubmissionFormView config=config.clone() access_token=access_token/> }
                        .into_view()
                } else {
                    view! { <p class="login-prompt">{LOGIN_PROMPT}</p> }.into_view()
                }
            }}
        </div>
    }
}

/// Inventory submission form component.
#[component]
fn SubmissionFormView(
    config: StoreConfig,
    access_token: RwSignal<Option<String>>,
) -> impl IntoView {
    let toasts = create_rw_signal(Vec::<Notification>::new());
    let table = config.table.clone();
    let form: Rc<WebForm> = Rc::new(
        InventorySubmissionForm::new(RestRecordStore::new(config), ToastNotifier::new(toasts))
            .with_table(table),
    );

    // Token refreshes go to the existing store; the form is not rebuilt.
    create_effect({
        let form = form.clone();
        move |_| form.store().set_access_token(access_token.get())
    });

    // Form state lives outside the reactive graph; bump to re-read it.
    let revision = create_rw_signal(0u64);
    let submitting = create_rw_signal(false);

    let on_submit = {
        let form = form.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            if form.is_submitting() {
                return;
            }

            submitting.set(true);
            let form = form.clone();
            spawn_local(async move {
                form.submit().await;
                submitting.set(false);
                revision.update(|r| *r += 1);
            });
        }
    };

    let inputs = [Field::Quantity, Field::UnitPrice, Field::Location, Field::Description]
        .into_iter()
        .map(|field| text_field(form.clone(), field, revision))
        .collect_view();

    view! {
        <div class="inventory-form">
            <h2>{FORM_TITLE}</h2>
            <form on:submit=on_submit>
                {waste_type_field(form.clone(), revision)}
                {inputs}
                <div class="form-actions">
                    <button type="submit" disabled=move || submitting.get()>
                        {move || if submitting.get() { SUBMITTING_LABEL } else { SUBMIT_LABEL }}
                    </button>
                </div>
            </form>
            <ToastList toasts=toasts/>
        </div>
    }
}

fn waste_type_field(form: Rc<WebForm>, revision: RwSignal<u64>) -> impl IntoView {
    let field = Field::WasteType;
    let current = {
        let form = form.clone();
        move || {
            revision.get();
            form.value(field)
        }
    };
    let on_change = {
        let form = form.clone();
        move |ev: ev::Event| {
            form.set_field(field, event_target_value(&ev));
            revision.update(|r| *r += 1);
        }
    };

    view! {
        <div class="form-group">
            <label for=field.name()>{field.label()}</label>
            <select id=field.name() prop:value=current on:change=on_change>
                {WasteType::ALL
                    .into_iter()
                    .map(|w| view! { <option value=w.as_str()>{w.display_name()}</option> })
                    .collect_view()}
            </select>
            {field_error(form, field, revision)}
        </div>
    }
}

fn text_field(form: Rc<WebForm>, field: Field, revision: RwSignal<u64>) -> impl IntoView {
    let input_type = if field.is_numeric() { "number" } else { "text" };
    let current = {
        let form = form.clone();
        move || {
            revision.get();
            form.value(field)
        }
    };
    let on_input = {
        let form = form.clone();
        move |ev: ev::Event| {
            form.set_field(field, event_target_value(&ev));
            revision.update(|r| *r += 1);
        }
    };

    view! {
        <div class="form-group">
            <label for=field.name()>{field.label()}</label>
            <input
                type=input_type
                id=field.name()
                placeholder=field.placeholder()
                prop:value=current
                on:input=on_input
            />
            {field_error(form, field, revision)}
        </div>
    }
}

fn field_error(form: Rc<WebForm>, field: Field, revision: RwSignal<u64>) -> impl IntoView {
    move || {
        revision.get();
        form.error(field)
            .map(|e| view! { <p class="form-message">{e.message}</p> })
    }
}
