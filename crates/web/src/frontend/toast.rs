//! Toast notifications rendered from a signal.

use leptos::*;

use cottonwaste_infra::{Notification, NotificationKind, Notifier};

/// Notifier that appends to a toast list signal.
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    toasts: RwSignal<Vec<Notification>>,
}

impl ToastNotifier {
    pub fn new(toasts: RwSignal<Vec<Notification>>) -> Self {
        Self { toasts }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, notification: Notification) {
        self.toasts.update(|t| t.push(notification));
    }
}

#[component]
pub fn ToastList(toasts: RwSignal<Vec<Notification>>) -> impl IntoView {
    view! {
        <ol class="toasts">
            {move || {
                toasts
                    .get()
                    .into_iter()
                    .enumerate()
                    .map(|(idx, toast)| {
                        let class = match toast.kind {
                            NotificationKind::Success => "toast",
                            NotificationKind::Destructive => "toast destructive",
                        };
                        view! {
                            <li class=class>
                                <div class="toast-title">{toast.title}</div>
                                <div class="toast-description">{toast.description}</div>
                                <button
                                    type="button"
                                    on:click=move |_| {
                                        toasts.update(|t| {
                                            if idx < t.len() {
                                                t.remove(idx);
                                            }
                                        })
                                    }
                                >
                                    "×"
                                </button>
                            </li>
                        }
                    })
                    .collect_view()
            }}
        </ol>
    }
}
