use dioxus::prelude::*;

/// How long a success toast stays up in the browser.
#[cfg(target_arch = "wasm32")]
const AUTO_DISMISS_MS: u32 = 5_000;

#[derive(Clone, Copy, PartialEq)]
pub enum ToastKind {
    Error,
    Success,
}

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub body: Option<String>,
    pub kind: ToastKind,
}

#[derive(Clone, Copy)]
pub struct Toasts {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl Toasts {
    pub fn push(&self, title: String, body: Option<String>, kind: ToastKind) -> u64 {
        let mut next_id = self.next_id;
        let id = (next_id)();
        next_id.set(id + 1);
        let toast = Toast {
            id,
            title,
            body,
            kind,
        };
        let mut toasts = self.toasts;
        toasts.with_mut(|items| items.push(toast));

        // Errors stay until dismissed.
        if kind != ToastKind::Error {
            schedule_dismiss(*self, id);
        }
        id
    }

    pub fn dismiss(&self, id: u64) {
        let mut toasts = self.toasts;
        toasts.with_mut(|items| items.retain(|toast| toast.id != id));
    }

    pub fn error(&self, title: String, body: Option<String>) {
        self.push(title, body, ToastKind::Error);
    }

    pub fn success(&self, title: String, body: Option<String>) {
        self.push(title, body, ToastKind::Success);
    }
}

#[cfg(target_arch = "wasm32")]
fn schedule_dismiss(toasts: Toasts, id: u64) {
    spawn(async move {
        gloo_timers::future::TimeoutFuture::new(AUTO_DISMISS_MS).await;
        toasts.dismiss(id);
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn schedule_dismiss(_toasts: Toasts, _id: u64) {}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toasts = use_signal(Vec::new);
    let next_id = use_signal(|| 1_u64);
    let ctx = Toasts { toasts, next_id };
    use_context_provider(|| ctx);

    rsx! {
        {children}
        ToastViewport { toasts: ctx.toasts }
    }
}

#[component]
fn ToastViewport(toasts: Signal<Vec<Toast>>) -> Element {
    let items = toasts();
    let dismiss = crate::use_texts().t("common.dismiss");
    rsx! {
        div { class: "toast_region", role: "status", "aria-live": "polite",
            for toast in items.iter() {
                div {
                    key: "{toast.id}",
                    class: match toast.kind {
                        ToastKind::Error => "toast toast_error",
                        ToastKind::Success => "toast toast_success",
                    },
                    div { class: "toast_content",
                        div { class: "toast_title", "{toast.title}" }
                        if let Some(body) = &toast.body {
                            div { class: "toast_body", "{body}" }
                        }
                    }
                    button {
                        class: "toast_close",
                        onclick: {
                            let id = toast.id;
                            let mut toasts = toasts;
                            move |_| {
                                toasts.with_mut(|items| items.retain(|t| t.id != id));
                            }
                        },
                        "{dismiss}"
                    }
                }
            }
        }
    }
}
