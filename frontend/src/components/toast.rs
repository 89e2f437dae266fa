use gloo::timers::callback::Timeout;
use yew::prelude::*;

/// How long a toast stays on screen.
const TOAST_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Info => "toast info",
            ToastKind::Success => "toast success",
            ToastKind::Warning => "toast warning",
            ToastKind::Error => "toast error",
        }
    }
}

/// A transient notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    /// Creation timestamp; makes back-to-back identical messages distinct so
    /// the expiry timer restarts
    pub id: i64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Properties, PartialEq)]
pub struct ToastHostProps {
    pub toast: Option<Toast>,
    pub on_expire: Callback<()>,
}

/// Renders the current toast and expires it after [`TOAST_MS`].
///
/// The timer is dropped (cancelled) whenever the toast changes, so a stale
/// timer never clears a newer notification early.
#[function_component(ToastHost)]
pub fn toast_host(props: &ToastHostProps) -> Html {
    let on_expire = props.on_expire.clone();
    use_effect_with(props.toast.clone(), move |toast| {
        let timer = toast
            .as_ref()
            .map(|_| Timeout::new(TOAST_MS, move || on_expire.emit(())));
        move || drop(timer)
    });

    match props.toast.as_ref() {
        Some(toast) => html! {
            <div class={toast.kind.class()} role="status">{&toast.message}</div>
        },
        None => html! {},
    }
}
