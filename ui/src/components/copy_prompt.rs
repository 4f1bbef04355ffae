use dioxus::prelude::*;

use crate::core::config::config;
use crate::core::{platform, timing};
use crate::error::ClipboardError;
use crate::t;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CopyStatus {
    Idle,
    Copied,
    Failed,
}

pub async fn copy_to_clipboard(payload: String) -> Result<(), ClipboardError> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let unavailable = |what: &str| ClipboardError::Unavailable(what.to_string());
        let window = web_sys::window().ok_or_else(|| unavailable("window"))?;
        let document = window.document().ok_or_else(|| unavailable("document"))?;
        let body = document.body().ok_or_else(|| unavailable("body"))?;

        let textarea = document
            .create_element("textarea")
            .map_err(|_| unavailable("textarea"))?
            .dyn_into::<web_sys::HtmlTextAreaElement>()
            .map_err(|_| unavailable("textarea cast"))?;
        textarea.set_value(&payload);
        let style = textarea.style();
        style.set_property("position", "fixed").ok();
        style.set_property("top", "0").ok();
        style.set_property("left", "0").ok();
        style.set_property("opacity", "0").ok();

        body.append_child(&textarea).ok();
        textarea.select();
        let copied = document.exec_command("copy").unwrap_or(false);
        textarea.remove();
        if copied {
            Ok(())
        } else {
            Err(ClipboardError::Blocked)
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use arboard::Clipboard;

        let mut clipboard =
            Clipboard::new().map_err(|err| ClipboardError::Unavailable(err.to_string()))?;
        clipboard
            .set_text(payload)
            .map_err(|err| ClipboardError::Unavailable(err.to_string()))
    }
}

/// Prompt block with a copy button; the status line clears itself.
#[component]
pub fn CopyPrompt() -> Element {
    let mut status = use_signal(|| CopyStatus::Idle);
    let mut generation = use_signal(|| 0u32);
    let prompt = t!("prompt-text");

    let on_copy = {
        let prompt = prompt.clone();
        move |_| {
            let payload = prompt.trim().to_string();
            let ticket = generation() + 1;
            generation.set(ticket);
            platform::spawn_future(async move {
                match copy_to_clipboard(payload).await {
                    Ok(()) => status.set(CopyStatus::Copied),
                    Err(err) => {
                        tracing::debug!(%err, "prompt copy failed");
                        status.set(CopyStatus::Failed);
                    }
                }
                timing::sleep_ms(config().effects.copy_status_ms).await;
                if *generation.peek() == ticket {
                    status.set(CopyStatus::Idle);
                }
            });
        }
    };

    let message = match status() {
        CopyStatus::Idle => String::new(),
        CopyStatus::Copied => t!("copy-done"),
        CopyStatus::Failed => t!("copy-failed"),
    };

    rsx! {
        div { class: "prompt",
            pre { id: "promptText", class: "prompt__text", "{prompt}" }
            div { class: "prompt__actions",
                button { id: "copyPrompt", class: "button button--accent", onclick: on_copy,
                    {t!("prompt-copy")}
                }
                span { id: "copyStatus", class: "prompt__status", role: "status", "{message}" }
            }
        }
    }
}
