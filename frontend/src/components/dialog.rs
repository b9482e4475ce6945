use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

/// Closes the overlay on Escape while it is open.
#[hook]
fn use_escape_to_close(open: bool, on_close: Callback<()>) {
    use_event_with_window("keydown", move |e: KeyboardEvent| {
        if open && e.key() == "Escape" {
            on_close.emit(());
        }
    });
}

fn overlay_click(on_close: &Callback<()>) -> Callback<MouseEvent> {
    let on_close = on_close.clone();
    Callback::from(move |_: MouseEvent| on_close.emit(()))
}

// Clicks inside the panel must not reach the overlay
fn swallow_click() -> Callback<MouseEvent> {
    Callback::from(|e: MouseEvent| e.stop_propagation())
}

#[derive(Properties, PartialEq)]
pub struct DialogProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub title: AttrValue,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Dialog)]
pub fn dialog(props: &DialogProps) -> Html {
    use_escape_to_close(props.open, props.on_close.clone());

    if !props.open {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_close.emit(());
        })
    };

    html! {
        <div class="overlay" onclick={overlay_click(&props.on_close)}>
            <div class={classes!("dialog", props.class.clone())} role="dialog" aria-modal="true" onclick={swallow_click()}>
                <button class="overlay-close" aria-label="Close" onclick={close}>{"×"}</button>
                <div class="dialog-header">
                    <h2 class="dialog-title">{props.title.to_string()}</h2>
                    {
                        if let Some(description) = &props.description {
                            html! { <p class="dialog-description">{description.to_string()}</p> }
                        } else {
                            html! {}
                        }
                    }
                </div>
                { for props.children.iter() }
            </div>
            <style>{OVERLAY_CSS}</style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SheetProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub title: AttrValue,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

/// Slide-in panel from the right edge, used for the mobile nav.
#[function_component(Sheet)]
pub fn sheet(props: &SheetProps) -> Html {
    use_escape_to_close(props.open, props.on_close.clone());

    if !props.open {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="overlay" onclick={overlay_click(&props.on_close)}>
            <aside class="sheet" role="dialog" aria-modal="true" onclick={swallow_click()}>
                <button class="overlay-close" aria-label="Close" onclick={close}>{"×"}</button>
                <h2 class="dialog-title">{props.title.to_string()}</h2>
                {
                    if let Some(description) = &props.description {
                        html! { <p class="dialog-description">{description.to_string()}</p> }
                    } else {
                        html! {}
                    }
                }
                { for props.children.iter() }
            </aside>
            <style>{OVERLAY_CSS}</style>
        </div>
    }
}

const OVERLAY_CSS: &str = r#"
    .overlay {
        position: fixed;
        inset: 0;
        background: rgba(15, 23, 42, 0.55);
        display: flex;
        align-items: center;
        justify-content: center;
        z-index: 100;
        animation: overlayIn 0.2s ease-out;
    }
    @keyframes overlayIn {
        from { opacity: 0; }
        to { opacity: 1; }
    }
    .dialog {
        position: relative;
        background: #ffffff;
        border-radius: 16px;
        padding: 2rem;
        width: 95vw;
        max-width: 32rem;
        max-height: 90vh;
        overflow-y: auto;
        box-shadow: 0 24px 48px rgba(15, 23, 42, 0.25);
    }
    .dialog.wide {
        max-width: 56rem;
    }
    .dialog-title {
        font-size: 1.4rem;
        font-weight: 700;
        color: #111827;
        margin: 0 0 0.5rem 0;
    }
    .dialog-description {
        color: #4b5563;
        font-size: 0.95rem;
        margin: 0;
    }
    .overlay-close {
        position: absolute;
        top: 0.75rem;
        right: 1rem;
        background: none;
        border: none;
        font-size: 1.5rem;
        color: #6b7280;
        cursor: pointer;
    }
    .sheet {
        position: fixed;
        top: 0;
        right: 0;
        height: 100vh;
        width: 16rem;
        background: #ffffff;
        padding: 2rem 1.5rem;
        box-shadow: -8px 0 24px rgba(15, 23, 42, 0.15);
        animation: sheetIn 0.25s ease-out;
    }
    @keyframes sheetIn {
        from { transform: translateX(100%); }
        to { transform: translateX(0); }
    }
"#;
