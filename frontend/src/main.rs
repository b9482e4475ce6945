use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod content;
mod navigation;
mod components {
    pub mod dialog;
}
mod contact {
    pub mod controller;
    pub mod error;
    pub mod model;
    pub mod transport;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod faq;
    pub mod hero;
    pub mod portfolio;
    pub mod services;
}

use components::dialog::Sheet;
use navigation::Section;
use pages::portfolio::Portfolio;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Portfolio page");
            html! { <Portfolio /> }
        },
        Route::NotFound => {
            // Single page site: anything unknown gets the portfolio too
            info!("Unknown path, rendering Portfolio page");
            html! { <Portfolio /> }
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub menu_open: bool,
    pub on_menu_change: Callback<bool>,
    pub on_navigate: Callback<Section>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { menu_open, on_menu_change, on_navigate } = props;
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let listener = web_sys::window().map(|window| {
                let scroll_callback = Closure::<dyn Fn()>::new(move || {
                    if let Some(win) = web_sys::window() {
                        if let Ok(scroll_y) = win.scroll_y() {
                            is_scrolled.set(scroll_y > 40.0);
                        }
                    }
                });
                if let Err(e) = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref()) {
                    log::warn!("Could not watch scrolling: {:?}", e);
                }
                (window, scroll_callback)
            });

            move || {
                if let Some((window, scroll_callback)) = listener {
                    if let Err(e) = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref()) {
                        log::warn!("Could not stop watching scrolling: {:?}", e);
                    }
                }
            }
        }, ());
    }

    let open_menu = {
        let on_menu_change = on_menu_change.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_menu_change.emit(true);
        })
    };

    let close_menu = {
        let on_menu_change = on_menu_change.clone();
        Callback::from(move |_: ()| on_menu_change.emit(false))
    };

    let go_to = |section: Section| {
        let on_navigate = on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(section);
        })
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <div class="nav-logo">{config::BRAND}</div>

                <div class="nav-links">
                    { for Section::ALL.iter().map(|section| html! {
                        <button class="nav-link" onclick={go_to(*section)}>{section.nav_label()}</button>
                    }) }
                </div>

                <button class="burger-menu" aria-label="Open navigation" onclick={open_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>

            <Sheet
                open={*menu_open}
                on_close={close_menu}
                title="Navigation"
                description={Some(AttrValue::from("Navigate to different sections"))}
            >
                <div class="sheet-links">
                    { for Section::ALL.iter().map(|section| html! {
                        <button class="sheet-link" onclick={go_to(*section)}>{section.sheet_label()}</button>
                    }) }
                </div>
            </Sheet>

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 1rem;
                    left: 50%;
                    transform: translateX(-50%);
                    z-index: 50;
                    width: 100%;
                    max-width: 32rem;
                    padding: 0 1rem;
                    box-sizing: border-box;
                }
                .nav-content {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    background: rgba(255, 255, 255, 0.9);
                    backdrop-filter: blur(12px);
                    border: 1px solid #e0f2fe;
                    border-radius: 9999px;
                    padding: 0.75rem 1.5rem;
                    box-shadow: 0 10px 24px rgba(15, 23, 42, 0.1);
                    transition: box-shadow 0.3s ease;
                }
                .top-nav.scrolled .nav-content {
                    box-shadow: 0 14px 32px rgba(15, 23, 42, 0.18);
                }
                .nav-logo {
                    font-size: 0.875rem;
                    font-weight: 600;
                    color: #334155;
                }
                .nav-links {
                    display: flex;
                    gap: 1.5rem;
                }
                .nav-link, .sheet-link {
                    background: none;
                    border: none;
                    cursor: pointer;
                    color: #4b5563;
                    transition: color 0.3s ease;
                }
                .nav-link { font-size: 0.75rem; }
                .nav-link:hover, .sheet-link:hover { color: #0ea5e9; }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 3px;
                    background: none;
                    border: none;
                    padding: 0.5rem;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 16px;
                    height: 2px;
                    background: #334155;
                }
                .sheet-links {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    margin-top: 1.5rem;
                }
                .sheet-link {
                    text-align: left;
                    padding: 0.5rem 0;
                    font-size: 1rem;
                }
                @media (max-width: 768px) {
                    .nav-links { display: none; }
                    .burger-menu { display: flex; }
                }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::get_log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
