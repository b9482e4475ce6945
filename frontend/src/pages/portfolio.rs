use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use log::debug;

use crate::Nav;
use crate::config;
use crate::content::ServiceKind;
use crate::contact::controller::{self, ContactForm};
use crate::contact::model::Field;
use crate::contact::transport::GlooTransport;
use crate::navigation::{self, Section};
use crate::pages::{
    about::About,
    contact::{ContactSection, SuccessDialog},
    faq::Faq,
    hero::Hero,
    services::Services,
};

/// The whole page. Every open/closed flag and the contact form state live
/// here and are handed down to the sections.
#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let menu_open = use_state(|| false);
    let portfolio_open = use_state(|| false);
    let open_service = use_state(|| None::<ServiceKind>);
    // Shared with the in-flight request; `refresh` re-renders after each change.
    let form = use_mut_ref(ContactForm::default);
    let refresh = use_force_update();
    let snapshot = form.borrow().clone();

    let navigate = {
        let menu_open = menu_open.clone();
        Callback::from(move |section: Section| {
            if navigation::scroll_to_section(section) {
                menu_open.set(false);
            }
        })
    };

    let on_menu_change = {
        let menu_open = menu_open.clone();
        Callback::from(move |open: bool| menu_open.set(open))
    };

    let on_portfolio_change = {
        let portfolio_open = portfolio_open.clone();
        Callback::from(move |open: bool| portfolio_open.set(open))
    };

    let on_service_select = {
        let open_service = open_service.clone();
        Callback::from(move |kind: Option<ServiceKind>| open_service.set(kind))
    };

    let on_edit = {
        let form = form.clone();
        let refresh = refresh.clone();
        Callback::from(move |(field, value): (Field, String)| {
            form.borrow_mut().edit(field, value);
            refresh.force_update();
        })
    };

    let on_submit = {
        let form = form.clone();
        let refresh = refresh.clone();
        Callback::from(move |_: ()| {
            let pending = controller::submit(&form, &GlooTransport, config::get_form_endpoint());
            refresh.force_update();
            let pending = match pending {
                Ok(pending) => pending,
                Err(rejected) => {
                    debug!("Not sending contact form: {}", rejected);
                    return;
                }
            };

            let refresh = refresh.clone();
            spawn_local(async move {
                if let Err(e) = pending.await {
                    debug!("Contact form left in failed state: {}", e);
                }
                refresh.force_update();
            });
        })
    };

    let on_dismiss_error = {
        let form = form.clone();
        let refresh = refresh.clone();
        Callback::from(move |_: ()| {
            form.borrow_mut().dismiss_error();
            refresh.force_update();
        })
    };

    let on_close_success = {
        let form = form.clone();
        let refresh = refresh.clone();
        Callback::from(move |_: ()| {
            form.borrow_mut().dismiss_confirmation();
            refresh.force_update();
        })
    };

    let on_explore_services = {
        let form = form.clone();
        let navigate = navigate.clone();
        Callback::from(move |_: ()| {
            form.borrow_mut().dismiss_confirmation();
            refresh.force_update();
            navigate.emit(Section::Services);
        })
    };

    html! {
        <div class="portfolio-page">
            <Nav
                menu_open={*menu_open}
                on_menu_change={on_menu_change}
                on_navigate={navigate.clone()}
            />
            <Hero
                portfolio_open={*portfolio_open}
                on_portfolio_change={on_portfolio_change}
                on_navigate={navigate.clone()}
            />
            <About />
            <Services
                open={*open_service}
                on_select={on_service_select}
                on_navigate={navigate.clone()}
            />
            <Faq />
            <ContactSection
                form={snapshot.clone()}
                on_edit={on_edit}
                on_submit={on_submit}
                on_dismiss_error={on_dismiss_error}
            />
            <SuccessDialog
                open={snapshot.confirmation_open()}
                on_close={on_close_success}
                on_explore={on_explore_services}
            />

            <footer class="footer">
                <p>{"© 2025 Matte & Milk. Made with lots of ☕, endless ✨, and a sprinkle of magic! 🪄"}</p>
            </footer>

            <style>
                {r#"
                body {
                    margin: 0;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    background: #ffffff;
                    color: #111827;
                }
                html {
                    scroll-behavior: smooth;
                }
                .section-inner {
                    max-width: 72rem;
                    margin: 0 auto;
                }
                .section-inner.narrow {
                    max-width: 64rem;
                }
                .section-heading {
                    text-align: center;
                    margin-bottom: 4rem;
                }
                .section-heading h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: #111827;
                    margin: 0 0 1rem 0;
                }
                .muted { color: #4b5563; line-height: 1.6; }
                .small { font-size: 0.875rem; }
                .card {
                    background: #ffffff;
                    border-radius: 1rem;
                    box-shadow: 0 1px 3px rgba(15, 23, 42, 0.08);
                }
                .badge {
                    display: inline-block;
                    background: #e0f2fe;
                    color: #0369a1;
                    border-radius: 9999px;
                    padding: 0.25rem 0.75rem;
                    font-size: 0.75rem;
                    font-weight: 500;
                }
                .btn {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.25rem;
                    padding: 0.75rem 1.5rem;
                    border-radius: 0.5rem;
                    font: inherit;
                    font-weight: 500;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .btn:disabled { opacity: 0.6; cursor: not-allowed; }
                .btn-dark { background: #1e293b; color: #ffffff; border: none; }
                .btn-dark:hover { background: #0f172a; }
                .btn-sky { background: #0ea5e9; color: #ffffff; border: none; }
                .btn-sky:hover:enabled { background: #0284c7; }
                .btn-outline { background: transparent; color: #0284c7; border: 1px solid #7dd3fc; }
                .btn-outline:hover { background: #f0f9ff; }
                .btn-block { width: 100%; }
                .footer {
                    text-align: center;
                    padding: 2rem 1rem;
                    color: #6b7280;
                    font-size: 0.875rem;
                    border-top: 1px solid #f3f4f6;
                }
                "#}
            </style>
        </div>
    }
}
