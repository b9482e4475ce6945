use yew::prelude::*;
use web_sys::MouseEvent;

use crate::components::dialog::Dialog;
use crate::content::{Service, ServiceKind, SERVICES};
use crate::navigation::Section;

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    /// The service whose details dialog is showing, if any.
    pub open: Option<ServiceKind>,
    pub on_select: Callback<Option<ServiceKind>>,
    pub on_navigate: Callback<Section>,
}

#[function_component(Services)]
pub fn services(props: &ServicesProps) -> Html {
    html! {
        <section id="services" class="services">
            <div class="section-inner">
                <div class="section-heading">
                    <h2>{"How I Make Magic Happen ✨"}</h2>
                    <p class="muted">{"Three ways to make your work life infinitely better!"}</p>
                </div>

                <div class="services-grid">
                    { for SERVICES.iter().map(|service| service_card(service, props)) }
                </div>
            </div>

            <style>
                {r#"
                .services {
                    padding: 5rem 1rem;
                }
                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .service-card {
                    text-align: center;
                    padding: 2rem 1.5rem;
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }
                .service-card:hover {
                    transform: translateY(-4px);
                    box-shadow: 0 20px 40px rgba(15, 23, 42, 0.12);
                }
                .service-icon {
                    width: 4rem;
                    height: 4rem;
                    margin: 0 auto 1rem;
                    background: #f0f9ff;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.75rem;
                }
                .service-card h3 { margin: 0 0 0.25rem 0; }
                .service-highlights {
                    list-style: none;
                    padding: 0;
                    margin: 1.5rem 0;
                    color: #4b5563;
                    font-size: 0.9rem;
                }
                .service-highlights li { margin-bottom: 0.5rem; }
                .offerings {
                    list-style: none;
                    padding: 0;
                    margin: 0 0 1.5rem 0;
                }
                .offerings li {
                    display: flex;
                    gap: 0.5rem;
                    margin-bottom: 0.5rem;
                    color: #4b5563;
                }
                .offerings li::before {
                    content: '•';
                    color: #0ea5e9;
                }
                .service-dialog h4 { margin: 1.5rem 0 0.75rem 0; }
                @media (max-width: 1024px) {
                    .services-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </section>
    }
}

fn service_card(service: &'static Service, props: &ServicesProps) -> Html {
    let kind = service.kind;

    let open = {
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(Some(kind)))
    };

    let close = {
        let on_select = props.on_select.clone();
        Callback::from(move |_: ()| on_select.emit(None))
    };

    let get_started = {
        let on_select = props.on_select.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| {
            on_select.emit(None);
            on_navigate.emit(Section::Contact);
        })
    };

    html! {
        <div class="card service-card" key={service.title}>
            <div class="service-icon">{service.icon}</div>
            <h3>{service.title}</h3>
            <p class="muted">{service.tagline}</p>
            <ul class="service-highlights">
                { for service.highlights.iter().map(|h| html! { <li>{*h}</li> }) }
            </ul>
            <button class="btn btn-outline" onclick={open}>{service.button_label}</button>

            <Dialog
                open={props.open == Some(kind)}
                on_close={close}
                title={format!("{} {}", service.icon, service.dialog_title)}
                description={Some(AttrValue::from(service.dialog_description))}
                class={classes!("service-dialog")}
            >
                <h4>{service.offerings_heading}</h4>
                <ul class="offerings">
                    { for service.offerings.iter().map(|o| html! { <li><span>{*o}</span></li> }) }
                </ul>
                <h4>{service.audience_heading}</h4>
                <p class="muted">{service.audience}</p>
                <button class="btn btn-dark btn-block" onclick={get_started}>{service.call_to_action}</button>
            </Dialog>
        </div>
    }
}
