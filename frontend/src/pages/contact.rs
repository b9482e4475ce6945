use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, MouseEvent};

use crate::components::dialog::Dialog;
use crate::config;
use crate::contact::controller::ContactForm;
use crate::contact::model::Field;

#[derive(Properties, PartialEq)]
pub struct ContactSectionProps {
    pub form: ContactForm,
    pub on_edit: Callback<(Field, String)>,
    pub on_submit: Callback<()>,
    pub on_dismiss_error: Callback<()>,
}

#[function_component(ContactSection)]
pub fn contact_section(props: &ContactSectionProps) -> Html {
    let form = &props.form;
    let locked = form.is_locked();

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let edit_input = |field: Field| {
        let on_edit = props.on_edit.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_edit.emit((field, input.value()));
        })
    };

    let edit_message = {
        let on_edit = props.on_edit.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            on_edit.emit((Field::Message, input.value()));
        })
    };

    let dismiss_error = {
        let on_dismiss_error = props.on_dismiss_error.clone();
        Callback::from(move |_: MouseEvent| on_dismiss_error.emit(()))
    };

    let phones = config::CONTACT_PHONES.join(" • ");

    html! {
        <section id="contact" class="contact">
            <div class="section-inner contact-grid">
                <div class="contact-intro">
                    <h2>{"Ready to Start Our Adventure? 🚀"}</h2>
                    <p class="contact-lead">
                        {"Let's turn your to-do list into a ta-da list! Drop me a line and let's create something amazing together."}
                    </p>

                    <div class="channels">
                        <a class="channel" href={format!("mailto:{}", config::CONTACT_EMAIL)}>
                            <span class="channel-icon">{"✉"}</span>
                            <div>
                                <p class="channel-title">{"Email Me!"}</p>
                                <p class="channel-value">{config::CONTACT_EMAIL}</p>
                            </div>
                        </a>
                        <div class="channel">
                            <span class="channel-icon">{"☎"}</span>
                            <div>
                                <p class="channel-title">{"Call Me Maybe?"}</p>
                                <p class="channel-value">{phones}</p>
                            </div>
                        </div>
                        <a class="channel" href={config::linkedin_url()} target="_blank" rel="noopener">
                            <span class="channel-icon">{"in"}</span>
                            <div>
                                <p class="channel-title">{"Let's Connect!"}</p>
                                <p class="channel-value">{config::LINKEDIN_HANDLE}</p>
                            </div>
                        </a>
                    </div>
                </div>

                <div class="card contact-card">
                    <h3>{"Let's Chat! ☕"}</h3>
                    {
                        if let Some(notice) = form.error_notice() {
                            html! {
                                <div class="error-message" role="alert">
                                    <span>{notice}</span>
                                    <button class="notice-close" aria-label="Dismiss" onclick={dismiss_error}>{"×"}</button>
                                </div>
                            }
                        } else if let Some(field) = form.invalid_field() {
                            html! {
                                <div class="error-message" role="alert">
                                    {format!("Please check your {} and try again.", field)}
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                    <form class="contact-form" onsubmit={onsubmit}>
                        <label for="contact-name">{"Your Name"}</label>
                        <input
                            id="contact-name"
                            type="text"
                            name={Field::Name.key()}
                            required={true}
                            disabled={locked}
                            placeholder="What should I call you?"
                            value={form.input().name.clone()}
                            oninput={edit_input(Field::Name)}
                        />

                        <label for="contact-email">{"Email"}</label>
                        <input
                            id="contact-email"
                            type="email"
                            name={Field::Email.key()}
                            required={true}
                            disabled={locked}
                            placeholder="your@email.com"
                            value={form.input().email.clone()}
                            oninput={edit_input(Field::Email)}
                        />

                        <label for="contact-message">{"What's on your mind?"}</label>
                        <textarea
                            id="contact-message"
                            rows="4"
                            name={Field::Message.key()}
                            required={true}
                            disabled={locked}
                            placeholder="Tell me about your project or just say hi! 👋"
                            value={form.input().message.clone()}
                            oninput={edit_message}
                        />

                        <button type="submit" class="btn btn-sky btn-block" disabled={locked}>
                            {
                                if locked {
                                    html! { <><span class="spinner"></span>{" Sending..."}</> }
                                } else {
                                    html! { "Send My Message! ✨" }
                                }
                            }
                        </button>
                    </form>
                </div>
            </div>

            <style>
                {r#"
                .contact {
                    padding: 5rem 1rem;
                    background: linear-gradient(135deg, #1e293b, #0f172a);
                    color: #ffffff;
                }
                .contact-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: start;
                }
                .contact-intro h2 { font-size: 2.25rem; margin-top: 0; }
                .contact-lead { color: #cbd5e1; line-height: 1.6; }
                .channels { margin-top: 2rem; }
                .channel {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    margin-bottom: 1.25rem;
                    color: inherit;
                    text-decoration: none;
                }
                .channel-icon {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 50%;
                    background: rgba(14, 165, 233, 0.2);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-weight: 700;
                }
                .channel-title { margin: 0; font-weight: 600; }
                .channel-value { margin: 0; color: #cbd5e1; font-size: 0.9rem; }
                .contact-card {
                    color: #111827;
                    padding: 2rem;
                }
                .contact-card h3 { margin-top: 0; }
                .contact-form label {
                    display: block;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #374151;
                    margin: 1rem 0 0.4rem;
                }
                .contact-form input,
                .contact-form textarea {
                    width: 100%;
                    box-sizing: border-box;
                    padding: 0.75rem 1rem;
                    border: 1px solid #e5e7eb;
                    border-radius: 0.5rem;
                    font: inherit;
                }
                .contact-form input:focus,
                .contact-form textarea:focus {
                    outline: none;
                    border-color: #38bdf8;
                    box-shadow: 0 0 0 3px rgba(56, 189, 248, 0.25);
                }
                .contact-form input:disabled,
                .contact-form textarea:disabled {
                    background: #f3f4f6;
                    cursor: not-allowed;
                }
                .contact-form button[type="submit"] { margin-top: 1.5rem; }
                .error-message {
                    display: flex;
                    justify-content: space-between;
                    gap: 1rem;
                    background: #fef2f2;
                    color: #b91c1c;
                    border: 1px solid #fecaca;
                    border-radius: 0.5rem;
                    padding: 0.75rem 1rem;
                    font-size: 0.9rem;
                }
                .notice-close {
                    background: none;
                    border: none;
                    color: inherit;
                    font-size: 1.2rem;
                    cursor: pointer;
                }
                .spinner {
                    display: inline-block;
                    width: 1rem;
                    height: 1rem;
                    border: 2px solid rgba(255, 255, 255, 0.3);
                    border-radius: 50%;
                    border-top-color: #fff;
                    animation: spin 1s linear infinite;
                    vertical-align: middle;
                }
                @keyframes spin { to { transform: rotate(360deg); } }
                .success-check {
                    width: 4rem;
                    height: 4rem;
                    margin: 0 auto 1rem;
                    border-radius: 50%;
                    background: #dcfce7;
                    color: #16a34a;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 2rem;
                }
                .success-actions {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    margin-top: 1.5rem;
                }
                @media (max-width: 1024px) {
                    .contact-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct SuccessDialogProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub on_explore: Callback<()>,
}

#[function_component(SuccessDialog)]
pub fn success_dialog(props: &SuccessDialogProps) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let explore = {
        let on_explore = props.on_explore.clone();
        Callback::from(move |_: MouseEvent| on_explore.emit(()))
    };

    html! {
        <Dialog
            open={props.open}
            on_close={props.on_close.clone()}
            title="Message Sent! 🎉"
            description={Some(AttrValue::from("Thanks for reaching out! I'll get back to you within 24-48 hours. Can't wait to chat about your project! ☕"))}
        >
            <div class="success-check">{"✓"}</div>
            <div class="success-actions">
                <button class="btn btn-dark btn-block" onclick={close}>{"Awesome! 🚀"}</button>
                <button class="btn btn-outline btn-block" onclick={explore}>{"Explore Services"}</button>
            </div>
        </Dialog>
    }
}
