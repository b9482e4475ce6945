use yew::prelude::*;
use web_sys::MouseEvent;
use yew::{Children, Properties};

use crate::content::FAQ;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    icon: AttrValue,
    question: AttrValue,
    #[prop_or(true)]
    initially_open: bool,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| props.initially_open);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("card", "faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle}>
                <span class="faq-icon">{props.icon.to_string()}</span>
                <span class="question-text">{props.question.to_string()}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    html! {
        <section class="faq">
            <div class="section-inner narrow">
                <div class="section-heading">
                    <h2>{"Got Questions? I've Got Answers! 🤔"}</h2>
                    <p class="muted">{"Everything you need to know about working together"}</p>
                </div>

                <div class="faq-grid">
                    { for FAQ.iter().map(|entry| html! {
                        <FaqItem key={entry.question} icon={entry.icon} question={entry.question}>
                            { for entry.answer.iter().map(|line| html! { <p>{*line}</p> }) }
                        </FaqItem>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .faq {
                    background: #f9fafb;
                    padding: 5rem 1rem;
                }

                .faq-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 1.5rem;
                }

                .faq-item {
                    overflow: hidden;
                    transition: box-shadow 0.3s ease;
                }

                .faq-item:hover {
                    box-shadow: 0 10px 24px rgba(15, 23, 42, 0.08);
                }

                .faq-question {
                    width: 100%;
                    padding: 1.25rem 1.5rem;
                    background: none;
                    border: none;
                    color: #111827;
                    font-size: 1rem;
                    font-weight: 600;
                    text-align: left;
                    cursor: pointer;
                    display: flex;
                    gap: 0.75rem;
                    align-items: center;
                }

                .question-text {
                    flex: 1;
                }

                .toggle-icon {
                    color: #0ea5e9;
                    font-size: 1.25rem;
                }

                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.4s ease;
                    padding: 0 1.5rem;
                }

                .faq-item.open .faq-answer {
                    max-height: 600px;
                    padding: 0 1.5rem 1.25rem;
                }

                .faq-answer p {
                    color: #4b5563;
                    font-size: 0.9rem;
                    line-height: 1.6;
                    margin: 0 0 0.25rem 0;
                }

                @media (max-width: 768px) {
                    .faq-grid {
                        grid-template-columns: 1fr;
                    }

                    .faq-question {
                        padding: 1rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
