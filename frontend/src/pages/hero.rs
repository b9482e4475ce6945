use yew::prelude::*;
use web_sys::MouseEvent;

use crate::components::dialog::Dialog;
use crate::content::{PORTFOLIO, STATS};
use crate::navigation::{self, Section};

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub portfolio_open: bool,
    pub on_portfolio_change: Callback<bool>,
    pub on_navigate: Callback<Section>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let open_portfolio = {
        let on_portfolio_change = props.on_portfolio_change.clone();
        Callback::from(move |_: MouseEvent| on_portfolio_change.emit(true))
    };

    let close_portfolio = {
        let on_portfolio_change = props.on_portfolio_change.clone();
        Callback::from(move |_: ()| on_portfolio_change.emit(false))
    };

    let get_in_touch = {
        let on_portfolio_change = props.on_portfolio_change.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| {
            on_portfolio_change.emit(false);
            on_navigate.emit(Section::Contact);
        })
    };

    let start = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Section::Contact))
    };

    let download_cv = Callback::from(|_: MouseEvent| navigation::download_cv());

    html! {
        <section class="hero">
            <div class="hero-bubbles">
                <div class="bubble bubble-a"></div>
                <div class="bubble bubble-b"></div>
                <div class="bubble bubble-c"></div>
            </div>

            <div class="hero-grid">
                <div class="hero-copy">
                    <div class="availability">{"⭐ Available for new projects"}</div>
                    <h1>
                        {"Hey, I'm "}<br />
                        <span class="accent">{"Mariam!"}</span>{" ✨"}
                    </h1>
                    <p class="hero-tagline">
                        {"I turn digital chaos into organized bliss and boring brands into eye candy. Virtual assistant by day, design wizard by night! 🌙"}
                    </p>

                    <div class="hero-actions">
                        <button class="btn btn-dark" onclick={start}>
                            <span class="wide-only">{"Start Your Glow-Up"}</span>
                            <span class="narrow-only">{"Get Started"}</span>
                            {" →"}
                        </button>
                        <button class="btn btn-outline" onclick={open_portfolio}>
                            <span class="wide-only">{"See My Magic ✨"}</span>
                            <span class="narrow-only">{"Portfolio ✨"}</span>
                        </button>
                        <button class="btn btn-outline" onclick={download_cv}>
                            <span class="wide-only">{"Download CV"}</span>
                            <span class="narrow-only">{"CV"}</span>
                            {" ⬇"}
                        </button>
                    </div>

                    <div class="hero-stats">
                        { for STATS.iter().map(|stat| html! {
                            <div class="stat">
                                <div class="stat-value">{stat.value}</div>
                                <div class="stat-label">{stat.label}</div>
                            </div>
                        }) }
                    </div>
                </div>

                <div class="hero-photo">
                    <div class="photo-frame">
                        <div class="photo-avatar"></div>
                        <p class="photo-caption">{"Professional Photo"}</p>
                        <p class="photo-note">{"Coming Soon!"}</p>
                    </div>
                    <div class="photo-badge photo-badge-top">{"🎨"}</div>
                    <div class="photo-badge photo-badge-bottom">{"📄"}</div>
                </div>
            </div>

            <Dialog
                open={props.portfolio_open}
                on_close={close_portfolio}
                title="My Portfolio ✨"
                description={Some(AttrValue::from("A collection of my favorite projects and designs that made clients go \"WOW!\" 🎉"))}
                class={classes!("wide")}
            >
                <div class="portfolio-grid">
                    { for PORTFOLIO.iter().map(|item| html! {
                        <div class="card portfolio-card">
                            <div class="portfolio-thumb">
                                <div class="thumb-dot"></div>
                                <p>{"Project Image"}</p>
                            </div>
                            <span class="badge">{item.category}</span>
                            <h3>{item.title}</h3>
                            <p class="muted">{item.description}</p>
                        </div>
                    }) }
                </div>
                <div class="portfolio-footer">
                    <p class="muted">{"Want to see more? Let's chat about your project!"}</p>
                    <button class="btn btn-dark" onclick={get_in_touch}>{"Get In Touch 🚀"}</button>
                </div>
            </Dialog>

            <style>
                {r#"
                .hero {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    position: relative;
                    overflow: hidden;
                    padding: 6rem 1rem 2rem;
                }
                .hero-bubbles {
                    position: absolute;
                    inset: 0;
                    opacity: 0.05;
                    pointer-events: none;
                }
                .bubble {
                    position: absolute;
                    border-radius: 50%;
                }
                .bubble-a { top: 5rem; left: 5rem; width: 8rem; height: 8rem; background: #bae6fd; }
                .bubble-b { bottom: 10rem; right: 5rem; width: 6rem; height: 6rem; background: #93c5fd; }
                .bubble-c { top: 50%; left: 33%; width: 4rem; height: 4rem; background: #e0f2fe; }
                .hero-grid {
                    max-width: 80rem;
                    margin: 0 auto;
                    width: 100%;
                    display: grid;
                    grid-template-columns: 7fr 5fr;
                    gap: 3rem;
                    align-items: center;
                }
                .availability {
                    display: inline-flex;
                    background: #f0f9ff;
                    color: #334155;
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    font-size: 0.875rem;
                    margin-bottom: 1.5rem;
                }
                .hero h1 {
                    font-size: 4rem;
                    font-weight: 700;
                    color: #111827;
                    line-height: 1.1;
                    margin: 0 0 1.5rem 0;
                }
                .accent { color: #0ea5e9; }
                .hero-tagline {
                    font-size: 1.25rem;
                    color: #4b5563;
                    line-height: 1.6;
                    max-width: 42rem;
                    margin-bottom: 2rem;
                }
                .hero-actions {
                    display: flex;
                    gap: 1rem;
                    flex-wrap: wrap;
                    margin-bottom: 2rem;
                }
                .hero-stats {
                    display: flex;
                    gap: 1.5rem;
                }
                .stat { text-align: center; }
                .stat-value { font-weight: 700; color: #0ea5e9; font-size: 1.25rem; }
                .stat-label { font-size: 0.875rem; color: #4b5563; }
                .hero-photo {
                    position: relative;
                    display: flex;
                    justify-content: center;
                }
                .photo-frame {
                    width: 20rem;
                    height: 24rem;
                    background: linear-gradient(135deg, #f0f9ff, #dbeafe);
                    border: 4px solid #ffffff;
                    border-radius: 1.5rem;
                    box-shadow: 0 25px 50px rgba(15, 23, 42, 0.25);
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    color: #6b7280;
                }
                .photo-avatar {
                    width: 5rem;
                    height: 5rem;
                    background: #ffffff;
                    border-radius: 50%;
                    margin-bottom: 1rem;
                }
                .photo-caption { font-weight: 500; margin: 0; }
                .photo-note { font-size: 0.75rem; margin: 0; }
                .photo-badge {
                    position: absolute;
                    background: #ffffff;
                    border-radius: 50%;
                    padding: 0.75rem;
                    box-shadow: 0 10px 20px rgba(15, 23, 42, 0.15);
                }
                .photo-badge-top { top: -1rem; right: 2rem; }
                .photo-badge-bottom { bottom: -1rem; left: 2rem; }
                .portfolio-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 1.5rem;
                    margin-top: 1.5rem;
                }
                .portfolio-thumb {
                    height: 8rem;
                    background: linear-gradient(135deg, #e0f2fe, #bfdbfe);
                    border-radius: 0.5rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    color: #6b7280;
                    font-size: 0.75rem;
                    margin-bottom: 1rem;
                }
                .thumb-dot {
                    width: 2rem;
                    height: 2rem;
                    background: #ffffff;
                    border-radius: 50%;
                }
                .portfolio-footer {
                    margin-top: 1.5rem;
                    text-align: center;
                }
                .narrow-only { display: none; }
                @media (max-width: 1024px) {
                    .hero-grid {
                        grid-template-columns: 1fr;
                        text-align: center;
                    }
                    .hero-photo { order: -1; }
                    .hero-actions, .hero-stats { justify-content: center; }
                }
                @media (max-width: 640px) {
                    .hero h1 { font-size: 2.25rem; }
                    .hero-tagline { font-size: 1rem; }
                    .hero-actions { flex-direction: column; }
                    .portfolio-grid { grid-template-columns: 1fr; }
                    .wide-only { display: none; }
                    .narrow-only { display: inline; }
                }
                "#}
            </style>
        </section>
    }
}
