use yew::prelude::*;

use crate::content::{DIFFERENTIATORS, VALUES};

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="about">
            <div class="section-inner">
                <div class="section-heading">
                    <h2>{"The Story Behind the Magic 🪄"}</h2>
                    <p class="muted">
                        {"Spoiler alert: It involves a lot of coffee and an unhealthy obsession with perfect pixels!"}
                    </p>
                </div>

                <div class="about-grid">
                    <div class="card about-story">
                        <div class="about-greeting">
                            <div class="greeting-icon">{"👋"}</div>
                            <div>
                                <h3>{"Nice to meet you!"}</h3>
                                <p class="muted small">{"Your new favorite work buddy"}</p>
                            </div>
                        </div>
                        <p class="muted">
                            {"Every brand has a voice and every inbox has potential (even that scary one with 10,000 unread emails 😅). I'm your friendly neighborhood virtual assistant who happens to be slightly obsessed with making everything beautiful and functional."}
                        </p>
                        <p class="muted">
                            {"I take the tasks that make you want to hide under a blanket and transform them into streamlined systems that actually spark joy. Think Marie Kondo meets your favorite designer! ✨"}
                        </p>
                    </div>

                    <div class="about-side">
                        <div class="different">
                            <h4>{"What Makes Me Different? 🌟"}</h4>
                            <ul>
                                { for DIFFERENTIATORS.iter().map(|point| html! {
                                    <li><span class="dot"></span><span class="muted">{*point}</span></li>
                                }) }
                            </ul>
                        </div>

                        <div>
                            <h4>{"My M.A.R.I.A.M Values 💎"}</h4>
                            <div class="values">
                                { for VALUES.iter().map(|v| html! {
                                    <span class="badge value-badge" title={v.letter.to_string()}>
                                        {format!("{} {}", v.emoji, v.value)}
                                    </span>
                                }) }
                            </div>
                        </div>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .about {
                    background: #f9fafb;
                    padding: 5rem 1rem;
                }
                .about-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }
                .about-story {
                    padding: 2rem;
                    box-shadow: 0 20px 40px rgba(15, 23, 42, 0.12);
                }
                .about-greeting {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }
                .about-greeting h3 { margin: 0; font-size: 1rem; }
                .greeting-icon {
                    width: 3rem;
                    height: 3rem;
                    background: #f0f9ff;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.5rem;
                }
                .different {
                    background: #f0f9ff;
                    border-radius: 1rem;
                    padding: 1.5rem;
                    margin-bottom: 1.5rem;
                }
                .different ul {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                }
                .different li {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.75rem;
                    margin-bottom: 0.75rem;
                }
                .dot {
                    width: 0.5rem;
                    height: 0.5rem;
                    background: #38bdf8;
                    border-radius: 50%;
                    margin-top: 0.5rem;
                    flex-shrink: 0;
                }
                .values {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                }
                .value-badge { background: #f0f9ff; color: #334155; }
                @media (max-width: 1024px) {
                    .about-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </section>
    }
}
