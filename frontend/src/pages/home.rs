use yew::prelude::*;

use crate::components::glass_card::GlassCard;
use crate::config;
use crate::state::shell::View;

const FEATURES: [(&str, &str, &str); 3] = [
    ("⚡", "Viral Pacing", "Retention-optimized editing designed to hold viewer attention from frame one."),
    ("★", "Premium Color", "Professional grade grading that gives your content a high-budget cinematic feel."),
    ("▣", "Multi-Format", "Master files delivered for 9:16, 16:9, and 1:1 layouts simultaneously."),
];

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub on_navigate: Callback<View>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let view_archive = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(View::Projects))
    };

    html! {
        <div class="page home">
            <style>
                {r#"
                    .hero {
                        text-align: center;
                        margin-bottom: 8rem;
                    }
                    .avatar {
                        position: relative;
                        width: 10rem;
                        height: 10rem;
                        margin: 0 auto 2rem;
                    }
                    .avatar__glow {
                        position: absolute;
                        inset: 0;
                        border-radius: 50%;
                        background: #facc15;
                        filter: blur(40px);
                        opacity: 0.4;
                    }
                    .avatar img {
                        position: relative;
                        width: 10rem;
                        height: 10rem;
                        object-fit: cover;
                        border-radius: 50%;
                        border: 4px solid #facc15;
                    }
                    .badge {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.25rem 0.75rem;
                        border-radius: 9999px;
                        border: 1px solid rgba(255, 230, 0, 0.2);
                        background: rgba(255, 230, 0, 0.05);
                        color: #FFE600;
                        font-size: 0.75rem;
                        margin-bottom: 2rem;
                        animation: badgeIn 0.5s ease-out both;
                    }
                    .badge__dot {
                        width: 0.5rem;
                        height: 0.5rem;
                        border-radius: 50%;
                        background: #FFE600;
                        animation: glowPulse 2s infinite;
                    }
                    .hero h1 {
                        font-size: clamp(3.75rem, 10vw, 8rem);
                        font-weight: 900;
                        line-height: 0.9;
                        letter-spacing: -0.025em;
                        margin-bottom: 1.5rem;
                        animation: riseIn 0.6s ease-out 0.2s both;
                    }
                    .hero h1 .gradient {
                        background: linear-gradient(90deg, #FFE600, #FFD700, #FFFFFF);
                        -webkit-background-clip: text;
                        background-clip: text;
                        -webkit-text-fill-color: transparent;
                        font-style: italic;
                    }
                    .hero__pitch {
                        color: #9ca3af;
                        font-size: 1.25rem;
                        font-weight: 300;
                        line-height: 1.6;
                        max-width: 42rem;
                        margin: 0 auto 2.5rem;
                        animation: riseIn 0.6s ease-out 0.3s both;
                    }
                    .hero__pitch strong {
                        color: #FFE600;
                        text-decoration: underline;
                        text-underline-offset: 4px;
                    }
                    .hero__actions {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        justify-content: center;
                        animation: riseIn 0.6s ease-out 0.4s both;
                    }
                    .cta {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 1.25rem 2.5rem;
                        border-radius: 9999px;
                        font-weight: 900;
                        cursor: pointer;
                        transition: transform 0.2s ease;
                    }
                    .cta:hover { transform: scale(1.05); }
                    .cta:active { transform: scale(0.95); }
                    .cta--primary {
                        background: #FFE600;
                        color: #000;
                        border: none;
                        box-shadow: 0 0 30px rgba(255, 230, 0, 0.3);
                    }
                    .cta--ghost {
                        background: rgba(255, 255, 255, 0.05);
                        color: #fff;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .features {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
                        gap: 1.5rem;
                        margin-bottom: 8rem;
                    }
                    .feature {
                        padding: 2rem;
                        transition: border-color 0.2s ease;
                    }
                    .feature:hover { border-color: rgba(255, 230, 0, 0.4); }
                    .feature__icon {
                        display: inline-block;
                        margin-bottom: 1rem;
                        padding: 0.75rem;
                        border-radius: 0.75rem;
                        background: rgba(255, 230, 0, 0.1);
                        color: #FFE600;
                    }
                    .feature h3 {
                        font-size: 1.25rem;
                        font-weight: 700;
                        text-transform: uppercase;
                        letter-spacing: -0.05em;
                        margin-bottom: 0.5rem;
                    }
                    .feature p {
                        color: #9ca3af;
                        font-size: 0.875rem;
                        line-height: 1.6;
                    }
                    @keyframes badgeIn {
                        from { opacity: 0; transform: scale(0.8); }
                        to { opacity: 1; transform: scale(1); }
                    }
                    @keyframes riseIn {
                        from { opacity: 0; transform: translateY(30px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                "#}
            </style>
            <section class="hero">
                <div class="avatar">
                    <div class="avatar__glow"></div>
                    <img src={config::asset("profile.png")} alt="Profile" />
                </div>
                <div class="badge">
                    <span class="badge__dot"></span>
                    {"PREMIUM VIDEO SOLUTIONS"}
                </div>
                <h1>
                    {"High-Value"}<br />
                    <span class="gradient">{"Content."}</span>
                </h1>
                <p class="hero__pitch">
                    {"Visual storytelling that drives massive engagement. Optimized for the modern digital landscape by "}
                    <strong>{"umair_vision"}</strong>{"."}
                </p>
                <div class="hero__actions">
                    // No showreel is wired up yet.
                    <button class="cta cta--primary">{"Watch Showreel ▶"}</button>
                    <button class="cta cta--ghost" onclick={view_archive}>{"View Archive 🎞"}</button>
                </div>
            </section>

            <section class="features">
                {
                    for FEATURES.iter().map(|(icon, title, desc)| html! {
                        <GlassCard class={classes!("feature")}>
                            <div class="feature__icon">{ *icon }</div>
                            <h3>{ *title }</h3>
                            <p>{ *desc }</p>
                        </GlassCard>
                    })
                }
            </section>
        </div>
    }
}
