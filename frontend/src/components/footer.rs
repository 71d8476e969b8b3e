use yew::prelude::*;

const SOCIALS: [(&str, &str); 3] = [("Instagram", "◎"), ("Twitter", "𝕏"), ("YouTube", "▶")];

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        padding: 5rem 1.5rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.05);
                        background: rgba(0, 0, 0, 0.5);
                    }
                    .site-footer__inner {
                        max-width: 80rem;
                        margin: 0 auto;
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: space-between;
                        align-items: center;
                        gap: 2.5rem;
                    }
                    .site-footer__mark {
                        font-size: 1.875rem;
                        font-weight: 900;
                        letter-spacing: -0.05em;
                        text-transform: uppercase;
                        font-style: italic;
                        margin: 0 0 0.5rem;
                        color: #fff;
                    }
                    .site-footer__mark span { color: #FFE600; }
                    .site-footer__legal {
                        color: #6b7280;
                        font-size: 10px;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                    }
                    .site-footer__socials {
                        display: flex;
                        gap: 1rem;
                    }
                    .social-button {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 50%;
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        color: #fff;
                        cursor: pointer;
                        transition: border-color 0.2s ease;
                    }
                    .social-button:hover {
                        border-color: #FFE600;
                    }
                "#}
            </style>
            <div class="site-footer__inner">
                <div>
                    <h2 class="site-footer__mark">{"umair"}<span>{"_vision"}</span></h2>
                    <p class="site-footer__legal">
                        {"© 2026 Umair Vision Media. Building value through motion."}
                    </p>
                </div>
                <div class="site-footer__socials">
                    {
                        for SOCIALS.iter().map(|(name, glyph)| html! {
                            <button class="social-button" title={*name}>{ *glyph }</button>
                        })
                    }
                </div>
            </div>
        </footer>
    }
}
