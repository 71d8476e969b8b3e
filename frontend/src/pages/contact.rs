use log::info;
use yew::prelude::*;

use crate::components::glass_card::GlassCard;
use crate::components::section_heading::SectionHeading;
use crate::config;

/// Contact view. The form is uncontrolled and has nowhere to deliver to;
/// submitting only keeps the browser from reloading the page.
#[function_component(Contact)]
pub fn contact() -> Html {
    let on_submit = Callback::from(|e: SubmitEvent| {
        e.prevent_default();
        info!("contact form submitted, no delivery target configured");
    });

    html! {
        <div class="page contact">
            <style>
                {r#"
                    .contact__grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(22rem, 1fr));
                        gap: 4rem;
                    }
                    .contact__pitch {
                        color: #9ca3af;
                        font-size: 1.125rem;
                        line-height: 1.6;
                        margin-bottom: 2rem;
                    }
                    .contact__channels {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }
                    .channel {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                    }
                    .channel__icon {
                        width: 3rem;
                        height: 3rem;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: rgba(255, 230, 0, 0.1);
                        border: 1px solid rgba(255, 230, 0, 0.2);
                        color: #FFE600;
                    }
                    .channel__label {
                        color: #6b7280;
                        font-size: 0.875rem;
                    }
                    .channel__value {
                        font-size: 1.125rem;
                        font-weight: 700;
                    }
                    .contact-form-card {
                        padding: 3rem;
                        border-color: rgba(255, 230, 0, 0.1);
                    }
                    .contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }
                    .contact-form__row {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(12rem, 1fr));
                        gap: 1.5rem;
                    }
                    .field {
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                    }
                    .field label {
                        color: #FFE600;
                        font-size: 0.75rem;
                        font-weight: 700;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                    }
                    .field input,
                    .field select,
                    .field textarea {
                        width: 100%;
                        box-sizing: border-box;
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 0.75rem;
                        padding: 0.75rem 1rem;
                        color: #fff;
                        outline: none;
                        transition: border-color 0.2s ease;
                    }
                    .field select {
                        background: #000;
                    }
                    .field textarea {
                        height: 8rem;
                        resize: none;
                    }
                    .field input:focus,
                    .field select:focus,
                    .field textarea:focus {
                        border-color: #FFE600;
                    }
                    .contact-form__submit {
                        width: 100%;
                        padding: 1rem;
                        border: none;
                        border-radius: 0.75rem;
                        background: #FFE600;
                        color: #000;
                        font-weight: 900;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                        cursor: pointer;
                        box-shadow: 0 10px 40px rgba(255, 230, 0, 0.15);
                        transition: background 0.2s ease;
                    }
                    .contact-form__submit:hover {
                        background: #FFD700;
                    }
                "#}
            </style>
            <div class="contact__grid">
                <div>
                    <SectionHeading subtitle="Invest in Vision" title="Scale your brand today." />
                    <p class="contact__pitch">
                        {"High-performance editing is an investment, not an expense. Let's discuss how we can skyrocket your retention and brand value."}
                    </p>
                    <div class="contact__channels">
                        <div class="channel">
                            <div class="channel__icon">{"✉"}</div>
                            <div>
                                <p class="channel__label">{"Secure Line"}</p>
                                <p class="channel__value">{ config::CONTACT_EMAIL }</p>
                            </div>
                        </div>
                        <div class="channel">
                            <div class="channel__icon">{"◎"}</div>
                            <div>
                                <p class="channel__label">{"Instagram"}</p>
                                <p class="channel__value">{ config::INSTAGRAM_HANDLE }</p>
                            </div>
                        </div>
                    </div>
                </div>

                <GlassCard class={classes!("contact-form-card")}>
                    <form class="contact-form" onsubmit={on_submit}>
                        <div class="contact-form__row">
                            <div class="field">
                                <label>{"Client Name"}</label>
                                <input type="text" placeholder="Enter name" />
                            </div>
                            <div class="field">
                                <label>{"Email Address"}</label>
                                <input type="email" placeholder="Enter email" />
                            </div>
                        </div>
                        <div class="field">
                            <label>{"Budget Range"}</label>
                            <select>
                                { for config::BUDGET_RANGES.iter().map(|range| html! { <option>{ *range }</option> }) }
                            </select>
                        </div>
                        <div class="field">
                            <label>{"Project Details"}</label>
                            <textarea placeholder="Briefly describe your goals..." />
                        </div>
                        <button type="submit" class="contact-form__submit">{"Initiate Project"}</button>
                    </form>
                </GlassCard>
            </div>
        </div>
    }
}
