use yew::prelude::*;

use crate::components::animated_logo::AnimatedLogo;
use crate::state::shell::View;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub view: View,
    pub compact: bool,
    pub menu_open: bool,
    pub on_navigate: Callback<View>,
    pub on_toggle_menu: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { view, compact, menu_open, on_navigate, on_toggle_menu } = props;

    let go = |target: View| {
        let on_navigate = on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(target);
        })
    };

    let toggle_menu = {
        let on_toggle_menu = on_toggle_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_menu.emit(());
        })
    };

    html! {
        <nav class={classes!("top-nav", compact.then(|| "compact"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        z-index: 100;
                        padding: 2rem 0;
                        transition: all 0.5s ease;
                    }
                    .top-nav.compact {
                        padding: 1rem 0;
                    }
                    .nav-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                    }
                    .nav-bar {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        backdrop-filter: blur(24px);
                        -webkit-backdrop-filter: blur(24px);
                        transition: all 0.5s ease;
                        border: 1px solid transparent;
                    }
                    .top-nav.compact .nav-bar {
                        background: rgba(255, 255, 255, 0.05);
                        border-color: rgba(255, 255, 255, 0.1);
                        border-radius: 9999px;
                        padding: 0.75rem 2rem;
                    }
                    .nav-logo {
                        background: none;
                        border: none;
                        cursor: pointer;
                        padding: 0;
                    }
                    .nav-links {
                        display: flex;
                        gap: 2.5rem;
                        font-size: 10px;
                        font-weight: 900;
                        letter-spacing: 0.2em;
                        text-transform: uppercase;
                    }
                    .nav-link {
                        background: none;
                        border: none;
                        color: #9ca3af;
                        font: inherit;
                        letter-spacing: inherit;
                        text-transform: inherit;
                        cursor: pointer;
                        transition: color 0.2s ease;
                    }
                    .nav-link:hover,
                    .nav-link.active {
                        color: #FFE600;
                    }
                    .nav-inquire {
                        background: #fff;
                        color: #000;
                        border: none;
                        padding: 0.5rem 1.5rem;
                        border-radius: 9999px;
                        font-size: 10px;
                        font-weight: 900;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                        cursor: pointer;
                        transition: all 0.2s ease;
                    }
                    .nav-inquire:hover {
                        background: #FFE600;
                        transform: scale(1.05);
                    }
                    .burger-menu {
                        display: none;
                        background: none;
                        border: none;
                        color: #fff;
                        font-size: 1.5rem;
                        cursor: pointer;
                    }
                    .burger-menu span:not(.burger-close) {
                        display: block;
                        width: 24px;
                        height: 2px;
                        margin: 5px 0;
                        background: #fff;
                    }
                    @media (max-width: 768px) {
                        .nav-links,
                        .nav-inquire {
                            display: none;
                        }
                        .burger-menu {
                            display: block;
                        }
                    }
                "#}
            </style>
            <div class="nav-content">
                <div class="nav-bar">
                    <button class="nav-logo" onclick={go(View::Home)}>
                        <AnimatedLogo />
                    </button>

                    <div class="nav-links">
                        {
                            for View::ALL.iter().map(|target| html! {
                                <button
                                    class={classes!("nav-link", (target == view).then(|| "active"))}
                                    onclick={go(*target)}
                                >
                                    { target.nav_label() }
                                </button>
                            })
                        }
                    </div>

                    <button class="nav-inquire" onclick={go(View::Contact)}>
                        {"Inquire"}
                    </button>

                    <button class="burger-menu" onclick={toggle_menu}>
                        {
                            if *menu_open {
                                html! { <span class="burger-close">{"✕"}</span> }
                            } else {
                                html! {
                                    <>
                                        <span></span>
                                        <span></span>
                                        <span></span>
                                    </>
                                }
                            }
                        }
                    </button>
                </div>
            </div>
        </nav>
    }
}
