use log::info;
use yew::prelude::*;

mod config;
mod listener;
mod state {
    pub mod gallery;
    pub mod shell;
    pub mod stage;
    pub mod trail;
}
mod components {
    pub mod ambient_glow;
    pub mod animated_logo;
    pub mod footer;
    pub mod glass_card;
    pub mod mobile_menu;
    pub mod mouse_trail;
    pub mod nav;
    pub mod section_heading;
    pub mod view_transition;
}
mod pages {
    pub mod contact;
    pub mod home;
    pub mod projects;
}

use components::{
    ambient_glow::AmbientGlow,
    footer::Footer,
    mobile_menu::MobileMenu,
    mouse_trail::MouseTrail,
    nav::Nav,
    view_transition::ViewTransition,
};
use pages::{contact::Contact, home::Home, projects::Projects};
use state::shell::{ShellAction, ShellState, View};

fn switch(view: View, on_navigate: &Callback<View>) -> Html {
    match view {
        View::Home => html! { <Home on_navigate={on_navigate.clone()} /> },
        View::Projects => html! { <Projects /> },
        View::Contact => html! { <Contact /> },
    }
}

#[function_component]
fn App() -> Html {
    let shell = use_reducer_eq(ShellState::default);

    listener::use_window_scroll({
        let shell = shell.dispatcher();
        Callback::from(move |offset: f64| shell.dispatch(ShellAction::Scrolled(offset)))
    });

    let on_navigate = {
        let shell = shell.dispatcher();
        Callback::from(move |view: View| shell.dispatch(ShellAction::Navigate(view)))
    };

    let on_toggle_menu = {
        let shell = shell.dispatcher();
        Callback::from(move |_: ()| shell.dispatch(ShellAction::ToggleMenu))
    };

    let render = {
        let on_navigate = on_navigate.clone();
        Callback::from(move |view: View| switch(view, &on_navigate))
    };

    html! {
        <div class="site">
            <style>
                {r#"
                    body {
                        margin: 0;
                        background: #050505;
                    }
                    .site {
                        min-height: 100vh;
                        background: #050505;
                        color: #fff;
                        font-family: ui-sans-serif, system-ui, -apple-system, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                        overflow-x: hidden;
                    }
                    .site ::selection {
                        background: #FFE600;
                        color: #000;
                    }
                    .page {
                        padding: 8rem 1.5rem 5rem;
                        max-width: 80rem;
                        margin: 0 auto;
                        color: #fff;
                    }
                "#}
            </style>
            <MouseTrail />
            <AmbientGlow />
            <Nav
                view={shell.view}
                compact={shell.compact}
                menu_open={shell.menu_open}
                on_navigate={on_navigate.clone()}
                on_toggle_menu={on_toggle_menu}
            />
            <MobileMenu open={shell.menu_open} on_navigate={on_navigate} />
            <main>
                <ViewTransition view={shell.view} render={render} />
            </main>
            <Footer />
        </div>
    }
}

fn main() {
    // Panics go to the browser console instead of vanishing in wasm.
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!(format!("error initializing log: {}", e));
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Element, HtmlElement};

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount() -> Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        yew::Renderer::<App>::with_root(root.clone()).render();
        root
    }

    fn click(root: &Element, selector: &str) {
        root.query_selector(selector)
            .unwrap()
            .unwrap_or_else(|| panic!("nothing matches {}", selector))
            .dyn_into::<HtmlElement>()
            .unwrap()
            .click();
    }

    fn text(root: &Element, selector: &str) -> Option<String> {
        root.query_selector(selector).unwrap().and_then(|el| el.text_content())
    }

    fn visible_cards(root: &Element) -> u32 {
        root.query_selector(".view-enter")
            .unwrap()
            .map(|stage| stage.get_elements_by_class_name("project-card").length())
            .unwrap_or(0)
    }

    async fn settle() {
        TimeoutFuture::new(config::VIEW_EXIT_MS + 50).await;
    }

    #[wasm_bindgen_test]
    async fn archive_filter_and_return_resets_the_gallery() {
        let root = mount();
        settle().await;
        assert_eq!(text(&root, ".nav-link.active").as_deref(), Some("Home"));

        click(&root, ".cta--ghost");
        settle().await;
        assert_eq!(text(&root, ".nav-link.active").as_deref(), Some("Portfolio"));
        assert_eq!(text(&root, ".filter-button.selected").as_deref(), Some("All"));
        assert_eq!(visible_cards(&root), 6);

        click(&root, ".view-enter .filter-button:nth-child(2)");
        settle().await;
        assert_eq!(visible_cards(&root), 1);
        assert_eq!(
            text(&root, ".view-enter .project-card h3").as_deref(),
            Some("YouTube Style Videos")
        );

        click(&root, ".nav-link:nth-child(3)");
        settle().await;
        assert_eq!(text(&root, ".nav-link.active").as_deref(), Some("Consult"));
        assert!(root.query_selector(".contact-form").unwrap().is_some());

        click(&root, ".nav-link:nth-child(2)");
        settle().await;
        assert_eq!(text(&root, ".filter-button.selected").as_deref(), Some("All"));
        assert_eq!(visible_cards(&root), 6);
    }

    #[wasm_bindgen_test]
    async fn mobile_menu_closes_as_it_navigates() {
        let root = mount();
        settle().await;
        assert!(root.query_selector(".mobile-menu").unwrap().is_none());

        click(&root, ".burger-menu");
        TimeoutFuture::new(0).await;
        assert!(root.query_selector(".mobile-menu").unwrap().is_some());

        click(&root, ".mobile-menu__link:nth-child(3)");
        TimeoutFuture::new(0).await;
        // Closed in the shell at once; the overlay only plays its exit.
        assert!(root.query_selector(".mobile-menu--closing").unwrap().is_some());
        assert!(root.query_selector(".burger-close").unwrap().is_none());
        assert_eq!(text(&root, ".nav-link.active").as_deref(), Some("Consult"));

        TimeoutFuture::new(config::MENU_EXIT_MS + 50).await;
        assert!(root.query_selector(".mobile-menu").unwrap().is_none());
    }
}
