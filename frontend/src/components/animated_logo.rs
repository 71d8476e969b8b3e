use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogoLabel {
    #[default]
    Full,
    Short,
}

impl LogoLabel {
    pub fn toggled(self) -> Self {
        match self {
            LogoLabel::Full => LogoLabel::Short,
            LogoLabel::Short => LogoLabel::Full,
        }
    }
}

impl Reducible for LogoLabel {
    type Action = ();

    fn reduce(self: Rc<Self>, _: ()) -> Rc<Self> {
        Rc::new(self.toggled())
    }
}

#[derive(Properties, PartialEq)]
pub struct AnimatedLogoProps {
    /// Fires after every label swap.
    #[prop_or_default]
    pub on_swap: Callback<()>,
}

#[function_component(AnimatedLogo)]
pub fn animated_logo(props: &AnimatedLogoProps) -> Html {
    let label = use_reducer(LogoLabel::default);

    {
        let label = label.dispatcher();
        let on_swap = props.on_swap.clone();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(config::LOGO_SWAP_MS, move || {
                    label.dispatch(());
                    on_swap.emit(());
                });
                // Dropping the handle clears the interval.
                move || drop(interval)
            },
            (),
        );
    }

    let text = match *label {
        LogoLabel::Full => html! {
            <span key="full" class="logo-label logo-label--full">
                {"umair"}<span class="accent">{"_vision"}</span>
            </span>
        },
        LogoLabel::Short => html! {
            <span key="short" class="logo-label logo-label--short">{"vision"}</span>
        },
    };

    // Each label remounts on swap, so one keyframe run spans its whole slot:
    // slide in, hold, then slide up and out just before the next label.
    let slide_pct = config::LOGO_SLIDE_MS * 100 / config::LOGO_SWAP_MS;

    html! {
        <div class="animated-logo">
            <style>
                {format!(r#"
                    .animated-logo {{
                        position: relative;
                        height: 3.5rem;
                        overflow: hidden;
                        display: flex;
                        align-items: center;
                        padding: 0 1.5rem;
                    }}
                    .logo-label {{
                        font-size: clamp(1.5rem, 3vw, 1.875rem);
                        font-weight: 900;
                        letter-spacing: -0.05em;
                        text-transform: uppercase;
                        font-style: italic;
                        padding-right: 1rem;
                        animation: logoCycle {swap}ms cubic-bezier(0.65, 0, 0.35, 1) both;
                    }}
                    .logo-label--full {{ color: #fff; }}
                    .logo-label--short {{ color: #FFE600; }}
                    .logo-label .accent {{ color: #FFE600; }}
                    @keyframes logoCycle {{
                        0% {{ transform: translateY(30px); opacity: 0; }}
                        {slide}% {{ transform: translateY(0); opacity: 1; }}
                        {hold}% {{ transform: translateY(0); opacity: 1; }}
                        100% {{ transform: translateY(-30px); opacity: 0; }}
                    }}
                "#,
                    swap = config::LOGO_SWAP_MS,
                    slide = slide_pct,
                    hold = 100 - slide_pct,
                )}
            </style>
            { text }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_alternates() {
        let label = LogoLabel::default();
        assert_eq!(label, LogoLabel::Full);
        assert_eq!(label.toggled(), LogoLabel::Short);
        assert_eq!(label.toggled().toggled(), LogoLabel::Full);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use std::cell::Cell;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount_root() -> web_sys::Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        root
    }

    #[wasm_bindgen_test]
    async fn swaps_label_on_the_interval_and_stops_after_teardown() {
        let root = mount_root();
        let swaps = Rc::new(Cell::new(0u32));
        let on_swap = {
            let swaps = swaps.clone();
            Callback::from(move |_: ()| swaps.set(swaps.get() + 1))
        };
        let handle =
            yew::Renderer::<AnimatedLogo>::with_root_and_props(root.clone(), AnimatedLogoProps { on_swap })
                .render();

        TimeoutFuture::new(0).await;
        assert!(root.query_selector(".logo-label--full").unwrap().is_some());
        assert_eq!(swaps.get(), 0);

        TimeoutFuture::new(config::LOGO_SWAP_MS + 100).await;
        assert!(root.query_selector(".logo-label--short").unwrap().is_some());
        assert_eq!(swaps.get(), 1);

        handle.destroy();
        TimeoutFuture::new(config::LOGO_SWAP_MS + 100).await;
        assert_eq!(swaps.get(), 1, "interval kept firing after teardown");
        assert!(root.query_selector(".animated-logo").unwrap().is_none());
    }
}
