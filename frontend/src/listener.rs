use gloo_events::EventListener;
use log::warn;
use web_sys::Event;
use yew::prelude::*;

/// Attaches `callback` to a window event. The listener stays attached for
/// as long as the returned value lives; dropping it detaches the callback.
/// Returns `None` when there is no window, in which case nothing listens.
pub fn on_window<F>(event_type: &'static str, callback: F) -> Option<EventListener>
where
    F: FnMut(&Event) + 'static,
{
    let Some(window) = web_sys::window() else {
        warn!("no window available, skipping {} listener", event_type);
        return None;
    };
    Some(EventListener::new(&window, event_type, callback))
}

/// Current vertical scroll offset of the page.
pub fn scroll_offset() -> Option<f64> {
    web_sys::window().and_then(|window| window.scroll_y().ok())
}

/// Reports the page scroll offset to `on_scroll` on every window scroll
/// while the calling component is mounted.
#[hook]
pub fn use_window_scroll(on_scroll: Callback<f64>) {
    use_effect_with_deps(
        move |_| {
            let scroll = on_window("scroll", move |_| {
                if let Some(offset) = scroll_offset() {
                    on_scroll.emit(offset);
                }
            });
            move || drop(scroll)
        },
        (),
    );
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn fire(event_type: &str) {
        let window = web_sys::window().unwrap();
        let event = Event::new(event_type).unwrap();
        window.dispatch_event(&event).unwrap();
    }

    #[wasm_bindgen_test]
    fn listener_fires_only_while_held() {
        let hits = Rc::new(Cell::new(0));
        let listener = {
            let hits = hits.clone();
            on_window("scroll", move |_| hits.set(hits.get() + 1))
        };
        assert!(listener.is_some());

        fire("scroll");
        fire("scroll");
        assert_eq!(hits.get(), 2);

        drop(listener);
        fire("scroll");
        assert_eq!(hits.get(), 2);
    }

    #[derive(Properties, PartialEq)]
    struct ScrollCounterProps {
        on_scroll: Callback<f64>,
    }

    #[function_component(ScrollCounter)]
    fn scroll_counter(props: &ScrollCounterProps) -> Html {
        use_window_scroll(props.on_scroll.clone());
        html! { <div class="scroll-counter" /> }
    }

    #[wasm_bindgen_test]
    async fn scroll_hook_detaches_when_the_component_unmounts() {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();

        let hits = Rc::new(Cell::new(0));
        let on_scroll = {
            let hits = hits.clone();
            Callback::from(move |_: f64| hits.set(hits.get() + 1))
        };
        let handle =
            yew::Renderer::<ScrollCounter>::with_root_and_props(root, ScrollCounterProps { on_scroll })
                .render();
        TimeoutFuture::new(0).await;

        fire("scroll");
        assert_eq!(hits.get(), 1);

        handle.destroy();
        TimeoutFuture::new(0).await;
        fire("scroll");
        fire("scroll");
        assert_eq!(hits.get(), 1, "scroll still handled after unmount");
    }

    #[wasm_bindgen_test]
    fn scroll_offset_is_readable() {
        assert!(scroll_offset().is_some());
    }
}
