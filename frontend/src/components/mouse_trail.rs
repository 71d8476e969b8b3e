use gloo_timers::callback::Interval;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Date;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::listener;
use crate::state::trail::{Trail, TrailAction};

#[derive(Properties, PartialEq)]
pub struct MouseTrailProps {
    /// Fires after each move or sweep is handed to the trail.
    #[prop_or_default]
    pub on_dispatch: Callback<()>,
}

/// Fading dots that follow the pointer. Purely decorative: the overlay
/// never receives pointer events and shares no state with the app.
#[function_component(MouseTrail)]
pub fn mouse_trail(props: &MouseTrailProps) -> Html {
    let trail = use_reducer_eq(Trail::default);

    {
        let trail = trail.dispatcher();
        let on_dispatch = props.on_dispatch.clone();
        use_effect_with_deps(
            move |_| {
                let moved = {
                    let trail = trail.clone();
                    let on_dispatch = on_dispatch.clone();
                    listener::on_window("mousemove", move |event| {
                        let Some(event) = event.dyn_ref::<MouseEvent>() else {
                            return;
                        };
                        trail.dispatch(TrailAction::Moved {
                            x: f64::from(event.client_x()),
                            y: f64::from(event.client_y()),
                            at: Date::now(),
                        });
                        on_dispatch.emit(());
                    })
                };
                let sweep = Interval::new(config::TRAIL_SWEEP_MS, move || {
                    trail.dispatch(TrailAction::Sweep { now: Date::now() });
                    on_dispatch.emit(());
                });

                move || {
                    drop(moved);
                    drop(sweep);
                }
            },
            (),
        );
    }

    html! {
        <div class="mouse-trail">
            <style>
                {format!(r#"
                    .mouse-trail {{
                        position: fixed;
                        inset: 0;
                        pointer-events: none;
                        z-index: 9999;
                    }}
                    .trail-dot {{
                        position: absolute;
                        width: 8px;
                        height: 8px;
                        background-color: #FFE600;
                        border-radius: 50%;
                        filter: blur(4px);
                        box-shadow: 0 0 10px #FFE600;
                        transform: translate(-50%, -50%);
                        animation: trailFade {}ms ease-out forwards;
                    }}
                    @keyframes trailFade {{
                        from {{ opacity: 0.4; transform: translate(-50%, -50%) scale(1); }}
                        to {{ opacity: 0; transform: translate(-50%, -50%) scale(0.5); }}
                    }}
                "#, config::TRAIL_FADE_MS)}
            </style>
            {
                for trail.points().map(|point| html! {
                    <div
                        key={point.id.to_string()}
                        class="trail-dot"
                        style={format!("left: {}px; top: {}px;", point.x, point.y)}
                    />
                })
            }
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;
    use web_sys::MouseEventInit;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount_root() -> web_sys::Element {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        root
    }

    fn move_pointer(x: i32, y: i32) {
        let init = MouseEventInit::new();
        init.set_client_x(x);
        init.set_client_y(y);
        let event = MouseEvent::new_with_mouse_event_init_dict("mousemove", &init).unwrap();
        web_sys::window().unwrap().dispatch_event(&event).unwrap();
    }

    fn dots(root: &web_sys::Element) -> u32 {
        root.get_elements_by_class_name("trail-dot").length()
    }

    #[wasm_bindgen_test]
    async fn trail_is_bounded_and_fades_out() {
        let root = mount_root();
        let handle = yew::Renderer::<MouseTrail>::with_root(root.clone()).render();
        TimeoutFuture::new(0).await;
        assert_eq!(dots(&root), 0);

        for i in 0..40 {
            move_pointer(i, i);
        }
        TimeoutFuture::new(0).await;
        assert_eq!(dots(&root), config::TRAIL_CAPACITY as u32);

        TimeoutFuture::new(config::TRAIL_FADE_MS + 2 * config::TRAIL_SWEEP_MS).await;
        assert_eq!(dots(&root), 0);
        handle.destroy();
    }

    #[wasm_bindgen_test]
    async fn teardown_detaches_the_listener_and_the_sweep() {
        let root = mount_root();
        let dispatched = Rc::new(Cell::new(0u32));
        let on_dispatch = {
            let dispatched = dispatched.clone();
            Callback::from(move |_: ()| dispatched.set(dispatched.get() + 1))
        };
        let handle =
            yew::Renderer::<MouseTrail>::with_root_and_props(root.clone(), MouseTrailProps { on_dispatch })
                .render();
        TimeoutFuture::new(0).await;

        let before_move = dispatched.get();
        move_pointer(1, 1);
        assert_eq!(dispatched.get(), before_move + 1);

        // The sweep ticks on its own while mounted.
        let before_sweep = dispatched.get();
        TimeoutFuture::new(config::TRAIL_SWEEP_MS * 2 + 50).await;
        assert!(dispatched.get() > before_sweep);

        handle.destroy();
        let after_teardown = dispatched.get();
        move_pointer(5, 5);
        assert_eq!(dispatched.get(), after_teardown, "mousemove still handled after teardown");

        TimeoutFuture::new(config::TRAIL_SWEEP_MS * 2).await;
        assert_eq!(dispatched.get(), after_teardown, "sweep kept ticking after teardown");
    }
}
