use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;
use crate::state::shell::View;
use crate::state::stage::ViewStage;

#[derive(Properties, PartialEq)]
pub struct ViewTransitionProps {
    pub view: View,
    pub render: Callback<View, Html>,
}

/// Swaps the rendered view with an exit/enter animation. The incoming view
/// is mounted on the same render as the state change; the outgoing one
/// stays behind, inert, until its exit timer fires.
#[function_component(ViewTransition)]
pub fn view_transition(props: &ViewTransitionProps) -> Html {
    let stage = use_mut_ref(|| ViewStage::new(props.view));
    let exits_finished = use_state(|| 0u64);

    stage.borrow_mut().show(props.view);
    let leaving = stage.borrow().leaving().map(|slot| slot.generation);

    {
        let stage = stage.clone();
        let exits_finished = exits_finished.setter();
        use_effect_with_deps(
            move |leaving: &Option<u64>| {
                let timeout = leaving.map(|generation| {
                    Timeout::new(config::VIEW_EXIT_MS, move || {
                        if stage.borrow_mut().finish_exit(generation) {
                            exits_finished.set(generation);
                        }
                    })
                });
                // A newer switch or an unmount cancels the pending exit.
                move || drop(timeout)
            },
            leaving,
        );
    }

    let stage = stage.borrow();
    html! {
        <div class="view-stage">
            <style>
                {format!(r#"
                    .view-stage {{
                        position: relative;
                    }}
                    .view-slot.view-enter {{
                        animation: viewIn {exit}ms ease-out both;
                    }}
                    .view-slot.view-exit {{
                        position: absolute;
                        top: 0;
                        left: 0;
                        width: 100%;
                        pointer-events: none;
                        animation: viewOut {exit}ms ease-in both;
                    }}
                    @keyframes viewIn {{
                        from {{ opacity: 0; }}
                        to {{ opacity: 1; }}
                    }}
                    @keyframes viewOut {{
                        from {{ opacity: 1; }}
                        to {{ opacity: 0; }}
                    }}
                "#, exit = config::VIEW_EXIT_MS)}
            </style>
            {
                for stage.slots().map(|(slot, phase)| html! {
                    <div key={slot.key()} class={classes!("view-slot", phase.class())}>
                        { props.render.emit(slot.view) }
                    </div>
                })
            }
        </div>
    }
}
