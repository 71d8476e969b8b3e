use gloo_timers::callback::Timeout;
use log::debug;
use yew::prelude::*;

use crate::components::section_heading::SectionHeading;
use crate::config;
use crate::state::gallery::{self, Filter, Selection, SelectionAction};
use crate::state::stage::Phase;

/// Project gallery. The filter lives here, so it starts over at `All`
/// every time the view is mounted.
#[function_component(Projects)]
pub fn projects() -> Html {
    let selection = use_reducer_eq(Selection::default);
    let filter = selection.filter();
    let exiting = selection.exiting();

    {
        let selection = selection.dispatcher();
        use_effect_with_deps(
            move |exiting: &Option<u64>| {
                let timeout = exiting.map(|generation| {
                    Timeout::new(config::CARD_EXIT_MS, move || {
                        selection.dispatch(SelectionAction::FinishExit(generation));
                    })
                });
                move || drop(timeout)
            },
            exiting,
        );
    }

    let choose = |choice: Filter| {
        let selection = selection.dispatcher();
        Callback::from(move |_: MouseEvent| {
            if filter != choice {
                debug!("gallery filter: {} ({} projects)", choice.label(), gallery::visible(choice).len());
            }
            selection.dispatch(SelectionAction::Choose(choice));
        })
    };

    html! {
        <div class="page projects">
            <style>
                {format!(r#"
                    .filters {{
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        margin-bottom: 3rem;
                    }}
                    .filter-button {{
                        padding: 0.5rem 1.5rem;
                        border-radius: 9999px;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: transparent;
                        color: #9ca3af;
                        font-size: 0.75rem;
                        font-weight: 700;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                        cursor: pointer;
                        transition: all 0.2s ease;
                    }}
                    .filter-button:hover {{
                        border-color: rgba(255, 230, 0, 0.5);
                    }}
                    .filter-button.selected {{
                        background: #FFE600;
                        color: #000;
                        border-color: #FFE600;
                    }}
                    .project-grid {{
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(20rem, 1fr));
                        gap: 2rem;
                    }}
                    .project-card {{
                        position: relative;
                        overflow: hidden;
                        border-radius: 1.5rem;
                        border: 1px solid rgba(255, 255, 255, 0.05);
                        transition: border-color 0.2s ease;
                    }}
                    .project-card.card-enter {{
                        animation: cardIn {exit}ms ease-out both;
                    }}
                    .project-card.card-exit {{
                        pointer-events: none;
                        animation: cardOut {exit}ms ease-in both;
                    }}
                    .project-card:hover {{
                        border-color: rgba(255, 230, 0, 0.3);
                    }}
                    .project-card__media {{
                        aspect-ratio: 16 / 9;
                        overflow: hidden;
                    }}
                    .project-card__media img {{
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        filter: grayscale(1);
                        transition: transform 0.7s ease, filter 0.7s ease;
                    }}
                    .project-card:hover img {{
                        transform: scale(1.1);
                        filter: grayscale(0);
                    }}
                    .project-card__overlay {{
                        position: absolute;
                        inset: 0;
                        display: flex;
                        flex-direction: column;
                        justify-content: flex-end;
                        padding: 1.5rem;
                        background: linear-gradient(to top, rgba(255, 230, 0, 0.9), rgba(0, 0, 0, 0.4), transparent);
                        opacity: 0;
                        transition: opacity 0.3s ease;
                    }}
                    .project-card:hover .project-card__overlay {{
                        opacity: 1;
                    }}
                    .project-card__tag {{
                        width: fit-content;
                        margin-bottom: 0.5rem;
                        padding: 0.125rem 0.5rem;
                        border-radius: 0.25rem;
                        background: #fff;
                        color: #000;
                        font-size: 10px;
                        font-weight: 900;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                    }}
                    .project-card h3 {{
                        font-size: 1.25rem;
                        font-weight: 900;
                        letter-spacing: -0.05em;
                        line-height: 1.2;
                    }}
                    .case-study {{
                        margin-top: 1rem;
                        background: none;
                        border: none;
                        padding: 0;
                        color: #fff;
                        font-size: 0.75rem;
                        font-weight: 900;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                        text-align: left;
                        cursor: pointer;
                    }}
                    @keyframes cardIn {{
                        from {{ opacity: 0; transform: scale(0.9); }}
                        to {{ opacity: 1; transform: scale(1); }}
                    }}
                    @keyframes cardOut {{
                        from {{ opacity: 1; transform: scale(1); }}
                        to {{ opacity: 0; transform: scale(0.9); }}
                    }}
                "#, exit = config::CARD_EXIT_MS)}
            </style>
            <SectionHeading subtitle="Success Stories" title="Project Archive" />

            <div class="filters">
                {
                    for Filter::CHOICES.iter().map(|choice| html! {
                        <button
                            class={classes!("filter-button", (*choice == filter).then(|| "selected"))}
                            onclick={choose(*choice)}
                        >
                            { choice.label() }
                        </button>
                    })
                }
            </div>

            <div class="project-grid">
                {
                    for selection.cards().into_iter().map(|(project, phase)| html! {
                        <div key={project.title} class={classes!("project-card", card_class(phase))}>
                            <div class="project-card__media">
                                <img src={config::asset(project.image)} alt={project.title} />
                            </div>
                            <div class="project-card__overlay">
                                <span class="project-card__tag">{ project.category.label() }</span>
                                <h3>{ project.title }</h3>
                                <button class="case-study">{"View Case Study →"}</button>
                            </div>
                        </div>
                    })
                }
            </div>
        </div>
    }
}

fn card_class(phase: Phase) -> &'static str {
    match phase {
        Phase::Entering => "card-enter",
        Phase::Leaving => "card-exit",
    }
}
