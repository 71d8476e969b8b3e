use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    pub subtitle: AttrValue,
    pub title: AttrValue,
}

#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <div class="section-heading">
            <style>
                {r#"
                    .section-heading {
                        margin-bottom: 3rem;
                    }
                    .section-heading__subtitle {
                        display: block;
                        color: #FFE600;
                        font-weight: 700;
                        font-size: 0.875rem;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                        animation: headingRise 0.5s ease-out both;
                    }
                    .section-heading__title {
                        margin-top: 0.5rem;
                        font-size: clamp(2.25rem, 5vw, 3rem);
                        font-weight: 900;
                        letter-spacing: -0.05em;
                        color: #fff;
                        animation: headingRise 0.6s ease-out 0.05s both;
                    }
                    @keyframes headingRise {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                "#}
            </style>
            <span class="section-heading__subtitle">{ props.subtitle.clone() }</span>
            <h2 class="section-heading__title">{ props.title.clone() }</h2>
        </div>
    }
}
