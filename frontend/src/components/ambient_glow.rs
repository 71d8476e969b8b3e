use yew::prelude::*;

#[function_component(AmbientGlow)]
pub fn ambient_glow() -> Html {
    html! {
        <div class="ambient-glow">
            <style>
                {r#"
                    .ambient-glow {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        height: 100%;
                        overflow: hidden;
                        z-index: -10;
                        pointer-events: none;
                    }
                    .ambient-glow__blob {
                        position: absolute;
                        width: 60%;
                        height: 60%;
                        border-radius: 50%;
                        filter: blur(150px);
                        animation: glowPulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
                    }
                    .ambient-glow__blob--top {
                        top: -10%;
                        left: -10%;
                        background: rgba(255, 230, 0, 0.1);
                    }
                    .ambient-glow__blob--bottom {
                        bottom: -10%;
                        right: -10%;
                        background: rgba(255, 215, 0, 0.05);
                        animation-delay: 2s;
                    }
                    @keyframes glowPulse {
                        50% { opacity: 0.5; }
                    }
                "#}
            </style>
            <div class="ambient-glow__blob ambient-glow__blob--top" />
            <div class="ambient-glow__blob ambient-glow__blob--bottom" />
        </div>
    }
}
