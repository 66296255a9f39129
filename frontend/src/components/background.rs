use yew::prelude::*;

/// Fixed decorative layer behind all sections: soft gradient, two drifting
/// orbs and a noise overlay. Purely visual.
#[function_component(Background)]
pub fn background() -> Html {
    html! {
        <div class="background" aria-hidden="true">
            <style>
                {r#"
                    .background {
                        position: fixed;
                        inset: 0;
                        z-index: -1;
                        overflow: hidden;
                        background: #000;
                    }
                    .background-gradient {
                        position: absolute;
                        inset: 0;
                        background: radial-gradient(ellipse at top, rgba(249, 115, 22, 0.12), transparent 60%);
                    }
                    .background-orb {
                        position: absolute;
                        width: 32rem;
                        height: 32rem;
                        border-radius: 50%;
                        filter: blur(120px);
                        opacity: 0.25;
                        animation: drift 20s ease-in-out infinite alternate;
                    }
                    .orb-one {
                        top: -8rem;
                        left: -8rem;
                        background: #f97316;
                    }
                    .orb-two {
                        bottom: -10rem;
                        right: -8rem;
                        background: #ea580c;
                        animation-duration: 26s;
                    }
                    .background-noise {
                        position: absolute;
                        inset: 0;
                        opacity: 0.04;
                        background-image: repeating-radial-gradient(circle at 0 0, #fff 0, #fff 1px, transparent 1px, transparent 3px);
                    }
                    @keyframes drift {
                        from { transform: translate(0, 0) scale(1); }
                        to { transform: translate(6rem, 4rem) scale(1.15); }
                    }
                "#}
            </style>
            <div class="background-gradient"></div>
            <div class="background-orb orb-one"></div>
            <div class="background-orb orb-two"></div>
            <div class="background-noise"></div>
        </div>
    }
}
