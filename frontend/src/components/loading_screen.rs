use yew::prelude::*;
use gloo_timers::callback::Interval;
use web_sys::js_sys::Math;

use crate::boot::LoadingProgress;
use crate::config;
use crate::content::site;

#[derive(Clone, Copy, PartialEq)]
struct Particle {
    left: f64,
    top: f64,
    delay: f64,
}

impl Particle {
    fn random() -> Self {
        Self {
            left: Math::random() * 100.0,
            top: Math::random() * 100.0,
            delay: Math::random() * 2.0,
        }
    }

    fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; animation-delay: {:.2}s;",
            self.left, self.top, self.delay
        )
    }
}

/// Placeholder shown while the boot gate is closed. The bar is decoration:
/// it stops ticking at 100 and its timer is dropped on completion or unmount,
/// whichever comes first.
#[function_component(LoadingScreen)]
pub fn loading_screen() -> Html {
    let progress = use_reducer(|| LoadingProgress::new(config::PROGRESS_MAX_STEP));
    let particles = use_state(|| {
        (0..config::PARTICLE_COUNT)
            .map(|_| Particle::random())
            .collect::<Vec<_>>()
    });
    let complete = progress.is_complete();

    {
        let dispatcher = progress.dispatcher();
        use_effect_with_deps(
            move |complete| {
                let interval = if *complete {
                    None
                } else {
                    Some(Interval::new(config::PROGRESS_TICK_MS, move || {
                        dispatcher.dispatch(Math::random());
                    }))
                };
                move || drop(interval)
            },
            complete,
        );
    }

    let brand = &site().brand;

    html! {
        <div class="loading-screen">
            <style>
                {r#"
                    .loading-screen {
                        position: fixed;
                        inset: 0;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        background: #000;
                        z-index: 100;
                        overflow: hidden;
                    }
                    .loading-title {
                        font-size: clamp(2.5rem, 8vw, 5rem);
                        font-weight: 900;
                        letter-spacing: 0.05em;
                        margin-bottom: 2rem;
                        z-index: 1;
                    }
                    .loading-track {
                        width: min(20rem, 80vw);
                        height: 4px;
                        background: rgba(255, 255, 255, 0.1);
                        border-radius: 2px;
                        overflow: hidden;
                        z-index: 1;
                    }
                    .loading-bar {
                        height: 100%;
                        background: linear-gradient(90deg, #f97316, #fb923c);
                        transition: width 0.1s linear;
                    }
                    .loading-caption {
                        margin-top: 1rem;
                        color: rgba(255, 255, 255, 0.6);
                        font-size: 0.9rem;
                        animation-delay: 0.5s;
                        z-index: 1;
                    }
                    .loading-particles {
                        position: absolute;
                        inset: 0;
                        pointer-events: none;
                    }
                    .particle {
                        position: absolute;
                        width: 4px;
                        height: 4px;
                        border-radius: 50%;
                        background: #f97316;
                        opacity: 0;
                        animation: twinkle 2s ease-in-out infinite;
                    }
                    @keyframes twinkle {
                        0%, 100% { opacity: 0; transform: scale(0); }
                        50% { opacity: 1; transform: scale(1); }
                    }
                "#}
            </style>
            <h1 class="loading-title enter-pop">
                {&brand.primary}
                <span class="accent">{&brand.secondary}</span>
            </h1>
            <div
                class="loading-track"
                role="progressbar"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow={format!("{:.0}", progress.value())}
            >
                <div class="loading-bar" style={format!("width: {};", progress.percent())}></div>
            </div>
            <p class="loading-caption enter-fade">{"Initializing premium experience..."}</p>
            <div class="loading-particles">
                { for particles.iter().map(|particle| html! {
                    <div class="particle" style={particle.style()}></div>
                }) }
            </div>
        </div>
    }
}
