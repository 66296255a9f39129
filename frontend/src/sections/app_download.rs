use yew::prelude::*;

use crate::content::site;
use crate::motion::observer::use_reveal;
use crate::motion::projector::{project, Stagger, VariantTable};
use crate::motion::view_state::Threshold;

const THRESHOLD: f64 = 0.3;
const FEATURES: Stagger = Stagger::new(0.3, 0.1);
const BADGES: Stagger = Stagger::new(0.5, 0.1);

#[function_component(AppDownload)]
pub fn app_download() -> Html {
    let node = use_node_ref();
    let entered = use_reveal(node.clone(), Threshold::clamped(THRESHOLD));
    let site = site();
    let copy = project(entered, &VariantTable::slide_x(-50.0).duration(0.8)).to_css();
    let mockup = project(entered, &VariantTable::slide_x(50.0).duration(0.8).delay(0.2)).to_css();
    let rise = VariantTable::fade_up(20.0);

    html! {
        <section id="app-download" class="section" ref={node}>
            <div class="two-column">
                <div class="download-copy" style={copy}>
                    <h2 class="section-title">{"GET THE "}<span class="accent">{"APP"}</span></h2>
                    <p class="section-subtitle">
                        {"Order from your favorite Hatta restaurants anytime, anywhere. Fast, secure, and built for our community."}
                    </p>

                    <ul class="download-features">
                        { for site.app.features.iter().enumerate().map(|(i, feature)| html! {
                            <li key={feature.text.clone()} style={FEATURES.child_css(entered, i, &rise)}>
                                <span class="card-icon small">{feature.icon.glyph()}</span>
                                {&feature.text}
                            </li>
                        }) }
                    </ul>

                    <div class="store-badges">
                        <a
                            class="store-badge"
                            href={site.app.app_store_url.clone()}
                            target="_blank"
                            rel="noopener noreferrer"
                            style={BADGES.child_css(entered, 0, &rise)}
                        >
                            <span class="store-caption">{"Download on the"}</span>
                            <span class="store-name">{"App Store"}</span>
                        </a>
                        <a
                            class="store-badge"
                            href={site.app.play_store_url.clone()}
                            target="_blank"
                            rel="noopener noreferrer"
                            style={BADGES.child_css(entered, 1, &rise)}
                        >
                            <span class="store-caption">{"Get it on"}</span>
                            <span class="store-name">{"Google Play"}</span>
                        </a>
                    </div>
                </div>

                <div class="phone-mockup" style={mockup}>
                    <div class="phone-screen">
                        <div class="phone-brand">
                            {&site.brand.primary}
                            <span class="accent">{&site.brand.secondary}</span>
                        </div>
                        <p class="muted">{&site.brand.tagline}</p>
                        { for site.hero_stats.iter().map(|stat| html! {
                            <div class="phone-row" key={stat.label.clone()}>
                                <span>{stat.icon.glyph()}{" "}{&stat.label}</span>
                                <span class="accent">{&stat.value}</span>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
