use yew::prelude::*;

use crate::content::site;
use crate::motion::observer::use_reveal;
use crate::motion::projector::{Stagger, VariantTable};
use crate::motion::scroll::scroll_into_view;
use crate::motion::view_state::Threshold;

const THRESHOLD: f64 = 0.3;
const ITEMS: Stagger = Stagger::new(0.0, 0.2);

#[function_component(Hero)]
pub fn hero() -> Html {
    let node = use_node_ref();
    let entered = use_reveal(node.clone(), Threshold::clamped(THRESHOLD));
    let site = site();
    let item = VariantTable::fade_up(30.0).duration(0.8);

    let to_download = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_into_view("app-download");
    });

    html! {
        <section id="home" class="hero" ref={node}>
            <div class="hero-content">
                <h1 class="hero-title" style={ITEMS.child_css(entered, 0, &item)}>
                    <span>{&site.brand.primary}</span>
                    <span class="accent">{&site.brand.secondary}</span>
                </h1>
                <p class="hero-subtitle" style={ITEMS.child_css(entered, 1, &item)}>
                    {"Hatta's premier food delivery platform connecting you with the finest local restaurants, cafes, and bakeries."}
                </p>

                <div class="hero-stats" style={ITEMS.child_css(entered, 2, &item)}>
                    { for site.hero_stats.iter().map(|stat| html! {
                        <div class="hero-stat" key={stat.label.clone()}>
                            <span class="hero-stat-icon">{stat.icon.glyph()}</span>
                            <span class="hero-stat-value">{&stat.value}</span>
                            <span class="hero-stat-label">{&stat.label}</span>
                        </div>
                    }) }
                </div>

                <div class="hero-cta" style={ITEMS.child_css(entered, 3, &item)}>
                    <button class="primary-button" onclick={to_download}>
                        {"DOWNLOAD APP"}
                    </button>
                </div>
            </div>

            <div class="scroll-indicator enter-fade">
                <div class="scroll-indicator-wheel"></div>
            </div>
        </section>
    }
}
