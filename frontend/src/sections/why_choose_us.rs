use yew::prelude::*;

use crate::components::section_header::SectionHeader;
use crate::content::{site, Icon};
use crate::motion::observer::use_reveal;
use crate::motion::projector::{project, Stagger, VariantTable};
use crate::motion::scroll::scroll_into_view;
use crate::motion::view_state::Threshold;

const THRESHOLD: f64 = 0.2;
const CARDS: Stagger = Stagger::new(0.0, 0.15);

#[function_component(WhyChooseUs)]
pub fn why_choose_us() -> Html {
    let node = use_node_ref();
    let entered = use_reveal(node.clone(), Threshold::clamped(THRESHOLD));
    let site = site();
    let card = VariantTable::fade_up(30.0);
    let bullet = VariantTable::slide_x(-10.0).duration(0.4);
    let cta = project(entered, &VariantTable::fade_up(20.0).delay(0.8)).to_css();

    let to_download = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_into_view("app-download");
    });

    html! {
        <section id="why-choose-us" class="section" ref={node}>
            <SectionHeader
                title="WHY CHOOSE "
                accent="US"
                subtitle="The trusted choice for food delivery in Hatta"
                entered={entered}
            />

            <div class="card-grid four">
                { for site.achievements.iter().enumerate().map(|(i, achievement)| html! {
                    <div class="card metric-card" key={achievement.label.clone()} style={CARDS.child_css(entered, i, &card)}>
                        <div class="card-icon">{achievement.icon.glyph()}</div>
                        <div class="metric-value">{&achievement.value}</div>
                        <div class="muted">{&achievement.label}</div>
                    </div>
                }) }
            </div>

            <div class="card-grid two">
                { for site.reasons.iter().enumerate().map(|(i, reason)| {
                    let bullets = Stagger::new(0.5 + 0.15 * i as f64, 0.1);
                    html! {
                        <article class="card reason-card" key={reason.title.clone()} style={CARDS.child_css(entered, i, &card)}>
                            <div class="card-icon">{reason.icon.glyph()}</div>
                            <div>
                                <h3>{&reason.title}</h3>
                                <p class="muted">{&reason.description}</p>
                                <ul class="feature-list">
                                    { for reason.features.iter().enumerate().map(|(j, feature)| html! {
                                        <li key={feature.clone()} style={bullets.child_css(entered, j, &bullet)}>
                                            <span class="accent">{Icon::CheckCircle.glyph()}</span>{" "}{feature}
                                        </li>
                                    }) }
                                </ul>
                            </div>
                        </article>
                    }
                }) }
            </div>

            <div class="section-cta" style={cta}>
                <button class="primary-button" onclick={to_download}>{"EXPERIENCE THE DIFFERENCE"}</button>
            </div>
        </section>
    }
}
