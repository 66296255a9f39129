use yew::prelude::*;

use crate::components::section_header::SectionHeader;
use crate::content::{site, Icon};
use crate::motion::observer::use_reveal;
use crate::motion::projector::{project, Stagger, VariantTable};
use crate::motion::view_state::Threshold;

const THRESHOLD: f64 = 0.2;
const CARDS: Stagger = Stagger::new(0.0, 0.2);
const STEPS: Stagger = Stagger::new(1.0, 0.2);

/// Bullets of card `card` start after the cards themselves.
fn feature_stagger(card: usize) -> Stagger {
    Stagger::new(0.5 + 0.2 * card as f64, 0.1)
}

#[function_component(Services)]
pub fn services() -> Html {
    let node = use_node_ref();
    let entered = use_reveal(node.clone(), Threshold::clamped(THRESHOLD));
    let site = site();
    let card = VariantTable::fade_up(30.0);
    let bullet = VariantTable::slide_x(-10.0).duration(0.4);
    let step = VariantTable::fade_up(20.0);
    let process = project(entered, &VariantTable::fade_up(30.0).delay(0.8)).to_css();

    html! {
        <section id="services" class="section" ref={node}>
            <SectionHeader
                title="OUR "
                accent="SERVICES"
                subtitle="Everything you need, delivered fast across Hatta"
                entered={entered}
            />

            <div class="card-grid four">
                { for site.services.iter().enumerate().map(|(i, service)| {
                    let bullets = feature_stagger(i);
                    html! {
                        <article class="card service-card" key={service.title.clone()} style={CARDS.child_css(entered, i, &card)}>
                            <div class="card-icon">{service.icon.glyph()}</div>
                            <h3>{&service.title}</h3>
                            <p class="muted">{&service.description}</p>
                            <ul class="feature-list">
                                { for service.features.iter().enumerate().map(|(j, feature)| html! {
                                    <li key={feature.clone()} style={bullets.child_css(entered, j, &bullet)}>
                                        <span class="accent">{Icon::CheckCircle.glyph()}</span>{" "}{feature}
                                    </li>
                                }) }
                            </ul>
                        </article>
                    }
                }) }
            </div>

            <div class="process" style={process}>
                <h3 class="process-title">{"HOW IT "}<span class="accent">{"WORKS"}</span></h3>
                <div class="card-grid three">
                    { for site.process_steps.iter().enumerate().map(|(i, process_step)| html! {
                        <div class="process-step" key={process_step.step.clone()} style={STEPS.child_css(entered, i, &step)}>
                            <span class="process-number">{&process_step.step}</span>
                            <h4>{&process_step.title}</h4>
                            <p class="muted">{&process_step.description}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bullets_follow_their_card() {
        assert_eq!(feature_stagger(0).delay_for(0), 0.5);
        assert!((feature_stagger(2).delay_for(1) - 1.0).abs() < 1e-9);
        assert!(feature_stagger(1).delay_for(0) > CARDS.delay_for(1));
    }
}
