use yew::prelude::*;

use crate::components::section_header::SectionHeader;
use crate::content::site;
use crate::motion::observer::use_reveal;
use crate::motion::projector::{project, Stagger, VariantTable};
use crate::motion::view_state::Threshold;

const THRESHOLD: f64 = 0.3;
const CARDS: Stagger = Stagger::new(0.0, 0.2);
const NUMBERS: Stagger = Stagger::new(0.5, 0.1);
const MILESTONES: Stagger = Stagger::new(1.0, 0.2);

#[function_component(Stats)]
pub fn stats() -> Html {
    let node = use_node_ref();
    let entered = use_reveal(node.clone(), Threshold::clamped(THRESHOLD));
    let site = site();
    let card = VariantTable::fade_up(30.0);
    let number = VariantTable::grow();
    let milestone = VariantTable::slide_x(-30.0);
    let timeline = project(entered, &VariantTable::fade_up(30.0).delay(0.8)).to_css();

    html! {
        <section id="stats" class="section" ref={node}>
            <SectionHeader
                title="BY THE "
                accent="NUMBERS"
                subtitle="Our growing impact on the Hatta community"
                entered={entered}
            />

            <div class="card-grid four">
                { for site.stats.iter().enumerate().map(|(i, stat)| html! {
                    <div class="card stat-card" key={stat.label.clone()} style={CARDS.child_css(entered, i, &card)}>
                        <div class="card-icon">{stat.icon.glyph()}</div>
                        <div class="metric-value" style={NUMBERS.child_css(entered, i, &number)}>{&stat.value}</div>
                        <h4>{&stat.label}</h4>
                        <p class="muted">{&stat.description}</p>
                    </div>
                }) }
            </div>

            <div class="timeline" style={timeline}>
                <h3 class="process-title">{"OUR "}<span class="accent">{"JOURNEY"}</span></h3>
                { for site.milestones.iter().enumerate().map(|(i, item)| html! {
                    <div class="milestone" key={item.event.clone()} style={MILESTONES.child_css(entered, i, &milestone)}>
                        <span class="milestone-year accent">{&item.year}</span>
                        <div>
                            <h4>{&item.event}</h4>
                            <p class="muted">{&item.description}</p>
                        </div>
                    </div>
                }) }
            </div>
        </section>
    }
}
