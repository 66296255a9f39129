use yew::prelude::*;

use crate::components::section_header::SectionHeader;
use crate::content::site;
use crate::motion::observer::use_reveal;
use crate::motion::projector::{project, Stagger, VariantTable};
use crate::motion::view_state::Threshold;

const THRESHOLD: f64 = 0.2;
const HIGHLIGHTS: Stagger = Stagger::new(0.3, 0.2);

#[function_component(About)]
pub fn about() -> Html {
    let node = use_node_ref();
    let entered = use_reveal(node.clone(), Threshold::clamped(THRESHOLD));
    let site = site();
    let story = project(entered, &VariantTable::slide_x(-50.0).duration(0.8)).to_css();
    let badges = project(entered, &VariantTable::fade().delay(0.5)).to_css();
    let highlight = VariantTable::fade_up(30.0);

    html! {
        <section id="about" class="section" ref={node}>
            <SectionHeader title="ABOUT " accent="US" entered={entered} />

            <div class="two-column">
                <div class="about-story" style={story}>
                    <h3>{"Bringing Hatta Together Through "}<span class="accent">{"Food"}</span></h3>
                    { for site.about.paragraphs.iter().map(|paragraph| html! {
                        <p class="muted">{paragraph}</p>
                    }) }
                    <div class="badge-row" style={badges}>
                        { for site.about.badges.iter().map(|badge| html! {
                            <span class="badge" key={badge.clone()}>{badge}</span>
                        }) }
                    </div>
                </div>

                <div class="card-grid two">
                    { for site.highlights.iter().enumerate().map(|(i, item)| html! {
                        <div class="card highlight-card" key={item.title.clone()} style={HIGHLIGHTS.child_css(entered, i, &highlight)}>
                            <div class="card-icon">{item.icon.glyph()}</div>
                            <h4>{&item.title}</h4>
                            <p class="muted">{&item.description}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
