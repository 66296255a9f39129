use yew::prelude::*;

use crate::components::section_header::SectionHeader;
use crate::content::site;
use crate::motion::observer::use_reveal;
use crate::motion::projector::{project, Stagger, VariantTable};
use crate::motion::view_state::Threshold;

const THRESHOLD: f64 = 0.2;
const ITEMS: Stagger = Stagger::new(0.0, 0.2);

#[function_component(Partnership)]
pub fn partnership() -> Html {
    let node = use_node_ref();
    let entered = use_reveal(node.clone(), Threshold::clamped(THRESHOLD));
    let site = site();
    let partnership = &site.partnership;
    let column = VariantTable::fade().duration(0.8);
    let item = VariantTable::fade_up(30.0);
    // benefits sit after the column heading
    let after_heading = |i: usize| ITEMS.child_css(entered, i + 1, &item);

    html! {
        <section id="partnership" class="section" ref={node}>
            <SectionHeader
                title="PARTNER "
                accent="WITH US"
                subtitle="Grow your food business with Hatta's favorite delivery platform"
                entered={entered}
            />

            <div class="two-column">
                <div class="partner-column" style={project(entered, &column).to_css()}>
                    <h3 style={ITEMS.child_css(entered, 0, &item)}>{"Why Partner With Us?"}</h3>
                    { for partnership.benefits.iter().enumerate().map(|(i, benefit)| html! {
                        <div class="benefit" key={benefit.title.clone()} style={after_heading(i)}>
                            <div class="card-icon">{benefit.icon.glyph()}</div>
                            <div>
                                <h4>{&benefit.title}</h4>
                                <p class="muted">{&benefit.description}</p>
                            </div>
                        </div>
                    }) }
                    <div class="card partner-contact" style={after_heading(partnership.benefits.len())}>
                        <h4>{"Ready to Join?"}</h4>
                        <p class="muted">{"Contact our partnership team to get started."}</p>
                        <a class="primary-button" href={format!("mailto:{}", site.brand.email)}>{"BECOME A PARTNER"}</a>
                    </div>
                </div>

                <div class="partner-column" style={project(entered, &column).to_css()}>
                    <h3 style={ITEMS.child_css(entered, 0, &item)}>{"Who We're Looking For"}</h3>
                    { for partnership.partner_types.iter().enumerate().map(|(i, kind)| html! {
                        <div class="card partner-type" key={kind.title.clone()} style={after_heading(i)}>
                            <h4>{&kind.title}</h4>
                            <p class="muted">{&kind.description}</p>
                            <div class="badge-row">
                                { for kind.examples.iter().map(|example| html! {
                                    <span class="badge" key={example.clone()}>{example}</span>
                                }) }
                            </div>
                        </div>
                    }) }
                    <blockquote class="card success-story" style={after_heading(partnership.partner_types.len())}>
                        <p>{format!("\u{201C}{}\u{201D}", partnership.success_story.text)}</p>
                        <footer class="accent">{format!("- {}", partnership.success_story.author)}</footer>
                    </blockquote>
                </div>
            </div>
        </section>
    }
}
