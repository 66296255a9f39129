use yew::prelude::*;

use crate::components::section_header::SectionHeader;
use crate::content::{site, Icon};
use crate::motion::observer::use_reveal;
use crate::motion::projector::{project, Stagger, VariantTable};
use crate::motion::view_state::Threshold;

const THRESHOLD: f64 = 0.2;
const CARDS: Stagger = Stagger::new(0.0, 0.1);

#[function_component(VendorShowcase)]
pub fn vendor_showcase() -> Html {
    let node = use_node_ref();
    let entered = use_reveal(node.clone(), Threshold::clamped(THRESHOLD));
    let vendors = &site().vendors;
    let card = VariantTable::fade_up(30.0);
    let grid = project(entered, &VariantTable::fade().duration(0.8)).to_css();

    html! {
        <section id="vendors" class="section" ref={node}>
            <SectionHeader
                title="OUR "
                accent="PARTNERS"
                subtitle="Discover the finest restaurants, cafes, and food vendors in Hatta"
                entered={entered}
            />

            <div class="card-grid three" style={grid}>
                { for vendors.iter().enumerate().map(|(i, vendor)| html! {
                    <article class="card vendor-card" key={vendor.name.clone()} style={CARDS.child_css(entered, i, &card)}>
                        <div class="vendor-image">
                            <img src={vendor.image.clone()} alt={vendor.name.clone()} loading="lazy" />
                            <span class="vendor-rating">
                                {Icon::Star.glyph()}{" "}{format!("{:.1}", vendor.rating)}
                            </span>
                        </div>
                        <div class="card-body">
                            <h3>{&vendor.name}</h3>
                            <p class="vendor-category">{&vendor.category}</p>
                            <p class="muted">{&vendor.speciality}</p>
                            <div class="vendor-footer">
                                <span class="muted">{Icon::Clock.glyph()}{" "}{&vendor.delivery_time}</span>
                                <span class="accent">{"Order Now"}</span>
                            </div>
                        </div>
                    </article>
                }) }
            </div>
        </section>
    }
}
