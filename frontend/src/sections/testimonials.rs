use yew::prelude::*;

use crate::components::section_header::SectionHeader;
use crate::content::{site, Icon};
use crate::motion::observer::use_reveal;
use crate::motion::projector::{project, Stagger, VariantTable};
use crate::motion::view_state::Threshold;

const THRESHOLD: f64 = 0.2;
const CARDS: Stagger = Stagger::new(0.0, 0.2);
const MAX_STARS: u8 = 5;

fn stars(filled: u8) -> Html {
    html! {
        <span class="stars">
            { for (0..MAX_STARS).map(|i| html! {
                <span class={classes!("star", (i < filled).then(|| "filled"))}>{Icon::Star.glyph()}</span>
            }) }
        </span>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let node = use_node_ref();
    let entered = use_reveal(node.clone(), Threshold::clamped(THRESHOLD));
    let reviews = &site().reviews;
    let overall = project(entered, &VariantTable::pop(0.8).duration(0.8).delay(0.2)).to_css();
    let card = VariantTable::fade_up(30.0);
    let cta = project(entered, &VariantTable::fade_up(20.0).delay(0.8)).to_css();

    html! {
        <section id="testimonials" class="section" ref={node}>
            <SectionHeader
                title="CUSTOMER "
                accent="REVIEWS"
                subtitle="What our community says about us"
                entered={entered}
            />

            <div class="overall-rating" style={overall}>
                {stars(MAX_STARS)}
                <span class="overall-value">{&reviews.rating}</span>
                <span class="muted">{&reviews.basis}</span>
            </div>

            <div class="card-grid two">
                { for reviews.testimonials.iter().enumerate().map(|(i, review)| html! {
                    <article class="card testimonial-card" key={review.name.clone()} style={CARDS.child_css(entered, i, &card)}>
                        <span class="quote-mark accent">{"\u{201C}"}</span>
                        {stars(review.rating)}
                        <p class="testimonial-comment">{&review.comment}</p>
                        <div class="testimonial-author">
                            <img src={review.avatar.clone()} alt={review.name.clone()} loading="lazy" />
                            <div>
                                <div class="author-name">{&review.name}</div>
                                <div class="muted">{&review.location}</div>
                            </div>
                        </div>
                    </article>
                }) }
            </div>

            <div class="section-cta" style={cta}>
                <p class="muted">{"Join thousands of satisfied customers in Hatta"}</p>
                <button class="secondary-button">{"LEAVE A REVIEW"}</button>
            </div>
        </section>
    }
}
