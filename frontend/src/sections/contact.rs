use chrono::Datelike;
use log::info;
use yew::prelude::*;

use crate::components::section_header::SectionHeader;
use crate::content::site;
use crate::motion::observer::use_reveal;
use crate::motion::projector::{project, Stagger, VariantTable};
use crate::motion::view_state::Threshold;

const THRESHOLD: f64 = 0.2;
const CHANNELS: Stagger = Stagger::new(0.0, 0.2);

#[function_component(Contact)]
pub fn contact() -> Html {
    let node = use_node_ref();
    let entered = use_reveal(node.clone(), Threshold::clamped(THRESHOLD));
    let site = site();
    let item = VariantTable::fade_up(30.0);
    let form = project(entered, &VariantTable::slide_x(50.0).duration(0.8).delay(0.2)).to_css();
    let footer = project(entered, &VariantTable::fade().delay(0.8)).to_css();
    let year = chrono::Local::now().year();

    // there is no backend to post to
    let onsubmit = Callback::from(|e: SubmitEvent| {
        e.prevent_default();
        info!("Contact form submitted");
    });

    html! {
        <section id="contact" class="section" ref={node}>
            <SectionHeader
                title="GET IN "
                accent="TOUCH"
                subtitle="Questions, feedback or partnership inquiries? We'd love to hear from you."
                entered={entered}
            />

            <div class="two-column">
                <div class="contact-channels">
                    <h3 style={CHANNELS.child_css(entered, 0, &item)}>{"Contact Information"}</h3>
                    { for site.contact_channels.iter().enumerate().map(|(i, channel)| html! {
                        <div class="card channel" key={channel.title.clone()} style={CHANNELS.child_css(entered, i + 1, &item)}>
                            <div class="card-icon">{channel.icon.glyph()}</div>
                            <div class="channel-body">
                                <h4>{&channel.title}</h4>
                                { for channel.details.iter().map(|line| html! {
                                    <p class="muted">{line}</p>
                                }) }
                            </div>
                            {
                                match &channel.href {
                                    Some(href) => html! {
                                        <a class="channel-action" href={href.clone()}>{&channel.action}</a>
                                    },
                                    None => html! {
                                        <span class="channel-action">{&channel.action}</span>
                                    },
                                }
                            }
                        </div>
                    }) }
                </div>

                <form class="card contact-form" style={form} onsubmit={onsubmit}>
                    <h3>{"Send us a Message"}</h3>
                    <div class="form-row">
                        <input type="text" name="first_name" placeholder="First Name" />
                        <input type="text" name="last_name" placeholder="Last Name" />
                    </div>
                    <input type="email" name="email" placeholder="Email Address" />
                    <input type="tel" name="phone" placeholder="Phone Number" />
                    <select name="topic">
                        <option value="general">{"General Inquiry"}</option>
                        <option value="partnership">{"Partnership"}</option>
                        <option value="support">{"Customer Support"}</option>
                        <option value="feedback">{"Feedback"}</option>
                    </select>
                    <textarea name="message" rows="5" placeholder="Your Message"></textarea>
                    <button type="submit" class="primary-button">{"SEND MESSAGE"}</button>
                </form>
            </div>

            <footer class="site-footer" style={footer}>
                <div class="footer-brand">
                    {&site.brand.primary}
                    <span class="accent">{&site.brand.secondary}</span>
                </div>
                <div class="social-links">
                    { for site.socials.iter().map(|social| html! {
                        <a href={social.href.clone()} class="social-link" aria-label={social.label.clone()} key={social.label.clone()}>
                            {social.icon.glyph()}
                        </a>
                    }) }
                </div>
                <p class="muted">{format!("\u{00A9} {} {} {}. All rights reserved.", year, site.brand.primary, site.brand.secondary)}</p>
            </footer>
        </section>
    }
}
