use yew::prelude::*;

use crate::motion::projector::{project, VariantTable};

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub title: AttrValue,
    pub accent: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    pub entered: bool,
}

/// Two-tone heading shared by every content section. Fades up when its
/// section enters.
#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    let style = project(props.entered, &VariantTable::fade_up(20.0).duration(0.8)).to_css();

    html! {
        <div class="section-header" style={style}>
            <h2 class="section-title">
                {props.title.clone()}
                <span class="accent">{props.accent.clone()}</span>
            </h2>
            {
                if let Some(subtitle) = &props.subtitle {
                    html! { <p class="section-subtitle">{subtitle.clone()}</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
