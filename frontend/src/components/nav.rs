use yew::prelude::*;
use web_sys::MouseEvent;

use crate::config;
use crate::content::{site, Icon};
use crate::motion::projector::Stagger;
use crate::motion::scroll::use_scrolled;

const DESKTOP_LINKS: Stagger = Stagger::new(0.3, 0.1);
const MOBILE_LINKS: Stagger = Stagger::new(0.0, 0.1);

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_scrolled(config::NAV_SCROLL_THRESHOLD_PX);
    let site = site();

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // anchors keep their default jump, the menu just collapses
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let contact_info = html! {
        <>
            <span class="nav-contact-item">{Icon::MapPin.glyph()}{" "}{&site.brand.location}</span>
            <span class="nav-contact-item">{Icon::Phone.glyph()}{" "}{&site.brand.phone}</span>
        </>
    };

    html! {
        <header class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        padding: 1.25rem 0;
                        transition: background 0.3s ease, padding 0.3s ease, backdrop-filter 0.3s ease;
                    }
                    .top-nav.scrolled {
                        background: rgba(0, 0, 0, 0.85);
                        backdrop-filter: blur(12px);
                        padding: 0.75rem 0;
                        border-bottom: 1px solid rgba(249, 115, 22, 0.2);
                    }
                    .nav-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        gap: 1rem;
                    }
                    .nav-logo {
                        font-weight: 900;
                        font-size: 1.5rem;
                        color: #fff;
                        text-decoration: none;
                        display: flex;
                        gap: 0.4rem;
                    }
                    .nav-links {
                        display: flex;
                        gap: 2rem;
                    }
                    .nav-link, .mobile-link {
                        color: rgba(255, 255, 255, 0.8);
                        text-decoration: none;
                        font-weight: 600;
                        transition: color 0.2s ease;
                    }
                    .nav-link:hover, .mobile-link:hover {
                        color: #f97316;
                    }
                    .nav-contact {
                        display: flex;
                        gap: 1.25rem;
                        font-size: 0.85rem;
                        color: rgba(255, 255, 255, 0.6);
                    }
                    .burger-menu {
                        display: none;
                        background: none;
                        border: none;
                        color: #fff;
                        font-size: 1.5rem;
                        cursor: pointer;
                    }
                    .mobile-menu {
                        display: none;
                    }
                    @media (max-width: 900px) {
                        .nav-links, .nav-contact {
                            display: none;
                        }
                        .burger-menu {
                            display: block;
                        }
                        .mobile-menu.open {
                            display: flex;
                            flex-direction: column;
                            gap: 1rem;
                            padding: 1.5rem;
                            background: rgba(0, 0, 0, 0.95);
                        }
                        .mobile-contact {
                            display: flex;
                            flex-direction: column;
                            gap: 0.5rem;
                            color: rgba(255, 255, 255, 0.6);
                            font-size: 0.85rem;
                        }
                    }
                "#}
            </style>
            <nav class="nav-content">
                <a href="#home" class="nav-logo">
                    <span>{&site.brand.primary}</span>
                    <span class="accent">{&site.brand.secondary}</span>
                </a>

                <div class="nav-links">
                    { for site.nav.iter().enumerate().map(|(i, item)| html! {
                        <a
                            key={item.href.clone()}
                            href={item.href.clone()}
                            class="nav-link enter-drop"
                            style={DESKTOP_LINKS.animation_delay(i)}
                        >
                            {&item.label}
                        </a>
                    }) }
                </div>

                <div class="nav-contact">
                    {contact_info.clone()}
                </div>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </nav>

            <div class={classes!("mobile-menu", (*menu_open).then(|| "open"))}>
                { for site.nav.iter().enumerate().map(|(i, item)| html! {
                    <a
                        key={item.href.clone()}
                        href={item.href.clone()}
                        class="mobile-link enter-slide"
                        style={MOBILE_LINKS.animation_delay(i)}
                        onclick={close_menu.clone()}
                    >
                        {&item.label}
                    </a>
                }) }
                <div class="mobile-contact">
                    {contact_info}
                </div>
            </div>
        </header>
    }
}
