use yew::prelude::*;
use gloo_timers::callback::Timeout;
use log::info;

mod boot;
mod config;
mod content;
mod error;
mod motion {
    pub mod observer;
    pub mod projector;
    pub mod scroll;
    pub mod store;
    pub mod view_state;
}
mod components {
    pub mod background;
    pub mod loading_screen;
    pub mod nav;
    pub mod section_header;
}
mod sections {
    pub mod about;
    pub mod app_download;
    pub mod contact;
    pub mod hero;
    pub mod partnership;
    pub mod services;
    pub mod stats;
    pub mod testimonials;
    pub mod vendors;
    pub mod why_choose_us;
}

use boot::BootGate;
use components::{
    background::Background,
    loading_screen::LoadingScreen,
    nav::Nav,
};
use sections::{
    about::About,
    app_download::AppDownload,
    contact::Contact,
    hero::Hero,
    partnership::Partnership,
    services::Services,
    stats::Stats,
    testimonials::Testimonials,
    vendors::VendorShowcase,
    why_choose_us::WhyChooseUs,
};

#[function_component]
fn App() -> Html {
    let gate = use_state(|| BootGate::new(config::BOOT_DURATION_MS));

    {
        let gate = gate.clone();
        use_effect_with_deps(move |_| {
            let timeout = Timeout::new(config::BOOT_DURATION_MS, move || {
                let mut next = *gate;
                next.open();
                info!("Boot gate opened after {} ms", next.ready_after_ms());
                gate.set(next);
            });
            // unmounting before the gate opens cancels the timer
            move || drop(timeout)
        }, ());
    }

    if !gate.is_ready() {
        return html! { <LoadingScreen /> };
    }

    html! {
        <div class="site">
            <Background />
            <Nav />
            <main class="site-main">
                <Hero />
                <VendorShowcase />
                <Services />
                <About />
                <WhyChooseUs />
                <Testimonials />
                <Stats />
                <AppDownload />
                <Partnership />
                <Contact />
            </main>
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(err) = console_log::init_with_level(config::get_log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", err).into());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
