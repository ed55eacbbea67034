use std::rc::Rc;

use log::{error, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod motion {
    pub mod sequencer;
    pub mod variants;
    pub mod viewport;
}
mod components {
    pub mod contact_form;
    pub mod customizer;
    pub mod faq;
    pub mod footer;
    pub mod hero;
    pub mod reveal;
    pub mod section;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod customization;
    pub mod home;
    pub mod impact;
    pub mod modular_phones;
    pub mod not_found;
    pub mod support;
}

use components::footer::Footer;
use motion::variants::VariantRegistry;
use pages::{
    about::About,
    contact::Contact,
    customization::Customization,
    home::Home,
    impact::Impact,
    modular_phones::ModularPhones,
    not_found::NotFound,
    support::Support,
};

/// Scroll distance after which the nav bar switches to its compact style.
const NAV_SCROLL_THRESHOLD: i32 = 80;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/contact")]
    Contact,
    #[at("/customization")]
    Customization,
    #[at("/impact")]
    Impact,
    #[at("/modular-phones")]
    ModularPhones,
    #[at("/support")]
    Support,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
        Route::Customization => {
            info!("Rendering Customization page");
            html! { <Customization /> }
        }
        Route::Impact => {
            info!("Rendering Impact page");
            html! { <Impact /> }
        }
        Route::ModularPhones => {
            info!("Rendering Modular Phones page");
            html! { <ModularPhones /> }
        }
        Route::Support => {
            info!("Rendering Support page");
            html! { <Support /> }
        }
        Route::NotFound => {
            info!("Rendering 404 page");
            html! { <NotFound /> }
        }
    }
}

const NAV_LINKS: &[(Route, &str)] = &[
    (Route::ModularPhones, "Modular Phones"),
    (Route::Customization, "Customize"),
    (Route::Impact, "Impact"),
    (Route::About, "About"),
    (Route::Support, "Support"),
    (Route::Contact, "Contact"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_bool_toggle(false);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let document = window.as_ref().and_then(|w| w.document());

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document
                        .as_ref()
                        .and_then(|d| d.document_element())
                        .map(|root| root.scroll_top())
                        .unwrap_or(0);
                    is_scrolled.set(scroll_top > NAV_SCROLL_THRESHOLD);
                }) as Box<dyn FnMut()>);

                if let Some(window) = &window {
                    if window
                        .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                        .is_err()
                    {
                        error!("failed to attach nav scroll listener");
                    }
                }

                move || {
                    if let Some(window) = &window {
                        let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.toggle();
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    { config::SITE_NAME }
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle navigation">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_LINKS.iter().map(|(route, label)| html! {
                        <div onclick={close_menu.clone()}>
                            <Link<Route> to={route.clone()} classes="nav-link">
                                { *label }
                            </Link<Route>>
                        </div>
                    }) }
                </div>
            </div>
        </nav>
    }
}

const SITE_CSS: &str = r#"
:root {
    --primary: #00FFCC;
    --accent: #3D5AFE;
    --secondary: #A0A0A0;
    --muted: #111111;
}
* {
    box-sizing: border-box;
}
body {
    margin: 0;
    background: #000;
    color: #fff;
    font-family: 'Inter', sans-serif;
}
h1, h2, h3 {
    font-family: 'Lexend', sans-serif;
}
.sr-only {
    position: absolute;
    width: 1px;
    height: 1px;
    overflow: hidden;
    clip: rect(0, 0, 0, 0);
}
.top-nav {
    position: fixed;
    top: 0;
    width: 100%;
    z-index: 100;
    padding: 1.5rem 0;
    transition: all 0.3s ease;
}
.top-nav.scrolled {
    padding: 0.75rem 0;
    background: rgba(0, 0, 0, 0.85);
    backdrop-filter: blur(10px);
}
.nav-content {
    max-width: 1200px;
    margin: 0 auto;
    padding: 0 1.5rem;
    display: flex;
    justify-content: space-between;
    align-items: center;
}
.nav-logo {
    color: #fff;
    font-size: 1.5rem;
    font-weight: bold;
    text-decoration: none;
}
.nav-right {
    display: flex;
    gap: 1.5rem;
}
.nav-link {
    color: var(--secondary);
    text-decoration: none;
    transition: color 0.3s ease;
}
.nav-link:hover {
    color: var(--primary);
}
.burger-menu {
    display: none;
    flex-direction: column;
    gap: 5px;
    background: none;
    border: none;
    cursor: pointer;
}
.burger-menu span {
    width: 24px;
    height: 2px;
    background: #fff;
}
.hero {
    position: relative;
    height: calc(100vh - 80px);
    overflow: hidden;
    display: flex;
    align-items: center;
    justify-content: center;
    text-align: center;
}
.hero-background {
    position: absolute;
    inset: 0;
    will-change: transform;
}
.hero-background img {
    width: 100%;
    height: 100%;
    object-fit: cover;
    filter: brightness(0.5);
}
.hero-overlay {
    position: absolute;
    inset: 0;
    background: linear-gradient(to bottom, rgba(0, 0, 0, 0.7), rgba(0, 0, 0, 0.9));
}
.hero-content {
    position: relative;
    z-index: 2;
    padding: 0 1.5rem;
}
.hero h1,
.page-header h1 {
    font-size: clamp(3rem, 8vw, 6rem);
    line-height: 1.1;
    margin: 0 0 1rem;
}
.hero-subtitle {
    color: var(--secondary);
    font-size: clamp(1rem, 2vw, 1.25rem);
    max-width: 42rem;
    margin: 0 auto 2rem;
}
.hero-cta-group {
    display: flex;
    gap: 1rem;
    justify-content: center;
}
.page-header {
    padding: 10rem 1.5rem 4rem;
    text-align: center;
}
.grid-backdrop {
    background-image:
        linear-gradient(rgba(0, 255, 204, 0.03) 1px, transparent 1px),
        linear-gradient(90deg, rgba(0, 255, 204, 0.03) 1px, transparent 1px);
    background-size: 60px 60px;
}
.page-section {
    max-width: 1200px;
    margin: 0 auto;
    padding: 6rem 1.5rem;
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
    gap: 2rem;
}
.page-section > h2,
.page-section > .reveal-item:first-child {
    grid-column: 1 / -1;
}
.page-section.narrow {
    max-width: 800px;
    grid-template-columns: 1fr;
}
.page-section.two-column,
.split-section {
    grid-template-columns: repeat(auto-fit, minmax(340px, 1fr));
    align-items: center;
}
.section-title {
    font-size: clamp(2rem, 5vw, 3.5rem);
    margin: 0 0 1rem;
}
.section-lead,
.muted {
    color: var(--secondary);
    line-height: 1.6;
}
.centered {
    text-align: center;
}
.accent {
    color: var(--accent);
}
.card {
    background: var(--muted);
    border-radius: 1rem;
    padding: 1.5rem;
    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.1);
}
.card-image,
.split-image {
    width: 100%;
    height: auto;
    border-radius: 1rem;
}
.avatar {
    width: 150px;
    height: 150px;
    border-radius: 50%;
}
.avatar.small {
    width: 60px;
    height: 60px;
}
.person {
    text-align: center;
}
.value-icon {
    color: var(--accent);
    font-size: 2.5rem;
}
.testimonial-author {
    display: flex;
    align-items: center;
    gap: 1rem;
}
.quote {
    font-style: italic;
}
.stars {
    color: var(--primary);
    letter-spacing: 0.2rem;
}
.bullet-list {
    color: var(--secondary);
    padding-left: 1.25rem;
    line-height: 1.8;
}
.cta-button {
    display: inline-block;
    padding: 0.75rem 1.5rem;
    border-radius: 1rem;
    font-weight: bold;
    text-decoration: none;
    cursor: pointer;
    border: 1px solid transparent;
    transition: all 0.3s ease;
}
.cta-button.primary {
    background: var(--primary);
    color: #000;
}
.cta-button.primary:hover {
    background: var(--accent);
    color: #fff;
}
.cta-button.outline {
    color: #fff;
    border-color: #fff;
    background: transparent;
}
.cta-button.outline:hover {
    background: #fff;
    color: #000;
}
.cta-button.wide {
    width: 100%;
}
.contact-form {
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
}
.contact-form input,
.contact-form textarea {
    padding: 0.75rem;
    border-radius: 0.5rem;
    border: 1px solid rgba(255, 255, 255, 0.2);
    background: #000;
    color: #fff;
    margin-bottom: 0.75rem;
}
.form-error {
    color: #ff6b6b;
}
.form-success {
    color: var(--primary);
}
.site-footer {
    padding: 3rem 1.5rem;
    text-align: center;
    border-top: 1px solid rgba(255, 255, 255, 0.1);
}
.footer-links {
    display: flex;
    gap: 1.5rem;
    justify-content: center;
}
.footer-link {
    color: var(--secondary);
    text-decoration: none;
}
@media (max-width: 768px) {
    .burger-menu {
        display: flex;
    }
    .nav-right {
        display: none;
    }
    .nav-right.mobile-menu-open {
        display: flex;
        flex-direction: column;
        position: absolute;
        top: 100%;
        left: 0;
        right: 0;
        padding: 1.5rem;
        background: rgba(0, 0, 0, 0.95);
    }
    .page-section {
        padding: 4rem 1rem;
    }
}
"#;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub registry: Rc<VariantRegistry>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    html! {
        <ContextProvider<Rc<VariantRegistry>> context={props.registry.clone()}>
            <BrowserRouter>
                <style>{ SITE_CSS }</style>
                <Nav />
                <main>
                    <Switch<Route> render={switch} />
                </main>
                <Footer />
            </BrowserRouter>
        </ContextProvider<Rc<VariantRegistry>>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    // The motion table ships with the binary, so an invalid one is fatal.
    let registry = match VariantRegistry::builtin() {
        Ok(registry) => registry,
        Err(err) => {
            error!("motion config rejected: {}", err);
            panic!("motion config rejected: {}", err);
        }
    };

    info!(
        "Starting application with {} configured section kinds",
        registry.configured_kinds().count()
    );
    yew::Renderer::<App>::with_props(AppProps {
        registry: Rc::new(registry),
    })
    .render();
}
