use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::reveal::Reveal;
use crate::motion::variants::SectionKind;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="page not-found-page">
            <Reveal kind={SectionKind::Plain} tag="header" class="page-header grid-backdrop">
                <h1>{"404"}</h1>
                <p class="section-lead">{"This page doesn't exist. Maybe it's still being assembled."}</p>
                <Link<Route> to={Route::Home} classes="cta-button primary">{"Back to Home"}</Link<Route>>
            </Reveal>
        </div>
    }
}
