use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::SITE_NAME;
use crate::Route;

pub fn copyright(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, SITE_NAME)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-links">
                <Link<Route> to={Route::About} classes="footer-link">{"About"}</Link<Route>>
                <Link<Route> to={Route::Support} classes="footer-link">{"Support"}</Link<Route>>
                <Link<Route> to={Route::Contact} classes="footer-link">{"Contact"}</Link<Route>>
            </div>
            <p class="muted">{ copyright(year) }</p>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_names_the_year() {
        assert_eq!(copyright(2024), "© 2024 IWorld. All rights reserved.");
    }
}
