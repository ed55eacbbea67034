use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::components::section::render_cta;
use crate::content::{Cta, ImageRef};
use crate::motion::variants::SectionKind;

/// How far the background drifts, in percent of its height, once the hero has scrolled out.
pub const PARALLAX_RANGE: f64 = 30.0;

/// 0.0 while the hero's top sits at or below the viewport top, 1.0 once it has fully scrolled past.
pub fn scroll_progress(top: f64, height: f64) -> f64 {
    if height <= 0.0 {
        return 0.0;
    }
    (-top / height).clamp(0.0, 1.0)
}

pub fn parallax_offset(progress: f64) -> f64 {
    progress.clamp(0.0, 1.0) * PARALLAX_RANGE
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub title: AttrValue,
    pub subtitle: AttrValue,
    #[prop_or_default]
    pub image: Option<ImageRef>,
    #[prop_or_default]
    pub ctas: Vec<Cta>,
    #[prop_or_default]
    pub parallax: bool,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let hero_ref = use_node_ref();
    let offset = use_state_eq(|| 0.0f64);

    {
        let offset = offset.clone();
        let hero_ref = hero_ref.clone();
        use_effect_with_deps(
            move |parallax| {
                let window = web_sys::window().filter(|_| *parallax);
                let scroll_callback = Closure::wrap(Box::new(move || {
                    if let Some(hero) = hero_ref.cast::<Element>() {
                        let bounds = hero.get_bounding_client_rect();
                        offset.set(parallax_offset(scroll_progress(bounds.top(), bounds.height())));
                    }
                }) as Box<dyn FnMut()>);

                if let Some(window) = &window {
                    if window
                        .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                        .is_err()
                    {
                        warn!("failed to attach hero parallax listener");
                    }
                }

                move || {
                    if let Some(window) = &window {
                        let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                    }
                }
            },
            props.parallax,
        );
    }

    let background = props.image.map(|image| {
        html! {
            <div class="hero-background" style={format!("transform: translateY({}%);", *offset)}>
                <img src={image.url()} alt="Hero background" />
            </div>
        }
    });

    html! {
        <header class="hero" ref={hero_ref}>
            { for background }
            <div class="hero-overlay"></div>
            <Reveal kind={SectionKind::Hero} tag="div" class="hero-content">
                <h1>{ props.title.clone() }</h1>
                <p class="hero-subtitle">{ props.subtitle.clone() }</p>
                <div class="hero-cta-group">
                    { for props.ctas.iter().map(render_cta) }
                </div>
            </Reveal>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_zero_before_scrolling() {
        assert_eq!(scroll_progress(0.0, 720.0), 0.0);
        assert_eq!(scroll_progress(120.0, 720.0), 0.0);
    }

    #[test]
    fn progress_tracks_scrolled_share() {
        assert!((scroll_progress(-360.0, 720.0) - 0.5).abs() < 1e-9);
        assert_eq!(scroll_progress(-2000.0, 720.0), 1.0);
    }

    #[test]
    fn offset_maps_progress_to_thirty_percent() {
        assert_eq!(parallax_offset(0.0), 0.0);
        assert!((parallax_offset(0.5) - 15.0).abs() < 1e-9);
        assert_eq!(parallax_offset(3.0), PARALLAX_RANGE);
    }

    #[test]
    fn collapsed_hero_does_not_move() {
        assert_eq!(scroll_progress(-50.0, 0.0), 0.0);
    }
}
