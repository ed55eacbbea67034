use yew::prelude::*;

use crate::components::section::SectionView;
use crate::content::{Card, Cta, CtaTarget, ImageRef, Section, Testimonial, TextBlock};
use crate::motion::variants::SectionKind;
use crate::Route;

const MODULE_BLURB: &str = "Customize your phone with our wide range of modules.";
const CUSTOMIZATION_BLURB: &str = "Explore our wide range of customization options.";
const REVIEW: &str = "This is the best phone I've ever owned! The customization options are amazing.";

pub const SECTIONS: &[Section] = &[
    Section::Hero {
        title: "IWorld: Your Phone, Your Way",
        subtitle: "Experience the future of customizable technology. Build your dream phone with our modular system.",
        image: Some(ImageRef::new(1920, 1080, "Hero")),
        ctas: &[
            Cta { label: "Explore More", target: CtaTarget::Route(Route::ModularPhones), primary: true },
            Cta { label: "Learn About Us", target: CtaTarget::Route(Route::About), primary: false },
        ],
        parallax: true,
    },
    Section::CardGrid {
        id: "modular-design",
        kind: SectionKind::Feature,
        heading: "Experience the Future of Modular Design",
        intro: Some("Build your dream phone, one module at a time. Customize every aspect to fit your unique needs and style."),
        cards: &[
            Card { title: "Module 1", body: MODULE_BLURB, image: Some(ImageRef::new(600, 400, "Module 1")) },
            Card { title: "Module 2", body: MODULE_BLURB, image: Some(ImageRef::new(600, 400, "Module 2")) },
            Card { title: "Module 3", body: MODULE_BLURB, image: Some(ImageRef::new(600, 400, "Module 3")) },
            Card { title: "Module 4", body: MODULE_BLURB, image: Some(ImageRef::new(600, 400, "Module 4")) },
            Card { title: "Module 5", body: MODULE_BLURB, image: Some(ImageRef::new(600, 400, "Module 5")) },
            Card { title: "Module 6", body: MODULE_BLURB, image: Some(ImageRef::new(600, 400, "Module 6")) },
        ],
    },
    Section::Split {
        id: "affordable",
        kind: SectionKind::Feature,
        heading: "Affordable Innovation for Everyone",
        blocks: &[TextBlock {
            heading: None,
            text: "We believe that cutting-edge technology should be accessible to all. Our modular phone system allows you to upgrade components as needed, saving you money in the long run.",
        }],
        bullets: &["Pay only for what you need", "Upgrade modules individually", "Reduce electronic waste"],
        image: ImageRef::new(1920, 1080, "Affordable"),
    },
    Section::CardGrid {
        id: "customization-showcase",
        kind: SectionKind::Feature,
        heading: "Unleash Your Creativity with Endless Customization",
        intro: Some("From colors to materials, design the phone that perfectly reflects your personality. Our intuitive customization tools make it easy to create a device that's uniquely yours."),
        cards: &[
            Card { title: "Customization 1", body: CUSTOMIZATION_BLURB, image: Some(ImageRef::new(600, 400, "Customization 1")) },
            Card { title: "Customization 2", body: CUSTOMIZATION_BLURB, image: Some(ImageRef::new(600, 400, "Customization 2")) },
            Card { title: "Customization 3", body: CUSTOMIZATION_BLURB, image: Some(ImageRef::new(600, 400, "Customization 3")) },
        ],
    },
    Section::Testimonials {
        id: "testimonials",
        heading: "What Our Customers Are Saying",
        intro: "Don't just take our word for it. See what our satisfied customers have to say about their IWorld experience.",
        entries: &[
            Testimonial { author: "Customer 1", role: "Verified Buyer", quote: REVIEW, rating: 5 },
            Testimonial { author: "Customer 2", role: "Verified Buyer", quote: REVIEW, rating: 5 },
            Testimonial { author: "Customer 3", role: "Verified Buyer", quote: REVIEW, rating: 5 },
        ],
    },
];

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="page home-page">
            { for SECTIONS.iter().map(|section| html! { <SectionView section={section.clone()} /> }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_opens_with_parallax_hero() {
        assert!(matches!(SECTIONS[0], Section::Hero { parallax: true, .. }));
    }

    #[test]
    fn modular_design_staggers_header_and_six_modules() {
        let grid = SECTIONS.iter().find(|s| s.id() == Some("modular-design")).unwrap();
        assert_eq!(grid.child_count(), 7);
        assert_eq!(grid.kind(), SectionKind::Feature);
    }
}
