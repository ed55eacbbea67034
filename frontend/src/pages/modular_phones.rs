use yew::prelude::*;

use crate::components::section::SectionView;
use crate::content::{Card, Cta, CtaTarget, FaqEntry, ImageRef, Section};
use crate::motion::variants::SectionKind;

const EXPLORE: Cta = Cta {
    label: "Explore Modules",
    target: CtaTarget::Anchor("#module-catalog"),
    primary: true,
};

pub const SECTIONS: &[Section] = &[
    Section::Hero {
        title: "IWorld Modular Phones",
        subtitle: "The future of customizable and sustainable mobile technology.",
        image: Some(ImageRef::new(1920, 1080, "Hero")),
        ctas: &[EXPLORE],
        parallax: false,
    },
    Section::Intro {
        id: "introduction",
        kind: SectionKind::Checklist,
        heading: "Welcome to the Future of Mobile: IWorld Modular Phones",
        body: &["Experience unparalleled customization and sustainability with our revolutionary modular phone system. Tailor your device to fit your unique needs and preferences, and upgrade individual components as technology evolves."],
        cta: Some(EXPLORE),
    },
    Section::CardGrid {
        id: "module-catalog",
        kind: SectionKind::Checklist,
        heading: "Explore Our Module Catalog",
        intro: None,
        cards: &[
            Card {
                title: "Camera Module",
                body: "Capture stunning photos and videos with our high-resolution camera module.",
                image: Some(ImageRef::new(600, 400, "Camera Module")),
            },
            Card {
                title: "Battery Module",
                body: "Extend your phone's battery life with our high-capacity battery module.",
                image: Some(ImageRef::new(600, 400, "Battery Module")),
            },
            Card {
                title: "Processor Module",
                body: "Boost your phone's performance with our latest-generation processor module.",
                image: Some(ImageRef::new(600, 400, "Processor Module")),
            },
            Card {
                title: "Display Module",
                body: "Experience vibrant visuals with our high-resolution display module.",
                image: Some(ImageRef::new(600, 400, "Display Module")),
            },
        ],
    },
    Section::Info {
        id: "compatibility-guide",
        kind: SectionKind::Checklist,
        heading: "Compatibility Guide",
        body: "Ensure seamless integration of modules with our comprehensive compatibility guide.",
        bullets: &[
            "Module Versions: All modules are designed to be forward and backward compatible within their respective series.",
            "Device Compatibility: Refer to the module specifications for device compatibility information.",
            "Software Updates: Keep your device software up-to-date for optimal module performance.",
        ],
    },
    Section::CardGrid {
        id: "future-modules",
        kind: SectionKind::Checklist,
        heading: "The Future of Modularity",
        intro: Some("Explore upcoming modules and innovations that will further enhance your IWorld modular phone experience."),
        cards: &[
            Card {
                title: "AI Module",
                body: "Integrate AI-powered features directly into your phone with our upcoming AI module.",
                image: None,
            },
            Card {
                title: "Health Monitoring Module",
                body: "Track your health and wellness with our advanced health monitoring module.",
                image: None,
            },
        ],
    },
    Section::Faq {
        id: "faq",
        kind: SectionKind::Checklist,
        heading: "Frequently Asked Questions",
        entries: &[
            FaqEntry {
                question: "What is a modular phone?",
                answer: "A modular phone is a device that allows users to customize and upgrade individual components, such as the camera, battery, or processor.",
            },
            FaqEntry {
                question: "How do I install a new module?",
                answer: "Installing a new module is easy. Simply follow the instructions in the user manual or watch our tutorial video.",
            },
            FaqEntry {
                question: "Are all modules compatible with all IWorld phones?",
                answer: "Please refer to the compatibility guide to ensure that the module you want to install is compatible with your phone model.",
            },
        ],
    },
];

#[function_component(ModularPhones)]
pub fn modular_phones() -> Html {
    html! {
        <div class="page modular-page">
            { for SECTIONS.iter().map(|section| html! { <SectionView section={section.clone()} /> }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explore_links_point_at_the_catalog() {
        let catalog = SECTIONS.iter().filter_map(Section::id).find(|id| *id == "module-catalog");
        assert!(catalog.is_some());
        assert_eq!(EXPLORE.target, CtaTarget::Anchor("#module-catalog"));
    }
}
