use yew::prelude::*;

use crate::components::section::{PageHeader, SectionView};
use crate::content::{Cta, CtaTarget, ImageRef, Person, Section, TextBlock, ValueItem};
use crate::motion::variants::SectionKind;
use crate::Route;

pub const SECTIONS: &[Section] = &[
    Section::Split {
        id: "our-story",
        kind: SectionKind::Story,
        heading: "Our Story",
        blocks: &[
            TextBlock {
                heading: None,
                text: "IWorld was founded with a simple vision: to create technology that adapts to you, not the other way around. We believe in the power of personalization and the importance of making technology accessible to everyone.",
            },
            TextBlock {
                heading: None,
                text: "From humble beginnings, we've grown into a team of passionate innovators dedicated to pushing the boundaries of what's possible. Our journey has been fueled by a commitment to quality, sustainability, and customer satisfaction.",
            },
        ],
        bullets: &[],
        image: ImageRef::new(600, 400, "Our Story"),
    },
    Section::Split {
        id: "mission-vision",
        kind: SectionKind::Story,
        heading: "Mission & Vision",
        blocks: &[
            TextBlock {
                heading: Some("Our Mission"),
                text: "To empower individuals through customizable technology solutions that enhance their lives and contribute to a sustainable future.",
            },
            TextBlock {
                heading: Some("Our Vision"),
                text: "To be the global leader in personalized technology, recognized for our innovation, customer-centric approach, and commitment to environmental responsibility.",
            },
        ],
        bullets: &[],
        image: ImageRef::new(600, 400, "Mission Vision"),
    },
    Section::People {
        id: "team",
        heading: "Meet Our Team",
        members: &[
            Person { name: "John Doe", title: "CEO", image: ImageRef::new(200, 200, "John Doe") },
            Person { name: "Jane Smith", title: "CTO", image: ImageRef::new(200, 200, "Jane Smith") },
            Person { name: "Mike Johnson", title: "Head of Design", image: ImageRef::new(200, 200, "Mike Johnson") },
        ],
    },
    Section::Values {
        id: "values",
        heading: "Our Values",
        values: &[
            ValueItem {
                icon: "⚡",
                title: "Innovation",
                body: "We constantly seek new and creative solutions to meet the evolving needs of our customers.",
            },
            ValueItem {
                icon: "♥",
                title: "Customer Focus",
                body: "We prioritize our customers and strive to exceed their expectations in every interaction.",
            },
            ValueItem {
                icon: "🌐",
                title: "Sustainability",
                body: "We are committed to minimizing our environmental impact and promoting sustainable practices.",
            },
        ],
    },
    Section::Cta {
        id: "careers",
        kind: SectionKind::Story,
        heading: "Join Our Team",
        body: "Interested in a career at IWorld? We're always looking for talented and passionate individuals to join our team.",
        cta: Cta {
            label: "View Open Positions",
            target: CtaTarget::Route(Route::Contact),
            primary: true,
        },
    },
];

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="page about-page">
            <PageHeader title="About IWorld" lead="Learn more about our company history, mission, vision, and team." />
            { for SECTIONS.iter().map(|section| html! { <SectionView section={section.clone()} /> }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_renders_three_staggered_members() {
        let team = SECTIONS.iter().find(|s| s.kind() == SectionKind::Team).unwrap();
        assert_eq!(team.child_count(), 3);
    }
}
