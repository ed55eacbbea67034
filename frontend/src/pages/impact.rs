use yew::prelude::*;

use crate::components::section::SectionView;
use crate::content::{ChecklistItem, ImageRef, Section};

const CHECK: &str = "✓";

pub const SECTIONS: &[Section] = &[
    Section::Hero {
        title: "IWorld: Making a Difference",
        subtitle: "Learn about our commitment to the Bangalore community and our sustainability initiatives.",
        image: Some(ImageRef::new(1920, 1080, "Impact")),
        ctas: &[],
        parallax: false,
    },
    Section::Checklist {
        id: "community",
        heading: "Community Engagement",
        items: &[
            ChecklistItem { icon: CHECK, text: "Active participation in local events" },
            ChecklistItem { icon: CHECK, text: "Supporting local schools and educational programs" },
            ChecklistItem { icon: CHECK, text: "Volunteering initiatives for community development" },
        ],
    },
    Section::Checklist {
        id: "economy",
        heading: "Economic Contribution",
        items: &[
            ChecklistItem { icon: "$", text: "Significant investment in the local Bangalore economy" },
            ChecklistItem { icon: "👥", text: "Creation of over 500 jobs in the past year" },
            ChecklistItem { icon: "📈", text: "Supporting local businesses and suppliers" },
            ChecklistItem { icon: "◔", text: "Contributing to the overall economic growth of the region" },
        ],
    },
    Section::Checklist {
        id: "sustainability",
        heading: "Sustainability Initiatives",
        items: &[
            ChecklistItem { icon: "🌐", text: "Reducing carbon footprint through renewable energy sources" },
            ChecklistItem { icon: CHECK, text: "Implementing eco-friendly packaging and waste reduction programs" },
            ChecklistItem { icon: CHECK, text: "Promoting sustainable practices within the organization" },
        ],
    },
    Section::Checklist {
        id: "sourcing",
        heading: "Ethical Sourcing",
        items: &[
            ChecklistItem { icon: CHECK, text: "Ensuring fair labor practices throughout the supply chain" },
            ChecklistItem { icon: CHECK, text: "Sourcing materials from responsible and sustainable suppliers" },
            ChecklistItem { icon: CHECK, text: "Promoting ethical business practices within the industry" },
        ],
    },
    Section::Checklist {
        id: "future",
        heading: "Future Initiatives",
        items: &[
            ChecklistItem { icon: "🏆", text: "Investing in research and development for sustainable technologies" },
            ChecklistItem { icon: "💡", text: "Expanding community outreach programs and initiatives" },
            ChecklistItem { icon: CHECK, text: "Continuing to prioritize ethical and sustainable business practices" },
        ],
    },
];

#[function_component(Impact)]
pub fn impact() -> Html {
    let (hero, cards) = SECTIONS.split_at(1);

    html! {
        <div class="page impact-page">
            { for hero.iter().map(|section| html! { <SectionView section={section.clone()} /> }) }
            <div class="page-section checklist-grid">
                { for cards.iter().map(|section| html! { <SectionView section={section.clone()} /> }) }
            </div>
            <style>
                {r#"
                .checklist-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                    gap: 2rem;
                }
                .checklist-card h3 {
                    margin-bottom: 1.5rem;
                }
                .check-item {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.5rem;
                    color: var(--secondary);
                    margin-bottom: 0.75rem;
                }
                .check-icon {
                    color: var(--primary);
                    min-width: 1.25rem;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::variants::SectionKind;

    #[test]
    fn every_card_is_a_checklist() {
        assert_eq!(SECTIONS.len(), 6);
        assert!(SECTIONS[1..].iter().all(|s| s.kind() == SectionKind::Checklist));
        assert_eq!(SECTIONS[2].child_count(), 5);
    }
}
