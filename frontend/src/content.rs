//! Static copy for the pages, described as a small set of section shapes.
//!
//! Every page is a list of [`Section`]s; `components::section::SectionView`
//! turns each one into a revealed region.

use crate::config;
use crate::motion::variants::SectionKind;
use crate::Route;

/// Opaque image reference, resolved by the placeholder image host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageRef {
    pub width: u32,
    pub height: u32,
    pub label: &'static str,
}

impl ImageRef {
    pub const fn new(width: u32, height: u32, label: &'static str) -> Self {
        Self { width, height, label }
    }

    pub fn url(&self) -> String {
        config::placeholder_image(self.width, self.height, self.label)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum CtaTarget {
    Route(Route),
    Anchor(&'static str),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Cta {
    pub label: &'static str,
    pub target: CtaTarget,
    pub primary: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Card {
    pub title: &'static str,
    pub body: &'static str,
    pub image: Option<ImageRef>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextBlock {
    pub heading: Option<&'static str>,
    pub text: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChecklistItem {
    pub icon: &'static str,
    pub text: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Person {
    pub name: &'static str,
    pub title: &'static str,
    pub image: ImageRef,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ValueItem {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub author: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
    pub rating: u8,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Section {
    Hero {
        title: &'static str,
        subtitle: &'static str,
        image: Option<ImageRef>,
        ctas: &'static [Cta],
        parallax: bool,
    },
    Intro {
        id: &'static str,
        kind: SectionKind,
        heading: &'static str,
        body: &'static [&'static str],
        cta: Option<Cta>,
    },
    CardGrid {
        id: &'static str,
        kind: SectionKind,
        heading: &'static str,
        intro: Option<&'static str>,
        cards: &'static [Card],
    },
    Split {
        id: &'static str,
        kind: SectionKind,
        heading: &'static str,
        blocks: &'static [TextBlock],
        bullets: &'static [&'static str],
        image: ImageRef,
    },
    Checklist {
        id: &'static str,
        heading: &'static str,
        items: &'static [ChecklistItem],
    },
    People {
        id: &'static str,
        heading: &'static str,
        members: &'static [Person],
    },
    Values {
        id: &'static str,
        heading: &'static str,
        values: &'static [ValueItem],
    },
    Testimonials {
        id: &'static str,
        heading: &'static str,
        intro: &'static str,
        entries: &'static [Testimonial],
    },
    Faq {
        id: &'static str,
        kind: SectionKind,
        heading: &'static str,
        entries: &'static [FaqEntry],
    },
    Steps {
        id: &'static str,
        heading: &'static str,
        steps: &'static [&'static str],
    },
    Info {
        id: &'static str,
        kind: SectionKind,
        heading: &'static str,
        body: &'static str,
        bullets: &'static [&'static str],
    },
    Cta {
        id: &'static str,
        kind: SectionKind,
        heading: &'static str,
        body: &'static str,
        cta: Cta,
    },
}

impl Section {
    pub fn kind(&self) -> SectionKind {
        match self {
            Section::Hero { .. } => SectionKind::Hero,
            Section::Checklist { .. } => SectionKind::Checklist,
            Section::People { .. } => SectionKind::Team,
            Section::Values { .. } => SectionKind::Story,
            Section::Testimonials { .. } => SectionKind::Feature,
            Section::Steps { .. } => SectionKind::Support,
            Section::Intro { kind, .. }
            | Section::CardGrid { kind, .. }
            | Section::Split { kind, .. }
            | Section::Faq { kind, .. }
            | Section::Info { kind, .. }
            | Section::Cta { kind, .. } => *kind,
        }
    }

    pub fn id(&self) -> Option<&'static str> {
        match self {
            Section::Hero { .. } => None,
            Section::Intro { id, .. }
            | Section::CardGrid { id, .. }
            | Section::Split { id, .. }
            | Section::Checklist { id, .. }
            | Section::People { id, .. }
            | Section::Values { id, .. }
            | Section::Testimonials { id, .. }
            | Section::Faq { id, .. }
            | Section::Steps { id, .. }
            | Section::Info { id, .. }
            | Section::Cta { id, .. } => Some(id),
        }
    }

    /// Number of staggered elements the region renders, header included.
    pub fn child_count(&self) -> usize {
        match self {
            Section::Hero { .. } => 3,
            Section::Intro { body, cta, .. } => 1 + body.len() + usize::from(cta.is_some()),
            Section::CardGrid { cards, .. } => 1 + cards.len(),
            Section::Split { blocks, bullets, .. } => 1 + blocks.len() + usize::from(!bullets.is_empty()) + 1,
            Section::Checklist { items, .. } => 1 + items.len(),
            Section::People { members, .. } => members.len(),
            Section::Values { values, .. } => 1 + values.len(),
            Section::Testimonials { entries, .. } => 1 + entries.len(),
            Section::Faq { entries, .. } => 1 + entries.len(),
            Section::Steps { steps, .. } => 1 + steps.len(),
            Section::Info { bullets, .. } => 2 + usize::from(!bullets.is_empty()),
            Section::Cta { .. } => 3,
        }
    }
}

/// Entries whose question or answer mention `query`, ignoring case.
/// A blank query keeps everything.
pub fn filter_faq<'a>(entries: &'a [FaqEntry], query: &str) -> Vec<&'a FaqEntry> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return entries.iter().collect();
    }
    entries
        .iter()
        .filter(|entry| {
            entry.question.to_lowercase().contains(&needle) || entry.answer.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENTRIES: &[FaqEntry] = &[
        FaqEntry {
            question: "What is IWorld?",
            answer: "A technology company.",
        },
        FaqEntry {
            question: "What is your return policy?",
            answer: "We offer a 30-day return window.",
        },
    ];

    #[test]
    fn blank_query_keeps_everything() {
        assert_eq!(filter_faq(ENTRIES, "   ").len(), 2);
    }

    #[test]
    fn query_matches_case_insensitively() {
        let hits = filter_faq(ENTRIES, "RETURN");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].question, "What is your return policy?");
    }

    #[test]
    fn query_searches_answers_too() {
        assert_eq!(filter_faq(ENTRIES, "technology").len(), 1);
        assert!(filter_faq(ENTRIES, "warranty").is_empty());
    }

    #[test]
    fn team_section_counts_members_only() {
        const TEAM: Section = Section::People {
            id: "team",
            heading: "Meet Our Team",
            members: &[
                Person { name: "A", title: "CEO", image: ImageRef::new(200, 200, "A") },
                Person { name: "B", title: "CTO", image: ImageRef::new(200, 200, "B") },
                Person { name: "C", title: "Design", image: ImageRef::new(200, 200, "C") },
            ],
        };
        assert_eq!(TEAM.kind(), SectionKind::Team);
        assert_eq!(TEAM.child_count(), 3);
        assert_eq!(TEAM.id(), Some("team"));
    }

    #[test]
    fn hero_always_renders_three_rows() {
        let hero = Section::Hero {
            title: "t",
            subtitle: "s",
            image: None,
            ctas: &[],
            parallax: false,
        };
        assert_eq!(hero.child_count(), 3);
        assert_eq!(hero.kind(), SectionKind::Hero);
    }
}
