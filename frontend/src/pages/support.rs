use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::faq::FaqList;
use crate::components::reveal::Reveal;
use crate::components::section::SectionView;
use crate::content::{Cta, CtaTarget, FaqEntry, Section};
use crate::motion::variants::SectionKind;

pub const FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "What is IWorld?",
        answer: "IWorld is a technology company focused on creating customizable and affordable solutions for modern living.",
    },
    FaqEntry {
        question: "How can I customize my IWorld product?",
        answer: "Our products are designed with customization in mind. You can personalize various aspects through our online configurator.",
    },
    FaqEntry {
        question: "What is your return policy?",
        answer: "We offer a 30-day return policy for all products. Please see our return policy page for more details.",
    },
];

const TROUBLESHOOTING: Section = Section::Steps {
    id: "troubleshooting",
    heading: "Troubleshooting",
    steps: &[
        "Check the power connection and ensure the device is turned on.",
        "Restart the device and try again.",
        "Update to the latest software version.",
        "Contact our support team for further assistance.",
    ],
};

const AFTER_CONTACT: &[Section] = &[
    Section::Info {
        id: "warranty",
        kind: SectionKind::Support,
        heading: "Warranty Information",
        body: "IWorld products come with a one-year limited warranty against defects in materials and workmanship.",
        bullets: &[
            "Warranty covers defects in manufacturing.",
            "Warranty does not cover damage from misuse.",
            "To claim warranty, contact our support team.",
        ],
    },
    Section::Cta {
        id: "community-forum",
        kind: SectionKind::Support,
        heading: "Community Forum",
        body: "Join our community forum to connect with other IWorld users, share tips, and get support.",
        cta: Cta {
            label: "Visit the Forum",
            target: CtaTarget::Anchor("#community-forum"),
            primary: false,
        },
    },
];

#[function_component(Support)]
pub fn support() -> Html {
    let query = use_state(String::new);

    let on_search = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    html! {
        <div class="page support-page">
            <Reveal kind={SectionKind::Support} tag="header" class="page-header grid-backdrop">
                <h1>{"We're here to help."}</h1>
                <p class="section-lead">
                    {"Find answers to common questions, troubleshoot issues, and get in touch with our support team."}
                </p>
                <div class="search-box">
                    <input
                        type="search"
                        placeholder="Search for help..."
                        aria-label="Search the FAQ"
                        value={(*query).clone()}
                        oninput={on_search}
                    />
                </div>
            </Reveal>
            <FaqList entries={FAQ} query={AttrValue::from((*query).clone())} />
            <SectionView section={TROUBLESHOOTING} />
            <Reveal kind={SectionKind::Support} id="contact-support" class="page-section narrow">
                <h2 class="section-title">{"Contact Us"}</h2>
                <p class="section-lead">
                    {"Need further assistance? Fill out the form below to get in touch with our support team."}
                </p>
                <ContactForm submit_label="Send Message" />
            </Reveal>
            { for AFTER_CONTACT.iter().map(|section| html! { <SectionView section={section.clone()} /> }) }
            <style>
                {r#"
                .search-box {
                    max-width: 32rem;
                    margin: 2rem auto 0;
                }
                .search-box input {
                    width: 100%;
                    padding: 0.75rem 1.25rem;
                    border-radius: 999px;
                    border: 1px solid var(--secondary);
                    background: var(--muted);
                    color: #fff;
                    font-size: 1rem;
                }
                .search-box input:focus {
                    outline: none;
                    border-color: var(--primary);
                }
                .faq-item {
                    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1.25rem 0;
                    background: none;
                    border: none;
                    color: #fff;
                    cursor: pointer;
                    text-align: left;
                }
                .question-text {
                    font-size: 1.1rem;
                    margin: 0;
                }
                .toggle-icon {
                    color: var(--primary);
                    font-size: 1.5rem;
                    transition: transform 0.3s ease;
                }
                .faq-item.open .toggle-icon {
                    transform: rotate(45deg);
                }
                .faq-answer {
                    color: var(--secondary);
                    padding-bottom: 1.25rem;
                    line-height: 1.6;
                }
                .step {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }
                .step-number {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 50%;
                    background: var(--primary);
                    color: #000;
                    font-weight: bold;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    flex-shrink: 0;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::filter_faq;

    #[test]
    fn search_narrows_support_faq() {
        assert_eq!(filter_faq(FAQ, "customize").len(), 1);
        assert_eq!(filter_faq(FAQ, "").len(), FAQ.len());
    }

    #[test]
    fn troubleshooting_staggers_heading_and_four_steps() {
        assert_eq!(TROUBLESHOOTING.child_count(), 5);
        assert_eq!(TROUBLESHOOTING.kind(), SectionKind::Support);
    }
}
