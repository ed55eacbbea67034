use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::{filter_faq, FaqEntry};
use crate::motion::variants::SectionKind;

#[derive(Properties, PartialEq)]
pub struct FaqItemProps {
    pub question: AttrValue,
    pub answer: AttrValue,
}

#[function_component(FaqItem)]
pub fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_bool_toggle(false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.toggle();
        })
    };

    html! {
        <div class={classes!("faq-item", (*is_open).then(|| "open"))}>
            <button class="faq-question" onclick={toggle} aria-expanded={(*is_open).to_string()}>
                <h3 class="question-text">{ props.question.clone() }</h3>
                <span class="toggle-icon">{"+"}</span>
            </button>
            {
                if *is_open {
                    html! { <div class="faq-answer">{ props.answer.clone() }</div> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqListProps {
    pub entries: &'static [FaqEntry],
    #[prop_or_default]
    pub query: AttrValue,
}

/// Accordion of questions, narrowed down by the support search box.
#[function_component(FaqList)]
pub fn faq_list(props: &FaqListProps) -> Html {
    let matches = filter_faq(props.entries, &props.query);

    html! {
        <Reveal kind={SectionKind::Support} id="faq" class="page-section narrow">
            <h2 class="section-title centered">{"Frequently Asked Questions"}</h2>
            {
                if matches.is_empty() {
                    html! { <p class="muted centered">{ format!("Nothing matches \"{}\". Try the contact form below.", props.query.trim()) }</p> }
                } else {
                    html! {}
                }
            }
            { for matches.into_iter().map(|entry| html! {
                <FaqItem key={entry.question} question={entry.question} answer={entry.answer} />
            }) }
        </Reveal>
    }
}
