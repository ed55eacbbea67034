use log::debug;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::hero::Hero;
use crate::components::reveal::Reveal;
use crate::content::{Cta, CtaTarget, Section};
use crate::motion::variants::SectionKind;
use crate::Route;

pub fn render_cta(cta: &Cta) -> Html {
    let class = if cta.primary { "cta-button primary" } else { "cta-button outline" };
    match &cta.target {
        CtaTarget::Route(route) => html! {
            <Link<Route> to={route.clone()} classes={class}>
                { cta.label }
            </Link<Route>>
        },
        CtaTarget::Anchor(href) => html! {
            <a href={*href} class={class}>{ cta.label }{" →"}</a>
        },
    }
}

fn stars(rating: u8) -> String {
    let filled = rating.min(5) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

#[derive(Properties, PartialEq)]
pub struct PageHeaderProps {
    pub title: AttrValue,
    pub lead: AttrValue,
}

/// Title block for pages without a full-height hero.
#[function_component(PageHeader)]
pub fn page_header(props: &PageHeaderProps) -> Html {
    html! {
        <Reveal kind={SectionKind::Hero} tag="header" class="page-header grid-backdrop">
            <h1>{ props.title.clone() }</h1>
            <p class="section-lead">{ props.lead.clone() }</p>
        </Reveal>
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionViewProps {
    pub section: Section,
}

/// Renders any page section as a revealed region.
#[function_component(SectionView)]
pub fn section_view(props: &SectionViewProps) -> Html {
    let section = &props.section;
    let kind = section.kind();
    let id = section.id().map(AttrValue::from);
    debug!("rendering {:?} section {:?} with {} elements", kind, section.id(), section.child_count());

    match section {
        Section::Hero { title, subtitle, image, ctas, parallax } => html! {
            <Hero
                title={*title}
                subtitle={*subtitle}
                image={*image}
                ctas={ctas.to_vec()}
                parallax={*parallax}
            />
        },
        Section::Intro { heading, body, cta, .. } => html! {
            <Reveal {kind} {id} class="page-section intro-section">
                <h2 class="section-title">{ *heading }</h2>
                { for body.iter().map(|paragraph| html! { <p class="section-lead">{ *paragraph }</p> }) }
                { for cta.iter().map(render_cta) }
            </Reveal>
        },
        Section::CardGrid { heading, intro, cards, .. } => html! {
            <Reveal {kind} {id} class="page-section" item_class="grid-cell">
                <div class="section-header">
                    <h2 class="section-title">{ *heading }</h2>
                    { for intro.iter().map(|text| html! { <p class="section-lead">{ *text }</p> }) }
                </div>
                { for cards.iter().map(|card| html! {
                    <div class="card">
                        { for card.image.iter().map(|image| html! {
                            <img src={image.url()} alt={card.title} class="card-image" loading="lazy" />
                        }) }
                        <h3>{ card.title }</h3>
                        <p>{ card.body }</p>
                    </div>
                }) }
            </Reveal>
        },
        Section::Split { heading, blocks, bullets, image, .. } => html! {
            <Reveal {kind} {id} class="page-section split-section">
                <h2 class="section-title">{ *heading }</h2>
                { for blocks.iter().map(|block| html! {
                    <div class="text-block">
                        { for block.heading.iter().map(|sub| html! { <h3 class="accent">{ *sub }</h3> }) }
                        <p>{ block.text }</p>
                    </div>
                }) }
                { for (!bullets.is_empty()).then(|| html! {
                    <ul class="bullet-list">
                        { for bullets.iter().map(|bullet| html! { <li>{ *bullet }</li> }) }
                    </ul>
                }) }
                <img src={image.url()} alt={*heading} class="split-image" loading="lazy" />
            </Reveal>
        },
        Section::Checklist { heading, items, .. } => html! {
            <Reveal {kind} {id} tag="div" class="card checklist-card">
                <h3>{ *heading }</h3>
                { for items.iter().map(|item| html! {
                    <div class="check-item">
                        <span class="check-icon">{ item.icon }</span>
                        <span>{ item.text }</span>
                    </div>
                }) }
            </Reveal>
        },
        Section::People { heading, members, .. } => html! {
            <Reveal {kind} {id} class="page-section" item_class="person"
                lead={html! { <h2 class="section-title centered">{ *heading }</h2> }}>
                { for members.iter().map(|member| html! {
                    <>
                        <img src={member.image.url()} alt={member.name} class="avatar" loading="lazy" />
                        <h3>{ member.name }</h3>
                        <p class="muted">{ member.title }</p>
                    </>
                }) }
            </Reveal>
        },
        Section::Values { heading, values, .. } => html! {
            <Reveal {kind} {id} class="page-section" item_class="grid-cell centered">
                <h2 class="section-title centered">{ *heading }</h2>
                { for values.iter().map(|value| html! {
                    <>
                        <div class="value-icon">{ value.icon }</div>
                        <h3>{ value.title }</h3>
                        <p class="muted">{ value.body }</p>
                    </>
                }) }
            </Reveal>
        },
        Section::Testimonials { heading, intro, entries, .. } => html! {
            <Reveal {kind} {id} class="page-section" item_class="grid-cell">
                <div class="section-header">
                    <h2 class="section-title">{ *heading }</h2>
                    <p class="section-lead">{ *intro }</p>
                </div>
                { for entries.iter().map(|entry| html! {
                    <div class="card testimonial">
                        <div class="testimonial-author">
                            <img src={crate::config::placeholder_image(200, 200, "User")} alt="User avatar" class="avatar small" />
                            <div>
                                <h4>{ entry.author }</h4>
                                <p class="muted">{ entry.role }</p>
                            </div>
                        </div>
                        <p class="quote">{ format!("\"{}\"", entry.quote) }</p>
                        <div class="stars" aria-label={format!("{} out of 5", entry.rating)}>{ stars(entry.rating) }</div>
                    </div>
                }) }
            </Reveal>
        },
        Section::Faq { heading, entries, .. } => html! {
            <Reveal {kind} {id} class="page-section">
                <h2 class="section-title">{ *heading }</h2>
                { for entries.iter().map(|entry| html! {
                    <div class="card faq-static">
                        <h3>{ entry.question }</h3>
                        <p>{ entry.answer }</p>
                    </div>
                }) }
            </Reveal>
        },
        Section::Steps { heading, steps, .. } => html! {
            <Reveal {kind} {id} class="page-section">
                <h2 class="section-title">{ *heading }</h2>
                { for steps.iter().enumerate().map(|(index, step)| html! {
                    <div class="step">
                        <div class="step-number">{ (index + 1).to_string() }</div>
                        <p>{ *step }</p>
                    </div>
                }) }
            </Reveal>
        },
        Section::Info { heading, body, bullets, .. } => html! {
            <Reveal {kind} {id} class="page-section narrow">
                <h2 class="section-title">{ *heading }</h2>
                <p class="section-lead">{ *body }</p>
                { for (!bullets.is_empty()).then(|| html! {
                    <ul class="bullet-list">
                        { for bullets.iter().map(|bullet| html! { <li>{ *bullet }</li> }) }
                    </ul>
                }) }
            </Reveal>
        },
        Section::Cta { heading, body, cta, .. } => html! {
            <Reveal {kind} {id} class="page-section narrow centered">
                <h2 class="section-title">{ *heading }</h2>
                <p class="section-lead">{ *body }</p>
                { render_cta(cta) }
            </Reveal>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_fill_up_to_rating() {
        assert_eq!(stars(5), "★★★★★");
        assert_eq!(stars(3), "★★★☆☆");
        assert_eq!(stars(9), "★★★★★");
    }
}
