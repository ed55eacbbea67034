use std::rc::Rc;

use yew::prelude::*;

use crate::motion::sequencer::{render, RevealState};
use crate::motion::variants::{SectionKind, VariantRegistry};
use crate::motion::viewport::use_in_view;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub kind: SectionKind,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or("section")]
    pub tag: &'static str,
    #[prop_or("div")]
    pub item_tag: &'static str,
    #[prop_or_default]
    pub item_class: Classes,
    /// Rendered ahead of the staggered children, animating with the container.
    #[prop_or_default]
    pub lead: Html,
    #[prop_or_default]
    pub children: Children,
}

/// A region that animates in when it scrolls into view.
///
/// Each child is wrapped in `item_tag` and receives its own staggered delay.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let registry = use_context::<Rc<VariantRegistry>>().unwrap_or_else(|| Rc::new(VariantRegistry::fallback()));
    let node = use_node_ref();
    let profile = registry.profile_for(props.kind);
    let visible = use_in_view(node.clone(), profile.in_view);

    let state = if visible { RevealState::Visible } else { RevealState::Hidden };
    let styles = render(state, profile, props.children.len());

    let items = props.children.iter().zip(styles.children.iter()).map(|(child, applied)| {
        html! {
            <@{props.item_tag} class={classes!("reveal-item", props.item_class.clone())} style={applied.to_css()}>
                { child }
            </@>
        }
    });

    html! {
        <@{props.tag}
            ref={node}
            id={props.id.clone()}
            class={classes!("reveal", props.class.clone())}
            data-reveal={state.as_str()}
            style={styles.container.to_css()}
        >
            { props.lead.clone() }
            { for items }
        </@>
    }
}
