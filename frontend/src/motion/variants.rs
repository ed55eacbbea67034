//! Named hidden/visible style states and their transitions, keyed by section kind.
//!
//! The table is read from `config/motion.json` once at startup and handed out
//! as `Rc<VariantRegistry>`; nothing mutates it afterwards.

use std::collections::{BTreeMap, HashMap};
use std::fmt::Write;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::motion::sequencer::format_number;
use crate::motion::viewport::InViewOptions;

const BUILTIN_CONFIG: &str = include_str!("../../config/motion.json");

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Hero,
    Feature,
    Story,
    Team,
    Checklist,
    Support,
    Contact,
    Plain,
}

impl SectionKind {
    pub const ALL: [SectionKind; 8] = [
        SectionKind::Hero,
        SectionKind::Feature,
        SectionKind::Story,
        SectionKind::Team,
        SectionKind::Checklist,
        SectionKind::Support,
        SectionKind::Contact,
        SectionKind::Plain,
    ];

    pub fn key(self) -> &'static str {
        match self {
            SectionKind::Hero => "hero",
            SectionKind::Feature => "feature",
            SectionKind::Story => "story",
            SectionKind::Team => "team",
            SectionKind::Checklist => "checklist",
            SectionKind::Support => "support",
            SectionKind::Contact => "contact",
            SectionKind::Plain => "plain",
        }
    }
}

impl FromStr for SectionKind {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.key() == s)
            .ok_or_else(|| RegistryError::UnknownKind(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleProperty {
    Opacity,
    X,
    Y,
    Scale,
    Rotate,
}

/// Target values for a set of animatable properties.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleState(BTreeMap<StyleProperty, f64>);

impl StyleState {
    pub fn from_pairs(pairs: &[(StyleProperty, f64)]) -> Self {
        StyleState(pairs.iter().copied().collect())
    }

    pub fn get(&self, property: StyleProperty) -> Option<f64> {
        self.0.get(&property).copied()
    }

    /// CSS `transform` value, empty when no transform property is set.
    pub fn transform(&self) -> String {
        let mut out = String::new();
        for (property, value) in &self.0 {
            let part = match property {
                StyleProperty::Opacity => continue,
                StyleProperty::X => format!("translateX({}px)", format_number(*value)),
                StyleProperty::Y => format!("translateY({}px)", format_number(*value)),
                StyleProperty::Scale => format!("scale({})", format_number(*value)),
                StyleProperty::Rotate => format!("rotate({}deg)", format_number(*value)),
            };
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&part);
        }
        out
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    CubicBezier([f64; 4]),
}

impl Default for Easing {
    fn default() -> Self {
        Easing::EaseOut
    }
}

impl Easing {
    pub fn to_css(&self) -> String {
        match self {
            Easing::Linear => "linear".to_string(),
            Easing::EaseIn => "ease-in".to_string(),
            Easing::EaseOut => "ease-out".to_string(),
            Easing::EaseInOut => "ease-in-out".to_string(),
            Easing::CubicBezier(points) => {
                let mut css = String::from("cubic-bezier(");
                for (i, point) in points.iter().enumerate() {
                    if i > 0 {
                        css.push_str(", ");
                    }
                    let _ = write!(css, "{}", format_number(*point));
                }
                css.push(')');
                css
            }
        }
    }
}

/// Timing for a variant change. All times are in seconds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransitionSpec {
    pub duration: f64,
    pub delay: f64,
    pub ease: Easing,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stagger_children: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay_children: Option<f64>,
}

impl Default for TransitionSpec {
    fn default() -> Self {
        Self {
            duration: 0.6,
            delay: 0.0,
            ease: Easing::default(),
            stagger_children: None,
            delay_children: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Variant {
    pub hidden: StyleState,
    pub visible: StyleState,
    pub transition: TransitionSpec,
}

/// Everything a region needs to animate: its own variant, the variant shared by
/// its children, and when it counts as in view.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MotionProfile {
    pub container: Variant,
    pub item: Variant,
    pub in_view: InViewOptions,
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("motion config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown section kind `{0}`")]
    UnknownKind(String),
    #[error("{scope}: variant has no `{state}` state")]
    MissingState { scope: String, state: &'static str },
    #[error("{scope}: in-view amount {amount} is outside 0..=1")]
    InvalidAmount { scope: String, amount: f64 },
    #[error("{scope}: `{field}` must be a finite, non-negative number of seconds, got {value}")]
    InvalidTiming {
        scope: String,
        field: &'static str,
        value: f64,
    },
    #[error("{scope}: cubic-bezier x values must lie within 0..=1")]
    InvalidEasing { scope: String },
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawVariant {
    hidden: Option<StyleState>,
    visible: Option<StyleState>,
    #[serde(default)]
    transition: TransitionSpec,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct RawProfile {
    container: RawVariant,
    item: Option<RawVariant>,
    #[serde(default)]
    in_view: InViewOptions,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRegistry {
    default: RawProfile,
    #[serde(default)]
    kinds: BTreeMap<String, RawProfile>,
}

fn check_timing(scope: &str, field: &'static str, value: f64) -> Result<(), RegistryError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(RegistryError::InvalidTiming {
            scope: scope.to_string(),
            field,
            value,
        })
    }
}

fn check_transition(scope: &str, transition: &TransitionSpec) -> Result<(), RegistryError> {
    check_timing(scope, "duration", transition.duration)?;
    check_timing(scope, "delay", transition.delay)?;
    if let Some(stagger) = transition.stagger_children {
        check_timing(scope, "staggerChildren", stagger)?;
    }
    if let Some(delay) = transition.delay_children {
        check_timing(scope, "delayChildren", delay)?;
    }
    if let Easing::CubicBezier([x1, _, x2, _]) = transition.ease {
        if !(0.0..=1.0).contains(&x1) || !(0.0..=1.0).contains(&x2) {
            return Err(RegistryError::InvalidEasing { scope: scope.to_string() });
        }
    }
    Ok(())
}

impl RawVariant {
    fn validate(self, scope: &str) -> Result<Variant, RegistryError> {
        let hidden = self.hidden.ok_or_else(|| RegistryError::MissingState {
            scope: scope.to_string(),
            state: "hidden",
        })?;
        let visible = self.visible.ok_or_else(|| RegistryError::MissingState {
            scope: scope.to_string(),
            state: "visible",
        })?;
        check_transition(scope, &self.transition)?;
        Ok(Variant {
            hidden,
            visible,
            transition: self.transition,
        })
    }
}

impl RawProfile {
    fn validate(self, scope: &str) -> Result<MotionProfile, RegistryError> {
        let container = self.container.validate(&format!("{}.container", scope))?;
        let item = match self.item {
            Some(item) => item.validate(&format!("{}.item", scope))?,
            // Children mirror the container when no item variant is given.
            None => Variant {
                hidden: container.hidden.clone(),
                visible: container.visible.clone(),
                transition: TransitionSpec {
                    duration: container.transition.duration,
                    ease: container.transition.ease.clone(),
                    ..TransitionSpec::default()
                },
            },
        };

        let amount = self.in_view.amount;
        if !(0.0..=1.0).contains(&amount) {
            return Err(RegistryError::InvalidAmount {
                scope: scope.to_string(),
                amount,
            });
        }

        Ok(MotionProfile {
            container,
            item,
            in_view: self.in_view,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct VariantRegistry {
    default: MotionProfile,
    kinds: HashMap<SectionKind, MotionProfile>,
}

impl VariantRegistry {
    pub fn from_json(source: &str) -> Result<Self, RegistryError> {
        let raw: RawRegistry = serde_json::from_str(source)?;
        let default = raw.default.validate("default")?;

        let mut kinds = HashMap::new();
        for (key, profile) in raw.kinds {
            let kind = SectionKind::from_str(&key)?;
            kinds.insert(kind, profile.validate(&format!("kinds.{}", key))?);
        }

        Ok(Self { default, kinds })
    }

    /// The table shipped in `config/motion.json`.
    pub fn builtin() -> Result<Self, RegistryError> {
        Self::from_json(BUILTIN_CONFIG)
    }

    /// Fade-and-rise for every kind. Used when no registry was provided.
    pub fn fallback() -> Self {
        let hidden = StyleState::from_pairs(&[(StyleProperty::Opacity, 0.0), (StyleProperty::Y, 30.0)]);
        let visible = StyleState::from_pairs(&[(StyleProperty::Opacity, 1.0), (StyleProperty::Y, 0.0)]);
        let item = Variant {
            hidden: hidden.clone(),
            visible: visible.clone(),
            transition: TransitionSpec {
                duration: 0.8,
                ..TransitionSpec::default()
            },
        };
        let container = Variant {
            hidden,
            visible,
            transition: TransitionSpec {
                duration: 0.8,
                stagger_children: Some(0.15),
                ..TransitionSpec::default()
            },
        };
        Self {
            default: MotionProfile {
                container,
                item,
                in_view: InViewOptions::default(),
            },
            kinds: HashMap::new(),
        }
    }

    pub fn profile_for(&self, kind: SectionKind) -> &MotionProfile {
        self.kinds.get(&kind).unwrap_or(&self.default)
    }

    pub fn variants_for(&self, kind: SectionKind) -> &Variant {
        &self.profile_for(kind).container
    }

    pub fn configured_kinds(&self) -> impl Iterator<Item = SectionKind> + '_ {
        self.kinds.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal(kinds: &str) -> String {
        format!(
            r#"{{
                "default": {{
                    "container": {{ "hidden": {{ "opacity": 0 }}, "visible": {{ "opacity": 1 }} }}
                }},
                "kinds": {{ {} }}
            }}"#,
            kinds
        )
    }

    #[test]
    fn builtin_config_is_valid() {
        let registry = VariantRegistry::builtin().expect("builtin motion config");
        assert!(registry.configured_kinds().count() >= 5);
        let team = registry.profile_for(SectionKind::Team);
        assert_eq!(team.container.transition.delay_children, Some(0.4));
        assert_eq!(team.container.transition.stagger_children, Some(0.2));
        assert!(!team.in_view.once);
    }

    #[test]
    fn missing_visible_state_fails_fast() {
        let source = minimal(r#""team": { "container": { "hidden": { "opacity": 0 } } }"#);
        match VariantRegistry::from_json(&source) {
            Err(RegistryError::MissingState { scope, state }) => {
                assert_eq!(scope, "kinds.team.container");
                assert_eq!(state, "visible");
            }
            other => panic!("expected MissingState, got {:?}", other),
        }
    }

    #[test]
    fn unconfigured_kind_uses_default() {
        let registry = VariantRegistry::from_json(&minimal("")).unwrap();
        assert_eq!(registry.profile_for(SectionKind::Feature), registry.profile_for(SectionKind::Plain));
        assert_eq!(registry.variants_for(SectionKind::Hero).visible.get(StyleProperty::Opacity), Some(1.0));
    }

    #[test]
    fn unknown_kind_key_is_rejected() {
        let source = minimal(r#""carousel": { "container": { "hidden": {}, "visible": {} } }"#);
        assert!(matches!(VariantRegistry::from_json(&source), Err(RegistryError::UnknownKind(key)) if key == "carousel"));
    }

    #[test]
    fn out_of_range_amount_is_rejected() {
        let source = minimal(
            r#""story": { "container": { "hidden": {}, "visible": {} }, "inView": { "amount": 1.5 } }"#,
        );
        assert!(matches!(VariantRegistry::from_json(&source), Err(RegistryError::InvalidAmount { .. })));
    }

    #[test]
    fn negative_stagger_is_rejected() {
        let source = minimal(
            r#""story": { "container": { "hidden": {}, "visible": {}, "transition": { "staggerChildren": -0.1 } } }"#,
        );
        assert!(matches!(
            VariantRegistry::from_json(&source),
            Err(RegistryError::InvalidTiming { field: "staggerChildren", .. })
        ));
    }

    #[test]
    fn bezier_x_out_of_range_is_rejected() {
        let source = minimal(
            r#""story": { "container": { "hidden": {}, "visible": {}, "transition": { "ease": { "cubicBezier": [1.2, 0, 0.5, 1] } } } }"#,
        );
        assert!(matches!(VariantRegistry::from_json(&source), Err(RegistryError::InvalidEasing { .. })));
    }

    #[test]
    fn item_defaults_to_container_states() {
        let registry = VariantRegistry::from_json(&minimal("")).unwrap();
        let profile = registry.profile_for(SectionKind::Plain);
        assert_eq!(profile.item.hidden, profile.container.hidden);
        assert_eq!(profile.item.transition.stagger_children, None);
    }

    #[test]
    fn transform_composes_in_property_order() {
        let state = StyleState::from_pairs(&[
            (StyleProperty::Rotate, 45.0),
            (StyleProperty::Y, 20.0),
            (StyleProperty::Opacity, 0.5),
            (StyleProperty::Scale, 0.95),
        ]);
        assert_eq!(state.transform(), "translateY(20px) scale(0.95) rotate(45deg)");
    }

    #[test]
    fn easing_renders_css_timing_functions() {
        assert_eq!(Easing::EaseInOut.to_css(), "ease-in-out");
        assert_eq!(Easing::CubicBezier([0.4, 0.0, 0.2, 1.0]).to_css(), "cubic-bezier(0.4, 0, 0.2, 1)");
    }

    #[test]
    fn fallback_matches_default_fade() {
        let registry = VariantRegistry::fallback();
        let variant = registry.variants_for(SectionKind::Story);
        assert_eq!(variant.hidden.get(StyleProperty::Y), Some(30.0));
        assert!(registry.profile_for(SectionKind::Story).in_view.once);
    }
}
