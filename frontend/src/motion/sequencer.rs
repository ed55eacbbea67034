use std::fmt::Write;

use crate::motion::variants::{MotionProfile, StyleProperty, StyleState, TransitionSpec, Variant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Visible,
}

impl RevealState {
    pub fn is_visible(self) -> bool {
        matches!(self, RevealState::Visible)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RevealState::Hidden => "hidden",
            RevealState::Visible => "visible",
        }
    }
}

/// One intersection reading. `seq` grows with every scroll/resize evaluation.
#[derive(Clone, Copy, Debug)]
pub struct VisibilitySample {
    pub seq: u64,
    pub intersecting: bool,
}

/// Hidden/Visible state for a single region.
///
/// With `once` set, Visible is terminal. Samples older than the last accepted
/// one are dropped so a late `false` can never undo a newer `true`.
#[derive(Clone, Debug)]
pub struct RevealMachine {
    state: RevealState,
    once: bool,
    last_seq: Option<u64>,
}

impl RevealMachine {
    pub fn new(once: bool) -> Self {
        Self {
            state: RevealState::Hidden,
            once,
            last_seq: None,
        }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state.is_visible()
    }

    /// Feeds a sample, returning the new state if it changed.
    pub fn observe(&mut self, sample: VisibilitySample) -> Option<RevealState> {
        if self.last_seq.map_or(false, |last| sample.seq <= last) {
            return None;
        }
        self.last_seq = Some(sample.seq);

        let next = match (self.state, sample.intersecting) {
            (RevealState::Hidden, true) => RevealState::Visible,
            (RevealState::Visible, false) if !self.once => RevealState::Hidden,
            (current, _) => current,
        };

        if next == self.state {
            None
        } else {
            self.state = next;
            Some(next)
        }
    }
}

/// A resolved style target plus the transition that gets there.
#[derive(Clone, Debug, PartialEq)]
pub struct AppliedStyle<'a> {
    pub state: RevealState,
    pub style: &'a StyleState,
    pub transition: TransitionSpec,
}

impl AppliedStyle<'_> {
    fn pick<'v>(variant: &'v Variant, state: RevealState) -> &'v StyleState {
        match state {
            RevealState::Hidden => &variant.hidden,
            RevealState::Visible => &variant.visible,
        }
    }

    /// Inline CSS for the element, e.g. `opacity: 0; transform: translateY(30px); transition: ...`.
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        if let Some(opacity) = self.style.get(StyleProperty::Opacity) {
            let _ = write!(css, "opacity: {};", format_number(opacity));
        }
        let transform = self.style.transform();
        let has_transform = !transform.is_empty();
        if has_transform {
            let _ = write!(css, " transform: {};", transform);
        }

        let mut animated = Vec::new();
        if self.style.get(StyleProperty::Opacity).is_some() {
            animated.push("opacity");
        }
        if has_transform {
            animated.push("transform");
        }
        if !animated.is_empty() {
            let timing = format!(
                "{}s {} {}s",
                format_number(self.transition.duration),
                self.transition.ease.to_css(),
                format_number(self.transition.delay)
            );
            let parts: Vec<String> = animated.iter().map(|property| format!("{} {}", property, timing)).collect();
            let _ = write!(css, " transition: {};", parts.join(", "));
        }
        css.trim_start().to_string()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RegionStyles<'a> {
    pub container: AppliedStyle<'a>,
    pub children: Vec<AppliedStyle<'a>>,
}

/// Start delay for the child at `ordinal`.
pub fn child_delay(transition: &TransitionSpec, ordinal: usize) -> f64 {
    transition.delay_children.unwrap_or(0.0) + ordinal as f64 * transition.stagger_children.unwrap_or(0.0)
}

/// Earliest time (seconds after the region turns visible) at which every child has settled.
pub fn completion_time(profile: &MotionProfile, child_count: usize) -> f64 {
    if child_count == 0 {
        return profile.container.transition.delay + profile.container.transition.duration;
    }
    child_delay(&profile.container.transition, child_count - 1) + profile.item.transition.duration
}

pub fn render(state: RevealState, profile: &MotionProfile, child_count: usize) -> RegionStyles<'_> {
    let container = AppliedStyle {
        state,
        style: AppliedStyle::pick(&profile.container, state),
        transition: profile.container.transition.clone(),
    };

    let item_style = AppliedStyle::pick(&profile.item, state);
    let children = (0..child_count)
        .map(|ordinal| AppliedStyle {
            state,
            style: item_style,
            transition: TransitionSpec {
                delay: child_delay(&profile.container.transition, ordinal),
                ..profile.item.transition.clone()
            },
        })
        .collect();

    RegionStyles { container, children }
}

pub(crate) fn format_number(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == rounded.trunc() {
        format!("{}", rounded as i64)
    } else {
        format!("{}", rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::variants::{Easing, SectionKind, VariantRegistry};

    fn sample(seq: u64, intersecting: bool) -> VisibilitySample {
        VisibilitySample { seq, intersecting }
    }

    fn team_profile() -> MotionProfile {
        VariantRegistry::builtin().unwrap().profile_for(SectionKind::Team).clone()
    }

    #[test]
    fn once_region_stays_visible() {
        let mut machine = RevealMachine::new(true);
        assert_eq!(machine.observe(sample(1, true)), Some(RevealState::Visible));
        assert_eq!(machine.observe(sample(2, false)), None);
        assert_eq!(machine.observe(sample(3, false)), None);
        assert!(machine.is_visible());
    }

    #[test]
    fn repeating_region_tracks_ground_truth() {
        let mut machine = RevealMachine::new(false);
        let truth = [false, true, true, false, true, false, false, true];
        for (tick, hit) in truth.iter().enumerate() {
            machine.observe(sample(tick as u64 + 1, *hit));
            assert_eq!(machine.is_visible(), *hit, "tick {}", tick);
        }
    }

    #[test]
    fn stale_sample_is_ignored() {
        let mut machine = RevealMachine::new(false);
        machine.observe(sample(5, true));
        assert_eq!(machine.observe(sample(4, false)), None);
        assert_eq!(machine.observe(sample(5, false)), None);
        assert_eq!(machine.state(), RevealState::Visible);
        assert_eq!(machine.observe(sample(6, false)), Some(RevealState::Hidden));
    }

    #[test]
    fn repeated_visible_reports_no_change() {
        let mut machine = RevealMachine::new(false);
        assert!(machine.observe(sample(1, true)).is_some());
        assert!(machine.observe(sample(2, true)).is_none());
    }

    #[test]
    fn team_children_are_staggered() {
        let profile = team_profile();
        let styles = render(RevealState::Visible, &profile, 3);
        let delays: Vec<f64> = styles.children.iter().map(|c| c.transition.delay).collect();
        for (got, want) in delays.iter().zip([0.4, 0.6, 0.8]) {
            assert!((got - want).abs() < 1e-9, "{:?}", delays);
        }
        assert!((completion_time(&profile, 3) - (0.8 + profile.item.transition.duration)).abs() < 1e-9);
    }

    #[test]
    fn zero_stagger_gives_constant_delay() {
        let transition = TransitionSpec {
            delay_children: Some(0.3),
            stagger_children: Some(0.0),
            ..TransitionSpec::default()
        };
        let delays: Vec<f64> = (0..4).map(|n| child_delay(&transition, n)).collect();
        assert!(delays.iter().all(|d| (*d - 0.3).abs() < 1e-9));
    }

    #[test]
    fn positive_stagger_strictly_increases() {
        let transition = TransitionSpec {
            stagger_children: Some(0.15),
            ..TransitionSpec::default()
        };
        let delays: Vec<f64> = (0..6).map(|n| child_delay(&transition, n)).collect();
        assert!(delays.windows(2).all(|pair| pair[1] > pair[0]));
    }

    #[test]
    fn rendering_visible_twice_is_identical() {
        let profile = team_profile();
        let first = render(RevealState::Visible, &profile, 3);
        let second = render(RevealState::Visible, &profile, 3);
        assert_eq!(first, second);
        let css: Vec<String> = first.children.iter().map(AppliedStyle::to_css).collect();
        let again: Vec<String> = second.children.iter().map(AppliedStyle::to_css).collect();
        assert_eq!(css, again);
    }

    #[test]
    fn hidden_state_uses_hidden_targets() {
        let profile = team_profile();
        let styles = render(RevealState::Hidden, &profile, 1);
        assert_eq!(styles.container.style, &profile.container.hidden);
        assert_eq!(styles.children[0].style, &profile.item.hidden);
    }

    #[test]
    fn css_includes_transform_and_transition() {
        let hidden = StyleState::from_pairs(&[(StyleProperty::Opacity, 0.0), (StyleProperty::Y, 30.0)]);
        let applied = AppliedStyle {
            state: RevealState::Hidden,
            style: &hidden,
            transition: TransitionSpec {
                duration: 0.8,
                delay: 0.2,
                ease: Easing::EaseInOut,
                ..TransitionSpec::default()
            },
        };
        assert_eq!(
            applied.to_css(),
            "opacity: 0; transform: translateY(30px); transition: opacity 0.8s ease-in-out 0.2s, transform 0.8s ease-in-out 0.2s;"
        );
    }
}
