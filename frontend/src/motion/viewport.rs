use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Window};
use yew::prelude::*;

use crate::motion::sequencer::{RevealMachine, VisibilitySample};

/// Axis-aligned rectangle in CSS pixels, origin at the top-left of the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Grows every edge by `margin`. A negative margin shrinks the rectangle.
    pub fn expand(&self, margin: f64) -> Rect {
        Rect {
            x: self.x - margin,
            y: self.y - margin,
            width: self.width + margin * 2.0,
            height: self.height + margin * 2.0,
        }
    }

    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right <= left || bottom <= top {
            return None;
        }
        Some(Rect::new(left, top, right - left, bottom - top))
    }

    fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }
}

/// When a region counts as "in view".
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InViewOptions {
    /// Fraction of the region's area that has to be on screen. `0.0` means any overlap.
    pub amount: f64,
    /// Pixels added to each viewport edge before testing.
    pub margin: f64,
    /// Pin the region as visible after the first hit.
    pub once: bool,
}

impl Default for InViewOptions {
    fn default() -> Self {
        Self {
            amount: 0.0,
            margin: 0.0,
            once: true,
        }
    }
}

/// Share of `region`'s area that overlaps `viewport`, in `0.0..=1.0`.
pub fn visible_fraction(region: &Rect, viewport: &Rect) -> f64 {
    let area = region.area();
    if area <= 0.0 {
        return 0.0;
    }
    region
        .intersection(viewport)
        .map(|overlap| (overlap.area() / area).min(1.0))
        .unwrap_or(0.0)
}

pub fn is_in_view(region: &Rect, viewport_width: f64, viewport_height: f64, options: &InViewOptions) -> bool {
    let root = Rect::new(0.0, 0.0, viewport_width, viewport_height).expand(options.margin);
    if root.width <= 0.0 || root.height <= 0.0 {
        return false;
    }

    if region.area() <= 0.0 {
        return root.contains_point(region.x, region.y);
    }

    let fraction = visible_fraction(region, &root);
    if options.amount <= 0.0 {
        fraction > 0.0
    } else {
        fraction + f64::EPSILON >= options.amount
    }
}

fn measure(node: &NodeRef, window: &Window, options: &InViewOptions) -> Option<bool> {
    let element = node.cast::<Element>()?;
    if !element.is_connected() {
        return None;
    }
    let viewport_width = window.inner_width().ok()?.as_f64()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    let bounds = element.get_bounding_client_rect();
    let region = Rect::new(bounds.left(), bounds.top(), bounds.width(), bounds.height());
    Some(is_in_view(&region, viewport_width, viewport_height, options))
}

/// Tracks whether the element behind `node` is in the viewport.
///
/// Re-evaluated on mount and on every window `scroll`/`resize`. Listeners are
/// removed when the owning component unmounts.
#[hook]
pub fn use_in_view(node: NodeRef, options: InViewOptions) -> bool {
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |(node, options)| {
                let node = node.clone();
                let options = *options;
                let window = web_sys::window();
                let machine = Rc::new(RefCell::new(RevealMachine::new(options.once)));
                let seq = Rc::new(Cell::new(0u64));

                let evaluate: Rc<dyn Fn()> = {
                    let window = window.clone();
                    Rc::new(move || {
                        let next = seq.get() + 1;
                        seq.set(next);
                        let intersecting = match window.as_ref().and_then(|w| measure(&node, w, &options)) {
                            Some(hit) => hit,
                            None => {
                                debug!("region not laid out yet, treating as hidden");
                                false
                            }
                        };
                        let changed = machine.borrow_mut().observe(VisibilitySample { seq: next, intersecting });
                        if let Some(state) = changed {
                            debug!("region is now {:?}", state);
                            visible.set(state.is_visible());
                        }
                    })
                };

                let listener = {
                    let evaluate = evaluate.clone();
                    Closure::wrap(Box::new(move || evaluate()) as Box<dyn FnMut()>)
                };

                if let Some(window) = &window {
                    for event in ["scroll", "resize"] {
                        if window
                            .add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())
                            .is_err()
                        {
                            warn!("failed to attach {} listener", event);
                        }
                    }
                }

                evaluate();

                move || {
                    if let Some(window) = &window {
                        for event in ["scroll", "resize"] {
                            let _ = window.remove_event_listener_with_callback(event, listener.as_ref().unchecked_ref());
                        }
                    }
                    drop(listener);
                }
            },
            (node, options),
        );
    }

    *visible
}

#[cfg(test)]
mod tests {
    use super::*;

    const VW: f64 = 1280.0;
    const VH: f64 = 800.0;

    fn amount(amount: f64) -> InViewOptions {
        InViewOptions { amount, margin: 0.0, once: false }
    }

    fn margin(margin: f64) -> InViewOptions {
        InViewOptions { amount: 0.0, margin, once: false }
    }

    #[test]
    fn tall_region_passes_at_quarter_visible() {
        // 2000px region whose top 500px are on screen.
        let region = Rect::new(0.0, 300.0, VW, 2000.0);
        assert!((visible_fraction(&region, &Rect::new(0.0, 0.0, VW, VH)) - 0.25).abs() < 1e-9);
        assert!(is_in_view(&region, VW, VH, &amount(0.2)));
    }

    #[test]
    fn tall_region_fails_at_fifteen_percent() {
        let region = Rect::new(0.0, 500.0, VW, 2000.0);
        assert!((visible_fraction(&region, &Rect::new(0.0, 0.0, VW, VH)) - 0.15).abs() < 1e-9);
        assert!(!is_in_view(&region, VW, VH, &amount(0.2)));
    }

    #[test]
    fn region_taller_than_viewport_can_reach_partial_amounts() {
        let region = Rect::new(0.0, -600.0, VW, 2000.0);
        assert!(is_in_view(&region, VW, VH, &amount(0.4)));
        assert!(!is_in_view(&region, VW, VH, &amount(0.5)));
    }

    #[test]
    fn zero_amount_needs_any_overlap() {
        let below = Rect::new(0.0, VH, VW, 400.0);
        assert!(!is_in_view(&below, VW, VH, &amount(0.0)));
        let peeking = Rect::new(0.0, VH - 1.0, VW, 400.0);
        assert!(is_in_view(&peeking, VW, VH, &amount(0.0)));
    }

    #[test]
    fn negative_margin_shrinks_viewport() {
        let region = Rect::new(0.0, VH - 50.0, VW, 400.0);
        assert!(is_in_view(&region, VW, VH, &margin(0.0)));
        assert!(!is_in_view(&region, VW, VH, &margin(-100.0)));
    }

    #[test]
    fn positive_margin_triggers_early() {
        let region = Rect::new(0.0, VH + 50.0, VW, 400.0);
        assert!(!is_in_view(&region, VW, VH, &margin(0.0)));
        assert!(is_in_view(&region, VW, VH, &margin(100.0)));
    }

    #[test]
    fn collapsed_root_never_intersects() {
        let region = Rect::new(0.0, 0.0, VW, VH);
        assert!(!is_in_view(&region, VW, VH, &margin(-500.0)));
    }

    #[test]
    fn empty_region_uses_its_origin() {
        assert!(is_in_view(&Rect::new(10.0, 10.0, 0.0, 0.0), VW, VH, &amount(0.5)));
        assert!(!is_in_view(&Rect::new(10.0, VH + 10.0, 0.0, 0.0), VW, VH, &amount(0.5)));
    }

    #[test]
    fn full_amount_needs_whole_region() {
        let inside = Rect::new(100.0, 100.0, 200.0, 200.0);
        assert!(is_in_view(&inside, VW, VH, &amount(1.0)));
        let clipped = Rect::new(100.0, VH - 100.0, 200.0, 200.0);
        assert!(!is_in_view(&clipped, VW, VH, &amount(1.0)));
    }

    #[test]
    fn intersection_is_none_for_touching_edges() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert_eq!(a.intersection(&b), None);
    }
}
