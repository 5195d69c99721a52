//! Full-screen two-layer wipe used when jumping between page sections.
//!
//! The overlay elements belong to one `TransitionOverlay`, created when the
//! provider mounts and removed when it unmounts. Components reach it through
//! the `PageTransition` context.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, Document, HtmlElement, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::animation::easing;
use crate::config;

const CREAM_ID: &str = "page-transition-overlay-cream";
const EMERALD_ID: &str = "page-transition-overlay-emerald";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    Cream,
    Emerald,
}

impl Layer {
    fn id(self) -> &'static str {
        match self {
            Layer::Cream => CREAM_ID,
            Layer::Emerald => EMERALD_ID,
        }
    }

    fn color(self) -> &'static str {
        match self {
            Layer::Cream => "#F5F0E8",
            Layer::Emerald => "#2E7D5A",
        }
    }

    fn z_index(self) -> u32 {
        match self {
            Layer::Cream => 9997,
            Layer::Emerald => 9998,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WipeAction {
    /// Grow from the left edge until the layer covers the screen.
    Cover { layer: Layer, duration_ms: u32 },
    /// Shrink toward the right edge.
    Uncover { layer: Layer, duration_ms: u32 },
    /// Everything is hidden: jump to the destination.
    Scroll,
    /// Put both layers back to their collapsed resting state.
    Reset,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WipeStep {
    pub at_ms: u32,
    pub action: WipeAction,
}

const CREAM_MS: u32 = 300;
const EMERALD_MS: u32 = 350;
const OVERLAP_MS: u32 = 150;

/// Cream wipes in, emerald follows with an overlap, the page jumps while
/// covered, then both wipe out to the right in reverse order.
pub fn wipe_schedule() -> Vec<WipeStep> {
    let emerald_in = CREAM_MS - OVERLAP_MS;
    let covered = emerald_in + EMERALD_MS;
    let cream_out = covered + EMERALD_MS - OVERLAP_MS;
    let done = cream_out + CREAM_MS;
    vec![
        WipeStep { at_ms: 0, action: WipeAction::Cover { layer: Layer::Cream, duration_ms: CREAM_MS } },
        WipeStep { at_ms: emerald_in, action: WipeAction::Cover { layer: Layer::Emerald, duration_ms: EMERALD_MS } },
        WipeStep { at_ms: covered, action: WipeAction::Scroll },
        WipeStep { at_ms: covered, action: WipeAction::Uncover { layer: Layer::Emerald, duration_ms: EMERALD_MS } },
        WipeStep { at_ms: cream_out, action: WipeAction::Uncover { layer: Layer::Cream, duration_ms: CREAM_MS } },
        WipeStep { at_ms: done, action: WipeAction::Reset },
    ]
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScrollTarget {
    Top,
    Section(String),
}

impl ScrollTarget {
    /// Accepts `"top"`, `"contact"` or `"#contact"`.
    pub fn from_id(id: &str) -> Self {
        match id.trim_start_matches('#') {
            "" | "top" => ScrollTarget::Top,
            section => ScrollTarget::Section(section.to_string()),
        }
    }
}

/// Scroll position that leaves room for the header above the section.
pub fn section_scroll_top(offset_top: f64) -> f64 {
    offset_top - config::TRANSITION_SCROLL_OFFSET
}

fn scroll_instantly(top: f64) {
    if let Some(window) = window() {
        let mut options = ScrollToOptions::new();
        options.top(top);
        options.behavior(ScrollBehavior::Instant);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

fn focus_first_field(section: &HtmlElement) -> Option<()> {
    let field = section.query_selector("input, textarea").ok()??;
    field.dyn_into::<HtmlElement>().ok()?.focus().ok()
}

pub struct TransitionOverlay {
    document: Document,
    cream: HtmlElement,
    emerald: HtmlElement,
    timers: RefCell<Vec<Timeout>>,
}

impl TransitionOverlay {
    /// Appends both layers to `<body>`, replacing any left behind by an
    /// earlier instance.
    pub fn mount() -> Result<Self, JsValue> {
        let document = window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;

        let create = |layer: Layer| -> Result<HtmlElement, JsValue> {
            if let Some(stale) = document.get_element_by_id(layer.id()) {
                stale.remove();
            }
            let element: HtmlElement = document.create_element("div")?.dyn_into()?;
            element.set_id(layer.id());
            element.set_attribute(
                "style",
                &format!(
                    "position: fixed; top: 0; left: 0; width: 100vw; height: 100vh; background: {}; \
                     z-index: {}; transform: scaleX(0); transform-origin: left center; \
                     pointer-events: none; overflow: hidden;",
                    layer.color(),
                    layer.z_index()
                ),
            )?;
            body.append_child(&element)?;
            Ok(element)
        };

        let cream = create(Layer::Cream)?;
        let emerald = create(Layer::Emerald)?;
        Ok(TransitionOverlay { document, cream, emerald, timers: RefCell::new(Vec::new()) })
    }

    fn layer(&self, layer: Layer) -> &HtmlElement {
        match layer {
            Layer::Cream => &self.cream,
            Layer::Emerald => &self.emerald,
        }
    }

    fn apply(&self, action: WipeAction, target: &ScrollTarget, focus_input: bool) {
        let style_of = |layer: Layer| self.layer(layer).style();
        let result = (|| -> Result<(), JsValue> {
            match action {
                WipeAction::Cover { layer, duration_ms } => {
                    let style = style_of(layer);
                    style.set_property("transition", "none")?;
                    style.set_property("transform-origin", "left center")?;
                    style.set_property("transform", "scaleX(0)")?;
                    // Flush so the collapsed state is the transition start.
                    let _ = self.layer(layer).offset_width();
                    style.set_property(
                        "transition",
                        &format!("transform {}ms {}", duration_ms, easing::css::POWER2_IN_OUT),
                    )?;
                    style.set_property("transform", "scaleX(1)")?;
                }
                WipeAction::Uncover { layer, duration_ms } => {
                    let style = style_of(layer);
                    style.set_property("transform-origin", "right center")?;
                    style.set_property(
                        "transition",
                        &format!("transform {}ms {}", duration_ms, easing::css::POWER2_IN_OUT),
                    )?;
                    style.set_property("transform", "scaleX(0)")?;
                }
                WipeAction::Scroll => self.scroll_to(target, focus_input),
                WipeAction::Reset => {
                    for layer in [Layer::Cream, Layer::Emerald] {
                        let style = style_of(layer);
                        style.set_property("transition", "none")?;
                        style.set_property("transform", "scaleX(0)")?;
                    }
                }
            }
            Ok(())
        })();
        if let Err(e) = result {
            warn!("Page transition step {:?} failed: {:?}", action, e);
        }
    }

    fn scroll_to(&self, target: &ScrollTarget, focus_input: bool) {
        match target {
            ScrollTarget::Top => scroll_instantly(0.0),
            ScrollTarget::Section(id) => {
                let Some(section) = self
                    .document
                    .get_element_by_id(id)
                    .and_then(|e| e.dyn_into::<HtmlElement>().ok())
                else {
                    warn!("Page transition target #{} not found", id);
                    return;
                };
                scroll_instantly(section_scroll_top(section.offset_top() as f64));
                if focus_input {
                    let timer = Timeout::new(config::TRANSITION_FOCUS_DELAY_MILLIS, move || {
                        focus_first_field(&section);
                    });
                    self.timers.borrow_mut().push(timer);
                }
            }
        }
    }

    /// Runs the wipe and lands on `target`. A new navigation cancels the
    /// steps still pending from the previous one.
    pub fn navigate(self: &Rc<Self>, target: ScrollTarget, focus_input: bool) {
        debug!("Page transition to {:?}", target);
        let target = Rc::new(target);
        let timers: Vec<Timeout> = wipe_schedule()
            .into_iter()
            .map(|step| {
                let overlay = Rc::downgrade(self);
                let target = target.clone();
                Timeout::new(step.at_ms, move || {
                    if let Some(overlay) = overlay.upgrade() {
                        overlay.apply(step.action, &target, focus_input);
                    }
                })
            })
            .collect();
        *self.timers.borrow_mut() = timers;
    }

    /// Cancels pending steps and removes both layers. Safe to call twice.
    pub fn cleanup(&self) {
        self.timers.borrow_mut().clear();
        self.cream.remove();
        self.emerald.remove();
    }
}

impl Drop for TransitionOverlay {
    fn drop(&mut self) {
        self.cleanup();
    }
}

/// Context handle. Falls back to a plain jump when no overlay is mounted.
#[derive(Clone, Default)]
pub struct PageTransition {
    overlay: Option<Rc<TransitionOverlay>>,
}

impl PartialEq for PageTransition {
    fn eq(&self, other: &Self) -> bool {
        match (&self.overlay, &other.overlay) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl PageTransition {
    pub fn navigate_to(&self, target_id: &str, focus_input: bool) {
        let target = ScrollTarget::from_id(target_id);
        match &self.overlay {
            Some(overlay) => overlay.navigate(target, focus_input),
            None => match target {
                ScrollTarget::Top => scroll_instantly(0.0),
                ScrollTarget::Section(id) => {
                    if let Some(section) = window()
                        .and_then(|w| w.document())
                        .and_then(|d| d.get_element_by_id(&id))
                    {
                        section.scroll_into_view();
                    }
                }
            },
        }
    }

    pub fn navigate_to_top(&self) {
        self.navigate_to("top", false);
    }
}

#[hook]
pub fn use_page_transition() -> PageTransition {
    use_context::<PageTransition>().unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct PageTransitionProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(PageTransitionProvider)]
pub fn page_transition_provider(props: &PageTransitionProviderProps) -> Html {
    let transition = use_state(PageTransition::default);

    {
        let transition = transition.clone();
        use_effect_with_deps(
            move |_| {
                let overlay = match TransitionOverlay::mount() {
                    Ok(overlay) => Some(Rc::new(overlay)),
                    Err(e) => {
                        warn!("Page transition overlay unavailable: {:?}", e);
                        None
                    }
                };
                transition.set(PageTransition { overlay: overlay.clone() });
                move || {
                    if let Some(overlay) = overlay {
                        overlay.cleanup();
                    }
                }
            },
            (),
        );
    }

    html! {
        <ContextProvider<PageTransition> context={(*transition).clone()}>
            { for props.children.iter() }
        </ContextProvider<PageTransition>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_matches_the_wipe_timing() {
        let steps = wipe_schedule();
        let at = |action: WipeAction| steps.iter().find(|s| s.action == action).map(|s| s.at_ms);

        assert_eq!(at(WipeAction::Cover { layer: Layer::Cream, duration_ms: 300 }), Some(0));
        assert_eq!(at(WipeAction::Cover { layer: Layer::Emerald, duration_ms: 350 }), Some(150));
        assert_eq!(at(WipeAction::Scroll), Some(500));
        assert_eq!(at(WipeAction::Uncover { layer: Layer::Emerald, duration_ms: 350 }), Some(500));
        assert_eq!(at(WipeAction::Uncover { layer: Layer::Cream, duration_ms: 300 }), Some(700));
        assert_eq!(at(WipeAction::Reset), Some(1000));
    }

    #[test]
    fn schedule_is_ordered_and_scrolls_only_when_covered() {
        let steps = wipe_schedule();
        assert!(steps.windows(2).all(|w| w[0].at_ms <= w[1].at_ms));

        let scroll_at = steps.iter().find(|s| s.action == WipeAction::Scroll).unwrap().at_ms;
        for step in &steps {
            if let WipeAction::Cover { duration_ms, .. } = step.action {
                assert!(step.at_ms + duration_ms <= scroll_at);
            }
        }
        assert_eq!(steps.last().unwrap().action, WipeAction::Reset);
    }

    #[test]
    fn targets_parse_from_ids_and_anchors() {
        assert_eq!(ScrollTarget::from_id("top"), ScrollTarget::Top);
        assert_eq!(ScrollTarget::from_id("#"), ScrollTarget::Top);
        assert_eq!(ScrollTarget::from_id("#pricing"), ScrollTarget::Section("pricing".into()));
        assert_eq!(ScrollTarget::from_id("contact"), ScrollTarget::Section("contact".into()));
    }

    #[test]
    fn section_scroll_leaves_room_for_header() {
        assert_eq!(section_scroll_top(1_280.0), 1_200.0);
    }
}
