use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::animation::easing;

// Browsers report ratios a hair under the threshold that fired the callback.
const RATIO_SLACK: f64 = 0.01;

/// Disconnects on drop and keeps the JS callback alive until then.
struct InViewObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for InViewObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// What a revealed node does once it leaves the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Replay {
    /// Stays revealed; the observer disconnects after the first reveal.
    Never,
    /// Hides whenever it leaves, through either edge.
    OnExit,
    /// Hides only when it drops back below the viewport. Scrolling past it
    /// through the top keeps it revealed.
    BelowFold,
}

/// Visibility after an observer entry, or `None` to leave it unchanged.
/// `top` is the node's top edge relative to the viewport.
pub fn visibility_after(replay: Replay, entered: bool, top: f64) -> Option<bool> {
    if entered {
        return Some(true);
    }
    match replay {
        Replay::Never => None,
        Replay::OnExit => Some(false),
        Replay::BelowFold => Some(top <= 0.0),
    }
}

fn observe(element: &Element, amount: f64, replay: Replay, visible: UseStateSetter<bool>) -> Option<InViewObserver> {
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            let entered = entry.is_intersecting() && entry.intersection_ratio() + RATIO_SLACK >= amount;
            let top = entry.bounding_client_rect().top();
            if let Some(next) = visibility_after(replay, entered, top) {
                visible.set(next);
            }
            if entered && replay == Replay::Never {
                observer.disconnect();
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let mut options = IntersectionObserverInit::new();
    options.threshold(&JsValue::from_f64(amount.clamp(0.0, 1.0)));

    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => observer,
        Err(e) => {
            warn!("IntersectionObserver unavailable: {:?}", e);
            return None;
        }
    };
    observer.observe(element);
    Some(InViewObserver { observer, _callback: callback })
}

/// True once `amount` of the node is inside the viewport; `replay`
/// decides when it turns false again.
#[hook]
pub fn use_in_view(node: NodeRef, amount: f64, replay: Replay) -> bool {
    let visible = use_state_eq(|| false);
    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |(node, amount, replay)| {
                let observer = node
                    .cast::<Element>()
                    .and_then(|element| observe(&element, *amount, *replay, visible.setter()));
                if observer.is_none() {
                    visible.set(true);
                }
                move || drop(observer)
            },
            (node, amount, replay),
        );
    }
    *visible
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Up,
    Down,
    Left,
    Right,
    None,
}

impl Direction {
    /// Starting offset in px; the element slides from here to its place.
    pub fn offset(self) -> (f64, f64) {
        match self {
            Direction::Up => (0.0, 40.0),
            Direction::Down => (0.0, -40.0),
            Direction::Left => (40.0, 0.0),
            Direction::Right => (-40.0, 0.0),
            Direction::None => (0.0, 0.0),
        }
    }
}

pub fn fade_style(direction: Direction, visible: bool, duration: f64, delay: f64) -> String {
    let (x, y) = if visible { (0.0, 0.0) } else { direction.offset() };
    format!(
        "opacity: {}; transform: translate({}px, {}px); transition: opacity {d}s {ease} {delay}s, transform {d}s {ease} {delay}s;",
        if visible { 1 } else { 0 },
        x,
        y,
        d = duration,
        ease = easing::css::SOFT,
        delay = delay,
    )
}

#[derive(Properties, PartialEq)]
pub struct FadeInProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub direction: Direction,
    #[prop_or(0.0)]
    pub delay: f64,
    #[prop_or(0.6)]
    pub duration: f64,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(true)]
    pub once: bool,
    #[prop_or(0.3)]
    pub amount: f64,
}

#[function_component(FadeIn)]
pub fn fade_in(props: &FadeInProps) -> Html {
    let node = use_node_ref();
    let replay = if props.once { Replay::Never } else { Replay::OnExit };
    let visible = use_in_view(node.clone(), props.amount, replay);

    html! {
        <div ref={node} class={props.class.clone()} style={fade_style(props.direction, visible, props.duration, props.delay)}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ScrollRevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    /// Seconds between consecutive children.
    #[prop_or(0.0)]
    pub stagger: f64,
    #[prop_or(0.8)]
    pub duration: f64,
    #[prop_or(0.2)]
    pub amount: f64,
}

/// Reveals each child in turn once the container scrolls into view, and
/// hides them again when it scrolls back out below the fold.
#[function_component(ScrollReveal)]
pub fn scroll_reveal(props: &ScrollRevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), props.amount, Replay::BelowFold);

    let items = props.children.iter().enumerate().map(|(i, child)| {
        let delay = if visible { i as f64 * props.stagger } else { 0.0 };
        html! {
            <div class="scroll-reveal-item" style={fade_style(Direction::Up, visible, props.duration, delay)}>
                { child }
            </div>
        }
    });

    html! {
        <div ref={node} class={props.class.clone()}>
            { for items }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_point_back_along_the_direction() {
        assert_eq!(Direction::Up.offset(), (0.0, 40.0));
        assert_eq!(Direction::Down.offset(), (0.0, -40.0));
        assert_eq!(Direction::Left.offset(), (40.0, 0.0));
        assert_eq!(Direction::Right.offset(), (-40.0, 0.0));
        assert_eq!(Direction::None.offset(), (0.0, 0.0));
    }

    #[test]
    fn hidden_style_is_offset_and_transparent() {
        let style = fade_style(Direction::Left, false, 0.6, 0.2);
        assert!(style.starts_with("opacity: 0; transform: translate(40px, 0px);"));
        assert!(style.contains("opacity 0.6s"));
        assert!(style.contains(" 0.2s,"));
    }

    #[test]
    fn scrolling_past_through_the_top_stays_revealed() {
        assert_eq!(visibility_after(Replay::BelowFold, true, 300.0), Some(true));
        assert_eq!(visibility_after(Replay::BelowFold, false, -480.0), Some(true));
        assert_eq!(visibility_after(Replay::BelowFold, false, 0.0), Some(true));
    }

    #[test]
    fn dropping_back_below_the_fold_hides_again() {
        assert_eq!(visibility_after(Replay::BelowFold, false, 820.0), Some(false));
    }

    #[test]
    fn exit_replay_hides_through_either_edge() {
        assert_eq!(visibility_after(Replay::OnExit, false, -480.0), Some(false));
        assert_eq!(visibility_after(Replay::OnExit, false, 820.0), Some(false));
        assert_eq!(visibility_after(Replay::OnExit, true, 120.0), Some(true));
    }

    #[test]
    fn one_shot_reveal_ignores_exits() {
        assert_eq!(visibility_after(Replay::Never, false, -480.0), None);
        assert_eq!(visibility_after(Replay::Never, false, 820.0), None);
        assert_eq!(visibility_after(Replay::Never, true, 120.0), Some(true));
    }

    #[test]
    fn visible_style_is_in_place() {
        let style = fade_style(Direction::Up, true, 0.6, 0.0);
        assert!(style.starts_with("opacity: 1; transform: translate(0px, 0px);"));
    }
}
