use web_sys::{window, Element, Event};
use yew::prelude::*;
use yew_hooks::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ParallaxDirection {
    #[default]
    Up,
    Down,
}

/// How far the container has travelled through the viewport: 0 when its
/// top meets the viewport bottom, 1 when its bottom leaves the viewport top.
pub fn scroll_progress(rect_top: f64, rect_height: f64, viewport_height: f64) -> f64 {
    let travel = viewport_height + rect_height;
    if travel <= 0.0 {
        return 0.0;
    }
    ((viewport_height - rect_top) / travel).clamp(0.0, 1.0)
}

/// Vertical offset in px for the content at the given progress.
pub fn parallax_offset(progress: f64, speed: f64, direction: ParallaxDirection) -> f64 {
    let span = 100.0 * speed;
    let (from, to) = match direction {
        ParallaxDirection::Up => (span, -span),
        ParallaxDirection::Down => (-span, span),
    };
    from + (to - from) * progress.clamp(0.0, 1.0)
}

#[derive(Properties, PartialEq)]
pub struct ParallaxProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(0.5)]
    pub speed: f64,
    #[prop_or_default]
    pub direction: ParallaxDirection,
}

#[function_component(ParallaxSection)]
pub fn parallax_section(props: &ParallaxProps) -> Html {
    let container = use_node_ref();
    let offset = use_state_eq(|| parallax_offset(0.0, props.speed, props.direction));

    let measure = {
        let container = container.clone();
        let offset = offset.setter();
        let speed = props.speed;
        let direction = props.direction;
        move || {
            let Some(element) = container.cast::<Element>() else {
                return;
            };
            let Some(viewport) = window()
                .and_then(|w| w.inner_height().ok())
                .and_then(|h| h.as_f64())
            else {
                return;
            };
            let rect = element.get_bounding_client_rect();
            let progress = scroll_progress(rect.top(), rect.height(), viewport);
            offset.set(parallax_offset(progress, speed, direction));
        }
    };

    {
        let measure = measure.clone();
        use_event_with_window("scroll", move |_: Event| measure());
    }
    {
        use_effect_with_deps(
            move |_| {
                measure();
                || ()
            },
            (props.speed, props.direction),
        );
    }

    html! {
        <div ref={container} class={classes!("parallax", props.class.clone())}>
            <div class="parallax-content" style={format!("transform: translate3d(0, {:.1}px, 0);", *offset)}>
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_spans_entry_to_exit() {
        assert_eq!(scroll_progress(800.0, 400.0, 800.0), 0.0);
        assert_eq!(scroll_progress(-400.0, 400.0, 800.0), 1.0);
        assert!((scroll_progress(200.0, 400.0, 800.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn progress_clamps_outside_viewport() {
        assert_eq!(scroll_progress(5_000.0, 400.0, 800.0), 0.0);
        assert_eq!(scroll_progress(-5_000.0, 400.0, 800.0), 1.0);
        assert_eq!(scroll_progress(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn up_moves_from_below_to_above() {
        assert_eq!(parallax_offset(0.0, 0.5, ParallaxDirection::Up), 50.0);
        assert_eq!(parallax_offset(0.5, 0.5, ParallaxDirection::Up), 0.0);
        assert_eq!(parallax_offset(1.0, 0.5, ParallaxDirection::Up), -50.0);
    }

    #[test]
    fn down_mirrors_up() {
        for p in [0.0, 0.25, 0.5, 0.75, 1.0] {
            let up = parallax_offset(p, 0.3, ParallaxDirection::Up);
            let down = parallax_offset(p, 0.3, ParallaxDirection::Down);
            assert!((up + down).abs() < 1e-12);
        }
    }
}
