use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Element, MouseEvent, TouchEvent};
use yew::prelude::*;

use crate::animation::frame_loop::{BrowserFrames, FrameLoop, FrameScheduler, LoopControl};
use crate::config;
use crate::slider::controller::{ContainerRect, OscillationConfig, SliderAction, SliderController};

/// Frame callback for the idle oscillation. Checks the interaction latch
/// first so a frame already queued when the user grabs the divider neither
/// moves it nor schedules another one.
pub(crate) fn idle_tick(latch: Rc<RefCell<bool>>, on_frame: impl Fn() + 'static) -> impl FnMut(f64) -> LoopControl {
    move |_| {
        if *latch.borrow() {
            return LoopControl::Stop;
        }
        on_frame();
        LoopControl::Continue
    }
}

/// Body of the idle-oscillation effect. Starts the loop while `idle`
/// holds and returns the teardown, which cancels it; the component runs
/// that on takeover (when `idle` flips) and on unmount.
pub(crate) fn start_idle<S: FrameScheduler + 'static>(
    scheduler: S,
    idle: bool,
    latch: Rc<RefCell<bool>>,
    on_frame: impl Fn() + 'static,
) -> impl FnOnce() {
    let frame_loop = idle.then(|| FrameLoop::start_with(scheduler, idle_tick(latch, on_frame)));
    move || {
        if let Some(frame_loop) = frame_loop {
            frame_loop.cancel();
        }
    }
}

fn measure(container: &NodeRef) -> Option<ContainerRect> {
    let element = container.cast::<Element>()?;
    let rect = element.get_bounding_client_rect();
    ContainerRect::measured(rect.left(), rect.width())
}

fn first_touch_x(e: &TouchEvent) -> Option<f64> {
    e.touches().get(0).map(|touch| touch.client_x() as f64)
}

#[derive(Properties, PartialEq)]
pub struct BeforeAfterSliderProps {
    #[prop_or(AttrValue::Static(config::SLIDER_BEFORE_SRC))]
    pub before_src: AttrValue,
    #[prop_or(AttrValue::Static(config::SLIDER_AFTER_SRC))]
    pub after_src: AttrValue,
    #[prop_or_default]
    pub oscillation: OscillationConfig,
}

#[function_component(BeforeAfterSlider)]
pub fn before_after_slider(props: &BeforeAfterSliderProps) -> Html {
    let oscillation = props.oscillation;
    let slider = use_reducer(move || SliderController::new(oscillation));
    let container = use_node_ref();
    let latch = use_mut_ref(|| false);

    {
        let dispatcher = slider.dispatcher();
        let latch = latch.clone();
        use_effect_with_deps(
            move |idle| {
                start_idle(BrowserFrames, *idle, latch, move || dispatcher.dispatch(SliderAction::Frame))
            },
            !slider.has_interacted(),
        );
    }

    let press = {
        let dispatcher = slider.dispatcher();
        let container = container.clone();
        let latch = latch.clone();
        move |client_x: f64| {
            *latch.borrow_mut() = true;
            dispatcher.dispatch(SliderAction::Press { client_x, rect: measure(&container) });
        }
    };
    let drag = {
        let dispatcher = slider.dispatcher();
        let container = container.clone();
        move |client_x: f64| {
            dispatcher.dispatch(SliderAction::Drag { client_x, rect: measure(&container) });
        }
    };
    let release = {
        let dispatcher = slider.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(SliderAction::Release))
    };

    let onmousedown = {
        let press = press.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            press(e.client_x() as f64);
        })
    };
    let onmousemove = {
        let drag = drag.clone();
        Callback::from(move |e: MouseEvent| drag(e.client_x() as f64))
    };
    let ontouchstart = Callback::from(move |e: TouchEvent| {
        if let Some(x) = first_touch_x(&e) {
            press(x);
        }
    });
    let ontouchmove = Callback::from(move |e: TouchEvent| {
        if let Some(x) = first_touch_x(&e) {
            drag(x);
        }
    });
    let onmouseup = release.reform(|_: MouseEvent| ());
    let onmouseleave = release.reform(|_: MouseEvent| ());
    let ontouchend = release.reform(|_: TouchEvent| ());

    html! {
        <div
            ref={container}
            class={classes!("comparison-slider", slider.is_dragging().then(|| "dragging"))}
            onmousedown={onmousedown}
            onmousemove={onmousemove}
            onmouseup={onmouseup}
            onmouseleave={onmouseleave}
            ontouchstart={ontouchstart}
            ontouchmove={ontouchmove}
            ontouchend={ontouchend}
        >
            <div class="comparison-layer">
                <img src={props.after_src.clone()} alt="After cleaning" draggable="false" />
            </div>
            <div class="comparison-layer" style={format!("clip-path: {};", slider.before_clip_path())}>
                <img src={props.before_src.clone()} alt="Before cleaning" draggable="false" />
            </div>
            <div class="comparison-divider" style={slider.divider_style()}>
                <div class="comparison-handle">
                    <svg viewBox="0 0 24 24" fill="none" stroke="currentColor">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M15 19l-7-7 7-7" />
                    </svg>
                    <svg viewBox="0 0 24 24" fill="none" stroke="currentColor">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9 5l7 7-7 7" />
                    </svg>
                </div>
            </div>
            <div class="comparison-label comparison-label--before">{"BEFORE"}</div>
            <div class="comparison-label comparison-label--after">{"AFTER"}</div>
            {
                if slider.hint_visible() {
                    html! { <div class="comparison-hint pulse">{"Drag to compare"}</div> }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                    .comparison-slider {
                        position: relative;
                        width: 100%;
                        aspect-ratio: 16 / 9;
                        border-radius: 1.5rem;
                        overflow: hidden;
                        cursor: ew-resize;
                        user-select: none;
                        -webkit-user-select: none;
                        box-shadow: 0 8px 32px rgba(31, 61, 43, 0.15);
                    }
                    .comparison-layer {
                        position: absolute;
                        inset: 0;
                        overflow: hidden;
                    }
                    .comparison-layer img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        pointer-events: none;
                    }
                    .comparison-divider {
                        position: absolute;
                        top: 0;
                        bottom: 0;
                        width: 4px;
                        background: white;
                        box-shadow: 0 4px 12px rgba(0, 0, 0, 0.2);
                        z-index: 10;
                    }
                    .comparison-handle {
                        position: absolute;
                        top: 50%;
                        left: 50%;
                        transform: translate(-50%, -50%);
                        width: 3rem;
                        height: 3rem;
                        border-radius: 50%;
                        background: rgba(46, 125, 90, 0.2);
                        backdrop-filter: blur(12px);
                        border: 1px solid rgba(255, 255, 255, 0.6);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.25rem;
                        color: white;
                        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
                    }
                    .comparison-handle svg {
                        width: 1rem;
                        height: 1rem;
                    }
                    .comparison-label {
                        position: absolute;
                        top: 1rem;
                        padding: 0.5rem 1rem;
                        border-radius: 9999px;
                        backdrop-filter: blur(12px);
                        border: 1px solid rgba(255, 255, 255, 0.3);
                        color: white;
                        font-size: 0.875rem;
                        font-weight: 600;
                        letter-spacing: 0.025em;
                    }
                    .comparison-label--before {
                        left: 1rem;
                        background: rgba(31, 61, 43, 0.2);
                    }
                    .comparison-label--after {
                        right: 1rem;
                        background: rgba(46, 125, 90, 0.3);
                    }
                    .comparison-hint {
                        position: absolute;
                        bottom: 1rem;
                        left: 50%;
                        transform: translateX(-50%);
                        padding: 0.5rem 1rem;
                        border-radius: 9999px;
                        background: rgba(31, 61, 43, 0.4);
                        backdrop-filter: blur(12px);
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        color: white;
                        font-size: 0.75rem;
                        font-weight: 500;
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::frame_loop::testing::FakeFrames;
    use crate::slider::controller::SplitPosition;

    struct Harness {
        frames: FakeFrames,
        slider: Rc<RefCell<SliderController>>,
        latch: Rc<RefCell<bool>>,
    }

    impl Harness {
        fn new() -> Self {
            Harness {
                frames: FakeFrames::default(),
                slider: Rc::new(RefCell::new(SliderController::default())),
                latch: Rc::new(RefCell::new(false)),
            }
        }

        /// Runs the effect the way the component does, keyed on the
        /// current "not yet interacted" flag.
        fn run_effect(&self) -> impl FnOnce() {
            let driven = self.slider.clone();
            let idle = !self.slider.borrow().has_interacted();
            start_idle(self.frames.clone(), idle, self.latch.clone(), move || {
                driven.borrow_mut().advance_frame();
            })
        }

        fn touch(&self, client_x: f64, rect: Option<ContainerRect>) {
            *self.latch.borrow_mut() = true;
            self.slider.borrow_mut().press(client_x, rect);
        }
    }

    #[test]
    fn idle_loop_moves_the_divider_every_frame() {
        let harness = Harness::new();
        let _teardown = harness.run_effect();
        let mut previous = harness.slider.borrow().position();
        for n in 0..30 {
            harness.frames.run_frame(n as f64 * 16.7);
            let current = harness.slider.borrow().position();
            assert_ne!(current, previous);
            previous = current;
        }
    }

    #[test]
    fn frame_in_flight_after_latch_does_nothing() {
        let harness = Harness::new();
        let _teardown = harness.run_effect();
        harness.frames.run_frame(0.0);

        harness.touch(50.0, ContainerRect::measured(0.0, 200.0));
        assert_eq!(harness.frames.pending(), 1);

        harness.frames.run_frame(16.7);
        assert_eq!(harness.slider.borrow().position().value(), 25.0);
        assert_eq!(harness.frames.pending(), 0);
    }

    #[test]
    fn teardown_cancels_the_pending_frame() {
        let harness = Harness::new();
        let teardown = harness.run_effect();
        assert_eq!(harness.frames.pending(), 1);
        teardown();
        assert_eq!(harness.frames.pending(), 0);
        assert_eq!(harness.frames.run_frame(0.0), 0);
        assert_eq!(harness.slider.borrow().position(), SplitPosition::CENTER);
    }

    #[test]
    fn effect_after_takeover_starts_nothing() {
        let harness = Harness::new();
        harness.touch(10.0, None);
        let _teardown = harness.run_effect();
        assert_eq!(harness.frames.pending(), 0);
    }

    #[test]
    fn touch_start_then_unmount_leaves_no_frames() {
        // Scenario D
        let harness = Harness::new();
        let mounted = harness.run_effect();
        harness.frames.run_frame(0.0);

        harness.touch(10.0, None);
        // The key flipped: old teardown, then the effect again.
        mounted();
        let rerun = harness.run_effect();
        assert_eq!(harness.frames.pending(), 0);

        let snapshot = harness.slider.borrow().clone();
        rerun();
        for n in 1..10 {
            assert_eq!(harness.frames.run_frame(n as f64 * 16.7), 0);
        }
        assert_eq!(*harness.slider.borrow(), snapshot);
        assert_ne!(snapshot.position(), SplitPosition::CENTER);
    }
}
