use std::cell::Cell;
use std::rc::Rc;

use log::info;
use yew::prelude::*;

use crate::animation::easing::{back_out, power2_in_out, power4_in_out, BACK_OVERSHOOT};
use crate::animation::frame_loop::{FrameLoop, LoopControl};
use crate::config;

const PRELOADER_WORD: &str = "Spotless.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreloaderPhase {
    Counting,
    Revealing,
    Done,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PreloaderFrame {
    pub elapsed_secs: f64,
    pub counter: u32,
    pub phase: PreloaderPhase,
    /// How far the overlay has slid up, in percent of its height.
    pub lift: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PreloaderTimeline {
    pub count_secs: f64,
    pub text_start_secs: f64,
    pub text_stagger_secs: f64,
    pub char_rise_secs: f64,
    pub reveal_start_secs: f64,
    pub reveal_secs: f64,
}

impl Default for PreloaderTimeline {
    fn default() -> Self {
        PreloaderTimeline {
            count_secs: config::PRELOADER_COUNT_SECS,
            text_start_secs: config::PRELOADER_TEXT_START_SECS,
            text_stagger_secs: config::PRELOADER_TEXT_STAGGER_SECS,
            char_rise_secs: config::PRELOADER_CHAR_RISE_SECS,
            reveal_start_secs: config::PRELOADER_REVEAL_START_SECS,
            reveal_secs: config::PRELOADER_REVEAL_SECS,
        }
    }
}

fn progress(elapsed: f64, start: f64, duration: f64) -> f64 {
    if duration > 0.0 {
        (elapsed - start) / duration
    } else if elapsed >= start {
        1.0
    } else {
        0.0
    }
}

impl PreloaderTimeline {
    pub fn total_secs(&self) -> f64 {
        self.reveal_start_secs + self.reveal_secs
    }

    pub fn sample(&self, elapsed_secs: f64) -> PreloaderFrame {
        let counter = (power2_in_out(progress(elapsed_secs, 0.0, self.count_secs)) * 100.0).round() as u32;
        let phase = if elapsed_secs >= self.total_secs() {
            PreloaderPhase::Done
        } else if elapsed_secs >= self.reveal_start_secs {
            PreloaderPhase::Revealing
        } else {
            PreloaderPhase::Counting
        };
        let lift = power4_in_out(progress(elapsed_secs, self.reveal_start_secs, self.reveal_secs)) * 100.0;
        PreloaderFrame { elapsed_secs, counter, phase, lift }
    }

    /// Eased rise of the `index`-th letter: 0 before it starts, 1 once it
    /// has settled, briefly above 1 on the way.
    pub fn char_rise(&self, index: usize, elapsed_secs: f64) -> f64 {
        let start = self.text_start_secs + index as f64 * self.text_stagger_secs;
        back_out(progress(elapsed_secs, start, self.char_rise_secs), BACK_OVERSHOOT)
    }
}

fn char_style(rise: f64) -> String {
    format!(
        "opacity: {:.3}; transform: translateY({:.3}rem);",
        rise.clamp(0.0, 1.0),
        (1.0 - rise) * 2.0
    )
}

#[derive(Properties, PartialEq)]
pub struct PreloaderProps {
    #[prop_or_default]
    pub on_complete: Callback<()>,
}

#[function_component(Preloader)]
pub fn preloader(props: &PreloaderProps) -> Html {
    let timeline = PreloaderTimeline::default();
    let frame = use_state_eq(move || timeline.sample(0.0));

    {
        let frame = frame.clone();
        let on_complete = props.on_complete.clone();
        use_effect_with_deps(
            move |_| {
                let started_at: Rc<Cell<Option<f64>>> = Rc::new(Cell::new(None));
                let frame_loop = FrameLoop::start(move |timestamp| {
                    let start = started_at.get().unwrap_or_else(|| {
                        started_at.set(Some(timestamp));
                        timestamp
                    });
                    let next = timeline.sample((timestamp - start) / 1000.0);
                    frame.set(next);
                    if next.phase == PreloaderPhase::Done {
                        info!("Preloader complete");
                        on_complete.emit(());
                        LoopControl::Stop
                    } else {
                        LoopControl::Continue
                    }
                });
                move || drop(frame_loop)
            },
            (),
        );
    }

    if frame.phase == PreloaderPhase::Done {
        return html! {};
    }

    let chars = PRELOADER_WORD.chars().enumerate().map(|(i, c)| {
        let style = char_style(timeline.char_rise(i, frame.elapsed_secs));
        html! {
            <span class="preloader-char" style={style}>{c.to_string()}</span>
        }
    });

    html! {
        <div class="preloader" style={format!("transform: translateY(-{:.3}%);", frame.lift)}>
            <div class="preloader-blob preloader-blob--one"></div>
            <div class="preloader-blob preloader-blob--two"></div>
            <div class="preloader-logo">
                <div class="logo-square bounce" style="animation-delay: 0s;"></div>
                <div class="logo-circle bounce" style="animation-delay: 0.1s;"></div>
                <div class="logo-triangle bounce" style="animation-delay: 0.2s;"></div>
            </div>
            <div class="preloader-word">{ for chars }</div>
            <div class="preloader-track">
                <div class="preloader-progress" style={format!("width: {}%;", frame.counter)}></div>
            </div>
            <div class="preloader-counter">{format!("{}%", frame.counter)}</div>
            <style>
                {r#"
                    .preloader {
                        position: fixed;
                        inset: 0;
                        z-index: 9999;
                        background: #1F3D2B;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        padding: 0 1rem;
                        overflow: hidden;
                    }
                    .preloader-blob {
                        position: absolute;
                        border-radius: 50%;
                        filter: blur(64px);
                        animation: pulse 2s ease-in-out infinite;
                    }
                    .preloader-blob--one {
                        top: 25%;
                        left: 25%;
                        width: 16rem;
                        height: 16rem;
                        background: rgba(46, 125, 90, 0.2);
                    }
                    .preloader-blob--two {
                        bottom: 25%;
                        right: 25%;
                        width: 24rem;
                        height: 24rem;
                        background: rgba(159, 211, 199, 0.1);
                        animation-delay: 0.5s;
                    }
                    .preloader-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        margin-bottom: 2rem;
                        position: relative;
                    }
                    .preloader-logo .logo-square,
                    .preloader-logo .logo-circle {
                        background: #9FD3C7;
                    }
                    .preloader-logo .logo-triangle {
                        border-bottom-color: #9FD3C7;
                    }
                    .preloader-word {
                        font-family: 'Playfair Display', serif;
                        font-size: clamp(1.875rem, 6vw, 4.5rem);
                        font-weight: 700;
                        font-style: italic;
                        color: white;
                        margin-bottom: 2rem;
                        position: relative;
                    }
                    .preloader-char {
                        display: inline-block;
                    }
                    .preloader-track {
                        width: 12rem;
                        height: 4px;
                        background: rgba(255, 255, 255, 0.2);
                        border-radius: 9999px;
                        overflow: hidden;
                        position: relative;
                    }
                    .preloader-progress {
                        height: 100%;
                        background: linear-gradient(to right, #9FD3C7, #2E7D5A);
                        border-radius: 9999px;
                    }
                    .preloader-counter {
                        margin-top: 1rem;
                        color: rgba(255, 255, 255, 0.6);
                        font-size: 0.875rem;
                        font-family: monospace;
                        position: relative;
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_runs_from_zero_to_hundred() {
        let timeline = PreloaderTimeline::default();
        assert_eq!(timeline.sample(0.0).counter, 0);
        assert_eq!(timeline.sample(1.0).counter, 50);
        assert_eq!(timeline.sample(2.0).counter, 100);
        assert_eq!(timeline.sample(2.4).counter, 100);
    }

    #[test]
    fn counter_is_monotonic() {
        let timeline = PreloaderTimeline::default();
        let mut previous = 0;
        for step in 0..=250 {
            let counter = timeline.sample(step as f64 / 100.0).counter;
            assert!(counter >= previous);
            previous = counter;
        }
    }

    #[test]
    fn phases_follow_the_schedule() {
        let timeline = PreloaderTimeline::default();
        assert_eq!(timeline.sample(0.0).phase, PreloaderPhase::Counting);
        assert_eq!(timeline.sample(2.49).phase, PreloaderPhase::Counting);
        assert_eq!(timeline.sample(2.5).phase, PreloaderPhase::Revealing);
        assert_eq!(timeline.sample(3.29).phase, PreloaderPhase::Revealing);
        assert_eq!(timeline.sample(3.31).phase, PreloaderPhase::Done);
        assert_eq!(timeline.sample(60.0).phase, PreloaderPhase::Done);
    }

    #[test]
    fn zero_length_count_jumps_to_full() {
        let timeline = PreloaderTimeline {
            count_secs: 0.0,
            text_start_secs: 0.0,
            text_stagger_secs: 0.0,
            char_rise_secs: 0.0,
            reveal_start_secs: 0.0,
            reveal_secs: 0.0,
        };
        let frame = timeline.sample(0.0);
        assert_eq!(frame.counter, 100);
        assert_eq!(frame.phase, PreloaderPhase::Done);
        assert_eq!(frame.lift, 100.0);
        assert_eq!(timeline.char_rise(3, 0.0), 1.0);
    }

    #[test]
    fn overlay_lifts_only_during_reveal() {
        let timeline = PreloaderTimeline::default();
        assert_eq!(timeline.sample(0.0).lift, 0.0);
        assert_eq!(timeline.sample(2.5).lift, 0.0);
        assert!((timeline.sample(2.9).lift - 50.0).abs() < 1e-9);
        assert_eq!(timeline.sample(3.3).lift, 100.0);
        let mut previous = 0.0;
        for step in 250..=330 {
            let lift = timeline.sample(step as f64 / 100.0).lift;
            assert!(lift + 1e-9 >= previous);
            previous = lift;
        }
    }

    #[test]
    fn letters_rise_in_turn_and_overshoot_before_settling() {
        let timeline = PreloaderTimeline::default();
        assert!(timeline.char_rise(0, 0.29).abs() < 1e-12);
        assert!(timeline.char_rise(1, 0.3).abs() < 1e-12);
        assert!(timeline.char_rise(0, 0.5) > timeline.char_rise(1, 0.5));
        let peak = (30..=80).map(|s| timeline.char_rise(0, s as f64 / 100.0)).fold(0.0, f64::max);
        assert!(peak > 1.0);
        assert_eq!(timeline.char_rise(8, 1.5), 1.0);
    }

    #[test]
    fn char_style_clamps_opacity_but_keeps_overshoot() {
        assert_eq!(char_style(0.0), "opacity: 0.000; transform: translateY(2.000rem);");
        assert_eq!(char_style(1.1), "opacity: 1.000; transform: translateY(-0.200rem);");
    }
}
