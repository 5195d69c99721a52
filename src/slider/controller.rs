//! State of the before/after comparison slider.
//!
//! The controller is pure: the component feeds it frame ticks and pointer
//! positions and reads back the split position. Until the first press it
//! oscillates around the center; after that it only follows the pointer.

use std::rc::Rc;

use yew::Reducible;

pub const MIN_POSITION: f64 = 0.0;
pub const MAX_POSITION: f64 = 100.0;

/// Horizontal split, in percent of the container width. Always in `[0, 100]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct SplitPosition(f64);

impl SplitPosition {
    pub const CENTER: SplitPosition = SplitPosition(50.0);

    /// Clamps into range. A NaN has no meaningful position, so there is
    /// nothing to move to.
    pub fn new(percent: f64) -> Option<Self> {
        if percent.is_nan() {
            return None;
        }
        Some(SplitPosition(percent.clamp(MIN_POSITION, MAX_POSITION)))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for SplitPosition {
    fn default() -> Self {
        Self::CENTER
    }
}

/// Measured bounds of the slider container. Only exists for a usable rect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerRect {
    left: f64,
    width: f64,
}

impl ContainerRect {
    pub fn measured(left: f64, width: f64) -> Option<Self> {
        if left.is_finite() && width.is_finite() && width > 0.0 {
            Some(ContainerRect { left, width })
        } else {
            None
        }
    }

    /// Split position under a contact point with the given client x.
    pub fn position_at(&self, client_x: f64) -> Option<SplitPosition> {
        SplitPosition::new((client_x - self.left) / self.width * 100.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OscillationConfig {
    pub center: f64,
    pub amplitude: f64,
    /// Phase added per animation frame, in radians.
    pub phase_step: f64,
}

impl OscillationConfig {
    pub fn position_at(&self, phase: f64) -> Option<SplitPosition> {
        SplitPosition::new(self.center + self.amplitude * phase.sin())
    }
}

impl Default for OscillationConfig {
    fn default() -> Self {
        crate::config::SLIDER_OSCILLATION
    }
}

/// Who drives the split position. There is no way back from `Interactive`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SliderMode {
    Idle { phase: f64 },
    Interactive { dragging: bool },
}

#[derive(Clone, Debug, PartialEq)]
pub struct SliderController {
    position: SplitPosition,
    mode: SliderMode,
    oscillation: OscillationConfig,
}

impl SliderController {
    pub fn new(oscillation: OscillationConfig) -> Self {
        SliderController {
            position: SplitPosition::CENTER,
            mode: SliderMode::Idle { phase: 0.0 },
            oscillation,
        }
    }

    pub fn position(&self) -> SplitPosition {
        self.position
    }

    pub fn has_interacted(&self) -> bool {
        matches!(self.mode, SliderMode::Interactive { .. })
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.mode, SliderMode::Interactive { dragging: true })
    }

    pub fn hint_visible(&self) -> bool {
        !self.has_interacted()
    }

    /// Advances the idle oscillation by one frame. Returns false once the
    /// user has taken over, in which case nothing changes.
    pub fn advance_frame(&mut self) -> bool {
        match self.mode {
            SliderMode::Idle { phase } => {
                let phase = phase + self.oscillation.phase_step;
                self.mode = SliderMode::Idle { phase };
                if let Some(position) = self.oscillation.position_at(phase) {
                    self.position = position;
                }
                true
            }
            SliderMode::Interactive { .. } => false,
        }
    }

    /// Pointer down / touch start. Latches interaction even when the
    /// container could not be measured; only the position update is skipped.
    pub fn press(&mut self, client_x: f64, rect: Option<ContainerRect>) {
        if !self.has_interacted() {
            log::debug!("comparison slider taken over by user");
        }
        self.mode = SliderMode::Interactive { dragging: true };
        self.track(client_x, rect);
    }

    /// Pointer / touch move. Ignored unless dragging.
    pub fn drag_to(&mut self, client_x: f64, rect: Option<ContainerRect>) {
        if self.is_dragging() {
            self.track(client_x, rect);
        }
    }

    /// Pointer up / leave, touch end. The position stays where it was.
    pub fn release(&mut self) {
        if let SliderMode::Interactive { dragging } = &mut self.mode {
            *dragging = false;
        }
    }

    fn track(&mut self, client_x: f64, rect: Option<ContainerRect>) {
        if let Some(position) = rect.and_then(|rect| rect.position_at(client_x)) {
            self.position = position;
        }
    }

    /// CSS `clip-path` for the "before" layer: visible from the left edge up
    /// to the split.
    pub fn before_clip_path(&self) -> String {
        format!("inset(0 {}% 0 0)", MAX_POSITION - self.position.value())
    }

    pub fn divider_style(&self) -> String {
        format!("left: {}%; transform: translateX(-50%);", self.position.value())
    }
}

impl Default for SliderController {
    fn default() -> Self {
        Self::new(OscillationConfig::default())
    }
}

pub enum SliderAction {
    Frame,
    Press { client_x: f64, rect: Option<ContainerRect> },
    Drag { client_x: f64, rect: Option<ContainerRect> },
    Release,
}

impl Reducible for SliderController {
    type Action = SliderAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            SliderAction::Frame => {
                if !next.advance_frame() {
                    return self;
                }
            }
            SliderAction::Press { client_x, rect } => next.press(client_x, rect),
            SliderAction::Drag { client_x, rect } => next.drag_to(client_x, rect),
            SliderAction::Release => next.release(),
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    fn rect() -> Option<ContainerRect> {
        ContainerRect::measured(100.0, 400.0)
    }

    fn controller() -> SliderController {
        SliderController::new(OscillationConfig {
            center: 50.0,
            amplitude: 15.0,
            phase_step: 0.02,
        })
    }

    #[test]
    fn starts_centered_idle_and_not_dragging() {
        let slider = controller();
        assert_eq!(slider.position(), SplitPosition::CENTER);
        assert!(!slider.has_interacted());
        assert!(!slider.is_dragging());
        assert!(slider.hint_visible());
    }

    #[test]
    fn contact_outside_container_clamps() {
        let rect = rect().unwrap();
        assert_eq!(rect.position_at(100.0).unwrap().value(), 0.0);
        assert_eq!(rect.position_at(-2_000.0).unwrap().value(), 0.0);
        assert_eq!(rect.position_at(500.0).unwrap().value(), 100.0);
        assert_eq!(rect.position_at(9_999.0).unwrap().value(), 100.0);
    }

    #[test]
    fn contact_inside_container_is_linear() {
        let rect = rect().unwrap();
        for x in [101.0, 137.5, 250.0, 333.3, 499.0] {
            let expected = (x - 100.0) / 400.0 * 100.0;
            assert!(approx_eq(rect.position_at(x).unwrap().value(), expected), "x = {x}");
        }
    }

    #[test]
    fn unusable_rect_is_not_measured() {
        assert!(ContainerRect::measured(0.0, 0.0).is_none());
        assert!(ContainerRect::measured(0.0, -10.0).is_none());
        assert!(ContainerRect::measured(f64::NAN, 10.0).is_none());
        assert!(ContainerRect::measured(0.0, f64::INFINITY).is_none());
    }

    #[test]
    fn split_position_never_leaves_range() {
        assert_eq!(SplitPosition::new(-0.5).unwrap().value(), 0.0);
        assert_eq!(SplitPosition::new(100.5).unwrap().value(), 100.0);
        assert_eq!(SplitPosition::new(f64::INFINITY).unwrap().value(), 100.0);
        assert_eq!(SplitPosition::new(f64::NAN), None);
    }

    #[test]
    fn nan_contact_leaves_position_alone() {
        let mut slider = controller();
        slider.press(200.0, rect());
        slider.drag_to(f64::NAN, rect());
        assert!(approx_eq(slider.position().value(), 25.0));

        let mut slider = controller();
        slider.advance_frame();
        let before = slider.position();
        slider.press(f64::NAN, rect());
        assert!(slider.has_interacted());
        assert_eq!(slider.position(), before);
    }

    #[test]
    fn idle_frames_follow_sine_and_keep_hint() {
        // Scenario A
        let mut slider = controller();
        for frame in 1..=500 {
            assert!(slider.advance_frame());
            let phase = frame as f64 * 0.02;
            assert!(approx_eq(slider.position().value(), 50.0 + 15.0 * phase.sin()));
            assert!(slider.hint_visible());
        }
    }

    #[test]
    fn idle_oscillation_stays_in_band_without_jumps() {
        let mut slider = controller();
        let mut previous = slider.position().value();
        for _ in 0..2_000 {
            slider.advance_frame();
            let current = slider.position().value();
            assert!((35.0..=65.0).contains(&current));
            // |d/dphase| <= amplitude, so one step moves at most 15 * 0.02
            assert!((current - previous).abs() <= 15.0 * 0.02 + EPS);
            previous = current;
        }
    }

    #[test]
    fn press_at_left_edge_takes_over() {
        // Scenario B
        let mut slider = controller();
        slider.advance_frame();
        slider.press(100.0, rect());
        assert_eq!(slider.position().value(), 0.0);
        assert!(slider.has_interacted());
        assert!(slider.is_dragging());
        assert!(!slider.hint_visible());

        assert!(!slider.advance_frame());
        assert_eq!(slider.position().value(), 0.0);
    }

    #[test]
    fn drag_then_release_keeps_last_position() {
        // Scenario C
        let mut slider = controller();
        slider.press(180.0, rect());
        assert!(approx_eq(slider.position().value(), 20.0));
        let mut last = slider.position().value();
        for step in 1..=12 {
            let x = 180.0 + step as f64 * 20.0;
            slider.drag_to(x, rect());
            let current = slider.position().value();
            assert!(current > last);
            last = current;
        }
        assert!(approx_eq(slider.position().value(), 80.0));

        slider.release();
        assert!(!slider.is_dragging());
        assert!(approx_eq(slider.position().value(), 80.0));
    }

    #[test]
    fn moves_without_drag_are_ignored() {
        let mut slider = controller();
        slider.drag_to(480.0, rect());
        assert_eq!(slider.position(), SplitPosition::CENTER);

        slider.press(200.0, rect());
        slider.release();
        slider.drag_to(480.0, rect());
        assert!(approx_eq(slider.position().value(), 25.0));
    }

    #[test]
    fn latch_survives_release_and_new_presses() {
        let mut slider = controller();
        slider.press(300.0, rect());
        for _ in 0..5 {
            slider.release();
            assert!(slider.has_interacted());
            assert!(!slider.advance_frame());
            slider.press(300.0, rect());
            assert!(slider.has_interacted());
        }
    }

    #[test]
    fn unmeasured_press_latches_but_keeps_position() {
        let mut slider = controller();
        slider.advance_frame();
        let before = slider.position();
        slider.press(300.0, None);
        assert!(slider.has_interacted());
        assert!(slider.is_dragging());
        assert_eq!(slider.position(), before);

        slider.drag_to(300.0, None);
        assert_eq!(slider.position(), before);
    }

    #[test]
    fn release_before_interaction_is_noop() {
        let mut slider = controller();
        slider.release();
        assert!(!slider.has_interacted());
        assert!(slider.advance_frame());
    }

    #[test]
    fn render_styles_track_position() {
        let mut slider = controller();
        slider.press(200.0, rect());
        assert_eq!(slider.before_clip_path(), "inset(0 75% 0 0)");
        assert_eq!(slider.divider_style(), "left: 25%; transform: translateX(-50%);");
    }

    #[test]
    fn reducer_ignores_frames_after_takeover() {
        let state = Rc::new(controller());
        let state = state.reduce(SliderAction::Frame);
        assert!(!state.has_interacted());

        let state = state.reduce(SliderAction::Press { client_x: 500.0, rect: rect() });
        assert_eq!(state.position().value(), 100.0);

        let after_frame = state.clone().reduce(SliderAction::Frame);
        assert!(Rc::ptr_eq(&state, &after_frame));

        let released = after_frame.reduce(SliderAction::Release);
        assert!(!released.is_dragging());
        assert_eq!(released.position().value(), 100.0);
    }
}
