//! A repeating `requestAnimationFrame` task with a single owned handle.
//!
//! The loop keeps at most one frame pending. Cancelling drops that handle
//! (which cancels the browser callback), is idempotent, and also happens
//! when the `FrameLoop` is dropped.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use gloo_render::{request_animation_frame, AnimationFrame};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

/// Something that runs a callback before the next repaint. Dropping the
/// returned handle must cancel the callback if it has not fired yet.
pub trait FrameScheduler {
    type Handle;

    fn request(&self, callback: Box<dyn FnOnce(f64)>) -> Self::Handle;
}

pub struct BrowserFrames;

impl FrameScheduler for BrowserFrames {
    type Handle = AnimationFrame;

    fn request(&self, callback: Box<dyn FnOnce(f64)>) -> AnimationFrame {
        request_animation_frame(callback)
    }
}

struct LoopInner<S: FrameScheduler> {
    scheduler: S,
    pending: RefCell<Option<S::Handle>>,
    running: Cell<bool>,
    tick: RefCell<Box<dyn FnMut(f64) -> LoopControl>>,
}

impl<S: FrameScheduler + 'static> LoopInner<S> {
    fn schedule(inner: &Rc<Self>) {
        // Weak so a pending frame never keeps a dead loop alive.
        let weak: Weak<Self> = Rc::downgrade(inner);
        let handle = inner.scheduler.request(Box::new(move |timestamp| {
            if let Some(inner) = weak.upgrade() {
                LoopInner::fire(&inner, timestamp);
            }
        }));
        *inner.pending.borrow_mut() = Some(handle);
    }

    fn fire(inner: &Rc<Self>, timestamp: f64) {
        let _fired = inner.pending.borrow_mut().take();
        if !inner.running.get() {
            return;
        }
        let control = {
            let mut tick = inner.tick.borrow_mut();
            (&mut **tick)(timestamp)
        };
        if control == LoopControl::Continue && inner.running.get() {
            LoopInner::schedule(inner);
        } else {
            inner.running.set(false);
        }
    }

    fn cancel(&self) {
        self.running.set(false);
        let pending = self.pending.borrow_mut().take();
        drop(pending);
    }
}

pub struct FrameLoop<S: FrameScheduler + 'static = BrowserFrames> {
    inner: Rc<LoopInner<S>>,
}

impl FrameLoop<BrowserFrames> {
    pub fn start(tick: impl FnMut(f64) -> LoopControl + 'static) -> Self {
        FrameLoop::start_with(BrowserFrames, tick)
    }
}

impl<S: FrameScheduler + 'static> FrameLoop<S> {
    pub fn start_with(scheduler: S, tick: impl FnMut(f64) -> LoopControl + 'static) -> Self {
        let inner = Rc::new(LoopInner {
            scheduler,
            pending: RefCell::new(None),
            running: Cell::new(true),
            tick: RefCell::new(Box::new(tick)),
        });
        LoopInner::schedule(&inner);
        FrameLoop { inner }
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.inner.running.get()
    }

    pub fn cancel(&self) {
        self.inner.cancel();
    }
}

impl<S: FrameScheduler + 'static> Drop for FrameLoop<S> {
    fn drop(&mut self) {
        self.inner.cancel();
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::collections::HashSet;

    type Queued = (usize, Box<dyn FnOnce(f64)>);

    /// Deterministic stand-in for the browser's frame callbacks.
    #[derive(Clone, Default)]
    pub struct FakeFrames {
        queue: Rc<RefCell<Vec<Queued>>>,
        cancelled: Rc<RefCell<HashSet<usize>>>,
        next_id: Rc<Cell<usize>>,
    }

    pub struct FakeHandle {
        id: usize,
        cancelled: Rc<RefCell<HashSet<usize>>>,
    }

    impl Drop for FakeHandle {
        fn drop(&mut self) {
            self.cancelled.borrow_mut().insert(self.id);
        }
    }

    impl FrameScheduler for FakeFrames {
        type Handle = FakeHandle;

        fn request(&self, callback: Box<dyn FnOnce(f64)>) -> FakeHandle {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.queue.borrow_mut().push((id, callback));
            FakeHandle { id, cancelled: self.cancelled.clone() }
        }
    }

    impl FakeFrames {
        /// Runs every callback queued before this frame; returns how many fired.
        pub fn run_frame(&self, timestamp: f64) -> usize {
            let due: Vec<Queued> = self.queue.borrow_mut().drain(..).collect();
            let mut fired = 0;
            for (id, callback) in due {
                if !self.cancelled.borrow().contains(&id) {
                    callback(timestamp);
                    fired += 1;
                }
            }
            fired
        }

        pub fn pending(&self) -> usize {
            let cancelled = self.cancelled.borrow();
            self.queue.borrow().iter().filter(|(id, _)| !cancelled.contains(id)).count()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::FakeFrames;
    use super::*;

    fn counting_loop(frames: &FakeFrames, stop_after: usize) -> (FrameLoop<FakeFrames>, Rc<Cell<usize>>) {
        let ticks = Rc::new(Cell::new(0));
        let counter = ticks.clone();
        let frame_loop = FrameLoop::start_with(frames.clone(), move |_| {
            counter.set(counter.get() + 1);
            if counter.get() >= stop_after {
                LoopControl::Stop
            } else {
                LoopControl::Continue
            }
        });
        (frame_loop, ticks)
    }

    #[test]
    fn keeps_exactly_one_frame_pending() {
        let frames = FakeFrames::default();
        let (frame_loop, ticks) = counting_loop(&frames, usize::MAX);
        for n in 1..=10 {
            assert_eq!(frames.pending(), 1);
            assert_eq!(frames.run_frame(n as f64 * 16.0), 1);
            assert_eq!(ticks.get(), n);
        }
        assert!(frame_loop.is_running());
    }

    #[test]
    fn stop_from_tick_ends_the_loop() {
        let frames = FakeFrames::default();
        let (frame_loop, ticks) = counting_loop(&frames, 3);
        for _ in 0..10 {
            frames.run_frame(0.0);
        }
        assert_eq!(ticks.get(), 3);
        assert_eq!(frames.pending(), 0);
        assert!(!frame_loop.is_running());
    }

    #[test]
    fn cancel_is_idempotent_and_drops_pending_frame() {
        let frames = FakeFrames::default();
        let (frame_loop, ticks) = counting_loop(&frames, usize::MAX);
        frames.run_frame(0.0);
        frame_loop.cancel();
        frame_loop.cancel();
        assert_eq!(frames.pending(), 0);
        assert_eq!(frames.run_frame(16.0), 0);
        assert_eq!(ticks.get(), 1);
        drop(frame_loop);
        assert_eq!(frames.run_frame(32.0), 0);
    }

    #[test]
    fn dropping_the_loop_cancels_it() {
        let frames = FakeFrames::default();
        let (frame_loop, ticks) = counting_loop(&frames, usize::MAX);
        drop(frame_loop);
        assert_eq!(frames.pending(), 0);
        assert_eq!(frames.run_frame(0.0), 0);
        assert_eq!(ticks.get(), 0);
    }

    #[test]
    fn cancel_from_inside_tick_stops_rescheduling() {
        let frames = FakeFrames::default();
        let holder: Rc<RefCell<Option<FrameLoop<FakeFrames>>>> = Rc::new(RefCell::new(None));
        let inside = holder.clone();
        let ticks = Rc::new(Cell::new(0));
        let counter = ticks.clone();
        let frame_loop = FrameLoop::start_with(frames.clone(), move |_| {
            counter.set(counter.get() + 1);
            if let Some(frame_loop) = inside.borrow().as_ref() {
                frame_loop.cancel();
            }
            LoopControl::Continue
        });
        *holder.borrow_mut() = Some(frame_loop);

        frames.run_frame(0.0);
        frames.run_frame(16.0);
        assert_eq!(ticks.get(), 1);
        assert_eq!(frames.pending(), 0);
    }
}
