//! Centering-on-entry scheduler.
//!
//! When a looped level is entered, the viewport has to start inside the middle
//! copy, but the strip's extent is only known once layout has settled. The
//! scheduler hands out a retry plan (immediate, next frame, then fixed delays)
//! tagged with a [`Generation`]. Every navigation change starts a new
//! generation, so retries from an older one resolve to [`Attempt::Stale`]
//! when they fire.
//!
//! A step that finds the extent unknown keeps retrying on following frames.
//! That frame chain is capped per step, so a late delayed step still runs
//! after an earlier chain gave up.

use std::time::Duration;

use log::{debug, trace};

/// Token identifying one navigation state. Retries carry the generation they
/// were scheduled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Generation(u64);

impl Generation {
    fn next(self) -> Self {
        Generation(self.0.wrapping_add(1))
    }
}

/// One entry of a centering plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryStep {
    Immediate,
    NextFrame,
    After(Duration),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CenteringPlan {
    pub generation: Generation,
    pub steps: Vec<RetryStep>,
}

impl CenteringPlan {
    /// Delayed steps only; immediate and frame steps are driven by the caller.
    pub fn delays(&self) -> impl Iterator<Item = Duration> + '_ {
        self.steps.iter().filter_map(|step| match step {
            RetryStep::After(delay) => Some(*delay),
            _ => None,
        })
    }
}

/// What a centering attempt decided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Attempt {
    /// Scroll to this offset now.
    Center(f32),
    /// Extent not known yet; try again on the next frame.
    RetryNextFrame,
    /// Already centered for the current extent, or the user has taken over.
    Settled,
    /// Frame retry cap reached for the current step.
    Exhausted,
    /// Scheduled for an older generation, or no centering is active.
    Stale,
}

/// Two offsets closer than this are treated as the same position.
const OFFSET_EPSILON: f32 = 0.5;

#[derive(Debug, Clone)]
pub struct CenteringScheduler {
    generation: Generation,
    max_attempts: u32,
    frame_retries: u32,
    active: bool,
    awaiting_frame: bool,
    user_scrolled: bool,
    last_target: Option<f32>,
}

impl CenteringScheduler {
    pub fn new(max_attempts: u32) -> Self {
        Self {
            generation: Generation::default(),
            max_attempts: max_attempts.max(1),
            frame_retries: 0,
            active: false,
            awaiting_frame: false,
            user_scrolled: false,
            last_target: None,
        }
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Frame retries spent by the current step.
    pub fn frame_retries(&self) -> u32 {
        self.frame_retries
    }

    /// True while a next-frame attempt is pending.
    pub fn awaiting_frame(&self) -> bool {
        self.active && self.awaiting_frame
    }

    /// Start a new generation and return its plan. Previously scheduled
    /// retries become stale.
    pub fn begin(
        &mut self,
        delays: impl IntoIterator<Item = Duration>,
    ) -> CenteringPlan {
        self.reset_generation();
        self.active = true;
        self.awaiting_frame = true;

        let mut steps = vec![RetryStep::Immediate, RetryStep::NextFrame];
        steps.extend(delays.into_iter().map(RetryStep::After));
        debug!(
            "Centering plan for generation {:?}: {} steps",
            self.generation,
            steps.len()
        );

        CenteringPlan {
            generation: self.generation,
            steps,
        }
    }

    /// Invalidate every outstanding retry without starting new ones.
    pub fn cancel(&mut self) {
        self.reset_generation();
    }

    fn reset_generation(&mut self) {
        self.generation = self.generation.next();
        self.frame_retries = 0;
        self.active = false;
        self.awaiting_frame = false;
        self.user_scrolled = false;
        self.last_target = None;
    }

    /// Consume the pending next-frame attempt, if any.
    pub fn take_frame(&mut self) -> Option<Generation> {
        if self.awaiting_frame() {
            self.awaiting_frame = false;
            Some(self.generation)
        } else {
            None
        }
    }

    /// A scroll the scheduler did not cause. Later retries in this generation
    /// leave the viewport alone.
    pub fn note_user_scroll(&mut self) {
        if self.active && self.last_target.is_some() {
            trace!("User scrolled during centering; settling");
            self.user_scrolled = true;
        }
    }

    /// Run a scheduled step (immediate or delayed) for `generation` given
    /// the currently known one-copy extent. Starts a fresh frame chain.
    pub fn attempt(
        &mut self,
        generation: Generation,
        one_copy: Option<f32>,
    ) -> Attempt {
        if let Some(done) = self.check(generation) {
            return done;
        }
        self.frame_retries = 0;
        self.resolve(one_copy)
    }

    /// Run a next-frame retry, spending one from the current chain.
    pub fn frame_attempt(
        &mut self,
        generation: Generation,
        one_copy: Option<f32>,
    ) -> Attempt {
        if let Some(done) = self.check(generation) {
            return done;
        }
        if self.frame_retries >= self.max_attempts {
            self.awaiting_frame = false;
            return Attempt::Exhausted;
        }
        self.frame_retries += 1;
        self.resolve(one_copy)
    }

    fn check(&self, generation: Generation) -> Option<Attempt> {
        if generation != self.generation || !self.active {
            Some(Attempt::Stale)
        } else if self.user_scrolled {
            Some(Attempt::Settled)
        } else {
            None
        }
    }

    fn resolve(&mut self, one_copy: Option<f32>) -> Attempt {
        let Some(target) = one_copy.filter(|w| w.is_finite() && *w > 0.0)
        else {
            self.awaiting_frame = true;
            return Attempt::RetryNextFrame;
        };

        if self
            .last_target
            .is_some_and(|last| (last - target).abs() < OFFSET_EPSILON)
        {
            return Attempt::Settled;
        }

        self.last_target = Some(target);
        Attempt::Center(target)
    }
}
