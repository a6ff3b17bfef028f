//! Outcome/animation orchestration.
//!
//! `trigger()` draws a new outcome, commits it at once, fires the mode's
//! feedback cue and holds `Busy` for the mode's fixed duration. The outcome
//! is therefore visible while the animation runs; the animation is purely
//! cosmetic and settles on the already-committed value.
//!
//! Resolution is keyed by a per-trigger ticket and the timer callback only
//! holds a weak reference to the state, so a stale, duplicate or post-teardown
//! firing changes nothing.

use crate::constants::{COIN_BUSY_DURATION, DIE_BUSY_DURATION};
use crate::mode::{Mode, Outcome};
use crate::source::OutcomeSource;
use crate::synth::ToneSynthesizer;
use crate::timer::Timer;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Animation state exposed to the presentation layer.
///
/// The two busy sub-phases (lift/throw and spin/roll) are driven by one timer
/// and always start and end together.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationStatus {
    Idle,
    Busy { throwing: bool, rolling: bool },
}

impl AnimationStatus {
    fn busy() -> Self {
        AnimationStatus::Busy {
            throwing: true,
            rolling: true,
        }
    }

    pub fn is_busy(self) -> bool {
        matches!(self, AnimationStatus::Busy { .. })
    }

    pub fn is_throwing(self) -> bool {
        matches!(self, AnimationStatus::Busy { throwing: true, .. })
    }

    pub fn is_rolling(self) -> bool {
        matches!(self, AnimationStatus::Busy { rolling: true, .. })
    }
}

/// Answer to a `trigger()` or `switch_mode()` request. Rejection is defined
/// behavior, not an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Admission {
    Accepted,
    RejectedBusy,
    RejectedClosed,
}

/// Controller tuning.
///
/// - `die_busy` / `coin_busy`: busy-period length per mode; the frontend's
///   animation must last exactly as long
/// - `initial_mode`: mode at construction, showing its default outcome
#[derive(Clone, Debug)]
pub struct ControllerParams {
    pub die_busy: Duration,
    pub coin_busy: Duration,
    pub initial_mode: Mode,
}

impl Default for ControllerParams {
    fn default() -> Self {
        Self {
            die_busy: DIE_BUSY_DURATION,
            coin_busy: COIN_BUSY_DURATION,
            initial_mode: Mode::Die,
        }
    }
}

impl ControllerParams {
    pub fn busy_duration(&self, mode: Mode) -> Duration {
        match mode {
            Mode::Die => self.die_busy,
            Mode::Coin => self.coin_busy,
        }
    }
}

/// Everything the presentation layer reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControllerView {
    pub mode: Mode,
    pub outcome: Outcome,
    pub status: AnimationStatus,
}

struct Pending {
    ticket: u64,
    drawn: Outcome,
    started: Instant,
}

struct ControllerState {
    mode: Mode,
    outcome: Outcome,
    status: AnimationStatus,
    pending: Option<Pending>,
    next_ticket: u64,
    closed: bool,
}

pub struct AnimationController {
    state: Rc<RefCell<ControllerState>>,
    source: RefCell<Box<dyn OutcomeSource>>,
    synth: Rc<ToneSynthesizer>,
    timer: Rc<dyn Timer>,
    params: ControllerParams,
}

impl AnimationController {
    pub fn new(
        params: ControllerParams,
        source: Box<dyn OutcomeSource>,
        synth: Rc<ToneSynthesizer>,
        timer: Rc<dyn Timer>,
    ) -> Self {
        let mode = params.initial_mode;
        let state = ControllerState {
            mode,
            outcome: mode.default_outcome(),
            status: AnimationStatus::Idle,
            pending: None,
            next_ticket: 0,
            closed: false,
        };
        Self {
            state: Rc::new(RefCell::new(state)),
            source: RefCell::new(source),
            synth,
            timer,
            params,
        }
    }

    /// Start a toss. Ignored while a previous one is still animating.
    pub fn trigger(&self) -> Admission {
        let (ticket, mode, drawn) = {
            let mut state = self.state.borrow_mut();
            if state.closed {
                log::warn!("[controller] trigger after teardown");
                return Admission::RejectedClosed;
            }
            if state.status.is_busy() {
                log::debug!("[controller] trigger ignored, busy");
                return Admission::RejectedBusy;
            }
            let mode = state.mode;
            let drawn = self.draw(mode);
            state.outcome = drawn;
            let ticket = state.next_ticket;
            state.next_ticket += 1;
            (ticket, mode, drawn)
        };

        self.synth.play_cue(mode.cue());

        {
            let mut state = self.state.borrow_mut();
            state.status = AnimationStatus::busy();
            state.pending = Some(Pending {
                ticket,
                drawn,
                started: Instant::now(),
            });
        }
        log::debug!("[controller] {} -> {} (ticket {})", mode, drawn, ticket);

        let delay = self.params.busy_duration(mode);
        let weak = Rc::downgrade(&self.state);
        let scheduled = self.timer.schedule_once(
            delay,
            Box::new(move || match weak.upgrade() {
                Some(state) => resolve(&state, ticket),
                None => log::debug!("[controller] ticket {} fired after teardown", ticket),
            }),
        );
        if let Err(e) = scheduled {
            log::error!("[controller] could not schedule resolution, settling now: {}", e);
            resolve(&self.state, ticket);
        }
        Admission::Accepted
    }

    /// Change the outcome domain. Only allowed while idle; a real change resets
    /// the outcome to the new domain's default.
    pub fn switch_mode(&self, new_mode: Mode) -> Admission {
        let mut state = self.state.borrow_mut();
        if state.closed {
            return Admission::RejectedClosed;
        }
        if state.status.is_busy() {
            log::debug!("[controller] switch to {} ignored, busy", new_mode);
            return Admission::RejectedBusy;
        }
        if state.mode != new_mode {
            state.mode = new_mode;
            state.outcome = new_mode.default_outcome();
            log::info!("[controller] mode -> {}", new_mode);
        }
        Admission::Accepted
    }

    /// Drop any pending resolution and refuse further requests.
    ///
    /// The outcome is already committed, so the status settles to `Idle`
    /// right away instead of waiting for a firing that will be ignored.
    pub fn teardown(&self) {
        let mut state = self.state.borrow_mut();
        state.closed = true;
        state.status = AnimationStatus::Idle;
        if let Some(p) = state.pending.take() {
            log::debug!("[controller] discarding pending ticket {}", p.ticket);
        }
    }

    pub fn view(&self) -> ControllerView {
        let state = self.state.borrow();
        ControllerView {
            mode: state.mode,
            outcome: state.outcome,
            status: state.status,
        }
    }

    pub fn mode(&self) -> Mode {
        self.state.borrow().mode
    }

    pub fn outcome(&self) -> Outcome {
        self.state.borrow().outcome
    }

    pub fn status(&self) -> AnimationStatus {
        self.state.borrow().status
    }

    pub fn params(&self) -> &ControllerParams {
        &self.params
    }

    pub fn synth(&self) -> &Rc<ToneSynthesizer> {
        &self.synth
    }

    fn draw(&self, mode: Mode) -> Outcome {
        let drawn = self.source.borrow_mut().draw(mode);
        if drawn.mode() != mode {
            log::error!("[controller] source returned {} for mode {}", drawn, mode);
            return mode.default_outcome();
        }
        drawn
    }
}

fn resolve(cell: &RefCell<ControllerState>, ticket: u64) {
    let mut state = cell.borrow_mut();
    match state.pending.take() {
        Some(p) if p.ticket == ticket => {
            debug_assert_eq!(state.outcome, p.drawn);
            state.status = AnimationStatus::Idle;
            log::debug!(
                "[controller] ticket {} settled on {} after {:?}",
                ticket,
                p.drawn,
                p.started.elapsed()
            );
        }
        Some(other) => {
            log::debug!("[controller] stale ticket {} (pending {})", ticket, other.ticket);
            state.pending = Some(other);
        }
        None => log::debug!("[controller] ticket {} has nothing to settle", ticket),
    }
}
