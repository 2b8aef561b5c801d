//! Countdown Sequencer
//!
//! `Idle -> Running(n) -> Finished -> Displayed`, driven by a [`Scheduler`].
//! A periodic tick walks `Running(n)` down to zero, where it is cancelled and
//! a one-shot renders the completion message.
//!
//! Only one run owns the display: starting again supersedes (and cancels)
//! the run in progress.

use std::cell::RefCell;
use std::rc::Rc;

use crate::scheduler::Scheduler;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownFrame {
    Starting(u32),
    Count(u32),
    Go,
    Completed,
}

impl CountdownFrame {
    pub fn text(&self) -> String {
        match self {
            CountdownFrame::Starting(n) => format!("Starting in... {}", n),
            CountdownFrame::Count(n) => n.to_string(),
            CountdownFrame::Go => "GO!".to_string(),
            CountdownFrame::Completed => "Countdown completed! 🎉".to_string(),
        }
    }

    /// Tick frames animate with the `pulse` keyframes
    pub fn pulses(&self) -> bool {
        matches!(self, CountdownFrame::Count(_) | CountdownFrame::Go)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CountdownState {
    #[default]
    Idle,
    Running(u32),
    Finished,
    Displayed,
}

impl CountdownState {
    pub fn start(from: u32) -> (Self, CountdownFrame) {
        let from = from.max(1);
        (CountdownState::Running(from), CountdownFrame::Starting(from))
    }

    /// One periodic tick. Only `Running` moves.
    pub fn tick(self) -> (Self, Option<CountdownFrame>) {
        match self {
            CountdownState::Running(n) if n > 1 => {
                (CountdownState::Running(n - 1), Some(CountdownFrame::Count(n - 1)))
            }
            CountdownState::Running(_) => (CountdownState::Finished, Some(CountdownFrame::Go)),
            other => (other, None),
        }
    }

    /// The delayed completion step. Only `Finished` moves.
    pub fn complete(self) -> (Self, Option<CountdownFrame>) {
        match self {
            CountdownState::Finished => (CountdownState::Displayed, Some(CountdownFrame::Completed)),
            other => (other, None),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownTimings {
    pub from: u32,
    pub tick_ms: u32,
    pub completion_delay_ms: u32,
}

impl CountdownTimings {
    /// First number shown; a run always counts at least once.
    pub fn start_count(&self) -> u32 {
        self.from.max(1)
    }
}

impl Default for CountdownTimings {
    fn default() -> Self {
        Self {
            from: 10,
            tick_ms: 1000,
            completion_delay_ms: 1000,
        }
    }
}

struct Run<H> {
    generation: u64,
    state: CountdownState,
    /// Interval while running, then the completion timeout
    timer: Option<H>,
}

pub struct CountdownSequencer<S: Scheduler> {
    scheduler: S,
    timings: CountdownTimings,
    run: Rc<RefCell<Run<S::Handle>>>,
}

impl<S: Scheduler> Clone for CountdownSequencer<S> {
    fn clone(&self) -> Self {
        Self {
            scheduler: self.scheduler.clone(),
            timings: self.timings,
            run: Rc::clone(&self.run),
        }
    }
}

impl<S: Scheduler> CountdownSequencer<S> {
    pub fn new(scheduler: S, timings: CountdownTimings) -> Self {
        Self {
            scheduler,
            timings,
            run: Rc::new(RefCell::new(Run {
                generation: 0,
                state: CountdownState::Idle,
                timer: None,
            })),
        }
    }

    pub fn state(&self) -> CountdownState {
        self.run.borrow().state
    }

    /// Begin a new run, superseding any run in progress.
    pub fn start<R>(&self, render: R)
    where
        R: Fn(CountdownFrame) + 'static,
    {
        let from = self.timings.start_count();
        let (state, first) = CountdownState::start(from);
        let (generation, superseded) = {
            let mut run = self.run.borrow_mut();
            run.generation += 1;
            let superseded = run.timer.take();
            run.state = state;
            (run.generation, superseded)
        };
        if superseded.is_some() {
            log::info!("[COUNTDOWN] superseding run {}", generation - 1);
        }
        drop(superseded);

        log::info!("[COUNTDOWN] run {} starting from {}", generation, from);
        render(first);

        let render: Rc<dyn Fn(CountdownFrame)> = Rc::new(render);
        let run = Rc::clone(&self.run);
        let scheduler = self.scheduler.clone();
        let completion_delay = self.timings.completion_delay_ms;

        let interval = self.scheduler.repeat(self.timings.tick_ms, move || {
            let frame = {
                let mut current = run.borrow_mut();
                if current.generation != generation {
                    return;
                }
                let (next, frame) = current.state.tick();
                current.state = next;
                frame
            };
            let Some(frame) = frame else { return };
            render(frame);

            if frame == CountdownFrame::Go {
                let completion = {
                    let run = Rc::clone(&run);
                    let render = Rc::clone(&render);
                    scheduler.once(completion_delay, move || {
                        let frame = {
                            let mut current = run.borrow_mut();
                            if current.generation != generation {
                                return;
                            }
                            let (next, frame) = current.state.complete();
                            current.state = next;
                            frame
                        };
                        if let Some(frame) = frame {
                            log::info!("[COUNTDOWN] run {} completed", generation);
                            render(frame);
                        }
                    })
                };
                // Swapping in the completion timer cancels this interval
                let interval = run.borrow_mut().timer.replace(completion);
                drop(interval);
            }
        });

        self.run.borrow_mut().timer = Some(interval);
    }
}
