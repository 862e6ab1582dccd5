//! Cooperative task scheduler.
//!
//! Every task is an explicit state machine. One scheduling pass resumes each
//! live task exactly once, in order; a task either yields (stays live) or
//! reports it is done (is dropped). Tasks spawned during a pass join the live
//! set after the pass, so they first run on the next tick.
//!
//! There is no preemption and no locking: a task owns the world for the length
//! of its own step and nothing else runs meanwhile.

use serde::Serialize;
use tracing::{debug, trace};

use crate::frame::Canvas;
use crate::types::Controls;
use crate::world::World;

/// Outcome of resuming a task once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Step {
    /// Suspended; resume again next tick.
    Yield,
    /// Finished; drop the task.
    Done,
}

/// A cooperative unit of behaviour.
pub trait Task {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Advance by one tick.
    fn step(&mut self, cx: &mut TickContext<'_>) -> Step;
}

/// Everything a task may touch during its step.
pub struct TickContext<'a> {
    pub world: &'a mut World,
    pub canvas: &'a mut dyn Canvas,
    /// Player intent sampled once for the whole tick.
    pub controls: Controls,
    spawned: &'a mut Vec<Box<dyn Task>>,
}

impl<'a> TickContext<'a> {
    pub fn new(
        world: &'a mut World,
        canvas: &'a mut dyn Canvas,
        controls: Controls,
        spawned: &'a mut Vec<Box<dyn Task>>,
    ) -> Self {
        Self {
            world,
            canvas,
            controls,
            spawned,
        }
    }

    /// Start a new task. It runs from the next tick on.
    pub fn spawn<T: Task + 'static>(&mut self, task: T) {
        self.spawn_boxed(Box::new(task));
    }

    pub fn spawn_boxed(&mut self, task: Box<dyn Task>) {
        debug!(task = task.name(), year = self.world.year(), "task spawned");
        self.spawned.push(task);
    }
}

/// Counters for one scheduling pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PassReport {
    /// Tasks resumed this pass.
    pub resumed: usize,
    /// Tasks that finished this pass.
    pub completed: usize,
    /// Tasks spawned this pass (live from the next one).
    pub spawned: usize,
}

#[derive(Default)]
pub struct Scheduler {
    tasks: Vec<Box<dyn Task>>,
    pending: Vec<Box<dyn Task>>,
    ticks: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a task before or between passes.
    pub fn spawn<T: Task + 'static>(&mut self, task: T) {
        self.spawn_boxed(Box::new(task));
    }

    pub fn spawn_boxed(&mut self, task: Box<dyn Task>) {
        self.tasks.push(task);
    }

    /// Number of live tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Completed passes.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// How many live tasks carry the given name.
    pub fn count(&self, name: &str) -> usize {
        self.tasks.iter().filter(|t| t.name() == name).count()
    }

    /// Resume every live task once.
    pub fn run_pass(&mut self, world: &mut World, canvas: &mut dyn Canvas, controls: Controls) -> PassReport {
        let resumed = self.tasks.len();
        let mut completed = 0;
        let pending = &mut self.pending;

        self.tasks.retain_mut(|task| {
            let mut cx = TickContext {
                world: &mut *world,
                canvas: &mut *canvas,
                controls,
                spawned: &mut *pending,
            };
            match task.step(&mut cx) {
                Step::Yield => true,
                Step::Done => {
                    debug!(task = task.name(), "task completed");
                    completed += 1;
                    false
                }
            }
        });

        let spawned = self.pending.len();
        self.tasks.append(&mut self.pending);
        self.ticks += 1;

        trace!(
            tick = self.ticks,
            resumed,
            completed,
            spawned,
            live = self.tasks.len(),
            "scheduler pass"
        );

        PassReport {
            resumed,
            completed,
            spawned,
        }
    }
}
