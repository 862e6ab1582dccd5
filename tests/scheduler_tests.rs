//! Scheduler pass semantics through the facade crate.

use std::cell::RefCell;
use std::rc::Rc;

use space_garbage::core::{Grid, Scheduler, Step, Task, TickContext, World};
use space_garbage::types::Controls;

type Log = Rc<RefCell<Vec<&'static str>>>;

/// Records its label each step; finishes after `life` steps.
struct Recorder {
    label: &'static str,
    life: u32,
    log: Log,
}

impl Task for Recorder {
    fn name(&self) -> &'static str {
        self.label
    }

    fn step(&mut self, _cx: &mut TickContext<'_>) -> Step {
        self.log.borrow_mut().push(self.label);
        self.life -= 1;
        if self.life == 0 {
            Step::Done
        } else {
            Step::Yield
        }
    }
}

/// Spawns a short-lived child every step.
struct Breeder {
    log: Log,
}

impl Task for Breeder {
    fn name(&self) -> &'static str {
        "breeder"
    }

    fn step(&mut self, cx: &mut TickContext<'_>) -> Step {
        self.log.borrow_mut().push("breeder");
        cx.spawn(Recorder {
            label: "child",
            life: 1,
            log: self.log.clone(),
        });
        Step::Yield
    }
}

fn pass(s: &mut Scheduler, world: &mut World, grid: &mut Grid) -> space_garbage::core::PassReport {
    s.run_pass(world, grid, Controls::default())
}

#[test]
fn test_tasks_resume_in_insertion_order_once_per_pass() {
    let log = Log::default();
    let mut s = Scheduler::new();
    for label in ["a", "b", "c"] {
        s.spawn(Recorder {
            label,
            life: 10,
            log: log.clone(),
        });
    }
    let mut world = World::new(1);
    let mut grid = Grid::new(10, 10);

    pass(&mut s, &mut world, &mut grid);
    pass(&mut s, &mut world, &mut grid);
    assert_eq!(*log.borrow(), vec!["a", "b", "c", "a", "b", "c"]);
    assert_eq!(s.ticks(), 2);
}

#[test]
fn test_completed_tasks_are_removed_and_not_resumed_again() {
    let log = Log::default();
    let mut s = Scheduler::new();
    s.spawn(Recorder {
        label: "short",
        life: 1,
        log: log.clone(),
    });
    s.spawn(Recorder {
        label: "long",
        life: 3,
        log: log.clone(),
    });
    let mut world = World::new(1);
    let mut grid = Grid::new(10, 10);

    let report = pass(&mut s, &mut world, &mut grid);
    assert_eq!(report.resumed, 2);
    assert_eq!(report.completed, 1);
    assert_eq!(s.len(), 1);

    pass(&mut s, &mut world, &mut grid);
    pass(&mut s, &mut world, &mut grid);
    assert!(s.is_empty());
    assert_eq!(*log.borrow(), vec!["short", "long", "long", "long"]);

    // An empty scheduler still counts passes.
    let report = pass(&mut s, &mut world, &mut grid);
    assert_eq!(report.resumed, 0);
    assert_eq!(s.ticks(), 4);
}

#[test]
fn test_spawned_tasks_start_on_the_next_pass() {
    let log = Log::default();
    let mut s = Scheduler::new();
    s.spawn(Breeder { log: log.clone() });
    let mut world = World::new(1);
    let mut grid = Grid::new(10, 10);

    let report = pass(&mut s, &mut world, &mut grid);
    assert_eq!(report.spawned, 1);
    assert_eq!(*log.borrow(), vec!["breeder"]);
    assert_eq!(s.count("child"), 1);

    pass(&mut s, &mut world, &mut grid);
    assert_eq!(*log.borrow(), vec!["breeder", "breeder", "child"]);
    // The first child finished, the second one waits for the next pass.
    assert_eq!(s.count("child"), 1);
}
