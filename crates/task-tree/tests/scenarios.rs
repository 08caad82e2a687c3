//! End-to-end scenarios driving whole trees tick by tick.

use blackboard::{Bind, Blackboard};
use task_tree::builder::{dynamic_gate, gate, sequence};
use task_tree::{
    Action, ActionList, ActionRunner, ActionScope, Behavior, Condition, ConditionRunner, Ctx,
    Status,
};

/// Minimal agent: an NPC with a position and an execution log.
#[derive(Default)]
struct Npc {
    position: f64,
    alarmed: bool,
    log: Vec<String>,
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Completes on its `ticks`-th update with a fixed outcome.
struct Step {
    label: &'static str,
    ticks: u32,
    succeed: bool,
}

impl Action<Npc> for Step {
    fn on_enter(&mut self, scope: &mut ActionScope<'_, Npc>) {
        scope.agent.log.push(format!("start {}", self.label));
    }

    fn on_update(&mut self, scope: &mut ActionScope<'_, Npc>) {
        if scope.elapsed_ticks() + 1 >= self.ticks {
            scope.agent.log.push(format!("end {}", self.label));
            scope.finish(self.succeed);
        }
    }
}

/// Moves the agent by a bound speed each tick, for a fixed duration.
struct MoveBySpeed {
    speed: Bind<f64>,
    ticks: u32,
}

impl Action<Npc> for MoveBySpeed {
    fn on_update(&mut self, scope: &mut ActionScope<'_, Npc>) {
        let speed = self.speed.get(scope.blackboard).unwrap_or(0.0);
        scope.agent.position += speed;
        if scope.elapsed_ticks() + 1 >= self.ticks {
            scope.finish(true);
        }
    }
}

/// Writes a value through a bound cell.
struct SetSpeed {
    speed: Bind<f64>,
    to: f64,
}

impl Action<Npc> for SetSpeed {
    fn on_update(&mut self, scope: &mut ActionScope<'_, Npc>) {
        let ok = self.speed.set(scope.blackboard, self.to).is_ok();
        scope.finish(ok);
    }
}

struct IsCalm;

impl Condition<Npc> for IsCalm {
    fn check(&mut self, ctx: &mut Ctx<'_, Npc>) -> bool {
        !ctx.agent.alarmed
    }
}

fn step(label: &'static str, ticks: u32, succeed: bool) -> ActionRunner<Npc> {
    ActionRunner::new(label, Step { label, ticks, succeed })
}

#[test]
fn sequential_list_fails_at_third_of_four() {
    init_tracing();
    let mut list = ActionList::sequential("plan")
        .with_action(step("a", 1, true))
        .with_action(step("b", 1, true))
        .with_action(step("c", 1, false))
        .with_action(step("d", 1, true));
    let mut npc = Npc::default();
    let mut bb = Blackboard::new("npc");

    assert_eq!(list.execute(&mut Ctx::new(&mut npc, &mut bb)), Status::Failure);
    assert_eq!(
        npc.log,
        vec!["start a", "end a", "start b", "end b", "start c", "end c"]
    );
}

#[test]
fn parallel_list_runs_one_tick_then_succeeds() {
    init_tracing();
    let mut list = ActionList::parallel("fan")
        .with_action(step("slow", 2, true))
        .with_action(step("fast", 1, true));
    let mut npc = Npc::default();
    let mut bb = Blackboard::new("npc");

    assert_eq!(list.execute(&mut Ctx::new(&mut npc, &mut bb)), Status::Running);
    assert_eq!(list.execute(&mut Ctx::new(&mut npc, &mut bb)), Status::Success);
}

#[test]
fn bound_speed_round_trips_through_the_board() {
    init_tracing();
    let mut npc = Npc::default();
    let mut bb = Blackboard::new("npc");
    bb.declare("Speed", 5.0).unwrap();

    // Boost the speed through a bound cell, then move with it.
    let mut tree = sequence(vec![
        Box::new(ActionRunner::new(
            "boost",
            SetSpeed { speed: Bind::named("Speed"), to: 7.5 },
        )),
        Box::new(ActionRunner::new(
            "move",
            MoveBySpeed { speed: Bind::named("Speed"), ticks: 2 },
        )),
    ]);

    assert_eq!(tree.tick(&mut Ctx::new(&mut npc, &mut bb)), Status::Running);
    assert_eq!(tree.tick(&mut Ctx::new(&mut npc, &mut bb)), Status::Success);
    // The write was visible to the same-tick read that followed it.
    assert_eq!(npc.position, 15.0);
    assert_eq!(bb.get::<f64>("Speed"), Some(7.5));
}

#[test]
fn literal_speed_ignores_same_named_variable() {
    init_tracing();
    let mut npc = Npc::default();
    let mut bb = Blackboard::new("npc");
    bb.declare("Speed", 5.0).unwrap();

    let mut mover = ActionRunner::new(
        "move",
        MoveBySpeed { speed: Bind::Literal(1.0), ticks: 1 },
    );
    assert_eq!(mover.execute(&mut Ctx::new(&mut npc, &mut bb)), Status::Success);
    assert_eq!(npc.position, 1.0);
    assert_eq!(bb.get::<f64>("Speed"), Some(5.0));
}

#[test]
fn latched_patrol_survives_alarm_until_reset() {
    init_tracing();
    let mut npc = Npc::default();
    let mut bb = Blackboard::new("npc");

    let mut tree = gate(
        "patrol-access",
        ConditionRunner::new("calm", IsCalm),
        Box::new(ActionRunner::new("patrol", Step { label: "patrol", ticks: 1, succeed: true })),
    );

    // Access granted while calm.
    assert_eq!(tree.tick(&mut Ctx::new(&mut npc, &mut bb)), Status::Success);

    // Alarm raised, but the latch keeps delegating.
    npc.alarmed = true;
    assert_eq!(tree.tick(&mut Ctx::new(&mut npc, &mut bb)), Status::Success);

    // Tree restart clears the latch; the gate now refuses.
    tree.reset();
    assert_eq!(tree.tick(&mut Ctx::new(&mut npc, &mut bb)), Status::Failure);
}

#[test]
fn dynamic_guard_aborts_patrol_on_alarm() {
    init_tracing();
    let mut npc = Npc::default();
    let mut bb = Blackboard::new("npc");

    let mut tree = dynamic_gate(
        "patrol-guard",
        ConditionRunner::new("calm", IsCalm),
        Box::new(ActionRunner::new("patrol", Step { label: "patrol", ticks: 3, succeed: true })),
    );

    assert_eq!(tree.tick(&mut Ctx::new(&mut npc, &mut bb)), Status::Running);
    assert_eq!(npc.log, vec!["start patrol"]);

    // Alarm mid-run: the guard re-evaluates, aborts the child, and fails
    // this same tick.
    npc.alarmed = true;
    assert_eq!(tree.tick(&mut Ctx::new(&mut npc, &mut bb)), Status::Failure);

    // Calm again: the patrol starts over from scratch.
    npc.alarmed = false;
    assert_eq!(tree.tick(&mut Ctx::new(&mut npc, &mut bb)), Status::Running);
    assert_eq!(npc.log, vec!["start patrol", "start patrol"]);
}

#[test]
fn disabled_tasks_are_transparent_everywhere() {
    init_tracing();
    let mut npc = Npc::default();
    let mut bb = Blackboard::new("npc");

    // A disabled always-failing action in a sequential list.
    let mut failing = step("bad", 1, false);
    failing.set_active(false);
    let mut list = ActionList::sequential("plan")
        .with_action(failing)
        .with_action(step("good", 1, true));
    assert_eq!(list.execute(&mut Ctx::new(&mut npc, &mut bb)), Status::Success);

    // A disabled always-false condition checks as true.
    npc.alarmed = true;
    let mut calm = ConditionRunner::new("calm", IsCalm);
    calm.set_active(false);
    assert!(calm.check_condition(&mut Ctx::new(&mut npc, &mut bb)));
}

#[test]
fn event_driven_condition_latches_for_one_check() {
    init_tracing();
    let mut npc = Npc::default();
    npc.alarmed = true; // raw check would be false
    let mut bb = Blackboard::new("npc");

    let mut calm = ConditionRunner::new("calm", IsCalm);

    // An event handler registers a hit this tick.
    calm.yield_return(true);
    assert!(calm.check_condition(&mut Ctx::new(&mut npc, &mut bb)));

    // Next tick the override has faded.
    assert!(!calm.check_condition(&mut Ctx::new(&mut npc, &mut bb)));
}
