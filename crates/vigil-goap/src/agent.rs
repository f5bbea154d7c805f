use core::marker::PhantomData;
use std::collections::VecDeque;
use std::fmt::Write as _;

use vigil_core::{
    validate_fact_space, Action, ConfigError, Descriptor, Fact, Mask, State, Status, TickContext,
};
use vigil_tools::{NullTraceSink, TraceEvent, TraceSink};

/// State refresh run at the top of every cycle: takes the persisted owned
/// bits and overlays facts freshly computed from sensors and world queries.
pub type SenseFn<C> = Box<dyn FnMut(&C, State) -> State>;

/// Pure goal selection over the current state. Must be side-effect-free so
/// replanning is deterministic given the same state.
pub type GoalFn = Box<dyn Fn(State) -> Mask>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentConfig {
    /// Minimum seconds between replans (prevents spam when facts flicker).
    /// 0 disables throttling.
    pub min_seconds_between_replans: f32,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            min_seconds_between_replans: 0.2,
        }
    }
}

/// Per-tick control loop over one agent's owned facts, plan queue, and
/// current action.
///
/// Each [`Agent::tick`]:
///
/// 1. clears one-shot owned facts,
/// 2. rebuilds the current state through the sense overlay,
/// 3. selects a goal mask,
/// 4. requests a plan when there is none and the replan throttle allows,
/// 5. dequeues the next action (procedural gate first),
/// 6. ticks the current action, applying its effects to owned facts only on
///    `Success` and discarding the plan (throttled) on `Failure`.
///
/// Exactly one agent instance owns its facts and plan for the agent's
/// lifetime; the loop is single-threaded and tick-driven, so nothing here
/// locks.
pub struct Agent<F, C>
where
    F: Fact,
    C: 'static,
{
    planner: crate::Planner,
    actions: Vec<Box<dyn Action<C>>>,
    sense: SenseFn<C>,
    goal: GoalFn,
    transient: Mask,
    config: AgentConfig,

    owned: Mask,
    plan: VecDeque<usize>,
    current: Option<usize>,
    next_allowed_replan: f64,
    last_plan_cost: Option<f32>,
    plan_calls: u64,
    trace: Box<dyn TraceSink>,
    _facts: PhantomData<F>,
}

impl<F, C> Agent<F, C>
where
    F: Fact,
    C: 'static,
{
    pub fn builder(
        sense: impl FnMut(&C, State) -> State + 'static,
        goal: impl Fn(State) -> Mask + 'static,
    ) -> AgentBuilder<F, C> {
        AgentBuilder::new(sense, goal)
    }

    /// Owned (memory) facts as of the last tick. Sensed facts are not in
    /// here; they live only in the rebuilt per-tick state.
    pub fn owned_facts(&self) -> State {
        State::new(self.owned)
    }

    pub fn current_action_name(&self) -> Option<&'static str> {
        self.current.map(|idx| self.actions[idx].descriptor().name)
    }

    pub fn queued_len(&self) -> usize {
        self.plan.len()
    }

    /// Number of planner invocations so far (throttled requests are skipped
    /// before this counts).
    pub fn plan_calls(&self) -> u64 {
        self.plan_calls
    }

    pub fn last_plan_cost(&self) -> Option<f32> {
        self.last_plan_cost
    }

    pub fn tick(&mut self, ctx: &TickContext, world: &mut C) {
        // One-shot facts are observable for exactly the cycle in which their
        // action succeeded.
        self.owned &= !self.transient;

        let state = (self.sense)(world, State::new(self.owned));
        let goal = (self.goal)(state);

        if self.plan.is_empty()
            && self.current.is_none()
            && ctx.time_seconds >= self.next_allowed_replan
        {
            self.request_plan(ctx, state, goal);
        }

        if self.current.is_none() {
            let Some(index) = self.plan.pop_front() else {
                return;
            };
            // Runtime-only gate, after planning: symbolic preconditions can
            // hold while the concrete resource is already gone.
            if !self.actions[index].check_procedural(world) {
                self.trace.emit(
                    TraceEvent::new(ctx.tick, "goap.action.vetoed").with_a(index as u64),
                );
                self.invalidate(ctx);
                return;
            }
            self.actions[index].on_enter(world);
            self.trace
                .emit(TraceEvent::new(ctx.tick, "goap.action.enter").with_a(index as u64));
            self.current = Some(index);
        }

        let Some(index) = self.current else {
            return;
        };

        match self.actions[index].tick(ctx, world) {
            Status::Running => {}
            Status::Success => {
                // Effects reach owned facts only on success, so the symbolic
                // record of "what has been achieved" never runs ahead of an
                // incomplete action.
                let (add, del) = {
                    let descriptor = self.actions[index].descriptor();
                    (descriptor.add, descriptor.del)
                };
                self.owned = (self.owned & !del) | add;
                self.trace
                    .emit(TraceEvent::new(ctx.tick, "goap.action.success").with_a(index as u64));
                self.actions[index].on_exit(world);
                self.current = None;
            }
            Status::Failure => {
                self.trace
                    .emit(TraceEvent::new(ctx.tick, "goap.action.failure").with_a(index as u64));
                self.actions[index].on_exit(world);
                self.current = None;
                self.invalidate(ctx);
            }
        }
    }

    /// Human-readable dump of the selected goal, current action, every fact
    /// truth value, and the remaining queue.
    pub fn describe(&mut self, world: &C) -> String {
        let state = (self.sense)(world, State::new(self.owned));
        let goal = (self.goal)(state);

        let mut out = String::new();
        let _ = writeln!(out, "Goal: {}", mask_names::<F>(goal));
        let _ = writeln!(
            out,
            "Current Action: {}",
            self.current_action_name().unwrap_or("(none)")
        );
        let _ = writeln!(out, "Facts:");
        for &fact in F::ALL {
            let _ = writeln!(out, "- {}: {}", fact.name(), state.has(fact));
        }
        let _ = writeln!(out, "Plan:");
        if self.plan.is_empty() {
            let _ = writeln!(out, "- (none)");
        } else {
            for &index in &self.plan {
                let _ = writeln!(out, "- {}", self.actions[index].descriptor().name);
            }
        }
        out
    }

    fn request_plan(&mut self, ctx: &TickContext, state: State, goal: Mask) {
        self.plan_calls = self.plan_calls.saturating_add(1);
        self.trace.emit(
            TraceEvent::new(ctx.tick, "goap.plan.call")
                .with_a(state.bits())
                .with_b(goal),
        );

        let descriptors: Vec<Descriptor> = self
            .actions
            .iter()
            .map(|action| action.descriptor().clone())
            .collect();

        match self.planner.plan(state, goal, &descriptors) {
            Some(plan) => {
                self.trace.emit(
                    TraceEvent::new(ctx.tick, "goap.plan.found")
                        .with_a(plan.len() as u64)
                        .with_b(plan.total_cost.to_bits() as u64),
                );
                self.last_plan_cost = Some(plan.total_cost);
                self.plan = plan.steps.into();
            }
            None => {
                // Unsatisfiable goal: stay idle and retry once the throttle
                // window passes. Never fatal.
                self.trace.emit(
                    TraceEvent::new(ctx.tick, "goap.plan.none")
                        .with_a(state.bits())
                        .with_b(goal),
                );
                self.last_plan_cost = None;
                self.arm_throttle(ctx);
            }
        }
    }

    /// Cancel the plan wholesale. No rollback of effects from earlier,
    /// already-succeeded steps.
    fn invalidate(&mut self, ctx: &TickContext) {
        self.plan.clear();
        self.current = None;
        self.last_plan_cost = None;
        self.arm_throttle(ctx);
    }

    fn arm_throttle(&mut self, ctx: &TickContext) {
        self.next_allowed_replan =
            ctx.time_seconds + f64::from(self.config.min_seconds_between_replans);
    }
}

fn mask_names<F: Fact>(mask: Mask) -> String {
    let mut out = String::new();
    for &fact in F::ALL {
        if (mask & fact.bit()) != 0 {
            if !out.is_empty() {
                out.push_str(", ");
            }
            out.push_str(fact.name());
        }
    }
    if out.is_empty() {
        out.push_str("(none)");
    }
    out
}

pub struct AgentBuilder<F, C>
where
    F: Fact,
    C: 'static,
{
    planner: crate::Planner,
    actions: Vec<Box<dyn Action<C>>>,
    sense: SenseFn<C>,
    goal: GoalFn,
    transient: Mask,
    config: AgentConfig,
    trace: Box<dyn TraceSink>,
    _facts: PhantomData<F>,
}

impl<F, C> AgentBuilder<F, C>
where
    F: Fact,
    C: 'static,
{
    pub fn new(
        sense: impl FnMut(&C, State) -> State + 'static,
        goal: impl Fn(State) -> Mask + 'static,
    ) -> Self {
        Self {
            planner: crate::Planner::new(),
            actions: Vec::new(),
            sense: Box::new(sense),
            goal: Box::new(goal),
            transient: 0,
            config: AgentConfig::default(),
            trace: Box::new(NullTraceSink),
            _facts: PhantomData,
        }
    }

    pub fn with_planner(mut self, planner: crate::Planner) -> Self {
        self.planner = planner;
        self
    }

    pub fn with_action(mut self, action: impl Action<C>) -> Self {
        self.actions.push(Box::new(action));
        self
    }

    /// Owned facts cleared at the start of every cycle; they exist only to
    /// be observed as true for the cycle in which an action succeeded.
    pub fn with_transient_facts(mut self, facts: &[F]) -> Self {
        self.transient = vigil_core::mask(facts);
        self
    }

    pub fn with_config(mut self, config: AgentConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_trace_sink(mut self, trace: Box<dyn TraceSink>) -> Self {
        self.trace = trace;
        self
    }

    /// Validate the fact space, every action descriptor, and the tunables,
    /// then assemble the agent. Fails fast: the control loop never runs on a
    /// malformed configuration.
    pub fn build(self) -> Result<Agent<F, C>, ConfigError> {
        validate_fact_space::<F>()?;
        for action in &self.actions {
            action.descriptor().validate()?;
        }
        let seconds = self.config.min_seconds_between_replans;
        if !seconds.is_finite() || seconds < 0.0 {
            return Err(ConfigError::InvalidReplanInterval { seconds });
        }

        Ok(Agent {
            planner: self.planner,
            actions: self.actions,
            sense: self.sense,
            goal: self.goal,
            transient: self.transient,
            config: self.config,
            owned: 0,
            plan: VecDeque::new(),
            current: None,
            next_allowed_replan: 0.0,
            last_plan_cost: None,
            plan_calls: 0,
            trace: self.trace,
            _facts: PhantomData,
        })
    }
}
