use vigil_core::{mask, ConfigError, Mask, State};
use vigil_goap::{Agent, AgentConfig};
use vigil_nav::Locomotion;

use crate::{
    GuardContext, GuardFact, MoveToItem, MoveToTarget, PatrolStep, PickUpItem, TagTarget, Vision,
};

/// Target spotted -> tag it; otherwise -> make patrol progress.
pub fn select_goal(state: State) -> Mask {
    if state.has(GuardFact::SeesTarget) {
        mask(&[GuardFact::TargetTagged])
    } else {
        mask(&[GuardFact::PatrolStepDone])
    }
}

/// Overlay sensed facts onto the owned bits.
///
/// ItemExists means "a pickup is available to this agent": it combines the
/// world query with the owned HasItem fact, so an agent that already carries
/// the item stops planning trips to the pickup.
pub fn sense<L, V>(world: &GuardContext<L, V>, owned: State) -> State
where
    L: Locomotion,
    V: Vision,
{
    let has_item = owned.has(GuardFact::HasItem);

    let mut state = owned;
    state = if world.vision.sees_target() {
        state.with(GuardFact::SeesTarget)
    } else {
        state.without(GuardFact::SeesTarget)
    };

    let item_available = world.item.is_some() && !has_item;
    state = if item_available {
        state.with(GuardFact::ItemExists)
    } else {
        state.without(GuardFact::ItemExists)
    };

    state
}

/// Default arrival slack when closing on the target.
pub const TARGET_ARRIVE_DISTANCE: f32 = 1.0;
/// Default arrival slack on patrol waypoints.
pub const PATROL_ARRIVE_DISTANCE: f32 = 0.5;

/// Canned wiring for the guard domain.
///
/// Registry order decides planner tie-breaks among equal-cost plans, so it
/// is part of the configuration: fetching the item before closing on the
/// target keeps the guard armed when it arrives.
pub fn guard_agent<L, V>(
    config: AgentConfig,
) -> Result<Agent<GuardFact, GuardContext<L, V>>, ConfigError>
where
    L: Locomotion + 'static,
    V: Vision + 'static,
{
    Agent::<GuardFact, GuardContext<L, V>>::builder(
        |world, owned| sense(world, owned),
        select_goal,
    )
    .with_action(MoveToItem::new())
    .with_action(PickUpItem::new())
    .with_action(MoveToTarget::new(TARGET_ARRIVE_DISTANCE))
    .with_action(TagTarget::new())
    .with_action(PatrolStep::new(PATROL_ARRIVE_DISTANCE))
    .with_transient_facts(&[GuardFact::PatrolStepDone])
    .with_config(config)
    .build()
}
