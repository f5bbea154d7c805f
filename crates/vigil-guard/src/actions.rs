use vigil_core::{mask, Action, Descriptor, Status, TickContext};
use vigil_nav::Locomotion;

use crate::{GuardContext, GuardFact, Vision};

/// Close to within `arrive_distance` of the target.
///
/// Re-issues the destination every tick because the target moves; fails the
/// moment the target vanishes or leaves vision, handing the decision back to
/// the control loop.
pub struct MoveToTarget {
    descriptor: Descriptor,
    arrive_distance: f32,
}

impl MoveToTarget {
    pub fn new(arrive_distance: f32) -> Self {
        Self {
            descriptor: Descriptor {
                name: "move_to_target",
                cost: 1.0,
                pre: mask(&[GuardFact::SeesTarget]),
                add: mask(&[GuardFact::AtTarget]),
                del: 0,
            },
            arrive_distance,
        }
    }
}

impl<L, V> Action<GuardContext<L, V>> for MoveToTarget
where
    L: Locomotion + 'static,
    V: Vision + 'static,
{
    fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    fn check_procedural(&self, world: &GuardContext<L, V>) -> bool {
        world.target.is_some()
    }

    fn tick(&mut self, _ctx: &TickContext, world: &mut GuardContext<L, V>) -> Status {
        let Some(target) = world.target else {
            return Status::Failure;
        };
        if !world.vision.sees_target() {
            return Status::Failure;
        }

        world.locomotion.set_destination(target);

        if world.locomotion.is_path_pending() {
            return Status::Running;
        }
        if world.locomotion.remaining_distance() <= self.arrive_distance {
            return Status::Success;
        }
        Status::Running
    }
}

/// Walk to the pickup's position.
pub struct MoveToItem {
    descriptor: Descriptor,
}

impl MoveToItem {
    pub fn new() -> Self {
        Self {
            descriptor: Descriptor {
                name: "move_to_item",
                cost: 1.0,
                pre: mask(&[GuardFact::ItemExists]),
                add: mask(&[GuardFact::AtItem]),
                del: 0,
            },
        }
    }
}

impl Default for MoveToItem {
    fn default() -> Self {
        Self::new()
    }
}

impl<L, V> Action<GuardContext<L, V>> for MoveToItem
where
    L: Locomotion + 'static,
    V: Vision + 'static,
{
    fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    fn check_procedural(&self, world: &GuardContext<L, V>) -> bool {
        world.item.is_some()
    }

    fn on_enter(&mut self, world: &mut GuardContext<L, V>) {
        if let Some(item) = world.item {
            world.locomotion.set_destination(item);
        }
    }

    fn tick(&mut self, _ctx: &TickContext, world: &mut GuardContext<L, V>) -> Status {
        if world.item.is_none() {
            return Status::Failure;
        }
        if world.locomotion.is_path_pending() {
            return Status::Running;
        }
        if world.locomotion.remaining_distance() <= world.locomotion.stopping_distance() {
            return Status::Success;
        }
        Status::Running
    }
}

/// Consume the pickup: the item reference goes absent for everyone.
pub struct PickUpItem {
    descriptor: Descriptor,
}

impl PickUpItem {
    pub fn new() -> Self {
        Self {
            descriptor: Descriptor {
                name: "pick_up_item",
                cost: 1.0,
                pre: mask(&[GuardFact::AtItem]),
                add: mask(&[GuardFact::HasItem]),
                del: mask(&[GuardFact::AtItem]),
            },
        }
    }
}

impl Default for PickUpItem {
    fn default() -> Self {
        Self::new()
    }
}

impl<L, V> Action<GuardContext<L, V>> for PickUpItem
where
    L: Locomotion + 'static,
    V: Vision + 'static,
{
    fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    fn check_procedural(&self, world: &GuardContext<L, V>) -> bool {
        world.item.is_some()
    }

    fn tick(&mut self, _ctx: &TickContext, world: &mut GuardContext<L, V>) -> Status {
        match world.item.take() {
            Some(_) => Status::Success,
            None => Status::Failure,
        }
    }
}

/// One leg of the patrol route.
///
/// No planner preconditions; goal selection already keeps patrol plans for
/// the not-chasing case. Fails as soon as the target is spotted so the loop
/// replans toward the engage goal.
pub struct PatrolStep {
    descriptor: Descriptor,
    arrive_distance: f32,
}

impl PatrolStep {
    pub fn new(arrive_distance: f32) -> Self {
        Self {
            descriptor: Descriptor {
                name: "patrol_step",
                cost: 2.0,
                pre: 0,
                add: mask(&[GuardFact::PatrolStepDone]),
                del: 0,
            },
            arrive_distance,
        }
    }
}

impl<L, V> Action<GuardContext<L, V>> for PatrolStep
where
    L: Locomotion + 'static,
    V: Vision + 'static,
{
    fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    fn on_enter(&mut self, world: &mut GuardContext<L, V>) {
        if world.patrol_route.is_empty() {
            return;
        }
        let waypoint = world.patrol_route[world.patrol_index % world.patrol_route.len()];
        world.locomotion.set_destination(waypoint);
    }

    fn tick(&mut self, _ctx: &TickContext, world: &mut GuardContext<L, V>) -> Status {
        if world.vision.sees_target() {
            return Status::Failure;
        }
        if world.patrol_route.is_empty() {
            return Status::Failure;
        }
        if world.locomotion.is_path_pending() {
            return Status::Running;
        }
        if world.locomotion.remaining_distance() <= self.arrive_distance {
            world.patrol_index = (world.patrol_index + 1) % world.patrol_route.len();
            return Status::Success;
        }
        Status::Running
    }
}

/// The engagement payoff; assumes the plan already put the guard in reach
/// with the item in hand.
pub struct TagTarget {
    descriptor: Descriptor,
}

impl TagTarget {
    pub fn new() -> Self {
        Self {
            descriptor: Descriptor {
                name: "tag_target",
                cost: 1.0,
                pre: mask(&[GuardFact::AtTarget, GuardFact::HasItem]),
                add: mask(&[GuardFact::TargetTagged]),
                del: 0,
            },
        }
    }
}

impl Default for TagTarget {
    fn default() -> Self {
        Self::new()
    }
}

impl<L, V> Action<GuardContext<L, V>> for TagTarget
where
    L: Locomotion + 'static,
    V: Vision + 'static,
{
    fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    fn tick(&mut self, _ctx: &TickContext, _world: &mut GuardContext<L, V>) -> Status {
        tracing::info!("target tagged");
        Status::Success
    }
}
