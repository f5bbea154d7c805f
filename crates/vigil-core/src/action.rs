use crate::{ConfigError, Mask, State, TickContext};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Status {
    Running,
    Success,
    Failure,
}

/// Planner-visible action metadata, fixed at configuration time.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Descriptor {
    pub name: &'static str,
    pub cost: f32,
    pub pre: Mask,
    pub add: Mask,
    pub del: Mask,
}

impl Descriptor {
    pub fn can_apply_to(&self, state: State) -> bool {
        (state.bits() & self.pre) == self.pre
    }

    /// Successor state under this action's effects.
    ///
    /// Delete is applied before add, so a bit in both masks ends up set.
    pub fn apply_to(&self, state: State) -> State {
        State::new((state.bits() & !self.del) | self.add)
    }

    /// Costs are used additively by the planner and must be finite and
    /// non-negative; anything else is a configuration error.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.cost.is_finite() {
            return Err(ConfigError::NonFiniteCost { action: self.name });
        }
        if self.cost < 0.0 {
            return Err(ConfigError::NegativeCost {
                action: self.name,
                cost: self.cost,
            });
        }
        Ok(())
    }
}

/// A unit of agent behavior: planner-visible metadata plus a runtime
/// enter/tick/exit state machine.
///
/// The planner reasons only over [`Descriptor`] masks. `check_procedural` is
/// a runtime-only gate evaluated after a plan is chosen, immediately before
/// the action becomes current, so an action can veto itself when a concrete
/// resource is gone even though its symbolic preconditions hold.
pub trait Action<C>: 'static {
    fn descriptor(&self) -> &Descriptor;

    fn check_procedural(&self, _world: &C) -> bool {
        true
    }

    fn on_enter(&mut self, _world: &mut C) {}

    /// `Running` suspends judgment: the same instance is ticked again next
    /// cycle with no re-entry. `Failure` means this attempt could not
    /// complete; the action does not retry itself.
    fn tick(&mut self, ctx: &TickContext, world: &mut C) -> Status;

    fn on_exit(&mut self, _world: &mut C) {}
}
