use vigil_core::Fact;

/// The guard's world model.
///
/// SeesTarget and ItemExists are sensed facts, refreshed every tick by
/// [`crate::sense`]; the rest are owned facts the agent remembers across
/// ticks. PatrolStepDone is one-shot: it is cleared at the start of every
/// cycle and exists only to be observed in the cycle a patrol leg completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuardFact {
    SeesTarget = 0,
    ItemExists = 1,
    HasItem = 2,
    AtItem = 3,
    AtTarget = 4,
    PatrolStepDone = 5,
    TargetTagged = 6,
}

impl Fact for GuardFact {
    const ALL: &'static [Self] = &[
        GuardFact::SeesTarget,
        GuardFact::ItemExists,
        GuardFact::HasItem,
        GuardFact::AtItem,
        GuardFact::AtTarget,
        GuardFact::PatrolStepDone,
        GuardFact::TargetTagged,
    ];

    fn ordinal(self) -> u32 {
        self as u32
    }

    fn name(self) -> &'static str {
        match self {
            GuardFact::SeesTarget => "sees_target",
            GuardFact::ItemExists => "item_exists",
            GuardFact::HasItem => "has_item",
            GuardFact::AtItem => "at_item",
            GuardFact::AtTarget => "at_target",
            GuardFact::PatrolStepDone => "patrol_step_done",
            GuardFact::TargetTagged => "target_tagged",
        }
    }
}
