use vigil_nav::{Locomotion, Vec2};

use crate::Vision;

/// Live external references every action tick needs.
///
/// Kept deliberately narrow: each field is one collaborator capability.
/// `target` and `item` are optional because either reference can vanish at
/// any time; every use site checks them. `patrol_index` is the one piece of
/// runtime state actions share across ticks through the context rather than
/// through facts.
pub struct GuardContext<L, V>
where
    L: Locomotion,
    V: Vision,
{
    pub locomotion: L,
    pub vision: V,
    pub target: Option<Vec2>,
    pub item: Option<Vec2>,
    pub patrol_route: Vec<Vec2>,
    pub patrol_index: usize,
}
