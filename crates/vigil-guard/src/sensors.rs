use vigil_nav::Vec2;

/// Perception capability consumed by the guard: one boolean, refreshed once
/// per tick before the agent rebuilds its state.
pub trait Vision {
    fn sees_target(&self) -> bool;
}

/// Distance-gated reference sensor.
///
/// No occlusion: line-of-sight raycasts belong to the host's perception
/// subsystem, behind the [`Vision`] trait.
#[derive(Debug, Clone)]
pub struct RangeVision {
    pub view_range: f32,
    seen: bool,
}

impl RangeVision {
    pub fn new(view_range: f32) -> Self {
        Self {
            view_range,
            seen: false,
        }
    }

    pub fn update(&mut self, origin: Vec2, target: Option<Vec2>) {
        self.seen = match target {
            Some(target) => origin.distance(target) <= self.view_range,
            None => false,
        };
    }
}

impl Vision for RangeVision {
    fn sees_target(&self) -> bool {
        self.seen
    }
}

/// Fixed-value sensor for tests and headless demos.
#[derive(Debug, Clone, Default)]
pub struct ScriptedVision {
    pub seen: bool,
}

impl Vision for ScriptedVision {
    fn sees_target(&self) -> bool {
        self.seen
    }
}
