use crate::Vec2;

/// What an action may ask of the navigation substrate.
///
/// `remaining_distance` is infinite while a path is pending or no
/// destination is set, so arrival checks fail closed.
pub trait Locomotion {
    fn set_destination(&mut self, point: Vec2);

    fn is_path_pending(&self) -> bool;

    fn remaining_distance(&self) -> f32;

    fn stopping_distance(&self) -> f32;
}

/// Straight-line kinematic mover for tests and headless demos.
///
/// The host calls [`SteeringLocomotor::update`] once per tick; a freshly set
/// destination stays path-pending until the first update after it, matching
/// the async path computation of a real navigation backend.
#[derive(Debug, Clone)]
pub struct SteeringLocomotor {
    position: Vec2,
    destination: Option<Vec2>,
    pending: bool,
    speed: f32,
    stopping_distance: f32,
}

impl SteeringLocomotor {
    pub fn new(position: Vec2, speed: f32, stopping_distance: f32) -> Self {
        Self {
            position,
            destination: None,
            pending: false,
            speed,
            stopping_distance,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn destination(&self) -> Option<Vec2> {
        self.destination
    }

    pub fn update(&mut self, dt: f32) {
        self.pending = false;
        let Some(destination) = self.destination else {
            return;
        };

        let to_destination = destination - self.position;
        let distance = to_destination.length();
        let step = self.speed.max(0.0) * dt.max(0.0);

        if step >= distance || distance <= f32::EPSILON {
            self.position = destination;
        } else {
            self.position = self.position + to_destination * (step / distance);
        }
    }
}

impl Locomotion for SteeringLocomotor {
    fn set_destination(&mut self, point: Vec2) {
        // Re-issuing the current destination does not restart path computation.
        if self.destination == Some(point) {
            return;
        }
        self.destination = Some(point);
        self.pending = true;
    }

    fn is_path_pending(&self) -> bool {
        self.pending
    }

    fn remaining_distance(&self) -> f32 {
        if self.pending {
            return f32::INFINITY;
        }
        match self.destination {
            Some(destination) => self.position.distance(destination),
            None => f32::INFINITY,
        }
    }

    fn stopping_distance(&self) -> f32 {
        self.stopping_distance
    }
}
