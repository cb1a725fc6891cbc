use glam::Vec3;

use crate::params::{Config, Params};

/// Ball component - kinematic state plus airborne spin effects
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec3,
    pub vel: Vec3,
    pub is_kicked: bool,
    pub is_on_ground: bool,
    /// Constant sideways acceleration from off-center contact, active while airborne
    pub lateral_accel_x: f32,
    /// Current knuckleball perturbation (x lateral, z vertical)
    pub knuckle_accel_x: f32,
    pub knuckle_accel_z: f32,
    pub knuckle_timer: f32,
    /// Time until the next knuckle re-roll, drawn uniformly at kick time
    pub knuckle_interval: f32,
}

impl Ball {
    pub const RADIUS: f32 = Params::BALL_RADIUS;

    pub fn new(pos: Vec3) -> Self {
        Self {
            pos,
            vel: Vec3::ZERO,
            is_kicked: false,
            is_on_ground: true,
            lateral_accel_x: 0.0,
            knuckle_accel_x: 0.0,
            knuckle_accel_z: 0.0,
            knuckle_timer: 0.0,
            knuckle_interval: 0.0,
        }
    }

    /// Place the ball at a kick spot on the ground, at rest.
    pub fn place(&mut self, x: f32, y: f32) {
        self.pos = Vec3::new(x, y, Self::RADIUS);
        self.vel = Vec3::ZERO;
        self.is_kicked = false;
        self.is_on_ground = true;
        self.lateral_accel_x = 0.0;
        self.knuckle_accel_x = 0.0;
        self.knuckle_accel_z = 0.0;
        self.knuckle_timer = 0.0;
        self.knuckle_interval = 0.0;
    }

    /// Reset to the configured default kick spot.
    pub fn reset(&mut self, config: &Config) {
        self.place(config.spawn_position_x, config.spawn_position_y);
    }

    pub fn is_airborne(&self) -> bool {
        self.pos.z > Self::RADIUS
    }
}

/// Goalkeeper component - tracks the ball laterally along the goal line
#[derive(Debug, Clone, Copy)]
pub struct Keeper {
    /// Center of the collision rectangle; z is fixed at half-height
    pub pos: Vec3,
    pub vel_x: f32,
    pub target_x: f32,
    pub width: f32,
    pub height: f32,
}

impl Keeper {
    pub fn new() -> Self {
        Self {
            pos: Vec3::new(0.0, 0.0, Params::KEEPER_HEIGHT / 2.0),
            vel_x: 0.0,
            target_x: 0.0,
            width: Params::KEEPER_WIDTH,
            height: Params::KEEPER_HEIGHT,
        }
    }

    pub fn reset(&mut self) {
        self.pos.x = 0.0;
        self.vel_x = 0.0;
        self.target_x = 0.0;
    }
}

impl Default for Keeper {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ball_place_clears_flight_state() {
        let mut ball = Ball::new(Vec3::new(0.0, 30.0, Ball::RADIUS));
        ball.is_kicked = true;
        ball.is_on_ground = false;
        ball.vel = Vec3::new(5.0, -20.0, 3.0);
        ball.lateral_accel_x = -2.0;
        ball.knuckle_accel_x = 1.0;
        ball.knuckle_timer = 0.4;

        ball.place(2.0, 20.0);

        assert_eq!(ball.pos, Vec3::new(2.0, 20.0, Ball::RADIUS));
        assert_eq!(ball.vel, Vec3::ZERO);
        assert!(!ball.is_kicked);
        assert!(ball.is_on_ground);
        assert_eq!(ball.lateral_accel_x, 0.0);
        assert_eq!(ball.knuckle_accel_x, 0.0);
        assert_eq!(ball.knuckle_timer, 0.0);
    }

    #[test]
    fn test_keeper_reset() {
        let mut keeper = Keeper::new();
        keeper.pos.x = 4.0;
        keeper.vel_x = 3.0;
        keeper.target_x = 5.0;

        keeper.reset();

        assert_eq!(keeper.pos.x, 0.0);
        assert_eq!(keeper.vel_x, 0.0);
        assert_eq!(keeper.target_x, 0.0);
        // z stays at half-height so the rectangle's bottom touches the ground
        assert_eq!(keeper.pos.z, Params::KEEPER_HEIGHT / 2.0);
    }
}
