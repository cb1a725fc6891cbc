use serde::Deserialize;

/// Fixed design parameters for the penalty-kick game
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Screen
    pub const SCREEN_WIDTH: f32 = 1280.0;
    pub const SCREEN_HEIGHT: f32 = 720.0;

    // Goal frame (goal line is at y = 0)
    pub const GOAL_MIN_X: f32 = -4.0;
    pub const GOAL_MAX_X: f32 = 4.0;
    pub const CROSSBAR_Z: f32 = 2.5;

    // Ball
    pub const BALL_RADIUS: f32 = 0.11;

    // Placement window for the kick spot
    pub const PLACE_MIN_X: f32 = -20.0;
    pub const PLACE_MAX_X: f32 = 20.0;
    pub const PLACE_MIN_Y: f32 = 16.5;
    pub const PLACE_MAX_Y: f32 = 50.0;

    // Physics
    pub const GRAVITY: f32 = 9.81;
    pub const FIXED_DT: f32 = 0.0166;
    pub const MAX_DT: f32 = 0.1;

    // Rest thresholds after a ground bounce. Fixed by design, not tunable.
    pub const BOUNCE_STOP_VZ: f32 = 0.1;
    pub const STOP_SPEED_SQ: f32 = 0.1;

    // Aiming / contact selection
    pub const AIM_STEP_DEG: f32 = 2.0;
    pub const CONTACT_STEP: f32 = Self::BALL_RADIUS / 10.0;
    pub const MAX_VERTICAL_ANGLE_DEG: f32 = 45.0;

    // Power bar
    pub const POWER_SEGMENTS: u8 = 4;
    pub const CHARGE_TIME_PER_SEGMENT: f32 = 0.25;

    // Goalkeeper
    pub const KEEPER_WIDTH: f32 = 1.5;
    pub const KEEPER_HEIGHT: f32 = 2.0;
    pub const KEEPER_BOUND_X: f32 = 6.0;
    pub const KEEPER_GAIN: f32 = 5.0;
    pub const KEEPER_DEADBAND: f32 = 0.01;
    pub const SAVE_TRIGGER_Y: f32 = 0.5;
    pub const SAVE_TOLERANCE: f32 = 0.15;
    pub const SAVE_Y_RETENTION: f32 = 0.8;
    pub const SAVE_DEFLECTION: f32 = 2.0;
    pub const SAVE_LIFT: f32 = 1.0;
    pub const SAVE_NUDGE_Y: f32 = 0.1;

    // Outcome timers
    pub const GOAL_DISPLAY_TIME: f32 = 2.0;
    pub const PAST_LINE_TIME: f32 = 3.0;

    // Coin tiers by kick-spot distance (y at kick time)
    pub const COIN_TIER_FAR_Y: f32 = 40.0;
    pub const COIN_TIER_MID_Y: f32 = 30.0;
    pub const COINS_FAR: u32 = 40;
    pub const COINS_MID: u32 = 20;
    pub const COINS_NEAR: u32 = 10;
}

/// Runtime tuning, reloadable from an external configuration collaborator.
///
/// Every field has a default so a partial override (e.g. a JSON document
/// carrying only `max_kick_strength`) deserializes cleanly.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    // Camera extrinsics/intrinsics
    pub camera_position_x: f32,
    pub camera_position_y: f32,
    pub camera_height: f32,
    pub camera_fov_degrees: f32,
    pub camera_downlook_degrees: f32,

    // Kick strength and curve
    pub min_kick_strength: f32,
    pub max_kick_strength: f32,
    pub max_kick_curve: f32,

    // Knuckleball tuning
    pub knuckleball_threshold_speed: f32,
    pub knuckleball_min_acceleration: f32,
    pub knuckleball_max_acceleration: f32,
    pub knuckleball_min_change_interval: f32,
    pub knuckleball_max_change_interval: f32,

    // Ground bounce
    pub ball_bounce_z_restitution: f32,
    pub ball_friction_xy_retention: f32,

    // Goalkeeper
    pub goalkeeper_max_speed: f32,
    pub goalkeeper_max_acceleration: f32,
    pub keeper_enabled: bool,

    // Kick spot spawn
    pub spawn_position_x: f32,
    pub spawn_position_y: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            camera_position_x: 0.0,
            camera_position_y: 80.0,
            camera_height: 30.0,
            camera_fov_degrees: 60.0,
            camera_downlook_degrees: 0.0,
            min_kick_strength: 15.0,
            max_kick_strength: 35.0,
            max_kick_curve: 3.0,
            knuckleball_threshold_speed: 25.0,
            knuckleball_min_acceleration: 0.0,
            knuckleball_max_acceleration: 2.0,
            knuckleball_min_change_interval: 0.0,
            knuckleball_max_change_interval: 1.0,
            ball_bounce_z_restitution: 0.5,
            ball_friction_xy_retention: 0.5,
            goalkeeper_max_speed: 5.0,
            goalkeeper_max_acceleration: 8.0,
            keeper_enabled: true,
            spawn_position_x: 0.0,
            spawn_position_y: 30.0,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Camera position in world meters (x lateral, y forward, z up).
    pub fn camera_position(&self) -> glam::Vec3 {
        glam::Vec3::new(
            self.camera_position_x,
            self.camera_position_y,
            self.camera_height,
        )
    }

    /// Default kick-spot position, resting on the ground.
    pub fn spawn_position(&self) -> glam::Vec3 {
        glam::Vec3::new(
            self.spawn_position_x,
            self.spawn_position_y,
            Params::BALL_RADIUS,
        )
    }

    /// Replace all values at once so callers observe a consistent snapshot.
    pub fn reload(&mut self, new_values: Config) {
        *self = new_values;
    }

    /// Coins awarded for a goal scored from `kick_y` meters out.
    pub fn coins_for_kick(kick_y: f32) -> u32 {
        if kick_y > Params::COIN_TIER_FAR_Y {
            Params::COINS_FAR
        } else if kick_y > Params::COIN_TIER_MID_Y {
            Params::COINS_MID
        } else {
            Params::COINS_NEAR
        }
    }

    /// Check a ground point against the placement window.
    pub fn placement_in_bounds(x: f32, y: f32) -> bool {
        (Params::PLACE_MIN_X..=Params::PLACE_MAX_X).contains(&x)
            && (Params::PLACE_MIN_Y..=Params::PLACE_MAX_Y).contains(&y)
    }
}
