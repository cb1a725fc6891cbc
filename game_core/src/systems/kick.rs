use glam::Vec3;
use hecs::World;
use log::info;
use rand::Rng;

use crate::{Ball, Config, Events, GameRng, KickSetup, Params, SessionStats, SoundId};

/// Initial kinematics for a kick, before any flight integration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KickImpulse {
    pub velocity: Vec3,
    pub lateral_accel_x: f32,
}

/// Convert normalized kick intent into initial ball kinematics.
///
/// Pure: same inputs always give the same impulse. The goal lies toward -y,
/// hence the negative forward component.
pub fn compute_kick(
    power_fraction: f32,
    aim_degrees: f32,
    contact_x: f32,
    contact_z: f32,
    config: &Config,
) -> KickImpulse {
    let fraction = power_fraction.clamp(0.0, 1.0);
    let launch_speed = config.min_kick_strength
        + fraction * (config.max_kick_strength - config.min_kick_strength);

    // Striking below center lofts the ball, above center keeps it down
    let vertical_degrees = (-contact_z / Params::BALL_RADIUS * Params::MAX_VERTICAL_ANGLE_DEG)
        .clamp(
            -Params::MAX_VERTICAL_ANGLE_DEG,
            Params::MAX_VERTICAL_ANGLE_DEG,
        );

    let aim = aim_degrees.to_radians();
    let vertical = vertical_degrees.to_radians();
    let velocity = Vec3::new(
        launch_speed * aim.sin(),
        -launch_speed * aim.cos(),
        launch_speed * vertical.tan(),
    );

    // Striking right of center curves the ball left, and vice versa
    let offset_x = contact_x.clamp(-Params::BALL_RADIUS, Params::BALL_RADIUS);
    let lateral_accel_x = -(offset_x / Params::BALL_RADIUS) * config.max_kick_curve;

    KickImpulse {
        velocity,
        lateral_accel_x,
    }
}

/// Launch the ball with the pending kick intent.
///
/// Marks the ball airborne, seeds the knuckleball re-roll interval and
/// records the kick spot distance for the coin tier.
pub fn apply_kick(
    world: &mut World,
    setup: &mut KickSetup,
    config: &Config,
    rng: &mut GameRng,
    stats: &mut SessionStats,
    events: &mut Events,
    power_fraction: f32,
) {
    let impulse = compute_kick(
        power_fraction,
        setup.aim_degrees,
        setup.contact_x,
        setup.contact_z,
        config,
    );

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        setup.kick_spot_y = ball.pos.y;

        ball.vel = impulse.velocity;
        ball.is_kicked = true;
        ball.is_on_ground = false;
        ball.lateral_accel_x = impulse.lateral_accel_x;
        ball.knuckle_accel_x = 0.0;
        ball.knuckle_accel_z = 0.0;
        ball.knuckle_timer = 0.0;
        ball.knuckle_interval = rng.0.gen_range(
            config.knuckleball_min_change_interval..=config.knuckleball_max_change_interval,
        );

        stats.record_attempt();
        events.kicked = true;
        events.sounds.push(SoundId::Kick);

        info!(
            "kick launched: speed {:.1} m/s, aim {:.1} deg, curve {:.2} m/s^2, from y {:.1}",
            impulse.velocity.length(),
            setup.aim_degrees,
            impulse.lateral_accel_x,
            setup.kick_spot_y
        );
    }
}
