use hecs::World;
use rand::Rng;

use crate::{Ball, Config, Events, GameRng, Params, SoundId, Time};

/// Advance ball flight: knuckleball perturbation, gravity, lateral curve,
/// integration and ground bounce.
///
/// The knuckle effect and the curve both gate on the ball being strictly
/// above its radius; they are inert while resting or rolling.
pub fn update_ball(
    world: &mut World,
    time: &Time,
    config: &Config,
    rng: &mut GameRng,
    events: &mut Events,
) {
    let dt = time.dt;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if !ball.is_kicked {
            continue;
        }

        // Knuckleball: only an airborne fast ball flutters
        let speed = ball.vel.length();
        if speed > config.knuckleball_threshold_speed && ball.pos.z > Ball::RADIUS {
            ball.knuckle_timer += dt;
            if ball.knuckle_timer >= ball.knuckle_interval {
                ball.knuckle_timer = 0.0;
                ball.knuckle_interval = rng.0.gen_range(
                    config.knuckleball_min_change_interval
                        ..=config.knuckleball_max_change_interval,
                );
                ball.knuckle_accel_x = knuckle_component(rng, config);
                ball.knuckle_accel_z = knuckle_component(rng, config);
            }
        } else {
            // Interval keeps its last draw; only the active perturbation dies
            ball.knuckle_accel_x = 0.0;
            ball.knuckle_accel_z = 0.0;
            ball.knuckle_timer = 0.0;
        }

        ball.vel.z += (ball.knuckle_accel_z - Params::GRAVITY) * dt;
        if ball.pos.z > Ball::RADIUS {
            ball.vel.x += (ball.lateral_accel_x + ball.knuckle_accel_x) * dt;
        }

        ball.pos += ball.vel * dt;

        if ball.pos.z <= Ball::RADIUS && ball.vel.z < 0.0 {
            ball.pos.z = Ball::RADIUS;
            ball.vel.z *= -config.ball_bounce_z_restitution;
            ball.is_on_ground = true;

            ball.vel.x *= config.ball_friction_xy_retention;
            ball.vel.y *= config.ball_friction_xy_retention;

            events.bounced = true;
            events.sounds.push(SoundId::Bounce);

            // Anti-micro-bounce snap
            if ball.vel.z.abs() < Params::BOUNCE_STOP_VZ {
                ball.vel.z = 0.0;
            }
            if ball.vel.length_squared() < Params::STOP_SPEED_SQ {
                ball.vel = glam::Vec3::ZERO;
                ball.is_kicked = false;
                events.ball_stopped = true;
            }
        } else if ball.pos.z > Ball::RADIUS {
            ball.is_on_ground = false;
        }
    }
}

/// Draw one knuckle acceleration component: uniform magnitude, random sign.
fn knuckle_component(rng: &mut GameRng, config: &Config) -> f32 {
    let magnitude = rng.0.gen_range(
        config.knuckleball_min_acceleration..=config.knuckleball_max_acceleration,
    );
    if rng.0.gen_bool(0.5) {
        magnitude
    } else {
        -magnitude
    }
}
