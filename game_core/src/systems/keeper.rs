use hecs::World;

use crate::{Ball, Config, Keeper, Params, Time};

/// Move the goalkeeper toward the ball's lateral position.
///
/// Proportional control saturating at the configured max speed, with the
/// per-tick velocity change limited by max acceleration. Position stays
/// inside the goal-area bound.
pub fn update_keeper(world: &mut World, time: &Time, config: &Config) {
    let mut tracked_x = None;
    for (_entity, ball) in world.query_mut::<&Ball>() {
        if ball.is_kicked && ball.pos.z > Ball::RADIUS {
            tracked_x = Some(ball.pos.x);
        }
    }

    for (_entity, keeper) in world.query_mut::<&mut Keeper>() {
        if let Some(x) = tracked_x {
            keeper.target_x = x;
        }

        let distance = keeper.target_x - keeper.pos.x;
        let desired_vel = if distance.abs() <= Params::KEEPER_DEADBAND {
            0.0
        } else {
            let speed = (distance.abs() * Params::KEEPER_GAIN).min(config.goalkeeper_max_speed);
            distance.signum() * speed
        };

        let max_change = config.goalkeeper_max_acceleration * time.dt;
        let change = (desired_vel - keeper.vel_x).clamp(-max_change, max_change);
        keeper.vel_x += change;

        keeper.pos.x += keeper.vel_x * time.dt;
        keeper.pos.x = keeper
            .pos
            .x
            .clamp(-Params::KEEPER_BOUND_X, Params::KEEPER_BOUND_X);
    }
}

/// True iff the ball is goalward-bound near the line and inside the
/// keeper's collision rectangle expanded by the save tolerance.
pub fn check_save(keeper: &Keeper, ball: &Ball) -> bool {
    if ball.pos.y > Params::SAVE_TRIGGER_Y || ball.vel.y >= 0.0 {
        return false;
    }
    let half_width = keeper.width / 2.0 + Params::SAVE_TOLERANCE;
    let reach_z = keeper.height + Params::SAVE_TOLERANCE;
    (ball.pos.x - keeper.pos.x).abs() <= half_width
        && ball.pos.z >= -Params::SAVE_TOLERANCE
        && ball.pos.z <= reach_z
}

/// Deflect a saved ball back into play.
///
/// Reflects the goalward velocity with energy loss, pushes the ball away
/// from the keeper's center and lifts it. Returns false if the ball is not
/// moving goalward, in which case nothing is touched.
pub fn save_ball(keeper: &Keeper, ball: &mut Ball) -> bool {
    if ball.vel.y >= 0.0 {
        return false;
    }

    ball.vel.y = ball.vel.y.abs() * Params::SAVE_Y_RETENTION;
    ball.vel.x += (ball.pos.x - keeper.pos.x) * Params::SAVE_DEFLECTION;
    ball.vel.z += Params::SAVE_LIFT;

    // Keep the ball from reaching the goal line within the same tick
    if ball.pos.y <= 0.0 {
        ball.pos.y = Params::SAVE_NUDGE_Y;
    }
    true
}
