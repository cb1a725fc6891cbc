use hecs::World;
use log::info;

use crate::systems::keeper::{check_save, save_ball};
use crate::{
    Ball, Config, Events, Keeper, KickSetup, MatchAction, MatchFsm, Params, PowerCharge,
    SessionStats, SoundId,
};

/// Resolve saves, goals and misses for a ball in flight.
///
/// A triggered save deflects the ball and skips the goal/miss check for
/// this tick. A ball that has come to rest short of the line counts as a
/// miss.
pub fn check_outcome(
    world: &mut World,
    config: &Config,
    fsm: &mut MatchFsm,
    setup: &KickSetup,
    stats: &mut SessionStats,
    events: &mut Events,
) {
    let keeper_snapshot = if config.keeper_enabled {
        let mut snapshot = None;
        for (_entity, keeper) in world.query_mut::<&Keeper>() {
            snapshot = Some(*keeper);
        }
        snapshot
    } else {
        None
    };

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if let Some(keeper) = &keeper_snapshot {
            if check_save(keeper, ball) && save_ball(keeper, ball) {
                events.saved = true;
                events.sounds.push(SoundId::Save);
                info!("save: ball deflected at x {:.2}", ball.pos.x);
                continue;
            }
        }

        if ball.pos.y <= 0.0 {
            let in_frame = ball.pos.x >= Params::GOAL_MIN_X
                && ball.pos.x <= Params::GOAL_MAX_X
                && ball.pos.z >= Ball::RADIUS
                && ball.pos.z <= Params::CROSSBAR_Z;

            if in_frame {
                let coins = Config::coins_for_kick(setup.kick_spot_y);
                stats.record_goal(coins);
                events.goal_scored = true;
                events.coins_awarded = coins;
                events.sounds.push(SoundId::Goal);
                fsm.apply(MatchAction::GoalDetected);
                info!(
                    "goal at x {:.2}, z {:.2}: {} coins from y {:.1}",
                    ball.pos.x, ball.pos.z, coins, setup.kick_spot_y
                );
            } else {
                events.missed = true;
                fsm.apply(MatchAction::LineCrossed);
                info!("missed wide/high at x {:.2}, z {:.2}", ball.pos.x, ball.pos.z);
            }
        } else if events.ball_stopped {
            // Stopped mid-pitch (flat kick dying, or a deflected save)
            events.missed = true;
            fsm.apply(MatchAction::LineCrossed);
        }
    }
}

/// Put the attempt back to its starting arrangement for the next kick.
pub fn reset_attempt(
    world: &mut World,
    config: &Config,
    setup: &mut KickSetup,
    charge: &mut PowerCharge,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.reset(config);
    }
    for (_entity, keeper) in world.query_mut::<&mut Keeper>() {
        keeper.reset();
    }
    setup.reset();
    charge.reset();
}
