use hecs::World;
use log::{debug, info};

use crate::{
    Ball, Camera, Config, InputIntent, InputQueue, KickSetup, MatchAction, MatchFsm, MatchState,
    PowerCharge,
};

/// Drain the input queue and apply each intent that is valid in the
/// current match phase. Intents from the wrong phase are dropped.
pub fn ingest_input(
    world: &mut World,
    input: &mut InputQueue,
    fsm: &mut MatchFsm,
    setup: &mut KickSetup,
    charge: &mut PowerCharge,
    camera: &mut Camera,
    config: &mut Config,
) {
    for intent in input.drain() {
        match intent {
            // Config reload works in every phase
            InputIntent::Reload(new_values) => {
                config.reload(new_values);
                camera.reconfigure(config);
                info!("config reloaded");
            }

            InputIntent::PlaceAt { screen_x, screen_y } if fsm.state == MatchState::PlacingBall => {
                match camera.screen_to_ground(screen_x, screen_y) {
                    Some(ground) if Config::placement_in_bounds(ground.x, ground.y) => {
                        for (_entity, ball) in world.query_mut::<&mut Ball>() {
                            ball.place(ground.x, ground.y);
                        }
                        debug!("ball placed at ({:.1}, {:.1})", ground.x, ground.y);
                    }
                    _ => debug!("placement at ({screen_x}, {screen_y}) rejected"),
                }
            }
            InputIntent::ConfirmPlacement if fsm.state == MatchState::PlacingBall => {
                fsm.apply(MatchAction::BallPlaced);
            }

            InputIntent::AimLeft if fsm.state == MatchState::ReadyToKick => setup.aim_left(),
            InputIntent::AimRight if fsm.state == MatchState::ReadyToKick => setup.aim_right(),
            InputIntent::ContactMove { dx, dz } if fsm.state == MatchState::ReadyToKick => {
                setup.move_contact(dx, dz);
            }
            InputIntent::ChargeStart if fsm.state == MatchState::ReadyToKick => charge.start(),
            InputIntent::ChargeRelease if fsm.state == MatchState::ReadyToKick => {
                if charge.release() {
                    setup.request_kick(charge.power_fraction());
                }
            }

            other => debug!("intent {other:?} ignored in {:?}", fsm.state),
        }
    }
}
