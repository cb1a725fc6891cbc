pub mod camera;
pub mod components;
pub mod fsm;
pub mod params;
pub mod resources;
pub mod systems;

pub use camera::*;
pub use components::*;
pub use fsm::*;
pub use params::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Run the deterministic penalty-kick simulation for one frame
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    config: &mut Config,
    camera: &mut Camera,
    fsm: &mut MatchFsm,
    setup: &mut KickSetup,
    charge: &mut PowerCharge,
    stats: &mut SessionStats,
    events: &mut Events,
    input: &mut InputQueue,
    rng: &mut GameRng,
) {
    // Clamp dt to prevent large jumps
    let clamped_dt = time.dt.min(Params::MAX_DT);

    // Events accumulate over the whole frame so short-lived micro-step
    // events (bounce, save) are still visible to the caller
    events.clear();

    // Fixed micro-steps for stable physics
    let mut remaining_dt = clamped_dt;
    while remaining_dt > 0.0 {
        let step_dt = remaining_dt.min(Params::FIXED_DT);
        remaining_dt -= step_dt;

        let step_time = Time {
            dt: step_dt,
            now: time.now + (clamped_dt - remaining_dt),
        };

        // 1. Ingest inputs valid in the current phase
        ingest_input(world, input, fsm, setup, charge, camera, config);

        // 2. Phase-specific update
        match fsm.state {
            MatchState::PlacingBall => {}

            MatchState::ReadyToKick => {
                charge.update(step_dt);
                if charge.take_auto_kick() {
                    setup.request_kick(1.0);
                }
                if let Some(power) = setup.take_pending_power() {
                    apply_kick(world, setup, config, rng, stats, events, power);
                    fsm.apply(MatchAction::KickLaunched);
                }
            }

            MatchState::BallKicked => {
                update_ball(world, &step_time, config, rng, events);
                if config.keeper_enabled {
                    update_keeper(world, &step_time, config);
                }
                check_outcome(world, config, fsm, setup, stats, events);
            }

            MatchState::GoalScored => {
                // Ball stays frozen where it crossed the line
                if fsm.state_time >= Params::GOAL_DISPLAY_TIME {
                    reset_attempt(world, config, setup, charge);
                    fsm.apply(MatchAction::TimerElapsed);
                }
            }

            MatchState::PastGoalLine => {
                // Let the ball settle while the timer runs
                update_ball(world, &step_time, config, rng, events);
                if config.keeper_enabled {
                    update_keeper(world, &step_time, config);
                }
                if fsm.state_time >= Params::PAST_LINE_TIME {
                    reset_attempt(world, config, setup, charge);
                    fsm.apply(MatchAction::TimerElapsed);
                }
            }
        }

        // 3. Advance the phase timer
        fsm.tick(step_dt);
    }

    // Update time
    time.now += clamped_dt;
}

/// Helper to create the ball entity at the configured kick spot
pub fn create_ball(world: &mut World, config: &Config) -> hecs::Entity {
    world.spawn((Ball::new(config.spawn_position()),))
}

/// Helper to create the goalkeeper entity on the goal line
pub fn create_keeper(world: &mut World) -> hecs::Entity {
    world.spawn((Keeper::new(),))
}

/// Self-contained simulation owning the world and every resource.
///
/// Convenience wrapper for hosts that do not need to share the world;
/// drive it by queueing intents and calling `step` once per frame.
pub struct PenaltyGame {
    pub world: World,
    pub time: Time,
    pub config: Config,
    pub camera: Camera,
    pub fsm: MatchFsm,
    pub setup: KickSetup,
    pub charge: PowerCharge,
    pub stats: SessionStats,
    pub events: Events,
    pub input: InputQueue,
    pub rng: GameRng,
}

impl PenaltyGame {
    pub fn new(config: Config) -> Self {
        Self::with_seed(config, 12345)
    }

    pub fn with_seed(config: Config, seed: u64) -> Self {
        let camera = Camera::from_config(&config, Params::SCREEN_WIDTH, Params::SCREEN_HEIGHT);
        let mut world = World::new();
        create_ball(&mut world, &config);
        create_keeper(&mut world);

        Self {
            world,
            time: Time::default(),
            config,
            camera,
            fsm: MatchFsm::new(),
            setup: KickSetup::new(),
            charge: PowerCharge::new(),
            stats: SessionStats::new(),
            events: Events::new(),
            input: InputQueue::new(),
            rng: GameRng::new(seed),
        }
    }

    pub fn queue(&mut self, intent: InputIntent) {
        self.input.push(intent);
    }

    pub fn step(&mut self, dt: f32) {
        self.time.dt = dt;
        step(
            &mut self.world,
            &mut self.time,
            &mut self.config,
            &mut self.camera,
            &mut self.fsm,
            &mut self.setup,
            &mut self.charge,
            &mut self.stats,
            &mut self.events,
            &mut self.input,
            &mut self.rng,
        );
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world.query::<&Ball>().iter().next().map(|(_, b)| *b)
    }

    pub fn keeper(&self) -> Option<Keeper> {
        self.world.query::<&Keeper>().iter().next().map(|(_, k)| *k)
    }
}
