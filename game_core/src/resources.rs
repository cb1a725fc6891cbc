use crate::params::{Config, Params};

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: 0.016,
            now: 0.0,
        }
    }
}

/// Random number generator for knuckleball draws; seedable for replay
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Cumulative session counters
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionStats {
    pub goals_scored: u32,
    pub attempts: u32,
    pub coins_earned: u32,
}

impl SessionStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_attempt(&mut self) {
        self.attempts += 1;
    }

    pub fn record_goal(&mut self, coins: u32) {
        self.goals_scored += 1;
        self.coins_earned += coins;
    }
}

/// Sound identifiers handed to the external audio collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundId {
    Kick,
    Bounce,
    Save,
    Goal,
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub kicked: bool,
    pub bounced: bool,
    pub saved: bool,
    pub goal_scored: bool,
    pub missed: bool,
    pub ball_stopped: bool,
    pub coins_awarded: u32,
    pub sounds: Vec<SoundId>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.kicked = false;
        self.bounced = false;
        self.saved = false;
        self.goal_scored = false;
        self.missed = false;
        self.ball_stopped = false;
        self.coins_awarded = 0;
        self.sounds.clear();
    }
}

/// Decoded input intents from the external input collaborator
#[derive(Debug, Clone)]
pub enum InputIntent {
    AimLeft,
    AimRight,
    /// Move the contact pointer by world-unit deltas on the ball face
    ContactMove { dx: f32, dz: f32 },
    ChargeStart,
    ChargeRelease,
    /// Ground-plane placement click, in screen pixels
    PlaceAt { screen_x: f32, screen_y: f32 },
    ConfirmPlacement,
    /// Atomically swap in a new configuration snapshot
    Reload(Config),
}

/// Queue of pending input intents, drained once per micro-step
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pub intents: Vec<InputIntent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, intent: InputIntent) {
        self.intents.push(intent);
    }

    pub fn drain(&mut self) -> Vec<InputIntent> {
        std::mem::take(&mut self.intents)
    }
}

/// Power bar charging in discrete segments; filling the last segment
/// triggers an automatic full-power kick.
#[derive(Debug, Clone, Copy)]
pub struct PowerCharge {
    pub segments: u8,
    pub charge_level: u8,
    pub is_charging: bool,
    pub segment_time: f32,
    pub released_fraction: f32,
    auto_kick: bool,
}

impl PowerCharge {
    pub fn new() -> Self {
        Self {
            segments: Params::POWER_SEGMENTS,
            charge_level: 0,
            is_charging: false,
            segment_time: 0.0,
            released_fraction: 0.0,
            auto_kick: false,
        }
    }

    pub fn start(&mut self) {
        if !self.is_charging && self.charge_level < self.segments {
            self.is_charging = true;
            self.segment_time = 0.0;
        }
    }

    /// Stop charging. Returns true if a charge cycle was actually active,
    /// in which case `released_fraction` holds the power to kick with.
    pub fn release(&mut self) -> bool {
        if !self.is_charging {
            return false;
        }
        self.is_charging = false;
        if !self.auto_kick {
            self.released_fraction = f32::from(self.charge_level) / f32::from(self.segments);
        }
        true
    }

    pub fn update(&mut self, dt: f32) {
        if !self.is_charging || self.charge_level >= self.segments {
            return;
        }
        self.segment_time += dt;
        if self.segment_time >= Params::CHARGE_TIME_PER_SEGMENT {
            self.charge_level += 1;
            self.segment_time = 0.0;
            if self.charge_level >= self.segments {
                self.is_charging = false;
                self.released_fraction = 1.0;
                self.auto_kick = true;
            }
        }
    }

    /// One-shot check for the automatic kick at full charge.
    pub fn take_auto_kick(&mut self) -> bool {
        std::mem::take(&mut self.auto_kick)
    }

    pub fn power_fraction(&self) -> f32 {
        self.released_fraction
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for PowerCharge {
    fn default() -> Self {
        Self::new()
    }
}

/// Aim angle and contact-point offsets for the next kick
#[derive(Debug, Clone, Copy, Default)]
pub struct KickSetup {
    pub aim_degrees: f32,
    pub contact_x: f32,
    pub contact_z: f32,
    /// y of the kick spot, recorded at kick time for the coin tier
    pub kick_spot_y: f32,
    /// Power fraction waiting to be turned into a kick this step
    pub pending_power: Option<f32>,
}

impl KickSetup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn aim_left(&mut self) {
        self.aim_degrees -= Params::AIM_STEP_DEG;
    }

    pub fn aim_right(&mut self) {
        self.aim_degrees += Params::AIM_STEP_DEG;
    }

    /// Move the contact pointer, clamping offsets to the ball radius.
    pub fn move_contact(&mut self, dx: f32, dz: f32) {
        let r = Params::BALL_RADIUS;
        self.contact_x = (self.contact_x + dx).clamp(-r, r);
        self.contact_z = (self.contact_z + dz).clamp(-r, r);
    }

    pub fn request_kick(&mut self, power_fraction: f32) {
        self.pending_power = Some(power_fraction);
    }

    pub fn take_pending_power(&mut self) -> Option<f32> {
        self.pending_power.take()
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
