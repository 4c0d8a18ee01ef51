//! Controller constants and tuning parameters.

/// Host simulation tick rate (Hz).
pub const TICK_RATE: u32 = 30;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Platform limits ---

/// Maximum ship thrust magnitude.
pub const MAX_THRUST: f64 = 480.0;

/// Maximum ship turn rate (degrees per second).
pub const MAX_TURN_RATE: f64 = 180.0;

/// Bullet speed (map units per second).
pub const BULLET_SPEED: f64 = 800.0;

/// Default map size (width, height).
pub const MAP_SIZE: (f64, f64) = (1000.0, 800.0);

// --- Fuzzy universes ---

/// Distance universe: start, stop (exclusive), step.
pub const DISTANCE_UNIVERSE: (f64, f64, f64) = (0.0, 1000.0, 10.0);

/// Angle universe: start, stop (exclusive), step.
pub const ANGLE_UNIVERSE: (f64, f64, f64) = (-180.0, 180.0, 1.0);

/// Threat-level universe: start, stop (exclusive), step.
pub const THREAT_UNIVERSE: (f64, f64, f64) = (-1.0, 1.0, 0.05);

// --- Threat scoring ---

/// Distances are clamped to this before fuzzification.
pub const THREAT_DISTANCE_CLAMP: f64 = 900.0;

/// Scores at or above this are kept as threats.
pub const THREAT_CUTOFF: f64 = 0.5;

/// Maximum number of ranked threats kept per tick.
pub const MAX_THREATS: usize = 10;

/// Asteroids within this distance enter the proximity set.
pub const PROXIMITY_RANGE: f64 = 250.0;

/// Asteroid count at which scoring fans out across worker threads.
pub const PARALLEL_SCORING_THRESHOLD: usize = 64;

// --- Collision path prediction ---

/// Linear extrapolation horizon (seconds).
pub const PATH_HORIZON_SECS: f64 = 10.0;

/// Radius of the ship-centered collision disk.
pub const SHIP_COLLISION_RADIUS: f64 = 25.0;

/// Segments used per quarter circle when approximating round shapes.
pub const QUARTER_CIRCLE_SEGMENTS: usize = 16;

// --- Shooting ---

/// Heading error within which the lead point is computed.
pub const COARSE_AIM_TOLERANCE: f64 = 15.0;

/// Fine aim tolerance for small asteroids (size 1).
pub const FINE_AIM_TOLERANCE_SMALL: f64 = 5.0;

/// Fine aim tolerance for larger asteroids.
pub const FINE_AIM_TOLERANCE_LARGE: f64 = 10.0;

/// Multiplier applied to the lead offset to aim slightly ahead.
pub const LEAD_OVERSHOOT: f64 = 1.25;

// --- Dodging ---

/// Only asteroids this close are dodged.
pub const DODGE_RANGE: f64 = 120.0;

/// Number of nearest proximity entries considered for dodging.
pub const DODGE_CANDIDATES: usize = 3;

/// Damping divisor on the kinematic acceleration used for thrust.
pub const DODGE_THRUST_DAMPING: f64 = 15.0;

/// Damping divisor on the kinematic acceleration used for turning.
pub const DODGE_TURN_DAMPING: f64 = 10.0;

/// Weight of the dodge turn contribution when merged.
pub const DODGE_TURN_WEIGHT: f64 = 0.5;

/// Dodge actions jump the queue when impact is predicted within this time (seconds).
pub const URGENT_IMPACT_SECS: f64 = 1.0;

// --- Firing cone ---

/// Apex angle of the forward firing cone (degrees).
pub const FIRING_CONE_ANGLE: f64 = 30.0;

/// Length of the forward firing cone.
pub const FIRING_CONE_LENGTH: f64 = 200.0;
