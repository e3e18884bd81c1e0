// Shared tuning constants used by every effect frontend. Values match the
// production stylesheet, so renaming a class or changing a count here has to
// be mirrored in the page CSS.

// Particle field
pub const PARTICLE_COUNT: usize = 150;
pub const CONNECT_DISTANCE: f32 = 150.0; // px, pairwise connection threshold
pub const PARTICLE_SPEED: f32 = 60.0; // px/sec, about one pixel per frame at 60Hz
pub const PARTICLE_RADIUS_MIN: f32 = 1.0;
pub const PARTICLE_RADIUS_MAX: f32 = 4.0;
pub const PARTICLE_OPACITY_MIN: f32 = 0.3;
pub const PARTICLE_OPACITY_MAX: f32 = 0.8;
pub const PARTICLE_COLORS: [&str; 4] = [
    "rgba(74, 144, 226, 0.8)",  // blue
    "rgba(142, 68, 173, 0.8)",  // purple
    "rgba(80, 200, 120, 0.8)",  // green
    "rgba(255, 107, 107, 0.8)", // coral
];

// Pulse graph
pub const NEURAL_LAYERS: usize = 3;
pub const NODES_PER_LAYER: usize = 8;
pub const EDGE_PROBABILITY: f32 = 0.6;
pub const NODE_SIZE_MIN: f32 = 4.0;
pub const NODE_SIZE_MAX: f32 = 12.0;
pub const NODE_PULSE_RATE: f32 = 3.0; // rad/sec phase advance
pub const NODE_ACTIVITY_JITTER: f32 = 1.5; // max |drift| per second before clamping
pub const EDGE_RATE_MIN: f32 = 0.3; // ping-pong traversal of [0,1], per second
pub const EDGE_RATE_MAX: f32 = 0.9;

// Bar visualizer
pub const BAR_COUNT: usize = 32;
pub const BAR_FLOOR_PX: f32 = 5.0;
pub const BAR_AMPLITUDE_PX: f32 = 50.0;
pub const BAR_TIME_SCALE: f64 = 10.0; // seconds -> oscillator phase
pub const BAR_PHASE_STEP: f64 = 0.5; // per-bar phase offset

// Sphere
pub const SPHERE_STACKS: u32 = 32;
pub const SPHERE_SLICES: u32 = 32;
pub const SPHERE_NOISE_FREQ: f32 = 3.0; // base spatial frequency of octave 0
pub const SPHERE_NOISE_OCTAVES: u32 = 3;
pub const SPHERE_DISPLACEMENT: f32 = 0.1; // fraction of unit radius
pub const SPHERE_SPIN_RATE: f32 = 0.2; // rad/sec around +Y

// Surface sizing
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;
