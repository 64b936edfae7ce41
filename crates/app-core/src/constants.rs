/// Scene layout, morph and frame smoothing tuning constants.
///
/// These constants express intended behavior (ranges, smoothing factors,
/// thresholds) and keep magic numbers out of the code. Scene-shape values
/// (instance count, tunnel depth, logo size) also appear as the defaults of
/// [`crate::SceneConfig`] so that tests can build scenes with other shapes.
// Instancing
pub const INSTANCE_COUNT: usize = 240;
pub const TUNNEL_DEPTH: f32 = 120.0;

// Wireframe look (0x82d1ff at low opacity)
pub const TRIANGLE_COLOR: [f32; 3] = [0.5098, 0.8196, 1.0];
pub const TRIANGLE_OPACITY: f32 = 0.18;

// Logo display
pub const LOGO_EDGE: f32 = 6.2;
pub const LOGO_Z: f32 = -6.0;
pub const LOGO_SCALE: f32 = 8.5;
// Page section whose activation triggers the morph (0-based)
pub const LOGO_SECTION: usize = 2;

// Morph controller
pub const MORPH_RATE_PER_SEC: f32 = 4.0; // exponential damping rate
pub const MORPH_IN_START: f32 = 0.30; // legacy scroll-window breakpoints
pub const MORPH_IN_END: f32 = 0.40;
pub const MORPH_HOLD_END: f32 = 0.48;
pub const MORPH_OUT_END: f32 = 0.60;

// Scroll normalization: full range spans this many viewport heights
pub const SCROLL_RANGE_SCREENS: f32 = 2.0;

// Group parallax targets (at scroll fraction 0 -> 1)
pub const GROUP_Z_NEAR: f32 = -2.0;
pub const GROUP_Z_FAR: f32 = -4.5;
pub const GROUP_Y_DRIFT: f32 = -0.6;
pub const PARALLAX_RZ_MAX: f32 = 0.15;
pub const TILT_MIN: f32 = 0.10;
pub const TILT_MAX: f32 = 0.18;

// Per-frame blend factors, not dt-scaled (see GroupTransform docs)
pub const POS_SMOOTHING: f32 = 0.08;
pub const TILT_SMOOTHING: f32 = 0.08;
pub const SPIN_SMOOTHING: f32 = 0.06;

// Idle spin (radians/sec), suppressed once the morph is underway
pub const IDLE_SPIN_RATE: f32 = 0.05;
pub const SPIN_SUPPRESS_THRESHOLD: f32 = 0.1;

// Tunnel motion
pub const TUNNEL_SPEED_MIN: f32 = 3.0;
pub const TUNNEL_SPEED_MAX: f32 = 10.0;
pub const TUNNEL_SCALE_MIN: f32 = 5.5; // far end of the tunnel
pub const TUNNEL_SCALE_MAX: f32 = 13.0; // near the camera
pub const SCALE_JITTER_SPAN: f32 = 0.35; // jitter in [1.0, 1.35)
pub const ROTATION_JITTER_SPAN: f32 = 0.4; // jitter in [-0.2, 0.2)
pub const DEPTH_ROLL_COEFF: f32 = -0.02; // z-rotation accrued per unit depth

// Tunnel motion fades (never hard-stops) as the morph completes
pub const PAUSE_FADE_START: f32 = 0.6;
pub const PAUSE_STRENGTH: f32 = 0.9;

// Camera (fixed, matches the site's fullscreen canvas)
pub const CAMERA_POS: [f32; 3] = [0.0, 0.0, 8.0];
pub const CAMERA_FOVY_DEG: f32 = 45.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 200.0;
