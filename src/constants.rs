/// Animation, camera and interaction tuning constants.
///
/// Everything here is per-frame (not per-second): the scene advances by a
/// fixed amount every display refresh regardless of wall-clock time.
// Orbit model
pub const ORBIT_STEP: f32 = 0.001; // phase += speed * ORBIT_STEP each frame
pub const ORBIT_VERTICAL_SQUASH: f32 = 0.5; // tilts the circle into an ellipse on screen
pub const SATELLITE_SPEED_BASE: f32 = 0.3;
pub const SATELLITE_SPEED_JITTER: f32 = 0.3; // speed = base + [0, jitter)

// Per-frame spin
pub const CORE_SPIN_X: f32 = 0.002;
pub const CORE_SPIN_Y: f32 = 0.003;
pub const SATELLITE_SPIN_X: f32 = 0.01;
pub const SATELLITE_SPIN_Y: f32 = 0.02;

// Geometry
pub const CORE_RADIUS: f32 = 0.8;
pub const GLOW_RADIUS: f32 = 1.0;
pub const ICOSPHERE_DETAIL: u32 = 4;
pub const SATELLITE_SIZE: f32 = 0.4; // cube edge length

// Materials (sRGB hex)
pub const CORE_COLOR: u32 = 0x00ff96;
pub const CORE_EMISSIVE: u32 = 0x00cc77;
pub const GLOW_OPACITY: f32 = 0.1;
pub const SHININESS: f32 = 100.0;
pub const SATELLITE_EMISSIVE_INTENSITY: f32 = 0.3;
pub const SATELLITE_SATURATION: f32 = 1.0;
pub const SATELLITE_LIGHTNESS: f32 = 0.5;

// Atmosphere and lighting
pub const BACKGROUND_COLOR: u32 = 0x0a0e27;
pub const FOG_NEAR: f32 = 30.0;
pub const FOG_FAR: f32 = 100.0;
pub const AMBIENT_LIGHT_COLOR: u32 = 0xffffff;
pub const AMBIENT_LIGHT_INTENSITY: f32 = 0.4;
pub const POINT_LIGHT_COLOR: u32 = 0x00ff96;
pub const POINT_LIGHT_INTENSITY: f32 = 1.5;
pub const POINT_LIGHT_POSITION: [f32; 3] = [5.0, 5.0, 5.0];

// Camera
pub const CAMERA_FOVY_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_Z: f32 = 5.0;
pub const CAMERA_FOLLOW_SCALE: f32 = 0.01; // eye.xy = pointer * scale

// Pointer
pub const POINTER_OFFSET_SCALE: f32 = 2.0; // pointer = (client - center) * scale

// Page chrome
pub const OVERLAY_HIDE_DELAY_MS: i32 = 500;
pub const FPS_REPORT_INTERVAL_SEC: f32 = 10.0;
