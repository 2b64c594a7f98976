// Shared tuning constants used by both web and native frontends.

// Scroll choreography
pub const ACCUMULATE_STEP: f32 = 1.0 / 1500.0; // path moved per wheel event (accumulate policy)
pub const TRANSITION_STEP: f32 = 0.01; // progress gained per frame (target-direction policy)

// Orbiting light
pub const ORBIT_ANGULAR_SPEED: f32 = 0.2; // rad/s
pub const ORBIT_RADIUS_PER_PX: f32 = 0.02; // world units per viewport pixel
pub const ORBIT_DEPTH: f32 = 6.0; // fixed z of the light

// Scene element spin (delta-time driven)
pub const SPIN_RATE: f32 = 0.5; // rad/s on each axis

// Camera lens
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

// Shading
pub const AMBIENT_LEVEL: f32 = 0.35;
pub const LIGHT_RANGE: f32 = 60.0; // distance at which the point light contributes nothing
pub const SHADOW_DIM: f32 = 0.25; // colour multiplier for planar shadows
pub const GROUND_Y: f32 = -4.0;

// Default scene palette
pub const SPHERE_COLOR: [f32; 3] = [0.290, 0.965, 0.149]; // #4AF626
pub const MODEL_COLOR: [f32; 3] = [0.85, 0.85, 0.90];
pub const GROUND_COLOR: [f32; 3] = [0.20, 0.22, 0.30];
pub const LIGHT_COLOR: [f32; 3] = [0.455, 0.267, 1.0]; // #7444ff
pub const CLEAR_COLOR: [f64; 3] = [0.02, 0.02, 0.04];
