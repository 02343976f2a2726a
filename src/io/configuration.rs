//! Engine constants and runtime configuration defaults

/// Cubies making up one virtual cube
pub const CUBIES_PER_CUBE: usize = 27;

/// Tiles on the front face of one cube
pub const TILES_PER_FACE: usize = 9;

/// Parallel layers along each rotation axis
pub const LAYERS_PER_AXIS: usize = 3;

// Applied instantly so the viewer never sees the finished mosaic first
/// Number of moves applied at initialization
pub const PREROLL_MOVES: usize = 3;

// Timing defaults for the reveal animation
/// Total reveal duration in milliseconds
pub const DEFAULT_TOTAL_DURATION_MS: u32 = 12_000;
/// Duration of one quarter turn in milliseconds
pub const DEFAULT_MOVE_DURATION_MS: u32 = 400;
/// Pause between consecutive quarter turns of one cube
pub const INTER_MOVE_DELAY_MS: u32 = 60;
/// Upper bound on the move budget of the farthest cube
pub const MAX_TOTAL_MOVES: u32 = 2_000;
/// Simulated frame interval when running headless
pub const FRAME_INTERVAL_MS: u32 = 16;

/// Default tile edge length in pixels
pub const DEFAULT_TILE_SIZE: u32 = 8;

/// Fixed seed for reproducible scrambles
pub const DEFAULT_SEED: u64 = 42;

/// Maximum deviation from the home pose accepted after a full reveal
pub const ROUND_TRIP_TOLERANCE: f64 = 1e-6;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_mosaic";
/// Suffix added to the pre-rolled snapshot filename
pub const SCRAMBLED_SUFFIX: &str = "_scrambled";

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
