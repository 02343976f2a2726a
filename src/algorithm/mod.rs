/// Progress-to-angle conversion with easing and inter-move delay
pub mod clock;
/// Presentation-facing engine facade and configuration
pub mod engine;
/// Moves, animation shapes and reversible sequence generation
pub mod moves;
/// Instant scramble at initialization
pub mod preroll;
/// Per-cube animation state machine
pub mod sequencer;

pub use engine::{EngineConfig, MosaicEngine};
