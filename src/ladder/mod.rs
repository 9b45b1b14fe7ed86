//! Ladder (Amidakuji) engine
//!
//! Pure and deterministic, like a simulation step:
//! - Boards come from an injected RNG only
//! - Paths are resolved in one pass, before any playback
//! - No timers, rendering or platform dependencies

pub mod board;
pub mod layout;
pub mod path;
pub mod playback;
pub mod session;

pub use board::{Board, generate};
pub use layout::LadderLayout;
pub use path::{Trace, resolve, resolve_all};
pub use playback::Playback;
pub use session::LadderGame;
