mod engine;
mod session;

pub use engine::{Engine, InvalidCoordinate};
pub use session::{MAX_SPEED, MIN_SPEED, Session};
