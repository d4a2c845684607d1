// Domain layer - Core simulation logic
pub mod domain;

// Application layer - Engine and session coordination
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, EdgeRule, Grid, History};
pub use application::{Engine, InvalidCoordinate, Session};
pub use ui::{Button, Slider};
