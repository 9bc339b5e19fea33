pub mod chart;
pub mod furniture;
pub mod markers;
pub mod preview;

pub use chart::render;
pub use preview::preview_terminal;
