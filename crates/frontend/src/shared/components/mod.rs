pub mod background;
pub mod ui;

pub use background::BlueprintBackground;
