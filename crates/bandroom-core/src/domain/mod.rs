pub mod band;
pub mod musician;
pub mod studio;

pub use band::Band;
pub use musician::Musician;
pub use studio::{Studio, StudioError};
