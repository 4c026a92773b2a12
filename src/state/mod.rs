pub mod roller;
pub mod viewport;

pub use roller::{RollerTick, SelectionRoller};
pub use viewport::Viewport;
