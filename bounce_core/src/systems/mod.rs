pub mod collision;
pub mod draw;
pub mod movement;

pub use collision::*;
pub use draw::*;
pub use movement::*;
