pub mod player;
pub mod position;
pub mod roster;
pub mod tactics;
pub mod teamsheet;

pub use player::*;
pub use position::*;
pub use roster::*;
pub use tactics::*;
pub use teamsheet::*;
