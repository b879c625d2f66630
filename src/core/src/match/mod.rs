pub mod contrib;
pub mod engine;
pub mod result;
pub mod state;
pub mod substitution;

pub use contrib::*;
pub use engine::*;
pub use result::*;
pub use state::*;
