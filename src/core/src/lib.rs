pub mod club;
pub mod context;
pub mod league;
pub mod r#match;
pub mod search;
pub mod utils;

pub use club::*;
pub use context::*;
pub use league::*;
pub use search::*;
pub use utils::*;
