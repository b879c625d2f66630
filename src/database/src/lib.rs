pub mod error;
pub mod generators;
pub mod loaders;
pub mod seeder;
pub mod writers;

pub use error::DatabaseError;
pub use generators::RosterGenerator;
pub use loaders::{DatabaseLoader, LoadedData, roster_file_name};
pub use seeder::seed_data_dir;
pub use writers::{save_rosters, write_commentary, write_table};
