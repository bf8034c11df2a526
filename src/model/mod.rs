pub mod config;
pub mod edit;
pub mod filter;
pub mod location;
pub mod todo;

pub use config::*;
pub use edit::*;
pub use filter::*;
pub use location::*;
pub use todo::*;
