pub mod analyze;
pub mod health;
pub mod index;

pub use analyze::analyze_handler;
pub use health::health_handler;
pub use index::index_handler;
