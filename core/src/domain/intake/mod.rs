pub mod analyzer;
pub mod entities;
pub mod ports;

pub use analyzer::FoodAnalyzer;
pub use entities::*;
pub use ports::*;
