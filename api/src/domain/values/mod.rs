//! Shared value objects
//!
//! Small immutable types with their own validation rules. They are shared
//! between the product catalog and product design contexts.

#[allow(dead_code)]
pub mod angle;
pub mod category;
pub mod color;
pub mod measure;
pub mod size_constraints;

pub use category::Category;
pub use color::Color;
pub use measure::Measure;
pub use size_constraints::SizeConstraints;
