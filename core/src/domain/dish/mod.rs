pub mod entities;
pub mod fallback;
pub mod heuristics;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use ports::*;
pub use value_objects::*;
