pub mod snapshot;
pub mod view_model;

pub use snapshot::*;
pub use view_model::*;
