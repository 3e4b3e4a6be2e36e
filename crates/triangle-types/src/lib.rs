pub mod case;
pub mod solved;
pub mod spec;
pub mod vertex;

pub use case::*;
pub use solved::*;
pub use spec::*;
pub use vertex::*;
