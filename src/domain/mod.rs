pub mod category;
pub mod enrich;
pub mod keywords;

pub use category::*;
pub use enrich::*;
pub use keywords::*;
