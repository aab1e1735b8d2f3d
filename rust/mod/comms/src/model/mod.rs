mod announcement;
mod circular;
mod message;
mod query;

pub use announcement::*;
pub use circular::*;
pub use message::*;
pub use query::*;
