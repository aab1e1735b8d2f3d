mod assignment;
mod attendance;
mod submission;

pub use assignment::*;
pub use attendance::*;
pub use submission::*;
