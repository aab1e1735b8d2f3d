mod class_group;
mod course_group;
mod department;
mod kind;

pub use class_group::*;
pub use course_group::*;
pub use department::*;
pub use kind::*;
