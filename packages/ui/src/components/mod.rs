//! Small reusable building blocks.

mod skeleton;
pub use skeleton::Skeleton;
