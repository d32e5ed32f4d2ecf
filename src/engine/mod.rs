mod animation;
mod apportion;

pub use animation::AnimationController;
pub use apportion::{apportion, apportion_with, build_bracelet};
