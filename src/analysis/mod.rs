pub mod frequency;
pub mod lanes;
pub mod ranking;
