//! Study sessions over a deck's cards

pub mod navigator;

pub use navigator::{Face, Progress, StudyNavigator};
