//! UI rendering submodules for ParleyApp

pub mod gate;
pub mod input;
pub mod messages;
pub mod panels;
