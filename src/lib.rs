pub mod catalog;
pub mod config;
pub mod domain;
pub mod error;
pub mod gallery;
pub mod logging;
pub mod normalize;
pub mod photos;
pub mod program;
pub mod roster;
