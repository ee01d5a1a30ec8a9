//! PostureFit: a webcam posture monitor. Body landmarks from a per-frame
//! pose estimator are classified into a slouch category with fixed
//! geometric thresholds; a desktop notification fires when the category
//! changes. A small windowed UI offers live detection and a static
//! exercise browser.

pub mod args;
pub mod camera;
pub mod config;
pub mod detection;
pub mod draw;
pub mod exercises;
pub mod font;
pub mod inference;
pub mod notify;
pub mod output;
pub mod pipeline;
pub mod posture;
pub mod skeleton;
pub mod ttf;
pub mod types;
pub mod ui;
