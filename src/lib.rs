//! Decay array viewer: a fixed catalog of objects photographed at four
//! stages of decay, cycled through detail views and a summary grid with
//! typewritten descriptions.

pub mod engine;
pub mod logging;
pub mod model;
pub mod ui;
