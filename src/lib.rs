//! Tick-driven typewriter text with inline markup.
//!
//! [`markup`] turns a script into tokens, [`engine::Writer`] reveals them
//! over successive `tick(dt)` calls, and [`ui`] with [`app`] play scripts in
//! a terminal.

pub mod app;
pub mod engine;
pub mod markup;
pub mod ui;
