// Presentation layer - Controller state, renderers and the terminal loop
pub mod app;
pub mod chart;
pub mod renderers;
pub mod ui;
