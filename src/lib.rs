pub mod app;
pub mod clock;
pub mod config;
pub mod event;
pub mod handler;
pub mod logging;
pub mod simulation;
pub mod tui;
pub mod widgets;
