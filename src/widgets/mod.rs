pub mod doppler;
pub mod shapes;

// - https://docs.rs/ratatui/latest/ratatui/widgets/canvas/index.html
