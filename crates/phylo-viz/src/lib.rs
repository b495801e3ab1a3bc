//! phylo-viz - Figure styling for phylogeographic analyses
//!
//! Plot cosmetics are described as plain values handed to whatever draws
//! the figure; nothing here mutates shared state.
//!
//! # Key Components
//!
//! - **Palette**: the Okabe-Ito colour-blind safe categorical palette
//! - **PlotStyle**: figure-wide font, resolution and text colour
//! - **AxesFormat**: per-axes spines, ticks, grid, labels and limits
//! - **Date axis**: month/year tick layout for timeseries plots

pub mod date_axis;
pub mod palette;
pub mod style;

pub use date_axis::*;
pub use palette::*;
pub use style::*;
