//! Figure and axes styling
//!
//! `PlotStyle` holds figure-wide settings and `AxesFormat` the settings of
//! one set of axes. Both are plain values: callers pass them to the
//! renderer for every figure instead of configuring a global.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::palette::Color;

/// Dark grey used for all text
pub const TEXT_COLOR: &str = "#343434";

/// Light grey used for grid lines
pub const GRID_COLOR: &str = "#F1F1F1";

/// Styling errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StyleError {
    #[error("Invalid {axis} limits: {min} .. {max}")]
    InvalidLimits { axis: char, min: f64, max: f64 },

    #[error("Invalid color: {0}")]
    InvalidColor(String),
}

/// Side of the axes a spine is drawn on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Spine {
    Left,
    Right,
    Top,
    Bottom,
}

impl Spine {
    pub const ALL: [Spine; 4] = [Spine::Left, Spine::Right, Spine::Top, Spine::Bottom];
}

/// Axis (or axes) grid lines are drawn for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridAxis {
    X,
    Y,
    Both,
}

/// Which tick levels a setting applies to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickLevel {
    Major,
    Minor,
    Both,
}

/// Font settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FontStyle {
    /// Preferred typeface
    pub family: String,
    /// Generic family used when the typeface is unavailable
    pub generic_family: String,
    /// Weight of body text (100 - 900)
    pub weight: u16,
    /// Weight of axis labels
    pub label_weight: u16,
    /// Size in points
    pub size: f32,
}

impl Default for FontStyle {
    fn default() -> Self {
        Self {
            family: "Roboto".to_string(),
            generic_family: "sans-serif".to_string(),
            weight: 300,
            label_weight: 300,
            size: 16.0,
        }
    }
}

/// Figure-wide style
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlotStyle {
    pub font: FontStyle,
    /// Figure resolution in dots per inch
    pub dpi: u32,
    pub text_color: Color,
    pub axis_label_color: Color,
    pub tick_color: Color,
}

impl Default for PlotStyle {
    fn default() -> Self {
        let text = Color::from_hex(TEXT_COLOR).unwrap_or_else(|| Color::rgb(0.2, 0.2, 0.2));
        Self {
            font: FontStyle::default(),
            dpi: 200,
            text_color: text,
            axis_label_color: text,
            tick_color: text,
        }
    }
}

impl PlotStyle {
    /// Use one colour for all text elements
    pub fn with_text_color(mut self, hex: &str) -> Result<Self, StyleError> {
        let color = Color::from_hex(hex).ok_or_else(|| StyleError::InvalidColor(hex.to_string()))?;
        self.text_color = color;
        self.axis_label_color = color;
        self.tick_color = color;
        Ok(self)
    }
}

/// Tick settings for one axis
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TickStyle {
    /// Draw tick marks
    pub show_marks: bool,
    /// Draw tick labels
    pub show_labels: bool,
    /// Levels the settings apply to
    pub level: TickLevel,
    /// Label font size in points (also used for the axis label)
    pub label_size: f32,
    /// Label rotation in degrees
    pub rotation: f32,
    /// Gap between tick and label in points
    pub pad: f32,
}

impl TickStyle {
    fn unmarked(rotation: f32) -> Self {
        Self {
            show_marks: false,
            show_labels: true,
            level: TickLevel::Both,
            label_size: 12.0,
            rotation,
            pad: 0.0,
        }
    }
}

/// Grid line settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridStyle {
    pub axis: GridAxis,
    pub level: TickLevel,
    pub line_width: f32,
    pub color: Color,
    /// Drawing order; the grid sits below the data
    pub zorder: i32,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            axis: GridAxis::Y,
            level: TickLevel::Both,
            line_width: 1.0,
            color: Color::from_hex(GRID_COLOR).unwrap_or_else(|| Color::rgb(0.95, 0.95, 0.95)),
            zorder: 1,
        }
    }
}

/// Formatting of one set of axes
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxesFormat {
    /// Spines left visible; the others are hidden
    pub spines: Vec<Spine>,
    pub x_ticks: TickStyle,
    pub y_ticks: TickStyle,
    pub grid: GridStyle,
    pub title: Option<String>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub x_limits: Option<(f64, f64)>,
    pub y_limits: Option<(f64, f64)>,
}

impl Default for AxesFormat {
    fn default() -> Self {
        Self {
            spines: vec![Spine::Bottom],
            x_ticks: TickStyle::unmarked(90.0),
            y_ticks: TickStyle::unmarked(0.0),
            grid: GridStyle::default(),
            title: None,
            x_label: None,
            y_label: None,
            x_limits: None,
            y_limits: None,
        }
    }
}

impl AxesFormat {
    /// Create the default axes format
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only these spines visible
    pub fn with_spines(mut self, spines: &[Spine]) -> Self {
        self.spines = spines.to_vec();
        self
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set both axis labels
    pub fn with_labels(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_label = Some(x.into());
        self.y_label = Some(y.into());
        self
    }

    /// Set the tick-label (and axis-label) font sizes
    pub fn with_label_sizes(mut self, x: f32, y: f32) -> Self {
        self.x_ticks.label_size = x;
        self.y_ticks.label_size = y;
        self
    }

    /// Draw grid lines for `axis`
    pub fn with_grid(mut self, axis: GridAxis) -> Self {
        self.grid.axis = axis;
        self
    }

    /// Set the x data range
    pub fn with_x_limits(mut self, min: f64, max: f64) -> Self {
        self.x_limits = Some((min, max));
        self
    }

    /// Set the y data range
    pub fn with_y_limits(mut self, min: f64, max: f64) -> Self {
        self.y_limits = Some((min, max));
        self
    }

    /// Check whether a spine is drawn
    pub fn is_spine_visible(&self, spine: Spine) -> bool {
        self.spines.contains(&spine)
    }

    /// Spines the renderer must hide
    pub fn hidden_spines(&self) -> Vec<Spine> {
        Spine::ALL
            .into_iter()
            .filter(|s| !self.is_spine_visible(*s))
            .collect()
    }

    /// Validate limits
    pub fn validate(&self) -> Result<(), StyleError> {
        check_limits('x', self.x_limits)?;
        check_limits('y', self.y_limits)
    }
}

fn check_limits(axis: char, limits: Option<(f64, f64)>) -> Result<(), StyleError> {
    match limits {
        Some((min, max)) if !(min.is_finite() && max.is_finite() && min < max) => {
            Err(StyleError::InvalidLimits { axis, min, max })
        }
        _ => Ok(()),
    }
}
