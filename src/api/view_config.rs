use serde::{Deserialize, Serialize};

use crate::core::{Margin, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::extensions::{DateMarker, MarkerPlacementConfig};
use crate::render::Color;

use super::markers_chart::default_wave_markers;

pub const DEFAULT_HISTORY_URL: &str =
    "https://covid-api.mmediagroup.fr/v1/history?status=confirmed&country=Spain";
pub const DEFAULT_SNAPSHOT_URL: &str = "https://covid-api.mmediagroup.fr/v1/cases";

/// Outer size and margins shared by every view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartViewConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub margin: Margin,
}

impl ChartViewConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            margin: Margin::zero(),
        }
    }

    #[must_use]
    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    /// Plot area inside the margins, `(width, height)`.
    pub fn plot_size(self) -> ChartResult<(f64, f64)> {
        let width = f64::from(self.viewport.width) - self.margin.left - self.margin.right;
        let height = f64::from(self.viewport.height) - self.margin.top - self.margin.bottom;
        if !self.viewport.is_valid() || !self.margin.is_valid() || width <= 0.0 || height <= 0.0 {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        Ok((width, height))
    }

    pub fn validate(self) -> ChartResult<Self> {
        self.plot_size()?;
        Ok(self)
    }
}

/// Two-strip layout of the brush view: a focus chart on top and an overview
/// strip (where the brush is dragged) below.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrushLayout {
    pub viewport: Viewport,
    pub margin: Margin,
    pub brush_margin: Margin,
    pub chart_separation_px: f64,
}

impl Default for BrushLayout {
    fn default() -> Self {
        Self {
            viewport: Viewport::new(1300, 600),
            margin: Margin::new(20.0, 20.0, 20.0, 65.0),
            brush_margin: Margin::new(10.0, 20.0, 15.0, 50.0),
            chart_separation_px: 30.0,
        }
    }
}

impl BrushLayout {
    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    fn inner_height(self) -> f64 {
        f64::from(self.viewport.height) - self.margin.top - self.margin.bottom
    }

    /// Space below the focus plot reserved for its time axis.
    #[must_use]
    pub fn focus_bottom_margin(self) -> f64 {
        self.chart_separation_px + 10.0
    }

    #[must_use]
    pub fn focus_width(self) -> f64 {
        f64::from(self.viewport.width) - self.margin.left - self.margin.right
    }

    #[must_use]
    pub fn focus_height(self) -> f64 {
        0.8 * self.inner_height() - self.focus_bottom_margin()
    }

    /// Focus plot origin in view coordinates.
    #[must_use]
    pub fn focus_origin(self) -> (f64, f64) {
        (self.margin.left, self.margin.top)
    }

    /// Focus layout expressed as a plain view config, for the locator.
    #[must_use]
    pub fn focus_view(self) -> ChartViewConfig {
        ChartViewConfig::new(self.viewport).with_margin(Margin::new(
            self.margin.top,
            self.margin.right,
            f64::from(self.viewport.height) - self.margin.top - self.focus_height(),
            self.margin.left,
        ))
    }

    #[must_use]
    pub fn overview_width(self) -> f64 {
        f64::from(self.viewport.width) - self.brush_margin.left - self.brush_margin.right
    }

    #[must_use]
    pub fn overview_height(self) -> f64 {
        let strip = self.inner_height() - self.focus_height() - self.chart_separation_px;
        strip - self.brush_margin.top - self.brush_margin.bottom
    }

    /// Overview plot origin in view coordinates.
    #[must_use]
    pub fn overview_origin(self) -> (f64, f64) {
        (
            self.brush_margin.left,
            self.focus_height() + self.focus_bottom_margin() + self.margin.top,
        )
    }

    pub fn validate(self) -> ChartResult<Self> {
        let sizes = [
            self.focus_width(),
            self.focus_height(),
            self.overview_width(),
            self.overview_height(),
        ];
        if !self.viewport.is_valid()
            || !self.margin.is_valid()
            || !self.brush_margin.is_valid()
            || sizes.iter().any(|size| !size.is_finite() || *size <= 0.0)
        {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if !self.chart_separation_px.is_finite() || self.chart_separation_px < 0.0 {
            return Err(ChartError::InvalidData(
                "chart separation must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Colors and text sizes for area-based views.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaStyle {
    pub background: Color,
    pub background_corner_radius: f64,
    pub area_fill: Color,
    pub area_stroke: Color,
    pub area_stroke_width: f64,
    pub axis_color: Color,
    pub axis_font_px: f64,
    pub tick_length_px: f64,
}

impl Default for AreaStyle {
    fn default() -> Self {
        Self {
            background: Color::rgba8(0x58, 0x41, 0x53, 1.0),
            background_corner_radius: 14.0,
            area_fill: Color::rgba8(0xaf, 0x8b, 0xaf, 0.6),
            area_stroke: Color::rgba8(0xaf, 0x8b, 0xaf, 1.0),
            area_stroke_width: 1.0,
            axis_color: Color::WHITE,
            axis_font_px: 10.0,
            tick_length_px: 6.0,
        }
    }
}

impl AreaStyle {
    /// Dark blue theme used by the markers view.
    #[must_use]
    pub fn markers() -> Self {
        Self {
            background: Color::rgba8(0x05, 0x1d, 0x42, 1.0),
            area_fill: Color::rgba8(0x4b, 0x8a, 0xc9, 0.6),
            area_stroke: Color::rgba8(0x4b, 0x8a, 0xc9, 1.0),
            ..Self::default()
        }
    }

    /// Violet theme with translucent white fill used by the animated view.
    #[must_use]
    pub fn animated() -> Self {
        Self {
            background: Color::rgba8(0xda, 0x7c, 0xff, 0.75),
            area_fill: Color::WHITE.with_alpha(0.6),
            area_stroke: Color::TRANSPARENT,
            area_stroke_width: 0.0,
            axis_font_px: 12.0,
            ..Self::default()
        }
    }

    pub fn validate(self) -> ChartResult<Self> {
        self.background.validate()?;
        self.area_fill.validate()?;
        self.area_stroke.validate()?;
        self.axis_color.validate()?;
        for (value, name) in [
            (self.background_corner_radius, "background_corner_radius"),
            (self.area_stroke_width, "area_stroke_width"),
            (self.tick_length_px, "tick_length_px"),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "area style `{name}` must be finite and >= 0"
                )));
            }
        }
        if !self.axis_font_px.is_finite() || self.axis_font_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "area style `axis_font_px` must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipStyle {
    pub guide_color: Color,
    pub guide_width: f64,
    pub dot_fill: Color,
    pub dot_stroke: Color,
    pub dot_radius: f64,
    pub box_fill: Color,
    pub text_color: Color,
    pub font_px: f64,
    pub box_offset_x: f64,
}

impl Default for TooltipStyle {
    fn default() -> Self {
        Self {
            guide_color: Color::rgba8(0xed, 0xf2, 0xf7, 1.0),
            guide_width: 2.0,
            dot_fill: Color::rgba8(0x66, 0x33, 0x99, 1.0),
            dot_stroke: Color::WHITE,
            dot_radius: 4.0,
            box_fill: Color::rgba(0.0, 0.0, 0.0, 0.9),
            text_color: Color::WHITE,
            font_px: 12.0,
            box_offset_x: 100.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PieStyle {
    pub background: Color,
    pub label_color: Color,
    pub label_font_px: f64,
}

impl Default for PieStyle {
    fn default() -> Self {
        Self {
            background: Color::rgba8(0x2d, 0x6e, 0xe0, 1.0),
            label_color: Color::WHITE,
            label_font_px: 22.0,
        }
    }
}

/// Whole-dashboard setup: endpoints and per-view layout.
///
/// Serializable so a host can persist and reload it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_history_url")]
    pub history_url: String,
    #[serde(default = "default_snapshot_url")]
    pub snapshot_url: String,
    #[serde(default = "default_animated_view")]
    pub animated: ChartViewConfig,
    #[serde(default)]
    pub brush: BrushLayout,
    #[serde(default = "default_markers_view")]
    pub markers: ChartViewConfig,
    #[serde(default = "default_wave_markers")]
    pub wave_markers: Vec<DateMarker>,
    #[serde(default)]
    pub marker_placement: MarkerPlacementConfig,
    #[serde(default = "default_pie_view")]
    pub pie: ChartViewConfig,
    #[serde(default)]
    pub pie_style: PieStyle,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            history_url: default_history_url(),
            snapshot_url: default_snapshot_url(),
            animated: default_animated_view(),
            brush: BrushLayout::default(),
            markers: default_markers_view(),
            wave_markers: default_wave_markers(),
            marker_placement: MarkerPlacementConfig::default(),
            pie: default_pie_view(),
            pie_style: PieStyle::default(),
        }
    }
}

impl DashboardConfig {
    #[must_use]
    pub fn with_history_url(mut self, url: impl Into<String>) -> Self {
        self.history_url = url.into();
        self
    }

    #[must_use]
    pub fn with_snapshot_url(mut self, url: impl Into<String>) -> Self {
        self.snapshot_url = url.into();
        self
    }

    #[must_use]
    pub fn with_wave_markers(mut self, markers: Vec<DateMarker>) -> Self {
        self.wave_markers = markers;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        for (url, name) in [
            (&self.history_url, "history_url"),
            (&self.snapshot_url, "snapshot_url"),
        ] {
            if url.trim().is_empty() {
                return Err(ChartError::InvalidData(format!("`{name}` must not be empty")));
            }
        }
        self.animated.validate()?;
        self.brush.validate()?;
        self.markers.validate()?;
        self.pie.validate()?;
        self.marker_placement.validate()?;
        Ok(())
    }

    /// Serializes config to pretty JSON for config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON; missing fields take their defaults.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_history_url() -> String {
    DEFAULT_HISTORY_URL.to_owned()
}

fn default_snapshot_url() -> String {
    DEFAULT_SNAPSHOT_URL.to_owned()
}

fn default_animated_view() -> ChartViewConfig {
    ChartViewConfig::new(Viewport::new(800, 800)).with_margin(Margin::new(40.0, 150.0, 20.0, 50.0))
}

fn default_markers_view() -> ChartViewConfig {
    ChartViewConfig::new(Viewport::new(1300, 600)).with_margin(Margin::new(40.0, 20.0, 40.0, 65.0))
}

fn default_pie_view() -> ChartViewConfig {
    ChartViewConfig::new(Viewport::new(800, 800))
}
