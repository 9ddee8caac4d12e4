use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::primitives::unix_seconds_to_datetime;
use crate::core::{
    ChartScales, DataPoint, ScaleOptions, build_scales_with, project_area_geometry, sort_by_time,
};
use crate::error::ChartResult;
use crate::render::{
    Color, LinePrimitive, PolygonPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

use super::area_chart::{background_rect, scales_or_skip};
use super::label_format::{format_axis_value, format_month_year};
use super::view_config::{AreaStyle, ChartViewConfig};

pub const ANIMATED_GRID_ROWS: usize = 6;
pub const ANIMATED_GRID_COLUMNS: usize = 20;
pub const ANIMATED_AXIS_TICKS: usize = 6;
/// Vertical padding subtracted from the plot height for the axis strip.
pub const ANIMATED_SCALE_PADDING_PX: f64 = 40.0;
const GRID_OPACITY: f64 = 0.4;
const AXIS_LABEL: &str = "time";

/// Cubic in-out easing on `[0, 1]`.
#[must_use]
pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}

/// One tick of an axis or grid at rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub value: f64,
    pub label: String,
    pub position_px: f64,
}

/// Tick interpolated at some point of a transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickFrame {
    pub label: String,
    pub position_px: f64,
    pub opacity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct TickTrack {
    label: String,
    from_px: f64,
    to_px: f64,
    from_opacity: f64,
    to_opacity: f64,
}

/// Animation between two tick sets along the "center" trajectory.
///
/// Ticks present in both sets slide from their old to their new position.
/// Entering ticks start at the axis center fully transparent; leaving ticks
/// collapse into the center while fading out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTransition {
    tracks: Vec<TickTrack>,
}

impl AxisTransition {
    #[must_use]
    pub fn between(previous: &[AxisTick], next: &[AxisTick], axis_length_px: f64) -> Self {
        let center = axis_length_px / 2.0;
        let mut old: IndexMap<OrderedFloat<f64>, &AxisTick> = previous
            .iter()
            .map(|tick| (OrderedFloat(tick.value), tick))
            .collect();

        let mut tracks = Vec::with_capacity(previous.len().max(next.len()));
        for tick in next {
            let track = match old.shift_remove(&OrderedFloat(tick.value)) {
                Some(before) => TickTrack {
                    label: tick.label.clone(),
                    from_px: before.position_px,
                    to_px: tick.position_px,
                    from_opacity: 1.0,
                    to_opacity: 1.0,
                },
                None => TickTrack {
                    label: tick.label.clone(),
                    from_px: center,
                    to_px: tick.position_px,
                    from_opacity: 0.0,
                    to_opacity: 1.0,
                },
            };
            tracks.push(track);
        }
        tracks.extend(old.into_values().map(|tick| TickTrack {
            label: tick.label.clone(),
            from_px: tick.position_px,
            to_px: center,
            from_opacity: 1.0,
            to_opacity: 0.0,
        }));

        Self { tracks }
    }

    /// Transition that starts and ends on `ticks`.
    #[must_use]
    pub fn settled(ticks: &[AxisTick]) -> Self {
        Self::between(ticks, ticks, 0.0)
    }

    /// Tick state at `progress` in `[0, 1]` (clamped), eased cubic in-out.
    #[must_use]
    pub fn at(&self, progress: f64) -> Vec<TickFrame> {
        let eased = ease_cubic_in_out(if progress.is_nan() { 1.0 } else { progress });
        self.tracks
            .iter()
            .map(|track| TickFrame {
                label: track.label.clone(),
                position_px: lerp(track.from_px, track.to_px, eased),
                opacity: lerp(track.from_opacity, track.to_opacity, eased),
            })
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[derive(Debug, Clone, Default, PartialEq)]
struct AnimatedTicks {
    axis: Vec<AxisTick>,
    rows: Vec<AxisTick>,
    columns: Vec<AxisTick>,
}

/// Area chart whose axis and grid animate between successive datasets.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedChartView {
    config: ChartViewConfig,
    style: AreaStyle,
    data: Vec<DataPoint>,
    ticks: AnimatedTicks,
    axis: AxisTransition,
    rows: AxisTransition,
    columns: AxisTransition,
}

impl AnimatedChartView {
    pub fn new(config: ChartViewConfig) -> ChartResult<Self> {
        Ok(Self {
            config: config.validate()?,
            style: AreaStyle::animated(),
            data: Vec::new(),
            ticks: AnimatedTicks::default(),
            axis: AxisTransition::settled(&[]),
            rows: AxisTransition::settled(&[]),
            columns: AxisTransition::settled(&[]),
        })
    }

    pub fn with_style(mut self, style: AreaStyle) -> ChartResult<Self> {
        self.style = style.validate()?;
        Ok(self)
    }

    #[must_use]
    pub fn data(&self) -> &[DataPoint] {
        &self.data
    }

    #[must_use]
    pub fn axis_transition(&self) -> &AxisTransition {
        &self.axis
    }

    /// Scales of the current dataset, not niced on the value axis.
    pub fn build_scales(&self) -> ChartResult<ChartScales> {
        let (width, height) = self.scaled_plot_size()?;
        build_scales_with(
            &self.data,
            width,
            height,
            ScaleOptions { nice_values: false },
        )
    }

    // Plot size with the value axis shortened by the top padding.
    fn scaled_plot_size(&self) -> ChartResult<(f64, f64)> {
        let (width, height) = self.config.plot_size()?;
        Ok((width, (height - ANIMATED_SCALE_PADDING_PX).max(1.0)))
    }

    /// Replaces the dataset and starts a transition from the previous ticks.
    pub fn set_data(&mut self, mut data: Vec<DataPoint>) -> ChartResult<()> {
        sort_by_time(&mut data);
        self.data = data;

        let next = match scales_or_skip(self.build_scales())? {
            Some(scales) => collect_ticks(scales)?,
            None => AnimatedTicks::default(),
        };
        let (width, height) = self.scaled_plot_size()?;
        self.axis = AxisTransition::between(&self.ticks.axis, &next.axis, width);
        self.columns = AxisTransition::between(&self.ticks.columns, &next.columns, width);
        self.rows = AxisTransition::between(&self.ticks.rows, &next.rows, height);
        debug!(
            points = self.data.len(),
            axis_ticks = next.axis.len(),
            "animated chart data set"
        );
        self.ticks = next;
        Ok(())
    }

    /// Frame at `progress` of the running tick transition.
    pub fn render_frame(&self, progress: f64) -> ChartResult<RenderFrame> {
        let viewport = self.config.viewport;
        let mut frame = RenderFrame::new(viewport).with_rect(background_rect(viewport, self.style));
        let Some(scales) = scales_or_skip(self.build_scales())? else {
            return Ok(frame);
        };
        let (width, scale_height) = scales.plot_size();
        let grid = self.style.axis_color;
        let mut plot = RenderFrame::new(viewport);

        for row in self.rows.at(progress) {
            plot.lines.push(LinePrimitive::new(
                0.0,
                row.position_px,
                width,
                row.position_px,
                1.0,
                grid.with_alpha(GRID_OPACITY * row.opacity),
            ));
        }
        for column in self.columns.at(progress) {
            plot.lines.push(LinePrimitive::new(
                column.position_px,
                0.0,
                column.position_px,
                scale_height,
                1.0,
                grid.with_alpha(GRID_OPACITY * column.opacity),
            ));
        }

        let geometry = project_area_geometry(&self.data, scales)?;
        if !geometry.fill_polygon.is_empty() {
            plot.polygons.push(PolygonPrimitive::new(
                geometry
                    .fill_polygon
                    .iter()
                    .map(|vertex| (vertex.x, vertex.y))
                    .collect(),
                self.style.area_fill,
            ));
        }

        plot.lines.push(LinePrimitive::new(
            0.0,
            scale_height,
            width,
            scale_height,
            1.0,
            self.style.axis_color,
        ));
        for tick in self.axis.at(progress) {
            let color = self.style.axis_color.with_alpha(tick.opacity);
            plot.lines.push(LinePrimitive::new(
                tick.position_px,
                scale_height,
                tick.position_px,
                scale_height + self.style.tick_length_px,
                1.0,
                color,
            ));
            plot.texts.push(TextPrimitive::new(
                tick.label,
                tick.position_px,
                scale_height + self.style.tick_length_px + 2.0,
                self.style.axis_font_px,
                color,
                TextHAlign::Center,
            ));
        }
        plot.texts.push(TextPrimitive::new(
            AXIS_LABEL,
            width + 30.0,
            scale_height - 28.0,
            18.0,
            Color::WHITE,
            TextHAlign::Left,
        ));

        frame.extend_translated(plot, self.config.margin.left, self.config.margin.top);
        Ok(frame)
    }
}

fn collect_ticks(scales: ChartScales) -> ChartResult<AnimatedTicks> {
    let mut axis = Vec::with_capacity(ANIMATED_AXIS_TICKS);
    for tick in scales.x.ticks(ANIMATED_AXIS_TICKS) {
        let label = unix_seconds_to_datetime(tick.time)
            .map_or_else(|| "n/a".to_owned(), format_month_year);
        axis.push(AxisTick {
            value: tick.time,
            label,
            position_px: scales.x.time_to_pixel(tick.time)?,
        });
    }

    let mut columns = Vec::with_capacity(ANIMATED_GRID_COLUMNS);
    for tick in scales.x.ticks(ANIMATED_GRID_COLUMNS) {
        columns.push(AxisTick {
            value: tick.time,
            label: String::new(),
            position_px: scales.x.time_to_pixel(tick.time)?,
        });
    }

    let mut rows = Vec::with_capacity(ANIMATED_GRID_ROWS);
    for value in scales.y.ticks(ANIMATED_GRID_ROWS) {
        rows.push(AxisTick {
            value,
            label: format_axis_value(value),
            position_px: scales.y.value_to_pixel(value)?,
        });
    }

    Ok(AnimatedTicks {
        axis,
        rows,
        columns,
    })
}
