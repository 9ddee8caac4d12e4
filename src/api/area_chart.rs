use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{
    ChartScales, DataPoint, ScaleOptions, TooltipState, Viewport, build_scales_with,
    project_area_geometry,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, PolygonPrimitive, RectPrimitive, RenderFrame,
    TextHAlign, TextPrimitive,
};

use super::label_format::{format_axis_value, format_count, format_date, format_time_tick};
use super::view_config::{AreaStyle, ChartViewConfig, TooltipStyle};

/// Views wider than this get the dense bottom axis.
pub const WIDE_VIEW_THRESHOLD_PX: f64 = 520.0;
pub const LEFT_AXIS_TICK_COUNT: usize = 5;

#[must_use]
pub fn bottom_axis_tick_count(view_width_px: f64) -> usize {
    if view_width_px > WIDE_VIEW_THRESHOLD_PX {
        10
    } else {
        5
    }
}

/// Which axes an area plot draws and how dense they are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisOptions {
    pub show_bottom: bool,
    pub show_left: bool,
    pub bottom_tick_count: usize,
    pub left_tick_count: usize,
}

impl AxisOptions {
    /// Both axes, bottom density picked from the outer view width.
    #[must_use]
    pub fn for_view_width(view_width_px: f64) -> Self {
        Self {
            show_bottom: true,
            show_left: true,
            bottom_tick_count: bottom_axis_tick_count(view_width_px),
            left_tick_count: LEFT_AXIS_TICK_COUNT,
        }
    }

    #[must_use]
    pub fn hidden() -> Self {
        Self {
            show_bottom: false,
            show_left: false,
            bottom_tick_count: 0,
            left_tick_count: 0,
        }
    }
}

/// Single area chart: background, closed area against zero and two axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaChartView {
    config: ChartViewConfig,
    style: AreaStyle,
    scale_options: ScaleOptions,
    axes: AxisOptions,
}

impl AreaChartView {
    pub fn new(config: ChartViewConfig) -> ChartResult<Self> {
        let config = config.validate()?;
        Ok(Self {
            config,
            style: AreaStyle::default(),
            scale_options: ScaleOptions::default(),
            axes: AxisOptions::for_view_width(f64::from(config.viewport.width)),
        })
    }

    pub fn with_style(mut self, style: AreaStyle) -> ChartResult<Self> {
        self.style = style.validate()?;
        Ok(self)
    }

    #[must_use]
    pub fn with_scale_options(mut self, options: ScaleOptions) -> Self {
        self.scale_options = options;
        self
    }

    #[must_use]
    pub fn hide_bottom_axis(mut self) -> Self {
        self.axes.show_bottom = false;
        self
    }

    #[must_use]
    pub fn hide_left_axis(mut self) -> Self {
        self.axes.show_left = false;
        self
    }

    #[must_use]
    pub fn config(&self) -> ChartViewConfig {
        self.config
    }

    #[must_use]
    pub fn style(&self) -> AreaStyle {
        self.style
    }

    #[must_use]
    pub fn axes(&self) -> AxisOptions {
        self.axes
    }

    /// Scales for `data` over this view's plot area.
    pub fn build_scales(&self, data: &[DataPoint]) -> ChartResult<ChartScales> {
        let (width, height) = self.config.plot_size()?;
        build_scales_with(data, width, height, self.scale_options)
    }

    /// Background plus, when scales can be built, the area and its axes.
    pub fn render_frame(&self, data: &[DataPoint]) -> ChartResult<RenderFrame> {
        let mut frame = RenderFrame::new(self.config.viewport)
            .with_rect(background_rect(self.config.viewport, self.style));

        let Some(scales) = scales_or_skip(self.build_scales(data))? else {
            return Ok(frame);
        };
        let plot = area_plot_frame(data, scales, self.style, self.axes, self.config.viewport)?;
        frame.extend_translated(plot, self.config.margin.left, self.config.margin.top);
        Ok(frame)
    }
}

/// Treats an empty or non-finite dataset as "nothing to draw".
pub(crate) fn scales_or_skip(
    scales: ChartResult<ChartScales>,
) -> ChartResult<Option<ChartScales>> {
    match scales {
        Ok(scales) => Ok(Some(scales)),
        Err(ChartError::EmptyData(what)) => {
            debug!(what, "no data to draw");
            Ok(None)
        }
        Err(ChartError::InvalidData(reason)) => {
            debug!(reason = %reason, "skipping series with unusable scales");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

pub(crate) fn background_rect(viewport: Viewport, style: AreaStyle) -> RectPrimitive {
    RectPrimitive::new(
        0.0,
        0.0,
        f64::from(viewport.width),
        f64::from(viewport.height),
        style.background,
    )
    .with_corner_radius(style.background_corner_radius)
}

/// Area polygon and axes in plot-local coordinates.
pub(crate) fn area_plot_frame(
    data: &[DataPoint],
    scales: ChartScales,
    style: AreaStyle,
    axes: AxisOptions,
    viewport: Viewport,
) -> ChartResult<RenderFrame> {
    let mut frame = RenderFrame::new(viewport);
    let geometry = project_area_geometry(data, scales)?;
    if !geometry.fill_polygon.is_empty() {
        let points = geometry
            .fill_polygon
            .iter()
            .map(|vertex| (vertex.x, vertex.y))
            .collect();
        frame.polygons.push(
            PolygonPrimitive::new(points, style.area_fill)
                .with_stroke(style.area_stroke_width, style.area_stroke),
        );
    }

    if axes.show_bottom {
        push_bottom_axis(&mut frame, scales, style, axes.bottom_tick_count)?;
    }
    if axes.show_left {
        push_left_axis(&mut frame, scales, style, axes.left_tick_count)?;
    }
    Ok(frame)
}

fn push_bottom_axis(
    frame: &mut RenderFrame,
    scales: ChartScales,
    style: AreaStyle,
    tick_count: usize,
) -> ChartResult<()> {
    let (width, height) = scales.plot_size();
    frame
        .lines
        .push(LinePrimitive::new(0.0, height, width, height, 1.0, style.axis_color));

    for tick in scales.x.ticks(tick_count) {
        let x = scales.x.time_to_pixel(tick.time)?;
        frame.lines.push(LinePrimitive::new(
            x,
            height,
            x,
            height + style.tick_length_px,
            1.0,
            style.axis_color,
        ));
        frame.texts.push(TextPrimitive::new(
            format_time_tick(tick),
            x,
            height + style.tick_length_px + 2.0,
            style.axis_font_px,
            style.axis_color,
            TextHAlign::Center,
        ));
    }
    Ok(())
}

fn push_left_axis(
    frame: &mut RenderFrame,
    scales: ChartScales,
    style: AreaStyle,
    tick_count: usize,
) -> ChartResult<()> {
    let (_, height) = scales.plot_size();
    frame
        .lines
        .push(LinePrimitive::new(0.0, 0.0, 0.0, height, 1.0, style.axis_color));

    for value in scales.y.ticks(tick_count) {
        let y = scales.y.value_to_pixel(value)?;
        frame.lines.push(LinePrimitive::new(
            -style.tick_length_px,
            y,
            0.0,
            y,
            1.0,
            style.axis_color,
        ));
        frame.texts.push(TextPrimitive::new(
            format_axis_value(value),
            -style.tick_length_px - 2.0,
            y - style.axis_font_px * 0.5,
            style.axis_font_px,
            style.axis_color,
            TextHAlign::Right,
        ));
    }
    Ok(())
}

/// Guide line, anchor dot and date/count box for an active tooltip.
///
/// `plot_top` and `plot_bottom` are view coordinates of the plot's vertical
/// extent; the tooltip's `y_px` is relative to `plot_top`.
pub(crate) fn push_tooltip_overlay(
    frame: &mut RenderFrame,
    tooltip: TooltipState,
    plot_top: f64,
    plot_bottom: f64,
    style: TooltipStyle,
) {
    let x = tooltip.x_px;
    let y = tooltip.y_px + plot_top;
    frame.lines.push(
        LinePrimitive::new(x, plot_top, x, plot_bottom, style.guide_width, style.guide_color)
            .dashed(4.0, 2.0),
    );
    frame.circles.push(
        CirclePrimitive::new(x, y + 1.0, style.dot_radius, Color::rgba(0.0, 0.0, 0.0, 0.1))
            .with_stroke(2.0, Color::rgba(0.0, 0.0, 0.0, 0.1)),
    );
    frame.circles.push(
        CirclePrimitive::new(x, y, style.dot_radius, style.dot_fill)
            .with_stroke(2.0, style.dot_stroke),
    );

    let date = tooltip
        .anchor
        .datetime()
        .map_or_else(|| "n/a".to_owned(), format_date);
    let lines = [
        format!("Date: {date}"),
        format!("Cases: {}", format_count(tooltip.anchor.value)),
    ];
    let line_height = style.font_px * 1.5;
    let box_left = x + style.box_offset_x;
    let box_top = tooltip.y_px;
    let box_width = lines
        .iter()
        .map(|line| line.chars().count() as f64 * style.font_px * 0.6)
        .fold(60.0, f64::max)
        + 16.0;
    frame.rects.push(
        RectPrimitive::new(
            box_left,
            box_top,
            box_width,
            line_height * lines.len() as f64 + 12.0,
            style.box_fill,
        )
        .with_corner_radius(3.0),
    );
    for (index, line) in lines.into_iter().enumerate() {
        frame.texts.push(TextPrimitive::new(
            line,
            box_left + 8.0,
            box_top + 6.0 + line_height * index as f64,
            style.font_px,
            style.text_color,
            TextHAlign::Left,
        ));
    }
}
