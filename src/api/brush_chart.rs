use tracing::{debug, trace};

use crate::core::{
    BrushDirection, ChartScales, DataPoint, SelectionRange, TooltipState, build_scales,
    filter_by_range, locate_tooltip, sort_by_time,
};
use crate::error::ChartResult;
use crate::interaction::{BrushRelease, InteractionState, PixelRect};
use crate::render::{Color, PolygonPrimitive, RenderFrame};

use super::area_chart::{
    AxisOptions, area_plot_frame, background_rect, push_tooltip_overlay, scales_or_skip,
};
use super::view_config::{AreaStyle, BrushLayout, TooltipStyle};

/// Focus chart driven by a brush dragged over an overview strip.
///
/// The raw dataset is kept sorted; the focus chart shows the subset inside
/// the current selection, or everything when there is none.
#[derive(Debug, Clone, PartialEq)]
pub struct BrushChartView {
    layout: BrushLayout,
    style: AreaStyle,
    tooltip_style: TooltipStyle,
    selection_color: Color,
    direction: BrushDirection,
    raw: Vec<DataPoint>,
    filtered: Vec<DataPoint>,
    selection: Option<SelectionRange>,
    interaction: InteractionState,
}

impl BrushChartView {
    pub fn new(layout: BrushLayout) -> ChartResult<Self> {
        Ok(Self {
            layout: layout.validate()?,
            style: AreaStyle::default(),
            tooltip_style: TooltipStyle::default(),
            selection_color: Color::rgba8(0xf6, 0xac, 0xc8, 0.35),
            direction: BrushDirection::default(),
            raw: Vec::new(),
            filtered: Vec::new(),
            selection: None,
            interaction: InteractionState::default(),
        })
    }

    #[must_use]
    pub fn with_direction(mut self, direction: BrushDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_style(mut self, style: AreaStyle) -> ChartResult<Self> {
        self.style = style.validate()?;
        Ok(self)
    }

    #[must_use]
    pub fn layout(&self) -> BrushLayout {
        self.layout
    }

    #[must_use]
    pub fn raw_data(&self) -> &[DataPoint] {
        &self.raw
    }

    #[must_use]
    pub fn filtered_data(&self) -> &[DataPoint] {
        &self.filtered
    }

    #[must_use]
    pub fn selection(&self) -> Option<SelectionRange> {
        self.selection
    }

    #[must_use]
    pub fn interaction(&self) -> InteractionState {
        self.interaction
    }

    /// Replaces the raw dataset and clears any selection.
    pub fn set_data(&mut self, mut data: Vec<DataPoint>) {
        sort_by_time(&mut data);
        debug!(count = data.len(), "brush chart data set");
        self.raw = data;
        self.selection = None;
        self.filtered = self.raw.clone();
        self.interaction.set_tooltip(None);
    }

    pub fn focus_scales(&self) -> ChartResult<ChartScales> {
        build_scales(
            &self.filtered,
            self.layout.focus_width(),
            self.layout.focus_height(),
        )
    }

    pub fn overview_scales(&self) -> ChartResult<ChartScales> {
        build_scales(
            &self.raw,
            self.layout.overview_width(),
            self.layout.overview_height(),
        )
    }

    /// Filters the raw data by `range`; `None` restores the full dataset.
    ///
    /// A visible tooltip is re-located from the last pointer position against
    /// the new focus data.
    pub fn apply_selection(&mut self, range: Option<SelectionRange>) -> ChartResult<()> {
        self.selection = range;
        self.filtered = filter_by_range(&self.raw, range.as_ref());
        debug!(
            raw = self.raw.len(),
            visible = self.filtered.len(),
            selected = range.is_some(),
            "brush selection applied"
        );

        if self.interaction.tooltip().is_some() {
            let tooltip = match self.interaction.cursor() {
                Some((x, _)) => self.tooltip_at(x)?,
                None => None,
            };
            self.interaction.set_tooltip(tooltip);
        }
        Ok(())
    }

    pub fn clear_selection(&mut self) -> ChartResult<()> {
        self.apply_selection(None)
    }

    /// Updates the tooltip from a pointer position in view coordinates.
    ///
    /// The locator runs on the filtered data against the focus scales.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> ChartResult<Option<TooltipState>> {
        self.interaction.on_pointer_move(x, y);
        let tooltip = self.tooltip_at(x)?;
        trace!(x, found = tooltip.is_some(), "brush chart pointer move");
        self.interaction.set_tooltip(tooltip);
        Ok(tooltip)
    }

    fn tooltip_at(&self, x: f64) -> ChartResult<Option<TooltipState>> {
        Ok(match scales_or_skip(self.focus_scales())? {
            Some(scales) => locate_tooltip(
                &self.filtered,
                x,
                scales.x,
                scales.y,
                self.layout.focus_view().margin,
            ),
            None => None,
        })
    }

    pub fn pointer_leave(&mut self) {
        self.interaction.on_pointer_leave();
    }

    /// Starts a brush gesture; returns `false` when `(x, y)` is outside the
    /// overview strip.
    pub fn drag_start(&mut self, x: f64, y: f64) -> bool {
        let (local_x, local_y) = self.to_overview_local(x, y);
        let inside = (0.0..=self.layout.overview_width()).contains(&local_x)
            && (0.0..=self.layout.overview_height()).contains(&local_y);
        if inside {
            self.interaction.on_drag_start(local_x, local_y);
        }
        inside
    }

    /// Extends the gesture and re-filters with the live selection.
    ///
    /// Nothing is selected while the drag is still within click tolerance.
    pub fn drag_move(&mut self, x: f64, y: f64) -> ChartResult<Option<SelectionRange>> {
        let (local_x, local_y) = self.to_overview_local(x, y);
        let Some(rect) = self.interaction.on_drag_move(local_x, local_y) else {
            return Ok(None);
        };
        if rect.is_click() {
            return Ok(None);
        }
        let range = self.range_from_drag(rect)?;
        if range.is_some() {
            self.apply_selection(range)?;
        }
        Ok(range)
    }

    /// Ends the gesture: a click resets to the raw data, a drag selects.
    pub fn drag_end(&mut self, x: f64, y: f64) -> ChartResult<BrushRelease> {
        let (local_x, local_y) = self.to_overview_local(x, y);
        let release = self.interaction.on_drag_end(local_x, local_y);
        match release {
            BrushRelease::Click => self.clear_selection()?,
            BrushRelease::Selected(rect) => {
                let range = self.range_from_drag(rect)?;
                if range.is_some() {
                    self.apply_selection(range)?;
                }
            }
            BrushRelease::Ignored => {}
        }
        Ok(release)
    }

    fn to_overview_local(&self, x: f64, y: f64) -> (f64, f64) {
        let (origin_x, origin_y) = self.layout.overview_origin();
        (x - origin_x, y - origin_y)
    }

    fn range_from_drag(&self, rect: PixelRect) -> ChartResult<Option<SelectionRange>> {
        let Some(scales) = scales_or_skip(self.overview_scales())? else {
            return Ok(None);
        };
        let rect = rect.clamped(self.layout.overview_width(), self.layout.overview_height());
        SelectionRange::from_pixels(rect.start, rect.end, scales.x, scales.y, self.direction)
            .map(Some)
    }

    pub fn render_frame(&self) -> ChartResult<RenderFrame> {
        let viewport = self.layout.viewport;
        let mut frame = RenderFrame::new(viewport).with_rect(background_rect(viewport, self.style));

        if let Some(scales) = scales_or_skip(self.focus_scales())? {
            let axes = AxisOptions::for_view_width(f64::from(viewport.width));
            let focus = area_plot_frame(&self.filtered, scales, self.style, axes, viewport)?;
            let (dx, dy) = self.layout.focus_origin();
            frame.extend_translated(focus, dx, dy);
        }

        if let Some(scales) = scales_or_skip(self.overview_scales())? {
            let mut overview =
                area_plot_frame(&self.raw, scales, self.style, AxisOptions::hidden(), viewport)?;
            if let Some(polygon) = self.selection_polygon(scales)? {
                overview.polygons.push(polygon);
            }
            let (dx, dy) = self.layout.overview_origin();
            frame.extend_translated(overview, dx, dy);
        }

        if let Some(tooltip) = self.interaction.tooltip() {
            let top = self.layout.margin.top;
            push_tooltip_overlay(
                &mut frame,
                tooltip,
                top,
                top + self.layout.focus_height(),
                self.tooltip_style,
            );
        }
        Ok(frame)
    }

    // Brush box in overview-local pixels: the live drag if any, else the
    // committed selection.
    fn selection_polygon(&self, scales: ChartScales) -> ChartResult<Option<PolygonPrimitive>> {
        let (width, height) = (self.layout.overview_width(), self.layout.overview_height());
        let (left, right, top, bottom) = if let Some(drag) = self.interaction.active_drag() {
            let drag = drag.clamped(width, height);
            match self.direction {
                BrushDirection::Horizontal => (drag.left(), drag.left() + drag.width(), 0.0, height),
                BrushDirection::Both => (
                    drag.left(),
                    drag.left() + drag.width(),
                    drag.top(),
                    drag.top() + drag.height(),
                ),
            }
        } else if let Some(range) = self.selection {
            let x0 = scales.x.time_to_pixel(range.x0)?;
            let x1 = scales.x.time_to_pixel(range.x1)?;
            let y0 = scales.y.value_to_pixel(range.y0)?;
            let y1 = scales.y.value_to_pixel(range.y1)?;
            (x0.min(x1), x0.max(x1), y0.min(y1), y0.max(y1))
        } else {
            return Ok(None);
        };

        if right - left <= 0.0 {
            return Ok(None);
        }
        Ok(Some(
            PolygonPrimitive::new(
                vec![(left, top), (right, top), (right, bottom), (left, bottom)],
                self.selection_color,
            )
            .with_stroke(1.0, Color::WHITE),
        ))
    }
}
