use chrono::NaiveDate;
use tracing::trace;

use crate::core::primitives::date_to_unix_seconds;
use crate::core::{DataPoint, TooltipState, locate_tooltip, sort_by_time};
use crate::error::ChartResult;
use crate::extensions::{DateMarker, MarkerPlacementConfig, PlacedMarker, place_markers};
use crate::interaction::InteractionState;
use crate::render::{
    Color, LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

use super::area_chart::{AreaChartView, push_tooltip_overlay, scales_or_skip};
use super::label_format::to_ordinal;
use super::view_config::{AreaStyle, ChartViewConfig, TooltipStyle};

const WAVE_DATES: [(i32, u32, u32); 6] = [
    (2020, 3, 10),
    (2020, 9, 15),
    (2021, 1, 10),
    (2021, 3, 20),
    (2021, 7, 20),
    (2021, 12, 1),
];

/// The six infection waves, labelled `1st wave` .. `6th wave`.
#[must_use]
pub fn default_wave_markers() -> Vec<DateMarker> {
    WAVE_DATES
        .iter()
        .filter_map(|&(year, month, day)| NaiveDate::from_ymd_opt(year, month, day))
        .zip(1u32..)
        .map(|(date, n)| {
            DateMarker::new(format!("wave-{n}"), date_to_unix_seconds(date))
                .with_text(format!("{} wave", to_ordinal(n)))
        })
        .collect()
}

/// Area chart annotated with dated vertical markers, plus a hover tooltip.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkersChartView {
    area: AreaChartView,
    markers: Vec<DateMarker>,
    placement: MarkerPlacementConfig,
    marker_color: Color,
    tooltip_style: TooltipStyle,
    data: Vec<DataPoint>,
    interaction: InteractionState,
}

impl MarkersChartView {
    pub fn new(config: ChartViewConfig, markers: Vec<DateMarker>) -> ChartResult<Self> {
        Ok(Self {
            area: AreaChartView::new(config)?.with_style(AreaStyle::markers())?,
            markers,
            placement: MarkerPlacementConfig::default(),
            marker_color: Color::rgba8(0x9d, 0x5c, 0xe2, 1.0),
            tooltip_style: TooltipStyle::default(),
            data: Vec::new(),
            interaction: InteractionState::default(),
        })
    }

    pub fn with_placement(mut self, placement: MarkerPlacementConfig) -> ChartResult<Self> {
        self.placement = placement.validate()?;
        Ok(self)
    }

    #[must_use]
    pub fn data(&self) -> &[DataPoint] {
        &self.data
    }

    #[must_use]
    pub fn markers(&self) -> &[DateMarker] {
        &self.markers
    }

    #[must_use]
    pub fn interaction(&self) -> InteractionState {
        self.interaction
    }

    pub fn set_data(&mut self, mut data: Vec<DataPoint>) {
        sort_by_time(&mut data);
        self.data = data;
        self.interaction.set_tooltip(None);
    }

    /// Marker geometry in plot-local pixels for the current data.
    pub fn placed_markers(&self) -> ChartResult<Vec<PlacedMarker>> {
        let Some(scales) = scales_or_skip(self.area.build_scales(&self.data))? else {
            return Ok(Vec::new());
        };
        place_markers(&self.markers, scales.x, scales.y.height_px(), self.placement)
    }

    /// Updates the tooltip from a pointer position in view coordinates.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> ChartResult<Option<TooltipState>> {
        self.interaction.on_pointer_move(x, y);
        let tooltip = match scales_or_skip(self.area.build_scales(&self.data))? {
            Some(scales) => locate_tooltip(
                &self.data,
                x,
                scales.x,
                scales.y,
                self.area.config().margin,
            ),
            None => None,
        };
        trace!(x, found = tooltip.is_some(), "markers chart pointer move");
        self.interaction.set_tooltip(tooltip);
        Ok(tooltip)
    }

    pub fn pointer_leave(&mut self) {
        self.interaction.on_pointer_leave();
    }

    pub fn render_frame(&self) -> ChartResult<RenderFrame> {
        let mut frame = self.area.render_frame(&self.data)?;
        let config = self.area.config();
        let (_, plot_height) = config.plot_size()?;
        let (left, top) = (config.margin.left, config.margin.top);

        if let Some(tooltip) = self.interaction.tooltip() {
            push_tooltip_overlay(
                &mut frame,
                tooltip,
                top,
                top + plot_height,
                self.tooltip_style,
            );
        }

        let mut overlay = RenderFrame::new(config.viewport);
        for marker in self.placed_markers()? {
            overlay.lines.push(
                LinePrimitive::new(
                    marker.x,
                    marker.line_top_px,
                    marker.x,
                    marker.line_bottom_px,
                    1.0,
                    self.marker_color,
                )
                .dashed(8.0, 8.0),
            );
            if let Some(label) = marker.label {
                overlay.rects.push(RectPrimitive::new(
                    label.left_px,
                    label.top_px,
                    label.width_px,
                    label.height_px,
                    self.marker_color,
                ));
                overlay.texts.push(TextPrimitive::new(
                    label.text,
                    label.left_px + label.width_px / 2.0,
                    label.top_px + (label.height_px - self.placement.label_font_px) / 2.0,
                    self.placement.label_font_px,
                    Color::WHITE,
                    TextHAlign::Center,
                ));
            }
        }
        frame.extend_translated(overlay, left, top);
        Ok(frame)
    }
}
