mod animated_chart;
mod area_chart;
mod brush_chart;
mod dashboard;
mod dashboard_observers;
mod label_format;
mod markers_chart;
mod pie_chart;
mod view_config;

pub use animated_chart::{
    ANIMATED_AXIS_TICKS, ANIMATED_GRID_COLUMNS, ANIMATED_GRID_ROWS, ANIMATED_SCALE_PADDING_PX,
    AnimatedChartView, AxisTick, AxisTransition, TickFrame, ease_cubic_in_out,
};
pub use area_chart::{
    AreaChartView, AxisOptions, LEFT_AXIS_TICK_COUNT, WIDE_VIEW_THRESHOLD_PX,
    bottom_axis_tick_count,
};
pub use brush_chart::BrushChartView;
pub use dashboard::{DashboardController, DashboardView, LoadState, LoadStatus};
pub use label_format::{
    format_axis_value, format_count, format_date, format_month_year, format_time_tick,
    to_ordinal,
};
pub use markers_chart::{MarkersChartView, default_wave_markers};
pub use pie_chart::PieChartView;
pub use view_config::{
    AreaStyle, BrushLayout, ChartViewConfig, DEFAULT_HISTORY_URL, DEFAULT_SNAPSHOT_URL,
    DashboardConfig, PieStyle, TooltipStyle,
};
