pub mod accessors;
pub mod area_series;
pub mod brush;
pub mod chart_scales;
pub mod nearest;
pub mod primitives;
pub mod proportional;
pub mod scale;
pub mod ticks;
pub mod time_scale;
pub mod types;
pub mod value_scale;

pub use accessors::{
    bisect_time_left, compare_by_time, is_sorted_by_time, point_time, point_value, sort_by_time,
};
pub use area_series::{AreaGeometry, AreaVertex, project_area_geometry};
pub use brush::{BrushDirection, SelectionRange, filter_by_range};
pub use chart_scales::{ChartScales, ScaleOptions, build_scales, build_scales_with};
pub use nearest::{TooltipState, locate, locate_tooltip};
pub use proportional::{
    PIE_LABEL_MIN_ANGLE, PieArc, PieLayout, RegionTotals, derive_categories, layout_pie,
};
pub use scale::LinearScale;
pub use ticks::{NICE_TICK_COUNT, TimeTick, TimeTickUnit};
pub use time_scale::TimeScale;
pub use types::{CategoryDatapoint, DataPoint, Margin, Viewport};
pub use value_scale::ValueScale;
