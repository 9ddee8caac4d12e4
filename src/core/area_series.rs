use crate::core::{ChartScales, DataPoint};
use crate::error::ChartResult;
use serde::{Deserialize, Serialize};

/// Vertex in plot-local pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaVertex {
    pub x: f64,
    pub y: f64,
}

/// Deterministic geometry for a cumulative area series.
///
/// `line_points` follows the mapped samples.
/// `fill_polygon` is an explicitly closed polygon against the zero baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaGeometry {
    pub line_points: Vec<AreaVertex>,
    pub fill_polygon: Vec<AreaVertex>,
}

impl AreaGeometry {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            line_points: Vec::new(),
            fill_polygon: Vec::new(),
        }
    }
}

/// Projects samples into area geometry against the `value = 0` baseline.
pub fn project_area_geometry(points: &[DataPoint], scales: ChartScales) -> ChartResult<AreaGeometry> {
    if points.is_empty() {
        return Ok(AreaGeometry::empty());
    }

    let mut line_points = Vec::with_capacity(points.len());
    for point in points {
        let x = scales.x.time_to_pixel(point.time)?;
        let y = scales.y.value_to_pixel(point.value)?;
        line_points.push(AreaVertex { x, y });
    }

    let baseline_y = scales.y.value_to_pixel(0.0)?;
    let first_x = line_points[0].x;
    let last_x = line_points[line_points.len() - 1].x;

    let mut fill_polygon = Vec::with_capacity(line_points.len() + 3);
    fill_polygon.push(AreaVertex {
        x: first_x,
        y: baseline_y,
    });
    fill_polygon.extend(line_points.iter().copied());
    fill_polygon.push(AreaVertex {
        x: last_x,
        y: baseline_y,
    });
    fill_polygon.push(AreaVertex {
        x: first_x,
        y: baseline_y,
    });

    Ok(AreaGeometry {
        line_points,
        fill_polygon,
    })
}
