use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Ordinal palette: categories get colors in first-seen order, cycling.
///
/// Assignment depends only on the order categories are registered, so the
/// same input always yields the same colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrdinalPalette {
    colors: Vec<Color>,
    assigned: IndexMap<String, usize>,
}

impl Default for OrdinalPalette {
    fn default() -> Self {
        Self {
            colors: vec![
                Color::rgba8(93, 30, 91, 1.0),
                Color::rgba8(93, 30, 91, 0.8),
                Color::rgba8(93, 30, 91, 0.6),
                Color::rgba8(93, 30, 91, 0.4),
            ],
            assigned: IndexMap::new(),
        }
    }
}

impl OrdinalPalette {
    pub fn new(colors: Vec<Color>) -> ChartResult<Self> {
        if colors.is_empty() {
            return Err(ChartError::InvalidData(
                "palette needs at least one color".to_owned(),
            ));
        }
        for color in &colors {
            color.validate()?;
        }
        Ok(Self {
            colors,
            assigned: IndexMap::new(),
        })
    }

    /// Builds a palette whose domain is `categories`, in order.
    #[must_use]
    pub fn with_domain<'a>(mut self, categories: impl IntoIterator<Item = &'a str>) -> Self {
        for category in categories {
            self.register(category);
        }
        self
    }

    fn register(&mut self, category: &str) -> usize {
        let next = self.assigned.len();
        *self.assigned.entry(category.to_owned()).or_insert(next)
    }

    /// Color of `category`, registering it if unseen.
    pub fn color_for(&mut self, category: &str) -> Color {
        let index = self.register(category);
        self.colors[index % self.colors.len()]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
