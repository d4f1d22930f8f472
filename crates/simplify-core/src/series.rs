// File: crates/simplify-core/src/series.rs
// Summary: Named point series as handed over by the data-ingestion boundary.

use crate::error::SimplifyError;
use crate::options::SimplifyOptions;
use crate::simplify::simplify;
use crate::types::Point;

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub name: String,
    pub points: Vec<Point>,
}

impl Series {
    pub fn new(name: impl Into<String>, points: Vec<Point>) -> Self {
        Self { name: name.into(), points }
    }

    pub fn from_xy(name: impl Into<String>, data: &[(f64, f64)]) -> Self {
        Self { name: name.into(), points: data.iter().map(|&p| Point::from(p)).collect() }
    }

    pub fn len(&self) -> usize { self.points.len() }

    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    pub fn first(&self) -> Option<Point> { self.points.first().copied() }

    pub fn last(&self) -> Option<Point> { self.points.last().copied() }

    /// A copy of this series reduced with `options`; the name is kept.
    pub fn simplified(&self, options: &SimplifyOptions) -> Result<Self, SimplifyError> {
        Ok(Series { name: self.name.clone(), points: simplify(&self.points, options)? })
    }
}
