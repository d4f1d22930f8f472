// File: crates/simplify-core/src/compose.rs
// Summary: Series composer; simplifies each named input series and attaches a label and color for the renderer.

use log::debug;

use crate::error::{InvalidInput, SimplifyError};
use crate::options::SimplifyOptions;
use crate::palette::{Palette, Rgba};
use crate::series::Series;
use crate::types::Point;

/// Label suffix for series that went through the simplifier.
pub const SIMPLIFIED_SUFFIX: &str = " simplified";

/// Session-wide settings applied to every series of one chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ComposeOptions {
    /// `None` forwards every series untouched.
    pub simplify: Option<SimplifyOptions>,
    /// Palette scheme name (see [`crate::palette::SCHEMES`]).
    pub scheme: String,
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self { simplify: Some(SimplifyOptions::default()), scheme: "classic9".to_string() }
    }
}

impl ComposeOptions {
    pub fn passthrough() -> Self {
        Self { simplify: None, ..Self::default() }
    }

    pub fn simplified(options: SimplifyOptions) -> Self {
        Self { simplify: Some(options), ..Self::default() }
    }

    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }
}

/// One renderer-ready series.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderSeries {
    pub name: String,
    pub color: Rgba,
    pub data: Vec<Point>,
}

impl RenderSeries {
    pub fn data_xy(&self) -> Vec<(f64, f64)> {
        self.data.iter().map(|p| p.to_xy()).collect()
    }
}

#[derive(Clone, Debug, Default)]
pub struct SeriesComposer {
    pub options: ComposeOptions,
}

impl SeriesComposer {
    pub fn new(options: ComposeOptions) -> Self { Self { options } }

    /// Build the renderer input for `inputs`, in input order.
    ///
    /// Colors come from a fresh palette per call. If any series is rejected
    /// nothing is returned.
    pub fn compose<I>(&self, inputs: I) -> Result<Vec<RenderSeries>, SimplifyError>
    where
        I: IntoIterator<Item = Series>,
    {
        if let Some(opts) = &self.options.simplify {
            opts.validate()?;
        }
        let mut palette = Palette::find(&self.options.scheme);
        let mut out = Vec::new();
        for series in inputs {
            if series.name.trim().is_empty() {
                return Err(InvalidInput::EmptySeriesName.into());
            }
            let rendered = match &self.options.simplify {
                Some(opts) => {
                    let before = series.len();
                    let reduced = series.simplified(opts)?;
                    debug!("series '{}': {} -> {} points ({})", series.name, before, reduced.len(), opts.quality);
                    RenderSeries {
                        name: format!("{}{}", reduced.name, SIMPLIFIED_SUFFIX),
                        color: palette.color(),
                        data: reduced.points,
                    }
                }
                None => {
                    debug!("series '{}': {} points forwarded", series.name, series.len());
                    RenderSeries { name: series.name, color: palette.color(), data: series.points }
                }
            };
            out.push(rendered);
        }
        Ok(out)
    }
}
