// File: crates/simplify-core/src/lib.rs
// Summary: Core library entry point; exports the point-series simplifier and the series composer.

pub mod types;
pub mod error;
pub mod options;
pub mod geometry;
pub mod simplify;
pub mod series;
pub mod palette;
pub mod compose;

pub use types::Point;
pub use error::{ErrorKind, InvalidInput, SimplifyError};
pub use options::{Quality, SimplifyOptions};
pub use simplify::{prefilter_report, radial_prefilter, simplify, simplify_indices, simplify_xy, PrefilterReport};
pub use series::Series;
pub use palette::{Palette, Rgba};
pub use compose::{ComposeOptions, RenderSeries, SeriesComposer};
