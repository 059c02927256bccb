//! Page configuration shared by every folio render backend: page sizes,
//! orientation, margins, the color palette and font set, and the resolver that
//! turns a partial [`PdfConfig`] into a total [`ResolvedConfig`].

pub mod color;
pub mod config;
pub mod geometry;
pub mod theme;

pub use color::{Color, ColorParseError};
pub use config::{PdfConfig, ResolvedConfig};
pub use geometry::{Geometry, Margins, Orientation, PageSize, Rect, Size};
pub use theme::{FontSet, Palette};
