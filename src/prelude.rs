//! This module simply brings the most common functionality under a single namespace, to prevent
//! excessive imports. As of now, this prelude includes the [`Color`] trait, the ubiquitous
//! [`RGBColor`], the associated parse error [`ColorParseError`], the important [`Illuminant`],
//! the [`ColorFormatBundle`] most callers actually want, and the root-color classifier surface.
//! The individual color spaces in the [`colors`](crate::colors) module are not included.

pub use crate::bundle::ColorFormatBundle;
pub use crate::color::{Color, RGBColor, XYZColor};
pub use crate::hex::ColorParseError;
pub use crate::illuminants::Illuminant;
pub use crate::rootcolor::{classify, CatalogScheme, ClassificationInput, RootColor};
