//! This module contains various modules that implement types that implement [`Color`]. For convenience,
//! each main type is imported into this module's namespace directly.
//!
//! [`Color`]: ../color/trait.Color.html
pub mod cielabcolor;
pub mod cieluvcolor;
pub mod cmykcolor;
pub mod hslcolor;
pub mod hsvcolor;
pub mod hunterlabcolor;
pub mod yiqcolor;

// for convenience, use this namespace for the color objects
pub use self::cielabcolor::CIELABColor;
pub use self::cieluvcolor::CIELUVColor;
pub use self::cmykcolor::CMYKColor;
pub use self::hslcolor::HSLColor;
pub use self::hsvcolor::HSVColor;
pub use self::hunterlabcolor::HunterLabColor;
pub use self::yiqcolor::YIQColor;
