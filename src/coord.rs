//! This module contains a struct, [`Coord`], that models a 3D coordinate space and supports the
//! limited math this crate needs in 3 dimensions. Used to unify math with colors that is the same,
//! just with different projections into 3D space: any color type that can be embedded in 3D
//! implements `Into<Coord>` with its components mapped onto the axes in the order of the letters
//! in its name (so `CIELABColor` puts `l` on x, `a` on y, and `b` on z).

use serde::{Deserialize, Serialize};

/// A point in 3D space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    /// The first axis.
    pub x: f64,
    /// The second axis.
    pub y: f64,
    /// The third axis.
    pub z: f64,
}

impl Coord {
    /// The Euclidean difference between two 3D points, defined as the square root of the sum of
    /// squares of differences in each axis.
    /// It's very tempting to use this as an analogue for perceptual difference between two colors,
    /// but this should generally be avoided: projection into 3D space does not necessarily make
    /// distance a good analogue of perceptual difference, even in a space like CIELAB that was
    /// designed with that goal. If you want a method of determining how different two colors look,
    /// use [`difference::ciede2000`], which is the current industry and scientific standard for
    /// doing so.
    ///
    /// [`difference::ciede2000`]: ../difference/fn.ciede2000.html
    /// # Example
    /// ```
    /// # use madder::coord::Coord;
    /// let point1 = Coord { x: 0., y: 0., z: -1. };
    /// let point2 = Coord { x: 2., y: 3., z: 5. };
    /// let dist = point1.euclidean_distance(&point2);
    /// assert!((dist - 7.).abs() <= 1e-10);
    /// ```
    pub fn euclidean_distance(&self, other: &Coord) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2) + (self.z - other.z).powi(2))
            .sqrt()
    }
}
