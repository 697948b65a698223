//! This file provides constants that are used for matrix multiplication and color space conversion,
//! along with a function for computing inverses. The reason for this method of doing things instead
//! of simple multiplications and additions is because the inverses of these transformations become
//! slightly off, allowing for errors to slowly creep in even when doing things that should not
//! change the result at all, e.g., converting to an illuminant and back again. Thus, this method
//! allows for saner checking of constant values and guaranteed precision in inversion.

use nalgebra::Matrix3;

/// Not safe for general use. If `const fn` worked on these, it would be used instead. The only
/// reason this is here is to calculate the inverse of constant matrices. This panics on singular
/// matrices!
pub fn inv(m: Matrix3<f64>) -> Matrix3<f64> {
    if !m.is_invertible() {
        panic!("Constant matrix not invertible!")
    } else {
        m.try_inverse().unwrap()
    }
}

/// The linear transformation from CIE 1931 XYZ (Y normalized to 1) to linear sRGB under the sRGB
/// reference white. Its inverse, computed through [`inv`], takes linear sRGB to XYZ.
#[allow(non_snake_case)]
pub fn STANDARD_RGB_TRANSFORM_MAT() -> Matrix3<f64> {
    Matrix3::new(
        03.2406,
        -1.5372,
        -0.4986,
        -0.9689,
        01.8758,
        00.0415,
        00.0557,
        -0.2040,
        01.0570,
    )
}

/// The Bradford cone-response matrix, used for chromatic adaptation between illuminants.
#[allow(non_snake_case)]
pub fn BRADFORD_TRANSFORM_MAT() -> Matrix3<f64> {
    Matrix3::new(
        00.8951,
        00.2664,
        -0.1614,
        -0.7502,
        01.7135,
        00.0367,
        00.0389,
        -0.0685,
        01.0296,
    )
}

/// The NTSC luma/chroma matrix, taking normalized sRGB to YIQ. Its inverse, computed through
/// [`inv`], takes YIQ back to normalized sRGB.
#[allow(non_snake_case)]
pub fn YIQ_TRANSFORM_MAT() -> Matrix3<f64> {
    Matrix3::new(
        00.299,
        00.587,
        00.114,
        00.596,
        -0.275,
        -0.321,
        00.212,
        -0.523,
        00.311,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverse_round_trips() {
        let m = STANDARD_RGB_TRANSFORM_MAT();
        let prod = m * inv(m);
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((prod[(i, j)] - expected).abs() <= 1e-10);
            }
        }
    }
}
