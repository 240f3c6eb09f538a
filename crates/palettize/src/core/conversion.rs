use crate::Float;

/// Convert the given 24-bit RGB coordinates to floating point coordinates.
#[inline]
pub(crate) fn from_24bit(r: u8, g: u8, b: u8) -> [Float; 3] {
    [r as Float / 255.0, g as Float / 255.0, b as Float / 255.0]
}

/// Multiply the 3 by 3 matrix and 3-element vector with each other, producing a
/// new 3-element vector.
#[inline]
fn multiply(matrix: &[[Float; 3]; 3], vector: &[Float; 3]) -> [Float; 3] {
    let [row1, row2, row3] = matrix;

    [
        row1[0].mul_add(vector[0], row1[1].mul_add(vector[1], row1[2] * vector[2])),
        row2[0].mul_add(vector[0], row2[1].mul_add(vector[1], row2[2] * vector[2])),
        row3[0].mul_add(vector[0], row3[1].mul_add(vector[1], row3[2] * vector[2])),
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert coordinates from gamma-corrected sRGB to linear sRGB. This is a
/// one-hop, direct conversion. Coordinates are in unit range.
fn rgb_to_linear_rgb(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn convert(value: Float) -> Float {
        if value > 0.04045 {
            ((value + 0.055) / 1.055).powf(2.4)
        } else {
            value / 12.92
        }
    }

    [convert(value[0]), convert(value[1]), convert(value[2])]
}

// --------------------------------------------------------------------------------------------------------------------

// The four-digit sRGB primaries, not the ones derived from the chromaticities.
// Generated themes depend on the exact values.
#[rustfmt::skip]
const LINEAR_SRGB_TO_XYZ: [[Float; 3]; 3] = [
    [ 0.4124, 0.3576, 0.1805 ],
    [ 0.2126, 0.7152, 0.0722 ],
    [ 0.0193, 0.1192, 0.9505 ],
];

/// The D65 reference white.
const D65_WHITE: [Float; 3] = [0.95047, 1.0, 1.08883];

/// Convert coordinates for linear sRGB to XYZ relative to the D65 reference
/// white. This is a one-hop, direct conversion.
fn linear_srgb_to_relative_xyz(value: &[Float; 3]) -> [Float; 3] {
    let [x, y, z] = multiply(&LINEAR_SRGB_TO_XYZ, value);
    [x / D65_WHITE[0], y / D65_WHITE[1], z / D65_WHITE[2]]
}

// --------------------------------------------------------------------------------------------------------------------

const EPSILON: Float = 0.008856;
const KAPPA_SLOPE: Float = 7.787;
const OFFSET: Float = 16.0 / 116.0;

/// Convert relative XYZ coordinates to CIE Lab. This is a one-hop, direct
/// conversion.
#[allow(non_snake_case)]
fn relative_xyz_to_lab(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn f(t: Float) -> Float {
        if t > EPSILON {
            t.cbrt()
        } else {
            KAPPA_SLOPE.mul_add(t, OFFSET)
        }
    }

    let [fx, fy, fz] = [f(value[0]), f(value[1]), f(value[2])];

    let L = fy.mul_add(116.0, -16.0);
    let a = 500.0 * (fx - fy);
    let b = 200.0 * (fy - fz);

    [L, a, b]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert 24-bit sRGB to CIE Lab.
///
/// This function is total: every 24-bit color has a Lab representation, with
/// lightness in `0..=100`.
pub(crate) fn rgb_to_lab(rgb: &[u8; 3]) -> [Float; 3] {
    let [r, g, b] = *rgb;
    let srgb = from_24bit(r, g, b);
    let linear = rgb_to_linear_rgb(&srgb);
    let xyz = linear_srgb_to_relative_xyz(&linear);
    relative_xyz_to_lab(&xyz)
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::assert_close_enough;

    #[test]
    fn test_linearization() {
        let [r, g, b] = rgb_to_linear_rgb(&[0.0, 0.04045, 1.0]);
        assert_close_enough!(r, 0.0);
        assert_close_enough!(g, 0.04045 / 12.92);
        assert_close_enough!(b, 1.0);

        let [half, ..] = rgb_to_linear_rgb(&[0.5, 0.0, 0.0]);
        assert!((half - 0.21404114).abs() < 1e-6, "{}", half);
    }

    #[test]
    fn test_black_and_white() {
        let [l, a, b] = rgb_to_lab(&[0, 0, 0]);
        assert_close_enough!(l, 0.0);
        assert_close_enough!(a, 0.0);
        assert_close_enough!(b, 0.0);

        // The four-digit matrix does not quite hit the white point.
        let [l, a, b] = rgb_to_lab(&[255, 255, 255]);
        assert!((l - 100.0).abs() < 1e-3, "{}", l);
        assert!(a.abs() < 2e-2, "{}", a);
        assert!(b.abs() < 2e-2, "{}", b);
    }

    #[test]
    fn test_primaries() {
        let cases: [([u8; 3], [Float; 3]); 3] = [
            ([255, 0, 0], [53.23288, 80.10931, 67.22007]),
            ([0, 255, 0], [87.73703, -86.18464, 83.18116]),
            ([0, 0, 255], [32.30259, 79.19666, -107.86368]),
        ];

        for (rgb, expected) in cases {
            let actual = rgb_to_lab(&rgb);
            for index in 0..3 {
                assert!(
                    (actual[index] - expected[index]).abs() < 1e-3,
                    "{:?} should convert to {:?} but is {:?}",
                    rgb,
                    expected,
                    actual
                );
            }
        }
    }

    #[test]
    fn test_gray_is_neutral() {
        for level in [1_u8, 17, 64, 128, 200, 254] {
            let [_, a, b] = rgb_to_lab(&[level, level, level]);
            assert!(a.abs() < 2e-2, "a for gray {} is {}", level, a);
            assert!(b.abs() < 2e-2, "b for gray {} is {}", level, b);
        }
    }
}
