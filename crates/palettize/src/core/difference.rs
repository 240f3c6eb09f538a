use super::FloatExt;
use crate::Float;

/// Compute the hue angle in degrees for the given (primed) a and b.
#[inline]
fn hue_angle(a: Float, b: Float) -> Float {
    if a == 0.0 && b == 0.0 {
        0.0
    } else {
        let h = b.atan2(a).to_degrees();
        if h < 0.0 {
            h + 360.0
        } else {
            h
        }
    }
}

/// Compute the chroma compensation factor `sqrt(C⁷ / (C⁷ + 25⁷))`.
#[inline]
fn chroma_compensation(chroma: Float) -> Float {
    let c7 = chroma.powi(7);
    (c7 / (c7 + <Float as FloatExt>::TWENTY_FIVE_POW_SEVEN)).sqrt()
}

/// Compute Delta-E 2000 for two colors in CIE Lab.
///
/// This function implements CIEDE2000 with unit weighting factors. It follows
/// the formulation of the widely used `delta-e` package, which treats hue
/// differences as zero whenever either color has zero (unprimed) chroma and
/// always shifts the mean hue angle up when the hues are more than 180° apart.
/// The latter only affects the rotation term and stays well below rounding
/// for real colors.
#[allow(non_snake_case)]
pub(crate) fn delta_e_2000(coordinates1: &[Float; 3], coordinates2: &[Float; 3]) -> Float {
    let [L1, a1, b1] = *coordinates1;
    let [L2, a2, b2] = *coordinates2;

    let ΔL = L2 - L1;
    let L_bar = (L1 + L2) / 2.0;

    let C1 = a1.hypot(b1);
    let C2 = a2.hypot(b2);
    let C_bar = (C1 + C2) / 2.0;

    let G = 1.0 - chroma_compensation(C_bar);
    let a1_prime = (a1 / 2.0).mul_add(G, a1);
    let a2_prime = (a2 / 2.0).mul_add(G, a2);

    let C1_prime = a1_prime.hypot(b1);
    let C2_prime = a2_prime.hypot(b2);
    let C_bar_prime = (C1_prime + C2_prime) / 2.0;
    let ΔC_prime = C2_prime - C1_prime;

    let h1_prime = hue_angle(a1_prime, b1);
    let h2_prime = hue_angle(a2_prime, b2);
    let hue_distance = (h1_prime - h2_prime).abs();

    let Δh_prime = if C1 == 0.0 || C2 == 0.0 {
        0.0
    } else if hue_distance <= 180.0 {
        h2_prime - h1_prime
    } else if h2_prime <= h1_prime {
        h2_prime - h1_prime + 360.0
    } else {
        h2_prime - h1_prime - 360.0
    };
    let ΔH_prime = 2.0 * (C1_prime * C2_prime).sqrt() * (Δh_prime.to_radians() / 2.0).sin();

    let H_bar_prime = if hue_distance > 180.0 {
        (h1_prime + h2_prime + 360.0) / 2.0
    } else {
        (h1_prime + h2_prime) / 2.0
    };

    let cos = |degrees: Float| degrees.to_radians().cos();
    let T = cos(H_bar_prime.mul_add(4.0, -63.0)).mul_add(
        -0.20,
        cos(H_bar_prime.mul_add(3.0, 6.0)).mul_add(
            0.32,
            cos(2.0 * H_bar_prime).mul_add(0.24, cos(H_bar_prime - 30.0).mul_add(-0.17, 1.0)),
        ),
    );

    let L_bar50 = (L_bar - 50.0) * (L_bar - 50.0);
    let SL = (L_bar50 / (20.0 + L_bar50).sqrt()).mul_add(0.015, 1.0);
    let SC = C_bar_prime.mul_add(0.045, 1.0);
    let SH = (C_bar_prime * T).mul_add(0.015, 1.0);

    let Δθ = 60.0 * (-((H_bar_prime - 275.0) / 25.0).powi(2)).exp();
    let RT = -2.0 * chroma_compensation(C_bar_prime) * Δθ.to_radians().sin();

    let lightness = ΔL / SL;
    let chroma = ΔC_prime / SC;
    let hue = ΔH_prime / SH;

    lightness
        .mul_add(lightness, chroma.mul_add(chroma, hue.mul_add(hue, RT * chroma * hue)))
        .sqrt()
}

/// Find the candidate color closest to the origin.
///
/// This function compares the origin to every candidate color, computing the
/// distance metric with the given function, and returns the index of the
/// closest candidate color—or `None` if there are no candidates. Since only a
/// strictly smaller distance replaces the current best, the first of several
/// equidistant candidates wins.
pub(crate) fn find_closest<'c, C, F>(
    origin: &[Float; 3],
    candidates: C,
    mut compute_distance: F,
) -> Option<usize>
where
    C: IntoIterator<Item = &'c [Float; 3]>,
    F: FnMut(&[Float; 3], &[Float; 3]) -> Float,
{
    let mut min_distance = Float::INFINITY;
    let mut min_index = None;

    for (index, candidate) in candidates.into_iter().enumerate() {
        let distance = compute_distance(origin, candidate);
        if distance < min_distance {
            min_distance = distance;
            min_index = Some(index);
        }
    }

    min_index
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{delta_e_2000, find_closest};
    use crate::Float;

    // A few pairs from Sharma, Wu, and Dalal's CIEDE2000 test data.
    const SHARMA: [([Float; 3], [Float; 3], Float); 6] = [
        ([50.0, 2.6772, -79.7751], [50.0, 0.0, -82.7485], 2.0425),
        ([50.0, 3.1571, -77.2803], [50.0, 0.0, -82.7485], 2.8615),
        ([50.0, 2.5, 0.0], [50.0, 0.0, -2.5], 4.3065),
        ([50.0, -1.0, 2.0], [50.0, 0.0, 0.0], 2.3669),
        ([60.2574, -34.0099, 36.2677], [60.4626, -34.1751, 39.4387], 1.2644),
        ([2.0776, 0.0795, -1.135], [0.9033, -0.0636, -0.5514], 0.9082),
    ];

    #[test]
    fn test_delta_e_2000() {
        for (lab1, lab2, expected) in SHARMA {
            let actual = delta_e_2000(&lab1, &lab2);
            assert!(
                (actual - expected).abs() < 1e-4,
                "ΔE2000 of {:?} and {:?} should be {} but is {}",
                lab1,
                lab2,
                expected,
                actual
            );

            let reverse = delta_e_2000(&lab2, &lab1);
            assert!(
                (actual - reverse).abs() < 1e-6,
                "ΔE2000 should be symmetric: {} vs {}",
                actual,
                reverse
            );
        }
    }

    #[test]
    fn test_delta_e_2000_identity() {
        for lab in [[0.0, 0.0, 0.0], [53.2, 80.1, 67.2], [32.3, 79.2, -107.9]] {
            assert_eq!(delta_e_2000(&lab, &lab), 0.0);
        }
    }

    #[test]
    fn test_find_closest() {
        let candidates = [[10.0, 0.0, 0.0], [20.0, 0.0, 0.0], [30.0, 0.0, 0.0]];
        let distance = |c1: &[Float; 3], c2: &[Float; 3]| (c1[0] - c2[0]).abs();

        assert_eq!(find_closest(&[21.0, 0.0, 0.0], &candidates, distance), Some(1));
        assert_eq!(find_closest(&[99.0, 0.0, 0.0], &candidates, distance), Some(2));

        // Ties go to the first candidate.
        assert_eq!(find_closest(&[15.0, 0.0, 0.0], &candidates, distance), Some(0));
        assert_eq!(find_closest(&[25.0, 0.0, 0.0], &candidates, distance), Some(1));

        let empty: [[Float; 3]; 0] = [];
        assert_eq!(find_closest(&[0.0, 0.0, 0.0], &empty, distance), None);
    }
}
