/// Rounds `x` to `decimal_places` decimals, halves away from zero.
///
/// Published fixings and index levels use commercial rounding, not the
/// banker's rounding of IEEE `round_ties_even`.
pub fn round(x: f64, decimal_places: u32) -> f64 {
    let (pow1, pow2) = if decimal_places > 22 {
        (10f64.powi((decimal_places - 22) as i32), 1e22)
    } else {
        (10f64.powi(decimal_places as i32), 1.0)
    };

    ((x * pow1) * pow2).round() / pow2 / pow1
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_half_away_from_zero() {
        assert_eq!(round(2.5, 0), 3.0);
        assert_eq!(round(-2.5, 0), -3.0);
        assert_eq!(round(0.125, 2), 0.13);
        assert_abs_diff_eq!(round(1.000343654622761, 8), 1.00034365, epsilon = 1e-15);
        assert_abs_diff_eq!(round(1.8012345, 4), 1.8012, epsilon = 1e-15);
    }

    #[test]
    fn test_idempotence() {
        let values = [1.000343654622761, 0.018, -2.345678901234, 123.456789, 1e-9];
        for n in 0..=15 {
            for x in values {
                let once = round(x, n);
                assert_eq!(round(once, n), once, "x = {}, n = {}", x, n);
            }
        }
    }
}
