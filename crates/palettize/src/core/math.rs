/// Extension trait for floating point numbers.
pub(crate) trait FloatExt {
    /// The factor determining rounding precision.
    ///
    /// When limiting a floating point number's precision, the number is
    /// multiplied by some factor, rounded, and divided by the same factor
    /// again. Typically, that factor is a power of ten, which directly
    /// translates into significant digits after the decimal. Lab coordinates
    /// range up to about 100, hence the factors are a little more modest than
    /// for unit-range coordinates.
    const ROUNDING_FACTOR: Self;

    /// 25 to the 7th power, which CIEDE2000 uses for chroma compensation.
    const TWENTY_FIVE_POW_SEVEN: Self;
}

impl FloatExt for f64 {
    const ROUNDING_FACTOR: f64 = 1e9;
    const TWENTY_FIVE_POW_SEVEN: f64 = 6_103_515_625.0;
}

impl FloatExt for f32 {
    const ROUNDING_FACTOR: f32 = 1e3;
    const TWENTY_FIVE_POW_SEVEN: f32 = 6_103_515_625.0;
}

#[cfg(test)]
mod test {
    use super::FloatExt;

    #[test]
    fn test_constants() {
        assert_eq!(<f64 as FloatExt>::TWENTY_FIVE_POW_SEVEN, 25.0_f64.powi(7));
    }
}
