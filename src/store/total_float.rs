use std::cmp::Ordering;

/// A wrapper around f64 that provides total ordering.
///
/// Standard f64 does not implement `Ord` or `Eq` due to NaN values and signed
/// zeros. This wrapper compares with `total_cmp` so similarity scores can key
/// a sorted structure. The candidate store never stores non-finite values
/// (they are rejected on insertion), but the ordering is total regardless.
#[derive(Debug, Copy, Clone)]
#[repr(transparent)]
pub struct TotalF64(pub f64);

impl PartialEq for TotalF64 {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for TotalF64 {}

impl PartialOrd for TotalF64 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TotalF64 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl From<f64> for TotalF64 {
    fn from(x: f64) -> Self {
        TotalF64(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality() {
        assert_eq!(TotalF64(0.5), TotalF64(0.5));
        assert_ne!(TotalF64(0.5), TotalF64(0.9));
    }

    #[test]
    fn test_ordering() {
        let a = TotalF64(0.1);
        let b = TotalF64(0.2);
        let c = TotalF64(0.9);

        assert!(a < b);
        assert!(b < c);
        assert!(c > a);
    }

    #[test]
    fn test_ordering_with_negative() {
        assert!(TotalF64(-1.0) < TotalF64(0.0));
        assert!(TotalF64(0.0) < TotalF64(1.0));
    }

    #[test]
    fn test_nan_sorts_last() {
        let mut values = [
            TotalF64(f64::NAN),
            TotalF64(0.3),
            TotalF64(f64::NEG_INFINITY),
            TotalF64(f64::INFINITY),
            TotalF64(0.0),
        ];
        values.sort();
        assert_eq!(values[0], TotalF64(f64::NEG_INFINITY));
        assert_eq!(values[1], TotalF64(0.0));
        assert_eq!(values[2], TotalF64(0.3));
        assert_eq!(values[3], TotalF64(f64::INFINITY));
        assert!(values[4].0.is_nan());
    }

    #[test]
    fn test_from_f64() {
        let f = 0.75f64;
        let total: TotalF64 = f.into();
        assert_eq!(total.0, f);
    }
}
