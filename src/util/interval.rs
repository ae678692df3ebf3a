/// Inclusive range of global grid indices.
/// This is the one dimensional analogue of an axis aligned bounding box,
/// used to map from a rank's linear buffer to world coordinates.
#[derive(Hash, Debug, Copy, Clone, Eq, PartialEq)]
pub struct Interval {
    pub min: usize,
    pub max: usize,
}

impl std::fmt::Display for Interval {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> Result<(), std::fmt::Error> {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

impl Interval {
    /// Create an interval from inclusive corners.
    #[inline]
    pub fn new(min: usize, max: usize) -> Self {
        debug_assert!(min <= max, "invalid interval [{min}, {max}]");
        Interval { min, max }
    }

    /// Create the interval starting at `start` covering `len` points.
    /// `len` must be positive.
    pub fn from_len(start: usize, len: usize) -> Self {
        debug_assert!(len > 0);
        Interval::new(start, start + len - 1)
    }

    /// Return the number of coordinates contained in the instance.
    #[inline]
    pub fn buffer_size(&self) -> usize {
        self.max - self.min + 1
    }

    /// Return the coordinate in the instance for a given linear index.
    pub fn linear_to_coord(&self, index: usize) -> usize {
        debug_assert!(index < self.buffer_size());
        self.min + index
    }

    /// Half open range over the contained coordinates.
    pub fn range(&self) -> std::ops::Range<usize> {
        self.min..self.max + 1
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn buffer_size_test() {
        assert_eq!(Interval::new(0, 9).buffer_size(), 10);
        assert_eq!(Interval::new(4, 4).buffer_size(), 1);
        assert_eq!(Interval::from_len(12, 4), Interval::new(12, 15));
    }

    #[test]
    fn linear_coord_test() {
        let i = Interval::new(20, 29);
        assert_eq!(i.linear_to_coord(0), 20);
        assert_eq!(i.linear_to_coord(7), 27);
        assert_eq!(i.range(), 20..30);
        assert_eq!(format!("{i}"), "[20, 29]");
    }
}
