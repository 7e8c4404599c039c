use std::{
    cmp::Ordering,
    fmt,
    ops::{Add, Sub},
};

/// A cell coordinate, `x` growing to the right and `y` growing downwards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos2 {
    pub x: i32,
    pub y: i32,
}
impl Pos2 {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
    #[inline]
    pub const fn zero() -> Self {
        Self::new(0, 0)
    }
}
impl Default for Pos2 {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}
impl PartialOrd for Pos2 {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Pos2 {
    /// Row-major order, the same order the grid stores its cells in
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        Ord::cmp(&self.y, &other.y).then(Ord::cmp(&self.x, &other.x))
    }
}
impl Add for Pos2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}
impl Sub for Pos2 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}
impl fmt::Display for Pos2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_by_row_then_column() {
        let mut cells = vec![Pos2::new(3, 1), Pos2::new(0, 2), Pos2::new(1, 1)];
        cells.sort();

        assert_eq!(cells, vec![Pos2::new(1, 1), Pos2::new(3, 1), Pos2::new(0, 2)]);
    }

    #[test]
    fn arithmetic_is_componentwise() {
        let a = Pos2::new(4, -2);
        let b = Pos2::new(1, 3);

        assert_eq!(a + b, Pos2::new(5, 1));
        assert_eq!(a - b, Pos2::new(3, -5));
    }
}
