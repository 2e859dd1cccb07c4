#![forbid(unsafe_code)]

//! Geometric primitives for addressing canvas cells.

use std::fmt;

/// A cell coordinate on a canvas.
///
/// `x` selects the row and `y` the column, so walking along `x` moves
/// vertically and walking along `y` moves horizontally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pos {
    /// Row index.
    pub x: usize,
    /// Column index.
    pub y: usize,
}

impl Pos {
    /// Create a new position.
    #[inline]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// The origin cell `(0, 0)`.
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Coordinate along the given axis.
    #[inline]
    pub const fn along(&self, axis: Axis) -> usize {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Copy of this position with the coordinate on `axis` replaced.
    #[inline]
    pub const fn with(self, axis: Axis, value: usize) -> Self {
        match axis {
            Axis::X => Self::new(value, self.y),
            Axis::Y => Self::new(self.x, value),
        }
    }

    /// Componentwise minimum and maximum of two positions.
    ///
    /// Each axis is ordered independently, so the result is the top-left and
    /// bottom-right corner of the box spanned by `self` and `other`.
    #[inline]
    pub fn normalized(self, other: Pos) -> (Pos, Pos) {
        (
            Pos::new(self.x.min(other.x), self.y.min(other.y)),
            Pos::new(self.x.max(other.x), self.y.max(other.y)),
        )
    }
}

impl From<(usize, usize)> for Pos {
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the two canvas axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Rows.
    X,
    /// Columns.
    Y,
}

impl Axis {
    /// Lowercase axis name for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
        }
    }
}

/// Configured size of one canvas dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Extent {
    /// A fixed number of cells, enforced on indexed access.
    Fixed(usize),
    /// No configured ceiling; the dimension grows to fit.
    #[default]
    Unbounded,
}

impl Extent {
    /// The fixed size, if any.
    #[inline]
    pub const fn fixed(self) -> Option<usize> {
        match self {
            Self::Fixed(n) => Some(n),
            Self::Unbounded => None,
        }
    }

    /// Whether `index` lies inside this extent. Always true when unbounded.
    #[inline]
    pub const fn admits(self, index: usize) -> bool {
        match self {
            Self::Fixed(n) => index < n,
            Self::Unbounded => true,
        }
    }

    /// Parse `unbounded` (or `none`, `inf`) or a cell count.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("unbounded")
            || value.eq_ignore_ascii_case("none")
            || value.eq_ignore_ascii_case("inf")
        {
            return Some(Self::Unbounded);
        }
        value.parse::<usize>().ok().map(Self::Fixed)
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(n) => write!(f, "{n}"),
            Self::Unbounded => f.write_str("unbounded"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Axis, Extent, Pos};

    #[test]
    fn pos_along_and_with() {
        let p = Pos::new(3, 7);
        assert_eq!(p.along(Axis::X), 3);
        assert_eq!(p.along(Axis::Y), 7);
        assert_eq!(p.with(Axis::X, 9), Pos::new(9, 7));
        assert_eq!(p.with(Axis::Y, 0), Pos::new(3, 0));
    }

    #[test]
    fn pos_normalized_orders_each_axis_independently() {
        let a = Pos::new(5, 1);
        let b = Pos::new(2, 8);
        assert_eq!(a.normalized(b), (Pos::new(2, 1), Pos::new(5, 8)));
        assert_eq!(b.normalized(a), (Pos::new(2, 1), Pos::new(5, 8)));
    }

    #[test]
    fn pos_from_tuple_and_display() {
        let p: Pos = (4, 2).into();
        assert_eq!(p, Pos::new(4, 2));
        assert_eq!(p.to_string(), "(4, 2)");
    }

    #[test]
    fn extent_admits() {
        assert!(Extent::Fixed(3).admits(2));
        assert!(!Extent::Fixed(3).admits(3));
        assert!(!Extent::Fixed(0).admits(0));
        assert!(Extent::Unbounded.admits(usize::MAX));
    }

    #[test]
    fn extent_parse() {
        assert_eq!(Extent::parse("128"), Some(Extent::Fixed(128)));
        assert_eq!(Extent::parse(" 0 "), Some(Extent::Fixed(0)));
        assert_eq!(Extent::parse("Unbounded"), Some(Extent::Unbounded));
        assert_eq!(Extent::parse("none"), Some(Extent::Unbounded));
        assert_eq!(Extent::parse("-1"), None);
        assert_eq!(Extent::parse("wide"), None);
    }

    #[test]
    fn extent_display_round_trips_through_parse() {
        for extent in [Extent::Fixed(42), Extent::Unbounded] {
            assert_eq!(Extent::parse(&extent.to_string()), Some(extent));
        }
    }

    #[test]
    fn extent_default_is_unbounded() {
        assert_eq!(Extent::default(), Extent::Unbounded);
        assert_eq!(Extent::Unbounded.fixed(), None);
        assert_eq!(Extent::Fixed(5).fixed(), Some(5));
    }
}
