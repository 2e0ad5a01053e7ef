//! Integer anchor coordinates and sub-pixel world positions.

use std::{
	fmt,
	ops::{Add, Sub},
	str::FromStr,
};

use crate::error::AnimError;

/// An integer `(x, y)` pair, used for anchor points and screen coordinates.
///
/// Coordinates compose by component-wise addition and subtraction, which is
/// all the anchor composition algorithm needs.
///
/// # Examples
///
/// ```
/// use tilesprite_types::Coordinate;
///
/// let a = Coordinate::new(4, 1);
/// let b = Coordinate::new(2, 0);
/// assert_eq!(a + b, Coordinate::new(6, 1));
/// assert_eq!(a - b, Coordinate::new(2, 1));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Coordinate {
	/// Horizontal component
	pub x: i32,
	/// Vertical component
	pub y: i32,
}

impl Coordinate {
	/// The origin, `(0, 0)`.
	pub const ZERO: Self = Self::new(0, 0);

	/// Creates a new coordinate.
	pub const fn new(x: i32, y: i32) -> Self {
		Self {
			x,
			y,
		}
	}

	/// Returns the coordinate as an `(x, y)` tuple.
	#[inline]
	pub fn as_tuple(&self) -> (i32, i32) {
		(self.x, self.y)
	}
}

impl Add for Coordinate {
	type Output = Self;

	fn add(self, rhs: Self) -> Self::Output {
		Self::new(self.x + rhs.x, self.y + rhs.y)
	}
}

impl Sub for Coordinate {
	type Output = Self;

	fn sub(self, rhs: Self) -> Self::Output {
		Self::new(self.x - rhs.x, self.y - rhs.y)
	}
}

impl From<(i32, i32)> for Coordinate {
	fn from((x, y): (i32, i32)) -> Self {
		Self::new(x, y)
	}
}

impl From<Coordinate> for (i32, i32) {
	fn from(value: Coordinate) -> Self {
		value.as_tuple()
	}
}

impl fmt::Display for Coordinate {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{},{}", self.x, self.y)
	}
}

/// Parses the literal `"x,y"` form used by anchor sidecar files.
impl FromStr for Coordinate {
	type Err = AnimError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let malformed = || AnimError::Config {
			reason: format!("malformed coordinate {s:?}, expected \"x,y\""),
		};

		let (x, y) = s.split_once(',').ok_or_else(malformed)?;
		let x = x.trim().parse::<i32>().map_err(|_| malformed())?;
		let y = y.trim().parse::<i32>().map_err(|_| malformed())?;

		Ok(Self::new(x, y))
	}
}

/// A sub-pixel world position.
///
/// Walkabouts keep their position in floating point so that movement can be
/// frame-rate independent; it only becomes a [`Coordinate`] when projected
/// onto the screen.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Position {
	/// Horizontal component
	pub x: f64,
	/// Vertical component
	pub y: f64,
}

impl Position {
	/// The world origin.
	pub const ORIGIN: Self = Self::new(0.0, 0.0);

	/// Creates a new position.
	pub const fn new(x: f64, y: f64) -> Self {
		Self {
			x,
			y,
		}
	}

	/// Projects the position onto the pixel grid, rounding down.
	pub fn floor(&self) -> Coordinate {
		Coordinate::new(self.x.floor() as i32, self.y.floor() as i32)
	}

	/// Returns this position relative to `origin`, snapped to the pixel grid.
	///
	/// Used to convert a world position into a screen position given the
	/// viewport's top-left corner.
	pub fn relative_to(&self, origin: Coordinate) -> Coordinate {
		(*self - origin).floor()
	}
}

impl Add<Coordinate> for Position {
	type Output = Self;

	fn add(self, rhs: Coordinate) -> Self::Output {
		Self::new(self.x + f64::from(rhs.x), self.y + f64::from(rhs.y))
	}
}

impl Sub<Coordinate> for Position {
	type Output = Self;

	fn sub(self, rhs: Coordinate) -> Self::Output {
		Self::new(self.x - f64::from(rhs.x), self.y - f64::from(rhs.y))
	}
}

impl From<Coordinate> for Position {
	fn from(value: Coordinate) -> Self {
		Self::new(f64::from(value.x), f64::from(value.y))
	}
}

impl From<(f64, f64)> for Position {
	fn from((x, y): (f64, f64)) -> Self {
		Self::new(x, y)
	}
}

impl fmt::Display for Position {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({:.2}, {:.2})", self.x, self.y)
	}
}
