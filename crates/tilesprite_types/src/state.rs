//! Action and facing direction, the two halves of a walkabout's state.
//!
//! Both enums use the lowercase names that appear in animation file names,
//! e.g. `walk_north.gif` or `stand_south_west.gif`.

use std::{fmt, str::FromStr};

/// Behavioral pose category of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(u8)]
pub enum Action {
	/// Standing still
	#[default]
	Stand = 0,
	/// Walking
	Walk = 1,
}

impl Action {
	/// Number of actions
	pub const COUNT: usize = 2;

	/// Every action, in index order
	pub const ALL: [Self; Self::COUNT] = [Self::Stand, Self::Walk];

	/// Returns the dense table index of this action.
	#[inline]
	pub fn index(self) -> usize {
		self as usize
	}

	/// Returns the name used in asset file names.
	pub fn name(self) -> &'static str {
		match self {
			Self::Stand => "stand",
			Self::Walk => "walk",
		}
	}

	/// Looks up an action by its asset file name component.
	pub fn from_name(name: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|action| action.name() == name)
	}
}

impl fmt::Display for Action {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Action {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::from_name(s).ok_or_else(|| format!("unknown action {s:?}"))
	}
}

/// Facing orientation.
///
/// The four cardinal directions are mandatory in a directional animation set;
/// the four ordinal directions are optional extras.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(u8)]
pub enum Direction {
	/// Up
	North = 0,
	/// Up and right
	NorthEast = 1,
	/// Right
	East = 2,
	/// Down and right
	SouthEast = 3,
	/// Down
	#[default]
	South = 4,
	/// Down and left
	SouthWest = 5,
	/// Left
	West = 6,
	/// Up and left
	NorthWest = 7,
}

impl Direction {
	/// Number of directions
	pub const COUNT: usize = 8;

	/// Every direction, clockwise from north
	pub const ALL: [Self; Self::COUNT] = [
		Self::North,
		Self::NorthEast,
		Self::East,
		Self::SouthEast,
		Self::South,
		Self::SouthWest,
		Self::West,
		Self::NorthWest,
	];

	/// The directions a directional animation set must cover
	pub const CARDINAL: [Self; 4] = [Self::North, Self::South, Self::East, Self::West];

	/// Returns the dense table index of this direction.
	#[inline]
	pub fn index(self) -> usize {
		self as usize
	}

	/// Returns true for north, south, east and west.
	pub fn is_cardinal(self) -> bool {
		matches!(self, Self::North | Self::South | Self::East | Self::West)
	}

	/// Returns the name used in asset file names.
	pub fn name(self) -> &'static str {
		match self {
			Self::North => "north",
			Self::NorthEast => "north_east",
			Self::East => "east",
			Self::SouthEast => "south_east",
			Self::South => "south",
			Self::SouthWest => "south_west",
			Self::West => "west",
			Self::NorthWest => "north_west",
		}
	}

	/// Looks up a direction by its asset file name component.
	pub fn from_name(name: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|direction| direction.name() == name)
	}

	/// Combines a vertical and a horizontal cardinal direction into an ordinal
	/// one, e.g. north + west = north west.
	///
	/// Returns `None` unless exactly one argument is vertical and the other
	/// horizontal.
	pub fn combine(self, other: Self) -> Option<Self> {
		let (vertical, horizontal) = match (self, other) {
			(v @ (Self::North | Self::South), h @ (Self::East | Self::West))
			| (h @ (Self::East | Self::West), v @ (Self::North | Self::South)) => (v, h),
			_ => return None,
		};

		Some(match (vertical, horizontal) {
			(Self::North, Self::East) => Self::NorthEast,
			(Self::North, _) => Self::NorthWest,
			(_, Self::East) => Self::SouthEast,
			_ => Self::SouthWest,
		})
	}
}

impl fmt::Display for Direction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Direction {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::from_name(s).ok_or_else(|| format!("unknown direction {s:?}"))
	}
}
