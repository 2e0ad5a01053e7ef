//! Per-frame anchor points.
//!
//! An anchor is a named pixel coordinate on a frame, such as the top of a
//! character's head. Lining up the anchor of one sprite with the anchor of
//! another pins them together regardless of how each animation is timed.
//!
//! # Sidecar Format
//!
//! Anchors are authored in an INI sidecar that shares the animation's base
//! name. Each section is an anchor group, each key a zero-based frame index
//! and each value a literal `x,y` pair:
//!
//! ```text
//! [head_anchor]
//! 0=0,2
//! 1=1,3
//! ```
//!
//! Authors may define fewer entries than the animation has frames; lookups
//! past the end of a group return its last entry.

use std::{collections::BTreeMap, fmt, sync::Arc};

use crate::{error::AnimError, geometry::Coordinate};

/// Anchor group used to pin hats, decals and other children to a parent
pub const HEAD_ANCHOR: &str = "head_anchor";

/// Anchor coordinates of one animation, grouped by label and indexed by frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnchorTable {
	/// Group label to dense per-frame coordinates, never empty
	groups: BTreeMap<String, Vec<Coordinate>>,
}

impl AnchorTable {
	/// Creates an empty table.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a table from already ordered coordinate lists.
	///
	/// # Errors
	///
	/// Returns [`AnimError::Config`] if any group has no coordinates.
	pub fn from_groups<I, S>(groups: I) -> Result<Self, AnimError>
	where
		I: IntoIterator<Item = (S, Vec<Coordinate>)>,
		S: Into<String>,
	{
		let mut table = Self::new();
		for (label, coordinates) in groups {
			table.insert_group(label, coordinates)?;
		}
		Ok(table)
	}

	/// Builds a table from sidecar sections of `frame index => "x,y"` pairs.
	///
	/// Entries are ordered by their numeric frame index, so the order in which
	/// a section lists them does not matter.
	///
	/// # Errors
	///
	/// Returns [`AnimError::Config`] if:
	/// - a key is not a non-negative integer
	/// - a value is not an `x,y` pair
	/// - a section is empty
	/// - the indices of a section are not exactly `0..n`
	pub fn from_sections<'a, I, S>(sections: I) -> Result<Self, AnimError>
	where
		I: IntoIterator<Item = (&'a str, S)>,
		S: IntoIterator<Item = (&'a str, &'a str)>,
	{
		let mut table = Self::new();

		for (label, entries) in sections {
			let mut indexed = Vec::new();
			for (key, value) in entries {
				let index = key.trim().parse::<usize>().map_err(|_| AnimError::Config {
					reason: format!("anchor group [{label}] has non-numeric frame index {key:?}"),
				})?;
				let coordinate = value.parse::<Coordinate>().map_err(|e| AnimError::Config {
					reason: format!("anchor group [{label}] frame {index}: {e}"),
				})?;
				indexed.push((index, coordinate));
			}

			indexed.sort_by_key(|(index, _)| *index);

			for (expected, (index, _)) in indexed.iter().enumerate() {
				if *index != expected {
					return Err(AnimError::Config {
						reason: format!(
							"anchor group [{label}] is not dense: expected frame {expected}, found {index}"
						),
					});
				}
			}

			table.insert_group(label, indexed.into_iter().map(|(_, c)| c).collect())?;
		}

		Ok(table)
	}

	/// Adds or replaces a group.
	///
	/// # Errors
	///
	/// Returns [`AnimError::Config`] if `coordinates` is empty.
	pub fn insert_group(
		&mut self,
		label: impl Into<String>,
		coordinates: Vec<Coordinate>,
	) -> Result<(), AnimError> {
		let label = label.into();
		if coordinates.is_empty() {
			return Err(AnimError::Config {
				reason: format!("anchor group [{label}] has no entries"),
			});
		}
		self.groups.insert(label, coordinates);
		Ok(())
	}

	/// Returns the anchor of `group` for `frame_index`.
	///
	/// If the group defines fewer entries than `frame_index + 1`, the last
	/// defined entry is returned.
	///
	/// # Errors
	///
	/// Returns [`AnimError::UnknownAnchorGroup`] if the group does not exist.
	pub fn get(&self, group: &str, frame_index: usize) -> Result<Coordinate, AnimError> {
		let coordinates = self
			.groups
			.get(group)
			.ok_or_else(|| AnimError::UnknownAnchorGroup(group.to_string()))?;

		// groups are never empty, see insert_group
		let clamped = frame_index.min(coordinates.len() - 1);
		Ok(coordinates[clamped])
	}

	/// Returns true if the table defines `group`.
	pub fn contains_group(&self, group: &str) -> bool {
		self.groups.contains_key(group)
	}

	/// Returns the number of entries authored for `group`.
	pub fn len_of(&self, group: &str) -> Option<usize> {
		self.groups.get(group).map(Vec::len)
	}

	/// Returns the group labels in sorted order.
	pub fn groups(&self) -> impl Iterator<Item = &str> {
		self.groups.keys().map(String::as_str)
	}

	/// Returns true if no groups are defined.
	pub fn is_empty(&self) -> bool {
		self.groups.is_empty()
	}
}

/// The anchors of a single frame: a view of one row of a shared
/// [`AnchorTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameAnchors {
	table: Arc<AnchorTable>,
	frame_index: usize,
}

impl FrameAnchors {
	/// Creates the row view for `frame_index`.
	pub fn new(table: Arc<AnchorTable>, frame_index: usize) -> Self {
		Self {
			table,
			frame_index,
		}
	}

	/// Returns the anchor of `group` for this frame.
	///
	/// # Errors
	///
	/// Returns [`AnimError::UnknownAnchorGroup`] if the group does not exist.
	pub fn get(&self, group: &str) -> Result<Coordinate, AnimError> {
		self.table.get(group, self.frame_index)
	}

	/// Returns the frame index this row belongs to.
	pub fn frame_index(&self) -> usize {
		self.frame_index
	}

	/// Returns the table backing this row.
	pub fn table(&self) -> &Arc<AnchorTable> {
		&self.table
	}
}

impl fmt::Display for FrameAnchors {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "frame {}:", self.frame_index)?;
		for group in self.table.groups() {
			if let Ok(anchor) = self.get(group) {
				write!(f, " {group}=({anchor})")?;
			}
		}
		Ok(())
	}
}
