use tilesprite::prelude::*;

use crate::assets::{gif, hat, knight, sidecar, write_bundle};

#[test_log::test]
fn test_only_bundle_answers_every_state() {
	let loader = hat(MemoryLoader::new());
	let mut hat = Walkabout::from_resource_with_defaults(&loader, "hat").unwrap();

	assert_eq!(hat.animations().len(), 1);
	let only = hat.animations().resolve(Action::Stand, Direction::South).unwrap();
	let walk_north = hat.animations().resolve(Action::Walk, Direction::North).unwrap();
	assert!(std::ptr::eq(only, walk_north));

	hat.set_active_state(Action::Walk, Direction::NorthEast).unwrap();
	assert_eq!(hat.size(), (6, 4));
}

#[test_log::test]
fn test_directional_bundle_from_directory() {
	let dir = tempfile::tempdir().unwrap();
	let memory = knight(MemoryLoader::new());
	write_bundle(&memory, dir.path(), "knight");
	std::fs::write(dir.path().join("knight").join("credits.txt"), "pixels by someone").unwrap();

	let loader = DirectoryLoader::new(dir.path());
	let mut knight = Walkabout::from_resource_with_defaults(&loader, "knight").unwrap();

	assert_eq!(knight.animations().len(), 8);
	assert!(!knight.animations().contains(Action::Walk, Direction::SouthWest));
	assert!(knight.set_active_state(Action::Walk, Direction::SouthWest).is_err());

	knight.set_active_state(Action::Walk, Direction::East).unwrap();
	assert_eq!(knight.active_animation().total_duration(), 450);
	assert_eq!(knight.size(), (16, 24));
}

#[test_log::test]
fn test_ordinal_directions_are_picked_up() {
	let loader = knight(MemoryLoader::new()).with_file("knight", "walk_north_east.gif", gif(16, 24, &[80]));
	let mut knight = Walkabout::from_resource_with_defaults(&loader, "knight").unwrap();

	knight.set_active_state(Action::Walk, Direction::NorthEast).unwrap();
	assert_eq!(knight.active_animation().total_duration(), 80);
	assert!(!knight.active_animation().has_anchors());
}

#[test_log::test]
fn test_anchor_table_extrapolates_last_entry() {
	let loader = knight(MemoryLoader::new())
		.with_file("knight", "walk_north.ini", sidecar(HEAD_ANCHOR, &[(0, 2), (1, 3)]));
	let knight = Walkabout::from_resource_with_defaults(&loader, "knight").unwrap();

	let walk_north = knight.animations().resolve(Action::Walk, Direction::North).unwrap();
	let table = walk_north.frames()[0].anchors().unwrap().table();
	assert_eq!(table.get(HEAD_ANCHOR, 2).unwrap(), Coordinate::new(1, 3));
	assert_eq!(walk_north.frames()[2].anchors().unwrap().get(HEAD_ANCHOR).unwrap(), Coordinate::new(1, 3));
}

#[test]
fn test_bundle_without_animations() {
	let loader = MemoryLoader::new().with_file("props", "only.ini", sidecar(HEAD_ANCHOR, &[(0, 0)]));
	let result = Walkabout::from_resource_with_defaults(&loader, "props");
	assert!(matches!(result, Err(WalkaboutError::BadWalkabout { .. })));
}

#[test]
fn test_missing_directory_bundle() {
	let dir = tempfile::tempdir().unwrap();
	let loader = DirectoryLoader::new(dir.path());
	let result = Walkabout::from_resource_with_defaults(&loader, "knight");
	assert!(matches!(result, Err(WalkaboutError::Resource(VfsError::BundleNotFound(_)))));
}

#[test]
fn test_config_from_toml() {
	let config = WalkaboutConfig::from_toml_str("zero_delay_frame_ms = 20").unwrap();
	let loader = MemoryLoader::new().with_file("spark", "only.gif", gif(2, 2, &[0, 0, 0]));

	let spark =
		Walkabout::from_resource(&loader, &GifFrameDecoder::from_config(&config), "spark", &config).unwrap();
	assert_eq!(spark.active_animation().total_duration(), 60);
	assert_eq!(spark.anchor_group(), HEAD_ANCHOR);
}
