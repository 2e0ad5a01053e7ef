use tilesprite::prelude::*;

use crate::assets::{hat, knight};

fn dressed_knight() -> Walkabout {
	let loader = hat(knight(MemoryLoader::new()));
	let hat = Walkabout::from_resource_with_defaults(&loader, "hat").unwrap();
	Walkabout::from_resource_with_defaults(&loader, "knight")
		.unwrap()
		.with_position(Position::new(10.0, 10.0))
		.with_child(hat)
}

#[test_log::test]
fn test_hat_rides_the_walk_cycle() {
	let mut knight = dressed_knight();
	knight.set_active_state(Action::Walk, Direction::North).unwrap();

	// frame 0: head at (8,2), brim at (1,1)
	knight.tick(0);
	assert_eq!(knight.children()[0].position(), Position::new(17.0, 11.0));

	// frame 1: head at (8,3)
	knight.tick(100);
	assert_eq!(knight.children()[0].position(), Position::new(17.0, 12.0));

	// frame 2 reuses the last authored anchor
	knight.tick(150);
	assert_eq!(knight.active_animation().active_frame_index(), 2);
	assert_eq!(knight.children()[0].position(), Position::new(17.0, 12.0));
}

#[test_log::test]
fn test_composition_invariant_while_moving() {
	let mut knight = dressed_knight();
	knight.set_active_state(Action::Walk, Direction::East).unwrap();

	let mut x = 10.0;
	for delta in [16, 17, 16, 33, 250, 16, 1000] {
		x += 0.75;
		knight.set_position(Position::new(x, 10.0));
		knight.tick(delta);

		let hat = &knight.children()[0];
		assert_eq!(
			hat.position() + hat.current_anchor().unwrap(),
			knight.position() + knight.current_anchor().unwrap()
		);
	}
}

#[test_log::test]
fn test_wraparound_keeps_animations_independent() {
	let mut knight = dressed_knight();

	// the hat's two 100ms frames wrap at 200ms
	knight.tick(250);
	let hat = &knight.children()[0];
	assert_eq!(hat.active_animation().elapsed_ms(), 50);
	assert_eq!(hat.active_animation().active_frame_index(), 0);
	assert_eq!(knight.active_animation().elapsed_ms(), 250);
}

#[test_log::test]
fn test_screen_position_follows_viewport() {
	let mut knight = dressed_knight();
	knight.tick(0);

	let viewport = Coordinate::new(4, 8);
	assert_eq!(knight.current_screen_position(viewport), Coordinate::new(6, 2));
	assert_eq!(knight.children()[0].current_screen_position(viewport), Coordinate::new(13, 3));
}

#[test_log::test]
fn test_bare_parent_leaves_children_alone() {
	let loader = hat(MemoryLoader::new()).with_file("rock", "only.gif", crate::assets::gif(8, 8, &[100]));
	let hat = Walkabout::from_resource_with_defaults(&loader, "hat")
		.unwrap()
		.with_position(Position::new(-3.0, 2.5));
	let mut rock = Walkabout::from_resource_with_defaults(&loader, "rock").unwrap().with_child(hat);

	rock.tick(120);
	let hat = &rock.children()[0];
	assert_eq!(hat.position(), Position::new(-3.0, 2.5));
	assert_eq!(hat.active_animation().active_frame_index(), 1);
}
