//! In-memory asset builders shared by the walkabout tests.

use std::{fs, path::Path};

use image::{Delay, Frame, Rgba, RgbaImage, codecs::gif::GifEncoder};
use tilesprite::prelude::*;

/// Encodes a GIF of `width`×`height` frames with the given delays.
pub fn gif(width: u32, height: u32, durations: &[u32]) -> Vec<u8> {
	let mut bytes = Vec::new();
	{
		let mut encoder = GifEncoder::new(&mut bytes);
		for (i, ms) in durations.iter().enumerate() {
			let shade = u8::try_from(i * 30 % 256).unwrap();
			let image = RgbaImage::from_pixel(width, height, Rgba([shade, 64, 128, 255]));
			encoder.encode_frame(Frame::from_parts(image, 0, 0, Delay::from_numer_denom_ms(*ms, 1))).unwrap();
		}
	}
	bytes
}

/// Anchor sidecar text for one group.
pub fn sidecar(group: &str, anchors: &[(i32, i32)]) -> String {
	let mut text = format!("[{group}]\n");
	for (index, (x, y)) in anchors.iter().enumerate() {
		text.push_str(&format!("{index}={x},{y}\n"));
	}
	text
}

/// A knight that stands still and walks with a bobbing head.
pub fn knight(loader: MemoryLoader) -> MemoryLoader {
	let mut loader = loader;
	for action in Action::ALL {
		for direction in Direction::CARDINAL {
			let stem = format!("{action}_{direction}");
			let (frames, anchors) = match action {
				Action::Stand => (vec![500], vec![(8, 2)]),
				Action::Walk => (vec![100, 150, 200], vec![(8, 2), (8, 3)]),
			};
			loader.insert_file("knight", format!("{stem}.gif"), gif(16, 24, &frames));
			loader.insert_file("knight", format!("{stem}.ini"), sidecar(HEAD_ANCHOR, &anchors));
		}
	}
	loader
}

/// A hat whose brim sits one pixel in from its corner.
pub fn hat(loader: MemoryLoader) -> MemoryLoader {
	loader
		.with_file("hat", "only.gif", gif(6, 4, &[100, 100]))
		.with_file("hat", "only.ini", sidecar(HEAD_ANCHOR, &[(1, 1)]))
}

/// Writes every file of `bundle` in `loader` under `root/bundle`.
pub fn write_bundle(loader: &MemoryLoader, root: &Path, bundle: &str) {
	let dir = root.join(bundle);
	fs::create_dir_all(&dir).unwrap();
	for file in loader.list_files(bundle).unwrap() {
		fs::write(dir.join(&file), loader.read_binary(bundle, &file).unwrap()).unwrap();
	}
}
