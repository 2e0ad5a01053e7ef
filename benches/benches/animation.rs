//! Benchmark suite for animation playback and walkabout composition
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use tilesprite_benches::{anchored_animation, tree_size, walkabout_tree};

/// Benchmark advancing a single animation by typical frame deltas
fn bench_animation_advance(c: &mut Criterion) {
	let mut group = c.benchmark_group("animation_advance");

	for frames in [1, 8, 64, 512] {
		group.throughput(Throughput::Elements(1));
		group.bench_with_input(BenchmarkId::new("frames", frames), &frames, |b, &frames| {
			let mut animation = anchored_animation(frames);
			b.iter(|| {
				animation.advance(black_box(16));
				black_box(animation.active_frame_index())
			});
		});
	}

	group.finish();
}

/// Benchmark a large delta that wraps the clock every call
fn bench_animation_wrap(c: &mut Criterion) {
	let mut animation = anchored_animation(64);
	let total = animation.total_duration();

	c.bench_function("animation_wrap", |b| {
		b.iter(|| {
			animation.advance(black_box(total + 7));
			black_box(animation.elapsed_ms())
		});
	});
}

/// Benchmark ticking parent/child trees of increasing size
fn bench_walkabout_tick(c: &mut Criterion) {
	let mut group = c.benchmark_group("walkabout_tick");

	for (depth, fan_out) in [(1, 1), (1, 4), (2, 4), (3, 4)] {
		let nodes = tree_size(depth, fan_out);
		group.throughput(Throughput::Elements(nodes as u64));
		group.bench_with_input(
			BenchmarkId::new("nodes", nodes),
			&(depth, fan_out),
			|b, &(depth, fan_out)| {
				let mut tree = walkabout_tree(depth, fan_out, 8);
				b.iter(|| {
					tree.tick(black_box(16));
					black_box(tree.children().len())
				});
			},
		);
	}

	group.finish();
}

criterion_group!(benches, bench_animation_advance, bench_animation_wrap, bench_walkabout_tick);
criterion_main!(benches);
