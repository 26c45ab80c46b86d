//! Benchmark suite for the compiled morphology kernels.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use std::hint::black_box;

use bitmorph_benches::speckle_image;
use bitmorph_dwa::pix_fmorphop_gen_1;
use bitmorph_types::morph::MorphOp;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

/// Dilation and erosion throughput across sel shapes on a 1024 x 1024
/// speckle image.
fn bench_morph_ops(c: &mut Criterion) {
	let mut group = c.benchmark_group("dwa_morph");
	let pixs = speckle_image(1024, 1024, 42);
	let pixels = u64::from(pixs.width()) * u64::from(pixs.height());
	group.throughput(Throughput::Elements(pixels));

	for sel in ["sel_1", "sel_5h", "sel_5v", "sel_3x3"] {
		group.bench_with_input(BenchmarkId::new("dilate", sel), &sel, |b, sel| {
			b.iter(|| {
				let out = pix_fmorphop_gen_1(None, black_box(&pixs), MorphOp::Dilate, sel);
				black_box(out)
			});
		});
		group.bench_with_input(BenchmarkId::new("erode", sel), &sel, |b, sel| {
			b.iter(|| {
				let out = pix_fmorphop_gen_1(None, black_box(&pixs), MorphOp::Erode, sel);
				black_box(out)
			});
		});
	}

	group.finish();
}

criterion_group!(benches, bench_morph_ops);
criterion_main!(benches);
