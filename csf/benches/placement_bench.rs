use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::prelude::SmallRng;

use csf::samplers::{SizeSampler, SizeSamplerConfig};
use cumulus::geometry::primitives::{Point, Size};
use cumulus::layout::CloudLayouter;
use cumulus::util::LayoutConfig;

criterion_main!(benches);
criterion_group!(benches, fixed_size_bench, mixed_size_bench);

const CLOUD_SIZES: [usize; 3] = [50, 200, 500];

/// Benchmark a full layout session with homogeneous rectangle sizes
fn fixed_size_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("place_fixed_30x20");
    for n in CLOUD_SIZES {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let mut layouter = CloudLayouter::new(Point(0, 0), LayoutConfig::default());
                for _ in 0..n {
                    layouter.place_next(Size::new(30, 20)).unwrap();
                }
                layouter.placed().len()
            })
        });
    }
    group.finish();
}

/// Benchmark a full layout session with uniformly sampled rectangle sizes
fn mixed_size_bench(c: &mut Criterion) {
    let sampler = SizeSampler::from_config(SizeSamplerConfig::Uniform {
        width: (20, 60),
        height: (15, 40),
    })
    .unwrap();

    let mut group = c.benchmark_group("place_mixed_uniform");
    for n in CLOUD_SIZES {
        let mut rng = SmallRng::seed_from_u64(0);
        let sizes: Vec<Size> = (0..n).map(|_| sampler.sample(&mut rng)).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &sizes, |b, sizes| {
            b.iter(|| {
                let mut layouter = CloudLayouter::new(Point(0, 0), LayoutConfig::default());
                for &size in sizes {
                    layouter.place_next(size).unwrap();
                }
                layouter.placed().len()
            })
        });
    }
    group.finish();
}
