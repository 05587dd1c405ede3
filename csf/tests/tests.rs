#[cfg(test)]
mod tests {
    use std::path::Path;

    use itertools::Itertools;
    use rand::SeedableRng;
    use rand::prelude::SmallRng;
    use test_case::test_case;

    use csf::io;
    use csf::io::svg_util::SvgDrawOptions;
    use csf::samplers::{SizeSampler, SizeSamplerConfig};
    use cumulus::geometry::geo_traits::{CollidesWith, DistanceTo};
    use cumulus::geometry::primitives::{Point, Rect, Size};
    use cumulus::layout::{CloudLayouter, PlacementError};
    use cumulus::util::{LayoutConfig, SpiralConfig};

    const N_RECTS: usize = 200;
    const DEFAULT_SIZE: Size = Size::new(30, 20);

    // At least half of the bounding box must be covered by rectangles
    const MIN_DENSITY: f64 = 0.5;

    // The cloud should come out as a disc, not an oval
    const MIN_ASPECT_RATIO: f64 = 0.75;
    const MAX_ASPECT_RATIO: f64 = 1.25;

    // The cloud center must not drift more than 20% of the cloud size off the anchor
    const MAX_CENTER_OFFSET_RATIO: f64 = 0.2;

    const FAILURE_FOLDER: &str = "../target/cloud_failures";

    fn place_uniform(layouter: &mut CloudLayouter, n: usize, size: Size) -> Vec<Rect> {
        (0..n)
            .map(|_| layouter.place_next(size).expect("placement failed"))
            .collect()
    }

    fn bounding_rect(rects: &[Rect]) -> Rect {
        rects
            .iter()
            .copied()
            .reduce(Rect::bounding_rect)
            .expect("no rectangles placed")
    }

    fn pairwise_disjoint(rects: &[Rect]) -> bool {
        rects
            .iter()
            .tuple_combinations()
            .all(|(a, b)| !a.collides_with(b))
    }

    /// On failure, dumps the cloud to an SVG for inspection before panicking.
    fn assert_cloud(layouter: &CloudLayouter, condition: bool, msg: &str) {
        if !condition {
            let path = io::write_failure_svg(
                layouter.placed(),
                layouter.anchor(),
                SvgDrawOptions::default(),
                Path::new(FAILURE_FOLDER),
            )
            .expect("could not visualize the failing cloud");
            panic!("{msg}, cloud visualized at {path:?}");
        }
    }

    #[test_case(Point(0, 0); "origin")]
    #[test_case(Point(640, 512); "positive anchor")]
    #[test_case(Point(-100, 77); "negative anchor")]
    fn first_rectangle_is_centered_on_the_anchor(anchor: Point) {
        let mut layouter = CloudLayouter::new(anchor, LayoutConfig::default());
        let rect = layouter.place_next(DEFAULT_SIZE).unwrap();
        assert_eq!(rect.center(), anchor);
    }

    #[test_case(DEFAULT_SIZE; "default size")]
    #[test_case(Size::new(1, 1); "unit size")]
    #[test_case(Size::new(7, 31); "odd tall size")]
    fn many_rectangles_do_not_intersect(size: Size) {
        let mut layouter = CloudLayouter::new(Point(0, 0), LayoutConfig::default());
        let rects = place_uniform(&mut layouter, N_RECTS, size);

        assert_eq!(rects.len(), N_RECTS);
        assert_cloud(&layouter, pairwise_disjoint(&rects), "rectangles intersect");
    }

    #[test]
    fn bounding_box_contains_the_anchor() {
        let anchor = Point(250, -125);
        let mut layouter = CloudLayouter::new(anchor, LayoutConfig::default());
        let rects = place_uniform(&mut layouter, N_RECTS, DEFAULT_SIZE);

        let bbox = bounding_rect(&rects);
        assert_cloud(
            &layouter,
            bbox.collides_with(&anchor),
            "anchor outside the bounding box",
        );
    }

    #[test]
    fn cloud_is_dense() {
        let mut layouter = CloudLayouter::new(Point(0, 0), LayoutConfig::default());
        let rects = place_uniform(&mut layouter, N_RECTS, DEFAULT_SIZE);

        let covered: i64 = rects.iter().map(|rect| rect.area()).sum();
        let density = covered as f64 / bounding_rect(&rects).area() as f64;
        assert_cloud(
            &layouter,
            density > MIN_DENSITY,
            &format!("density {density:.3} below {MIN_DENSITY}"),
        );
    }

    #[test]
    fn cloud_is_roughly_circular() {
        let mut layouter = CloudLayouter::new(Point(0, 0), LayoutConfig::default());
        let rects = place_uniform(&mut layouter, N_RECTS, DEFAULT_SIZE);

        let bbox = bounding_rect(&rects);
        let aspect_ratio = bbox.width() as f64 / bbox.height() as f64;
        assert_cloud(
            &layouter,
            (MIN_ASPECT_RATIO..=MAX_ASPECT_RATIO).contains(&aspect_ratio),
            &format!("aspect ratio {aspect_ratio:.3} outside the band"),
        );
    }

    #[test]
    fn cloud_center_stays_near_the_anchor() {
        let anchor = Point(0, 0);
        let mut layouter = CloudLayouter::new(anchor, LayoutConfig::default());
        let rects = place_uniform(&mut layouter, N_RECTS, DEFAULT_SIZE);

        let bbox = bounding_rect(&rects);
        let offset = bbox.center().distance_to(&anchor);
        let max_dimension = i32::max(bbox.width(), bbox.height()) as f64;
        let offset_ratio = offset / max_dimension;
        assert_cloud(
            &layouter,
            offset_ratio <= MAX_CENTER_OFFSET_RATIO,
            &format!("center offset ratio {offset_ratio:.3} too large"),
        );
    }

    #[test]
    fn replay_of_the_same_sizes_is_deterministic() {
        let sampler = SizeSampler::from_config(SizeSamplerConfig::Uniform {
            width: (20, 60),
            height: (15, 40),
        })
        .unwrap();
        let mut rng = SmallRng::seed_from_u64(42);
        let sizes: Vec<Size> = (0..N_RECTS).map(|_| sampler.sample(&mut rng)).collect();

        let place_all = |sizes: &[Size]| {
            let mut layouter = CloudLayouter::new(Point(0, 0), LayoutConfig::default());
            sizes
                .iter()
                .map(|&size| layouter.place_next(size).unwrap())
                .collect::<Vec<_>>()
        };

        assert_eq!(place_all(&sizes), place_all(&sizes));
    }

    #[test]
    fn mixed_sizes_stay_disjoint_around_the_anchor() {
        let anchor = Point(-50, 90);
        let sampler = SizeSampler::from_config(SizeSamplerConfig::Zipf {
            small: (8, 5),
            large: (90, 60),
            n_ranks: 20,
            exponent: 1.1,
        })
        .unwrap();
        let mut rng = SmallRng::seed_from_u64(7);
        let mut layouter = CloudLayouter::new(anchor, LayoutConfig::default());
        for _ in 0..N_RECTS {
            let size = sampler.sample(&mut rng);
            layouter.place_next(size).unwrap();
        }

        assert_cloud(
            &layouter,
            pairwise_disjoint(layouter.placed()),
            "rectangles intersect",
        );
        let bbox = bounding_rect(layouter.placed());
        assert_cloud(
            &layouter,
            bbox.collides_with(&anchor),
            "anchor outside the bounding box",
        );
    }

    #[test]
    fn unit_rectangles_pack_tightly() {
        let anchor = Point(3, -8);
        let mut layouter = CloudLayouter::new(anchor, LayoutConfig::default());
        let rects = place_uniform(&mut layouter, 300, Size::new(1, 1));

        assert_eq!(rects[0].center(), anchor);
        assert_cloud(&layouter, pairwise_disjoint(&rects), "rectangles intersect");

        let covered: i64 = rects.iter().map(|rect| rect.area()).sum();
        let density = covered as f64 / bounding_rect(&rects).area() as f64;
        assert_cloud(
            &layouter,
            density > MIN_DENSITY,
            &format!("density {density:.3} below {MIN_DENSITY}"),
        );
    }

    #[test]
    fn invalid_sizes_fail_without_changing_the_cloud() {
        let mut layouter = CloudLayouter::new(Point(0, 0), LayoutConfig::default());
        place_uniform(&mut layouter, 10, DEFAULT_SIZE);
        let count_before = layouter.placed().len();

        for size in [Size::new(0, 20), Size::new(30, -1)] {
            let err = layouter.place_next(size).unwrap_err();
            assert!(matches!(err, PlacementError::InvalidSize { .. }));
            assert_eq!(layouter.placed().len(), count_before);
        }
    }

    #[test]
    fn degenerate_spiral_fails_without_changing_the_cloud() {
        let config = LayoutConfig {
            spiral: SpiralConfig {
                expansion_rate: 0.0,
                ..SpiralConfig::default()
            },
            max_probes_per_rect: 10_000,
        };
        let mut layouter = CloudLayouter::new(Point(0, 0), config);
        layouter.place_next(DEFAULT_SIZE).unwrap();

        let err = layouter.place_next(DEFAULT_SIZE).unwrap_err();
        assert!(matches!(err, PlacementError::PlacementExhausted { .. }));
        assert_eq!(layouter.placed().len(), 1);
    }
}
