//! Statistical equivalence tests comparing the grouped quantiles
//! with naive reference implementations

use approx::relative_eq;
use loo_quantile::{
    column_quantile, loo_group_quantile, masked_group_quantile, ExecutionStrategy, GroupQuantile,
    Interpolation,
};
use ndarray::{Array2, Array3, ArrayD, Axis};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

// Import naive reference implementations
#[path = "../src/naive_reference.rs"]
mod naive_reference;

use naive_reference::NaiveQuantile;

/// Test parameters for equivalence testing
struct TestParams {
    /// Relative tolerance for comparing results
    rel_tolerance: f64,
    /// Absolute tolerance for near-zero values
    abs_tolerance: f64,
    /// Random seed for reproducibility
    seed: u64,
}

impl Default for TestParams {
    fn default() -> Self {
        Self {
            rel_tolerance: 1e-12,
            abs_tolerance: 1e-12,
            seed: 42,
        }
    }
}

/// Batch shapes (sims, obs, cols) with different group geometries
fn test_shapes() -> Vec<(&'static str, (usize, usize, usize))> {
    vec![
        ("tiny", (1, 3, 1)),
        ("single_column", (1, 25, 1)),
        ("wide", (1, 12, 9)),
        ("batched", (5, 30, 3)),
        ("many_sims", (40, 8, 2)),
        ("tall", (2, 200, 2)),
    ]
}

/// Normal scores plus a random mask that keeps roughly `keep` of the rows
fn generate_batch(
    shape: (usize, usize, usize),
    keep: f64,
    seed: u64,
) -> (Array3<f64>, Array3<bool>) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let normal = Normal::new(0.0, 1.0).unwrap();
    let data = Array3::from_shape_simple_fn(shape, || normal.sample(&mut rng));
    let mask = Array3::from_shape_simple_fn(shape, || rng.gen_bool(keep));
    (data, mask)
}

fn close(a: f64, b: f64, params: &TestParams) -> bool {
    (a.is_nan() && b.is_nan())
        || relative_eq!(
            a,
            b,
            epsilon = params.abs_tolerance,
            max_relative = params.rel_tolerance
        )
}

fn assert_all_close(actual: &ArrayD<f64>, expected: &ArrayD<f64>, context: &str) {
    let params = TestParams::default();
    assert_eq!(actual.shape(), expected.shape(), "shape mismatch for {context}");
    for (i, (&a, &e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert!(
            close(a, e, &params),
            "{context}: element {i} differs, optimized {a}, naive {e}"
        );
    }
}

/// Naive masked result reshaped the way the optimized output is
fn naive_masked_collapsed(naive: Array2<f64>) -> ArrayD<f64> {
    if naive.nrows() == 1 {
        naive.index_axis(Axis(0), 0).to_owned().into_dyn()
    } else {
        naive.into_dyn()
    }
}

#[test]
fn test_masked_quantile_equivalence() {
    let params = TestParams::default();
    let quantiles = [0.0, 0.1, 0.25, 0.5, 0.75, 0.9, 1.0, 0.123, 0.789];
    let modes = [
        (Interpolation::Linear, "linear"),
        (Interpolation::Lower, "lower"),
        (Interpolation::Upper, "upper"),
    ];

    for (i, (name, shape)) in test_shapes().into_iter().enumerate() {
        for &keep in &[1.0, 0.7, 0.3] {
            let (data, mask) = generate_batch(shape, keep, params.seed + i as u64);
            for &p in &quantiles {
                for &(mode, mode_name) in &modes {
                    let optimized = masked_group_quantile(
                        data.view().into_dyn(),
                        mask.view().into_dyn(),
                        p,
                        mode,
                    )
                    .unwrap();
                    let naive = naive_masked_collapsed(NaiveQuantile::masked(
                        data.view(),
                        mask.view(),
                        p,
                        mode_name,
                    ));
                    assert_all_close(
                        &optimized,
                        &naive,
                        &format!("{name} keep={keep} p={p} mode={mode_name}"),
                    );
                }
            }
        }
    }
}

#[test]
fn test_loo_quantile_equivalence() {
    let params = TestParams::default();
    let quantiles = [0.0, 0.05, 0.25, 0.5, 0.8, 0.95, 1.0, 0.456];

    for (i, (name, shape)) in test_shapes().into_iter().enumerate() {
        for &keep in &[1.0, 0.6, 0.2] {
            let (data, mask) = generate_batch(shape, keep, params.seed + 100 + i as u64);
            for &p in &quantiles {
                let optimized =
                    loo_group_quantile(data.view().into_dyn(), mask.view().into_dyn(), p).unwrap();
                let naive = NaiveQuantile::loo(data.view(), mask.view(), p).into_dyn();
                assert_all_close(&optimized, &naive, &format!("{name} keep={keep} p={p}"));
            }
        }
    }
}

/// Every held-out value equals the masked quantile with that one mask entry flipped
#[test]
fn test_loo_matches_masked_quantile_with_flipped_mask() {
    let params = TestParams::default();
    let (data, mask) = generate_batch((3, 15, 2), 0.8, params.seed);

    for &p in &[0.1, 0.5, 0.9] {
        let loo = loo_group_quantile(data.view().into_dyn(), mask.view().into_dyn(), p).unwrap();

        for ((s, o, c), &keep) in mask.indexed_iter() {
            if !keep {
                assert!(loo[[s, o, c]].is_nan());
                continue;
            }
            let mut flipped = mask.clone();
            flipped[[s, o, c]] = false;
            let expected = masked_group_quantile(
                data.view().into_dyn(),
                flipped.view().into_dyn(),
                p,
                Interpolation::Linear,
            )
            .unwrap();

            let actual = loo[[s, o, c]];
            let wanted = expected[[s, c]];
            assert!(
                close(actual, wanted, &params),
                "p={p} position ({s}, {o}, {c}): loo {actual}, recomputed {wanted}"
            );
        }
    }
}

#[test]
fn test_column_quantile_matches_unmasked_group_quantile() {
    let params = TestParams::default();
    for (i, &(rows, cols)) in [(1, 1), (2, 3), (17, 5), (100, 8)].iter().enumerate() {
        let (data, _) = generate_batch((1, rows, cols), 1.0, params.seed + i as u64);
        let table = data.index_axis(Axis(0), 0).to_owned();
        let mask = ArrayD::from_elem(table.shape(), true);

        for &p in &[0.0, 0.2, 0.5, 0.66, 1.0] {
            let quantiles = vec![p; cols];
            let by_column = column_quantile(table.view(), &quantiles).unwrap();
            let grouped = masked_group_quantile(
                table.view().into_dyn(),
                mask.view(),
                p,
                Interpolation::Linear,
            )
            .unwrap();

            // Both paths share the same arithmetic, so agreement is exact.
            assert_eq!(by_column.into_dyn(), grouped, "rows={rows} cols={cols} p={p}");
        }
    }
}

#[test]
fn test_parallel_strategy_equivalence() {
    let params = TestParams::default();
    let (data, mask) = generate_batch((16, 60, 4), 0.5, params.seed);
    let parallel = GroupQuantile::new().with_strategy(ExecutionStrategy::Parallel);
    assert!(parallel.strategy().is_parallel());

    let optimized = parallel
        .loo_quantile(data.view().into_dyn(), mask.view().into_dyn(), 0.9)
        .unwrap();
    let naive = NaiveQuantile::loo(data.view(), mask.view(), 0.9).into_dyn();
    assert_all_close(&optimized, &naive, "parallel loo");

    let optimized = parallel
        .quantile(data.view().into_dyn(), mask.view().into_dyn(), 0.9)
        .unwrap();
    let naive = NaiveQuantile::masked(data.view(), mask.view(), 0.9, "linear").into_dyn();
    assert_all_close(&optimized, &naive, "parallel masked");
}

#[test]
fn test_concrete_scenarios() {
    let table = ndarray::array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0], [7.0, 8.0]];
    let q = column_quantile(table.view(), &[0.5, 0.5]).unwrap();
    assert_eq!(q.to_vec(), vec![4.0, 5.0]);

    let values = ndarray::array![10.0, 20.0, 30.0, 40.0, 50.0].into_dyn();
    let mask = ndarray::array![true, true, true, true, true].into_dyn();
    let loo = loo_group_quantile(values.view(), mask.view(), 0.5).unwrap();
    assert_eq!(loo[[0]], 35.0);
    assert_eq!(loo[[2]], 30.0);
}
