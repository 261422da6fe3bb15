//! Property-based tests for Kruskal tensor reconstruction
//!
//! These tests use proptest to check the algebraic identities tying the
//! full, unfolded and vectorised reconstructions together.

#[cfg(test)]
mod tests {
    use crate::{kruskal_to_tensor, kruskal_to_unfolded, kruskal_to_vec, KruskalTensor};
    use ktensor_core::DenseND;
    use proptest::prelude::*;
    use scirs2_core::ndarray_ext::{Array1, Array2};

    fn proptest_config() -> ProptestConfig {
        ProptestConfig {
            cases: 64,
            ..ProptestConfig::default()
        }
    }

    /// Factor lists with 1-4 modes of extent 1-4 and rank 1-3
    fn factors_strategy() -> impl Strategy<Value = Vec<Array2<f64>>> {
        (prop::collection::vec(1usize..5, 1..=4), 1usize..4).prop_flat_map(|(dims, rank)| {
            dims.into_iter()
                .map(|d| {
                    prop::collection::vec(-3.0f64..3.0, d * rank).prop_map(move |values| {
                        Array2::from_shape_vec((d, rank), values).unwrap()
                    })
                })
                .collect::<Vec<_>>()
        })
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * (1.0 + a.abs().max(b.abs()))
    }

    // The factor-only norm goes through a square root of a sum of Gram terms
    fn norm_close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-6 * (1.0 + b)
    }

    proptest! {
        #![proptest_config(proptest_config())]

        #[test]
        fn unfolded_equals_unfolding_of_full(factors in factors_strategy()) {
            let tensor = kruskal_to_tensor(&factors, None, None).unwrap();

            for mode in 0..factors.len() {
                let unfolded = kruskal_to_unfolded(&factors, mode).unwrap();
                let reference = tensor.unfold(mode).unwrap();
                prop_assert_eq!(unfolded.shape(), reference.shape());
                for (a, b) in unfolded.iter().zip(reference.iter()) {
                    prop_assert!(close(*a, *b), "{} vs {}", a, b);
                }
            }
        }

        #[test]
        fn vec_equals_flattened_full(factors in factors_strategy()) {
            let tensor = kruskal_to_tensor(&factors, None, None).unwrap();
            let vec = kruskal_to_vec(&factors).unwrap();
            prop_assert_eq!(vec, tensor.to_vec());
        }

        #[test]
        fn weights_distribute_over_first_factor(
            factors in factors_strategy(),
            scale in -2.0f64..2.0,
        ) {
            let rank = factors[0].ncols();
            let weights = Array1::from_shape_fn(rank, |r| scale + r as f64);

            let weighted = kruskal_to_tensor(&factors, Some(&weights), None).unwrap();

            let mut scaled = factors.clone();
            for r in 0..rank {
                scaled[0].column_mut(r).mapv_inplace(|x| x * weights[r]);
            }
            let expected = kruskal_to_tensor(&scaled, None, None).unwrap();

            prop_assert_eq!(weighted.as_array(), expected.as_array());
        }

        #[test]
        fn mask_multiplies_elementwise(factors in factors_strategy(), seed in 0usize..7) {
            let shape: Vec<usize> = factors.iter().map(|f| f.nrows()).collect();
            let n: usize = shape.iter().product();
            let mask = DenseND::from_vec(
                (0..n).map(|i| ((i + seed) % 3) as f64 - 1.0).collect(),
                &shape,
            )
            .unwrap();

            let masked = kruskal_to_tensor(&factors, None, Some(&mask)).unwrap();
            let expected = kruskal_to_tensor(&factors, None, None)
                .unwrap()
                .hadamard(&mask)
                .unwrap();

            for (a, b) in masked.as_array().iter().zip(expected.as_array().iter()) {
                prop_assert!(close(*a, *b), "{} vs {}", a, b);
            }
        }

        #[test]
        fn normalize_then_norm(factors in factors_strategy()) {
            let mut kt = KruskalTensor::from_factors(factors).unwrap();
            let dense = kt.to_tensor().unwrap();
            let dense_norm = dense.frobenius_norm();

            prop_assert!(norm_close(kt.norm(), dense_norm));

            kt.normalize();
            let renormalized = kt.to_tensor().unwrap();
            for (a, b) in renormalized.as_array().iter().zip(dense.as_array().iter()) {
                prop_assert!(close(*a, *b), "{} vs {}", a, b);
            }
            prop_assert!(norm_close(kt.norm(), dense_norm));
        }
    }
}
