//! Property-based tests for tensor operations

#[cfg(test)]
mod tests {
    use crate::DenseND;
    use proptest::prelude::*;
    use scirs2_core::ndarray_ext::Array1;

    // 1-4D shapes with small extents
    fn shape_strategy() -> impl Strategy<Value = Vec<usize>> {
        prop::collection::vec(1usize..6, 1..=4)
    }

    fn iota(shape: &[usize]) -> DenseND<f64> {
        let n: usize = shape.iter().product();
        DenseND::from_vec((0..n).map(|x| x as f64).collect(), shape).unwrap()
    }

    proptest! {
        #[test]
        fn prop_unfold_fold_roundtrip(shape in shape_strategy(), mode_seed in 0usize..4) {
            let tensor = iota(&shape);
            let mode = mode_seed % shape.len();

            let unfolded = tensor.unfold(mode).unwrap();
            let other: usize = shape.iter().product::<usize>() / shape[mode];
            prop_assert_eq!(unfolded.shape(), &[shape[mode], other]);

            let folded = DenseND::fold(&unfolded, &shape, mode).unwrap();
            prop_assert_eq!(folded.as_array(), tensor.as_array());
        }

        #[test]
        fn prop_fold_vec_mode0_matches_from_vec(shape in shape_strategy()) {
            let n: usize = shape.iter().product();
            let flat: Array1<f64> = (0..n).map(|x| x as f64).collect();

            let folded = DenseND::fold_vec(&flat, &shape, 0).unwrap();
            let expected = iota(&shape);
            prop_assert_eq!(folded.as_array(), expected.as_array());
        }

        #[test]
        fn prop_to_vec_matches_mode0_unfolding(shape in shape_strategy()) {
            let tensor = iota(&shape);
            let unfolded = tensor.unfold(0).unwrap();
            let from_unfolding: Vec<f64> = unfolded.iter().cloned().collect();
            prop_assert_eq!(tensor.to_vec().to_vec(), from_unfolding);
        }

        #[test]
        fn prop_broadcast_singleton_axis(shape in shape_strategy(), axis_seed in 0usize..4) {
            let axis = axis_seed % shape.len();
            let mut source_shape = shape.clone();
            source_shape[axis] = 1;
            let source = iota(&source_shape);

            let broadcast = source.broadcast_to(&shape).unwrap();
            prop_assert_eq!(broadcast.shape(), shape.as_slice());

            // Every slice along the broadcast axis equals the source
            let unfolded = broadcast.unfold(axis).unwrap();
            let reference = source.unfold(axis).unwrap();
            for row in unfolded.rows() {
                prop_assert_eq!(row, reference.row(0));
            }
        }
    }
}
