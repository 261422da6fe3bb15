//! Integration tests for Kruskal tensor reconstruction
//!
//! These tests check the reconstruction routines against tensors assembled
//! element by element, and the three reconstruction paths against each other.

use ktensor_core::DenseND;
use ktensor_decomp::{
    kruskal_to_tensor, kruskal_to_unfolded, kruskal_to_vec, KruskalError, KruskalTensor,
};
use ktensor_kernels::KernelError;
use scirs2_core::ndarray_ext::{array, Array1, Array2};

fn rank1_tensor(a: &[f64], b: &[f64], c: &[f64]) -> DenseND<f64> {
    let mut data = Vec::with_capacity(a.len() * b.len() * c.len());
    for &x in a {
        for &y in b {
            for &z in c {
                data.push(x * y * z);
            }
        }
    }
    DenseND::from_vec(data, &[a.len(), b.len(), c.len()]).unwrap()
}

#[test]
fn test_rank1_reconstruction_exact() {
    let a = [1.0, 2.0, 3.0];
    let b = [1.0, -1.0];
    let c = [0.5, 0.25, 2.0, 4.0];

    let factors = vec![
        Array2::from_shape_vec((3, 1), a.to_vec()).unwrap(),
        Array2::from_shape_vec((2, 1), b.to_vec()).unwrap(),
        Array2::from_shape_vec((4, 1), c.to_vec()).unwrap(),
    ];

    let tensor = kruskal_to_tensor(&factors, None, None).unwrap();
    let expected = rank1_tensor(&a, &b, &c);

    assert_eq!(tensor.as_array(), expected.as_array());
}

#[test]
fn test_sum_of_rank1_terms() {
    // Two components: (1,2) ∘ (1,0,1) ∘ (2,1)  +  (0,1) ∘ (1,1,1) ∘ (1,3)
    let factors = vec![
        array![[1.0, 0.0], [2.0, 1.0]],
        array![[1.0, 1.0], [0.0, 1.0], [1.0, 1.0]],
        array![[2.0, 1.0], [1.0, 3.0]],
    ];

    let first = rank1_tensor(&[1.0, 2.0], &[1.0, 0.0, 1.0], &[2.0, 1.0]);
    let second = rank1_tensor(&[0.0, 1.0], &[1.0, 1.0, 1.0], &[1.0, 3.0]);
    let expected: Vec<f64> = first
        .to_vec()
        .iter()
        .zip(second.to_vec().iter())
        .map(|(x, y)| x + y)
        .collect();

    let vec = kruskal_to_vec(&factors).unwrap();
    assert_eq!(vec.to_vec(), expected);
}

#[test]
fn test_weighted_masked_reconstruction() {
    let factors = vec![
        array![[1.0, 2.0], [3.0, 4.0]],
        array![[1.0, 0.5], [2.0, 1.0], [0.0, 1.0]],
    ];
    let weights = array![0.5, 2.0];
    let mask = DenseND::from_vec(vec![1.0, 0.0, 1.0, 0.0, 1.0, 0.0], &[2, 3]).unwrap();

    let tensor = kruskal_to_tensor(&factors, Some(&weights), Some(&mask)).unwrap();

    // X[i, j] = Σ_r w_r U0[i, r] U1[j, r], then masked
    let mut expected = DenseND::<f64>::zeros(&[2, 3]);
    for i in 0..2 {
        for j in 0..3 {
            let value: f64 = (0..2)
                .map(|r| weights[r] * factors[0][[i, r]] * factors[1][[j, r]])
                .sum();
            expected[&[i, j]] = value * mask[&[i, j]];
        }
    }

    assert_eq!(tensor.as_array(), expected.as_array());
}

#[test]
fn test_unfolded_avoids_full_tensor_but_agrees() {
    let factors: Vec<Array2<f64>> = (0..4)
        .map(|n| {
            Array2::from_shape_fn((n + 2, 3), |(i, r)| ((i + 2 * r + n) % 5) as f64 - 2.0)
        })
        .collect();

    let tensor = kruskal_to_tensor(&factors, None, None).unwrap();
    assert_eq!(tensor.shape(), &[2, 3, 4, 5]);

    for mode in 0..4 {
        let unfolded = kruskal_to_unfolded(&factors, mode).unwrap();
        assert_eq!(unfolded, tensor.unfold(mode).unwrap());
    }
}

#[test]
fn test_rank_mismatch_is_reported() {
    let factors = vec![Array2::<f64>::ones((3, 2)), Array2::<f64>::ones((4, 3))];

    match kruskal_to_tensor(&factors, None, None) {
        Err(KruskalError::Kernel(KernelError::RankMismatch { factor_index, .. })) => {
            assert_eq!(factor_index, 1)
        }
        other => panic!("expected a rank mismatch, got {:?}", other),
    }
}

#[test]
fn test_mode_out_of_range() {
    let factors = vec![array![[1.0, 0.0], [0.0, 1.0]], array![[1.0, 1.0], [1.0, 1.0]]];

    let err = kruskal_to_unfolded(&factors, 5).unwrap_err();
    assert_eq!(err.to_string(), "Invalid mode 5: factor list has 2 factors");
}

#[test]
fn test_kruskal_tensor_roundtrip_through_parts() {
    let factors = vec![array![[1.0, 2.0], [3.0, 4.0]], array![[0.5, 1.0]]];
    let kt = KruskalTensor::new(factors.clone(), Some(Array1::from(vec![1.0, 1.0]))).unwrap();

    let (parts, weights) = kt.clone().into_parts();
    assert_eq!(parts, factors);
    assert_eq!(weights.unwrap().to_vec(), vec![1.0, 1.0]);

    let unweighted = kruskal_to_tensor(&factors, None, None).unwrap();
    assert_eq!(kt.to_tensor().unwrap().as_array(), unweighted.as_array());
}
