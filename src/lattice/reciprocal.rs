//! # 倒格矢计算
//!
//! 由三个晶格矢量 a1, a2, a3 计算倒格矢 b1, b2, b3 与晶胞体积：
//! V = a1 · (a2 × a3)，b1 = (a2 × a3)/V，b2 = (a3 × a1)/V，b3 = (a1 × a2)/V。
//! 此处不含 2π 因子，满足 bi · aj = δij，便于直接得到分数坐标。
//!
//! ## 依赖关系
//! - 被 `lattice/periodic.rs` 使用
//! - 使用 `models/vector.rs`

use crate::error::{IonlatError, Result};
use crate::models::vector::{self, Vec3};

/// 体积判零阈值 (Å³)
const VOLUME_EPSILON: f64 = 1e-12;

/// 倒格矢与晶胞体积
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReciprocalBasis {
    /// 倒格矢 [b1, b2, b3]
    pub vectors: [Vec3; 3],
    /// 晶胞体积 a1 · (a2 × a3)
    pub volume: f64,
}

/// 计算倒格矢
pub fn reciprocate(a1: &Vec3, a2: &Vec3, a3: &Vec3) -> Result<ReciprocalBasis> {
    let a2_cross_a3 = vector::cross(a2, a3);
    let volume = vector::dot(a1, &a2_cross_a3);

    if !volume.is_finite() || volume.abs() < VOLUME_EPSILON {
        return Err(IonlatError::DegenerateLattice { volume });
    }

    let a3_cross_a1 = vector::cross(a3, a1);
    let a1_cross_a2 = vector::cross(a1, a2);
    let inv = 1.0 / volume;

    Ok(ReciprocalBasis {
        vectors: [
            vector::scale(&a2_cross_a3, inv),
            vector::scale(&a3_cross_a1, inv),
            vector::scale(&a1_cross_a2, inv),
        ],
        volume,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_dual(lattice: [Vec3; 3], recip: &ReciprocalBasis) {
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                let got = vector::dot(&recip.vectors[i], &lattice[j]);
                assert!(
                    (got - expected).abs() < 1e-9,
                    "b{} · a{} = {}, expected {}",
                    i + 1,
                    j + 1,
                    got,
                    expected
                );
            }
        }
    }

    #[test]
    fn test_orthorhombic_duality() {
        for (x, y, z) in [(1.0, 1.0, 1.0), (2.0, 3.0, 4.5), (5.35, 10.7, 5.35), (0.1, 7.0, 3.3)] {
            let lattice = [[x, 0.0, 0.0], [0.0, y, 0.0], [0.0, 0.0, z]];
            let recip = reciprocate(&lattice[0], &lattice[1], &lattice[2]).unwrap();
            assert_dual(lattice, &recip);
            assert!((recip.volume - x * y * z).abs() < 1e-9);
        }
    }

    #[test]
    fn test_cubic_reciprocal_values() {
        let recip = reciprocate(&[2.0, 0.0, 0.0], &[0.0, 2.0, 0.0], &[0.0, 0.0, 2.0]).unwrap();
        assert_eq!(recip.vectors[0], [0.5, 0.0, 0.0]);
        assert_eq!(recip.vectors[1], [0.0, 0.5, 0.0]);
        assert_eq!(recip.vectors[2], [0.0, 0.0, 0.5]);
        assert!((recip.volume - 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_collinear_vectors_are_degenerate() {
        let err = reciprocate(&[1.0, 0.0, 0.0], &[2.0, 0.0, 0.0], &[0.0, 0.0, 1.0]).unwrap_err();
        assert!(matches!(err, IonlatError::DegenerateLattice { .. }));
    }

    #[test]
    fn test_zero_vector_is_degenerate() {
        let err = reciprocate(&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0], &[0.0, 0.0, 0.0]).unwrap_err();
        assert!(matches!(err, IonlatError::DegenerateLattice { .. }));
    }
}
