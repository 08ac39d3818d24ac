//! # 超胞构造
//!
//! 将基原子沿 x、y、z 依次平移复制，得到完整超胞中的全部原子位置。
//!
//! ## 算法概述
//! 依次处理 x → y → z 三个轴。处理某一轴时，对当前已生成的全部原子
//! （包括前面轴新增的原子）复制出 k·a·ê (k = 1..n-1) 的平移副本，
//! 最终得到三个方向平移的笛卡尔积，原子数为 |basis| × nx × ny × nz。
//!
//! ## 依赖关系
//! - 被 `models/lattice.rs` 调用
//! - 使用 `models/vector.rs`, `models/repeats.rs`

use crate::error::{IonlatError, Result};
use crate::models::vector::{self, Vec3};
use crate::models::Repeats;

/// 单个超胞允许的最大原子数
pub const MAX_ATOMS: usize = 10_000_000;

/// 超胞原子总数 |basis| × nx × ny × nz，溢出或超过 [`MAX_ATOMS`] 时报错
pub fn atom_count(basis_len: usize, repeats: Repeats) -> Result<usize> {
    repeats
        .cell_count()
        .and_then(|cells| cells.checked_mul(basis_len))
        .filter(|&total| total <= MAX_ATOMS)
        .ok_or_else(|| IonlatError::InvalidDimension {
            reason: format!(
                "{} repeats of a {}-atom basis exceed the {} atom limit",
                repeats, basis_len, MAX_ATOMS
            ),
        })
}

/// 沿三个坐标轴复制基原子
pub fn build(basis: &[Vec3], edge_length: f64, repeats: Repeats) -> Result<Vec<Vec3>> {
    if !(edge_length.is_finite() && edge_length > 0.0) {
        return Err(IonlatError::InvalidDimension {
            reason: format!("edge length must be positive, got {}", edge_length),
        });
    }
    if repeats.as_array().iter().any(|&n| n == 0) {
        return Err(IonlatError::InvalidDimension {
            reason: format!("repeat counts must be positive, got {}", repeats),
        });
    }

    let mut atoms: Vec<Vec3> = Vec::with_capacity(atom_count(basis.len(), repeats)?);
    atoms.extend_from_slice(basis);

    for (axis, &count) in repeats.as_array().iter().enumerate() {
        let mut unit = [0.0; 3];
        unit[axis] = edge_length;

        // 本轴开始时的原子集合作为整体平移
        let block = atoms.len();
        for k in 1..count {
            let shift = vector::scale(&unit, k as f64);
            for i in 0..block {
                let moved = vector::add(&atoms[i], &shift);
                atoms.push(moved);
            }
        }
    }

    Ok(atoms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_repeats_return_basis() {
        let basis = vec![[0.0, 0.0, 0.0], [0.5, 0.5, 0.0]];
        let atoms = build(&basis, 1.0, Repeats::unit()).unwrap();
        assert_eq!(atoms, basis);
    }

    #[test]
    fn test_atom_count_is_basis_times_cells() {
        let basis = vec![[0.0, 0.0, 0.0], [0.0, 0.5, 0.5], [0.5, 0.0, 0.5]];
        for (nx, ny, nz) in [(1, 1, 1), (2, 1, 1), (1, 3, 2), (2, 2, 2), (3, 1, 4)] {
            let repeats = Repeats::new(nx, ny, nz);
            let atoms = build(&basis, 2.5, repeats).unwrap();
            assert_eq!(atoms.len(), basis.len() * nx * ny * nz);
        }
    }

    #[test]
    fn test_translations_follow_axis_order() {
        let atoms = build(&[[0.0, 0.0, 0.0]], 2.0, Repeats::new(2, 2, 1)).unwrap();
        assert_eq!(
            atoms,
            vec![
                [0.0, 0.0, 0.0],
                [2.0, 0.0, 0.0],
                [0.0, 2.0, 0.0],
                [2.0, 2.0, 0.0],
            ]
        );
    }

    #[test]
    fn test_all_positions_distinct() {
        let atoms = build(&[[0.1, 0.2, 0.3]], 1.0, Repeats::new(3, 2, 2)).unwrap();
        for i in 0..atoms.len() {
            for j in (i + 1)..atoms.len() {
                let d = vector::norm(&vector::sub(&atoms[i], &atoms[j]));
                assert!(d > 0.5, "atoms {} and {} overlap", i, j);
            }
        }
    }

    #[test]
    fn test_rejects_zero_repeat() {
        let err = build(&[[0.0; 3]], 1.0, Repeats::new(1, 0, 1)).unwrap_err();
        assert!(matches!(err, IonlatError::InvalidDimension { .. }));
    }

    #[test]
    fn test_rejects_non_positive_edge() {
        for edge in [0.0, -1.0, f64::NAN] {
            let err = build(&[[0.0; 3]], edge, Repeats::unit()).unwrap_err();
            assert!(matches!(err, IonlatError::InvalidDimension { .. }));
        }
    }

    #[test]
    fn test_oversized_repeats_are_rejected() {
        for repeats in [
            Repeats::new(1 << 40, 1 << 30, 1),
            Repeats::new(usize::MAX, 2, 1),
            Repeats::new(1000, 1000, 1000),
        ] {
            let err = build(&[[0.0; 3]], 1.0, repeats).unwrap_err();
            assert!(matches!(err, IonlatError::InvalidDimension { .. }));
        }
        assert_eq!(atom_count(4, Repeats::new(2, 2, 2)).unwrap(), 32);
    }
}
