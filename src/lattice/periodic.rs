//! # 周期性边界条件与最小镜像
//!
//! 以第一个原子为原点，把两原子的位移投影到倒格矢上得到分数坐标，
//! 取模 1 后折回 [-0.5, 0.5)，再乘回晶格矢量得到最短周期位移。
//!
//! ## 依赖关系
//! - 被 `lattice/histogram.rs` 和 `models/lattice.rs` 使用
//! - 使用 `lattice/reciprocal.rs` 计算倒格矢

use crate::error::Result;
use crate::lattice::reciprocal::{self, ReciprocalBasis};
use crate::models::vector::{self, Vec3};

/// 最小镜像查询结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinimumImage {
    /// 分数坐标，每个分量位于 [-0.5, 0.5)
    pub fractional: Vec3,
    /// 笛卡尔最短位移 (Å)
    pub displacement: Vec3,
}

impl MinimumImage {
    /// 最短周期距离 (Å)
    pub fn distance(&self) -> f64 {
        vector::norm(&self.displacement)
    }
}

/// 周期性晶胞：晶格矢量及其倒格矢
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodicCell {
    lattice_vectors: [Vec3; 3],
    reciprocal: ReciprocalBasis,
}

impl PeriodicCell {
    /// 由晶格矢量构造，体积为零时返回 `DegenerateLattice`
    pub fn new(lattice_vectors: [Vec3; 3]) -> Result<Self> {
        let reciprocal = reciprocal::reciprocate(
            &lattice_vectors[0],
            &lattice_vectors[1],
            &lattice_vectors[2],
        )?;
        Ok(PeriodicCell {
            lattice_vectors,
            reciprocal,
        })
    }

    /// 正交晶胞 (lx, 0, 0), (0, ly, 0), (0, 0, lz)
    pub fn orthorhombic(lengths: Vec3) -> Result<Self> {
        PeriodicCell::new([
            [lengths[0], 0.0, 0.0],
            [0.0, lengths[1], 0.0],
            [0.0, 0.0, lengths[2]],
        ])
    }

    pub fn lattice_vectors(&self) -> &[Vec3; 3] {
        &self.lattice_vectors
    }

    pub fn reciprocal(&self) -> &ReciprocalBasis {
        &self.reciprocal
    }

    pub fn volume(&self) -> f64 {
        self.reciprocal.volume
    }

    /// p1 指向 p2 的最小镜像位移
    pub fn minimum_image(&self, p1: &Vec3, p2: &Vec3) -> MinimumImage {
        minimum_image(p1, p2, &self.lattice_vectors, &self.reciprocal.vectors)
    }

    /// 与另一晶胞的晶格矢量是否一致（逐分量容差比较）
    pub fn matches(&self, other: &PeriodicCell, tolerance: f64) -> bool {
        self.lattice_vectors
            .iter()
            .flatten()
            .zip(other.lattice_vectors.iter().flatten())
            .all(|(a, b)| (a - b).abs() <= tolerance)
    }
}

/// 计算两原子间的最小镜像位移
///
/// `rem_euclid` 保证取模结果非负，因此只需处理 `n >= 0.5` 一侧的折回。
pub fn minimum_image(
    p1: &Vec3,
    p2: &Vec3,
    lattice_vectors: &[Vec3; 3],
    reciprocal_vectors: &[Vec3; 3],
) -> MinimumImage {
    let t = vector::sub(p2, p1);

    let mut fractional = [0.0; 3];
    for (n, b) in fractional.iter_mut().zip(reciprocal_vectors.iter()) {
        let mut wrapped = vector::dot(b, &t).rem_euclid(1.0);
        if wrapped >= 0.5 {
            wrapped -= 1.0;
        }
        *n = wrapped;
    }

    let displacement = fractional
        .iter()
        .zip(lattice_vectors.iter())
        .fold([0.0; 3], |acc, (n, a)| vector::add(&acc, &vector::scale(a, *n)));

    MinimumImage {
        fractional,
        displacement,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cubic(a: f64) -> PeriodicCell {
        PeriodicCell::orthorhombic([a, a, a]).unwrap()
    }

    #[test]
    fn test_fractional_in_half_open_interval() {
        let cell = PeriodicCell::orthorhombic([2.0, 3.0, 4.0]).unwrap();
        let origin = [0.0, 0.0, 0.0];
        let targets = [
            [1.0, 1.5, 2.0],
            [-1.0, -1.5, -2.0],
            [7.3, -11.1, 0.25],
            [1.999_999, 0.0, -3.999_999],
            [-0.000_001, 0.0, 0.0],
        ];
        for p in targets {
            let image = cell.minimum_image(&origin, &p);
            for n in image.fractional {
                assert!((-0.5..0.5).contains(&n), "fractional {} out of range", n);
            }
        }
    }

    #[test]
    fn test_half_cell_maps_to_negative_half() {
        let image = cubic(1.0).minimum_image(&[0.0, 0.0, 0.0], &[0.5, 0.0, 0.0]);
        assert_eq!(image.fractional, [-0.5, 0.0, 0.0]);
        assert!((image.distance() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_wraps_to_nearest_image() {
        let cell = cubic(10.0);
        let image = cell.minimum_image(&[0.5, 0.0, 0.0], &[9.5, 0.0, 0.0]);
        assert!((image.displacement[0] + 1.0).abs() < 1e-9);
        assert!((image.distance() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_translation_invariance() {
        let cell = PeriodicCell::orthorhombic([3.0, 4.0, 5.0]).unwrap();
        let p1 = [0.3, 1.2, 4.4];
        let p2 = [2.9, 0.1, 0.2];
        let reference = cell.minimum_image(&p1, &p2);

        for shift in [[0.7, -0.2, 1.3], [-5.0, 2.5, 0.01], [100.0, -37.0, 12.5]] {
            let image = cell.minimum_image(&vector::add(&p1, &shift), &vector::add(&p2, &shift));
            for axis in 0..3 {
                assert!((image.displacement[axis] - reference.displacement[axis]).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_lattice_vector_shift_is_invisible() {
        let cell = PeriodicCell::orthorhombic([3.0, 4.0, 5.0]).unwrap();
        let p1 = [0.3, 1.2, 4.4];
        let p2 = [2.9, 0.1, 0.2];
        let reference = cell.minimum_image(&p1, &p2);

        for lattice_vector in cell.lattice_vectors() {
            let shifted = vector::add(&p2, &vector::scale(lattice_vector, -2.0));
            let image = cell.minimum_image(&p1, &shifted);
            assert!((image.distance() - reference.distance()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_minimum_image_never_longer_than_direct() {
        let cell = cubic(2.0);
        let p1 = [0.1, 0.2, 0.3];
        for p2 in [[1.9, 1.8, 1.7], [0.5, 0.5, 0.5], [1.0, 0.0, 1.0]] {
            let direct = vector::norm(&vector::sub(&p2, &p1));
            assert!(cell.minimum_image(&p1, &p2).distance() <= direct + 1e-12);
        }
    }

    #[test]
    fn test_degenerate_cell_rejected() {
        assert!(PeriodicCell::orthorhombic([1.0, 0.0, 1.0]).is_err());
    }
}
