//! # Coulomb-Buckingham 势能模型
//!
//! 离子对势能 E(r) = k·z1·z2/r + A·exp(-r/ρ) - C/r⁶，并对壳层直方图按重数求和。
//!
//! ## 依赖关系
//! - 被 `crystal/assembler.rs` 调用
//! - 使用 `potential/params.rs` 查参数
//! - 使用 `lattice/histogram.rs` 的 ShellHistogram

use crate::error::{IonlatError, Result};
use crate::lattice::ShellHistogram;
use crate::models::PairType;
use crate::potential::params::PotentialParams;

/// 判定两离子重合的距离阈值 (Å)
const COINCIDENT_EPSILON: f64 = 1e-12;

/// 离子对势能模型
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PotentialModel {
    params: PotentialParams,
}

impl PotentialModel {
    pub fn new(params: PotentialParams) -> Self {
        PotentialModel { params }
    }

    /// Buckingham 短程项 A·exp(-r/ρ) - C/r⁶ (eV)
    pub fn buckingham(&self, distance: f64, pair: PairType) -> Result<f64> {
        let r = self.checked_distance(distance, pair)?;
        let p = self.params.buckingham(pair);
        Ok(p.a * (-r / p.rho).exp() - p.c / r.powi(6))
    }

    /// Coulomb 项 k·z1·z2/r (eV)
    pub fn coulomb(&self, distance: f64, pair: PairType) -> Result<f64> {
        let r = self.checked_distance(distance, pair)?;
        Ok(self.params.coulomb_constant() * self.params.charge_product(pair) / r)
    }

    /// 离子对总势能 (eV)
    pub fn pair_energy(&self, distance: f64, pair: PairType) -> Result<f64> {
        Ok(self.coulomb(distance, pair)? + self.buckingham(distance, pair)?)
    }

    /// 对壳层直方图求和：Σ E(r)·重数
    pub fn total_energy(&self, histogram: &ShellHistogram, pair: PairType) -> Result<f64> {
        histogram
            .iter()
            .map(|(distance, count)| {
                self.pair_energy(distance, pair)
                    .map(|energy| energy * count as f64)
            })
            .sum()
    }

    fn checked_distance(&self, distance: f64, pair: PairType) -> Result<f64> {
        if pair.is_unlike() && distance.abs() < COINCIDENT_EPSILON {
            return Err(IonlatError::CoincidentChargedPair { distance });
        }
        if !(distance.is_finite() && distance > 0.0) {
            return Err(IonlatError::InvalidDistance { distance });
        }
        Ok(distance)
    }
}

impl Default for PotentialModel {
    fn default() -> Self {
        PotentialModel::new(PotentialParams::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::ShellSettings;

    #[test]
    fn test_like_pairs_use_their_own_rows() {
        let model = PotentialModel::default();
        let r: f64 = 2.5;

        let expected_kk = 3796.9 * (-r / 0.2603_f64).exp() - 52.0 / r.powi(6);
        let expected_ff = 1127.7 * (-r / 0.2753_f64).exp() - 26.8 / r.powi(6);

        assert!((model.buckingham(r, PairType::LikeCation).unwrap() - expected_kk).abs() < 1e-12);
        assert!((model.buckingham(r, PairType::LikeAnion).unwrap() - expected_ff).abs() < 1e-12);
    }

    #[test]
    fn test_coulomb_signs() {
        let model = PotentialModel::default();
        assert!(model.coulomb(3.0, PairType::LikeCation).unwrap() > 0.0);
        assert!(model.coulomb(3.0, PairType::LikeAnion).unwrap() > 0.0);
        assert!(model.coulomb(3.0, PairType::Unlike).unwrap() < 0.0);
    }

    #[test]
    fn test_pair_energy_is_sum_of_terms() {
        let model = PotentialModel::default();
        let r = 2.67;
        let total = model.pair_energy(r, PairType::Unlike).unwrap();
        let parts = model.coulomb(r, PairType::Unlike).unwrap()
            + model.buckingham(r, PairType::Unlike).unwrap();
        assert!((total - parts).abs() < 1e-12);
    }

    #[test]
    fn test_unlike_symmetric_under_consistent_charge_swap() {
        let normal = PotentialModel::new(PotentialParams::potassium_fluoride());
        let swapped =
            PotentialModel::new(PotentialParams::potassium_fluoride().with_charges(-1.0, 1.0));
        for r in [0.5, 1.0, 2.7, 5.0] {
            let a = normal.pair_energy(r, PairType::Unlike).unwrap();
            let b = swapped.pair_energy(r, PairType::Unlike).unwrap();
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn test_coincident_unlike_pair_is_error() {
        let model = PotentialModel::default();
        let err = model.pair_energy(0.0, PairType::Unlike).unwrap_err();
        assert!(matches!(err, IonlatError::CoincidentChargedPair { .. }));
    }

    #[test]
    fn test_non_positive_like_distance_is_error() {
        let model = PotentialModel::default();
        for r in [0.0, -1.0, f64::INFINITY] {
            let err = model.pair_energy(r, PairType::LikeCation).unwrap_err();
            assert!(matches!(err, IonlatError::InvalidDistance { .. }));
        }
    }

    #[test]
    fn test_total_energy_weights_by_count() {
        let model = PotentialModel::default();
        let mut hist = ShellHistogram::new(ShellSettings::default());
        for d in [2.0, 2.0, 2.0, 3.0] {
            hist.insert(d);
        }
        let expected = 3.0 * model.pair_energy(2.0, PairType::LikeAnion).unwrap()
            + model.pair_energy(3.0, PairType::LikeAnion).unwrap();
        let total = model.total_energy(&hist, PairType::LikeAnion).unwrap();
        assert!((total - expected).abs() < 1e-9);
    }

    #[test]
    fn test_empty_histogram_has_zero_energy() {
        let model = PotentialModel::default();
        let hist = ShellHistogram::new(ShellSettings::default());
        assert_eq!(model.total_energy(&hist, PairType::Unlike).unwrap(), 0.0);
    }
}
