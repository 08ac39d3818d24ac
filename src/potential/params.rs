//! # 势能参数
//!
//! 物理常数、离子形式电荷和 Buckingham 参数表，作为不可变配置显式传入势能模型。
//!
//! ## 默认参数 (KF 晶体)
//! | 离子对 | A (eV) | ρ (Å) | C (eV·Å⁶) |
//! |--------|--------|-------|-----------|
//! | K⁺-K⁺  | 3796.9 | 0.2603 | 52.0 |
//! | F⁻-F⁻  | 1127.7 | 0.2753 | 26.8 |
//! | K⁺-F⁻  | 2426.8 | 0.2770 | 44.60 |
//!
//! ## 依赖关系
//! - 被 `potential/model.rs` 使用
//! - 使用 `models/species.rs`

use crate::models::PairType;

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// 单个离子对的 Buckingham 参数
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BuckinghamParams {
    /// 排斥强度 A (eV)
    pub a: f64,
    /// 排斥长度 ρ (Å)
    pub rho: f64,
    /// 色散系数 C (eV·Å⁶)
    pub c: f64,
}

impl BuckinghamParams {
    pub const fn new(a: f64, rho: f64, c: f64) -> Self {
        BuckinghamParams { a, rho, c }
    }
}

/// 势能模型的全部参数
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PotentialParams {
    /// 真空介电常数 ε₀ (F/m)
    pub vacuum_permittivity: f64,
    /// 元电荷 e (C)
    pub elementary_charge: f64,
    /// 阳离子形式电荷（以 e 为单位）
    pub cation_charge: f64,
    /// 阴离子形式电荷（以 e 为单位）
    pub anion_charge: f64,
    pub cation_cation: BuckinghamParams,
    pub anion_anion: BuckinghamParams,
    pub cation_anion: BuckinghamParams,
}

impl PotentialParams {
    /// KF 晶体参数
    pub fn potassium_fluoride() -> Self {
        PotentialParams {
            vacuum_permittivity: 8.854e-12,
            elementary_charge: 1.602e-19,
            cation_charge: 1.0,
            anion_charge: -1.0,
            cation_cation: BuckinghamParams::new(3796.9, 0.2603, 52.0),
            anion_anion: BuckinghamParams::new(1127.7, 0.2753, 26.8),
            cation_anion: BuckinghamParams::new(2426.8, 0.2770, 44.60),
        }
    }

    /// 覆盖形式电荷
    pub fn with_charges(mut self, cation_charge: f64, anion_charge: f64) -> Self {
        self.cation_charge = cation_charge;
        self.anion_charge = anion_charge;
        self
    }

    /// 按离子对类型查 Buckingham 参数
    pub fn buckingham(&self, pair: PairType) -> &BuckinghamParams {
        match pair {
            PairType::LikeCation => &self.cation_cation,
            PairType::LikeAnion => &self.anion_anion,
            PairType::Unlike => &self.cation_anion,
        }
    }

    /// 离子对形式电荷乘积 z1·z2
    pub fn charge_product(&self, pair: PairType) -> f64 {
        match pair {
            PairType::LikeCation => self.cation_charge * self.cation_charge,
            PairType::LikeAnion => self.anion_charge * self.anion_charge,
            PairType::Unlike => self.cation_charge * self.anion_charge,
        }
    }

    /// Coulomb 常数 e²/(4πε₀)，单位 eV·Å
    ///
    /// e²/(4πε₀ r[m]) J 除以 e 换算为 eV，再把 r 换成 Å 得到 e/(4πε₀)·1e10。
    pub fn coulomb_constant(&self) -> f64 {
        self.elementary_charge / (4.0 * PI * self.vacuum_permittivity) * 1e10
    }
}

impl Default for PotentialParams {
    fn default() -> Self {
        PotentialParams::potassium_fluoride()
    }
}
