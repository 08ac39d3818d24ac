//! # 离子晶体组装
//!
//! 构造阳离子 (K) 与阴离子 (F) 两套面心立方子晶格，组合成岩盐结构，
//! 并计算三类离子对的晶格能：K-K、F-F 自身项与 K-F 交叉项。
//!
//! ## 依赖关系
//! - 被 `commands/` 和 `crystal/scan.rs` 使用
//! - 使用 `models/lattice.rs` 构造子晶格
//! - 使用 `potential/model.rs` 计算势能

use crate::error::Result;
use crate::lattice::{ShellHistogram, ShellSettings, StructureKind};
use crate::models::vector::{self, Vec3};
use crate::models::{Lattice, PairType, Repeats, Species};
use crate::potential::PotentialModel;

use serde::Serialize;
use std::sync::OnceLock;

/// 晶体组装参数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssemblyConfig {
    /// 晶格常数 (Å)
    pub lattice_constant: f64,
    pub repeats: Repeats,
    pub shell_settings: ShellSettings,
    /// 阴离子子晶格原点，以晶格常数为单位
    pub anion_offset: Vec3,
}

impl AssemblyConfig {
    pub fn new(lattice_constant: f64, repeats: Repeats) -> Self {
        AssemblyConfig {
            lattice_constant,
            repeats,
            ..AssemblyConfig::default()
        }
    }
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        AssemblyConfig {
            lattice_constant: 1.0,
            repeats: Repeats::unit(),
            shell_settings: ShellSettings::default(),
            anion_offset: [0.0, 0.0, 0.5],
        }
    }
}

/// 晶格能分解 (eV)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnergyReport {
    pub lattice_constant: f64,
    pub nx: usize,
    pub ny: usize,
    pub nz: usize,
    pub cation_atoms: usize,
    pub anion_atoms: usize,
    pub cation_shells: usize,
    pub anion_shells: usize,
    pub cross_shells: usize,
    pub cation_cation_energy: f64,
    pub anion_anion_energy: f64,
    pub cation_anion_energy: f64,
    pub total_energy: f64,
    /// 每个 KF 化学式单元的能量
    pub energy_per_formula_unit: f64,
}

/// 由两套子晶格组成的离子晶体
#[derive(Debug)]
pub struct IonicCrystal {
    cation: Lattice,
    anion: Lattice,
    model: PotentialModel,
    cross: OnceLock<ShellHistogram>,
    report: OnceLock<EnergyReport>,
}

impl IonicCrystal {
    /// 组装阳离子与阴离子面心立方子晶格
    pub fn assemble(config: &AssemblyConfig, model: PotentialModel) -> Result<Self> {
        let a = config.lattice_constant;

        let cation = Lattice::new(
            StructureKind::FaceCenteredCubic,
            Species::Cation,
            [0.0, 0.0, 0.0],
            a,
            config.repeats,
        )?
        .with_shell_settings(config.shell_settings);

        let anion = Lattice::new(
            StructureKind::FaceCenteredCubic,
            Species::Anion,
            vector::scale(&config.anion_offset, a),
            a,
            config.repeats,
        )?
        .with_shell_settings(config.shell_settings);

        Ok(IonicCrystal {
            cation,
            anion,
            model,
            cross: OnceLock::new(),
            report: OnceLock::new(),
        })
    }

    pub fn cation(&self) -> &Lattice {
        &self.cation
    }

    pub fn anion(&self) -> &Lattice {
        &self.anion
    }

    pub fn lattices(&self) -> [&Lattice; 2] {
        [&self.cation, &self.anion]
    }

    /// K-F 交叉壳层直方图（缓存）
    pub fn cross_histogram(&self) -> Result<&ShellHistogram> {
        if let Some(cross) = self.cross.get() {
            return Ok(cross);
        }
        let computed = self.cation.cross_histogram(&self.anion)?;
        Ok(self.cross.get_or_init(|| computed))
    }

    /// 晶格能分解（缓存）
    pub fn energy_report(&self) -> Result<&EnergyReport> {
        if let Some(report) = self.report.get() {
            return Ok(report);
        }

        let cation_shells = self.cation.shell_histogram()?;
        let anion_shells = self.anion.shell_histogram()?;
        let cross_shells = self.cross_histogram()?;

        let (cation, anion) = (self.cation.species(), self.anion.species());
        let cation_cation_energy = self
            .model
            .total_energy(cation_shells, PairType::of(cation, cation))?;
        let anion_anion_energy = self
            .model
            .total_energy(anion_shells, PairType::of(anion, anion))?;
        let cation_anion_energy = self
            .model
            .total_energy(cross_shells, PairType::of(cation, anion))?;
        let total_energy = cation_cation_energy + anion_anion_energy + cation_anion_energy;

        let repeats = self.cation.repeats();
        let formula_units = self.cation.len().min(self.anion.len()).max(1);

        let report = EnergyReport {
            lattice_constant: self.cation.edge_length(),
            nx: repeats.nx,
            ny: repeats.ny,
            nz: repeats.nz,
            cation_atoms: self.cation.len(),
            anion_atoms: self.anion.len(),
            cation_shells: cation_shells.len(),
            anion_shells: anion_shells.len(),
            cross_shells: cross_shells.len(),
            cation_cation_energy,
            anion_anion_energy,
            cation_anion_energy,
            total_energy,
            energy_per_formula_unit: total_energy / formula_units as f64,
        };

        Ok(self.report.get_or_init(|| report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IonlatError;

    #[test]
    fn test_default_crystal_is_rock_salt() {
        let crystal = IonicCrystal::assemble(&AssemblyConfig::default(), PotentialModel::default())
            .unwrap();
        assert_eq!(crystal.cation().len(), 4);
        assert_eq!(crystal.anion().len(), 4);
        assert_eq!(crystal.anion().atoms()[0], [0.0, 0.0, 0.5]);

        let cross = crystal.cross_histogram().unwrap();
        assert_eq!(cross.nearest().unwrap().count, 12);
    }

    #[test]
    fn test_energy_report_sums_components() {
        let model = PotentialModel::default();
        let crystal = IonicCrystal::assemble(&AssemblyConfig::default(), model).unwrap();
        let report = crystal.energy_report().unwrap();

        let face = 0.5_f64.sqrt();
        let body = 0.75_f64.sqrt();
        let expected_kk = 6.0 * model.pair_energy(face, PairType::LikeCation).unwrap();
        let expected_ff = 6.0 * model.pair_energy(face, PairType::LikeAnion).unwrap();
        let expected_kf = 12.0 * model.pair_energy(0.5, PairType::Unlike).unwrap()
            + 4.0 * model.pair_energy(body, PairType::Unlike).unwrap();

        assert!((report.cation_cation_energy - expected_kk).abs() < 1e-6);
        assert!((report.anion_anion_energy - expected_ff).abs() < 1e-6);
        assert!((report.cation_anion_energy - expected_kf).abs() < 1e-6);
        assert!(
            (report.total_energy - (expected_kk + expected_ff + expected_kf)).abs() < 1e-6
        );
        assert!((report.energy_per_formula_unit - report.total_energy / 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_report_is_cached() {
        let crystal = IonicCrystal::assemble(&AssemblyConfig::default(), PotentialModel::default())
            .unwrap();
        let first = crystal.energy_report().unwrap() as *const EnergyReport;
        let second = crystal.energy_report().unwrap() as *const EnergyReport;
        assert_eq!(first, second);
    }

    #[test]
    fn test_coincident_sublattices_fail() {
        let config = AssemblyConfig {
            anion_offset: [0.0, 0.0, 0.0],
            ..AssemblyConfig::default()
        };
        let crystal = IonicCrystal::assemble(&config, PotentialModel::default()).unwrap();
        let err = crystal.energy_report().unwrap_err();
        assert!(matches!(err, IonlatError::CoincidentChargedPair { .. }));
    }

    #[test]
    fn test_invalid_lattice_constant_fails_early() {
        let config = AssemblyConfig::new(0.0, Repeats::unit());
        let err = IonicCrystal::assemble(&config, PotentialModel::default()).unwrap_err();
        assert!(matches!(err, IonlatError::InvalidDimension { .. }));
    }
}
