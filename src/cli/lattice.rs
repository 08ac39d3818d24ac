//! # 公共晶格与势能参数
//!
//! 各子命令共用的晶格构造参数（重复次数、晶格常数、壳层容差）与离子电荷参数。
//!
//! ## 依赖关系
//! - 被 `cli/` 下各子命令参数结构通过 `#[command(flatten)]` 使用
//! - 转换为 `crystal::AssemblyConfig` 与 `potential::PotentialParams`

use crate::crystal::AssemblyConfig;
use crate::error::{IonlatError, Result};
use crate::lattice::{BucketSeeding, ShellSettings};
use crate::models::Repeats;
use crate::potential::PotentialParams;

use clap::Args;

/// 晶格构造参数
#[derive(Args, Debug, Clone)]
pub struct LatticeArgs {
    /// Unit cells along x, y, z (e.g., "2,2,2" or "2x2x2")
    #[arg(short, long, default_value = "1,1,1")]
    pub repeats: String,

    /// Cubic lattice constant in Å
    #[arg(short = 'a', long, default_value_t = 1.0)]
    pub lattice_constant: f64,

    /// Distance tolerance for grouping pairs into one shell, in Å
    #[arg(long, default_value_t = 0.01)]
    pub tolerance: f64,

    /// Seed new shells with count 0 (legacy shell counts, one less per shell)
    #[arg(long, default_value_t = false)]
    pub legacy_seeding: bool,

    /// Number of threads for pair enumeration (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,
}

impl LatticeArgs {
    /// 解析重复次数
    pub fn repeats(&self) -> Result<Repeats> {
        self.repeats.parse()
    }

    pub fn shell_settings(&self) -> Result<ShellSettings> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(IonlatError::InvalidArgument(format!(
                "--tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        Ok(ShellSettings {
            tolerance: self.tolerance,
            seeding: if self.legacy_seeding {
                BucketSeeding::Zero
            } else {
                BucketSeeding::One
            },
        })
    }

    /// 转换为晶体组装参数
    pub fn assembly_config(&self) -> Result<AssemblyConfig> {
        Ok(AssemblyConfig {
            shell_settings: self.shell_settings()?,
            ..AssemblyConfig::new(self.lattice_constant, self.repeats()?)
        })
    }
}

/// 离子电荷参数
#[derive(Args, Debug, Clone)]
pub struct PotentialArgs {
    /// Formal charge of the cation, in units of e
    #[arg(long, default_value_t = 1.0, allow_hyphen_values = true)]
    pub cation_charge: f64,

    /// Formal charge of the anion, in units of e
    #[arg(long, default_value_t = -1.0, allow_hyphen_values = true)]
    pub anion_charge: f64,
}

impl PotentialArgs {
    pub fn params(&self) -> PotentialParams {
        PotentialParams::potassium_fluoride().with_charges(self.cation_charge, self.anion_charge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(repeats: &str, tolerance: f64, legacy: bool) -> LatticeArgs {
        LatticeArgs {
            repeats: repeats.to_string(),
            lattice_constant: 5.35,
            tolerance,
            legacy_seeding: legacy,
            jobs: 0,
        }
    }

    #[test]
    fn test_assembly_config_from_args() {
        let config = args("2x1x1", 0.02, true).assembly_config().unwrap();
        assert_eq!(config.repeats, Repeats::new(2, 1, 1));
        assert_eq!(config.lattice_constant, 5.35);
        assert_eq!(config.shell_settings.tolerance, 0.02);
        assert_eq!(config.shell_settings.seeding, BucketSeeding::Zero);
    }

    #[test]
    fn test_rejects_bad_tolerance_and_repeats() {
        assert!(args("1,1,1", 0.0, false).assembly_config().is_err());
        assert!(args("1,1", 0.01, false).assembly_config().is_err());
    }

    #[test]
    fn test_potential_args_override_charges() {
        let params = PotentialArgs {
            cation_charge: 2.0,
            anion_charge: -2.0,
        }
        .params();
        assert_eq!(params.cation_charge, 2.0);
        assert_eq!(params.anion_charge, -2.0);
        assert_eq!(params.cation_cation.a, 3796.9);
    }
}
