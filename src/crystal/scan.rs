//! # 晶格常数扫描
//!
//! 在一组晶格常数上分别组装晶体并计算晶格能，各点之间相互独立，用 rayon 并行。
//!
//! ## 依赖关系
//! - 被 `commands/scan.rs` 调用
//! - 使用 `crystal/assembler.rs`
//! - 使用 `rayon` 进行并行计算

use crate::crystal::assembler::{AssemblyConfig, EnergyReport, IonicCrystal};
use crate::error::{IonlatError, Result};
use crate::potential::PotentialModel;

use rayon::prelude::*;

/// 单个扫描点
#[derive(Debug, Clone)]
pub struct ScanPoint {
    pub lattice_constant: f64,
    /// 成功时为能量分解，失败时为错误信息
    pub outcome: std::result::Result<EnergyReport, String>,
}

impl ScanPoint {
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// 在 [from, to] 上等距取 steps 个晶格常数
pub fn lattice_constants(from: f64, to: f64, steps: usize) -> Result<Vec<f64>> {
    if !(from.is_finite() && to.is_finite() && from > 0.0 && to >= from) {
        return Err(IonlatError::InvalidArgument(format!(
            "scan range must satisfy 0 < from <= to, got {} .. {}",
            from, to
        )));
    }
    match steps {
        0 => Err(IonlatError::InvalidArgument(
            "scan needs at least one step".to_string(),
        )),
        1 => Ok(vec![from]),
        n => {
            let step = (to - from) / (n - 1) as f64;
            Ok((0..n).map(|i| from + step * i as f64).collect())
        }
    }
}

/// 并行计算每个晶格常数下的晶格能，结果按输入顺序返回
pub fn scan<F>(
    base: &AssemblyConfig,
    model: PotentialModel,
    constants: &[f64],
    on_point: F,
) -> Vec<ScanPoint>
where
    F: Fn(&ScanPoint) + Sync + Send,
{
    constants
        .par_iter()
        .map(|&lattice_constant| {
            let config = AssemblyConfig {
                lattice_constant,
                ..*base
            };
            let outcome = IonicCrystal::assemble(&config, model)
                .and_then(|crystal| crystal.energy_report().cloned())
                .map_err(|e| e.to_string());

            let point = ScanPoint {
                lattice_constant,
                outcome,
            };
            on_point(&point);
            point
        })
        .collect()
}

/// 能量最低的成功扫描点
pub fn minimum(points: &[ScanPoint]) -> Option<&ScanPoint> {
    points
        .iter()
        .filter_map(|p| p.outcome.as_ref().ok().map(|r| (p, r.total_energy)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(p, _)| p)
}
