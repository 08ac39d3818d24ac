//! # 数据导出
//!
//! 导出壳层直方图和晶格能分解到 CSV。
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `lattice/histogram.rs` 的 ShellHistogram
//! - 使用 `crystal/assembler.rs` 的 EnergyReport
//! - 使用 `csv` 库写入 CSV 文件

use crate::crystal::EnergyReport;
use crate::error::{IonlatError, Result};
use crate::lattice::ShellHistogram;
use crate::models::PairType;

use std::path::Path;

/// 导出壳层直方图为 CSV，可附带每个壳层的势能贡献
pub fn shells_to_csv(
    histogram: &ShellHistogram,
    pair: PairType,
    energies: Option<&[f64]>,
    output_path: &Path,
) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    wtr.write_record(["pair", "distance", "count", "energy_ev"])?;

    for (idx, shell) in histogram.shells().iter().enumerate() {
        let energy = energies
            .and_then(|e| e.get(idx))
            .map(|e| format!("{:.9}", e))
            .unwrap_or_default();
        wtr.write_record(&[
            pair.to_string(),
            format!("{:.9}", shell.distance),
            shell.count.to_string(),
            energy,
        ])?;
    }

    wtr.flush().map_err(|e| IonlatError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 导出晶格能分解为 CSV（每行一个晶格常数）
pub fn reports_to_csv<'a, I>(reports: I, output_path: &Path) -> Result<()>
where
    I: IntoIterator<Item = &'a EnergyReport>,
{
    let mut wtr = csv::Writer::from_path(output_path)?;

    for report in reports {
        wtr.serialize(report)?;
    }

    wtr.flush().map_err(|e| IonlatError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}
