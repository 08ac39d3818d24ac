//! # scan 命令实现
//!
//! 在一段晶格常数范围内并行计算晶格能。
//!
//! ## 功能
//! - 各扫描点并行计算（rayon），进度条反馈
//! - 失败的扫描点单独汇总，不中断其余计算
//! - 输出表格、CSV 与能量曲线图
//!
//! ## 依赖关系
//! - 使用 `cli/scan.rs` 定义的参数
//! - 使用 `crystal/scan.rs`, `io/export.rs`, `io/plot.rs`
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::cli::scan::ScanArgs;
use crate::commands::configure_threads;
use crate::crystal::scan::{self, ScanPoint};
use crate::error::Result;
use crate::io::{export, plot};
use crate::potential::PotentialModel;
use crate::utils::{output, progress};

use std::path::Path;

/// 执行 scan 命令
pub fn execute(args: ScanArgs) -> Result<()> {
    output::print_header("Lattice Constant Scan");

    configure_threads(args.lattice.jobs);

    let base = args.lattice.assembly_config()?;
    let model = PotentialModel::new(args.potential.params());
    let constants = scan::lattice_constants(args.from, args.to, args.steps)?;

    output::print_info(&format!(
        "Scanning a = {:.4} .. {:.4} Å in {} steps, repeats: {}",
        args.from, args.to, args.steps, base.repeats
    ));

    let pb = progress::create_progress_bar(constants.len() as u64, "Evaluating");
    let points = scan::scan(&base, model, &constants, |_| pb.inc(1));
    pb.finish_and_clear();

    let failures: Vec<&ScanPoint> = points.iter().filter(|p| !p.is_success()).collect();
    let succeeded = points.len() - failures.len();

    print_scan_table(&points);

    output::print_separator();
    output::print_success(&format!(
        "Scan complete: {} success, {} failed",
        succeeded,
        failures.len()
    ));

    if !failures.is_empty() {
        output::print_warning("Failed lattice constants:");
        for point in failures.iter().take(10) {
            if let Err(ref err) = point.outcome {
                output::print_error(&format!("  a = {:.6} Å: {}", point.lattice_constant, err));
            }
        }
        if failures.len() > 10 {
            output::print_warning(&format!("  ... and {} more", failures.len() - 10));
        }
    }

    if let Some(best) = scan::minimum(&points) {
        if let Ok(ref report) = best.outcome {
            output::print_energy(
                &format!("Minimum at a = {:.4} Å", best.lattice_constant),
                report.total_energy,
            );
        }
    }

    if let Some(ref csv_path) = args.csv {
        let reports = points.iter().filter_map(|p| p.outcome.as_ref().ok());
        export::reports_to_csv(reports, csv_path)?;
        output::print_written("scan results", csv_path);
    }

    if let Some(ref plot_path) = args.plot {
        let data: Vec<(f64, f64)> = points
            .iter()
            .filter_map(|p| {
                p.outcome
                    .as_ref()
                    .ok()
                    .map(|r| (p.lattice_constant, r.total_energy))
            })
            .collect();

        if data.is_empty() {
            output::print_warning("No successful points, skipping plot");
        } else {
            let title = format!("KF lattice energy {}", base.repeats);
            plot::generate_scan_plot(
                &data,
                plot_path,
                &title,
                args.width,
                args.height,
                is_svg(plot_path),
            )?;
            output::print_written("energy curve", plot_path);
        }
    }

    Ok(())
}

/// 从扩展名判断是否输出 SVG
fn is_svg(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|s| s.eq_ignore_ascii_case("svg"))
        .unwrap_or(false)
}

/// 打印扫描结果表格
fn print_scan_table(points: &[ScanPoint]) {
    use tabled::{Table, Tabled};

    #[derive(Tabled)]
    struct ScanRow {
        #[tabled(rename = "a (Å)")]
        lattice_constant: String,
        #[tabled(rename = "K-K (eV)")]
        cation_cation: String,
        #[tabled(rename = "F-F (eV)")]
        anion_anion: String,
        #[tabled(rename = "K-F (eV)")]
        cation_anion: String,
        #[tabled(rename = "Total (eV)")]
        total: String,
    }

    let rows: Vec<ScanRow> = points
        .iter()
        .filter_map(|p| {
            p.outcome.as_ref().ok().map(|r| ScanRow {
                lattice_constant: format!("{:.4}", p.lattice_constant),
                cation_cation: format!("{:.6}", r.cation_cation_energy),
                anion_anion: format!("{:.6}", r.anion_anion_energy),
                cation_anion: format!("{:.6}", r.cation_anion_energy),
                total: format!("{:.6}", r.total_energy),
            })
        })
        .collect();

    if !rows.is_empty() {
        output::print_header("Lattice Energy vs Lattice Constant");
        println!("{}", Table::new(&rows));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_svg_by_extension() {
        assert!(is_svg(Path::new("curve.svg")));
        assert!(is_svg(Path::new("curve.SVG")));
        assert!(!is_svg(Path::new("curve.png")));
        assert!(!is_svg(Path::new("curve")));
    }
}
