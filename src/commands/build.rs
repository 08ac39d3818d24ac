//! # build 命令实现
//!
//! 构造两套子晶格并写出位置文件。
//!
//! ## 功能
//! - 已存在的文件默认跳过
//! - 可选读回文件校验原子数与坐标
//!
//! ## 依赖关系
//! - 使用 `cli/build.rs` 定义的参数
//! - 使用 `crystal/`, `io/xyz.rs`
//! - 使用 `utils/output.rs`

use crate::cli::build::BuildArgs;
use crate::commands::positions_path;
use crate::crystal::IonicCrystal;
use crate::error::{IonlatError, Result};
use crate::io::xyz;
use crate::models::Lattice;
use crate::potential::PotentialModel;
use crate::utils::output;

use std::fs;
use std::path::Path;

/// 9 位小数输出对应的坐标容差 (Å)
const COORDINATE_TOLERANCE: f64 = 1e-9;

/// 执行 build 命令
pub fn execute(args: BuildArgs) -> Result<()> {
    output::print_header("Building Sublattice Positions");

    let config = args.lattice.assembly_config()?;
    let crystal = IonicCrystal::assemble(&config, PotentialModel::default())?;

    output::print_info(&format!(
        "Lattice constant: {:.6} Å, repeats: {}",
        config.lattice_constant, config.repeats
    ));

    fs::create_dir_all(&args.output_dir).map_err(|e| IonlatError::FileWriteError {
        path: args.output_dir.display().to_string(),
        source: e,
    })?;

    for lattice in crystal.lattices() {
        let path = positions_path(&args.output_dir, lattice);

        if path.exists() && !args.overwrite {
            output::print_skip(&format!("Output exists, skipping: {}", path.display()));
            continue;
        }

        xyz::write_xyz_file(lattice, &path)?;
        output::print_written(
            &format!("{} {} ({} atoms)", lattice.species(), lattice.kind(), lattice.len()),
            &path,
        );

        if args.verify {
            verify_positions(lattice, &path)?;
            output::print_success(&format!("Verified {}", path.display()));
        }
    }

    Ok(())
}

/// 读回位置文件并与晶格比对
fn verify_positions(lattice: &Lattice, path: &Path) -> Result<()> {
    let parsed = xyz::read_xyz_file(path)?;
    let mismatch = |reason: String| IonlatError::ParseError {
        format: "xyz".to_string(),
        path: path.display().to_string(),
        reason,
    };

    if parsed.repeats != Some(lattice.repeats()) || parsed.structure != Some(lattice.kind()) {
        return Err(mismatch(format!(
            "header '{}' does not describe a {} {}",
            parsed.header,
            lattice.repeats(),
            lattice.kind()
        )));
    }

    if parsed.atoms.len() != lattice.len() {
        return Err(mismatch(format!(
            "expected {} atoms, read {}",
            lattice.len(),
            parsed.atoms.len()
        )));
    }

    for (idx, ((label, read), original)) in parsed.atoms.iter().zip(lattice.atoms()).enumerate() {
        if label != lattice.species().label() {
            return Err(mismatch(format!("atom {} has label '{}'", idx + 1, label)));
        }
        let drift = read
            .iter()
            .zip(original.iter())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0_f64, f64::max);
        if drift > COORDINATE_TOLERANCE {
            return Err(mismatch(format!(
                "atom {} differs by {:e} Å",
                idx + 1,
                drift
            )));
        }
    }

    Ok(())
}
