//! # energy 命令实现
//!
//! 组装 KF 晶体并计算晶格能。
//!
//! ## 功能
//! - 构造阳离子与阴离子面心立方子晶格
//! - 计算 K-K、F-F、K-F 壳层直方图与能量分解
//! - 所有计算成功后才写出位置文件与 CSV
//!
//! ## 依赖关系
//! - 使用 `cli/energy.rs` 定义的参数
//! - 使用 `crystal/`, `io/`
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::cli::energy::EnergyArgs;
use crate::commands::{configure_threads, positions_path, shells};
use crate::crystal::{AssemblyConfig, EnergyReport, IonicCrystal};
use crate::error::{IonlatError, Result};
use crate::io::{export, xyz};
use crate::models::PairType;
use crate::potential::PotentialModel;
use crate::utils::{output, progress};

use std::fs;

/// 执行 energy 命令
pub fn execute(args: EnergyArgs) -> Result<()> {
    output::print_header("Coulomb-Buckingham Lattice Energy");

    configure_threads(args.lattice.jobs);

    let config = args.lattice.assembly_config()?;
    let model = PotentialModel::new(args.potential.params());

    output::print_info(&format!(
        "Lattice constant: {:.6} Å, repeats: {}",
        config.lattice_constant, config.repeats
    ));
    output::print_info(&format!(
        "Shell tolerance: {} Å ({:?} seeding)",
        config.shell_settings.tolerance, config.shell_settings.seeding
    ));

    let spinner = progress::create_spinner("Enumerating ion pairs");
    let assembled = assemble_and_evaluate(&config, model);
    spinner.finish_and_clear();
    let crystal = assembled?;
    let report = crystal.energy_report()?;

    output::print_success(&format!(
        "Assembled {} K and {} F ions (cell volume {:.4} Å³, cutoff {:.4} Å)",
        report.cation_atoms,
        report.anion_atoms,
        crystal.cation().cell().volume(),
        crystal.cation().cutoff()
    ));
    print_cell_vectors(&crystal);
    if let Some(shell) = crystal.cross_histogram()?.nearest() {
        output::print_info(&format!(
            "Nearest K-F distance: {:.6} Å ({} pairs)",
            shell.distance, shell.count
        ));
    }

    if args.show_shells {
        shells::print_shell_table(
            crystal.cation().shell_histogram()?,
            PairType::LikeCation,
            &model,
        )?;
        shells::print_shell_table(
            crystal.anion().shell_histogram()?,
            PairType::LikeAnion,
            &model,
        )?;
        shells::print_shell_table(crystal.cross_histogram()?, PairType::Unlike, &model)?;
    }

    print_energy_breakdown(report);

    // 计算全部成功后再写文件
    if !args.no_xyz {
        fs::create_dir_all(&args.output_dir).map_err(|e| IonlatError::FileWriteError {
            path: args.output_dir.display().to_string(),
            source: e,
        })?;
        for lattice in crystal.lattices() {
            let path = positions_path(&args.output_dir, lattice);
            xyz::write_xyz_file(lattice, &path)?;
            output::print_written(&format!("{} positions", lattice.species()), &path);
        }
    }

    if let Some(ref csv_path) = args.csv {
        export::reports_to_csv(std::iter::once(report), csv_path)?;
        output::print_written("energy report", csv_path);
    }

    Ok(())
}

/// 组装晶体并计算（缓存）能量分解
fn assemble_and_evaluate(config: &AssemblyConfig, model: PotentialModel) -> Result<IonicCrystal> {
    let crystal = IonicCrystal::assemble(config, model)?;
    crystal.energy_report()?;
    Ok(crystal)
}

/// 打印超胞晶格矢量与倒格矢
fn print_cell_vectors(crystal: &IonicCrystal) {
    let cation = crystal.cation();
    let rows = cation
        .lattice_vectors()
        .iter()
        .zip(cation.reciprocal_vectors().iter())
        .enumerate();
    for (i, (a, b)) in rows {
        output::print_info(&format!(
            "a{0} = [{1:.4}, {2:.4}, {3:.4}] Å   b{0} = [{4:.6}, {5:.6}, {6:.6}] 1/Å",
            i + 1,
            a[0],
            a[1],
            a[2],
            b[0],
            b[1],
            b[2]
        ));
    }
}

/// 打印能量分解
fn print_energy_breakdown(report: &EnergyReport) {
    output::print_header("Lattice Energy Breakdown");
    output::print_energy(
        &format!("K-K  ({} shells)", report.cation_shells),
        report.cation_cation_energy,
    );
    output::print_energy(
        &format!("F-F  ({} shells)", report.anion_shells),
        report.anion_anion_energy,
    );
    output::print_energy(
        &format!("K-F  ({} shells)", report.cross_shells),
        report.cation_anion_energy,
    );
    output::print_separator();
    output::print_energy("Total", report.total_energy);
    output::print_energy("Per formula unit", report.energy_per_formula_unit);
}
