//! # shells 命令实现
//!
//! 打印并可选导出近邻壳层直方图及每个壳层的势能贡献。
//!
//! ## 依赖关系
//! - 使用 `cli/shells.rs` 定义的参数
//! - 使用 `crystal/`, `io/export.rs`
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::cli::shells::{ShellTarget, ShellsArgs};
use crate::commands::configure_threads;
use crate::crystal::IonicCrystal;
use crate::error::{IonlatError, Result};
use crate::io::export;
use crate::lattice::ShellHistogram;
use crate::models::PairType;
use crate::potential::PotentialModel;
use crate::utils::{output, progress};

/// 执行 shells 命令
pub fn execute(args: ShellsArgs) -> Result<()> {
    output::print_header(&format!("Neighbour Shells ({})", args.target));

    configure_threads(args.lattice.jobs);

    let config = args.lattice.assembly_config()?;
    let model = PotentialModel::new(args.potential.params());
    let crystal = IonicCrystal::assemble(&config, model)?;

    if let Some(cutoff) = args.cutoff {
        if !(cutoff.is_finite() && cutoff > 0.0) {
            return Err(IonlatError::InvalidArgument(format!(
                "--cutoff must be positive, got {}",
                cutoff
            )));
        }
    }

    let spinner = progress::create_spinner("Enumerating ion pairs");
    let histogram = target_histogram(&crystal, args.target, args.cutoff);
    spinner.finish_and_clear();
    let histogram = histogram?;

    let pair = args.target.pair_type();
    output::print_success(&format!(
        "{} shells, {} pairs",
        histogram.len(),
        histogram.total_pairs()
    ));

    let energies = print_shell_table(&histogram, pair, &model)?;

    if let Some(ref csv_path) = args.csv {
        export::shells_to_csv(&histogram, pair, Some(&energies), csv_path)?;
        output::print_written("shell histogram", csv_path);
    }

    Ok(())
}

/// 计算目标直方图，可覆盖截断半径
fn target_histogram(
    crystal: &IonicCrystal,
    target: ShellTarget,
    cutoff: Option<f64>,
) -> Result<ShellHistogram> {
    let lattice = match target {
        ShellTarget::Cation | ShellTarget::Cross => crystal.cation(),
        ShellTarget::Anion => crystal.anion(),
    };
    let lattice = match cutoff {
        Some(c) => lattice.clone().with_cutoff(c),
        None => lattice.clone(),
    };

    match target {
        ShellTarget::Cross => lattice.cross_histogram(crystal.anion()),
        _ => lattice.shell_histogram().cloned(),
    }
}

/// 打印壳层表格，返回每个壳层的单对势能 (eV)
pub(crate) fn print_shell_table(
    histogram: &ShellHistogram,
    pair: PairType,
    model: &PotentialModel,
) -> Result<Vec<f64>> {
    use tabled::{Table, Tabled};

    #[derive(Tabled)]
    struct ShellRow {
        #[tabled(rename = "#")]
        index: usize,
        #[tabled(rename = "r (Å)")]
        distance: String,
        #[tabled(rename = "Count")]
        count: usize,
        #[tabled(rename = "E(r) (eV)")]
        pair_energy: String,
        #[tabled(rename = "Count × E (eV)")]
        contribution: String,
    }

    let energies = histogram
        .iter()
        .map(|(distance, _)| model.pair_energy(distance, pair))
        .collect::<Result<Vec<f64>>>()?;

    let rows: Vec<ShellRow> = histogram
        .iter()
        .zip(energies.iter())
        .enumerate()
        .map(|(i, ((distance, count), energy))| ShellRow {
            index: i + 1,
            distance: format!("{:.6}", distance),
            count,
            pair_energy: format!("{:.6}", energy),
            contribution: format!("{:.6}", energy * count as f64),
        })
        .collect();

    output::print_header(&format!("{} Shells", pair));
    if histogram.is_empty() {
        output::print_warning("No pairs within the cutoff");
    } else {
        println!("{}", Table::new(&rows));
    }

    Ok(energies)
}
