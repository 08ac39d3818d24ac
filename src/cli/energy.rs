//! # energy 子命令 CLI 定义
//!
//! 组装 KF 岩盐晶体，写出 K.xyz / F.xyz 并输出晶格能分解。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/energy.rs`

use crate::cli::lattice::{LatticeArgs, PotentialArgs};

use clap::Args;
use std::path::PathBuf;

/// energy 子命令参数
#[derive(Args, Debug)]
pub struct EnergyArgs {
    #[command(flatten)]
    pub lattice: LatticeArgs,

    #[command(flatten)]
    pub potential: PotentialArgs,

    /// Directory for the K.xyz and F.xyz positions files
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Do not write positions files
    #[arg(long, default_value_t = false)]
    pub no_xyz: bool,

    /// Print the shell histograms used for the energy sums
    #[arg(long, default_value_t = false)]
    pub show_shells: bool,

    /// Write the energy breakdown to a CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,
}
