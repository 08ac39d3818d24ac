//! # shells 子命令 CLI 定义
//!
//! 打印并可选导出近邻壳层直方图。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/shells.rs`

use crate::cli::lattice::{LatticeArgs, PotentialArgs};
use crate::models::PairType;

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 直方图对象
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ShellTarget {
    /// Cation-cation pairs within the K sublattice
    Cation,
    /// Anion-anion pairs within the F sublattice
    Anion,
    /// Cation-anion pairs across the two sublattices
    Cross,
}

impl ShellTarget {
    pub fn pair_type(&self) -> PairType {
        match self {
            ShellTarget::Cation => PairType::LikeCation,
            ShellTarget::Anion => PairType::LikeAnion,
            ShellTarget::Cross => PairType::Unlike,
        }
    }
}

impl std::fmt::Display for ShellTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShellTarget::Cation => write!(f, "cation"),
            ShellTarget::Anion => write!(f, "anion"),
            ShellTarget::Cross => write!(f, "cross"),
        }
    }
}

/// shells 子命令参数
#[derive(Args, Debug)]
pub struct ShellsArgs {
    #[command(flatten)]
    pub lattice: LatticeArgs,

    #[command(flatten)]
    pub potential: PotentialArgs,

    /// Which pairs to histogram
    #[arg(short, long, value_enum, default_value = "cross")]
    pub target: ShellTarget,

    /// Override the structure's neighbour cutoff, in Å
    #[arg(long)]
    pub cutoff: Option<f64>,

    /// Write the histogram to a CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,
}
