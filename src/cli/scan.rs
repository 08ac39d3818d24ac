//! # scan 子命令 CLI 定义
//!
//! 在一段晶格常数范围内扫描晶格能。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/scan.rs`

use crate::cli::lattice::{LatticeArgs, PotentialArgs};

use clap::Args;
use std::path::PathBuf;

/// scan 子命令参数
#[derive(Args, Debug)]
pub struct ScanArgs {
    #[command(flatten)]
    pub lattice: LatticeArgs,

    #[command(flatten)]
    pub potential: PotentialArgs,

    /// First lattice constant of the scan, in Å
    #[arg(long)]
    pub from: f64,

    /// Last lattice constant of the scan, in Å
    #[arg(long)]
    pub to: f64,

    /// Number of evenly spaced lattice constants
    #[arg(long, default_value_t = 21)]
    pub steps: usize,

    /// Write the scan results to a CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Plot the energy curve (PNG, or SVG if the extension is .svg)
    #[arg(long)]
    pub plot: Option<PathBuf>,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 800)]
    pub height: u32,
}
