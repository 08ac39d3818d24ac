//! # build 子命令 CLI 定义
//!
//! 只写出阳离子与阴离子子晶格的位置文件。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/build.rs`

use crate::cli::lattice::LatticeArgs;

use clap::Args;
use std::path::PathBuf;

/// build 子命令参数
#[derive(Args, Debug)]
pub struct BuildArgs {
    #[command(flatten)]
    pub lattice: LatticeArgs,

    /// Directory for the K.xyz and F.xyz positions files
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Overwrite existing positions files
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,

    /// Read the written files back and check them against the lattices
    #[arg(long, default_value_t = false)]
    pub verify: bool,
}
