//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `crystal/`, `io/`, `utils/`
//! - 子模块: energy, shells, build, scan

pub mod build;
pub mod energy;
pub mod scan;
pub mod shells;

use crate::cli::Commands;
use crate::error::Result;
use crate::models::Lattice;

use std::path::{Path, PathBuf};

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Energy(args) => energy::execute(args),
        Commands::Shells(args) => shells::execute(args),
        Commands::Build(args) => build::execute(args),
        Commands::Scan(args) => scan::execute(args),
    }
}

/// 设置 rayon 全局线程数（0 = CPU 核数）
fn configure_threads(jobs: usize) {
    let num_threads = if jobs == 0 { num_cpus::get() } else { jobs };

    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
        .ok();
}

/// 子晶格位置文件路径，如 `<dir>/K.xyz`
fn positions_path(dir: &Path, lattice: &Lattice) -> PathBuf {
    dir.join(format!("{}.xyz", lattice.species().label()))
}
