//! # ionlat - 离子晶格能计算工具
//!
//! 由晶胞和少量基原子构造周期晶格，在周期性边界条件下统计近邻壳层，
//! 并用 Coulomb + Buckingham 离子对势计算晶格能。
//!
//! ## 子命令
//! - `energy` - 组装 KF 晶体并计算晶格能
//! - `shells` - 近邻壳层直方图
//! - `build`  - 写出位置文件
//! - `scan`   - 晶格常数扫描
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── crystal/   (晶体组装与扫描)
//!   │     ├── potential/ (Coulomb-Buckingham 势)
//!   │     ├── lattice/   (超胞、倒格矢、最小镜像、壳层直方图)
//!   │     ├── models/    (数据模型)
//!   │     └── io/        (位置文件、CSV、图表)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod crystal;
mod error;
mod io;
mod lattice;
mod models;
mod potential;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
