//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `energy`: 组装 KF 晶体，写出位置文件并计算晶格能
//! - `shells`: 打印/导出近邻壳层直方图
//! - `build`: 只写出位置文件
//! - `scan`: 晶格常数扫描
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: lattice, energy, shells, build, scan

pub mod build;
pub mod energy;
pub mod lattice;
pub mod scan;
pub mod shells;

use clap::{Parser, Subcommand};

/// ionlat - 离子晶格能计算工具
#[derive(Parser)]
#[command(name = "ionlat")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Periodic ionic lattices, neighbour shells and Coulomb-Buckingham lattice energies",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Build the KF rock-salt crystal, write positions files and report the lattice energy
    Energy(energy::EnergyArgs),

    /// Print the neighbour shell histogram of a sublattice or of the cation-anion pairs
    Shells(shells::ShellsArgs),

    /// Write the cation and anion positions files only
    Build(build::BuildArgs),

    /// Scan the lattice energy over a range of lattice constants
    Scan(scan::ScanArgs),
}
