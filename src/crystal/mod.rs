//! # 晶体组装模块
//!
//! 把两套面心立方子晶格组装成离子晶体并计算晶格能。
//!
//! ## 子模块
//! - `assembler`: 子晶格组装与能量分解
//! - `scan`: 晶格常数扫描
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `models/`, `lattice/`, `potential/`

pub mod assembler;
pub mod scan;

pub use assembler::{AssemblyConfig, EnergyReport, IonicCrystal};
