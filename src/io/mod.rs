//! # 输入输出模块
//!
//! 原子位置文件读写、CSV 导出和曲线图生成。
//!
//! ## 子模块
//! - `xyz`: 位置文件读写
//! - `export`: CSV 导出
//! - `plot`: 晶格能曲线图
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `models/`, `lattice/`, `crystal/`

pub mod export;
pub mod plot;
pub mod xyz;
