//! # 晶格计算模块
//!
//! 提供超胞构造、倒格矢、周期性最小镜像和壳层直方图等核心算法。
//!
//! ## 子模块
//! - `builder`: 基原子沿三轴复制
//! - `reciprocal`: 倒格矢与晶胞体积
//! - `periodic`: 最小镜像位移
//! - `histogram`: 近邻壳层直方图
//! - `structure`: 简单立方/面心立方结构类型
//!
//! ## 依赖关系
//! - 被 `models/lattice.rs` 使用
//! - 使用 `models/vector.rs`

pub mod builder;
pub mod histogram;
pub mod periodic;
pub mod reciprocal;
pub mod structure;

pub use histogram::{BucketSeeding, ShellHistogram, ShellSettings};
pub use periodic::PeriodicCell;
pub use structure::StructureKind;
