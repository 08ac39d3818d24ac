//! # 势能模块
//!
//! Coulomb + Buckingham 离子对势能及其参数。
//!
//! ## 子模块
//! - `params`: 物理常数与 Buckingham 参数表
//! - `model`: 离子对势能与壳层求和
//!
//! ## 依赖关系
//! - 被 `crystal/` 和 `commands/` 使用
//! - 使用 `lattice/histogram.rs`

pub mod model;
pub mod params;

pub use model::PotentialModel;
pub use params::PotentialParams;
