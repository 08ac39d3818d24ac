//! # 数据模型模块
//!
//! 定义向量、离子种类、重复次数和周期晶格等数据模型。
//!
//! ## 依赖关系
//! - 被 `lattice/`, `potential/`, `crystal/`, `io/` 和 `commands/` 使用
//! - 子模块: vector, species, repeats, lattice

pub mod lattice;
pub mod repeats;
pub mod species;
pub mod vector;

pub use lattice::Lattice;
pub use repeats::Repeats;
pub use species::{PairType, Species};
