//! # 晶格结构类型
//!
//! 用枚举描述简单立方与面心立方：各自的名称、基原子分组和截断半径规则。
//!
//! ## 依赖关系
//! - 被 `models/lattice.rs` 使用
//! - 使用 `models/vector.rs`

use crate::models::vector::{self, Vec3};
use crate::models::Repeats;

use serde::{Deserialize, Serialize};

/// 晶格结构类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StructureKind {
    /// 简单立方
    SimpleCubic,
    /// 面心立方
    FaceCenteredCubic,
}

impl StructureKind {
    /// 位置文件表头中的结构名称
    pub fn label(&self) -> &'static str {
        match self {
            StructureKind::SimpleCubic => "Simple Cubic",
            StructureKind::FaceCenteredCubic => "Face Centred Cubic",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "Simple Cubic" => Some(StructureKind::SimpleCubic),
            "Face Centred Cubic" => Some(StructureKind::FaceCenteredCubic),
            _ => None,
        }
    }

    /// 晶胞内的基原子，按复制分组
    ///
    /// 每组单独复制后依次拼接：面心立方先放全部角顶原子，再放全部面心原子。
    pub fn basis_groups(&self, origin: Vec3, edge_length: f64) -> Vec<Vec<Vec3>> {
        match self {
            StructureKind::SimpleCubic => vec![vec![origin]],
            StructureKind::FaceCenteredCubic => {
                let half = 0.5 * edge_length;
                let faces = [[0.0, half, half], [half, 0.0, half], [half, half, 0.0]]
                    .iter()
                    .map(|offset| vector::add(&origin, offset))
                    .collect();
                vec![vec![origin], faces]
            }
        }
    }

    /// 每个晶胞的原子数
    pub fn atoms_per_cell(&self) -> usize {
        match self {
            StructureKind::SimpleCubic => 1,
            StructureKind::FaceCenteredCubic => 4,
        }
    }

    /// 近邻截断半径 (Å)
    pub fn cutoff(&self, edge_length: f64, repeats: Repeats) -> f64 {
        match self {
            StructureKind::SimpleCubic => edge_length + 0.001,
            StructureKind::FaceCenteredCubic => repeats.max() as f64 * edge_length + 0.01,
        }
    }
}

impl std::fmt::Display for StructureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
