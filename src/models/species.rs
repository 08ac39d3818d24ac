//! # 离子种类与离子对类型
//!
//! 每个晶格只含一种离子（阳离子或阴离子），势能参数按离子对类型查表。
//!
//! ## 依赖关系
//! - 被 `models/lattice.rs`, `potential/`, `crystal/` 使用
//! - 无外部模块依赖

use serde::{Deserialize, Serialize};

/// 离子种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    /// 阳离子 (K⁺)
    Cation,
    /// 阴离子 (F⁻)
    Anion,
}

impl Species {
    /// 位置文件中使用的元素符号
    pub fn label(&self) -> &'static str {
        match self {
            Species::Cation => "K",
            Species::Anion => "F",
        }
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Species::Cation => write!(f, "cation"),
            Species::Anion => write!(f, "anion"),
        }
    }
}

/// 离子对类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PairType {
    /// 阳离子-阳离子
    LikeCation,
    /// 阴离子-阴离子
    LikeAnion,
    /// 阳离子-阴离子
    Unlike,
}

impl PairType {
    /// 由两种离子确定离子对类型（与顺序无关）
    pub fn of(a: Species, b: Species) -> Self {
        match (a, b) {
            (Species::Cation, Species::Cation) => PairType::LikeCation,
            (Species::Anion, Species::Anion) => PairType::LikeAnion,
            _ => PairType::Unlike,
        }
    }

    pub fn is_unlike(&self) -> bool {
        matches!(self, PairType::Unlike)
    }
}

impl std::fmt::Display for PairType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PairType::LikeCation => write!(f, "K-K"),
            PairType::LikeAnion => write!(f, "F-F"),
            PairType::Unlike => write!(f, "K-F"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_type_is_symmetric() {
        assert_eq!(
            PairType::of(Species::Cation, Species::Anion),
            PairType::of(Species::Anion, Species::Cation)
        );
        assert_eq!(
            PairType::of(Species::Cation, Species::Cation),
            PairType::LikeCation
        );
        assert_eq!(
            PairType::of(Species::Anion, Species::Anion),
            PairType::LikeAnion
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(Species::Cation.label(), "K");
        assert_eq!(Species::Anion.label(), "F");
        assert_eq!(PairType::Unlike.to_string(), "K-F");
    }
}
