//! # 超胞重复次数
//!
//! 三个轴向的晶胞重复次数 (nx, ny, nz)，支持 `"2,2,2"` 与 `"2x2x2"` 两种写法。
//!
//! ## 依赖关系
//! - 被 `lattice/builder.rs`, `models/lattice.rs`, `cli/` 使用
//! - 无外部模块依赖

use crate::error::IonlatError;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 三个轴向的重复次数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repeats {
    pub nx: usize,
    pub ny: usize,
    pub nz: usize,
}

impl Repeats {
    pub fn new(nx: usize, ny: usize, nz: usize) -> Self {
        Repeats { nx, ny, nz }
    }

    /// 单个晶胞 (1, 1, 1)
    pub fn unit() -> Self {
        Repeats::new(1, 1, 1)
    }

    /// 按 x, y, z 顺序返回
    pub fn as_array(&self) -> [usize; 3] {
        [self.nx, self.ny, self.nz]
    }

    /// 超胞包含的晶胞总数，乘积溢出时为 None
    pub fn cell_count(&self) -> Option<usize> {
        self.nx.checked_mul(self.ny)?.checked_mul(self.nz)
    }

    /// 最大重复次数
    pub fn max(&self) -> usize {
        self.nx.max(self.ny).max(self.nz)
    }
}

impl Default for Repeats {
    fn default() -> Self {
        Repeats::unit()
    }
}

impl std::fmt::Display for Repeats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.nx, self.ny, self.nz)
    }
}

impl FromStr for Repeats {
    type Err = IonlatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s
            .split(|c: char| c == ',' || c == 'x' || c == 'X')
            .map(str::trim)
            .collect();

        if parts.len() != 3 {
            return Err(IonlatError::InvalidRepeats(format!(
                "'{}' (expected three counts, e.g. '2,2,2' or '2x2x2')",
                s
            )));
        }

        let mut counts = [0usize; 3];
        for (slot, part) in counts.iter_mut().zip(parts.iter()) {
            *slot = part
                .parse()
                .map_err(|_| IonlatError::InvalidRepeats(format!("'{}' in '{}'", part, s)))?;
        }

        Ok(Repeats::new(counts[0], counts[1], counts[2]))
    }
}
