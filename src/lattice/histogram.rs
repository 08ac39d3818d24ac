//! # 近邻壳层直方图
//!
//! 枚举原子对、计算最小镜像距离、丢弃截断半径之外的原子对，
//! 再按容差把距离归并成壳层 (代表距离, 重数)。
//!
//! ## 算法概述
//! 1. 自身直方图：同一晶格内 i < j 的无序原子对
//! 2. 交叉直方图：两个晶格之间 A × B 的全部有序原子对
//! 3. 距离计算按行并行 (rayon)，按行序收集后串行归并，结果与串行枚举一致
//! 4. 壳层按代表距离升序存放，归并时二分查找容差窗口
//!
//! ## 依赖关系
//! - 被 `models/lattice.rs` 调用
//! - 使用 `lattice/periodic.rs` 计算最小镜像距离
//! - 使用 `rayon` 进行并行计算

use crate::error::{IonlatError, Result};
use crate::lattice::periodic::PeriodicCell;
use crate::models::vector::Vec3;

use rayon::prelude::*;
use serde::Serialize;

/// 默认壳层容差 (Å)
pub const DEFAULT_TOLERANCE: f64 = 0.01;

/// 新壳层的初始计数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BucketSeeding {
    /// 首次出现即计 1，重数等于原子对数
    #[default]
    One,
    /// 首次出现计 0（旧版脚本的行为，每个壳层少计一次）
    Zero,
}

impl BucketSeeding {
    fn initial_count(&self) -> usize {
        match self {
            BucketSeeding::One => 1,
            BucketSeeding::Zero => 0,
        }
    }
}

/// 壳层归并参数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShellSettings {
    /// 容差 (Å)，|d - 代表距离| < tolerance 视为同一壳层
    pub tolerance: f64,
    pub seeding: BucketSeeding,
}

impl Default for ShellSettings {
    fn default() -> Self {
        ShellSettings {
            tolerance: DEFAULT_TOLERANCE,
            seeding: BucketSeeding::default(),
        }
    }
}

/// 单个壳层
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Shell {
    /// 代表距离 (Å)，即该壳层首次发现的距离
    pub distance: f64,
    /// 重数
    pub count: usize,
}

/// 壳层直方图，按代表距离升序
#[derive(Debug, Clone, PartialEq)]
pub struct ShellHistogram {
    shells: Vec<Shell>,
    settings: ShellSettings,
}

impl ShellHistogram {
    pub fn new(settings: ShellSettings) -> Self {
        ShellHistogram {
            shells: Vec::new(),
            settings,
        }
    }

    /// 归并一个距离
    ///
    /// 命中窗口 (d - tol, d + tol) 内代表距离最小的壳层；未命中则按序插入新壳层。
    pub fn insert(&mut self, distance: f64) {
        let tolerance = self.settings.tolerance;
        let idx = self
            .shells
            .partition_point(|s| s.distance <= distance - tolerance);

        match self.shells.get_mut(idx) {
            Some(shell) if shell.distance < distance + tolerance => shell.count += 1,
            _ => self.shells.insert(
                idx,
                Shell {
                    distance,
                    count: self.settings.seeding.initial_count(),
                },
            ),
        }
    }

    pub fn shells(&self) -> &[Shell] {
        &self.shells
    }

    /// (距离, 重数) 迭代器
    pub fn iter(&self) -> impl Iterator<Item = (f64, usize)> + '_ {
        self.shells.iter().map(|s| (s.distance, s.count))
    }

    pub fn len(&self) -> usize {
        self.shells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shells.is_empty()
    }

    /// 所有壳层重数之和
    pub fn total_pairs(&self) -> usize {
        self.shells.iter().map(|s| s.count).sum()
    }

    /// 最近邻壳层
    pub fn nearest(&self) -> Option<&Shell> {
        self.shells.first()
    }
}

/// 同一晶格内 i < j 原子对的壳层直方图
pub fn accumulate_self(
    atoms: &[Vec3],
    cell: &PeriodicCell,
    cutoff: f64,
    settings: ShellSettings,
) -> Result<ShellHistogram> {
    validate(cutoff, &settings)?;

    let n = atoms.len();
    let rows: Vec<Vec<f64>> = (0..n)
        .into_par_iter()
        .map(|i| {
            ((i + 1)..n)
                .map(|j| cell.minimum_image(&atoms[i], &atoms[j]).distance())
                .filter(|&d| d <= cutoff)
                .collect()
        })
        .collect();

    Ok(bucket(rows, settings))
}

/// 两个晶格之间 A × B 全部原子对的壳层直方图
pub fn accumulate_cross(
    atoms_a: &[Vec3],
    atoms_b: &[Vec3],
    cell: &PeriodicCell,
    cutoff: f64,
    settings: ShellSettings,
) -> Result<ShellHistogram> {
    validate(cutoff, &settings)?;

    let rows: Vec<Vec<f64>> = atoms_a
        .par_iter()
        .map(|a| {
            atoms_b
                .iter()
                .map(|b| cell.minimum_image(a, b).distance())
                .filter(|&d| d <= cutoff)
                .collect()
        })
        .collect();

    Ok(bucket(rows, settings))
}

fn bucket(rows: Vec<Vec<f64>>, settings: ShellSettings) -> ShellHistogram {
    let mut histogram = ShellHistogram::new(settings);
    for distance in rows.into_iter().flatten() {
        histogram.insert(distance);
    }
    histogram
}

fn validate(cutoff: f64, settings: &ShellSettings) -> Result<()> {
    if !(cutoff.is_finite() && cutoff > 0.0) {
        return Err(IonlatError::InvalidArgument(format!(
            "cutoff must be positive, got {}",
            cutoff
        )));
    }
    if !(settings.tolerance.is_finite() && settings.tolerance > 0.0) {
        return Err(IonlatError::InvalidArgument(format!(
            "shell tolerance must be positive, got {}",
            settings.tolerance
        )));
    }
    Ok(())
}
