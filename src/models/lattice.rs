//! # 周期晶格数据模型
//!
//! 单一离子种类的周期超胞：原子位置、晶格矢量、倒格矢、截断半径，
//! 以及首次查询时计算并缓存的自身壳层直方图。构造后不再修改。
//!
//! ## 依赖关系
//! - 被 `crystal/`, `io/`, `commands/` 使用
//! - 使用 `lattice/` 的构造、周期性与直方图算法

use crate::error::{IonlatError, Result};
use crate::lattice::histogram::{self, ShellHistogram, ShellSettings};
use crate::lattice::{builder, PeriodicCell, StructureKind};
use crate::models::vector::Vec3;
use crate::models::{Repeats, Species};

use std::sync::OnceLock;

/// 判断两个晶格共用同一周期晶胞时的容差 (Å)
const CELL_MATCH_TOLERANCE: f64 = 1e-9;

/// 周期晶格
#[derive(Debug, Clone)]
pub struct Lattice {
    species: Species,
    kind: StructureKind,
    edge_length: f64,
    repeats: Repeats,
    atoms: Vec<Vec3>,
    cell: PeriodicCell,
    cutoff: f64,
    settings: ShellSettings,
    shells: OnceLock<ShellHistogram>,
}

impl Lattice {
    /// 从原点原子、晶格常数和重复次数构造超胞
    pub fn new(
        kind: StructureKind,
        species: Species,
        origin: Vec3,
        edge_length: f64,
        repeats: Repeats,
    ) -> Result<Self> {
        let mut atoms = Vec::with_capacity(builder::atom_count(kind.atoms_per_cell(), repeats)?);
        for group in kind.basis_groups(origin, edge_length) {
            atoms.extend(builder::build(&group, edge_length, repeats)?);
        }

        let cell = PeriodicCell::orthorhombic([
            edge_length * repeats.nx as f64,
            edge_length * repeats.ny as f64,
            edge_length * repeats.nz as f64,
        ])?;

        Ok(Lattice {
            species,
            kind,
            edge_length,
            repeats,
            atoms,
            cell,
            cutoff: kind.cutoff(edge_length, repeats),
            settings: ShellSettings::default(),
            shells: OnceLock::new(),
        })
    }

    /// 设置壳层归并参数（清空已缓存的直方图）
    pub fn with_shell_settings(mut self, settings: ShellSettings) -> Self {
        self.settings = settings;
        self.shells = OnceLock::new();
        self
    }

    /// 覆盖结构默认的截断半径（清空已缓存的直方图）
    pub fn with_cutoff(mut self, cutoff: f64) -> Self {
        self.cutoff = cutoff;
        self.shells = OnceLock::new();
        self
    }

    pub fn species(&self) -> Species {
        self.species
    }

    pub fn kind(&self) -> StructureKind {
        self.kind
    }

    pub fn edge_length(&self) -> f64 {
        self.edge_length
    }

    pub fn repeats(&self) -> Repeats {
        self.repeats
    }

    pub fn atoms(&self) -> &[Vec3] {
        &self.atoms
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn cell(&self) -> &PeriodicCell {
        &self.cell
    }

    pub fn lattice_vectors(&self) -> &[Vec3; 3] {
        self.cell.lattice_vectors()
    }

    pub fn reciprocal_vectors(&self) -> &[Vec3; 3] {
        &self.cell.reciprocal().vectors
    }

    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    /// 自身壳层直方图（首次调用时计算并缓存）
    pub fn shell_histogram(&self) -> Result<&ShellHistogram> {
        if let Some(shells) = self.shells.get() {
            return Ok(shells);
        }
        let computed =
            histogram::accumulate_self(&self.atoms, &self.cell, self.cutoff, self.settings)?;
        Ok(self.shells.get_or_init(|| computed))
    }

    /// 与另一晶格的交叉壳层直方图
    ///
    /// 使用本晶格的晶胞、截断半径和壳层参数，两晶格必须共用同一晶胞。
    pub fn cross_histogram(&self, other: &Lattice) -> Result<ShellHistogram> {
        if !self.cell.matches(&other.cell, CELL_MATCH_TOLERANCE) {
            return Err(IonlatError::InvalidArgument(format!(
                "cannot pair {} and {} lattices with different periodic cells",
                self.species, other.species
            )));
        }
        histogram::accumulate_cross(
            &self.atoms,
            &other.atoms,
            &self.cell,
            self.cutoff,
            self.settings,
        )
    }
}
