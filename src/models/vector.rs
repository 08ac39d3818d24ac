//! # 三维向量运算
//!
//! 以 `[f64; 3]` 表示笛卡尔向量（单位 Å），提供点积、叉积、模长等基础运算。
//!
//! ## 依赖关系
//! - 被 `lattice/` 和 `crystal/` 使用
//! - 无外部模块依赖

/// 笛卡尔三维向量
pub type Vec3 = [f64; 3];

/// 向量点积
pub fn dot(a: &Vec3, b: &Vec3) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// 向量叉积
pub fn cross(a: &Vec3, b: &Vec3) -> Vec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

/// 向量模长
pub fn norm(a: &Vec3) -> f64 {
    dot(a, a).sqrt()
}

pub fn add(a: &Vec3, b: &Vec3) -> Vec3 {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

pub fn sub(a: &Vec3, b: &Vec3) -> Vec3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

pub fn scale(a: &Vec3, factor: f64) -> Vec3 {
    [a[0] * factor, a[1] * factor, a[2] * factor]
}
