//! # 原子位置文件 (.xyz)
//!
//! 写出与读回简易位置文件。
//!
//! ## 格式说明
//! ```text
//! 4                                      # 原子数
//! This is a (1, 1, 1) Face Centred Cubic # 表头：重复次数与结构名称
//! K 	 0.000000000 	 0.000000000 	 0.000000000
//! ...
//! ```
//! 原子行依次为元素符号和 x, y, z 坐标（9 位小数），字段之间以 `" \t "` 分隔，
//! 表头与原子行均以一个空格结尾。
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `models/lattice.rs`
//! - 使用 `regex` 解析表头

use crate::error::{IonlatError, Result};
use crate::lattice::StructureKind;
use crate::models::vector::Vec3;
use crate::models::{Lattice, Repeats};

use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// 表头格式 "This is a (nx, ny, nz) <structure>"
const HEADER_PATTERN: &str = r"^This is a \((\d+), (\d+), (\d+)\) (.+?)\s*$";

static HEADER_REGEX: OnceLock<Regex> = OnceLock::new();

/// 读回的位置文件
#[derive(Debug, Clone)]
pub struct PositionsFile {
    /// 表头原文
    pub header: String,
    /// 表头中的重复次数（表头不符合约定格式时为 None）
    pub repeats: Option<Repeats>,
    /// 表头中的结构类型
    pub structure: Option<StructureKind>,
    /// (元素符号, 笛卡尔坐标)
    pub atoms: Vec<(String, Vec3)>,
}

/// 将晶格转换为位置文件字符串
pub fn to_xyz_string(lattice: &Lattice) -> String {
    let mut result = String::new();
    let label = lattice.species().label();

    result.push_str(&format!("{}\n", lattice.len()));
    result.push_str(&format!(
        "This is a {} {} \n",
        lattice.repeats(),
        lattice.kind().label()
    ));
    for p in lattice.atoms() {
        result.push_str(&format!(
            "{} \t {:.9} \t {:.9} \t {:.9} \n",
            label, p[0], p[1], p[2]
        ));
    }

    result
}

/// 写出位置文件
pub fn write_xyz_file(lattice: &Lattice, path: &Path) -> Result<()> {
    fs::write(path, to_xyz_string(lattice)).map_err(|e| IonlatError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })
}

/// 读取位置文件
pub fn read_xyz_file(path: &Path) -> Result<PositionsFile> {
    let content = fs::read_to_string(path).map_err(|e| IonlatError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_xyz_content(&content, &path.display().to_string())
}

/// 从字符串内容解析位置文件
pub fn parse_xyz_content(content: &str, source_name: &str) -> Result<PositionsFile> {
    let parse_error = |reason: String| IonlatError::ParseError {
        format: "xyz".to_string(),
        path: source_name.to_string(),
        reason,
    };

    let mut lines = content.lines();

    // Line 0: 原子数
    let count_line = lines
        .next()
        .ok_or_else(|| parse_error("Empty file".to_string()))?;
    let expected: usize = count_line
        .trim()
        .parse()
        .map_err(|_| parse_error(format!("Invalid atom count '{}'", count_line.trim())))?;

    // Line 1: 表头
    let header = lines
        .next()
        .ok_or_else(|| parse_error("Missing header line".to_string()))?
        .trim_end()
        .to_string();
    let (repeats, structure) = parse_header(&header)?;

    // 原子行
    let mut atoms = Vec::with_capacity(expected);
    for (idx, line) in lines.enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(parse_error(format!(
                "Invalid atom line {}: '{}'",
                idx + 3,
                line.trim()
            )));
        }

        let mut position = [0.0; 3];
        for (slot, field) in position.iter_mut().zip(&parts[1..4]) {
            *slot = field.parse().map_err(|_| {
                parse_error(format!("Invalid coordinate '{}' at line {}", field, idx + 3))
            })?;
        }
        atoms.push((parts[0].to_string(), position));
    }

    if atoms.len() != expected {
        return Err(parse_error(format!(
            "Header declares {} atoms but {} were found",
            expected,
            atoms.len()
        )));
    }

    Ok(PositionsFile {
        header,
        repeats,
        structure,
        atoms,
    })
}

/// 编译一次并复用的表头正则
fn header_regex() -> Result<&'static Regex> {
    if let Some(re) = HEADER_REGEX.get() {
        return Ok(re);
    }
    let re = Regex::new(HEADER_PATTERN)
        .map_err(|e| IonlatError::Other(format!("Invalid xyz header pattern: {}", e)))?;
    Ok(HEADER_REGEX.get_or_init(|| re))
}

/// 解析表头中的重复次数与结构类型，自由文本表头返回 (None, None)
fn parse_header(header: &str) -> Result<(Option<Repeats>, Option<StructureKind>)> {
    let caps = match header_regex()?.captures(header) {
        Some(caps) => caps,
        None => return Ok((None, None)),
    };

    let count = |i: usize| caps[i].parse::<usize>().ok();
    let repeats = match (count(1), count(2), count(3)) {
        (Some(nx), Some(ny), Some(nz)) => Some(Repeats::new(nx, ny, nz)),
        _ => None,
    };
    Ok((repeats, StructureKind::from_label(&caps[4])))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Species;

    fn kf_anion(repeats: Repeats) -> Lattice {
        Lattice::new(
            StructureKind::FaceCenteredCubic,
            Species::Anion,
            [0.0, 0.0, 0.5],
            1.0,
            repeats,
        )
        .unwrap()
    }

    #[test]
    fn test_exact_layout() {
        let text = to_xyz_string(&kf_anion(Repeats::unit()));
        let expected = "4\n\
            This is a (1, 1, 1) Face Centred Cubic \n\
            F \t 0.000000000 \t 0.000000000 \t 0.500000000 \n\
            F \t 0.000000000 \t 0.500000000 \t 1.000000000 \n\
            F \t 0.500000000 \t 0.000000000 \t 1.000000000 \n\
            F \t 0.500000000 \t 0.500000000 \t 0.500000000 \n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_round_trip_reproduces_coordinates() {
        let lattice = Lattice::new(
            StructureKind::FaceCenteredCubic,
            Species::Cation,
            [0.0, 0.0, 0.0],
            5.347_123_456_789,
            Repeats::new(2, 1, 3),
        )
        .unwrap();

        let parsed = parse_xyz_content(&to_xyz_string(&lattice), "round_trip").unwrap();

        assert_eq!(parsed.atoms.len(), lattice.len());
        assert_eq!(parsed.repeats, Some(Repeats::new(2, 1, 3)));
        assert_eq!(parsed.structure, Some(StructureKind::FaceCenteredCubic));
        for ((label, read), original) in parsed.atoms.iter().zip(lattice.atoms()) {
            assert_eq!(label, "K");
            for axis in 0..3 {
                assert!((read[axis] - original[axis]).abs() <= 1e-9);
            }
        }
    }

    #[test]
    fn test_count_mismatch_is_error() {
        let content = "3\nThis is a (1, 1, 1) Simple Cubic \nK \t 0.0 \t 0.0 \t 0.0 \n";
        let err = parse_xyz_content(content, "short").unwrap_err();
        assert!(matches!(err, IonlatError::ParseError { .. }));
    }

    #[test]
    fn test_malformed_coordinate_is_error() {
        let content = "1\nheader\nK \t 0.0 \t abc \t 0.0 \n";
        assert!(parse_xyz_content(content, "bad").is_err());
    }

    #[test]
    fn test_free_text_header_is_accepted() {
        let content = "1\nsome comment\nF 1.0 2.0 3.0\n";
        let parsed = parse_xyz_content(content, "free").unwrap();
        assert_eq!(parsed.header, "some comment");
        assert!(parsed.repeats.is_none());
        assert!(parsed.structure.is_none());
        assert_eq!(parsed.atoms, vec![("F".to_string(), [1.0, 2.0, 3.0])]);
    }

    #[test]
    fn test_header_regex_is_compiled_once() {
        let first = header_regex().unwrap() as *const Regex;
        let second = header_regex().unwrap() as *const Regex;
        assert_eq!(first, second);
        assert_eq!(
            parse_header("This is a (3, 1, 2) Simple Cubic ").unwrap(),
            (Some(Repeats::new(3, 1, 2)), Some(StructureKind::SimpleCubic))
        );
    }
}
