//! # 晶格能曲线图
//!
//! 使用 `plotters` 绘制晶格能随晶格常数变化的曲线。
//!
//! ## 功能
//! - 支持 PNG 和 SVG 输出
//! - 标注能量最低点
//!
//! ## 依赖关系
//! - 被 `commands/scan.rs` 调用
//! - 使用 `plotters` 渲染图表

use crate::error::{IonlatError, Result};

use plotters::prelude::*;
use std::path::Path;

/// 生成晶格能曲线 (lattice constant, energy)
pub fn generate_scan_plot(
    data: &[(f64, f64)],
    output_path: &Path,
    title: &str,
    width: u32,
    height: u32,
    use_svg: bool,
) -> Result<()> {
    if data.is_empty() {
        return Err(IonlatError::Other("No scan points to plot".to_string()));
    }

    if use_svg {
        let root = SVGBackend::new(output_path, (width, height)).into_drawing_area();
        draw_scan_chart(&root, data, title)?;
        root.present()
            .map_err(|e| IonlatError::Other(e.to_string()))?;
    } else {
        let root = BitMapBackend::new(output_path, (width, height)).into_drawing_area();
        draw_scan_chart(&root, data, title)?;
        root.present()
            .map_err(|e| IonlatError::Other(e.to_string()))?;
    }
    Ok(())
}

/// 绘制曲线的核心逻辑
fn draw_scan_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    data: &[(f64, f64)],
    title: &str,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)
        .map_err(|e| IonlatError::Other(format!("{:?}", e)))?;

    let x_min = data.iter().map(|(x, _)| *x).fold(f64::INFINITY, f64::min);
    let x_max = data.iter().map(|(x, _)| *x).fold(f64::NEG_INFINITY, f64::max);
    let y_min = data.iter().map(|(_, y)| *y).fold(f64::INFINITY, f64::min);
    let y_max = data.iter().map(|(_, y)| *y).fold(f64::NEG_INFINITY, f64::max);

    // 单点或水平线时留出边距
    let x_pad = ((x_max - x_min) * 0.05).max(0.05);
    let y_pad = ((y_max - y_min) * 0.1).max(1e-3);

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(
            (x_min - x_pad)..(x_max + x_pad),
            (y_min - y_pad)..(y_max + y_pad),
        )
        .map_err(|e| IonlatError::Other(format!("{:?}", e)))?;

    chart
        .configure_mesh()
        .x_desc("Lattice constant (Å)")
        .y_desc("Lattice energy (eV)")
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(|e| IonlatError::Other(format!("{:?}", e)))?;

    let line_color = RGBColor(0, 102, 204);
    chart
        .draw_series(LineSeries::new(
            data.iter().copied(),
            line_color.stroke_width(2),
        ))
        .map_err(|e| IonlatError::Other(format!("{:?}", e)))?;

    chart
        .draw_series(
            data.iter()
                .map(|&(x, y)| Circle::new((x, y), 3, line_color.filled())),
        )
        .map_err(|e| IonlatError::Other(format!("{:?}", e)))?;

    // 标注最低点
    if let Some(&(x, y)) = data.iter().min_by(|a, b| a.1.total_cmp(&b.1)) {
        let marker = RGBColor(204, 51, 0);
        chart
            .draw_series(std::iter::once(Circle::new((x, y), 6, marker.filled())))
            .map_err(|e| IonlatError::Other(format!("{:?}", e)))?;
        chart
            .draw_series(std::iter::once(Text::new(
                format!("a = {:.4} Å, E = {:.4} eV", x, y),
                (x, y + y_pad * 0.5),
                ("sans-serif", 14).into_font().color(&BLACK),
            )))
            .map_err(|e| IonlatError::Other(format!("{:?}", e)))?;
    }

    Ok(())
}
