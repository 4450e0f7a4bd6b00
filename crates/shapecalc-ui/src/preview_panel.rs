//! 动画预览面板

use crate::preview::{
    gradient, gradient_position, lerp_rgb, outline, pose, preview_size, transform, PREVIEW_AREA,
};
use nalgebra::Point2;
use shapecalc_core::dimension::DimensionSet;
use shapecalc_core::shape::ShapeKind;

/// 渲染预览，`elapsed` 为动画已播放的秒数
pub fn show_preview(ui: &mut egui::Ui, kind: ShapeKind, dims: &DimensionSet, elapsed: f64) {
    ui.vertical_centered(|ui| {
        let (response, painter) =
            ui.allocate_painter(egui::vec2(PREVIEW_AREA, PREVIEW_AREA), egui::Sense::hover());
        let rect = response.rect;

        let size = preview_size(kind, dims);
        let pose = pose(kind, elapsed as f32);
        let local = outline(kind, size);
        let center = Point2::new(rect.center().x, rect.center().y);
        let screen = transform(&local, &pose, center);

        let (from, to) = gradient(kind);
        let color_at = |t: f32| {
            let [r, g, b] = lerp_rgb(from, to, t);
            egui::Color32::from_rgb(r, g, b).gamma_multiply(pose.opacity)
        };

        // 以中心为扇心三角化，顶点颜色随局部坐标插值形成渐变
        let mut mesh = egui::Mesh::default();
        mesh.colored_vertex(egui::pos2(center.x, center.y), color_at(0.5));
        for (p_local, p_screen) in local.iter().zip(&screen) {
            mesh.colored_vertex(
                egui::pos2(p_screen.x, p_screen.y),
                color_at(gradient_position(*p_local, size)),
            );
        }
        let n = screen.len() as u32;
        for i in 0..n {
            mesh.add_triangle(0, 1 + i, 1 + (i + 1) % n);
        }
        painter.add(egui::Shape::mesh(mesh));
    });

    // 动画需要持续重绘
    ui.ctx().request_repaint();
}
