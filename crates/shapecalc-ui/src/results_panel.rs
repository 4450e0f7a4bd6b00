//! 结果面板

use crate::state::UiState;

/// 结果入场动画时长（秒）
const REVEAL_SECS: f64 = 0.5;

/// 入场时的纵向偏移
const REVEAL_OFFSET: f32 = 20.0;

/// 渲染计算结果
pub fn show_results(ui: &mut egui::Ui, ui_state: &UiState, now: f64) {
    let (Some(result), Some(elapsed)) =
        (ui_state.session.result(), ui_state.result_elapsed(now))
    else {
        ui.add_space(120.0);
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new("Enter dimensions and calculate to see results").weak());
            ui.label(egui::RichText::new("Results will appear here").small().weak());
        });
        return;
    };

    let t = (elapsed / REVEAL_SECS).clamp(0.0, 1.0) as f32;
    if t < 1.0 {
        ui.ctx().request_repaint();
    }

    ui.add_space(REVEAL_OFFSET * (1.0 - t));
    ui.scope(|ui| {
        ui.set_opacity(t);

        result_card(ui, "Area", &result.area_text(), Some("square units"));
        ui.add_space(12.0);
        result_card(ui, "Perimeter", &result.perimeter_text(), Some("units"));
        ui.add_space(12.0);

        let shape = ui_state.session.shape();
        card_frame(ui).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new("Shape").small().weak());
            ui.label(egui::RichText::new(shape.name()).size(18.0).strong());
            ui.add_space(4.0);
            for &dimension in shape.required_dimensions() {
                if let Some(value) = ui_state.session.dimensions().get(dimension) {
                    ui.label(
                        egui::RichText::new(format!("{}: {}", dimension.label(), value)).weak(),
                    );
                }
            }
        });
    });
}

fn result_card(ui: &mut egui::Ui, title: &str, value: &str, unit: Option<&str>) {
    card_frame(ui).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(egui::RichText::new(title).small().weak());
        ui.label(egui::RichText::new(value).size(28.0).strong());
        if let Some(unit) = unit {
            ui.label(egui::RichText::new(unit).small().weak());
        }
    });
}

fn card_frame(ui: &egui::Ui) -> egui::Frame {
    egui::Frame::new()
        .fill(ui.visuals().faint_bg_color)
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::same(12))
}
