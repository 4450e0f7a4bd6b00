//! 顶部标题栏

use crate::state::{Command, UiState};

/// 渲染标题栏
pub fn show_header(ctx: &egui::Context, ui_state: &UiState) -> Option<Command> {
    let mut command = None;

    egui::TopBottomPanel::top("header").show(ctx, |ui| {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new("Shape Calculator")
                    .size(28.0)
                    .strong()
                    .color(egui::Color32::from_rgb(192, 80, 220)),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let (icon, tooltip) = if ui_state.dark_mode {
                    ("☀", "Switch to light theme")
                } else {
                    ("🌙", "Switch to dark theme")
                };
                if ui.button(icon).on_hover_text(tooltip).clicked() {
                    command = Some(Command::ToggleTheme);
                }
            });
        });
        ui.add_space(6.0);
    });

    command
}
