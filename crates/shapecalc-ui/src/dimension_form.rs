//! 尺寸输入表单

use crate::state::{Command, UiState};

/// 渲染当前图形的输入框、计算按钮和行内错误
pub fn show_dimension_form(ui: &mut egui::Ui, ui_state: &UiState) -> Vec<Command> {
    let mut commands = Vec::new();
    let shape = ui_state.session.shape();

    for &dimension in shape.required_dimensions() {
        ui.label(dimension.label());

        let mut text = ui_state.field_text(dimension).to_string();
        let response = ui.add(
            egui::TextEdit::singleline(&mut text)
                .id_salt(("dimension", shape.name(), dimension.as_str()))
                .hint_text(dimension.placeholder())
                .desired_width(f32::INFINITY),
        );
        if response.changed() {
            commands.push(Command::EditDimension(dimension, text));
        }

        // 回车直接计算
        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            commands.push(Command::Calculate);
        }

        ui.add_space(8.0);
    }

    ui.add_space(8.0);
    let button = egui::Button::new(
        egui::RichText::new("Calculate")
            .strong()
            .color(egui::Color32::WHITE),
    )
    .fill(egui::Color32::from_rgb(168, 85, 247));
    if ui
        .add_sized([ui.available_width(), 36.0], button)
        .clicked()
    {
        commands.push(Command::Calculate);
    }

    if let Some(error) = ui_state.session.error() {
        ui.add_space(8.0);
        ui.colored_label(ui.visuals().error_fg_color, error.to_string());
    }

    commands
}
