//! 图形选择器

use crate::state::Command;
use shapecalc_core::shape::ShapeKind;

/// 渲染图形下拉框
///
/// 每次选择都会返回命令（包括重新选择当前图形），由会话完成重置。
pub fn show_shape_selector(ui: &mut egui::Ui, current: ShapeKind) -> Option<Command> {
    let mut command = None;

    egui::ComboBox::from_id_salt("shape_selector")
        .selected_text(current.name())
        .width(ui.available_width())
        .show_ui(ui, |ui| {
            for kind in ShapeKind::ALL {
                let mut selected = current;
                if ui.selectable_value(&mut selected, kind, kind.name()).clicked() {
                    command = Some(Command::SelectShape(kind));
                }
            }
        });

    command
}
