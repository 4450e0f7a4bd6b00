//! Shape Calculator 主应用程序入口
//! 使用 eframe 作为应用框架

mod config;

use anyhow::Result;
use eframe::egui;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use config::AppConfig;
use shapecalc_ui::dimension_form::show_dimension_form;
use shapecalc_ui::header::show_header;
use shapecalc_ui::preview_panel::show_preview;
use shapecalc_ui::results_panel::show_results;
use shapecalc_ui::shape_selector::show_shape_selector;
use shapecalc_ui::toast::show_toasts;
use shapecalc_ui::{Command, UiState};

/// Shape Calculator 应用程序
struct ShapeCalcApp {
    ui_state: UiState,
}

impl ShapeCalcApp {
    fn new(config: &AppConfig) -> Self {
        Self {
            ui_state: UiState::new(config.initial_shape, config.dark_mode, config.toast_seconds),
        }
    }
}

impl eframe::App for ShapeCalcApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);

        ctx.set_visuals(if self.ui_state.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        let mut commands: Vec<Command> = Vec::new();
        commands.extend(show_header(ctx, &self.ui_state));

        let preview_elapsed = self.ui_state.preview_elapsed(now);
        let ui_state = &self.ui_state;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);
            ui.columns(2, |columns| {
                // ===== 左侧：图形选择、预览与输入 =====
                egui::Frame::group(columns[0].style()).show(&mut columns[0], |ui| {
                    ui.set_width(ui.available_width());
                    ui.heading("Select Shape");
                    ui.add_space(8.0);

                    let shape = ui_state.session.shape();
                    commands.extend(show_shape_selector(ui, shape));
                    ui.add_space(12.0);

                    show_preview(ui, shape, ui_state.session.dimensions(), preview_elapsed);
                    ui.add_space(12.0);

                    commands.extend(show_dimension_form(ui, ui_state));
                });

                // ===== 右侧：结果 =====
                egui::Frame::group(columns[1].style()).show(&mut columns[1], |ui| {
                    ui.set_width(ui.available_width());
                    ui.heading("Results");
                    ui.add_space(8.0);
                    show_results(ui, ui_state, now);
                });
            });
        });

        for command in commands {
            self.ui_state.apply(command, now);
        }

        show_toasts(ctx, &mut self.ui_state.toasts);
    }
}

fn main() -> Result<()> {
    // 初始化日志，RUST_LOG 可覆盖默认级别
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing::subscriber::set_global_default(FmtSubscriber::builder().with_env_filter(filter).finish())?;

    info!("Starting Shape Calculator...");

    let config = match AppConfig::load() {
        Ok((config, source)) => {
            info!("Loaded configuration from {}", source);
            config
        }
        Err(e) => {
            warn!("Failed to load configuration, using defaults: {}", e);
            AppConfig::default()
        }
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([480.0, 400.0])
            .with_title("Shape Calculator"),
        ..Default::default()
    };

    eframe::run_native(
        "Shape Calculator",
        native_options,
        Box::new(move |_cc| Ok(Box::new(ShapeCalcApp::new(&config)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {}", e))?;

    Ok(())
}
