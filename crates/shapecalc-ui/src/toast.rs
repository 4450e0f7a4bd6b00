//! 临时通知（Toast）

use shapecalc_core::validate::Notice;

/// 淡出时长（秒）
const FADE_SECS: f64 = 0.3;

/// 同时显示的最大数量
const MAX_VISIBLE: usize = 3;

/// 单条通知
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub notice: Notice,
    /// 创建时间（egui 时间，秒）
    pub created_at: f64,
}

/// 通知队列
#[derive(Debug, Clone)]
pub struct ToastQueue {
    /// 通知存活时间（秒）
    lifetime: f64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn new(lifetime: f64) -> Self {
        Self {
            lifetime: lifetime.max(FADE_SECS),
            toasts: Vec::new(),
        }
    }

    pub fn push(&mut self, notice: Notice, now: f64) {
        tracing::debug!("Toast: {}", notice.message);
        self.toasts.push(Toast {
            notice,
            created_at: now,
        });
        if self.toasts.len() > MAX_VISIBLE {
            let overflow = self.toasts.len() - MAX_VISIBLE;
            self.toasts.drain(..overflow);
        }
    }

    /// 移除已过期的通知
    pub fn prune(&mut self, now: f64) {
        let lifetime = self.lifetime;
        self.toasts.retain(|t| now - t.created_at < lifetime);
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// 通知在 `now` 时刻的不透明度，最后一段时间线性淡出
    pub fn opacity(&self, toast: &Toast, now: f64) -> f32 {
        let remaining = self.lifetime - (now - toast.created_at);
        (remaining / FADE_SECS).clamp(0.0, 1.0) as f32
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(3.0)
    }
}

/// 渲染通知（右下角）
pub fn show_toasts(ctx: &egui::Context, queue: &mut ToastQueue) {
    let now = ctx.input(|i| i.time);
    queue.prune(now);
    if queue.is_empty() {
        return;
    }

    egui::Area::new(egui::Id::new("toasts"))
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
        .order(egui::Order::Foreground)
        .interactable(false)
        .show(ctx, |ui| {
            for toast in queue.toasts() {
                let alpha = queue.opacity(toast, now);
                ui.scope(|ui| {
                    ui.set_opacity(alpha);
                    egui::Frame::popup(ui.style())
                        .fill(egui::Color32::from_rgb(127, 29, 29))
                        .show(ui, |ui| {
                            ui.set_max_width(280.0);
                            ui.label(
                                egui::RichText::new(&toast.notice.title)
                                    .strong()
                                    .color(egui::Color32::WHITE),
                            );
                            ui.label(
                                egui::RichText::new(&toast.notice.message)
                                    .color(egui::Color32::from_rgb(254, 226, 226)),
                            );
                        });
                });
                ui.add_space(6.0);
            }
        });

    // 淡出期间需要持续重绘
    ctx.request_repaint();
}
