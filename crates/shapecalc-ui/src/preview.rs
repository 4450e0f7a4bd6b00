//! 预览动画计算
//!
//! 纯函数部分：尺寸、动画姿态、轮廓顶点和渐变颜色。
//! 绘制见 `preview_panel`。

use nalgebra::{Point2, Rotation2, Vector2};
use shapecalc_core::dimension::{Dimension, DimensionSet};
use shapecalc_core::shape::ShapeKind;
use std::f32::consts::{PI, TAU};

/// 预览区域边长
pub const PREVIEW_AREA: f32 = 192.0;

/// 图形最大尺寸
pub const MAX_SIZE: f32 = 180.0;

/// 圆的轮廓分段数
const CIRCLE_SEGMENTS: usize = 64;

/// 预览尺寸（像素）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewSize {
    pub width: f32,
    pub height: f32,
}

impl PreviewSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const fn square(side: f32) -> Self {
        Self::new(side, side)
    }
}

/// 没有可用尺寸时的默认大小
pub fn base_size(kind: ShapeKind) -> PreviewSize {
    match kind {
        ShapeKind::Circle => PreviewSize::square(120.0),
        ShapeKind::Rectangle => PreviewSize::new(140.0, 100.0),
        ShapeKind::Square => PreviewSize::square(120.0),
        ShapeKind::Triangle => PreviewSize::square(120.0),
    }
}

/// 根据当前尺寸计算预览大小
///
/// 只使用有限的正数；三角形始终使用默认大小。
pub fn preview_size(kind: ShapeKind, dims: &DimensionSet) -> PreviewSize {
    let positive = |d: Dimension| {
        dims.get(d)
            .filter(|v| v.is_finite() && *v > 0.0)
            .map(|v| v as f32)
    };

    match kind {
        ShapeKind::Circle => match positive(Dimension::Radius) {
            Some(r) => PreviewSize::square((r * 2.0).min(MAX_SIZE)),
            None => base_size(kind),
        },
        ShapeKind::Rectangle => match (positive(Dimension::Length), positive(Dimension::Width)) {
            (Some(length), Some(width)) => {
                let ratio = length / width;
                let mut w = (length * 10.0).min(MAX_SIZE);
                let mut h = w / ratio;
                if h > MAX_SIZE {
                    h = MAX_SIZE;
                    w = h * ratio;
                }
                PreviewSize::new(w, h)
            }
            _ => base_size(kind),
        },
        ShapeKind::Square => match positive(Dimension::Side) {
            Some(s) => PreviewSize::square((s * 20.0).min(MAX_SIZE)),
            None => base_size(kind),
        },
        ShapeKind::Triangle => base_size(kind),
    }
}

/// 入场方式
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Entrance {
    /// 从零缩放到原始大小
    Scale,
    /// 透明度从零到一
    Fade,
}

/// 循环动作
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// 匀速旋转一周
    Spin,
    /// 绕竖直轴翻转 0 → 180 → 0 度（缓入缓出）
    FlipY,
}

/// 图形的动画参数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    pub entrance: Entrance,
    /// 入场时长（秒）
    pub entrance_secs: f32,
    pub motion: Motion,
    /// 循环周期（秒）
    pub period_secs: f32,
}

pub fn animation(kind: ShapeKind) -> Animation {
    match kind {
        ShapeKind::Circle => Animation {
            entrance: Entrance::Scale,
            entrance_secs: 1.5,
            motion: Motion::Spin,
            period_secs: 10.0,
        },
        ShapeKind::Rectangle => Animation {
            entrance: Entrance::Scale,
            entrance_secs: 1.5,
            motion: Motion::FlipY,
            period_secs: 5.0,
        },
        ShapeKind::Square => Animation {
            entrance: Entrance::Scale,
            entrance_secs: 2.0,
            motion: Motion::Spin,
            period_secs: 8.0,
        },
        ShapeKind::Triangle => Animation {
            entrance: Entrance::Fade,
            entrance_secs: 1.5,
            motion: Motion::Spin,
            period_secs: 8.0,
        },
    }
}

/// 某一时刻的动画姿态
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub scale_x: f32,
    pub scale_y: f32,
    /// 平面内旋转角（弧度，顺时针）
    pub rotation: f32,
    pub opacity: f32,
}

impl Pose {
    pub const IDENTITY: Pose = Pose {
        scale_x: 1.0,
        scale_y: 1.0,
        rotation: 0.0,
        opacity: 1.0,
    };
}

/// 计算动画开始 `elapsed` 秒后的姿态
pub fn pose(kind: ShapeKind, elapsed: f32) -> Pose {
    let anim = animation(kind);
    let elapsed = elapsed.max(0.0);
    let progress = ease_out_cubic((elapsed / anim.entrance_secs).min(1.0));
    let phase = (elapsed % anim.period_secs) / anim.period_secs;

    let mut pose = Pose::IDENTITY;
    match anim.entrance {
        Entrance::Scale => {
            pose.scale_x = progress;
            pose.scale_y = progress;
        }
        Entrance::Fade => pose.opacity = progress,
    }

    match anim.motion {
        Motion::Spin => pose.rotation = phase * TAU,
        Motion::FlipY => {
            let half = if phase < 0.5 { phase * 2.0 } else { 2.0 - phase * 2.0 };
            let angle = ease_in_out(half) * PI;
            pose.scale_x *= angle.cos();
        }
    }

    pose
}

/// 图形轮廓（以原点为中心，y 轴向下）
pub fn outline(kind: ShapeKind, size: PreviewSize) -> Vec<Point2<f32>> {
    let hw = size.width / 2.0;
    let hh = size.height / 2.0;
    match kind {
        ShapeKind::Circle => (0..CIRCLE_SEGMENTS)
            .map(|i| {
                let a = i as f32 / CIRCLE_SEGMENTS as f32 * TAU;
                Point2::new(hw * a.cos(), hh * a.sin())
            })
            .collect(),
        ShapeKind::Rectangle | ShapeKind::Square => vec![
            Point2::new(-hw, -hh),
            Point2::new(hw, -hh),
            Point2::new(hw, hh),
            Point2::new(-hw, hh),
        ],
        ShapeKind::Triangle => vec![
            Point2::new(0.0, -hh),
            Point2::new(hw, hh),
            Point2::new(-hw, hh),
        ],
    }
}

/// 按姿态缩放、旋转顶点，并平移到 `center`
pub fn transform(points: &[Point2<f32>], pose: &Pose, center: Point2<f32>) -> Vec<Point2<f32>> {
    let rotation = Rotation2::new(pose.rotation);
    points
        .iter()
        .map(|p| {
            let scaled = Vector2::new(p.x * pose.scale_x, p.y * pose.scale_y);
            center + rotation * scaled
        })
        .collect()
}

/// 渐变起止颜色（左上 → 右下）
pub fn gradient(kind: ShapeKind) -> ([u8; 3], [u8; 3]) {
    match kind {
        ShapeKind::Circle => ([168, 85, 247], [236, 72, 153]),
        ShapeKind::Rectangle => ([6, 182, 212], [59, 130, 246]),
        ShapeKind::Square => ([34, 197, 94], [16, 185, 129]),
        ShapeKind::Triangle => ([245, 158, 11], [245, 158, 11]),
    }
}

/// 局部坐标点在对角渐变上的位置 (0..=1)
pub fn gradient_position(point: Point2<f32>, size: PreviewSize) -> f32 {
    let u = if size.width > 0.0 { point.x / size.width + 0.5 } else { 0.5 };
    let v = if size.height > 0.0 { point.y / size.height + 0.5 } else { 0.5 };
    ((u + v) / 2.0).clamp(0.0, 1.0)
}

pub fn lerp_rgb(from: [u8; 3], to: [u8; 3], t: f32) -> [u8; 3] {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    [mix(from[0], to[0]), mix(from[1], to[1]), mix(from[2], to[2])]
}

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}
