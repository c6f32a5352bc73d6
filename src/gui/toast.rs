//! Toast notifications for action outcomes.
//!
//! Displays save/test results as temporary notifications anchored to the
//! top-right corner. One toast is visible at a time; further toasts queue.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use eframe::egui::{self, Align2, Color32, Id, RichText, Vec2};

use super::theme::{ACCENT_CYAN, ACCENT_GREEN, ACCENT_RED, BG_SECONDARY};

/// How long a toast is displayed
const TOAST_DURATION: Duration = Duration::from_secs(4);

/// Animation duration for fade in/out
const FADE_DURATION: f32 = 0.3;

/// Visual flavor of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn color(self) -> Color32 {
        match self {
            ToastKind::Success => ACCENT_GREEN,
            ToastKind::Error => ACCENT_RED,
            ToastKind::Info => ACCENT_CYAN,
        }
    }

    fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "✔",
            ToastKind::Error => "✘",
            ToastKind::Info => "ℹ",
        }
    }
}

/// A single queued notification.
#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

/// Queue of pending toasts plus the one currently on screen.
#[derive(Default)]
pub struct ToastQueue {
    pending: VecDeque<Toast>,
    current: Option<(Toast, Instant)>,
}

impl ToastQueue {
    /// Enqueue a new toast.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) {
        self.pending.push_back(Toast {
            kind,
            message: message.into(),
        });
    }

    /// Render the active toast, advancing the queue as toasts expire.
    pub fn render(&mut self, ctx: &egui::Context) {
        if self.current.is_none() {
            if let Some(toast) = self.pending.pop_front() {
                self.current = Some((toast, Instant::now()));
            }
        }

        let Some((toast, shown_at)) = &self.current else {
            return;
        };

        let elapsed = shown_at.elapsed();
        if elapsed > TOAST_DURATION {
            self.current = None;
            ctx.request_repaint(); // check for the next toast
            return;
        }

        // Fade in at the start, out at the end
        let progress = elapsed.as_secs_f32();
        let alpha = if progress < FADE_DURATION {
            progress / FADE_DURATION
        } else if progress > TOAST_DURATION.as_secs_f32() - FADE_DURATION {
            (TOAST_DURATION.as_secs_f32() - progress) / FADE_DURATION
        } else {
            1.0
        };

        let animated_alpha = ctx.animate_value_with_time(Id::new("toast_alpha"), alpha, 0.1);

        let toast = toast.clone();

        egui::Area::new(Id::new("action_toast"))
            .anchor(Align2::RIGHT_TOP, Vec2::new(-20.0, 20.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                let bg_color = Color32::from_rgba_unmultiplied(
                    BG_SECONDARY.r(),
                    BG_SECONDARY.g(),
                    BG_SECONDARY.b(),
                    (animated_alpha * 240.0) as u8,
                );

                egui::Frame::NONE
                    .fill(bg_color)
                    .stroke(egui::Stroke::new(
                        1.0,
                        apply_alpha(toast.kind.color(), animated_alpha * 0.6),
                    ))
                    .corner_radius(6.0)
                    .inner_margin(12.0)
                    .show(ui, |ui| {
                        ui.set_min_width(260.0);
                        ui.horizontal(|ui| {
                            ui.label(
                                RichText::new(toast.kind.icon())
                                    .color(apply_alpha(toast.kind.color(), animated_alpha))
                                    .size(18.0),
                            );
                            ui.label(
                                RichText::new(&toast.message)
                                    .color(apply_alpha(Color32::WHITE, animated_alpha)),
                            );
                        });
                    });
            });

        // Keep repainting for the fade animation
        ctx.request_repaint();
    }
}

/// Apply alpha to a color
fn apply_alpha(color: Color32, alpha: f32) -> Color32 {
    Color32::from_rgba_unmultiplied(
        color.r(),
        color.g(),
        color.b(),
        (color.a() as f32 * alpha) as u8,
    )
}
