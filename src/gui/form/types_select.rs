//! Notification type multi-selector.
//!
//! A checkbox per known category. Each change rewrites the whole bitmask;
//! there is no merge logic, and bits outside the catalogue stay untouched.

use eframe::egui::{self, RichText};

use crate::gui::theme::{TEXT_DIM, TEXT_MUTED};
use crate::notify::{NotificationType, NotificationTypes};

/// Render the selector. Returns true when the selection changed.
pub fn render_types_selector(ui: &mut egui::Ui, types: &mut NotificationTypes) -> bool {
    let mut changed = false;

    for ty in NotificationType::ALL {
        let mut on = types.contains(ty);
        ui.horizontal(|ui| {
            if ui
                .checkbox(&mut on, RichText::new(ty.display_name()).color(TEXT_DIM))
                .changed()
            {
                types.set(ty, on);
                changed = true;
            }
            ui.label(
                RichText::new(format!("({})", ty.description()))
                    .small()
                    .color(TEXT_MUTED),
            );
        });
        ui.add_space(2.0);
    }

    changed
}
