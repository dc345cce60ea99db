use bevy_egui::{egui, EguiContexts};

/// Translucent dark panels so the map stays visible under the HUD.
pub fn apply_hud_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();

    let panel = egui::Color32::from_rgba_unmultiplied(20, 28, 40, 210);
    let accent = egui::Color32::from_rgb(240, 200, 60);

    style.visuals.window_fill = panel;
    style.visuals.panel_fill = panel;
    style.visuals.window_stroke = egui::Stroke::new(1.0, accent);
    style.visuals.override_text_color = Some(egui::Color32::from_rgb(235, 235, 240));

    style.visuals.window_corner_radius = egui::CornerRadius::same(8);

    ctx.set_style(style);
}
