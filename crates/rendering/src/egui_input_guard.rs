//! Egui input guard: keeps presses on the HUD from moving the target.

use bevy_egui::EguiContexts;

/// Returns `true` when egui wants the pointer (the cursor is over a panel or
/// egui is handling a drag). Pointer capture skips the frame when it does.
#[inline]
pub fn egui_wants_pointer(contexts: &mut EguiContexts) -> bool {
    contexts
        .try_ctx_mut()
        .is_some_and(|ctx| ctx.wants_pointer_input() || ctx.is_pointer_over_area())
}
