// ui.rs - Controls, grid painter and statistics

use eframe::egui;
use egui::{Color32, Mesh, Rect, Rounding, Shape, Stroke, Vec2};

use crate::geometry::{bridge_fillet, cell_origin, cell_under_pointer, rounding};
use crate::{BridgeGrid, BridgeGridInterface};
use bridge_cells::patterns::PATTERNS;
use bridge_cells::{BridgeTogglePolicy, CellState, CellView};

impl eframe::App for BridgeGrid {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Bridge Grid");

            // Controls
            ui.horizontal(|ui| {
                if ui.button("⏹ Clear").clicked() {
                    self.clear_grid();
                }

                if ui.button("🎲 Random").clicked() {
                    self.apply_random_pattern();
                }

                ui.separator();

                // Pattern dropdown
                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.apply_selected_pattern();
                }
            });

            ui.separator();

            ui.horizontal(|ui| {
                ui.checkbox(&mut self.show_bridges, "Show bridges");
                ui.checkbox(&mut self.round_corners, "Round corners");

                let mut override_bridges = self.controller.policy() == BridgeTogglePolicy::Override;
                if ui.checkbox(&mut override_bridges, "Click overrides bridges").changed() {
                    self.controller.set_policy(if override_bridges {
                        BridgeTogglePolicy::Override
                    } else {
                        BridgeTogglePolicy::Reject
                    });
                }

                ui.separator();

                ui.label("Radius:");
                let mut radius = self.controller.round_radius();
                if ui.add(egui::Slider::new(&mut radius, 0.0..=self.cell_size / 2.0)).changed() {
                    self.controller.set_round_radius(radius);
                }

                ui.separator();

                ui.label("Active:");
                ui.color_edit_button_srgba(&mut self.active_color);
                ui.label("Default:");
                ui.color_edit_button_srgba(&mut self.default_color);
            });

            ui.separator();

            ui.label("Click cells to toggle them. Diagonal neighbours are joined through bridge cells.");

            ui.separator();

            let (width, height) = self.controller.grid().dimensions();
            let pitch = self.cell_size + self.spacing;
            let total_size = Vec2::new(
                pitch * width as f32 - self.spacing,
                pitch * height as f32 - self.spacing,
            );

            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());
            let origin = response.rect.min;

            // Input first so the frame draws the settled grid.
            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    if let Some((x, y)) = cell_under_pointer(pos, origin, pitch, (width, height)) {
                        self.click(x, y);
                    }
                }
            }

            // Fill background
            painter.rect_filled(response.rect, 0.0, self.default_color);

            let snapshot = self.controller.snapshot();
            for view in &snapshot.cells {
                let rect = Rect::from_min_size(
                    cell_origin(origin, pitch, view.x, view.y),
                    Vec2::splat(self.cell_size),
                );
                self.draw_cell(&painter, rect, view);
            }

            ui.separator();

            // Statistics
            let total = width * height;
            let active = self.controller.active_count();
            let bridges = self.controller.bridge_count();
            ui.horizontal(|ui| {
                ui.label(format!("Active cells: {}", active));
                ui.label(format!("Bridge cells: {}", bridges));
                ui.label(format!("Default cells: {}", total - active - bridges));
            });

            if let Some(status) = &self.status {
                ui.colored_label(Color32::from_rgb(200, 60, 60), status.as_str());
            }
        });

        if self.controller.take_redraw() {
            ctx.request_repaint();
        }
    }
}

impl BridgeGrid {
    fn draw_cell(&self, painter: &egui::Painter, rect: Rect, view: &CellView) {
        match view.state {
            CellState::Default => {
                painter.rect_filled(rect, 0.0, self.default_color);
            }
            CellState::Active => {
                let corners = if self.round_corners {
                    rounding(view.corners)
                } else {
                    Rounding::default()
                };
                painter.rect_filled(rect, corners, self.active_color);
            }
            CellState::Bridge => {
                painter.rect_filled(rect, 0.0, self.default_color);
                if self.show_bridges {
                    let bezier = self.controller.round_radius();
                    for (corner, _) in view.bridge_arms.iter().enumerate().filter(|(_, arm)| **arm) {
                        painter.add(Shape::mesh(fan(bridge_fillet(rect, corner, bezier), self.active_color)));
                    }
                }
            }
        }

        // Draw subtle border
        if self.spacing > 0.0 {
            painter.rect_stroke(rect, 0.0, Stroke::new(0.2, Color32::from_gray(180)));
        }
    }
}

// Triangle fan around the first point.
fn fan(points: Vec<egui::Pos2>, color: Color32) -> Mesh {
    let mut mesh = Mesh::default();
    for &p in &points {
        mesh.colored_vertex(p, color);
    }
    for i in 1..points.len().saturating_sub(1) as u32 {
        mesh.add_triangle(0, i, i + 1);
    }
    mesh
}
