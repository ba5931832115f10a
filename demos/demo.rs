#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release
#![allow(rustdoc::missing_crate_level_docs)] // it's a demo

use std::fs;

use eframe::egui;
use egui::{emath, Color32, Frame, Pos2, Rect, Sense, Stroke, Ui};
use ron::ser::{to_string_pretty, PrettyConfig};
use unistroke_recognizer::{
    parameters::LINE_EXTENT_RATIO, Point, RecognitionResult, Recognizer, RecognizerParameters,
    DEFAULT_ACCEPTANCE_THRESHOLD,
};

fn main() -> eframe::Result {
    env_logger::init();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([720.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Shape sketcher",
        options,
        Box::new(|_| Ok(Box::<DemoApp>::default())),
    )
}

struct DemoApp {
    /// in 0-1 normalized coordinates
    line: Vec<Pos2>,
    last_stroke: Vec<Point>,
    stroke: Stroke,
    recognizer: Recognizer,
    template_name: String,
    status: String,
}

impl Default for DemoApp {
    fn default() -> Self {
        let params = RecognizerParameters {
            min_extent_ratio: LINE_EXTENT_RATIO,
            ..Default::default()
        };
        let (recognizer, status) =
            match Recognizer::with_builtin_shapes(params) {
                Ok(r) => (r, "Draw a circle, rectangle, triangle or line".to_owned()),
                Err(e) => (Recognizer::new(), format!("Could not load shapes: {e}")),
            };
        Self {
            line: Default::default(),
            last_stroke: Default::default(),
            stroke: Stroke::new(1.0, Color32::from_rgb(25, 200, 100)),
            recognizer,
            template_name: Default::default(),
            status,
        }
    }
}

/// Canvas positions grow downwards; templates are traced with y pointing up.
fn line_to_points(line: &[Pos2]) -> Vec<Point> {
    line.iter().map(|p| Point::new(p.x, -p.y)).collect()
}

fn points_to_line(points: &[Point]) -> Vec<Pos2> {
    points.iter().map(|p| Pos2::new(p.x, -p.y)).collect()
}

fn describe(result: &RecognitionResult) -> String {
    if result.is_accepted(DEFAULT_ACCEPTANCE_THRESHOLD) {
        format!("{} (score: {:.3})", result.label, result.score)
    } else {
        format!("No match. Guess: {} (score: {:.3})", result.label, result.score)
    }
}

impl DemoApp {
    fn recognize_stroke(&mut self) {
        self.last_stroke = line_to_points(&self.line);
        self.line.clear();
        self.status = match self.recognizer.recognize(&self.last_stroke) {
            Ok(result) => describe(&result),
            Err(e) => e.to_string(),
        };
    }

    fn save_template(&mut self) {
        let name = if self.template_name.trim().is_empty() {
            format!("Gesture {}", self.recognizer.library().len() + 1)
        } else {
            self.template_name.trim().to_owned()
        };
        self.status = match self.recognizer.register_template(&name, &self.last_stroke) {
            Ok(()) => format!("Saved {name:?}"),
            Err(e) => e.to_string(),
        };
        self.template_name.clear();
    }

    fn export_templates(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .set_file_name("templates.ron")
            .save_file()
        else {
            return;
        };
        let result = to_string_pretty(&self.recognizer.library().definitions(), PrettyConfig::default())
            .map_err(|e| e.to_string())
            .and_then(|data| fs::write(&path, data).map_err(|e| e.to_string()));
        self.status = match result {
            Ok(()) => format!("Exported to {}", path.display()),
            Err(e) => format!("Export failed: {e}"),
        };
    }

    pub fn ui_control(&mut self, ui: &mut egui::Ui) -> egui::Response {
        ui.horizontal(|ui| {
            if ui.button("Export Templates").clicked() {
                self.export_templates();
            }
            ui.separator();
            ui.text_edit_singleline(&mut self.template_name);
            if ui
                .add_enabled(!self.last_stroke.is_empty(), egui::Button::new("Save Stroke"))
                .clicked()
            {
                self.save_template();
            }
            ui.separator();
            if ui.button("Clear Drawing").clicked() {
                self.line.clear();
                self.last_stroke.clear();
                self.status.clear();
            }
            ui.label(self.status.clone());
        })
        .response
    }

    pub fn ui_content(&mut self, ui: &mut Ui) -> egui::Response {
        let (mut response, painter) =
            ui.allocate_painter(ui.available_size_before_wrap(), Sense::drag());

        let to_screen = emath::RectTransform::from_to(
            Rect::from_min_size(Pos2::ZERO, response.rect.square_proportions()),
            response.rect,
        );
        let from_screen = to_screen.inverse();

        if let Some(pointer_pos) = response.interact_pointer_pos() {
            let canvas_pos = from_screen * pointer_pos;
            if self.line.last() != Some(&canvas_pos) {
                self.line.push(canvas_pos);
                response.mark_changed();
            }
        }
        if response.drag_stopped() && !self.line.is_empty() {
            self.recognize_stroke();
            response.mark_changed();
        }

        let drawn = if self.line.is_empty() {
            points_to_line(&self.last_stroke)
        } else {
            self.line.clone()
        };
        if drawn.len() >= 2 {
            let points: Vec<Pos2> = drawn.iter().map(|p| to_screen * *p).collect();
            painter.add(egui::Shape::line(points, self.stroke));
        }

        response
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("templates").show(ctx, |ui| {
            ui.label("Templates:");
            egui::ScrollArea::vertical().show(ui, |ui| {
                for label in self.recognizer.library().labels() {
                    ui.group(|ui| {
                        ui.label(label);
                        let Some(stroke) = self.recognizer.library().stroke(label) else {
                            return;
                        };
                        let line = points_to_line(stroke);
                        let desired_size = egui::vec2(80.0, 60.0);
                        let (response, painter) = ui.allocate_painter(desired_size, Sense::hover());

                        // Compute a bounding box for all points
                        let mut min = Pos2::new(f32::MAX, f32::MAX);
                        let mut max = Pos2::new(f32::MIN, f32::MIN);
                        for p in &line {
                            min.x = min.x.min(p.x);
                            min.y = min.y.min(p.y);
                            max.x = max.x.max(p.x);
                            max.y = max.y.max(p.y);
                        }
                        let bounds = Rect::from_min_max(min, max).expand(1.0);
                        let transform = emath::RectTransform::from_to(bounds, response.rect);

                        for w in line.windows(2) {
                            painter.line_segment([transform * w[0], transform * w[1]], self.stroke);
                        }
                    });
                }
            });
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui_control(ui);
            ui.label("Draw a single stroke with your mouse/touch!");
            Frame::canvas(ui.style()).show(ui, |ui| {
                self.ui_content(ui);
            });
        });
    }
}
