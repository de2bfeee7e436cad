// ui.rs - eframe front end: keyboard commands, mouse drawing, grid rendering

use eframe::egui;
use egui::{Color32, Key, Rect, Stroke, Vec2};
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::sim::{Command, PAUSED_TITLE, Simulation};

/// Keys checked each frame, in the order their commands are applied.
pub const KEY_BINDINGS: [(Key, Command, &str); 4] = [
    (Key::R, Command::Reset, "Reset"),
    (Key::E, Command::ToggleErase, "Toggle erase/draw mode"),
    (Key::C, Command::ToggleContinuous, "Toggle continued/paused mode"),
    (Key::Space, Command::Step, "Advance the game state on paused mode"),
];

/// Commands for this frame's key presses, in binding order. OS key-repeat
/// events are skipped so a held key fires once per physical press.
pub fn commands_for(events: &[egui::Event]) -> Vec<Command> {
    let pressed = |wanted: Key| {
        events.iter().any(|event| {
            matches!(event, egui::Event::Key { key, pressed: true, repeat: false, .. } if *key == wanted)
        })
    };

    KEY_BINDINGS
        .iter()
        .filter(|(key, _, _)| pressed(*key))
        .map(|(_, command, _)| *command)
        .collect()
}

pub struct LifeApp {
    sim             : Simulation,
    last_update     : Instant,
    update_interval : Duration,
    title           : &'static str,   // Title last sent to the window
    live_color      : Color32,
    dead_color      : Color32,
    line_color      : Color32,
}

impl LifeApp {
    pub fn new(config: &Config) -> Self {
        Self {
            sim: Simulation::from_config(config),
            last_update: Instant::now(),
            update_interval: config.frame_interval(),
            title: PAUSED_TITLE,
            live_color: Color32::WHITE,
            dead_color: Color32::BLACK,
            line_color: Color32::GRAY,
        }
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        let pressed = ctx.input(|i| commands_for(&i.events));

        for command in pressed {
            self.sim.apply(command);
        }
    }

    fn sync_title(&mut self, ctx: &egui::Context) {
        let title = self.sim.title();
        if title != self.title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.to_owned()));
            self.title = title;
        }
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);
        self.sync_title(ctx);

        // Continuous mode advances at most once per frame interval
        if self.last_update.elapsed() >= self.update_interval {
            self.sim.tick();
            self.last_update = Instant::now();
        }

        let frame = egui::Frame::none().fill(self.dead_color);
        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            let automaton = &self.sim.automaton;
            let cell = self.sim.cell_size() as f32;
            let total_size = Vec2::new(automaton.cols() as f32 * cell, automaton.rows() as f32 * cell);

            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click_and_drag());
            let origin = response.rect.min;

            // Draw while the primary button is held
            let pointer = ctx.input(|i| {
                if i.pointer.primary_down() { i.pointer.interact_pos() } else { None }
            });
            if let Some(pos) = pointer {
                let local = pos - origin;
                self.sim.paint(local.x, local.y);
            }

            let automaton = &self.sim.automaton;
            for row in 0..automaton.rows() {
                for col in 0..automaton.cols() {
                    let rect = Rect::from_min_size(
                        origin + Vec2::new(col as f32 * cell, row as f32 * cell),
                        Vec2::splat(cell),
                    );

                    painter.rect_stroke(rect, 0.0, Stroke::new(1.0, self.line_color));
                    if automaton.cell_at(row, col) {
                        painter.rect_filled(rect, 0.0, self.live_color);
                    }
                }
            }
        });

        ctx.request_repaint_after(self.update_interval);
    }
}
