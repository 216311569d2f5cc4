use std::time::Instant;
use eframe::egui;
use tictactoe_common::games::tictactoe::{GameStatus, Mark, Position};
use tictactoe_common::log;

use crate::colors;
use super::controller::{GameController, outcome_text};

pub struct TicTacToeApp {
    controller: GameController,
}

impl TicTacToeApp {
    const CELL_SIZE: f32 = 110.0;
    const CELL_SPACING: f32 = 10.0;
    const MARK_FONT_SIZE: f32 = 40.0;

    pub fn new(controller: GameController) -> Self {
        Self { controller }
    }

    fn render_header(&self, ui: &mut egui::Ui) {
        let game = self.controller.game();
        let status_color = match game.status() {
            GameStatus::InProgress if game.turn() == Mark::O => colors::STATUS_OPPONENT,
            GameStatus::InProgress => colors::STATUS_HUMAN,
            _ => colors::STATUS_FINISHED,
        };

        ui.add_space(10.0);
        ui.label(
            egui::RichText::new(self.controller.status_text())
                .size(18.0)
                .strong()
                .color(status_color),
        );
        ui.label(
            egui::RichText::new(self.controller.score_text())
                .size(14.0)
                .strong()
                .color(colors::SCORE),
        );
        ui.add_space(10.0);
    }

    fn render_board(&mut self, ui: &mut egui::Ui) {
        let accepts_clicks = self.controller.accepts_clicks();
        let winning_line = self.controller.game().winning_line();
        let mut clicked = None;

        egui::Grid::new("tictactoe_board")
            .spacing([Self::CELL_SPACING, Self::CELL_SPACING])
            .show(ui, |ui| {
                for (row, cells) in self.controller.game().board().rows().iter().enumerate() {
                    for (col, &mark) in cells.iter().enumerate() {
                        let highlighted = winning_line
                            .map(|line| line.contains(Position::new(row, col)))
                            .unwrap_or(false);
                        let fill = if highlighted { colors::CELL_WINNING } else { colors::CELL };

                        let button = egui::Button::new(
                            egui::RichText::new(mark.symbol())
                                .size(Self::MARK_FONT_SIZE)
                                .strong()
                                .color(colors::MARK),
                        )
                        .fill(fill)
                        .min_size(egui::vec2(Self::CELL_SIZE, Self::CELL_SIZE));

                        let enabled = accepts_clicks && mark == Mark::Empty;
                        if ui.add_enabled(enabled, button).clicked() {
                            clicked = Some((row, col));
                        }
                    }
                    ui.end_row();
                }
            });

        if let Some((row, col)) = clicked {
            if let Err(rejection) = self.controller.click(row, col, Instant::now()) {
                log!("Click on ({}, {}) ignored: {}", row, col, rejection);
            }
        }
    }

    fn render_restart(&mut self, ui: &mut egui::Ui) {
        ui.add_space(10.0);
        let button = egui::Button::new(
            egui::RichText::new("Restart 🔄")
                .size(14.0)
                .strong()
                .color(egui::Color32::WHITE),
        )
        .fill(colors::RESTART);

        if ui.add(button).clicked() {
            self.controller.restart();
        }
    }

    fn render_game_over_dialog(&mut self, ctx: &egui::Context) {
        let Some(message) = self.controller.pending_notice().and_then(outcome_text) else {
            return;
        };

        egui::Window::new("Game Over")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new(message).size(18.0));
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        self.controller.dismiss_notice();
                    }
                });
            });
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.controller.tick(Instant::now());

        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(colors::BACKGROUND))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    self.render_header(ui);
                    self.render_board(ui);
                    self.render_restart(ui);
                });
            });

        self.render_game_over_dialog(ctx);

        if let Some(wait) = self.controller.opponent_wait(Instant::now()) {
            ctx.request_repaint_after(wait);
        }
    }
}
