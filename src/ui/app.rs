//! Main application for the tic-tac-toe GUI

use std::time::Instant;

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};

use super::board_view::BoardView;
use super::game_state::{GameState, Phase};
use super::theme::*;
use crate::config::GameConfig;
use crate::Mark;

/// Main tic-tac-toe application
pub struct TicTacToeApp {
    state: GameState,
    board_view: BoardView,
    show_stats: bool,
}

impl TicTacToeApp {
    /// Create the app with the given pacing
    pub fn new(_cc: &eframe::CreationContext<'_>, config: GameConfig) -> Self {
        Self {
            state: GameState::new(config),
            board_view: BoardView::default(),
            show_stats: true,
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("Restart (N)").clicked() {
                        self.state.reset();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_stats, "Computer Stats (S)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!(
                        "You: {}  Computer: {}",
                        self.state.human,
                        self.state.computer()
                    ));
                });
            });
        });
    }

    /// Render the side panel with status, score and actions
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);

                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_status_card(ui);
                ui.add_space(10.0);

                self.render_tally_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_stats {
                    ui.add_space(10.0);
                    self.render_stats_card(ui);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("TIC-TAC-TOE").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("You vs the computer").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Status line: whose turn it is, or the result
    fn render_status_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("STATUS").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let color = match self.state.phase {
                Phase::HumanTurn => STATUS_TURN,
                Phase::ComputerTurn => STATUS_WAITING,
                Phase::HumanWon | Phase::ComputerWon | Phase::Draw => WIN_HIGHLIGHT,
            };
            ui.label(RichText::new(self.state.status()).size(20.0).strong().color(color));

            ui.add_space(4.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.move_count))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_tally_card(&self, ui: &mut egui::Ui) {
        let tally = self.state.tally;
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SCORE").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            for (label, count, color) in [
                ("You", tally.human_wins, mark_text_color(self.state.human)),
                ("Computer", tally.computer_wins, mark_text_color(self.state.computer())),
                ("Ties", tally.draws, TEXT_SECONDARY),
            ] {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(label).size(12.0).color(color));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(count.to_string()).size(14.0).strong().color(TEXT_PRIMARY));
                    });
                });
            }
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let btn_frame = Frame::new()
                .fill(BUTTON_BG)
                .corner_radius(CornerRadius::same(6))
                .inner_margin(8.0);

            btn_frame.show(ui, |ui| {
                if ui
                    .add(
                        egui::Label::new(RichText::new("Restart").size(12.0).color(TEXT_PRIMARY))
                            .sense(egui::Sense::click()),
                    )
                    .clicked()
                {
                    self.state.reset();
                }
            });
        });
    }

    /// Last computer search: chosen cell, score, nodes, time
    fn render_stats_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("COMPUTER STATS").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let Some(result) = &self.state.last_ai_result else {
                ui.label(RichText::new("Waiting for first reply...").size(10.0).color(TEXT_MUTED));
                return;
            };

            if let Some(idx) = result.best_move {
                ui.label(
                    RichText::new(format!("-> cell {idx}"))
                        .size(12.0)
                        .strong()
                        .color(WIN_HIGHLIGHT),
                );
            }
            ui.label(RichText::new(format!("Score: {}", result.score)).size(10.0).color(TEXT_SECONDARY));
            ui.label(
                RichText::new(format!("{} nodes, {} cutoffs", result.nodes, result.cutoffs))
                    .size(10.0)
                    .color(TEXT_SECONDARY),
            );
            ui.label(RichText::new(format!("{}ms", result.time_ms)).size(10.0).color(TEXT_MUTED));
        });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(MESSAGE_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(BOARD_AREA_BG).inner_margin(10.0))
            .show(ctx, |ui| {
                let clicked = self.board_view.show(
                    ui,
                    &self.state.board,
                    self.state.human,
                    self.state.last_move,
                    self.state.winning_line,
                    self.state.is_human_turn(),
                );

                if let Some(idx) = clicked {
                    if let Err(err) = self.state.try_place_mark(idx, Instant::now()) {
                        self.state.message = Some(err.to_string());
                    }
                }
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // S - Toggle stats panel
            if i.key_pressed(egui::Key::S) {
                self.show_stats = !self.show_stats;
            }

            // N - New game
            if i.key_pressed(egui::Key::N) {
                self.state.reset();
            }
        });
    }
}

fn mark_text_color(mark: Mark) -> egui::Color32 {
    match mark {
        Mark::X => X_MARK,
        Mark::O => O_MARK,
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        // Run the computer reply, announcement or reset when due
        let now = Instant::now();
        self.state.update(now);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Wake up for the next queued event
        if let Some(wait) = self.state.time_until_next_event(Instant::now()) {
            ctx.request_repaint_after(wait);
        }
    }
}
