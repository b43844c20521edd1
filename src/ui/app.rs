//! Main application for the game window

use eframe::egui;
use egui::{CentralPanel, ComboBox, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};
use tracing::error;

use super::board_view::{outcome_color, BoardView};
use super::game_state::{GameSettings, GameState};
use super::theme::*;
use crate::config::{AppConfig, Difficulty, BOARD_SIZES};
use crate::error::BoardError;

/// Main game application
pub struct TicTacToeApp {
    state: GameState,
    board_view: BoardView,
    /// Settings edited in the side panel, applied on "New Game"
    pending: GameSettings,
    show_stats: bool,
}

impl TicTacToeApp {
    /// Create the app from the loaded configuration
    pub fn new(_cc: &eframe::CreationContext<'_>, state: GameState) -> Self {
        let pending = state.settings;
        Self {
            state,
            board_view: BoardView::default(),
            pending,
            show_stats: true,
        }
    }

    /// Build the initial game from a validated configuration
    pub fn initial_state(config: &AppConfig) -> Result<GameState, BoardError> {
        GameState::new(GameSettings::from(config))
    }

    fn new_game(&mut self) {
        if let Err(err) = self.state.apply_settings(self.pending) {
            error!(%err, "cannot start game");
            self.state.message = Some(err.to_string());
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.new_game();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_stats, "Engine Stats (S)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let settings = self.state.settings;
                    ui.label(format!(
                        "{0}x{0} - {1}",
                        settings.board_size,
                        settings.difficulty.label()
                    ));
                });
            });
        });
    }

    /// Render the side panel with settings, status and stats
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    ui.add_space(8.0);
                    ui.label(RichText::new("TIC-TAC-TOE").size(22.0).strong().color(TEXT_PRIMARY));
                });
                ui.add_space(12.0);

                self.render_status_card(ui);
                ui.add_space(10.0);

                self.render_settings_card(ui);

                if self.show_stats {
                    ui.add_space(10.0);
                    self.render_stats_card(ui);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::card_frame().show(ui, |ui| {
                        ui.label(RichText::new(msg).size(11.0).color(STATUS_BUSY));
                    });
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

    fn render_status_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("STATUS").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let color = match self.state.game_over {
                Some(outcome) => outcome_color(outcome),
                None if self.state.is_ai_thinking() => STATUS_BUSY,
                None => STATUS_OK,
            };
            ui.label(RichText::new(self.state.status_text()).size(18.0).strong().color(color));

            if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                ui.label(
                    RichText::new(format!("{:.2}s", elapsed.as_secs_f32()))
                        .size(12.0)
                        .color(TEXT_SECONDARY),
                );
            }

            if self.state.game_over.is_some() {
                ui.add_space(4.0);
                ui.label(RichText::new("Click the board to play again").size(10.0).color(TEXT_MUTED));
            }

            ui.add_space(4.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.move_history.len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_settings_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SETTINGS").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            ComboBox::from_label("Board size")
                .selected_text(format!("{0}x{0}", self.pending.board_size))
                .show_ui(ui, |ui| {
                    for size in BOARD_SIZES {
                        ui.selectable_value(&mut self.pending.board_size, size, format!("{size}x{size}"));
                    }
                });

            ComboBox::from_label("Difficulty")
                .selected_text(self.pending.difficulty.label())
                .show_ui(ui, |ui| {
                    for difficulty in Difficulty::ALL {
                        ui.selectable_value(&mut self.pending.difficulty, difficulty, difficulty.label());
                    }
                });

            ui.checkbox(&mut self.pending.pruning, "Alpha-beta pruning");

            ui.add_space(8.0);
            if ui.button("New Game").clicked() {
                self.new_game();
            }
        });
    }

    fn render_stats_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ENGINE").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if let Some(result) = &self.state.last_ai_result {
                ui.label(
                    RichText::new(format!("{:?} -> {}", result.search_type, result.best_move))
                        .size(12.0)
                        .strong()
                        .color(STATUS_OK),
                );
                ui.label(RichText::new(format!("Score: {}", result.score)).size(10.0).color(TEXT_SECONDARY));
                ui.label(
                    RichText::new(format!("{} nodes in {}ms", result.nodes, result.time_ms))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
            } else {
                ui.label(RichText::new("No engine move yet").size(10.0).color(TEXT_MUTED));
            }

            ui.label(
                RichText::new(format!("Depth {}", self.state.settings.search_depth()))
                    .size(10.0)
                    .color(TEXT_MUTED),
            );
        });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let clicked = self.board_view.show(
                ui,
                &self.state.board,
                self.state.last_move,
                self.state.game_over,
                self.state.winning_line.as_deref(),
            );

            if let Some(pos) = clicked {
                self.state.handle_click(pos);
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (new_game, toggle_stats) =
            ctx.input(|i| (i.key_pressed(egui::Key::N), i.key_pressed(egui::Key::S)));

        if new_game {
            self.new_game();
        }
        if toggle_stats {
            self.show_stats = !self.show_stats;
        }
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.check_ai_result();

        if self.state.is_ai_turn() && !self.state.is_ai_thinking() && self.state.game_over.is_none() {
            self.state.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}
