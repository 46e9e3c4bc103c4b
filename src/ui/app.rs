//! Main application for the GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::{BoardView, Markers};
use super::game_state::{GameMode, GameResult, GameState};
use super::theme::*;
use crate::diagnostics::{explain, player_name};
use crate::eval::potential_map;
use crate::{AIEngine, EngineConfig, FallbackPolicy, Player};

/// Main application
pub struct Cube4App {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
    show_scores: bool,
}

impl Default for Cube4App {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl Cube4App {
    /// Create the app with the given engine configuration
    pub fn new(_cc: &eframe::CreationContext<'_>, config: EngineConfig) -> Self {
        Self::with_config(config)
    }

    fn with_config(config: EngineConfig) -> Self {
        Self {
            state: GameState::with_engine(GameMode::default(), AIEngine::with_config(config)),
            board_view: BoardView::default(),
            show_debug: true,
            show_scores: false,
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (PvE - Black)").clicked() {
                        self.state.restart(GameMode::PvE { human: Player::Black });
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvE - White)").clicked() {
                        self.state.restart(GameMode::PvE { human: Player::White });
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvP)").clicked() {
                        self.state.restart(GameMode::PvP);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo").clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("Engine", |ui| {
                    let mut policy = self.state.policy();
                    ui.radio_value(&mut policy, FallbackPolicy::PotentialLines, "Line potential");
                    ui.radio_value(&mut policy, FallbackPolicy::CenterPreference, "Center preference");
                    if policy != self.state.policy() {
                        self.state.set_policy(policy);
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                    ui.checkbox(&mut self.show_scores, "Potential Scores (S)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.state.mode {
                        GameMode::PvE { human } => format!("PvE - You: {}", player_name(human)),
                        GameMode::PvP => "PvP - Hotseat".to_string(),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(260.0)
            .max_width(300.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(result) = self.state.game_over.clone() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, &result);
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
            ui.label(RichText::new("CUBE 4").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("4x4x4 gravity connect-four").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.state.current_turn;
            let (accent, stone_color) = match turn {
                Player::Black => (egui::Color32::from_rgb(70, 70, 75), TEXT_PRIMARY),
                Player::White => (egui::Color32::from_rgb(220, 220, 225), egui::Color32::from_rgb(30, 30, 35)),
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    turn.symbol().to_string(),
                    egui::FontId::proportional(24.0),
                    stone_color,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(player_name(turn).to_uppercase()).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if self.state.game_over.is_some() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else if self.state.is_ai_turn() {
                        ("AI to move", STATUS_WARNING)
                    } else {
                        ("Your turn", STATUS_OK)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });

            ui.add_space(6.0);
            let elapsed = self.state.move_timer.elapsed();
            ui.label(RichText::new(format!("{:.1}s on this move", elapsed.as_secs_f32())).size(11.0).color(TEXT_SECONDARY));
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("Undo (U)").clicked() {
                    self.state.undo();
                }
                if ui.button("Hint (H)").clicked() {
                    self.state.request_suggestion();
                }
                if ui.button("New (N)").clicked() {
                    self.state.reset();
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!(
                    "Move #{}  |  policy: {}",
                    self.state.move_history.len(),
                    self.state.policy().name()
                ))
                .size(11.0)
                .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render debug card: last decision and the potential map
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if let Some((result, player)) = &self.state.last_ai_result {
                ui.label(RichText::new(format!("{:?}", result.rule)).size(12.0).strong().color(STATUS_OK));
                ui.label(RichText::new(explain(result, *player)).size(10.0).color(TEXT_SECONDARY));
                if let Some(ai_time) = self.state.move_timer.ai_thinking_time {
                    ui.label(RichText::new(format!("{} us", ai_time.as_micros())).size(10.0).color(TEXT_MUTED));
                }
                if result.is_legal() {
                    ui.label(RichText::new(format!("-> {}", result.column)).size(12.0).strong().color(WIN_HIGHLIGHT));
                }
            } else {
                ui.label(RichText::new("No decision yet").size(10.0).color(TEXT_MUTED));
            }

            ui.add_space(8.0);
            let map = potential_map(&self.state.board, self.state.current_turn);
            ui.label(
                RichText::new(format!("Potential for {}", player_name(self.state.current_turn)))
                    .size(10.0)
                    .color(TEXT_MUTED),
            );
            egui::Grid::new("potential_grid").spacing([10.0, 2.0]).show(ui, |ui| {
                for row in &map {
                    for cell in row {
                        let text = cell.map_or("-".to_string(), |s| s.to_string());
                        ui.label(RichText::new(text).monospace().color(TEXT_PRIMARY));
                    }
                    ui.end_row();
                }
            });
        });
    }

    /// Render game over card
    fn render_game_over_card(&mut self, ui: &mut egui::Ui, result: &GameResult) {
        let headline = match result.winner {
            Some(player) => format!("{} WINS!", player_name(player).to_uppercase()),
            None => "DRAW".to_string(),
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(12.0);
                    if ui.button("New Game").clicked() {
                        self.state.reset();
                    }
                });
            });
    }

    /// Render status message card
    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(BOARD_AREA_BG).inner_margin(16.0))
            .show(ctx, |ui| {
                let scores = self
                    .show_scores
                    .then(|| potential_map(&self.state.board, self.state.current_turn));
                let winning_line = self
                    .state
                    .game_over
                    .as_ref()
                    .map(|r| r.winning_line.clone())
                    .unwrap_or_default();

                let markers = Markers {
                    last_move: self.state.last_move,
                    suggested: self.state.suggested_move,
                    winning_line: &winning_line,
                    scores: scores.as_ref(),
                };

                let clicked = self.board_view.show(
                    ui,
                    &self.state.board,
                    self.state.current_turn,
                    &markers,
                    self.state.game_over.is_some(),
                );

                if let Some(column) = clicked {
                    if let Err(msg) = self.state.try_drop(column) {
                        self.state.message = Some(msg);
                    }
                }
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }
            if i.key_pressed(egui::Key::S) {
                self.show_scores = !self.show_scores;
            }
            if i.key_pressed(egui::Key::H) {
                self.state.request_suggestion();
            }
            if i.key_pressed(egui::Key::U) {
                self.state.undo();
            }
            if i.key_pressed(egui::Key::N) {
                self.state.reset();
            }
        });
    }
}

impl eframe::App for Cube4App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        // The engine answers immediately; no worker thread needed
        if self.state.is_ai_turn() && self.state.game_over.is_none() {
            self.state.play_ai_move();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}
