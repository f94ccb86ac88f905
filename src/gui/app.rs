//! Main application state and GUI logic.
//!
//! This module defines the main application struct and implements the eframe::App trait.
//! It owns the event log and routes every widget interaction, pointer movement
//! and timer tick into the core.

use eframe::egui;

use crate::core::clock::{Clock, SystemClock};
use crate::core::config::AppSettings;
use crate::core::control::{ControlEvent, PanelColor};
use crate::core::error::AppError;
use crate::core::log::{EventLog, EventSink, STARTUP_MESSAGE};
use crate::core::timer::{ElapsedTimer, TimerState};
use crate::core::tracker::PositionFilter;

use super::controls::{self, ControlAction, ControlsRenderer, ControlsState};
use super::log_view::LogViewRenderer;

/// Tabs of the main window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    /// Showcase widgets and the log fullness bar
    #[default]
    Controls,
    /// Color panel
    Rgb,
    /// Elapsed time label
    Timer,
    /// Event log
    Logs,
}

impl Tab {
    const ALL: [Tab; 4] = [Tab::Controls, Tab::Rgb, Tab::Timer, Tab::Logs];

    fn title(self) -> &'static str {
        match self {
            Tab::Controls => "Элементы интерфейса",
            Tab::Rgb => "RGB",
            Tab::Timer => "Таймер",
            Tab::Logs => "Логи",
        }
    }
}

/// Kind of status message to display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatusKind {
    /// Success message (shown in green)
    Success,
    /// Error message (shown in red)
    Error,
}

/// A status message with its kind and timestamp.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// The message text
    pub text: String,
    /// Kind of message (success/error)
    pub kind: StatusKind,
    /// When the message was created (for auto-dismiss)
    pub created_at: std::time::Instant,
}

impl StatusMessage {
    /// Create a new status message.
    pub fn new(text: impl Into<String>, kind: StatusKind) -> Self {
        Self {
            text: text.into(),
            kind,
            created_at: std::time::Instant::now(),
        }
    }

    /// Build an error message from an application error.
    pub fn from_error(error: &AppError) -> Self {
        let text = match error.file_path() {
            Some(path) => format!(
                "{}: {} ({})",
                error.dialog_title(),
                error.brief_description(),
                path.display()
            ),
            None => format!("{}: {}", error.dialog_title(), error.brief_description()),
        };
        Self::new(text, StatusKind::Error)
    }

    /// Duration to show status messages before auto-dismissing.
    const DISPLAY_DURATION: std::time::Duration = std::time::Duration::from_secs(5);

    /// Check if the message should still be displayed.
    pub fn is_visible(&self) -> bool {
        self.created_at.elapsed() < Self::DISPLAY_DURATION
    }
}

/// Main application state and GUI logic.
pub struct ShowcaseApp {
    /// Persisted preferences
    settings: AppSettings,
    /// Every interaction, in order
    log: EventLog,
    /// Gate for pointer movement notifications
    tracker: PositionFilter,
    /// Elapsed-time reporter and the label it writes to
    timer: ElapsedTimer,
    timer_text: String,
    /// Wall-clock source for the timer
    clock: SystemClock,
    /// Currently selected tab
    tab: Tab,
    /// Widget values on the controls tab
    controls: ControlsState,
    /// Color of the RGB display panel, none until a button is pressed
    panel_color: Option<PanelColor>,
    /// Status message to display (settings notifications)
    status_message: Option<StatusMessage>,
}

impl ShowcaseApp {
    /// Create a new application instance.
    pub fn new(cc: &eframe::CreationContext<'_>, settings: AppSettings) -> Self {
        cc.egui_ctx.set_visuals(visuals_for(settings.dark_mode));

        let clock = SystemClock;
        let mut log = EventLog::new(settings.get_log_capacity());
        log.append(STARTUP_MESSAGE);

        let timer = ElapsedTimer::new(clock.now(), settings.get_timer_period());
        let timer_text = timer.initial_text();
        let controls =
            ControlsState::new(&settings.get_combobox_options(), settings.get_slider_range());

        tracing::info!(
            capacity = log.capacity(),
            period_ms = settings.timer_period_ms,
            "showcase started"
        );

        Self {
            settings,
            log,
            tracker: PositionFilter::new(),
            timer,
            timer_text,
            clock,
            tab: Tab::default(),
            controls,
            panel_color: None,
            status_message: None,
        }
    }

    /// Apply an action produced by the controls.
    fn handle_control_action(&mut self, action: ControlAction) {
        apply_control_action(
            action,
            &mut self.log,
            &mut self.tracker,
            &mut self.panel_color,
        );
    }

    /// Flip between dark and light visuals and persist the choice.
    fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.settings.dark_mode = !self.settings.dark_mode;
        ctx.set_visuals(visuals_for(self.settings.dark_mode));
        self.status_message = Some(match self.settings.save() {
            Ok(()) => StatusMessage::new("Настройки сохранены", StatusKind::Success),
            Err(e) => {
                tracing::warn!(error = %e.brief_description(), "failed to save settings");
                StatusMessage::from_error(&e)
            }
        });
    }

    /// Stop background work and persist settings before the window closes.
    fn shutdown(&mut self, ctx: &egui::Context) {
        self.timer.stop();
        if let Some(rect) = ctx.input(|i| i.viewport().inner_rect) {
            self.settings.window_size = (rect.width(), rect.height());
        }
        if let Err(e) = self.settings.save() {
            tracing::warn!(error = %e.brief_description(), "failed to save settings on exit");
        }
        tracing::info!(records = self.log.len(), "showcase closing");
    }
}

impl eframe::App for ShowcaseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.viewport().close_requested())
            && self.timer.state() == TimerState::Running
        {
            self.shutdown(ctx);
        }

        // Cooperative timer: fire if due, then sleep until the next firing
        let now = self.clock.now();
        self.timer.poll(now, &mut self.timer_text);
        if let Some(wait) = self.timer.time_until_next(now) {
            ctx.request_repaint_after(wait);
        }

        if self.tracker.is_enabled() {
            if let Some(pos) = ctx.input(|i| i.pointer.hover_pos()) {
                self.tracker
                    .observe(pos.x.round() as i32, pos.y.round() as i32, &mut self.log);
            }
        }

        self.render_header(ctx);
        self.render_tab(ctx);
    }
}

impl ShowcaseApp {
    /// Render the tab bar, theme switch and status line.
    fn render_header(&mut self, ctx: &egui::Context) {
        let mut theme_clicked = false;

        egui::TopBottomPanel::top("tabs").show(ctx, |ui| {
            ui.horizontal(|ui| {
                for tab in Tab::ALL {
                    ui.selectable_value(&mut self.tab, tab, tab.title());
                }

                ui.separator();

                let theme_label = if self.settings.dark_mode {
                    "☀ Светлая тема"
                } else {
                    "🌙 Тёмная тема"
                };
                let hover = AppSettings::get_config_path()
                    .map(|p| format!("Сохраняется в {}", p.display()))
                    .unwrap_or_else(|| "Настройки не сохраняются".to_string());
                if ui.button(theme_label).on_hover_text(hover).clicked() {
                    theme_clicked = true;
                }

                // Show status message in the header (right-aligned)
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    self.render_status_message(ui);
                });
            });
        });

        if theme_clicked {
            self.toggle_theme(ctx);
        }
    }

    /// Render the status message if one is active.
    fn render_status_message(&mut self, ui: &mut egui::Ui) {
        let should_dismiss = self
            .status_message
            .as_ref()
            .is_some_and(|msg| !msg.is_visible());

        if should_dismiss {
            self.status_message = None;
            return;
        }

        let msg_info = self.status_message.as_ref().map(|msg| {
            let color = match msg.kind {
                StatusKind::Success => egui::Color32::from_rgb(76, 175, 80), // Green
                StatusKind::Error => egui::Color32::from_rgb(244, 67, 54),   // Red
            };
            (color, msg.text.clone())
        });

        if let Some((color, text)) = msg_info {
            let mut dismiss_clicked = false;

            ui.horizontal(|ui| {
                if ui.small_button("✕").clicked() {
                    dismiss_clicked = true;
                }
                ui.colored_label(color, &text);
            });

            if dismiss_clicked {
                self.status_message = None;
            } else {
                // Wake up again to auto-dismiss
                ui.ctx().request_repaint_after(StatusMessage::DISPLAY_DURATION);
            }
        }
    }

    /// Render the body of the selected tab.
    fn render_tab(&mut self, ctx: &egui::Context) {
        let mut action: Option<ControlAction> = None;

        egui::CentralPanel::default().show(ctx, |ui| match self.tab {
            Tab::Controls => {
                let options = self.settings.get_combobox_options();
                let mut renderer = ControlsRenderer::new(
                    &mut self.controls,
                    self.log.progress().value(),
                    self.log.capacity(),
                    &options,
                    self.settings.get_slider_range(),
                );
                action = renderer.render(ui);
            }
            Tab::Rgb => {
                action = controls::render_color_panel(ui, self.panel_color);
            }
            Tab::Timer => {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.label(egui::RichText::new(&self.timer_text).size(16.0));
                });
            }
            Tab::Logs => {
                LogViewRenderer::new(&self.log, self.tracker.last_position()).render(ui);
            }
        });

        if let Some(action) = action {
            self.handle_control_action(action);
        }
    }
}

/// Route a control action into the core.
///
/// The switch line is logged before the tracker's own transition line.
fn apply_control_action(
    action: ControlAction,
    sink: &mut dyn EventSink,
    tracker: &mut PositionFilter,
    panel_color: &mut Option<PanelColor>,
) {
    match action {
        ControlAction::Notify(event) => {
            event.notify(sink);
        }
        ControlAction::SetMouseTracking(event, enabled) => {
            event.notify(sink);
            tracker.set_enabled(enabled, sink);
        }
        ControlAction::PickColor(color) => {
            *panel_color = Some(color);
            ControlEvent::color(color).notify(sink);
        }
    }
}

/// egui visuals for the chosen theme.
fn visuals_for(dark_mode: bool) -> egui::Visuals {
    if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    }
}
