//! Read-only log view.

use eframe::egui;

use crate::core::log::EventLog;
use crate::core::tracker::Position;

/// Renders the event log as a scrolling monospace list that follows new lines.
pub struct LogViewRenderer<'a> {
    log: &'a EventLog,
    /// Last pointer position accepted by the tracker
    pointer: Option<Position>,
}

impl<'a> LogViewRenderer<'a> {
    pub fn new(log: &'a EventLog, pointer: Option<Position>) -> Self {
        Self { log, pointer }
    }

    pub fn render(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Записей: {} | Строк: {} / {}",
                self.log.len(),
                self.log.line_count(),
                self.log.capacity()
            ));
            if let Some(pos) = self.pointer {
                ui.separator();
                ui.label(format!("Курсор: {}, {}", pos.x, pos.y));
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .add_enabled(!self.log.is_empty(), egui::Button::new("📋 Копировать"))
                    .clicked()
                {
                    ui.ctx().copy_text(self.log.text());
                }
            });
        });
        ui.separator();

        let row_height = ui.text_style_height(&egui::TextStyle::Monospace);
        let records = self.log.records();
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .stick_to_bottom(true)
            .show_rows(ui, row_height, records.len(), |ui, rows| {
                for record in &records[rows] {
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(format!("[{}]", record.timestamp()))
                                .monospace()
                                .weak(),
                        );
                        ui.monospace(record.message());
                    });
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_once(log: &EventLog) {
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                LogViewRenderer::new(log, Some(Position { x: 3, y: 4 })).render(ui);
            });
        });
    }

    #[test]
    fn test_render_empty_log() {
        render_once(&EventLog::new(10));
    }

    #[test]
    fn test_render_long_log() {
        let mut log = EventLog::new(1000);
        for i in 0..5000 {
            log.append(format!("Курсор: X={i}, Y=0"));
        }
        render_once(&log);
        assert_eq!(log.len(), 5000);
    }
}
