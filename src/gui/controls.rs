//! Interactive controls tab.
//!
//! This module renders the showcase widgets (progress bar, button, checkbox,
//! radio group, combobox, slider and switches) and the RGB panel, and turns
//! user interaction into [`ControlAction`]s for the application to apply.

use eframe::egui;

use crate::core::control::{ControlEvent, PanelColor};

/// Caption of the plain button.
const BUTTON_LABEL: &str = "Кнопка";
/// Caption of the checkbox.
const CHECKBOX_LABEL: &str = "Чекбокс";
/// Options of the radio group.
const RADIO_OPTIONS: [&str; 2] = ["Опция 1", "Опция 2"];
/// Name reported for the radio group.
const RADIO_GROUP_LABEL: &str = "Опции";
/// Name reported for the drop-down list.
const COMBOBOX_LABEL: &str = "Выпадающий список";
/// Name reported for the slider.
const SLIDER_LABEL: &str = "Ползунок";
/// Caption of the plain switch.
const SWITCH_LABEL: &str = "Переключатель";
/// Caption of the switch driving pointer tracking.
const TRACK_MOUSE_LABEL: &str = "Отслеживать мышь";

/// User actions that can be triggered from the controls.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlAction {
    /// Log a widget interaction
    Notify(ControlEvent),
    /// Turn pointer tracking on or off (after logging the switch itself)
    SetMouseTracking(ControlEvent, bool),
    /// Repaint the display panel (after logging the choice)
    PickColor(PanelColor),
}

/// Widget values that persist between frames.
#[derive(Debug, Clone)]
pub struct ControlsState {
    pub checked: bool,
    pub radio: Option<usize>,
    pub combobox: String,
    pub slider: f32,
    pub switch_on: bool,
    pub track_mouse: bool,
}

impl ControlsState {
    /// Initial widget values; the combobox shows its first entry.
    pub fn new(combobox_options: &[String], slider_range: (f32, f32)) -> Self {
        Self {
            checked: false,
            radio: None,
            combobox: combobox_options.first().cloned().unwrap_or_default(),
            slider: (slider_range.0 + slider_range.1) / 2.0,
            switch_on: false,
            track_mouse: false,
        }
    }
}

/// Renders the controls tab and returns any action triggered by the user.
pub struct ControlsRenderer<'a> {
    /// Mutable widget values
    state: &'a mut ControlsState,
    /// Current log fill ratio
    progress: f32,
    /// Lines that make a full log
    capacity: usize,
    /// Drop-down entries
    combobox_options: &'a [String],
    /// Slider bounds
    slider_range: (f32, f32),
}

impl<'a> ControlsRenderer<'a> {
    /// Create a new controls renderer.
    pub fn new(
        state: &'a mut ControlsState,
        progress: f32,
        capacity: usize,
        combobox_options: &'a [String],
        slider_range: (f32, f32),
    ) -> Self {
        Self {
            state,
            progress,
            capacity,
            combobox_options,
            slider_range,
        }
    }

    /// Render the controls and return the triggered action, if any.
    pub fn render(&mut self, ui: &mut egui::Ui) -> Option<ControlAction> {
        ui.vertical_centered(|ui| {
            self.render_progress(ui);
            ui.separator();
            let basic = self.render_basic_controls(ui);
            ui.separator();
            self.render_value_controls(ui).or(basic)
        })
        .inner
    }

    /// Log fullness indicator.
    fn render_progress(&self, ui: &mut egui::Ui) {
        ui.add_space(10.0);
        ui.label(
            egui::RichText::new(format!("Заполненность логов (до {})", self.capacity)).size(14.0),
        );
        ui.add(
            egui::ProgressBar::new(self.progress)
                .desired_width(200.0)
                .show_percentage(),
        );
        ui.add_space(5.0);
    }

    /// Button, checkbox and radio group.
    fn render_basic_controls(&mut self, ui: &mut egui::Ui) -> Option<ControlAction> {
        let mut action: Option<ControlAction> = None;

        ui.add_space(5.0);
        if ui.button(BUTTON_LABEL).clicked() {
            action = Some(ControlAction::Notify(ControlEvent::button(BUTTON_LABEL)));
        }

        ui.add_space(5.0);
        if ui.checkbox(&mut self.state.checked, CHECKBOX_LABEL).changed() {
            action = Some(ControlAction::Notify(ControlEvent::checkbox(
                CHECKBOX_LABEL,
                self.state.checked,
            )));
        }

        ui.add_space(5.0);
        for (index, option) in RADIO_OPTIONS.iter().enumerate() {
            if ui
                .radio_value(&mut self.state.radio, Some(index), *option)
                .clicked()
            {
                action = Some(ControlAction::Notify(ControlEvent::radio(
                    RADIO_GROUP_LABEL,
                    *option,
                )));
            }
        }

        action
    }

    /// Combobox, slider and the two switches.
    fn render_value_controls(&mut self, ui: &mut egui::Ui) -> Option<ControlAction> {
        let mut action: Option<ControlAction> = None;

        ui.add_space(5.0);
        egui::ComboBox::from_id_salt("showcase_combo")
            .selected_text(self.state.combobox.clone())
            .width(200.0)
            .show_ui(ui, |ui| {
                for option in self.combobox_options {
                    if ui
                        .selectable_value(&mut self.state.combobox, option.clone(), option.as_str())
                        .clicked()
                    {
                        action = Some(ControlAction::Notify(ControlEvent::combobox(
                            COMBOBOX_LABEL,
                            option.clone(),
                        )));
                    }
                }
            });

        ui.add_space(5.0);
        let (from, to) = self.slider_range;
        let response = ui.add(egui::Slider::new(&mut self.state.slider, from..=to));
        if response.changed() {
            action = Some(ControlAction::Notify(ControlEvent::slider(
                SLIDER_LABEL,
                self.state.slider,
            )));
        }

        ui.add_space(5.0);
        if ui
            .toggle_value(&mut self.state.switch_on, SWITCH_LABEL)
            .changed()
        {
            action = Some(ControlAction::Notify(ControlEvent::switch(
                SWITCH_LABEL,
                self.state.switch_on,
            )));
        }

        ui.add_space(5.0);
        if ui
            .toggle_value(&mut self.state.track_mouse, TRACK_MOUSE_LABEL)
            .changed()
        {
            action = Some(ControlAction::SetMouseTracking(
                ControlEvent::switch(TRACK_MOUSE_LABEL, self.state.track_mouse),
                self.state.track_mouse,
            ));
        }

        action
    }
}

/// Render the RGB tab: a color panel and one button per color.
pub fn render_color_panel(ui: &mut egui::Ui, color: Option<PanelColor>) -> Option<ControlAction> {
    let mut action: Option<ControlAction> = None;

    ui.add_space(10.0);
    let width = ui.available_width();
    let (response, painter) =
        ui.allocate_painter(egui::vec2(width, 50.0), egui::Sense::hover());
    let fill = match color {
        Some(c) => {
            let [r, g, b] = c.rgb();
            egui::Color32::from_rgb(r, g, b)
        }
        None => ui.visuals().faint_bg_color,
    };
    painter.rect_filled(response.rect, 4.0, fill);

    ui.add_space(10.0);
    ui.horizontal(|ui| {
        for choice in PanelColor::ALL {
            let button = egui::Button::new(choice.caption()).min_size(egui::vec2(100.0, 0.0));
            if ui.add(button).clicked() {
                action = Some(ControlAction::PickColor(choice));
            }
            ui.add_space(10.0);
        }
    });

    action
}
