//! Uniform notifications from interactive controls.
//!
//! Every widget reports through the same [`ControlEvent`] payload, whose
//! `Display` impl produces the log line. The GUI never formats log text itself.

use std::fmt;

use super::log::EventSink;

/// The kind of control that produced a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlKind {
    /// Push button
    Button,
    /// Two-state checkbox
    Checkbox,
    /// Group of mutually exclusive options
    RadioGroup,
    /// Drop-down list
    Combobox,
    /// Continuous value slider
    Slider,
    /// On/off switch
    Switch,
    /// Color buttons driving the display panel
    ColorPanel,
}

/// Value carried by a control notification, one variant per control kind.
#[derive(Clone, Debug, PartialEq)]
pub enum ControlValue {
    /// Pressed
    Button,
    /// New checked state
    Checkbox(bool),
    /// Selected option text
    RadioGroup(String),
    /// Selected entry text
    Combobox(String),
    /// New position
    Slider(f32),
    /// New on/off state
    Switch(bool),
    /// Chosen panel color
    ColorPanel(PanelColor),
}

impl ControlValue {
    /// The kind of control this value comes from.
    pub fn kind(&self) -> ControlKind {
        match self {
            Self::Button => ControlKind::Button,
            Self::Checkbox(_) => ControlKind::Checkbox,
            Self::RadioGroup(_) => ControlKind::RadioGroup,
            Self::Combobox(_) => ControlKind::Combobox,
            Self::Slider(_) => ControlKind::Slider,
            Self::Switch(_) => ControlKind::Switch,
            Self::ColorPanel(_) => ControlKind::ColorPanel,
        }
    }
}

/// A single interaction: `{kind, label, value}`, with the kind implied by the value.
#[derive(Clone, Debug, PartialEq)]
pub struct ControlEvent {
    pub label: String,
    pub value: ControlValue,
}

impl ControlEvent {
    /// Build an event for a control.
    pub fn new(label: impl Into<String>, value: ControlValue) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    pub fn button(label: impl Into<String>) -> Self {
        Self::new(label, ControlValue::Button)
    }

    pub fn checkbox(label: impl Into<String>, checked: bool) -> Self {
        Self::new(label, ControlValue::Checkbox(checked))
    }

    pub fn radio(group: impl Into<String>, option: impl Into<String>) -> Self {
        Self::new(group, ControlValue::RadioGroup(option.into()))
    }

    pub fn combobox(label: impl Into<String>, option: impl Into<String>) -> Self {
        Self::new(label, ControlValue::Combobox(option.into()))
    }

    pub fn slider(label: impl Into<String>, value: f32) -> Self {
        Self::new(label, ControlValue::Slider(value))
    }

    pub fn switch(label: impl Into<String>, on: bool) -> Self {
        Self::new(label, ControlValue::Switch(on))
    }

    pub fn color(color: PanelColor) -> Self {
        Self::new("RGB", ControlValue::ColorPanel(color))
    }

    /// The kind of control that produced this event.
    pub fn kind(&self) -> ControlKind {
        self.value.kind()
    }

    /// Forward this event to a sink as one log line.
    pub fn notify(&self, sink: &mut dyn EventSink) {
        tracing::trace!(kind = ?self.kind(), label = %self.label, "control event");
        sink.record(&self.to_string());
    }
}

/// Russian on/off wording used by toggle controls.
fn state_word(on: bool) -> &'static str {
    if on { "включен" } else { "выключен" }
}

impl fmt::Display for ControlEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            ControlValue::Button => write!(f, "Нажата кнопка: '{}'", self.label),
            ControlValue::Checkbox(on) => {
                write!(f, "Чекбокс '{}' {}", self.label, state_word(*on))
            }
            ControlValue::RadioGroup(option) => {
                write!(f, "Выбрана радиокнопка: '{}'", option)
            }
            ControlValue::Combobox(option) => {
                write!(f, "Выбрано значение в выпадающем списке: '{}'", option)
            }
            ControlValue::Slider(value) => {
                write!(f, "Ползунок перемещен: значение {:.1}", value)
            }
            ControlValue::Switch(on) => {
                write!(f, "Переключатель '{}' {}", self.label, state_word(*on))
            }
            ControlValue::ColorPanel(color) => {
                write!(f, "Цвет панели изменён на: {}", color.name())
            }
        }
    }
}

/// Colors selectable for the display panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelColor {
    Red,
    Green,
    Blue,
}

impl PanelColor {
    /// All colors in button order.
    pub const ALL: [PanelColor; 3] = [PanelColor::Red, PanelColor::Green, PanelColor::Blue];

    /// Name used in log lines.
    pub fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
        }
    }

    /// Caption shown on the color button.
    pub fn caption(self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Blue => "Blue",
        }
    }

    /// RGB triple used to fill the panel.
    pub fn rgb(self) -> [u8; 3] {
        match self {
            Self::Red => [255, 0, 0],
            Self::Green => [0, 128, 0],
            Self::Blue => [0, 0, 255],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Lines(Vec<String>);

    impl EventSink for Lines {
        fn record(&mut self, message: &str) {
            self.0.push(message.to_string());
        }
    }

    #[test]
    fn test_button_message() {
        assert_eq!(
            ControlEvent::button("Кнопка").to_string(),
            "Нажата кнопка: 'Кнопка'"
        );
    }

    #[test]
    fn test_toggle_messages() {
        assert_eq!(
            ControlEvent::checkbox("Чекбокс", true).to_string(),
            "Чекбокс 'Чекбокс' включен"
        );
        assert_eq!(
            ControlEvent::checkbox("Чекбокс", false).to_string(),
            "Чекбокс 'Чекбокс' выключен"
        );
        assert_eq!(
            ControlEvent::switch("Переключатель", true).to_string(),
            "Переключатель 'Переключатель' включен"
        );
        assert_eq!(
            ControlEvent::switch("Переключатель", false).to_string(),
            "Переключатель 'Переключатель' выключен"
        );
    }

    #[test]
    fn test_choice_messages() {
        assert_eq!(
            ControlEvent::radio("Опции", "Опция 2").to_string(),
            "Выбрана радиокнопка: 'Опция 2'"
        );
        assert_eq!(
            ControlEvent::combobox("Список", "Вариант 3").to_string(),
            "Выбрано значение в выпадающем списке: 'Вариант 3'"
        );
    }

    #[test]
    fn test_slider_message_one_decimal() {
        assert_eq!(
            ControlEvent::slider("Ползунок", 42.26).to_string(),
            "Ползунок перемещен: значение 42.3"
        );
        assert_eq!(
            ControlEvent::slider("Ползунок", 0.0).to_string(),
            "Ползунок перемещен: значение 0.0"
        );
    }

    #[test]
    fn test_color_message() {
        assert_eq!(
            ControlEvent::color(PanelColor::Green).to_string(),
            "Цвет панели изменён на: green"
        );
    }

    #[test]
    fn test_kind_follows_value() {
        assert_eq!(ControlEvent::button("A").kind(), ControlKind::Button);
        assert_eq!(ControlEvent::checkbox("A", true).kind(), ControlKind::Checkbox);
        assert_eq!(ControlEvent::radio("A", "x").kind(), ControlKind::RadioGroup);
        assert_eq!(ControlEvent::combobox("A", "x").kind(), ControlKind::Combobox);
        assert_eq!(ControlEvent::slider("A", 1.0).kind(), ControlKind::Slider);
        assert_eq!(ControlEvent::switch("A", false).kind(), ControlKind::Switch);
        assert_eq!(
            ControlEvent::color(PanelColor::Red).kind(),
            ControlKind::ColorPanel
        );
        assert_eq!(ControlEvent::color(PanelColor::Red).label, "RGB");
    }

    #[test]
    fn test_notify_forwards_one_line() {
        let mut sink = Lines::default();
        ControlEvent::button("A").notify(&mut sink);
        ControlEvent::switch("B", true).notify(&mut sink);

        assert_eq!(
            sink.0,
            vec![
                "Нажата кнопка: 'A'".to_string(),
                "Переключатель 'B' включен".to_string()
            ]
        );
    }

    #[test]
    fn test_panel_colors() {
        assert_eq!(PanelColor::ALL.len(), 3);
        assert_eq!(PanelColor::Red.rgb(), [255, 0, 0]);
        assert_eq!(PanelColor::Blue.caption(), "Blue");
    }
}
