//! Generic control descriptors.

use std::ops::RangeInclusive;

use crate::error::PanelError;

/// How a slider value is shown and quantized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    /// Fixed number of decimals.
    Decimal(usize),
    /// Whole numbers; edits are rounded.
    Integer,
    /// An exponent shown as `2^x.x`.
    PowerOfTwo,
}

impl ValueFormat {
    pub fn display(&self, value: f32) -> String {
        match *self {
            ValueFormat::Decimal(decimals) => format!("{value:.decimals$}"),
            ValueFormat::Integer => format!("{}", value.round() as i64),
            ValueFormat::PowerOfTwo => format!("2^{value:.1}"),
        }
    }

    fn quantize(&self, value: f32) -> f32 {
        match self {
            ValueFormat::Integer => value.round(),
            _ => value,
        }
    }
}

/// A bounded numeric control.
pub struct Slider<T> {
    pub label: &'static str,
    pub range: RangeInclusive<f32>,
    pub format: ValueFormat,
    pub get: fn(&T) -> f32,
    pub set: fn(&mut T, f32) -> Result<(), PanelError>,
}

/// A push button whose caption may depend on the target's state.
pub struct Button<T> {
    pub id: &'static str,
    pub caption: fn(&T) -> &'static str,
    pub press: fn(&mut T),
}

pub enum Control<T> {
    Slider(Slider<T>),
    Button(Button<T>),
}

impl<T> Control<T> {
    pub fn id(&self) -> &'static str {
        match self {
            Control::Slider(slider) => slider.label,
            Control::Button(button) => button.id,
        }
    }
}

/// Snapshot of one control, ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlView {
    Slider {
        label: &'static str,
        value: f32,
        min: f32,
        max: f32,
        display: String,
    },
    Button {
        id: &'static str,
        caption: &'static str,
    },
}

/// A titled window of controls over a target `T`.
pub struct Panel<T> {
    pub title: &'static str,
    controls: Vec<Control<T>>,
}

impl<T> Panel<T> {
    pub fn new(title: &'static str) -> Self {
        Self {
            title,
            controls: Vec::new(),
        }
    }

    pub fn slider(
        mut self,
        label: &'static str,
        range: RangeInclusive<f32>,
        format: ValueFormat,
        get: fn(&T) -> f32,
        set: fn(&mut T, f32) -> Result<(), PanelError>,
    ) -> Self {
        self.controls.push(Control::Slider(Slider {
            label,
            range,
            format,
            get,
            set,
        }));
        self
    }

    pub fn button(
        mut self,
        id: &'static str,
        caption: fn(&T) -> &'static str,
        press: fn(&mut T),
    ) -> Self {
        self.controls
            .push(Control::Button(Button { id, caption, press }));
        self
    }

    pub fn controls(&self) -> &[Control<T>] {
        &self.controls
    }

    pub fn find(&self, id: &str) -> Option<&Control<T>> {
        self.controls.iter().find(|c| c.id() == id)
    }

    /// Clamp `value` into the slider's range, quantize it, and hand it to the setter.
    ///
    /// Returns the value actually applied.
    pub fn set(&self, target: &mut T, label: &str, value: f32) -> Result<f32, PanelError> {
        let slider = match self.find(label) {
            Some(Control::Slider(slider)) => slider,
            Some(Control::Button(_)) => {
                return Err(PanelError::WrongKind(label.to_string(), "slider"));
            }
            None => return Err(PanelError::UnknownControl(label.to_string())),
        };
        if value.is_nan() {
            return Err(PanelError::NotANumber(label.to_string()));
        }
        let clamped = value.clamp(*slider.range.start(), *slider.range.end());
        let applied = slider.format.quantize(clamped);
        (slider.set)(target, applied)?;
        Ok(applied)
    }

    pub fn press(&self, target: &mut T, id: &str) -> Result<(), PanelError> {
        match self.find(id) {
            Some(Control::Button(button)) => {
                (button.press)(target);
                Ok(())
            }
            Some(Control::Slider(_)) => Err(PanelError::WrongKind(id.to_string(), "button")),
            None => Err(PanelError::UnknownControl(id.to_string())),
        }
    }

    /// Current state of every control, in declaration order.
    pub fn view(&self, target: &T) -> Vec<ControlView> {
        self.controls
            .iter()
            .map(|control| match control {
                Control::Slider(slider) => {
                    let value = (slider.get)(target);
                    ControlView::Slider {
                        label: slider.label,
                        value,
                        min: *slider.range.start(),
                        max: *slider.range.end(),
                        display: slider.format.display(value),
                    }
                }
                Control::Button(button) => ControlView::Button {
                    id: button.id,
                    caption: (button.caption)(target),
                },
            })
            .collect()
    }
}
