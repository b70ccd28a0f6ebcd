//! Raw form wire model - the shapes exchanged with the host's three
//! presentation primitives.
//!
//! Requests describe what to render; responses come back in the host's
//! presentation-specific shape (cancellation flag, selection index or a
//! positional list of values) and are normalized by the dialogue variants.

use serde::{Deserialize, Serialize};

use scriptdialogue_domain::{CancelationReason, InputValue, ScriptText};

/// A request for one of the three presentation primitives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FormRequest {
    Message(MessageForm),
    Action(ActionForm),
    Modal(ModalForm),
}

/// Confirm-style form with exactly two buttons and no icons.
///
/// `button1` renders at the bottom, `button2` at the top; the raw
/// selection index follows that order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageForm {
    pub title: ScriptText,
    pub body: Option<ScriptText>,
    pub button1: ScriptText,
    pub button2: ScriptText,
}

/// Menu-style form with any number of buttons, each optionally carrying
/// an icon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionForm {
    pub title: ScriptText,
    pub body: Option<ScriptText>,
    pub buttons: Vec<ActionFormButton>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionFormButton {
    pub label: ScriptText,
    pub icon_path: Option<String>,
}

/// Form-style dialog with a sequence of typed input controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModalForm {
    pub title: ScriptText,
    pub controls: Vec<ModalControl>,
}

/// One rendered input control. The response's `form_values` list is
/// positionally aligned with the `controls` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ModalControl {
    Dropdown {
        label: ScriptText,
        options: Vec<ScriptText>,
        default_index: usize,
    },
    Slider {
        label: ScriptText,
        minimum: f64,
        maximum: f64,
        step: f64,
        default: f64,
    },
    TextField {
        label: ScriptText,
        placeholder: ScriptText,
        default: String,
    },
    Toggle {
        label: ScriptText,
        default: bool,
    },
}

/// Raw response from any of the presentation primitives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormResponse {
    pub canceled: bool,
    pub cancelation_reason: Option<CancelationReason>,
    /// Zero-based index of the pressed button, for message and action
    /// forms.
    pub selection: Option<usize>,
    /// Entered values in control order, for modal forms. An absent entry
    /// means the control kept its default.
    pub form_values: Option<Vec<Option<FormValue>>>,
}

impl FormResponse {
    pub fn canceled(reason: CancelationReason) -> Self {
        Self {
            canceled: true,
            cancelation_reason: Some(reason),
            selection: None,
            form_values: None,
        }
    }

    pub fn selected(index: usize) -> Self {
        Self {
            canceled: false,
            cancelation_reason: None,
            selection: Some(index),
            form_values: None,
        }
    }

    pub fn values(form_values: Vec<Option<FormValue>>) -> Self {
        Self {
            canceled: false,
            cancelation_reason: None,
            selection: None,
            form_values: Some(form_values),
        }
    }
}

/// A single raw modal value. Dropdowns report the selected option index,
/// the other controls report their value directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FormValue {
    Index(usize),
    Number(f64),
    Text(String),
    Toggle(bool),
}

impl From<&FormValue> for InputValue {
    fn from(value: &FormValue) -> Self {
        match value {
            FormValue::Index(index) => InputValue::Number(*index as f64),
            FormValue::Number(number) => InputValue::Number(*number),
            FormValue::Text(text) => InputValue::Text(text.clone()),
            FormValue::Toggle(toggle) => InputValue::Bool(*toggle),
        }
    }
}
