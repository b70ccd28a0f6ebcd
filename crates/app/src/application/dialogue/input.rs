//! Input dialogue - a modal form with a sequence of typed input elements.
//!
//! Elements form a closed set (dropdown, slider, text field, toggle) so
//! response interpretation can match exhaustively. The host returns
//! entered values positionally, aligned with the element sequence;
//! absent values fall back to each element's default.

use std::collections::HashMap;

use async_trait::async_trait;

use scriptdialogue_domain::{DialogueError, InputDialogueResponse, InputValue, ScriptText};
use scriptdialogue_ports::outbound::{FormRequest, FormResponse, FormValue, ModalControl, ModalForm};

use super::ShowableDialogue;
use crate::application::error::OpenError;

/// A dropdown over a fixed list of options.
///
/// `default_index` points into `options`; it is used when the player
/// leaves the dropdown untouched and must be valid once at least one
/// option exists.
#[derive(Debug, Clone, PartialEq)]
pub struct InputDropdown {
    name: String,
    label: ScriptText,
    options: Vec<InputDropdownOption>,
    default_index: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InputDropdownOption {
    pub label: ScriptText,
    pub value: InputValue,
}

impl InputDropdown {
    pub fn new(name: impl Into<String>, label: impl Into<ScriptText>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            options: Vec::new(),
            default_index: 0,
        }
    }

    /// Append an option to the dropdown.
    pub fn add_option(&self, label: impl Into<ScriptText>, value: impl Into<InputValue>) -> Self {
        let mut options = self.options.clone();
        options.push(InputDropdownOption {
            label: label.into(),
            value: value.into(),
        });
        Self {
            name: self.name.clone(),
            label: self.label.clone(),
            options,
            default_index: self.default_index,
        }
    }

    /// Set the index of the option selected by default.
    pub fn set_default_index(&self, default_index: usize) -> Self {
        Self {
            name: self.name.clone(),
            label: self.label.clone(),
            options: self.options.clone(),
            default_index,
        }
    }
}

/// A numeric slider between `minimum` and `maximum`.
#[derive(Debug, Clone, PartialEq)]
pub struct InputSlider {
    name: String,
    label: ScriptText,
    minimum: f64,
    maximum: f64,
    step: f64,
    default: f64,
}

impl InputSlider {
    /// The default value starts at `minimum`.
    pub fn new(
        name: impl Into<String>,
        label: impl Into<ScriptText>,
        minimum: f64,
        maximum: f64,
        step: f64,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            minimum,
            maximum,
            step,
            default: minimum,
        }
    }

    pub fn with_default(self, default: f64) -> Self {
        Self { default, ..self }
    }
}

/// A free text field.
#[derive(Debug, Clone, PartialEq)]
pub struct InputText {
    name: String,
    label: ScriptText,
    placeholder: ScriptText,
    default: String,
}

impl InputText {
    /// The default value starts empty.
    pub fn new(
        name: impl Into<String>,
        label: impl Into<ScriptText>,
        placeholder: impl Into<ScriptText>,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            placeholder: placeholder.into(),
            default: String::new(),
        }
    }

    pub fn with_default(self, default: impl Into<String>) -> Self {
        Self {
            default: default.into(),
            ..self
        }
    }
}

/// An on/off toggle, off by default.
#[derive(Debug, Clone, PartialEq)]
pub struct InputToggle {
    name: String,
    label: ScriptText,
    default: bool,
}

impl InputToggle {
    pub fn new(name: impl Into<String>, label: impl Into<ScriptText>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            default: false,
        }
    }

    pub fn with_default(self, default: bool) -> Self {
        Self { default, ..self }
    }
}

/// Any input element accepted by an input dialogue.
#[derive(Debug, Clone, PartialEq)]
pub enum InputElement {
    Dropdown(InputDropdown),
    Slider(InputSlider),
    Text(InputText),
    Toggle(InputToggle),
}

impl InputElement {
    fn name(&self) -> &str {
        match self {
            InputElement::Dropdown(dropdown) => &dropdown.name,
            InputElement::Slider(slider) => &slider.name,
            InputElement::Text(text) => &text.name,
            InputElement::Toggle(toggle) => &toggle.name,
        }
    }

    fn control(&self) -> ModalControl {
        match self {
            InputElement::Dropdown(dropdown) => ModalControl::Dropdown {
                label: dropdown.label.clone(),
                options: dropdown
                    .options
                    .iter()
                    .map(|option| option.label.clone())
                    .collect(),
                default_index: dropdown.default_index,
            },
            InputElement::Slider(slider) => ModalControl::Slider {
                label: slider.label.clone(),
                minimum: slider.minimum,
                maximum: slider.maximum,
                step: slider.step,
                default: slider.default,
            },
            InputElement::Text(text) => ModalControl::TextField {
                label: text.label.clone(),
                placeholder: text.placeholder.clone(),
                default: text.default.clone(),
            },
            InputElement::Toggle(toggle) => ModalControl::Toggle {
                label: toggle.label.clone(),
                default: toggle.default,
            },
        }
    }

    /// Resolve the raw value entered for this element, falling back to
    /// the element's default when it is absent.
    fn resolve_value(&self, raw: Option<&FormValue>) -> Result<InputValue, DialogueError> {
        match self {
            InputElement::Dropdown(dropdown) => {
                let index = match raw {
                    None => dropdown.default_index,
                    Some(FormValue::Index(index)) => *index,
                    Some(other) => {
                        return Err(DialogueError::malformed(format!(
                            "dropdown '{}' received a non-index value: {other:?}",
                            dropdown.name
                        )))
                    }
                };
                let option = dropdown.options.get(index).ok_or_else(|| {
                    DialogueError::malformed(format!(
                        "dropdown '{}' index {index} out of range for {} options",
                        dropdown.name,
                        dropdown.options.len()
                    ))
                })?;
                Ok(option.value.clone())
            }
            InputElement::Slider(slider) => Ok(raw
                .map(InputValue::from)
                .unwrap_or(InputValue::Number(slider.default))),
            InputElement::Text(text) => Ok(raw
                .map(InputValue::from)
                .unwrap_or_else(|| InputValue::Text(text.default.clone()))),
            InputElement::Toggle(toggle) => Ok(raw
                .map(InputValue::from)
                .unwrap_or(InputValue::Bool(toggle.default))),
        }
    }
}

impl From<InputDropdown> for InputElement {
    fn from(value: InputDropdown) -> Self {
        Self::Dropdown(value)
    }
}

impl From<InputSlider> for InputElement {
    fn from(value: InputSlider) -> Self {
        Self::Slider(value)
    }
}

impl From<InputText> for InputElement {
    fn from(value: InputText) -> Self {
        Self::Text(value)
    }
}

impl From<InputToggle> for InputElement {
    fn from(value: InputToggle) -> Self {
        Self::Toggle(value)
    }
}

/// Immutable input dialogue definition.
///
/// Starts empty; at least one element must be added before it can be
/// shown. Element names key the response map - elements sharing a name
/// overwrite each other there, last one wins.
#[derive(Debug, Clone, PartialEq)]
pub struct InputDialogue {
    title: ScriptText,
    elements: Vec<InputElement>,
}

impl InputDialogue {
    pub fn new(title: impl Into<ScriptText>) -> Self {
        Self {
            title: title.into(),
            elements: Vec::new(),
        }
    }

    /// Append an input element.
    pub fn add_element(&self, element: impl Into<InputElement>) -> Self {
        let mut elements = self.elements.clone();
        elements.push(element.into());
        Self {
            title: self.title.clone(),
            elements,
        }
    }

    /// Append several input elements at once, keeping their order.
    pub fn add_elements<I, T>(&self, entries: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<InputElement>,
    {
        let mut elements = self.elements.clone();
        elements.extend(entries.into_iter().map(Into::into));
        Self {
            title: self.title.clone(),
            elements,
        }
    }

    pub fn elements(&self) -> &[InputElement] {
        &self.elements
    }
}

#[async_trait]
impl ShowableDialogue for InputDialogue {
    type Response = InputDialogueResponse;

    fn form(&self) -> Result<FormRequest, DialogueError> {
        if self.elements.is_empty() {
            return Err(DialogueError::MissingElements);
        }

        Ok(FormRequest::Modal(ModalForm {
            title: self.title.clone(),
            controls: self.elements.iter().map(InputElement::control).collect(),
        }))
    }

    async fn interpret(&self, response: FormResponse) -> Result<Self::Response, OpenError> {
        let form_values = response.form_values.unwrap_or_default();

        let mut values = HashMap::with_capacity(self.elements.len());
        for (index, element) in self.elements.iter().enumerate() {
            let raw = form_values.get(index).and_then(Option::as_ref);
            values.insert(element.name().to_string(), element.resolve_value(raw)?);
        }

        Ok(InputDialogueResponse { values })
    }
}
