//! Multi button dialogue - a menu-style list of buttons, optionally with
//! icons.
//!
//! Buttons are append-only and order-preserving: the raw selection index
//! is a zero-based index into the list in the order buttons were added.

use std::fmt;

use async_trait::async_trait;

use scriptdialogue_domain::{ButtonDialogueResponse, DialogueError, ScriptText};
use scriptdialogue_ports::outbound::{ActionForm, ActionFormButton, FormRequest, FormResponse};

use super::{DialogueCallback, ShowableDialogue};
use crate::application::error::OpenError;

/// One button of a multi button dialogue.
pub struct MultiButton<C = ()> {
    /// Name used by the button, the response is recorded under this name.
    pub name: String,
    /// Displayed button label.
    pub text: ScriptText,
    /// Path to an icon shown next to the label.
    pub icon_path: Option<String>,
    /// Executed when the button is pressed, before the open call returns.
    pub callback: Option<DialogueCallback<C>>,
}

impl<C> MultiButton<C> {
    pub fn new(name: impl Into<String>, text: impl Into<ScriptText>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            icon_path: None,
            callback: None,
        }
    }

    pub fn with_icon(self, icon_path: impl Into<String>) -> Self {
        Self {
            icon_path: Some(icon_path.into()),
            ..self
        }
    }

    pub fn with_callback(self, callback: DialogueCallback<C>) -> Self {
        Self {
            callback: Some(callback),
            ..self
        }
    }

    async fn run_callback(&self) -> Result<Option<C>, OpenError> {
        match &self.callback {
            Some(callback) => {
                let value = (callback.as_ref())(self.name.clone())
                    .await
                    .map_err(OpenError::Callback)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }
}

impl<C> Clone for MultiButton<C> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            text: self.text.clone(),
            icon_path: self.icon_path.clone(),
            callback: self.callback.clone(),
        }
    }
}

impl<C> fmt::Debug for MultiButton<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiButton")
            .field("name", &self.name)
            .field("text", &self.text)
            .field("icon_path", &self.icon_path)
            .field("has_callback", &self.callback.is_some())
            .finish()
    }
}

/// Immutable multi button dialogue definition.
///
/// Starts empty; at least one button must be added before it can be
/// shown. Every configuration method returns a new definition.
pub struct MultiButtonDialogue<C = ()> {
    title: ScriptText,
    body: Option<ScriptText>,
    buttons: Vec<MultiButton<C>>,
}

impl<C> MultiButtonDialogue<C> {
    pub fn new(title: impl Into<ScriptText>) -> Self {
        Self {
            title: title.into(),
            body: None,
            buttons: Vec::new(),
        }
    }

    /// Set the content body of the dialogue.
    pub fn set_body(&self, body: impl Into<ScriptText>) -> Self {
        Self {
            title: self.title.clone(),
            body: Some(body.into()),
            buttons: self.buttons.clone(),
        }
    }

    /// Append a button without an icon or callback.
    pub fn add_button(&self, name: impl Into<String>, text: impl Into<ScriptText>) -> Self {
        self.add_button_entry(MultiButton::new(name, text))
    }

    /// Append a button with an icon.
    pub fn add_button_with_icon(
        &self,
        name: impl Into<String>,
        text: impl Into<ScriptText>,
        icon_path: impl Into<String>,
    ) -> Self {
        self.add_button_entry(MultiButton::new(name, text).with_icon(icon_path))
    }

    /// Append a fully configured button.
    pub fn add_button_entry(&self, button: MultiButton<C>) -> Self {
        let mut buttons = self.buttons.clone();
        buttons.push(button);
        Self {
            title: self.title.clone(),
            body: self.body.clone(),
            buttons,
        }
    }

    /// Append several buttons at once, keeping their order.
    pub fn add_buttons(&self, entries: impl IntoIterator<Item = MultiButton<C>>) -> Self {
        let mut buttons = self.buttons.clone();
        buttons.extend(entries);
        Self {
            title: self.title.clone(),
            body: self.body.clone(),
            buttons,
        }
    }

    pub fn buttons(&self) -> &[MultiButton<C>] {
        &self.buttons
    }
}

impl<C> fmt::Debug for MultiButtonDialogue<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiButtonDialogue")
            .field("title", &self.title)
            .field("body", &self.body)
            .field("buttons", &self.buttons)
            .finish()
    }
}

#[async_trait]
impl<C: Send + Sync + 'static> ShowableDialogue for MultiButtonDialogue<C> {
    type Response = ButtonDialogueResponse<C>;

    fn form(&self) -> Result<FormRequest, DialogueError> {
        if self.buttons.is_empty() {
            return Err(DialogueError::MissingButtons);
        }

        Ok(FormRequest::Action(ActionForm {
            title: self.title.clone(),
            body: self.body.clone(),
            buttons: self
                .buttons
                .iter()
                .map(|button| ActionFormButton {
                    label: button.text.clone(),
                    icon_path: button.icon_path.clone(),
                })
                .collect(),
        }))
    }

    async fn interpret(&self, response: FormResponse) -> Result<Self::Response, OpenError> {
        let index = response
            .selection
            .ok_or_else(|| DialogueError::malformed("action form response without a selection"))?;
        let button = self.buttons.get(index).ok_or_else(|| {
            DialogueError::malformed(format!(
                "selection {index} out of range for {} buttons",
                self.buttons.len()
            ))
        })?;

        let callback = button.run_callback().await?;
        Ok(ButtonDialogueResponse {
            selected: button.name.clone(),
            callback,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dialogue::callback;

    #[test]
    fn test_add_button_returns_new_definition() {
        let empty = MultiButtonDialogue::<()>::new("title");
        let with_button = empty.add_button("exit", "Exit");

        assert_eq!(empty.buttons().len(), 0);
        assert_eq!(with_button.buttons().len(), 1);
    }

    #[test]
    fn test_buttons_keep_append_order() {
        let dialogue = MultiButtonDialogue::<()>::new("title")
            .add_button("first", "First")
            .add_buttons([MultiButton::new("second", "Second"), MultiButton::new("third", "Third")]);

        let names: Vec<_> = dialogue
            .buttons()
            .iter()
            .map(|button| button.name.as_str())
            .collect();
        assert_eq!(names, ["first", "second", "third"]);
    }

    #[test]
    fn test_form_without_buttons_is_missing_buttons() {
        let result = MultiButtonDialogue::<()>::new("title").form();

        assert_eq!(result.expect_err("should fail"), DialogueError::MissingButtons);
    }

    #[test]
    fn test_form_carries_icons() {
        let form = MultiButtonDialogue::<()>::new("title")
            .add_button_with_icon("map", "Map", "textures/items/map")
            .form()
            .expect("form");

        match form {
            FormRequest::Action(action) => {
                assert_eq!(action.buttons.len(), 1);
                assert_eq!(
                    action.buttons[0].icon_path.as_deref(),
                    Some("textures/items/map")
                );
            }
            other => panic!("expected an action form, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_interpret_resolves_button_by_index() {
        let dialogue = MultiButtonDialogue::<()>::new("title")
            .add_button("stay", "Stay")
            .add_button("leave", "Leave");

        let response = dialogue
            .interpret(FormResponse::selected(1))
            .await
            .expect("interpret");

        assert_eq!(response.selected, "leave");
        assert_eq!(response.callback, None);
    }

    #[tokio::test]
    async fn test_interpret_out_of_range_is_malformed() {
        let dialogue = MultiButtonDialogue::<()>::new("title").add_button("only", "Only");

        let result = dialogue.interpret(FormResponse::selected(3)).await;

        assert!(matches!(
            result,
            Err(OpenError::Dialogue(DialogueError::MalformedResponse(_)))
        ));
    }

    #[tokio::test]
    async fn test_callback_runs_with_button_name() {
        let dialogue = MultiButtonDialogue::new("title").add_button_entry(
            MultiButton::new("exit", "Exit")
                .with_callback(callback(|selected| async move { Ok(selected) })),
        );

        let response = dialogue
            .interpret(FormResponse::selected(0))
            .await
            .expect("interpret");

        assert_eq!(response.callback.as_deref(), Some("exit"));
    }
}
