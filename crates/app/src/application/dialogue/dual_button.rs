//! Dual button dialogue - a confirm-style box with exactly two buttons.
//!
//! Dual buttons never carry icons. The raw selection index is a
//! presentation-layer convention: 0 is the bottom button, 1 the top.

use std::fmt;

use async_trait::async_trait;

use scriptdialogue_domain::{ButtonDialogueResponse, DialogueError, ScriptText};
use scriptdialogue_ports::outbound::{FormRequest, FormResponse, MessageForm};

use super::{DialogueCallback, ShowableDialogue};
use crate::application::error::OpenError;

/// One of the two buttons of a dual button dialogue.
pub struct DualButton<C = ()> {
    /// Name used by the button, the response is recorded under this name.
    pub name: String,
    /// Displayed button label.
    pub text: ScriptText,
    /// Executed when the button is pressed, before the open call returns.
    pub callback: Option<DialogueCallback<C>>,
}

impl<C> DualButton<C> {
    pub fn new(name: impl Into<String>, text: impl Into<ScriptText>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            callback: None,
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

impl<C> Clone for DualButton<C> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            text: self.text.clone(),
            callback: self.callback.clone(),
        }
    }
}

impl<C> fmt::Debug for DualButton<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DualButton")
            .field("name", &self.name)
            .field("text", &self.text)
            .field("has_callback", &self.callback.is_some())
            .finish()
    }
}

/// Immutable dual button dialogue definition.
///
/// Both buttons are supplied at construction; only the body is optional
/// and can be set afterwards. Every setter returns a new definition.
pub struct DualButtonDialogue<C = ()> {
    title: ScriptText,
    body: Option<ScriptText>,
    top_button: DualButton<C>,
    bottom_button: DualButton<C>,
}

impl<C> DualButtonDialogue<C> {
    pub fn new(
        title: impl Into<ScriptText>,
        top_button: DualButton<C>,
        bottom_button: DualButton<C>,
    ) -> Self {
        Self {
            title: title.into(),
            body: None,
            top_button,
            bottom_button,
        }
    }

    /// Set the content of the dialogue.
    pub fn set_body(&self, body: impl Into<ScriptText>) -> Self {
        Self {
            body: Some(body.into()),
            ..self.clone()
        }
    }
}

impl<C> Clone for DualButtonDialogue<C> {
    fn clone(&self) -> Self {
        Self {
            title: self.title.clone(),
            body: self.body.clone(),
            top_button: self.top_button.clone(),
            bottom_button: self.bottom_button.clone(),
        }
    }
}

impl<C> fmt::Debug for DualButtonDialogue<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DualButtonDialogue")
            .field("title", &self.title)
            .field("body", &self.body)
            .field("top_button", &self.top_button)
            .field("bottom_button", &self.bottom_button)
            .finish()
    }
}

#[async_trait]
impl<C: Send + Sync + 'static> ShowableDialogue for DualButtonDialogue<C> {
    type Response = ButtonDialogueResponse<C>;

    fn form(&self) -> Result<FormRequest, DialogueError> {
        Ok(FormRequest::Message(MessageForm {
            title: self.title.clone(),
            body: self.body.clone(),
            button1: self.bottom_button.text.clone(),
            button2: self.top_button.text.clone(),
        }))
    }

    async fn interpret(&self, response: FormResponse) -> Result<Self::Response, OpenError> {
        let selected = match response.selection {
            Some(0) => &self.bottom_button,
            Some(1) => &self.top_button,
            other => {
                return Err(DialogueError::malformed(format!(
                    "unexpected selection {other:?} for a two-button form"
                ))
                .into())
            }
        };

        let callback = selected.run_callback().await?;
        Ok(ButtonDialogueResponse {
            selected: selected.name.clone(),
            callback,
        })
    }
}
