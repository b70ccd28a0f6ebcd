//! Dialogue builders and the capability they share.
//!
//! Each builder is an immutable definition: configuration methods return
//! a new value and the receiver is never touched, so one definition can
//! be reused across players and repeated opens. The [`ShowableDialogue`]
//! trait is the seam the open state machine is written against - produce
//! a raw form request, and interpret a raw response back into the
//! variant's typed payload.

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use futures_util::future::BoxFuture;

use scriptdialogue_domain::DialogueError;
use scriptdialogue_ports::outbound::{FormRequest, FormResponse};

use crate::application::error::OpenError;

mod dual_button;
mod input;
mod multi_button;

pub use dual_button::{DualButton, DualButtonDialogue};
pub use input::{
    InputDialogue, InputDropdown, InputDropdownOption, InputElement, InputSlider, InputText,
    InputToggle,
};
pub use multi_button::{MultiButton, MultiButtonDialogue};

/// A function executed when its button is pressed, before the open call
/// returns. Receives the button's name; a failing callback turns the
/// whole dialogue into a rejected outcome.
pub type DialogueCallback<C> =
    Arc<dyn Fn(String) -> BoxFuture<'static, anyhow::Result<C>> + Send + Sync>;

/// Wrap an async closure as a [`DialogueCallback`].
pub fn callback<C, F, Fut>(f: F) -> DialogueCallback<C>
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = anyhow::Result<C>> + Send + 'static,
{
    Arc::new(move |selected| Box::pin(f(selected)))
}

/// What the open state machine needs from a concrete dialogue variant.
#[async_trait]
pub trait ShowableDialogue: Send + Sync {
    /// Variant-specific payload produced when the player answers.
    type Response: Send;

    /// Produce the raw form request from the accumulated configuration.
    /// Fails when the definition cannot be shown (no buttons, no
    /// elements).
    fn form(&self) -> Result<FormRequest, DialogueError>;

    /// Interpret a non-canceled raw response, invoking and awaiting any
    /// attached callback.
    async fn interpret(&self, response: FormResponse) -> Result<Self::Response, OpenError>;
}
