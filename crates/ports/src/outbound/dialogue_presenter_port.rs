//! Dialogue Presenter Port - Outbound port for the host's UI primitives
//!
//! Abstracts the three native form types (message, action, modal) behind
//! one trait so the open state machine can be driven without a connected
//! client. Each call suspends until the player answers, cancels, or the
//! host rejects the form.

use async_trait::async_trait;
#[cfg(any(test, feature = "testing"))]
use mockall::automock;

use scriptdialogue_domain::PlayerId;

use super::errors::PresentationError;
use super::forms::{ActionForm, FormResponse, MessageForm, ModalForm};

#[cfg_attr(any(test, feature = "testing"), automock)]
#[async_trait]
pub trait DialoguePresenterPort: Send + Sync {
    /// Show a confirm-style form with two fixed buttons.
    async fn show_message_form(
        &self,
        player: PlayerId,
        form: MessageForm,
    ) -> Result<FormResponse, PresentationError>;

    /// Show a menu-style form with one button per choice.
    async fn show_action_form(
        &self,
        player: PlayerId,
        form: ActionForm,
    ) -> Result<FormResponse, PresentationError>;

    /// Show a form-style dialog with typed input controls.
    async fn show_modal_form(
        &self,
        player: PlayerId,
        form: ModalForm,
    ) -> Result<FormResponse, PresentationError>;
}
