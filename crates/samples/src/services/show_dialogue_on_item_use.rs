//! Show a guide dialogue when a specific item is used.
//!
//! The dialogue definition is built once at construction and reused for
//! every player - definitions are immutable, so that is safe. Sound cues
//! around the dialogue are best-effort: a missing sound never blocks the
//! dialogue itself.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, instrument, warn};

use scriptdialogue_app::{MultiButtonDialogue, ScriptDialogueService};
use scriptdialogue_domain::{PlayerId, ScriptText, ShowDialogueOptions};
use scriptdialogue_ports::inbound::{ItemUseEvent, ItemUseHandlerPort};
use scriptdialogue_ports::outbound::AudioPort;

/// Configuration for the item-use dialogue behavior.
#[derive(Debug, Clone)]
pub struct ShowDialogueOnItemUseOptions {
    /// Item type that triggers the dialogue, e.g. `studioname_packname:guide`.
    pub item_type_id: String,
    /// Sound cue played before the dialogue opens.
    pub sound_on_open: Option<String>,
    /// Sound cue played after the dialogue closes.
    pub sound_on_close: Option<String>,
    pub title: ScriptText,
    pub content: ScriptText,
    /// Label of the single exit button.
    pub exit: ScriptText,
}

pub struct ShowDialogueOnItemUse {
    item_type_id: String,
    sound_on_open: Option<String>,
    sound_on_close: Option<String>,
    dialogue: MultiButtonDialogue,
    dialogues: Arc<ScriptDialogueService>,
    audio: Arc<dyn AudioPort>,
}

impl ShowDialogueOnItemUse {
    pub fn new(
        options: ShowDialogueOnItemUseOptions,
        dialogues: Arc<ScriptDialogueService>,
        audio: Arc<dyn AudioPort>,
    ) -> Self {
        let dialogue = MultiButtonDialogue::new(options.title)
            .set_body(options.content)
            .add_button("exit", options.exit);

        Self {
            item_type_id: options.item_type_id,
            sound_on_open: options.sound_on_open,
            sound_on_close: options.sound_on_close,
            dialogue,
            dialogues,
            audio,
        }
    }

    async fn play_cue(&self, player: PlayerId, sound_id: Option<&str>) {
        if let Some(sound_id) = sound_id {
            if let Err(e) = self.audio.play_sound(player, sound_id).await {
                warn!(sound_id, error = %e, "failed to play dialogue sound cue");
            }
        }
    }
}

#[async_trait]
impl ItemUseHandlerPort for ShowDialogueOnItemUse {
    #[instrument(skip(self), fields(player = %event.player))]
    async fn on_item_use(&self, event: ItemUseEvent) -> anyhow::Result<()> {
        if event.item_type_id != self.item_type_id {
            return Ok(());
        }

        self.play_cue(event.player, self.sound_on_open.as_deref()).await;

        let outcome = self
            .dialogues
            .open(&self.dialogue, ShowDialogueOptions::new(event.player))
            .await;
        debug!(answered = outcome.is_response(), "guide dialogue closed");

        self.play_cue(event.player, self.sound_on_close.as_deref()).await;
        Ok(())
    }
}
