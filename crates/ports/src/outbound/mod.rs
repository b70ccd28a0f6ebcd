//! Outbound ports - the host runtime surface consumed by the library.

pub mod audio_port;
pub mod dialogue_presenter_port;
pub mod errors;
pub mod forms;
pub mod item_port;
pub mod player_port;
pub mod player_property_port;
pub mod scheduler_port;

pub use audio_port::AudioPort;
pub use dialogue_presenter_port::DialoguePresenterPort;
pub use errors::{HostError, PresentationError};
pub use forms::{
    ActionForm, ActionFormButton, FormRequest, FormResponse, FormValue, MessageForm, ModalControl,
    ModalForm,
};
pub use item_port::ItemPort;
pub use player_port::PlayerPort;
pub use player_property_port::{PlayerPropertyPort, PropertyValue};
pub use scheduler_port::SchedulerPort;

#[cfg(any(test, feature = "testing"))]
pub use audio_port::MockAudioPort;
#[cfg(any(test, feature = "testing"))]
pub use dialogue_presenter_port::MockDialoguePresenterPort;
#[cfg(any(test, feature = "testing"))]
pub use item_port::MockItemPort;
#[cfg(any(test, feature = "testing"))]
pub use player_port::MockPlayerPort;
#[cfg(any(test, feature = "testing"))]
pub use player_property_port::MockPlayerPropertyPort;
#[cfg(any(test, feature = "testing"))]
pub use scheduler_port::MockSchedulerPort;
