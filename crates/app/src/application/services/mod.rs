pub mod script_dialogue_service;

pub use script_dialogue_service::ScriptDialogueService;
