pub mod give_item_once;
pub mod show_dialogue_on_item_use;

pub use give_item_once::{GiveItemOnce, GiveItemOnceOptions};
pub use show_dialogue_on_item_use::{ShowDialogueOnItemUse, ShowDialogueOnItemUseOptions};
