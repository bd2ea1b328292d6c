pub mod card;
pub mod confirm;
pub mod hints;
pub mod input;
pub mod money;
pub mod tabs;
pub mod toast;
