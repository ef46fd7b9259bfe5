pub mod card;
pub mod nav;
