pub mod interaction;

pub use interaction::InteractionController;
