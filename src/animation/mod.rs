pub mod chain;
pub mod progress;
pub mod ticker;

pub use chain::{ChainCursor, ChainNode, CursorEvent, TravelDir};
pub use progress::{ProgressState, StepEvent};
pub use ticker::Ticker;
