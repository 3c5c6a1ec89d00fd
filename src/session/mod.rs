pub mod cursor;
pub mod inline;
pub mod palette;

pub use cursor::SelectionCursor;
pub use inline::InlineValues;
pub use palette::{PaletteSession, SessionOutcome};
