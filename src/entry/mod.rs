pub mod display;
pub mod entry;

pub use display::{IconResource, ResourcePathProvider, ResultDisplay};
pub use entry::{EntryAction, ResultEntry, SelectOutcome};
