use std::any::Any;
use std::sync::Arc;

use super::display::{IconResource, ResourcePathProvider, ResultDisplay};

/// What the host should do after an entry's action ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The interaction is complete; the launcher closes.
    Completed,
    /// Stay open with the current query and list.
    Continue,
}

pub type EntryAction = Box<dyn Fn(&ResultEntry) -> SelectOutcome>;

/// One scorable, selectable result produced by a provider.
///
/// Entries are immutable once built. The payload is owned by the producing
/// provider: it attaches it here and reads it back inside its own action.
pub struct ResultEntry {
    display: ResultDisplay,
    base_score: i64,
    action: Option<EntryAction>,
    payload: Option<Box<dyn Any>>,
    resources: Option<Arc<dyn ResourcePathProvider>>,
}

impl ResultEntry {
    pub fn new(display: ResultDisplay, base_score: i64) -> Self {
        Self {
            display,
            base_score,
            action: None,
            payload: None,
            resources: None,
        }
    }

    pub fn with_action<F>(mut self, action: F) -> Self
    where
        F: Fn(&ResultEntry) -> SelectOutcome + 'static,
    {
        self.action = Some(Box::new(action));
        self
    }

    pub fn with_payload<T: Any>(mut self, payload: T) -> Self {
        self.payload = Some(Box::new(payload));
        self
    }

    pub fn with_resource_provider(mut self, resources: Arc<dyn ResourcePathProvider>) -> Self {
        self.resources = Some(resources);
        self
    }

    pub fn display(&self) -> &ResultDisplay {
        &self.display
    }

    pub fn title(&self) -> &str {
        &self.display.title
    }

    pub fn base_score(&self) -> i64 {
        self.base_score
    }

    /// Entries without matchable text never reach the ranker.
    pub fn has_matchable_title(&self) -> bool {
        !self.display.title.trim().is_empty()
    }

    pub fn payload<T: Any>(&self) -> Option<&T> {
        self.payload.as_ref().and_then(|p| p.downcast_ref::<T>())
    }

    /// Resolve the icon lazily, through the provider's resource root when
    /// the icon is provider-relative.
    pub fn icon_path(&self) -> Option<String> {
        match self.display.icon.as_ref()? {
            IconResource::Path(path) => Some(path.clone()),
            IconResource::Resource(path) => Some(match &self.resources {
                Some(resources) => resources.resolve(path),
                None => path.clone(),
            }),
        }
    }

    /// Run the selection action once.
    ///
    /// Panics raised by the action are not caught here: ranking is over by the
    /// time an action runs, so its faults belong to the host.
    pub fn execute(&self) -> SelectOutcome {
        match &self.action {
            Some(action) => action(self),
            None => SelectOutcome::Continue,
        }
    }
}

impl std::fmt::Debug for ResultEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResultEntry")
            .field("display", &self.display)
            .field("base_score", &self.base_score)
            .field("has_action", &self.action.is_some())
            .field("has_payload", &self.payload.is_some())
            .finish()
    }
}
