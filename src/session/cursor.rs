/// Selection cursor into the current result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionCursor {
    #[default]
    NoSelection,
    Selected(usize),
}

impl SelectionCursor {
    /// State for a freshly ranked list of `len` entries.
    pub fn for_list(len: usize) -> Self {
        if len == 0 {
            SelectionCursor::NoSelection
        } else {
            SelectionCursor::Selected(0)
        }
    }

    pub fn reset(&mut self, len: usize) {
        *self = Self::for_list(len);
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            SelectionCursor::NoSelection => None,
            SelectionCursor::Selected(index) => Some(*index),
        }
    }

    pub fn select_next(&mut self, len: usize) {
        *self = match self.valid_index(len) {
            None => Self::for_list(len),
            Some(index) => SelectionCursor::Selected((index + 1) % len),
        };
    }

    pub fn select_previous(&mut self, len: usize) {
        *self = match self.valid_index(len) {
            None => Self::for_list(len),
            Some(0) => SelectionCursor::Selected(len - 1),
            Some(index) => SelectionCursor::Selected(index - 1),
        };
    }

    // An index computed against a previous, longer list is never reused.
    fn valid_index(&self, len: usize) -> Option<usize> {
        self.index().filter(|&index| index < len)
    }
}
