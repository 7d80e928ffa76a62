/// Tracks the most recently observed sequence of script references and
/// reports whether a new observation differs from it.
///
/// The detector owns exactly one snapshot. It is absent until the first
/// observation and replaced wholesale on every observation afterwards,
/// whether or not a change was reported. Independent detectors share
/// nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeDetector {
    last: Option<Vec<String>>,
}

impl ChangeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compares `scripts` against the stored snapshot, then replaces it.
    ///
    /// The first observation establishes the baseline and never reports a
    /// change. Later observations report a change when the lengths differ
    /// or any position differs element-wise; reordering otherwise-equal
    /// entries counts as a change.
    pub fn observe(&mut self, scripts: Vec<String>) -> bool {
        let changed = match &self.last {
            None => false,
            Some(last) => {
                last.len() != scripts.len()
                    || last.iter().zip(&scripts).any(|(prev, next)| prev != next)
            }
        };
        self.last = Some(scripts);
        changed
    }

    /// The stored snapshot, if a baseline has been established.
    pub fn snapshot(&self) -> Option<&[String]> {
        self.last.as_deref()
    }
}
