use indexmap::IndexMap;

/// Where a matched entry came from. History entries win ties against
/// suggestions, so an entry present in both sources carries `History`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    History,
    Suggestion,
}

impl Origin {
    pub const COUNT: usize = 2;

    pub fn ordinal(self) -> usize {
        match self {
            Origin::History => 0,
            Origin::Suggestion => 1,
        }
    }

    /// Inverse of [`Origin::ordinal`]. Ordinals outside `0..COUNT` cannot be
    /// produced by this crate; hitting one is a caller bug, not bad input.
    pub fn from_ordinal(ordinal: usize) -> Origin {
        match ordinal {
            0 => Origin::History,
            1 => Origin::Suggestion,
            _ => panic!("unknown origin ordinal {ordinal}"),
        }
    }
}

/// One `filter` call's output: an insertion-ordered set of unique entry
/// strings, each tagged with its origin. Never mutated after being returned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    entries: IndexMap<String, Origin>,
}

impl ResultSet {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<(&str, Origin)> {
        self.entries
            .get_index(index)
            .map(|(text, origin)| (text.as_str(), *origin))
    }

    /// Origin lookup by value. Well-defined because entries are unique
    /// within one result set.
    pub fn origin_of(&self, text: &str) -> Option<Origin> {
        self.entries.get(text).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Origin)> + '_ {
        self.entries
            .iter()
            .map(|(text, origin)| (text.as_str(), *origin))
    }
}

/// Prefix matcher over a fixed pair of string sources. The sources are set
/// once at construction; replace the engine to replace them.
#[derive(Debug, Clone, Default)]
pub struct MatchEngine {
    history: Vec<String>,
    suggestions: Vec<String>,
}

impl MatchEngine {
    pub fn new(history: Vec<String>, suggestions: Vec<String>) -> Self {
        Self {
            history,
            suggestions,
        }
    }

    pub fn history(&self) -> &[String] {
        self.history.as_slice()
    }

    pub fn suggestions(&self) -> &[String] {
        self.suggestions.as_slice()
    }

    /// Produce a fresh [`ResultSet`] for `query`.
    ///
    /// A blank query returns the history verbatim and leaves suggestions
    /// out entirely. A non-blank query keeps entries whose lowercased form
    /// starts with the lowercased query, history block first, suggestion
    /// block second, duplicates collapsed onto their history entry.
    pub fn filter(&self, query: &str) -> ResultSet {
        let mut entries = IndexMap::new();
        let query = query.trim();

        if query.is_empty() {
            for text in &self.history {
                entries.entry(text.clone()).or_insert(Origin::History);
            }
            return ResultSet { entries };
        }

        let query = query.to_lowercase();
        for text in &self.history {
            if text.to_lowercase().starts_with(&query) {
                entries.entry(text.clone()).or_insert(Origin::History);
            }
        }
        for text in &self.suggestions {
            if text.to_lowercase().starts_with(&query) && !entries.contains_key(text) {
                entries.insert(text.clone(), Origin::Suggestion);
            }
        }

        ResultSet { entries }
    }
}
