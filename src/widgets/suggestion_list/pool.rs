use super::model::Row;
use crate::search::engine::Origin;

/// Object pool keyed by row variant. Hosts park rows that scrolled out of
/// view and take one back when a row of the same variant is needed; a row
/// never comes back under a different variant.
#[derive(Debug, Default)]
pub struct RowPool {
    rows: Vec<Row>,
}

impl RowPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn take(&mut self, variant: Origin) -> Option<Row> {
        let index = self.rows.iter().position(|row| row.variant() == variant)?;
        Some(self.rows.swap_remove(index))
    }

    pub fn put(&mut self, row: Row) {
        self.rows.push(row);
    }
}

#[cfg(test)]
mod tests {
    use super::RowPool;
    use crate::search::engine::Origin;
    use crate::widgets::suggestion_list::model::Row;

    #[test]
    fn empty_pool_has_nothing_to_take() {
        let mut pool = RowPool::new();
        assert!(pool.take(Origin::History).is_none());
    }

    #[test]
    fn take_matches_on_variant() {
        let mut pool = RowPool::new();
        pool.put(Row::new(Origin::History));
        assert!(pool.take(Origin::Suggestion).is_none());
        let row = pool.take(Origin::History).expect("history row was pooled");
        assert_eq!(row.variant(), Origin::History);
        assert!(pool.is_empty());
    }

    #[test]
    fn pool_holds_both_variants_at_once() {
        let mut pool = RowPool::new();
        pool.put(Row::new(Origin::History));
        pool.put(Row::new(Origin::Suggestion));
        assert_eq!(pool.len(), 2);
        assert!(pool.take(Origin::Suggestion).is_some());
        assert!(pool.take(Origin::Suggestion).is_none());
        assert!(pool.take(Origin::History).is_some());
    }
}
