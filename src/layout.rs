//! Unique card layout generation.
//!
//! A layout is one ordered arrangement of [`CELLS`] phrases, read row-major
//! into a [`GRID_SIZE`]×[`GRID_SIZE`] grid. [`generate`] draws layouts at
//! random and keeps only the ones it has not produced before.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

/// Cells per row and column.
pub const GRID_SIZE: usize = 5;

/// Phrases on one card.
pub const CELLS: usize = GRID_SIZE * GRID_SIZE;

/// One card's phrases in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Layout(Vec<String>);

impl Layout {
    pub fn cells(&self) -> &[String] {
        &self.0
    }

    /// Rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.0.chunks(GRID_SIZE)
    }
}

/// Layouts produced by one run, pairwise distinct, in the order they were accepted.
#[derive(Debug, Default)]
pub struct LayoutSet {
    order: Vec<Layout>,
    seen: HashSet<Layout>,
}

impl LayoutSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, layout: &Layout) -> bool {
        self.seen.contains(layout)
    }

    /// Adds the layout unless an equal one is already present.
    ///
    /// Returns whether it was added.
    pub fn insert(&mut self, layout: Layout) -> bool {
        if self.seen.contains(&layout) {
            return false;
        }
        self.seen.insert(layout.clone());
        self.order.push(layout);
        true
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Layout> {
        self.order.iter()
    }
}

impl<'a> IntoIterator for &'a LayoutSet {
    type Item = &'a Layout;
    type IntoIter = std::slice::Iter<'a, Layout>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Draws one candidate layout uniformly from the pool.
///
/// A pool of exactly [`CELLS`] phrases is shuffled whole. A larger pool is
/// first sampled down to [`CELLS`] phrases without replacement and the
/// sample is then shuffled, since the sampler does not promise a uniform
/// order on its own.
pub fn draw<R: Rng + ?Sized>(pool: &[String], rng: &mut R) -> Layout {
    let mut cells: Vec<String> = if pool.len() == CELLS {
        pool.to_vec()
    } else {
        pool.choose_multiple(rng, CELLS).cloned().collect()
    };
    cells.shuffle(rng);
    Layout(cells)
}

/// Produces `count` pairwise-distinct layouts drawn from `pool`.
///
/// Candidates are drawn with [`draw`] and discarded when they repeat an
/// earlier layout. Each draw is uniform over the whole candidate space, so
/// discarding repeats does not bias the accepted layouts.
///
/// The caller guarantees `pool.len() >= CELLS` (see
/// [`crate::request::CardRequest`]).
///
/// # Termination
///
/// There is no retry cap. The loop only ends once `count` distinct layouts
/// exist, so a `count` larger than the number of distinct layouts (25! for
/// a 25-phrase pool, more for larger pools) never finishes. No real input
/// gets near that bound and a cap would silently return fewer cards than
/// asked for.
pub fn generate<R: Rng + ?Sized>(pool: &[String], count: usize, rng: &mut R) -> LayoutSet {
    let mut layouts = LayoutSet::new();

    while layouts.len() < count {
        let candidate = draw(pool, rng);
        layouts.insert(candidate);
    }

    layouts
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn phrases(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("P{}", i)).collect()
    }

    fn assert_valid_layout(layout: &Layout, pool: &[String]) {
        assert_eq!(layout.cells().len(), CELLS);
        let unique: HashSet<&String> = layout.cells().iter().collect();
        assert_eq!(unique.len(), CELLS, "phrase repeated within a layout");
        for cell in layout.cells() {
            assert!(pool.contains(cell), "unknown phrase {}", cell);
        }
    }

    #[test]
    fn test_generate_exact_pool() {
        let pool = phrases(25);
        let mut rng = StdRng::seed_from_u64(7);

        let layouts = generate(&pool, 50, &mut rng);

        assert_eq!(layouts.len(), 50);
        for layout in &layouts {
            assert_valid_layout(layout, &pool);
            let mut sorted = layout.cells().to_vec();
            sorted.sort();
            let mut expected = pool.clone();
            expected.sort();
            assert_eq!(sorted, expected, "25-phrase pool must be permuted whole");
        }
    }

    #[test]
    fn test_generate_large_pool_samples_25() {
        let pool = phrases(60);
        let mut rng = StdRng::seed_from_u64(11);

        let layouts = generate(&pool, 20, &mut rng);

        assert_eq!(layouts.len(), 20);
        for layout in &layouts {
            assert_valid_layout(layout, &pool);
        }

        let used: HashSet<&String> = layouts.iter().flat_map(|l| l.cells()).collect();
        assert!(used.len() > CELLS, "larger pools should spread across phrases");
    }

    #[test]
    fn test_layouts_pairwise_distinct() {
        let pool = phrases(25);
        let mut rng = StdRng::seed_from_u64(3);

        let layouts = generate(&pool, 200, &mut rng);

        let distinct: HashSet<&Layout> = layouts.iter().collect();
        assert_eq!(distinct.len(), 200);
    }

    #[test]
    fn test_same_seed_same_layouts() {
        let pool = phrases(30);

        let first = generate(&pool, 10, &mut StdRng::seed_from_u64(42));
        let second = generate(&pool, 10, &mut StdRng::seed_from_u64(42));

        let a: Vec<&Layout> = first.iter().collect();
        let b: Vec<&Layout> = second.iter().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let pool = phrases(25);

        let first = generate(&pool, 1, &mut StdRng::seed_from_u64(1));
        let second = generate(&pool, 1, &mut StdRng::seed_from_u64(2));

        assert_ne!(first.iter().next(), second.iter().next());
    }

    #[test]
    fn test_single_copy() {
        let pool = phrases(25);
        let layouts = generate(&pool, 1, &mut StdRng::seed_from_u64(5));

        assert_eq!(layouts.len(), 1);
        let layout = layouts.iter().next().unwrap();
        assert_valid_layout(layout, &pool);
    }

    #[test]
    fn test_count_equal_to_pool_size() {
        let pool = phrases(25);
        let layouts = generate(&pool, 25, &mut StdRng::seed_from_u64(9));
        assert_eq!(layouts.len(), 25);
    }

    #[test]
    fn test_zero_count_is_empty() {
        let pool = phrases(25);
        let layouts = generate(&pool, 0, &mut StdRng::seed_from_u64(9));
        assert!(layouts.is_empty());
    }

    #[test]
    fn test_insert_rejects_duplicates() {
        let pool = phrases(25);
        let layout = draw(&pool, &mut StdRng::seed_from_u64(4));

        let mut set = LayoutSet::new();
        assert!(set.insert(layout.clone()));
        assert!(!set.insert(layout.clone()));
        assert!(set.contains(&layout));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let pool = phrases(25);
        let mut rng = StdRng::seed_from_u64(8);
        let a = draw(&pool, &mut rng);
        let b = draw(&pool, &mut rng);

        let mut set = LayoutSet::new();
        set.insert(b.clone());
        set.insert(a.clone());

        let order: Vec<&Layout> = set.iter().collect();
        assert_eq!(order, vec![&b, &a]);
    }

    #[test]
    fn test_rows_are_five_by_five() {
        let pool = phrases(25);
        let layout = draw(&pool, &mut StdRng::seed_from_u64(6));

        let rows: Vec<&[String]> = layout.rows().collect();
        assert_eq!(rows.len(), GRID_SIZE);
        assert!(rows.iter().all(|r| r.len() == GRID_SIZE));
        assert_eq!(rows.concat(), layout.cells());
    }

    // `generate` has no retry cap (see its `# Termination` docs): every
    // requested layout is produced, however many duplicates are redrawn.
    #[test]
    fn test_no_retry_cap_returns_full_count() {
        let pool = phrases(26);
        let mut rng = StdRng::seed_from_u64(26);

        let layouts = generate(&pool, 1_000, &mut rng);

        assert_eq!(layouts.len(), 1_000);
        let distinct: HashSet<&Layout> = layouts.iter().collect();
        assert_eq!(distinct.len(), 1_000);
    }
}
