//! k-d tree over RGB space with deletion.
//!
//! [`ColorTree`] answers "nearest remaining color" queries in roughly
//! logarithmic time, replacing the linear scan of [`Palette`] for full-size
//! runs (32768 colors, one query per pixel).
//!
//! # Layout
//!
//! Nodes live in a flat arena. The tree is built once by median splits that
//! cycle through the red, green and blue axes; it is never rebalanced.
//! Deleting a color only clears its `alive` flag and decrements the live
//! counts on the path to the root, so the shape stays fixed for the lifetime
//! of the tree.
//!
//! # Tie-break
//!
//! Candidates are compared by `(squared distance, color)`. A subtree is
//! skipped only when its lower distance bound is *strictly* greater than the
//! best distance found so far, so an equidistant candidate hiding in a far
//! subtree is still visited and the smaller color wins. This reproduces the
//! "first minimum in ascending enumeration order" result of the linear scan.
//!
//! [`Palette`]: super::Palette

use rand::{Rng, RngCore};

use super::pool::ColorPool;
use crate::color::{Color, ColorMean};

const NIL: u32 = u32::MAX;

#[derive(Debug, Clone)]
struct Node {
    color: Color,
    axis: u8,
    left: u32,
    right: u32,
    parent: u32,
    alive: bool,
    /// Live colors in this subtree, including the node itself.
    live: u32,
}

/// Nearest-neighbor index over a set of unique colors.
///
/// # Example
///
/// ```
/// use region_growth::{Color, ColorMean, ColorPool, ColorTree};
///
/// let mut tree = ColorTree::new(vec![Color::new(16, 0, 0), Color::new(14, 0, 0)]);
/// let target = ColorMean::new(15.0, 0.0, 0.0);
///
/// // Equidistant: the smaller color wins.
/// assert_eq!(tree.pop_nearest(target), Some(Color::new(14, 0, 0)));
/// assert_eq!(tree.remaining(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ColorTree {
    nodes: Vec<Node>,
    root: u32,
}

/// Best candidate found during a search: (node index, squared distance).
type Candidate = Option<(u32, f64)>;

impl ColorTree {
    /// Build a tree over the given colors. Duplicates are dropped.
    pub fn new(mut colors: Vec<Color>) -> Self {
        colors.sort_unstable();
        colors.dedup();

        let mut nodes = Vec::with_capacity(colors.len());
        let root = build(&mut colors, 0, NIL, &mut nodes);
        Self { nodes, root }
    }

    /// Number of live colors.
    #[inline]
    pub fn len(&self) -> usize {
        self.live(self.root) as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Nearest live color to `target`, without removing it.
    pub fn nearest(&self, target: ColorMean) -> Option<Color> {
        self.find_nearest(target)
            .map(|(idx, _)| self.nodes[idx as usize].color)
    }

    /// Whether `color` is still live in the tree.
    pub fn contains(&self, color: Color) -> bool {
        self.nearest(ColorMean::from(color)) == Some(color)
    }

    /// Remove a specific color. Returns false if it was not live.
    pub fn remove(&mut self, color: Color) -> bool {
        match self.find_nearest(ColorMean::from(color)) {
            Some((idx, _)) if self.nodes[idx as usize].color == color => {
                self.kill(idx);
                true
            }
            _ => false,
        }
    }

    /// Live colors in ascending order.
    pub fn colors(&self) -> Vec<Color> {
        let mut colors: Vec<Color> = self
            .nodes
            .iter()
            .filter(|n| n.alive)
            .map(|n| n.color)
            .collect();
        colors.sort_unstable();
        colors
    }

    #[inline]
    fn live(&self, idx: u32) -> u32 {
        if idx == NIL {
            0
        } else {
            self.nodes[idx as usize].live
        }
    }

    fn find_nearest(&self, target: ColorMean) -> Candidate {
        let mut best = None;
        self.search(self.root, target, &mut best);
        best
    }

    fn search(&self, idx: u32, target: ColorMean, best: &mut Candidate) {
        if idx == NIL {
            return;
        }
        let node = &self.nodes[idx as usize];
        if node.live == 0 {
            return;
        }

        if node.alive {
            let dist = node.color.distance_squared(target);
            let improves = match *best {
                None => true,
                Some((best_idx, best_dist)) => {
                    dist < best_dist
                        || (dist == best_dist && node.color < self.nodes[best_idx as usize].color)
                }
            };
            if improves {
                *best = Some((idx, dist));
            }
        }

        let axis = node.axis as usize;
        let diff = target.channel(axis) - f64::from(node.color.channel(axis));
        let (near, far) = if diff < 0.0 {
            (node.left, node.right)
        } else {
            (node.right, node.left)
        };

        self.search(near, target, best);

        // `<=` keeps equidistant far-side candidates in play for the tie-break.
        let bound = diff * diff;
        if best.map_or(true, |(_, best_dist)| bound <= best_dist) {
            self.search(far, target, best);
        }
    }

    fn kill(&mut self, idx: u32) {
        debug_assert!(self.nodes[idx as usize].alive);
        self.nodes[idx as usize].alive = false;
        let mut cursor = idx;
        while cursor != NIL {
            let node = &mut self.nodes[cursor as usize];
            node.live -= 1;
            cursor = node.parent;
        }
    }
}

impl ColorPool for ColorTree {
    fn remaining(&self) -> usize {
        self.len()
    }

    fn pop_nearest(&mut self, target: ColorMean) -> Option<Color> {
        let (idx, _) = self.find_nearest(target)?;
        self.kill(idx);
        Some(self.nodes[idx as usize].color)
    }

    /// Draws by ascending rank, exactly like [`Palette`](super::Palette),
    /// so both pools pick the same color for the same generator state.
    /// O(n log n); growth runs only draw once, for the seed cell.
    fn pop_random(&mut self, rng: &mut dyn RngCore) -> Option<Color> {
        let colors = self.colors();
        if colors.is_empty() {
            return None;
        }
        let color = colors[rng.gen_range(0..colors.len())];
        self.remove(color);
        Some(color)
    }
}

/// Recursively build the subtree for `colors`, returning its root index.
fn build(colors: &mut [Color], depth: usize, parent: u32, nodes: &mut Vec<Node>) -> u32 {
    if colors.is_empty() {
        return NIL;
    }

    let axis = depth % 3;
    let mid = colors.len() / 2;
    // Total order (axis value, then full color) keeps the split deterministic:
    // everything left of `mid` is <= the pivot on `axis`, everything right is >=.
    colors.select_nth_unstable_by(mid, |a, b| {
        a.channel(axis)
            .cmp(&b.channel(axis))
            .then_with(|| a.cmp(b))
    });

    let idx = nodes.len() as u32;
    nodes.push(Node {
        color: colors[mid],
        axis: axis as u8,
        left: NIL,
        right: NIL,
        parent,
        alive: true,
        live: colors.len() as u32,
    });

    let (lower, upper) = colors.split_at_mut(mid);
    let left = build(lower, depth + 1, idx, nodes);
    let right = build(&mut upper[1..], depth + 1, idx, nodes);

    let node = &mut nodes[idx as usize];
    node.left = left;
    node.right = right;
    idx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{generate_palette, Palette};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_len_and_contains() {
        let tree = ColorTree::new(vec![
            Color::new(1, 2, 3),
            Color::new(4, 5, 6),
            Color::new(1, 2, 3),
        ]);
        assert_eq!(tree.len(), 2);
        assert!(tree.contains(Color::new(4, 5, 6)));
        assert!(!tree.contains(Color::new(4, 5, 7)));
    }

    #[test]
    fn test_empty_tree() {
        let mut tree = ColorTree::new(Vec::new());
        let mut rng = StdRng::seed_from_u64(1);
        assert!(tree.is_empty());
        assert_eq!(tree.pop_nearest(ColorMean::default()), None);
        assert_eq!(tree.pop_random(&mut rng), None);
    }

    #[test]
    fn test_tie_break_prefers_smaller_color() {
        // Equidistant candidates spread over different axes and subtrees.
        let colors = vec![
            Color::new(10, 10, 12),
            Color::new(10, 12, 10),
            Color::new(12, 10, 10),
            Color::new(8, 10, 10),
            Color::new(10, 8, 10),
            Color::new(10, 10, 8),
            Color::new(40, 40, 40),
        ];
        let mut tree = ColorTree::new(colors.clone());
        let mut palette = Palette::from_colors(colors).unwrap();
        let target = ColorMean::new(10.0, 10.0, 10.0);
        for _ in 0..7 {
            assert_eq!(tree.pop_nearest(target), palette.pop_nearest(target));
        }
    }

    #[test]
    fn test_matches_linear_scan_under_deletion() {
        let palette = generate_palette(3, 3, 3).unwrap();
        let mut linear = palette.clone();
        let mut tree = palette.into_tree();
        let mut rng = StdRng::seed_from_u64(42);

        while linear.remaining() > 0 {
            // Targets on half-integer grid points produce many exact ties.
            let target = ColorMean::new(
                f64::from(rng.gen_range(0u32..512)) / 2.0,
                f64::from(rng.gen_range(0u32..512)) / 2.0,
                f64::from(rng.gen_range(0u32..512)) / 2.0,
            );
            assert_eq!(tree.pop_nearest(target), linear.pop_nearest(target));
            assert_eq!(tree.remaining(), linear.remaining());
        }
    }

    #[test]
    fn test_pop_random_drains_each_color_once() {
        let palette = generate_palette(2, 2, 2).unwrap();
        let expected = palette.clone().into_colors();
        let mut tree = palette.into_tree();
        let mut rng = StdRng::seed_from_u64(3);

        let mut drawn = Vec::new();
        while let Some(color) = tree.pop_random(&mut rng) {
            drawn.push(color);
        }
        drawn.sort();
        assert_eq!(drawn, expected);
    }

    #[test]
    fn test_pop_random_matches_palette() {
        let mut linear = generate_palette(2, 2, 2).unwrap();
        let mut tree = linear.clone().into_tree();
        let mut rng_a = StdRng::seed_from_u64(17);
        let mut rng_b = StdRng::seed_from_u64(17);
        for _ in 0..10 {
            assert_eq!(tree.pop_random(&mut rng_a), linear.pop_random(&mut rng_b));
        }
    }

    #[test]
    fn test_remove_specific_color() {
        let mut tree = generate_palette(1, 1, 1).unwrap().into_tree();
        assert!(tree.remove(Color::new(128, 0, 128)));
        assert!(!tree.remove(Color::new(128, 0, 128)));
        assert_eq!(tree.len(), 7);
        assert!(!tree.colors().contains(&Color::new(128, 0, 128)));
    }
}
