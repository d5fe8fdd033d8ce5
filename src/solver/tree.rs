//! Combination tree construction and candidate generation
//!
//! The tree enumerates, color by color in enumeration order, every way to
//! place each live color's occurrences into the slots still free. A node
//! holds one position mask for one color; its siblings are the alternative
//! masks for that color, its children the next color's placements within
//! the remaining slots. Root-to-leaf paths that fill all five slots become
//! candidate codes, in depth-first preorder.
//!
//! Nodes live in an arena addressed by index; child and sibling links are
//! optional indices (recursion depth is bounded by the eight colors).

use crate::core::{Code, Color, SLOTS, SlotSet};
use crate::solver::candidates::CandidateList;
use crate::solver::possibility::PossibilityTable;
use log::trace;

#[derive(Debug)]
struct Node {
    color: Color,
    positions: SlotSet,
    remaining: SlotSet,
    first_child: Option<usize>,
    next_sibling: Option<usize>,
}

/// Arena-backed tree of position assignments over all live colors.
#[derive(Debug, Default)]
pub struct CombinationTree {
    nodes: Vec<Node>,
    root: Option<usize>,
}

impl CombinationTree {
    /// Build the full tree for the given possibility table.
    ///
    /// The table must have every occurrence count settled; the builder
    /// visits live colors in enumeration order.
    #[must_use]
    pub fn build(possibilities: &PossibilityTable) -> Self {
        let mut tree = Self::default();
        tree.root = tree.build_level(possibilities, SlotSet::ALL, 0);
        trace!("combination tree holds {} nodes", tree.nodes.len());
        tree
    }

    /// Build the sibling chain for the first live color at or after `from`,
    /// recursing into the remaining free slots for each mask. Returns the
    /// chain head, or `None` when no placement exists at this level — the
    /// caller keeps no child and the completeness check at generation time
    /// discards branches that cannot fill all five slots.
    fn build_level(
        &mut self,
        possibilities: &PossibilityTable,
        free: SlotSet,
        from: usize,
    ) -> Option<usize> {
        let color = possibilities.first_live_from(from)?;
        let needed = possibilities[color].occurrences();
        let allowed = possibilities[color].positions() & free;

        let mut head = None;
        let mut tail: Option<usize> = None;
        for positions in allowed.placements(needed) {
            let remaining = free - positions;
            let index = self.nodes.len();
            self.nodes.push(Node {
                color,
                positions,
                remaining,
                first_child: None,
                next_sibling: None,
            });

            if color.index() < Color::ALL.len() - 1 && !remaining.is_empty() {
                self.nodes[index].first_child =
                    self.build_level(possibilities, remaining, color.index() + 1);
            }

            match tail {
                Some(previous) => self.nodes[previous].next_sibling = Some(index),
                None => head = Some(index),
            }
            tail = Some(index);
        }
        head
    }

    /// Number of nodes in the arena.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Walk the tree depth-first and append every complete assignment to
    /// the candidate list, in preorder.
    pub fn generate(&self, candidates: &mut CandidateList) {
        if let Some(root) = self.root {
            self.collect(root, [Color::Beige; 5], 0, candidates);
        }
        trace!("{} candidates generated", candidates.len());
    }

    fn collect(&self, chain: usize, base: [Color; 5], assigned: u8, out: &mut CandidateList) {
        let mut cursor = Some(chain);
        while let Some(index) = cursor {
            let node = &self.nodes[index];
            // each sibling works on its own copy of the parent state
            let mut working = base;
            for slot in node.positions.slots() {
                working[slot] = node.color;
            }
            let filled = assigned + node.positions.len();

            match node.first_child {
                Some(child) => self.collect(child, working, filled, out),
                None => {
                    if filled as usize == SLOTS {
                        out.push(Code::new(working));
                    }
                }
            }
            cursor = node.next_sibling;
        }
    }
}
