//! Per-parent run index over a flat collection.
//!
//! Lists and cards are stored flat with a foreign key to their parent. A
//! [`RunIndex`] maps each parent to the ordered positions of its children so a
//! move only touches the affected run(s) instead of rescanning and
//! deduplicating the whole collection.
//!
//! Rebuilding after a move emits the affected runs first (source, then
//! destination) followed by every untouched item in its original order. That
//! is the order callers have always observed, so untouched parents keep their
//! relative layout.

use crate::config::{OutOfRange, ReorderConfig};
use crate::error::{ReorderError, Result};
use crate::types::{Board, BoardId, Card, CardId, List, ListId};
use indexmap::IndexMap;
use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;
use tracing::{debug, trace, warn};

/// An entity with a stable identity
pub trait Identified: Clone {
    type Id: Clone + Eq + Hash + Display;

    /// Singular noun used in messages ("card", "list", "board")
    const NOUN: &'static str;

    fn id(&self) -> &Self::Id;

    /// "card c1" style description for errors
    fn describe(&self) -> String {
        format!("{} {}", Self::NOUN, self.id())
    }
}

/// An entity that belongs to a parent and is ordered within the parent's run
pub trait Nested: Identified {
    type Parent: Clone + Eq + Hash + Display;

    fn parent(&self) -> &Self::Parent;
    fn set_parent(&mut self, parent: Self::Parent);
}

impl Identified for Board {
    type Id = BoardId;
    const NOUN: &'static str = "board";

    fn id(&self) -> &BoardId {
        &self.board_id
    }
}

impl Identified for List {
    type Id = ListId;
    const NOUN: &'static str = "list";

    fn id(&self) -> &ListId {
        &self.list_id
    }
}

impl Nested for List {
    type Parent = BoardId;

    fn parent(&self) -> &BoardId {
        &self.board_id
    }

    fn set_parent(&mut self, parent: BoardId) {
        self.board_id = parent;
    }
}

impl Identified for Card {
    type Id = CardId;
    const NOUN: &'static str = "card";

    fn id(&self) -> &CardId {
        &self.card_id
    }
}

impl Nested for Card {
    type Parent = ListId;

    fn parent(&self) -> &ListId {
        &self.list_id
    }

    fn set_parent(&mut self, parent: ListId) {
        self.list_id = parent;
    }
}

/// A resolved move of one item, with indices already validated against the runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunMove<P> {
    pub from: P,
    pub from_index: usize,
    pub to: P,
    pub to_index: usize,
}

impl<P: PartialEq> RunMove<P> {
    pub fn is_reparent(&self) -> bool {
        self.from != self.to
    }
}

/// Parent id → ordered positions into the flat collection, in first-appearance order
pub struct RunIndex<'a, T: Nested> {
    items: &'a [T],
    runs: IndexMap<T::Parent, Vec<usize>>,
}

impl<'a, T: Nested> RunIndex<'a, T> {
    /// Index a flat collection by parent
    pub fn build(items: &'a [T]) -> Self {
        let mut runs: IndexMap<T::Parent, Vec<usize>> = IndexMap::new();
        for (pos, item) in items.iter().enumerate() {
            runs.entry(item.parent().clone()).or_default().push(pos);
        }
        trace!(noun = T::NOUN, items = items.len(), parents = runs.len(), "built run index");
        Self { items, runs }
    }

    /// Positions (into the flat collection) of one parent's run; empty if the parent has no children
    pub fn run(&self, parent: &T::Parent) -> &[usize] {
        self.runs.get(parent).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Identities of one parent's run, in order
    pub fn ids(&self, parent: &T::Parent) -> Vec<&'a T::Id> {
        let items = self.items;
        self.run(parent).iter().map(|&pos| items[pos].id()).collect()
    }

    /// Index of an identity inside its parent's run
    pub fn position_of(&self, parent: &T::Parent, id: &T::Id) -> Option<usize> {
        self.run(parent)
            .iter()
            .position(|&pos| self.items[pos].id() == id)
    }

    /// Resolve a drag of `item` to `to_index` within `to` into a validated [`RunMove`].
    ///
    /// `claimed_index` is where the drag says the item started.
    pub fn plan(
        &self,
        item: &T,
        claimed_index: usize,
        to: T::Parent,
        to_index: usize,
        config: &ReorderConfig,
    ) -> Result<RunMove<T::Parent>> {
        let from = item.parent().clone();
        let actual = self.position_of(&from, item.id()).ok_or_else(|| {
            ReorderError::SourceIndexMismatch {
                item: item.describe(),
                parent: from.to_string(),
                index: claimed_index,
            }
        })?;

        if actual != claimed_index {
            if config.verify_source_index {
                return Err(ReorderError::SourceIndexMismatch {
                    item: item.describe(),
                    parent: from.to_string(),
                    index: claimed_index,
                });
            }
            debug!(
                item = %item.describe(),
                claimed_index,
                actual,
                "source index disagrees with snapshot, using identity position"
            );
        }

        // Room in the destination once the item has left its source run
        let len = if to == from {
            self.run(&from).len() - 1
        } else {
            self.run(&to).len()
        };
        let to_index = resolve_index(&to, to_index, len, config.out_of_range)?;

        Ok(RunMove {
            from,
            from_index: actual,
            to,
            to_index,
        })
    }

    /// Apply a move and return the new flat collection.
    ///
    /// The moved item takes the destination parent. Identities are deduplicated,
    /// first occurrence wins.
    pub fn relocate(&self, mv: &RunMove<T::Parent>) -> Result<Vec<T>> {
        let mut from_run = self.run(&mv.from).to_vec();
        if mv.from_index >= from_run.len() {
            return Err(ReorderError::IndexOutOfRange {
                parent: mv.from.to_string(),
                index: mv.from_index,
                len: from_run.len(),
            });
        }
        let moved = from_run.remove(mv.from_index);

        let mut affected = Vec::with_capacity(2);
        if mv.is_reparent() {
            let mut to_run = self.run(&mv.to).to_vec();
            insert_checked(&mut to_run, &mv.to, mv.to_index, moved)?;
            affected.push(from_run);
            affected.push(to_run);
        } else {
            insert_checked(&mut from_run, &mv.from, mv.to_index, moved)?;
            affected.push(from_run);
        }

        let mut out = Vec::with_capacity(self.items.len());
        let mut seen = HashSet::with_capacity(self.items.len());

        for &pos in affected.iter().flatten() {
            let reparent = (pos == moved && mv.is_reparent()).then(|| mv.to.clone());
            self.emit(pos, reparent, &mut out, &mut seen);
        }

        for (pos, item) in self.items.iter().enumerate() {
            let parent = item.parent();
            if parent != &mv.from && parent != &mv.to {
                self.emit(pos, None, &mut out, &mut seen);
            }
        }

        Ok(out)
    }

    fn emit(
        &self,
        pos: usize,
        reparent: Option<T::Parent>,
        out: &mut Vec<T>,
        seen: &mut HashSet<&'a T::Id>,
    ) {
        let items = self.items;
        let item = &items[pos];
        if !seen.insert(item.id()) {
            warn!(item = %item.describe(), "dropping duplicate identity");
            return;
        }
        let mut item = item.clone();
        if let Some(parent) = reparent {
            item.set_parent(parent);
        }
        out.push(item);
    }
}

/// Move one item of a parentless collection from `from` to `to`.
///
/// Identities are deduplicated the same way as [`RunIndex::relocate`].
pub fn reorder_flat<T: Identified>(items: &[T], from: usize, to: usize) -> Result<Vec<T>> {
    if from >= items.len() {
        return Err(ReorderError::IndexOutOfRange {
            parent: T::NOUN.to_string(),
            index: from,
            len: items.len(),
        });
    }

    let mut order: Vec<usize> = (0..items.len()).collect();
    let moved = order.remove(from);
    if to > order.len() {
        return Err(ReorderError::IndexOutOfRange {
            parent: T::NOUN.to_string(),
            index: to,
            len: order.len(),
        });
    }
    order.insert(to, moved);

    let mut seen = HashSet::with_capacity(items.len());
    let mut out = Vec::with_capacity(items.len());
    for pos in order {
        let item = &items[pos];
        if seen.insert(item.id()) {
            out.push(item.clone());
        } else {
            warn!(item = %item.describe(), "dropping duplicate identity");
        }
    }
    Ok(out)
}

/// Apply the out-of-range policy to a destination index; `len` is the room available
pub(crate) fn resolve_index<P: Display>(
    parent: &P,
    index: usize,
    len: usize,
    policy: OutOfRange,
) -> Result<usize> {
    if index <= len {
        return Ok(index);
    }
    match policy {
        OutOfRange::Clamp => {
            debug!(%parent, index, len, "clamping destination index");
            Ok(len)
        }
        OutOfRange::Ignore => Err(ReorderError::IndexOutOfRange {
            parent: parent.to_string(),
            index,
            len,
        }),
    }
}

fn insert_checked<P: Display>(
    run: &mut Vec<usize>,
    parent: &P,
    index: usize,
    pos: usize,
) -> Result<()> {
    if index > run.len() {
        return Err(ReorderError::IndexOutOfRange {
            parent: parent.to_string(),
            index,
            len: run.len(),
        });
    }
    run.insert(index, pos);
    Ok(())
}
