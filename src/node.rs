use crate::entry::Entry;
use crate::{EnvelopeMismatch, Rectangle};
use log::{debug, warn};
use std::fmt::Write;
use std::mem;

const ROOT: usize = 0;

/// Split threshold and minimum cell size, owned by the facade and passed by
/// reference into the recursive operations.
#[derive(Copy, Clone, Debug)]
pub struct Config {
    pub max_load: usize,
    pub min_size: f64,
}

#[derive(Debug)]
pub struct Node<T> {
    pub bounds: Rectangle,
    // elements in this node and all of its descendants
    pub len: usize,
    pub elements: Vec<Entry<T>>,
    // SW, SE, NW, NE; allocated once and never replaced
    pub children: Option<[usize; 4]>,
}

impl<T> Node<T> {
    fn new(bounds: Rectangle) -> Self {
        Node {
            bounds,
            len: 0,
            elements: Vec::new(),
            children: None,
        }
    }
}

/// Flat store of nodes addressed by index, the root at index 0.
#[derive(Debug)]
pub struct Arena<T> {
    pub nodes: Vec<Node<T>>,
    created: usize,
}

impl<T> Arena<T> {
    pub fn new(bounds: Rectangle) -> Self {
        Arena {
            nodes: vec![Node::new(bounds)],
            created: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes[ROOT].len
    }

    pub fn bounds(&self) -> Rectangle {
        self.nodes[ROOT].bounds
    }

    /// Nodes ever created, the root included. Never decremented.
    pub fn created(&self) -> usize {
        self.created
    }

    pub fn collect_all<'a>(&'a self, out: &mut Vec<&'a T>) {
        for node in &self.nodes {
            for entry in &node.elements {
                out.push(entry.item());
            }
        }
    }

    pub fn collect_intersecting<'a>(&'a self, window: &Rectangle, out: &mut Vec<&'a T>) {
        self.collect_at(ROOT, window, out);
    }

    fn collect_at<'a>(&'a self, id: usize, window: &Rectangle, out: &mut Vec<&'a T>) {
        let node = &self.nodes[id];
        if node.len == 0 || !node.bounds.intersects(window) {
            return;
        }
        for entry in &node.elements {
            if entry.envelope().intersects(window) {
                out.push(entry.item());
            }
        }
        if let Some(children) = node.children {
            for child in children.iter().copied() {
                self.collect_at(child, window, out);
            }
        }
    }

    pub fn clear(&mut self) {
        self.nodes.truncate(1);
        let root = &mut self.nodes[ROOT];
        root.elements.clear();
        root.children = None;
        root.len = 0;
    }

    pub fn dump(&self, max_depth: usize) -> String {
        let mut out = String::new();
        self.dump_at(ROOT, 0, max_depth, &mut out);
        out
    }

    fn dump_at(&self, id: usize, depth: usize, max_depth: usize, out: &mut String) {
        let node = &self.nodes[id];
        let _ = writeln!(
            out,
            "{:indent$}{} local={} total={}",
            "",
            node.bounds,
            node.elements.len(),
            node.len,
            indent = 2 * depth
        );
        if depth == max_depth {
            return;
        }
        if let Some(children) = node.children {
            for child in children.iter().copied() {
                self.dump_at(child, depth + 1, max_depth, out);
            }
        }
    }

    fn split(&mut self, id: usize) {
        let bounds = self.nodes[id].bounds;
        let center = bounds.center();
        let quadrants = [
            Rectangle {
                x_min: bounds.x_min,
                y_min: bounds.y_min,
                x_max: center.x,
                y_max: center.y,
            },
            Rectangle {
                x_min: center.x,
                y_min: bounds.y_min,
                x_max: bounds.x_max,
                y_max: center.y,
            },
            Rectangle {
                x_min: bounds.x_min,
                y_min: center.y,
                x_max: center.x,
                y_max: bounds.y_max,
            },
            Rectangle {
                x_min: center.x,
                y_min: center.y,
                x_max: bounds.x_max,
                y_max: bounds.y_max,
            },
        ];
        let first = self.nodes.len();
        for quadrant in quadrants.iter().copied() {
            self.nodes.push(Node::new(quadrant));
        }
        self.created += 4;
        self.nodes[id].children = Some([first, first + 1, first + 2, first + 3]);
        debug!(
            "split {} holding {} local elements",
            bounds,
            self.nodes[id].elements.len()
        );
    }
}

impl<T: PartialEq> Arena<T> {
    /// Insert an entry at the root, rejecting an equal entry already present
    /// anywhere in the tree.
    pub fn insert(
        &mut self,
        entry: Entry<T>,
        config: &Config,
        mismatches: &mut Vec<EnvelopeMismatch>,
    ) -> bool {
        if self.contains(&entry.envelope(), entry.item()) {
            return false;
        }
        self.place(ROOT, entry, config, mismatches);
        true
    }

    fn place(
        &mut self,
        id: usize,
        entry: Entry<T>,
        config: &Config,
        mismatches: &mut Vec<EnvelopeMismatch>,
    ) {
        self.nodes[id].elements.push(entry);
        self.nodes[id].len += 1;
        self.rebalance(id, config, mismatches);
    }

    /// Runs after every local insertion. Splits once the local element count
    /// reaches the threshold and the cell is still large enough, then offers
    /// every local element to the quadrant that can take it whole.
    fn rebalance(
        &mut self,
        id: usize,
        config: &Config,
        mismatches: &mut Vec<EnvelopeMismatch>,
    ) {
        if self.nodes[id].children.is_none() {
            if self.nodes[id].elements.len() < config.max_load {
                return;
            }
            let bounds = self.nodes[id].bounds;
            if bounds.width() < config.min_size || bounds.height() < config.min_size {
                return;
            }
            self.split(id);
        }
        let children = match self.nodes[id].children {
            Some(children) => children,
            None => return,
        };

        let bounds = self.nodes[id].bounds;
        let elements = mem::take(&mut self.nodes[id].elements);
        let mut kept = Vec::new();
        let mut moved = Vec::new();
        for entry in elements {
            let envelope = entry.envelope();
            if envelope.contains(&bounds) {
                // covers the whole cell; every quadrant would take a copy
                kept.push(entry);
                continue;
            }
            let target = children
                .iter()
                .copied()
                .find(|&child| self.nodes[child].bounds.contains(&envelope));
            match target {
                Some(child) => moved.push((child, entry)),
                None => {
                    let intersects_any = children
                        .iter()
                        .copied()
                        .any(|child| self.nodes[child].bounds.intersects(&envelope));
                    if !intersects_any {
                        let mismatch = EnvelopeMismatch { envelope, bounds };
                        // later passes over the same stray element report nothing new
                        if !mismatches.contains(&mismatch) {
                            warn!("{}", mismatch);
                            mismatches.push(mismatch);
                        }
                    }
                    // straddles the quadrant seams; stays at this level
                    kept.push(entry);
                }
            }
        }
        self.nodes[id].elements = kept;
        for (child, entry) in moved {
            self.place(child, entry, config, mismatches);
        }
    }

    pub fn contains(&self, envelope: &Rectangle, item: &T) -> bool {
        self.contains_at(ROOT, envelope, item)
    }

    fn contains_at(&self, id: usize, envelope: &Rectangle, item: &T) -> bool {
        let node = &self.nodes[id];
        if node.len == 0 || !node.bounds.intersects(envelope) {
            return false;
        }
        if node.elements.iter().any(|e| e.matches(envelope, item)) {
            return true;
        }
        match node.children {
            // children re-prune themselves on entry
            Some(children) => children
                .iter()
                .copied()
                .any(|child| self.contains_at(child, envelope, item)),
            None => false,
        }
    }

    pub fn remove(&mut self, envelope: &Rectangle, item: &T) -> bool {
        self.remove_at(ROOT, envelope, item)
    }

    fn remove_at(&mut self, id: usize, envelope: &Rectangle, item: &T) -> bool {
        let position = self.nodes[id]
            .elements
            .iter()
            .position(|e| e.matches(envelope, item));
        if let Some(position) = position {
            self.nodes[id].elements.swap_remove(position);
            self.nodes[id].len -= 1;
            return true;
        }
        let children = match self.nodes[id].children {
            Some(children) => children,
            None => return false,
        };
        let mut removed = false;
        for child in children.iter().copied() {
            if self.nodes[child].bounds.intersects(envelope) && self.remove_at(child, envelope, item)
            {
                removed = true;
                break;
            }
        }
        if removed {
            self.nodes[id].len -= 1;
        }
        removed
    }
}
