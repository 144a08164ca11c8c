use std::ops::Bound;

use crate::llrb::Node;

/// Iterate over every key in [`Llrb`](crate::Llrb), in ascending order.
///
/// Keeps the path from root to the next node on a stack, hence memory
/// is bounded by the tree height.
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(root: Option<&'a Node>) -> Iter<'a> {
        let mut iter = Iter { stack: vec![] };
        iter.push_left(root);
        iter
    }

    fn push_left(&mut self, mut node: Option<&'a Node>) {
        while let Some(nref) = node {
            self.stack.push(nref);
            node = nref.left_deref();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(node.right_deref());
        Some(node.to_key())
    }
}

/// Iterate over keys within a range, in ascending order.
pub struct Range<'a> {
    stack: Vec<&'a Node>,
    high: Bound<u64>,
}

impl<'a> Range<'a> {
    pub(crate) fn new(root: Option<&'a Node>, low: Bound<u64>, high: Bound<u64>) -> Range<'a> {
        let mut stack = vec![];
        // seed the stack with the path to the first key at or after low.
        let mut node = root;
        while let Some(nref) = node {
            node = if above_low(&low, nref.to_key()) {
                stack.push(nref);
                nref.left_deref()
            } else {
                nref.right_deref()
            };
        }
        Range { stack, high }
    }

    fn push_left(&mut self, mut node: Option<&'a Node>) {
        while let Some(nref) = node {
            self.stack.push(nref);
            node = nref.left_deref();
        }
    }
}

impl<'a> Iterator for Range<'a> {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let key = node.to_key();
        if !below_high(&self.high, key) {
            self.stack.clear();
            return None;
        }
        self.push_left(node.right_deref());
        Some(key)
    }
}

/// Iterate over keys within a range, in descending order.
pub struct Reverse<'a> {
    stack: Vec<&'a Node>,
    low: Bound<u64>,
}

impl<'a> Reverse<'a> {
    pub(crate) fn new(root: Option<&'a Node>, low: Bound<u64>, high: Bound<u64>) -> Reverse<'a> {
        let mut stack = vec![];
        // seed the stack with the path to the last key at or before high.
        let mut node = root;
        while let Some(nref) = node {
            node = if below_high(&high, nref.to_key()) {
                stack.push(nref);
                nref.right_deref()
            } else {
                nref.left_deref()
            };
        }
        Reverse { stack, low }
    }

    fn push_right(&mut self, mut node: Option<&'a Node>) {
        while let Some(nref) = node {
            self.stack.push(nref);
            node = nref.right_deref();
        }
    }
}

impl<'a> Iterator for Reverse<'a> {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let key = node.to_key();
        if !above_low(&self.low, key) {
            self.stack.clear();
            return None;
        }
        self.push_right(node.left_deref());
        Some(key)
    }
}

fn above_low(low: &Bound<u64>, key: u64) -> bool {
    match low {
        Bound::Included(low) => key >= *low,
        Bound::Excluded(low) => key > *low,
        Bound::Unbounded => true,
    }
}

fn below_high(high: &Bound<u64>, key: u64) -> bool {
    match high {
        Bound::Included(high) => key <= *high,
        Bound::Excluded(high) => key < *high,
        Bound::Unbounded => true,
    }
}
