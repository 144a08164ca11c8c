use std::{
    cmp::Ordering,
    fmt, mem,
    ops::{Deref, DerefMut, RangeBounds},
};

use log::{debug, error};
use rand::Rng;

use crate::{
    avgvar::AvgVar,
    depth::Depth,
    error::{Error, Result},
    iter::{Iter, Range, Reverse},
};

/// Llrb manage a single instance of in-memory, ordered set of `u64` keys
/// using [left-leaning-red-black][llrb] tree.
///
/// Keys added via [`Llrb::replace_or_insert`] are unique. Keys added via
/// [`Llrb::insert_no_replace`] may repeat, in which case equal keys are
/// kept in their insertion order, turning the set into a multiset.
///
/// [llrb]: https://en.wikipedia.org/wiki/Left-leaning_red-black_tree
#[derive(Clone)]
pub struct Llrb {
    name: String,
    root: Option<Box<Node>>,
    n_count: usize, // number of entries in the tree.
}

/// Different ways to construct a new Llrb instance.
impl Llrb {
    /// Create an empty instance of Llrb, identified by `name`.
    /// Applications can choose unique names.
    pub fn new<S>(name: S) -> Llrb
    where
        S: AsRef<str>,
    {
        let name = name.as_ref().to_string();
        debug!(target: "llrb  ", "{:?}, new llrb instance", name);
        Llrb {
            name,
            root: Default::default(),
            n_count: Default::default(),
        }
    }

    /// Create a new instance of Llrb tree and load it with keys from
    /// `iter`. Repeating keys are replaced, refer [`Llrb::replace_or_insert`].
    pub fn load_from<S, I>(name: S, iter: I) -> Llrb
    where
        S: AsRef<str>,
        I: IntoIterator<Item = u64>,
    {
        let mut llrb = Llrb::new(name);
        llrb.replace_or_insert_bulk(iter);
        debug!(
            target: "llrb  ",
            "{:?}, loaded {} entries", llrb.name, llrb.n_count
        );
        llrb
    }
}

/// Maintenance API.
impl Llrb {
    /// Identify this instance. Applications can choose unique names while
    /// creating Llrb instances.
    #[inline]
    pub fn id(&self) -> String {
        self.name.clone()
    }

    /// Return number of entries in this instance.
    #[inline]
    pub fn len(&self) -> usize {
        self.n_count
    }

    /// Check whether this index is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n_count == 0
    }

    /// Return quickly with basic statisics, only entries() and node_size()
    /// are valid with this statisics.
    pub fn stats(&self) -> Stats {
        Stats::new(self.n_count, mem::size_of::<Node>())
    }
}

/// Raw access to the tree structure, meant for layers that serialize
/// and de-serialize the tree. Nothing here checks the LLRB rules, use
/// [`Llrb::validate`] after restoring a tree.
impl Llrb {
    /// Return the root node, if tree is not empty.
    #[inline]
    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref().map(Deref::deref)
    }

    /// Detach the tree from this instance, leaving it empty.
    pub fn take_root(&mut self) -> Option<Box<Node>> {
        self.n_count = 0;
        self.root.take()
    }

    /// Replace the tree under this instance with `root`. Entry count is
    /// left untouched, follow this up with [`Llrb::set_len`] before any
    /// other operation.
    pub fn set_root(&mut self, root: Option<Box<Node>>) {
        debug!(target: "llrb  ", "{:?}, restoring root", self.name);
        self.root = root;
    }

    /// Set the number of entries in the tree.
    pub fn set_len(&mut self, n_count: usize) {
        debug!(target: "llrb  ", "{:?}, restoring len {}", self.name, n_count);
        self.n_count = n_count;
    }
}

type Upsert = (Box<Node>, bool);

type Delete = (Option<Box<Node>>, bool);

type Delmin = (Option<Box<Node>>, Option<u64>);

/// Write operations on Llrb instance.
impl Llrb {
    /// Insert `key` into the tree. If an equal key is already present it
    /// is overwritten in place and true is returned.
    pub fn replace_or_insert(&mut self, key: u64) -> bool {
        let (mut root, replaced) = Llrb::upsert(self.root.take(), key);
        root.set_black();
        self.root = Some(root);
        if !replaced {
            self.n_count += 1;
        }
        replaced
    }

    /// Insert `key` into the tree. If equal keys are already present
    /// they are retained, and `key` is ordered after them.
    pub fn insert_no_replace(&mut self, key: u64) {
        let mut root = Llrb::insert(self.root.take(), key);
        root.set_black();
        self.root = Some(root);
        self.n_count += 1;
    }

    /// Apply [`Llrb::replace_or_insert`] on each key, in iteration order.
    pub fn replace_or_insert_bulk<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = u64>,
    {
        for key in keys {
            self.replace_or_insert(key);
        }
    }

    /// Apply [`Llrb::insert_no_replace`] on each key, in iteration order.
    pub fn insert_no_replace_bulk<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = u64>,
    {
        for key in keys {
            self.insert_no_replace(key);
        }
    }

    /// Delete the smallest key from the tree and return the same.
    /// Return None if tree is empty.
    pub fn delete_min(&mut self) -> Option<u64> {
        let (root, key) = Llrb::do_delete_min(self.root.take());
        self.root = root.map(|mut root| {
            root.set_black();
            root
        });
        if key.is_some() {
            self.n_count = self.n_count.saturating_sub(1);
        }
        key
    }

    /// Delete the largest key from the tree and return the same.
    /// Return None if tree is empty.
    pub fn delete_max(&mut self) -> Option<u64> {
        let (root, key) = Llrb::do_delete_max(self.root.take());
        self.root = root.map(|mut root| {
            root.set_black();
            root
        });
        if key.is_some() {
            self.n_count = self.n_count.saturating_sub(1);
        }
        key
    }

    /// Delete key from this instance and return true. If key is not
    /// present, then delete is a no-op and return false. When the tree
    /// holds repeating keys only one of them is deleted.
    pub fn delete(&mut self, key: u64) -> bool {
        // descent below restructures the path, avoid it for missing keys.
        if !self.has(key) {
            return false;
        }
        let (root, deleted) = Llrb::do_delete(self.root.take(), key);
        self.root = root.map(|mut root| {
            root.set_black();
            root
        });
        if deleted {
            self.n_count = self.n_count.saturating_sub(1);
        }
        deleted
    }

    /// Validate LLRB tree with following rules:
    ///
    /// * Root node is always black.
    /// * From root to any leaf, no consecutive reds allowed in its path.
    /// * Red links lean left, no right child is red.
    /// * Number of blacks should be same under left child and right child.
    /// * Make sure keys are in sorted order, across the whole subtree.
    /// * Number of reachable nodes must match [`Llrb::len`].
    ///
    /// Additionally return full statistics on the tree. Refer to [`Stats`]
    /// for more information.
    pub fn validate(&self) -> Result<Stats> {
        let res = self.do_validate();
        if let Err(err) = &res {
            error!(target: "llrb  ", "{:?}, validate failed: {}", self.name, err);
        }
        res
    }

    fn do_validate(&self) -> Result<Stats> {
        let root = self.root();
        if is_red(root) {
            return Err(Error::DirtyRoot);
        }

        let (mut depths, mut reachable) = (Depth::new(), 0);
        let blacks = Llrb::validate_tree(
            root,
            (None, None),
            false,
            0,
            0,
            &mut depths,
            &mut reachable,
        )?;
        if reachable != self.n_count {
            return Err(Error::CountMismatch(self.n_count, reachable));
        }

        let mut stats = Stats::new(self.n_count, mem::size_of::<Node>());
        stats.set_blacks(blacks);
        stats.set_depths(depths);
        Ok(stats)
    }
}

/// Read operations on Llrb instance.
impl Llrb {
    /// Check whether `key` is present in the tree.
    #[inline]
    pub fn has(&self, key: u64) -> bool {
        self.get(key).is_some()
    }

    /// Get the key equal to `key` from the tree.
    pub fn get(&self, key: u64) -> Option<u64> {
        let mut node = self.root();
        while let Some(nref) = node {
            node = match nref.key.cmp(&key) {
                Ordering::Less => nref.right_deref(),
                Ordering::Greater => nref.left_deref(),
                Ordering::Equal => return Some(nref.key),
            };
        }
        None
    }

    /// Return the smallest key in the tree.
    pub fn min(&self) -> Option<u64> {
        let mut nref = self.root()?;
        while let Some(left) = nref.left_deref() {
            nref = left;
        }
        Some(nref.key)
    }

    /// Return the largest key in the tree.
    pub fn max(&self) -> Option<u64> {
        let mut nref = self.root()?;
        while let Some(right) = nref.right_deref() {
            nref = right;
        }
        Some(nref.key)
    }

    /// Return a random key from this index.
    pub fn random<R: Rng>(&self, rng: &mut R) -> Option<u64> {
        let mut nref = self.root()?;

        let mut at_depth = rng.gen::<u8>() % 40;
        loop {
            let next = if rng.gen::<bool>() {
                nref.left_deref()
            } else {
                nref.right_deref()
            };
            match next {
                Some(next) if at_depth > 0 => {
                    at_depth -= 1;
                    nref = next;
                }
                _ => break Some(nref.key),
            }
        }
    }

    /// Return an iterator over all keys in ascending order.
    pub fn iter(&self) -> Iter {
        Iter::new(self.root())
    }

    /// Range over keys from low to high, in ascending order.
    pub fn range<R>(&self, range: R) -> Range
    where
        R: RangeBounds<u64>,
    {
        let (low, high) = (range.start_bound().cloned(), range.end_bound().cloned());
        Range::new(self.root(), low, high)
    }

    /// Range over keys from high to low, in descending order.
    pub fn reverse<R>(&self, range: R) -> Reverse
    where
        R: RangeBounds<u64>,
    {
        let (low, high) = (range.start_bound().cloned(), range.end_bound().cloned());
        Reverse::new(self.root(), low, high)
    }
}

/// Callback based traversal. Each of these call `callb` once per key,
/// in sort order, until `callb` returns false.
impl Llrb {
    /// Visit every key greater than or equal to `pivot`, ascending.
    pub fn ascend_greater_or_equal<F>(&self, pivot: u64, mut callb: F)
    where
        F: FnMut(u64) -> bool,
    {
        Llrb::ascend_ge(self.root(), pivot, &mut callb);
    }

    /// Visit every key less than `pivot`, ascending.
    pub fn ascend_less_than<F>(&self, pivot: u64, mut callb: F)
    where
        F: FnMut(u64) -> bool,
    {
        Llrb::ascend_lt(self.root(), pivot, &mut callb);
    }

    /// Visit every key in `[low, high)`, ascending.
    pub fn ascend_range<F>(&self, low: u64, high: u64, mut callb: F)
    where
        F: FnMut(u64) -> bool,
    {
        Llrb::ascend_rng(self.root(), low, high, &mut callb);
    }

    /// Visit every key less than or equal to `pivot`, descending.
    pub fn descend_less_or_equal<F>(&self, pivot: u64, mut callb: F)
    where
        F: FnMut(u64) -> bool,
    {
        Llrb::descend_le(self.root(), pivot, &mut callb);
    }

    fn ascend_ge<F>(node: Option<&Node>, pivot: u64, callb: &mut F) -> bool
    where
        F: FnMut(u64) -> bool,
    {
        let node = match node {
            None => return true,
            Some(node) => node,
        };
        if node.key >= pivot {
            if !Llrb::ascend_ge(node.left_deref(), pivot, callb) {
                return false;
            }
            if !callb(node.key) {
                return false;
            }
        }
        Llrb::ascend_ge(node.right_deref(), pivot, callb)
    }

    fn ascend_lt<F>(node: Option<&Node>, pivot: u64, callb: &mut F) -> bool
    where
        F: FnMut(u64) -> bool,
    {
        let node = match node {
            None => return true,
            Some(node) => node,
        };
        if !Llrb::ascend_lt(node.left_deref(), pivot, callb) {
            return false;
        }
        // rest of the walk, in sort order, is >= pivot.
        if node.key >= pivot || !callb(node.key) {
            return false;
        }
        Llrb::ascend_lt(node.right_deref(), pivot, callb)
    }

    fn ascend_rng<F>(node: Option<&Node>, low: u64, high: u64, callb: &mut F) -> bool
    where
        F: FnMut(u64) -> bool,
    {
        let node = match node {
            None => return true,
            Some(node) => node,
        };
        if node.key >= high {
            return Llrb::ascend_rng(node.left_deref(), low, high, callb);
        }
        if node.key < low {
            return Llrb::ascend_rng(node.right_deref(), low, high, callb);
        }

        if !Llrb::ascend_rng(node.left_deref(), low, high, callb) {
            return false;
        }
        if !callb(node.key) {
            return false;
        }
        Llrb::ascend_rng(node.right_deref(), low, high, callb)
    }

    fn descend_le<F>(node: Option<&Node>, pivot: u64, callb: &mut F) -> bool
    where
        F: FnMut(u64) -> bool,
    {
        let node = match node {
            None => return true,
            Some(node) => node,
        };
        if node.key <= pivot {
            if !Llrb::descend_le(node.right_deref(), pivot, callb) {
                return false;
            }
            if !callb(node.key) {
                return false;
            }
        }
        Llrb::descend_le(node.left_deref(), pivot, callb)
    }
}

/// Diagnostics on tree shape.
impl Llrb {
    /// Return the key equal to `key` and its depth, counted as number of
    /// links from the root. Return None if key is not present.
    pub fn get_height(&self, key: u64) -> Option<(u64, usize)> {
        let (mut node, mut depth) = (self.root(), 0);
        while let Some(nref) = node {
            node = match nref.key.cmp(&key) {
                Ordering::Less => nref.right_deref(),
                Ordering::Greater => nref.left_deref(),
                Ordering::Equal => return Some((nref.key, depth)),
            };
            depth += 1;
        }
        None
    }

    /// Return the mean and standard deviation of depth, over all nodes
    /// in the tree. This is a full table scan.
    pub fn height_stats(&self) -> (f64, f64) {
        let mut av = AvgVar::new();
        Llrb::sample_heights(self.root(), 0, &mut av);
        (av.mean(), av.stddev())
    }

    fn sample_heights(node: Option<&Node>, depth: usize, av: &mut AvgVar) {
        if let Some(node) = node {
            av.add(depth as f64);
            Llrb::sample_heights(node.left_deref(), depth + 1, av);
            Llrb::sample_heights(node.right_deref(), depth + 1, av);
        }
    }
}

impl Llrb {
    fn upsert(node: Option<Box<Node>>, key: u64) -> Upsert {
        let mut node = match node {
            None => return (Node::new(key, false /*black*/), false),
            Some(node) => node,
        };

        let replaced = match node.key.cmp(&key) {
            Ordering::Greater => {
                let (left, replaced) = Llrb::upsert(node.left.take(), key);
                node.left = Some(left);
                replaced
            }
            Ordering::Less => {
                let (right, replaced) = Llrb::upsert(node.right.take(), key);
                node.right = Some(right);
                replaced
            }
            Ordering::Equal => {
                node.key = key;
                true
            }
        };
        (Llrb::walkuprot_23(node), replaced)
    }

    fn insert(node: Option<Box<Node>>, key: u64) -> Box<Node> {
        let mut node = match node {
            None => return Node::new(key, false /*black*/),
            Some(node) => node,
        };

        if key < node.key {
            node.left = Some(Llrb::insert(node.left.take(), key));
        } else {
            // equal keys lean right, behind the ones already present.
            node.right = Some(Llrb::insert(node.right.take(), key));
        }
        Llrb::walkuprot_23(node)
    }

    fn do_delete(node: Option<Box<Node>>, key: u64) -> Delete {
        let mut node = match node {
            None => return (None, false),
            Some(node) => node,
        };

        if key < node.key {
            if node.left.is_none() {
                return (Some(node), false);
            }
            if !is_red(node.left_deref()) && !is_left_red(node.left_deref()) {
                node = Llrb::move_red_left(node);
            }
            let (left, deleted) = Llrb::do_delete(node.left.take(), key);
            node.left = left;
            return (Some(Llrb::fixup(node)), deleted);
        }

        if is_red(node.left_deref()) {
            node = Llrb::rotate_right(node);
        }

        // node.key <= key from here on.
        if node.key == key && node.right.is_none() {
            return (None, true);
        }

        let ok = node.right.is_some() && !is_red(node.right_deref());
        let mut rotated = false;
        if ok && !is_left_red(node.right_deref()) {
            // move_red_right() lifts the left child when its left is red,
            // the matching node is then to the right of the lifted one.
            rotated = is_left_red(node.left_deref());
            node = Llrb::move_red_right(node);
        }

        if node.key == key && !rotated {
            // right child is present, replace node's key with its successor.
            let (right, successor) = Llrb::do_delete_min(node.right.take());
            node.right = right;
            match successor {
                Some(successor) => node.key = successor,
                None => Llrb::fatal("do_delete(): missing successor"),
            }
            (Some(Llrb::fixup(node)), true)
        } else {
            let (right, deleted) = Llrb::do_delete(node.right.take(), key);
            node.right = right;
            (Some(Llrb::fixup(node)), deleted)
        }
    }

    fn do_delete_min(node: Option<Box<Node>>) -> Delmin {
        let mut node = match node {
            None => return (None, None),
            Some(node) => node,
        };
        if node.left.is_none() {
            return (None, Some(node.key));
        }
        if !is_red(node.left_deref()) && !is_left_red(node.left_deref()) {
            node = Llrb::move_red_left(node);
        }
        let (left, key) = Llrb::do_delete_min(node.left.take());
        node.left = left;
        (Some(Llrb::fixup(node)), key)
    }

    fn do_delete_max(node: Option<Box<Node>>) -> Delmin {
        let mut node = match node {
            None => return (None, None),
            Some(node) => node,
        };
        if is_red(node.left_deref()) {
            node = Llrb::rotate_right(node);
        }
        if node.right.is_none() {
            return (None, Some(node.key));
        }
        if !is_red(node.right_deref()) && !is_left_red(node.right_deref()) {
            node = Llrb::move_red_right(node);
        }
        let (right, key) = Llrb::do_delete_max(node.right.take());
        node.right = right;
        (Some(Llrb::fixup(node)), key)
    }

    fn validate_tree(
        node: Option<&Node>,
        (low, high): (Option<u64>, Option<u64>),
        fromred: bool,
        mut nb: usize,
        depth: usize,
        depths: &mut Depth,
        reachable: &mut usize,
    ) -> Result<usize> {
        let node = match node {
            None => return Ok(nb),
            Some(node) => node,
        };
        *reachable += 1;

        // repeating keys are allowed, hence non-strict bounds.
        match (low, high) {
            (Some(low), _) if node.key < low => return Err(Error::SortError(node.key, low)),
            (_, Some(high)) if node.key > high => return Err(Error::SortError(node.key, high)),
            _ => (),
        }

        let red = !node.is_black();
        if fromred && red {
            return Err(Error::ConsecutiveReds);
        }
        if !red {
            nb += 1;
        }

        let (left, right) = (node.left_deref(), node.right_deref());
        if is_red(right) {
            return Err(Error::RightRed(node.key));
        }
        if left.is_none() && right.is_none() {
            depths.sample(depth);
        }
        let (lb, rb) = ((low, Some(node.key)), (Some(node.key), high));
        let lblacks = Llrb::validate_tree(left, lb, red, nb, depth + 1, depths, reachable)?;
        let rblacks = Llrb::validate_tree(right, rb, red, nb, depth + 1, depths, reachable)?;
        if lblacks != rblacks {
            let err = format!("left: {} right: {}", lblacks, rblacks);
            return Err(Error::UnbalancedBlacks(err));
        }
        Ok(lblacks)
    }

    fn fatal(msg: &str) -> ! {
        error!(target: "llrb  ", "{}", msg);
        panic!("{}, call the programmer", msg)
    }

    //--------- rotation routines for 2-3 algorithm ----------------

    fn walkuprot_23(mut node: Box<Node>) -> Box<Node> {
        if is_red(node.right_deref()) && !is_red(node.left_deref()) {
            node = Llrb::rotate_left(node);
        }
        if is_red(node.left_deref()) && is_left_red(node.left_deref()) {
            node = Llrb::rotate_right(node);
        }
        if is_red(node.left_deref()) && is_red(node.right_deref()) {
            Llrb::flip(node.deref_mut())
        }
        node
    }

    //              (i)                       (i)
    //               |                         |
    //              node                       x
    //              /  \                      / \
    //             /    (r)                 (r)  \
    //            /       \                 /     \
    //          left       x             node      xr
    //                    / \            /  \
    //                  xl   xr       left   xl
    //
    fn rotate_left(mut node: Box<Node>) -> Box<Node> {
        let mut x = match node.right.take() {
            Some(x) if !x.is_black() => x,
            _ => Llrb::fatal("rotate_left(): rotating a black link"),
        };
        node.right = x.left.take();
        x.black = node.black;
        node.set_red();
        x.left = Some(node);
        x
    }

    //              (i)                       (i)
    //               |                         |
    //              node                       x
    //              /  \                      / \
    //            (r)   \                   (r)  \
    //           /       \                 /      \
    //          x       right             xl      node
    //         / \                                / \
    //       xl   xr                             xr  right
    //
    fn rotate_right(mut node: Box<Node>) -> Box<Node> {
        let mut x = match node.left.take() {
            Some(x) if !x.is_black() => x,
            _ => Llrb::fatal("rotate_right(): rotating a black link"),
        };
        node.left = x.right.take();
        x.black = node.black;
        node.set_red();
        x.right = Some(node);
        x
    }

    //        (x)                   (!x)
    //         |                     |
    //        node                  node
    //        / \                   / \
    //      (y) (z)              (!y) (!z)
    //     /      \              /      \
    //   left    right         left    right
    //
    fn flip(node: &mut Node) {
        match (node.left.as_mut(), node.right.as_mut()) {
            (Some(left), Some(right)) => {
                left.toggle_link();
                right.toggle_link();
            }
            _ => Llrb::fatal("flip(): missing child"),
        }
        node.toggle_link();
    }

    fn fixup(mut node: Box<Node>) -> Box<Node> {
        if is_red(node.right_deref()) {
            node = Llrb::rotate_left(node);
        }
        if is_red(node.left_deref()) && is_left_red(node.left_deref()) {
            node = Llrb::rotate_right(node);
        }
        if is_red(node.left_deref()) && is_red(node.right_deref()) {
            Llrb::flip(node.deref_mut());
        }
        node
    }

    fn move_red_left(mut node: Box<Node>) -> Box<Node> {
        Llrb::flip(node.deref_mut());
        if is_left_red(node.right_deref()) {
            node.right = node.right.take().map(Llrb::rotate_right);
            node = Llrb::rotate_left(node);
            Llrb::flip(node.deref_mut());
        }
        node
    }

    fn move_red_right(mut node: Box<Node>) -> Box<Node> {
        Llrb::flip(node.deref_mut());
        if is_left_red(node.left_deref()) {
            node = Llrb::rotate_right(node);
            Llrb::flip(node.deref_mut());
        }
        node
    }
}

fn is_red(node: Option<&Node>) -> bool {
    node.map_or(false, |node| !node.is_black())
}

// is_red() on the left child of `node`.
fn is_left_red(node: Option<&Node>) -> bool {
    node.map_or(false, |node| is_red(node.left_deref()))
}

/// Node corresponds to a single entry in Llrb instance.
#[derive(Clone, Debug)]
pub struct Node {
    key: u64,
    black: bool,              // store: black or red
    left: Option<Box<Node>>,  // store: left child
    right: Option<Box<Node>>, // store: right child
}

impl Node {
    /// Create a detached node. New nodes in an LLRB tree are red, pass
    /// `black` as true only when rebuilding a tree from saved structure.
    pub fn new(key: u64, black: bool) -> Box<Node> {
        Box::new(Node {
            key,
            black,
            left: None,
            right: None,
        })
    }

    /// Return the key held by this node.
    #[inline]
    pub fn to_key(&self) -> u64 {
        self.key
    }

    #[inline]
    pub fn left_deref(&self) -> Option<&Node> {
        self.left.as_ref().map(Deref::deref)
    }

    #[inline]
    pub fn right_deref(&self) -> Option<&Node> {
        self.right.as_ref().map(Deref::deref)
    }

    #[inline]
    pub fn set_left(&mut self, left: Option<Box<Node>>) {
        self.left = left
    }

    #[inline]
    pub fn set_right(&mut self, right: Option<Box<Node>>) {
        self.right = right
    }

    #[inline]
    pub fn set_red(&mut self) {
        self.black = false
    }

    #[inline]
    pub fn set_black(&mut self) {
        self.black = true
    }

    #[inline]
    fn toggle_link(&mut self) {
        self.black = !self.black
    }

    /// Return the color of the link from parent to this node.
    #[inline]
    pub fn is_black(&self) -> bool {
        self.black
    }
}

/// Statistics on [`Llrb`] tree. Serves two purpose:
///
/// * To get partial but quick statistics via [`Llrb::stats`] method.
/// * To get full statisics via [`Llrb::validate`] method.
#[derive(Default, Debug)]
pub struct Stats {
    entries: usize, // number of entries in the tree.
    node_size: usize,
    blacks: Option<usize>,
    depths: Option<Depth>,
}

impl Stats {
    fn new(entries: usize, node_size: usize) -> Stats {
        Stats {
            entries,
            node_size,
            blacks: Default::default(),
            depths: Default::default(),
        }
    }

    #[inline]
    fn set_blacks(&mut self, blacks: usize) {
        self.blacks = Some(blacks)
    }

    #[inline]
    fn set_depths(&mut self, depths: Depth) {
        self.depths = Some(depths)
    }

    /// Return number entries in [`Llrb`] instance.
    #[inline]
    pub fn entries(&self) -> usize {
        self.entries
    }

    /// Return node-size, including over-head for `Llrb`.
    ///
    /// ```
    /// use llrb_set::Llrb;
    /// let llrb = Llrb::new("myinstance");
    ///
    /// // key: 8 bytes, two child links: 16 bytes, color padded to 8 bytes.
    /// assert_eq!(llrb.stats().node_size(), 32);
    /// ```
    #[inline]
    pub fn node_size(&self) -> usize {
        self.node_size
    }

    /// Return number of black nodes from root to leaf, on both left
    /// and right child.
    #[inline]
    pub fn blacks(&self) -> Option<usize> {
        self.blacks
    }

    /// Return [`Depth`] statistics, None if the tree was empty or stats
    /// was not obtained via [`Llrb::validate`].
    pub fn depths(&self) -> Option<Depth> {
        match &self.depths {
            Some(depths) if depths.samples() > 0 => Some(depths.clone()),
            _ => None,
        }
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let none = "none".to_string();
        let b = self.blacks.as_ref().map_or(none.clone(), |x| x.to_string());
        let d = self.depths.as_ref().map_or(none, |x| x.to_json());
        write!(
            f,
            "llrb = {{ entries={}, node_size={}, blacks={} }}\n",
            self.entries, self.node_size, b,
        )?;
        write!(f, "llrb.depths = {}", d)
    }
}

#[cfg(test)]
#[path = "llrb_test.rs"]
mod llrb_test;
