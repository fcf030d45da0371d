mod iter;


use compare::Compare;
use log::trace;
use std::cmp::Ordering::*;
use std::mem::replace;

pub use self::iter::{Iter, IterMut};

pub type Link<K, V> = Option<Box<Node<K, V>>>;

pub trait LinkExt: Sized {
    type K;
    type V;
    fn as_node_ref(&self) -> Option<&Node<Self::K, Self::V>>;
    fn key_value(&self) -> Option<(&Self::K, &Self::V)>;
    fn key_value_mut(&mut self) -> Option<(&Self::K, &mut Self::V)>;
}

impl<K, V> LinkExt for Link<K, V> {
    type K = K;
    type V = V;

    fn as_node_ref(&self) -> Option<&Node<K, V>> {
        self.as_deref()
    }

    fn key_value(&self) -> Option<(&K, &V)> {
        self.as_ref().map(|node| (&node.key, &node.value))
    }

    fn key_value_mut(&mut self) -> Option<(&K, &mut V)> {
        self.as_mut().map(|node| { let node = &mut **node; (&node.key, &mut node.value) })
    }
}

pub struct Node<K, V> {
    left: Link<K, V>,
    right: Link<K, V>,
    key: K,
    value: V,
}

impl<K, V> Node<K, V> {
    fn new(key: K, value: V) -> Self {
        Node { left: None, right: None, key, value }
    }
}

/// Attaches a new leaf at the first empty slot on the descent path.
///
/// Keys equal to a node's key descend right, so an existing entry is never replaced.
pub fn insert<K, V, C>(mut link: &mut Link<K, V>, cmp: &C, key: K, value: V)
    where C: Compare<K> {

    while let Some(node) = link {
        link = if cmp.compares_lt(&key, &node.key) { &mut node.left } else { &mut node.right };
    }

    *link = Some(Box::new(Node::new(key, value)));
}

/// Returns the link holding the topmost node whose key is equal to the given key, or the empty
/// link where the search ended.
pub fn get<'a, K, V, C, Q: ?Sized>(mut link: &'a Link<K, V>, cmp: &C, key: &Q) -> &'a Link<K, V>
    where C: Compare<Q, K> {

    while let Some(ref node) = *link {
        match cmp.compare(key, &node.key) {
            Equal => break,
            Less => link = &node.left,
            Greater => link = &node.right,
        }
    }

    link
}

/// Like `get`, but for a mutable link.
pub fn get_mut<'a, K, V, C, Q: ?Sized>(mut link: &'a mut Link<K, V>, cmp: &C, key: &Q)
    -> &'a mut Link<K, V> where C: Compare<Q, K> {

    loop {
        let order = match *link {
            Some(ref node) => cmp.compare(key, &node.key),
            None => Equal,
        };

        if order == Equal { return link; }

        if let Some(ref mut node) = *link {
            link = if order == Less { &mut node.left } else { &mut node.right };
        }
    }
}

/// Removes the topmost node whose key is equal to the given key, returning its entry.
///
/// A leaf is unlinked, a node with one child is replaced by that child, and a node with two
/// children takes over the entry of its in-order successor, which is then unlinked.
pub fn remove<K, V, C, Q: ?Sized>(link: &mut Link<K, V>, cmp: &C, key: &Q) -> Option<(K, V)>
    where C: Compare<Q, K> {

    let link = get_mut(link, cmp, key);

    if let Some(ref mut node) = *link {
        if node.left.is_some() {
            if let Some(successor) = Left::take_extremum(&mut node.right) {
                trace!("splicing in-order successor into a node with two children");
                let successor = *successor;
                return Some((replace(&mut node.key, successor.key),
                             replace(&mut node.value, successor.value)));
            }
        }
    }

    let Node { left, right, key, value } = *link.take()?;

    *link = match left.or(right) {
        Some(child) => {
            trace!("replacing removed node with its only child");
            Some(child)
        }
        None => {
            trace!("unlinking removed leaf");
            None
        }
    };

    Some((key, value))
}

/// Drops every node below the link without recursing.
pub fn clear<K, V>(link: &mut Link<K, V>) {
    let mut stack: Vec<Box<Node<K, V>>> = link.take().into_iter().collect();

    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

/// Copies the subtree below the link, preserving its shape.
pub fn clone<K, V>(link: &Link<K, V>) -> Link<K, V> where K: Clone, V: Clone {
    enum Step<'a, K, V> {
        Enter(&'a Node<K, V>),
        Build(&'a Node<K, V>),
    }

    let mut steps: Vec<Step<K, V>> = link.as_node_ref().map(Step::Enter).into_iter().collect();
    let mut built: Vec<Box<Node<K, V>>> = vec![];

    while let Some(step) = steps.pop() {
        match step {
            Step::Enter(node) => {
                steps.push(Step::Build(node));
                steps.extend(node.right.as_node_ref().map(Step::Enter));
                steps.extend(node.left.as_node_ref().map(Step::Enter));
            }
            Step::Build(node) => {
                // the right subtree was built last, so it sits on top
                let right = if node.right.is_some() { built.pop() } else { None };
                let left = if node.left.is_some() { built.pop() } else { None };

                built.push(Box::new(Node {
                    left,
                    right,
                    key: node.key.clone(),
                    value: node.value.clone(),
                }));
            }
        }
    }

    built.pop()
}

/// Returns the number of nodes on the longest root-to-leaf path.
pub fn height<K, V>(link: &Link<K, V>) -> usize {
    let mut stack: Vec<(&Node<K, V>, usize)> =
        link.as_node_ref().map(|node| (node, 1)).into_iter().collect();
    let mut height = 0;

    while let Some((node, depth)) = stack.pop() {
        height = height.max(depth);
        stack.extend(node.left.as_node_ref().map(|child| (child, depth + 1)));
        stack.extend(node.right.as_node_ref().map(|child| (child, depth + 1)));
    }

    height
}

pub trait Dir: Sized {
    type Opposite: Dir<Opposite = Self>;

    fn forward<K, V>(node: &Node<K, V>) -> &Link<K, V>;
    fn forward_mut<K, V>(node: &mut Node<K, V>) -> &mut Link<K, V>;

    /// Follows links in this direction from the given link until reaching a node with no child
    /// in this direction.
    fn extremum<K, V>(mut link: &Link<K, V>) -> &Link<K, V> {
        while let Some(node) = link.as_deref() {
            let child = Self::forward(node);
            if child.is_none() { break; }
            link = child;
        }

        link
    }

    /// Unlinks the extremum of the subtree below the link, moving its opposite child into its
    /// place.
    fn take_extremum<K, V>(mut link: &mut Link<K, V>) -> Link<K, V> {
        while link.as_deref().map_or(false, |node| Self::forward(node).is_some()) {
            if let Some(ref mut node) = *link { link = Self::forward_mut(&mut **node); }
        }

        let mut node = link.take()?;
        *link = Self::Opposite::forward_mut(&mut *node).take();
        Some(node)
    }
}

pub enum Left {}

impl Dir for Left {
    type Opposite = Right;

    fn forward<K, V>(node: &Node<K, V>) -> &Link<K, V> { &node.left }
    fn forward_mut<K, V>(node: &mut Node<K, V>) -> &mut Link<K, V> { &mut node.left }
}

pub enum Right {}

impl Dir for Right {
    type Opposite = Left;

    fn forward<K, V>(node: &Node<K, V>) -> &Link<K, V> { &node.right }
    fn forward_mut<K, V>(node: &mut Node<K, V>) -> &mut Link<K, V> { &mut node.right }
}
