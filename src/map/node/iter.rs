use super::{Link, LinkExt, Node};

pub trait NodeRef: Sized {
    type Item;
    fn item(self) -> Self::Item;
    fn left(&mut self) -> Option<Self>;
    fn right(&mut self) -> Option<Self>;
}

impl<'a, K, V> NodeRef for &'a Node<K, V> {
    type Item = (&'a K, &'a V);

    fn item(self) -> (&'a K, &'a V) { (&self.key, &self.value) }

    fn left(&mut self) -> Option<&'a Node<K, V>> {
        let node: &'a Node<K, V> = *self;
        node.left.as_node_ref()
    }

    fn right(&mut self) -> Option<&'a Node<K, V>> {
        let node: &'a Node<K, V> = *self;
        node.right.as_node_ref()
    }
}

impl<K, V> NodeRef for Box<Node<K, V>> {
    type Item = (K, V);
    fn item(self) -> (K, V) { let node = *self; (node.key, node.value) }
    fn left(&mut self) -> Link<K, V> { self.left.take() }
    fn right(&mut self) -> Link<K, V> { self.right.take() }
}

/// An in-order walk driven by an explicit stack.
///
/// The stack holds the nodes whose left subtrees are being visited, so it never grows beyond the
/// height of the tree.
#[derive(Clone)]
pub struct Iter<N> where N: NodeRef {
    stack: Vec<N>,
    size: usize,
}

impl<N> Iter<N> where N: NodeRef {
    pub fn new(root: Option<N>, size: usize) -> Iter<N> {
        let mut it = Iter { stack: vec![], size };
        it.descend(root);
        it
    }

    fn descend(&mut self, mut next: Option<N>) {
        while let Some(mut node) = next {
            next = node.left();
            self.stack.push(node);
        }
    }
}

impl<N> Iterator for Iter<N> where N: NodeRef {
    type Item = N::Item;

    fn next(&mut self) -> Option<N::Item> {
        let mut node = self.stack.pop()?;
        let right = node.right();
        self.descend(right);
        self.size -= 1;
        Some(node.item())
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.size, Some(self.size)) }
}

pub struct IterMut<'a, K: 'a, V: 'a> {
    stack: Vec<(&'a K, &'a mut V, &'a mut Link<K, V>)>,
    size: usize,
}

impl<'a, K, V> IterMut<'a, K, V> {
    pub fn new(root: &'a mut Link<K, V>, size: usize) -> IterMut<'a, K, V> {
        let mut it = IterMut { stack: vec![], size };
        it.descend(root);
        it
    }

    fn descend(&mut self, mut link: &'a mut Link<K, V>) {
        while let Some(node) = link {
            let Node { left, right, key, value } = &mut **node;
            self.stack.push((&*key, value, right));
            link = left;
        }
    }
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<(&'a K, &'a mut V)> {
        let (key, value, right) = self.stack.pop()?;
        self.descend(right);
        self.size -= 1;
        Some((key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.size, Some(self.size)) }
}
