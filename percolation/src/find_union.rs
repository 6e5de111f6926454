//! Weighted quick-union with full path compression.
use crate::error::{PercolationError, Result};

#[derive(Debug, Clone)]
pub struct FindUnion {
    /// The vector of parents. If parents[i] = j, the i-th node and the j-th node
    /// reside in the same component. A node is the representative iff parents[i] = i.
    parents: Vec<usize>,
    /// The size of each component. If sizes[i] = k, the component represented by
    /// the i-th node has k nodes.
    /// It is valid if and only if the i-th node is the representative of the component.
    sizes: Vec<usize>,
    /// The number of the components.
    components: usize,
}

impl FindUnion {
    /// Create a new instance of FindUnion tree with `size` singletons.
    /// Return an error if `size` is zero.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(PercolationError::InvalidArgument(
                "union-find needs at least one element",
            ));
        }
        Ok(Self {
            parents: (0..size).collect(),
            sizes: vec![1; size],
            components: size,
        })
    }
    /// The number of the elements.
    pub fn len(&self) -> usize {
        self.parents.len()
    }
    /// Always false, as `new` rejects an empty universe.
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
    /// The number of the components.
    pub fn count(&self) -> usize {
        self.components
    }
    fn check(&self, index: usize) -> Result<()> {
        match index < self.len() {
            true => Ok(()),
            false => Err(PercolationError::InvalidIndex {
                index,
                len: self.len(),
            }),
        }
    }
    fn representative(&self, mut index: usize) -> usize {
        while index != self.parents[index] {
            index = self.parents[index];
        }
        index
    }
    fn compress(&mut self, index: usize) -> usize {
        let root = self.representative(index);
        let mut index = index;
        while index != root {
            let next = self.parents[index];
            self.parents[index] = root;
            index = next;
        }
        root
    }
    /// Find the representative of nodes [index].
    /// Every node on the path to the representative is re-pointed directly to it.
    pub fn find(&mut self, index: usize) -> Result<usize> {
        self.check(index)?;
        Ok(self.compress(index))
    }
    /// Find the representative of nodes [index] without path compression.
    /// Useful when only an immutable reference is available.
    pub fn find_no_compress(&self, index: usize) -> Result<usize> {
        self.check(index)?;
        Ok(self.representative(index))
    }
    /// Unite the component node1 residing and the component node2 residing.
    /// The smaller tree goes under the larger one; on a tie, node1's tree goes under node2's.
    /// If either of the index exceeds the range, return `InvalidIndex` and leave the structure untouched.
    pub fn union(&mut self, node1: usize, node2: usize) -> Result<()> {
        self.check(node1)?;
        self.check(node2)?;
        let parent1 = self.compress(node1);
        let parent2 = self.compress(node2);
        if parent1 == parent2 {
            return Ok(());
        }
        if self.sizes[parent1] > self.sizes[parent2] {
            self.parents[parent2] = parent1;
            self.sizes[parent1] += self.sizes[parent2];
        } else {
            self.parents[parent1] = parent2;
            self.sizes[parent2] += self.sizes[parent1];
        }
        self.components -= 1;
        Ok(())
    }
    /// Determine if the node1 and node2 reside in the same component.
    pub fn connected(&mut self, node1: usize, node2: usize) -> Result<bool> {
        Ok(self.find(node1)? == self.find(node2)?)
    }
    /// Get the size of the component node1 resides.
    pub fn size(&mut self, node1: usize) -> Result<usize> {
        let parent = self.find(node1)?;
        Ok(self.sizes[parent])
    }
    // Callers inside the crate own the indices (grid offsets and sentinels).
    pub(crate) fn same(&mut self, node1: usize, node2: usize) -> bool {
        debug_assert!(node1 < self.len() && node2 < self.len());
        self.compress(node1) == self.compress(node2)
    }
    pub(crate) fn same_no_compress(&self, node1: usize, node2: usize) -> bool {
        debug_assert!(node1 < self.len() && node2 < self.len());
        self.representative(node1) == self.representative(node2)
    }
}
