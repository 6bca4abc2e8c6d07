//! Chunked node storage with fallible allocation.

use crate::error::{Error, Result};
use std::mem;
use std::ops::{Index, IndexMut};
use std::vec::Vec;

/// A handle to a node stored in a `NodeArena<T>`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct NodeId {
    chunk_index: usize,
    block_index: usize,
}

enum Block<T> {
    Occupied(T),
    Vacant(Option<NodeId>),
}

/// An allocator that only allocates a single type of node.
///
/// Nodes are stored in fixed size chunks so that growing the arena never moves existing nodes.
/// Freed blocks are threaded into a free list and reused before new blocks are handed out. Unlike
/// the global allocator, running out of memory or exceeding the node limit of the arena is
/// reported as `Error::AllocationFailure` instead of aborting the process.
///
/// # Examples
///
/// ```
/// use string_index::arena::NodeArena;
///
/// let mut arena = NodeArena::new(1024);
///
/// let x = arena.allocate(1).unwrap();
/// assert_eq!(arena[x], 1);
///
/// arena[x] += 1;
/// assert_eq!(arena[x], 2);
///
/// assert_eq!(arena.free(&x), 2);
/// ```
pub struct NodeArena<T> {
    head: Option<NodeId>,
    chunks: Vec<Vec<Block<T>>>,
    chunk_size: usize,
    tail: usize,
    size: usize,
    capacity: usize,
    limit: Option<usize>,
}

impl<T> NodeArena<T> {
    fn is_valid_id(&self, id: &NodeId) -> bool {
        id.chunk_index < self.chunks.len() && id.block_index < self.chunks[id.chunk_index].len()
    }

    /// Constructs a new, empty `NodeArena<T>` with a specific number of nodes per chunk.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero.
    pub fn new(chunk_size: usize) -> Self {
        Self::with_limit(chunk_size, None)
    }

    /// Constructs a new, empty `NodeArena<T>` that holds at most `limit` live nodes.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use string_index::arena::NodeArena;
    ///
    /// let mut arena = NodeArena::with_limit(16, Some(1));
    /// assert!(arena.allocate(0).is_ok());
    /// assert!(arena.allocate(1).is_err());
    /// ```
    pub fn with_limit(chunk_size: usize, limit: Option<usize>) -> Self {
        assert!(chunk_size > 0, "Error: chunk size must be positive.");
        NodeArena {
            head: None,
            chunks: Vec::new(),
            chunk_size,
            tail: 0,
            size: 0,
            capacity: 0,
            limit,
        }
    }

    /// Ensures that the next `additional` allocations succeed without acquiring more memory.
    /// Returns `Error::AllocationFailure` if the node limit would be exceeded or if the memory
    /// could not be acquired, in which case the arena is left unchanged.
    pub fn try_reserve(&mut self, additional: usize) -> Result<()> {
        if let Some(limit) = self.limit {
            if self.size + additional > limit {
                warn!(
                    "refusing to allocate {} node(s): {} of {} in use",
                    additional, self.size, limit,
                );
                return Err(Error::AllocationFailure { requested: additional });
            }
        }

        let available = self.capacity - self.size;
        if available >= additional {
            return Ok(());
        }

        let missing = additional - available;
        let new_chunks = (missing + self.chunk_size - 1) / self.chunk_size;
        let mut reserved = Vec::new();
        reserved
            .try_reserve_exact(new_chunks)
            .and_then(|_| self.chunks.try_reserve(new_chunks))
            .map_err(|_| Error::AllocationFailure { requested: additional })?;
        for _ in 0..new_chunks {
            let mut chunk = Vec::new();
            if chunk.try_reserve_exact(self.chunk_size).is_err() {
                warn!("unable to reserve a chunk of {} node(s)", self.chunk_size);
                return Err(Error::AllocationFailure { requested: additional });
            }
            reserved.push(chunk);
        }

        self.capacity += new_chunks * self.chunk_size;
        self.chunks.extend(reserved);
        Ok(())
    }

    /// Allocates a node in the arena and returns its `NodeId`. The id can later be used to
    /// retrieve mutable and immutable references to the node, and to deallocate the node.
    pub fn allocate(&mut self, value: T) -> Result<NodeId> {
        self.try_reserve(1)?;
        self.size += 1;

        match self.head.take() {
            None => {
                while self.chunks[self.tail].len() == self.chunk_size {
                    self.tail += 1;
                }
                let chunk = &mut self.chunks[self.tail];
                chunk.push(Block::Occupied(value));
                Ok(NodeId {
                    chunk_index: self.tail,
                    block_index: chunk.len() - 1,
                })
            },
            Some(id) => {
                let vacant_block = mem::replace(
                    &mut self.chunks[id.chunk_index][id.block_index],
                    Block::Occupied(value),
                );

                match vacant_block {
                    Block::Vacant(next_id) => {
                        self.head = next_id;
                        Ok(id)
                    },
                    Block::Occupied(_) => panic!("Error: expected a vacant block."),
                }
            },
        }
    }

    /// Deallocates a node in the arena and returns it.
    ///
    /// # Panics
    ///
    /// Panics if `id` corresponds to an invalid or vacant block.
    pub fn free(&mut self, id: &NodeId) -> T {
        if !self.is_valid_id(id) {
            panic!("Error: attempting to free invalid block.");
        }
        let old_block = mem::replace(
            &mut self.chunks[id.chunk_index][id.block_index],
            Block::Vacant(self.head),
        );
        match old_block {
            Block::Vacant(next_id) => {
                self.chunks[id.chunk_index][id.block_index] = Block::Vacant(next_id);
                panic!("Error: attempting to free vacant block.");
            },
            Block::Occupied(value) => {
                self.size -= 1;
                self.head = Some(*id);
                value
            },
        }
    }

    /// Returns an immutable reference to a node in the arena. Returns `None` if the id does not
    /// correspond to a live node.
    pub fn get(&self, id: &NodeId) -> Option<&T> {
        if !self.is_valid_id(id) {
            return None;
        }
        match self.chunks[id.chunk_index][id.block_index] {
            Block::Occupied(ref value) => Some(value),
            Block::Vacant(_) => None,
        }
    }

    /// Returns a mutable reference to a node in the arena. Returns `None` if the id does not
    /// correspond to a live node.
    pub fn get_mut(&mut self, id: &NodeId) -> Option<&mut T> {
        if !self.is_valid_id(id) {
            return None;
        }
        match self.chunks[id.chunk_index][id.block_index] {
            Block::Occupied(ref mut value) => Some(value),
            Block::Vacant(_) => None,
        }
    }

    /// Returns the number of live nodes in the arena.
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
}

impl<T> Index<NodeId> for NodeArena<T> {
    type Output = T;

    fn index(&self, id: NodeId) -> &Self::Output {
        self.get(&id).expect("Error: node id out of bounds.")
    }
}

impl<T> IndexMut<NodeId> for NodeArena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        self.get_mut(&id).expect("Error: node id out of bounds.")
    }
}

#[cfg(test)]
mod tests {
    use super::{NodeArena, NodeId};
    use crate::error::Error;

    #[test]
    #[should_panic]
    fn test_free_invalid_block() {
        let mut arena: NodeArena<u32> = NodeArena::new(1024);
        arena.free(&NodeId {
            chunk_index: 0,
            block_index: 0,
        });
    }

    #[test]
    #[should_panic]
    fn test_free_vacant_block() {
        let mut arena = NodeArena::new(1024);
        let id = arena.allocate(0).unwrap();
        arena.free(&id);
        arena.free(&id);
    }

    #[test]
    fn test_allocate() {
        let mut arena = NodeArena::new(1024);
        assert_eq!(
            arena.allocate(0),
            Ok(NodeId {
                chunk_index: 0,
                block_index: 0
            }),
        );
        assert_eq!(
            arena.allocate(0),
            Ok(NodeId {
                chunk_index: 0,
                block_index: 1
            }),
        );
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn test_allocate_multiple_chunks() {
        let mut arena = NodeArena::new(2);
        arena.allocate(0).unwrap();
        arena.allocate(0).unwrap();
        assert_eq!(
            arena.allocate(0),
            Ok(NodeId {
                chunk_index: 1,
                block_index: 0
            }),
        );
    }

    #[test]
    fn test_reserve_then_fill_in_order() {
        let mut arena = NodeArena::new(2);
        arena.allocate(0).unwrap();
        assert_eq!(arena.try_reserve(4), Ok(()));

        let ids: Vec<NodeId> = (1..5).map(|i| arena.allocate(i).unwrap()).collect();
        assert_eq!(
            ids,
            vec![
                NodeId { chunk_index: 0, block_index: 1 },
                NodeId { chunk_index: 1, block_index: 0 },
                NodeId { chunk_index: 1, block_index: 1 },
                NodeId { chunk_index: 2, block_index: 0 },
            ],
        );
    }

    #[test]
    fn test_free() {
        let mut arena = NodeArena::new(1024);
        let id = arena.allocate(0).unwrap();
        assert_eq!(arena.free(&id), 0);
        assert!(arena.is_empty());
        assert_eq!(arena.allocate(0), Ok(id));
    }

    #[test]
    fn test_limit() {
        let mut arena = NodeArena::with_limit(1024, Some(2));
        arena.allocate(0).unwrap();
        assert_eq!(
            arena.try_reserve(2),
            Err(Error::AllocationFailure { requested: 2 }),
        );
        let id = arena.allocate(1).unwrap();
        assert_eq!(
            arena.allocate(2),
            Err(Error::AllocationFailure { requested: 1 }),
        );
        arena.free(&id);
        assert!(arena.allocate(2).is_ok());
    }

    #[test]
    fn test_get() {
        let mut arena = NodeArena::new(1024);
        let id = arena.allocate(0).unwrap();
        assert_eq!(arena.get(&id), Some(&0));
        *arena.get_mut(&id).unwrap() = 1;
        assert_eq!(arena[id], 1);
    }

    #[test]
    fn test_get_invalid_block() {
        let arena: NodeArena<u32> = NodeArena::new(1024);
        assert_eq!(
            arena.get(&NodeId {
                chunk_index: 0,
                block_index: 0
            }),
            None,
        );
    }

    #[test]
    fn test_get_vacant_block() {
        let mut arena = NodeArena::new(1024);
        let id = arena.allocate(0).unwrap();
        arena.free(&id);
        assert_eq!(arena.get(&id), None);
    }
}
