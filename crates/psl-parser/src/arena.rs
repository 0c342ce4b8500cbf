//! Arena allocator for AST nodes.
//!
//! Every node and every child list (functions, parameters, statements,
//! arguments) is allocated here, so the whole tree is released in one shot
//! when the arena is dropped. Growth adds chunks and never moves existing
//! allocations, so references handed out stay valid for the arena's
//! lifetime. Allocation failure aborts the process; a front end cannot
//! usefully continue without memory.

use bumpalo::Bump;

/// Initial chunk size used by [`Arena::default`].
pub const DEFAULT_CAPACITY: usize = 4096;

/// Bump arena owning all AST storage.
pub struct Arena {
    bump: Bump,
}

impl Arena {
    /// Create a new arena with no pre-allocated capacity.
    pub fn new() -> Self {
        Self { bump: Bump::new() }
    }

    /// Create a new arena with a pre-sized first chunk.
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            bump: Bump::with_capacity(bytes),
        }
    }

    /// Allocate a value in the arena.
    #[inline]
    pub fn alloc<T>(&self, value: T) -> &T {
        self.bump.alloc(value)
    }

    /// Allocate a copy of a slice in the arena.
    #[inline]
    pub fn alloc_slice<T: Copy>(&self, slice: &[T]) -> &[T] {
        self.bump.alloc_slice_copy(slice)
    }

    /// Allocate a copy of a string in the arena.
    #[inline]
    pub fn alloc_str(&self, s: &str) -> &str {
        self.bump.alloc_str(s)
    }

    /// A growable vector allocating from this arena.
    ///
    /// Used for child lists while parsing; freeze with `into_bump_slice`
    /// once the list is complete.
    #[inline]
    pub fn vec<T>(&self) -> bumpalo::collections::Vec<'_, T> {
        bumpalo::collections::Vec::new_in(&self.bump)
    }

    /// Total bytes currently allocated, across all chunks.
    pub fn allocated_bytes(&self) -> usize {
        self.bump.allocated_bytes()
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}
