//! Single-owner heap buffer shared by the growable containers.
//!
//! `RawBuf` owns an allocation of `cap` slots and nothing else: it never
//! reads, writes, or drops elements. Containers layer a length on top and
//! manage element lifecycles; the buffer guarantees the allocation is
//! released exactly once, when its one owner drops it.

use alloc::alloc::{alloc, dealloc, realloc, Layout};
use core::marker::PhantomData;
use core::mem;
use core::ptr::NonNull;

use crate::error::Error;

pub(crate) struct RawBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
    _marker: PhantomData<T>,
}

// The buffer owns its T slots, so thread transfer follows the element type.
unsafe impl<T: Send> Send for RawBuf<T> {}
unsafe impl<T: Sync> Sync for RawBuf<T> {}

impl<T> RawBuf<T> {
    const ELEM: usize = mem::size_of::<T>();

    /// An empty buffer. Never allocates; zero-sized element types report
    /// unbounded capacity and never allocate at all.
    pub(crate) const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: if mem::size_of::<T>() == 0 { usize::MAX } else { 0 },
            _marker: PhantomData,
        }
    }

    pub(crate) const fn capacity(&self) -> usize {
        self.cap
    }

    pub(crate) const fn as_ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Grows so that `len + additional` slots fit, doubling the current
    /// capacity unless the requirement is larger. No-op when capacity is
    /// already sufficient; existing slots are preserved bitwise.
    pub(crate) fn try_grow(&mut self, len: usize, additional: usize) -> Result<(), Error> {
        let required = len
            .checked_add(additional)
            .ok_or(Error::CapacityOverflow { requested: additional })?;
        if required <= self.cap {
            return Ok(());
        }

        let doubled = self.cap.saturating_mul(2).max(1);
        self.reallocate(doubled.max(required))
    }

    /// Grows to exactly `required` slots. No-op when capacity is already
    /// sufficient; never shrinks.
    pub(crate) fn try_reserve_exact(&mut self, required: usize) -> Result<(), Error> {
        if required <= self.cap {
            return Ok(());
        }
        self.reallocate(required)
    }

    fn reallocate(&mut self, new_cap: usize) -> Result<(), Error> {
        debug_assert!(new_cap > self.cap);

        let layout = Layout::array::<T>(new_cap)
            .map_err(|_| Error::CapacityOverflow { requested: new_cap })?;
        if layout.size() > isize::MAX as usize {
            return Err(Error::CapacityOverflow { requested: new_cap });
        }

        let raw = if self.cap == 0 {
            // SAFETY: ELEM != 0 (zero-sized types report usize::MAX capacity
            // and never reach here) and new_cap > 0, so the layout is non-zero.
            unsafe { alloc(layout) }
        } else {
            // SAFETY: the buffer was allocated by this allocator with exactly
            // the reconstructed layout, and the new size is a valid Layout size.
            unsafe {
                let old = Layout::from_size_align_unchecked(Self::ELEM * self.cap, mem::align_of::<T>());
                realloc(self.ptr.as_ptr().cast(), old, layout.size())
            }
        };

        match NonNull::new(raw.cast::<T>()) {
            Some(ptr) => {
                self.ptr = ptr;
                self.cap = new_cap;
                Ok(())
            }
            None => Err(Error::AllocationFailed {
                bytes: layout.size(),
            }),
        }
    }

    /// Releases the allocation and resets to the empty state. Safe to call
    /// repeatedly; `Drop` reuses it.
    pub(crate) fn release(&mut self) {
        if Self::ELEM != 0 && self.cap != 0 {
            // SAFETY: the buffer was allocated with exactly this layout.
            unsafe {
                let layout = Layout::from_size_align_unchecked(Self::ELEM * self.cap, mem::align_of::<T>());
                dealloc(self.ptr.as_ptr().cast(), layout);
            }
        }
        self.ptr = NonNull::dangling();
        self.cap = if Self::ELEM == 0 { usize::MAX } else { 0 };
    }

    /// Hands the allocation to the caller, leaving this buffer empty.
    pub(crate) fn take(&mut self) -> Self {
        mem::replace(self, Self::new())
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        self.release();
    }
}
