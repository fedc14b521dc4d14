use std::alloc::{self, Layout};
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};
use std::slice;

use super::LimbStorage;
use crate::num::algo;
use crate::num::limb::Limb;
use crate::util::result::ResultExtension;

/// A heap allocated limb sequence, sized exactly to the number of limbs it holds. Similar to a
/// [`Box<[L]>`](Box<T>) that can be resized in place.
///
/// The sequence is never empty, so there is always an allocation to resize.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of limbs.
///
/// | Method | Complexity |
/// |-|-|
/// | `from_slice` | `O(n)` |
/// | `resize` | `O(n)`*, `O(1)` |
///
/// \* When the allocator has to move the allocation.
pub struct HeapLimbs<L: Limb> {
    pub(crate) ptr: NonNull<L>,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<L>,
}

impl<L: Limb> HeapLimbs<L> {
    /// The most limbs a value may grow to, keeping its width in bits within [`isize::MAX`].
    const MAX_LEN: usize = isize::MAX as usize / L::BITS as usize;

    /// Returns the number of limbs held.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always false, there is at least one limb.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Copies `limbs` into a new allocation. An empty slice produces a single zero limb.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use standard_bigint::num::storage::HeapLimbs;
    /// let limbs = HeapLimbs::from_slice(&[1_u8, 2, 3]);
    /// assert_eq!(&*limbs, &[1, 2, 3]);
    /// assert_eq!(&*HeapLimbs::<u8>::from_slice(&[]), &[0]);
    /// ```
    pub fn from_slice(limbs: &[L]) -> HeapLimbs<L> {
        if limbs.is_empty() {
            return Self::from_slice(&[L::ZERO]);
        }

        let ptr = Self::make_ptr(Self::make_layout(limbs.len()));

        // SAFETY: ptr was just allocated for limbs.len() values of L, so it is valid for the writes
        // and can't overlap with the borrowed source.
        unsafe { ptr::copy_nonoverlapping(limbs.as_ptr(), ptr.as_ptr(), limbs.len()) };

        HeapLimbs {
            ptr,
            len: limbs.len(),
            _phantom: PhantomData,
        }
    }

    /// Reallocates to hold exactly `new_len` limbs (at least one), filling any new limbs with a
    /// copy of `fill`. Shrinking drops the top limbs.
    ///
    /// # Panics
    /// Panics if the memory layout of the new allocation would have a size that exceeds
    /// [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use standard_bigint::num::storage::HeapLimbs;
    /// let mut limbs = HeapLimbs::from_slice(&[1_u8, 2]);
    /// limbs.resize(4, 0xff);
    /// assert_eq!(&*limbs, &[1, 2, 0xff, 0xff]);
    /// limbs.resize(1, 0);
    /// assert_eq!(&*limbs, &[1]);
    /// ```
    pub fn resize(&mut self, new_len: usize, fill: L) {
        let new_len = new_len.max(1);
        if new_len == self.len {
            return;
        }

        let old_layout = Self::make_layout(self.len);
        let new_layout = Self::make_layout(new_len);

        // SAFETY: ptr is allocated in the global allocator with old_layout. The new size is
        // non-zero, uses the same alignment and was checked against isize::MAX by make_layout.
        let raw_ptr: *mut L = unsafe {
            alloc::realloc(self.ptr.as_ptr().cast(), old_layout, new_layout.size()).cast()
        };
        self.ptr = NonNull::new(raw_ptr).unwrap_or_else(|| alloc::handle_alloc_error(new_layout));

        for index in self.len..new_len {
            // SAFETY: index is within the new allocation of new_len limbs.
            unsafe { self.ptr.add(index).write(fill) }
        }

        self.len = new_len;
    }

    /// A helper function to create a [`Layout`] for `len` limbs.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    fn make_layout(len: usize) -> Layout {
        Layout::array::<L>(len).throw()
    }

    /// A helper function to allocate for a non-zero sized [`Layout`].
    ///
    /// # Errors
    /// In the event of an allocation error, this method calls [`alloc::handle_alloc_error`] as
    /// recommended, to avoid new allocations rather than panicking.
    fn make_ptr(layout: Layout) -> NonNull<L> {
        NonNull::new(
            // SAFETY: Every caller asks for at least one limb and limbs aren't zero-sized.
            unsafe { alloc::alloc(layout).cast() }
        ).unwrap_or_else(|| alloc::handle_alloc_error(layout))
    }
}

impl<L: Limb> LimbStorage for HeapLimbs<L> {
    type Limb = L;

    fn zeroed() -> Self {
        Self::from_slice(&[L::ZERO])
    }

    /// Keeps only the normalized prefix, so the allocation is no larger than the value.
    fn from_limbs(limbs: &[L]) -> Self {
        Self::from_slice(&limbs[..algo::normalized_len(limbs)])
    }

    fn limbs(&self) -> &[L] {
        self
    }

    fn limbs_mut(&mut self) -> &mut [L] {
        self
    }

    /// # Panics
    /// Panics if the value would be wider than [`isize::MAX`] bits. Narrower values that still
    /// can't be allocated abort, like the standard collections do.
    fn widen(&mut self, len: usize) {
        if len > Self::MAX_LEN {
            panic!("Capacity overflow!")
        }

        if len > self.len {
            let fill = algo::sign_limb(self);
            self.resize(len, fill);
        }
    }

    fn settle(&mut self) {
        let len = algo::normalized_len(self);
        if len < self.len {
            self.resize(len, L::ZERO);
        }
    }
}

impl<L: Limb> Drop for HeapLimbs<L> {
    fn drop(&mut self) {
        // Limbs are Copy, so there is nothing to drop in place.
        // SAFETY: ptr is always allocated in the global allocator, with the layout for len limbs.
        unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), Self::make_layout(self.len)) }
    }
}

impl<L: Limb> Deref for HeapLimbs<L> {
    type Target = [L];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The held data uses Layout::array(len) and is therefore valid and properly
        // aligned for len limbs, all of which are initialized. HeapLimbs doesn't expose its
        // pointer, so the borrow checker prevents mutation for the lifetime of the slice.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }
}

impl<L: Limb> DerefMut for HeapLimbs<L> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for deref, with the mutable borrow of self preventing any other access.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }
}

// SAFETY: HeapLimbs uniquely owns its allocation and limbs are Send.
unsafe impl<L: Limb> Send for HeapLimbs<L> {}
// SAFETY: The safe API obeys the borrow checker, so there is no interior mutability.
unsafe impl<L: Limb> Sync for HeapLimbs<L> {}

impl<L: Limb> Clone for HeapLimbs<L> {
    fn clone(&self) -> Self {
        Self::from_slice(self)
    }
}

impl<L: Limb> Debug for HeapLimbs<L> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeapLimbs")
            .field("limbs", &&**self)
            .finish()
    }
}
