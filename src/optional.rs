use core::fmt;
use core::mem::{ManuallyDrop, MaybeUninit};

use crate::error::Error;
use crate::traits::Take;

/// Zero or one value held inline, with a presence flag. Never allocates.
///
/// Reading a vacant optional through [`Optional::value`] is a caller error
/// and fails fast; [`Optional::get`] and [`Optional::try_value`] are the
/// reporting forms.
pub struct Optional<T> {
    slot: MaybeUninit<T>,
    engaged: bool,
}

impl<T> Optional<T> {
    /// An optional holding nothing.
    #[must_use]
    pub const fn vacant() -> Self {
        Self {
            slot: MaybeUninit::uninit(),
            engaged: false,
        }
    }

    /// An optional holding `value`.
    #[must_use]
    pub const fn some(value: T) -> Self {
        Self {
            slot: MaybeUninit::new(value),
            engaged: true,
        }
    }

    #[must_use]
    pub const fn has_value(&self) -> bool {
        self.engaged
    }

    /// The held value.
    ///
    /// # Panics
    ///
    /// Panics if the optional is vacant.
    #[must_use]
    pub fn value(&self) -> &T {
        assert!(self.engaged, "value() called on a vacant Optional");
        // SAFETY: engaged implies the slot is initialized.
        unsafe { self.slot.assume_init_ref() }
    }

    /// The held value, mutably.
    ///
    /// # Panics
    ///
    /// Panics if the optional is vacant.
    #[must_use]
    pub fn value_mut(&mut self) -> &mut T {
        assert!(self.engaged, "value_mut() called on a vacant Optional");
        // SAFETY: engaged implies the slot is initialized.
        unsafe { self.slot.assume_init_mut() }
    }

    /// The held value, or `None` when vacant.
    #[must_use]
    pub fn get(&self) -> Option<&T> {
        if self.engaged {
            // SAFETY: engaged implies the slot is initialized.
            Some(unsafe { self.slot.assume_init_ref() })
        } else {
            None
        }
    }

    #[must_use]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        if self.engaged {
            // SAFETY: engaged implies the slot is initialized.
            Some(unsafe { self.slot.assume_init_mut() })
        } else {
            None
        }
    }

    /// The held value, reporting vacancy as an error.
    ///
    /// # Errors
    ///
    /// Returns `Error::VacantValue` when the optional is vacant.
    pub fn try_value(&self) -> Result<&T, Error> {
        self.get().ok_or(Error::VacantValue)
    }

    /// Stores `value`, destroying any held value first.
    pub fn set(&mut self, value: T) {
        self.reset();
        self.slot.write(value);
        self.engaged = true;
    }

    /// Destroys any held value and leaves the optional vacant.
    pub fn reset(&mut self) {
        if self.engaged {
            self.engaged = false;
            // SAFETY: the flag was set, so the slot held a live value; it is
            // dropped exactly once because the flag is cleared first.
            unsafe { self.slot.assume_init_drop() };
        }
    }

    /// Unwraps into the held value.
    ///
    /// # Panics
    ///
    /// Panics if the optional is vacant.
    #[must_use]
    pub fn into_value(self) -> T {
        assert!(self.engaged, "into_value() called on a vacant Optional");
        let this = ManuallyDrop::new(self);
        // SAFETY: engaged implies the slot is initialized; ManuallyDrop
        // prevents the destructor from dropping it a second time.
        unsafe { this.slot.assume_init_read() }
    }

    /// Unwraps into a plain [`Option`], leaving nothing behind.
    #[must_use]
    pub fn into_option(mut self) -> Option<T> {
        let taken = self.take();
        if taken.engaged {
            Some(taken.into_value())
        } else {
            None
        }
    }
}

impl<T> Take for Optional<T> {
    fn take(&mut self) -> Self {
        if self.engaged {
            self.engaged = false;
            // SAFETY: the flag was set and is cleared before the value is
            // read out, so ownership moves exactly once.
            Self::some(unsafe { self.slot.assume_init_read() })
        } else {
            Self::vacant()
        }
    }
}

impl<T> Drop for Optional<T> {
    fn drop(&mut self) {
        self.reset();
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::vacant()
    }
}

impl<T: Clone> Clone for Optional<T> {
    fn clone(&self) -> Self {
        match self.get() {
            Some(value) => Self::some(value.clone()),
            None => Self::vacant(),
        }
    }
}

impl<T> From<T> for Optional<T> {
    fn from(value: T) -> Self {
        Self::some(value)
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::some(value),
            None => Self::vacant(),
        }
    }
}

impl<T: PartialEq> PartialEq for Optional<T> {
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

impl<T: Eq> Eq for Optional<T> {}

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(value) => f.debug_tuple("Optional").field(value).finish(),
            None => f.write_str("Optional(vacant)"),
        }
    }
}
