//! Compile-time type utilities used by the containers to pick between
//! copying and ownership-transferring code paths.
//!
//! Everything here is resolved during monomorphization: there are no
//! runtime type tags, and a malformed instantiation is a compile error,
//! not a runtime failure.

use core::any::TypeId;

/// Marker trait implemented exactly when two types are identical.
///
/// Usable as a bound to constrain generic code to a single concrete type:
///
/// ```
/// use anypool::traits::Same;
///
/// fn narrow_only<C: Same<u8>>(unit: C) -> C {
///     unit
/// }
///
/// narrow_only(b'x');
/// ```
///
/// `narrow_only('x')` fails to compile.
pub trait Same<U: ?Sized> {}

impl<T: ?Sized> Same<T> for T {}

/// Runtime-queryable form of the same-type test for non-generic positions.
#[must_use]
pub fn is_same<A: 'static, B: 'static>() -> bool {
    TypeId::of::<A>() == TypeId::of::<B>()
}

/// Implemented by reference types only; reports the reference category and
/// strips the reference down to its pointee.
pub trait RefClass {
    /// The referenced type with the reference stripped.
    type Pointee: ?Sized;
    /// True for unique (`&mut`) references, false for shared ones.
    const UNIQUE: bool;
}

impl<'a, T: ?Sized> RefClass for &'a T {
    type Pointee = T;
    const UNIQUE: bool = false;
}

impl<'a, T: ?Sized> RefClass for &'a mut T {
    type Pointee = T;
    const UNIQUE: bool = true;
}

/// Ownership transfer out of a mutable place.
///
/// `take` hands the receiver's contents to the caller and resets the
/// receiver to its vacant state. For buffer-backed containers this moves
/// the buffer handle itself: no allocation, no element-wise work, and the
/// source is left empty with nothing to release.
pub trait Take: Sized {
    /// Transfers this value out, leaving `self` vacant.
    fn take(&mut self) -> Self;
}

/// Conversion from an owning handle to its borrowing counterpart.
///
/// The view borrows the owner's buffer directly, so the borrow checker
/// rejects any use of the view past the owner's lifetime or mutation.
pub trait AsView {
    /// The borrowed form of this type.
    type View<'v>
    where
        Self: 'v;

    /// Borrows this value as its view type.
    fn as_view(&self) -> Self::View<'_>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unique_of<R: RefClass>(_: &R) -> bool {
        R::UNIQUE
    }

    #[test]
    fn test_is_same() {
        assert!(is_same::<u32, u32>());
        assert!(!is_same::<u32, i32>());
        assert!(!is_same::<&'static str, u32>());
    }

    #[test]
    fn test_same_bound_accepts_identical_types() {
        fn only_usize<T: Same<usize>>(value: T) -> T {
            value
        }
        assert_eq!(only_usize(7usize), 7);
    }

    #[test]
    fn test_ref_class() {
        let mut value = 1u8;
        assert!(!unique_of(&(&value)));
        assert!(unique_of(&(&mut value)));
    }
}
