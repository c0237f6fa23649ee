//! The marker trait implemented by generated immutable objects.

/// Implemented by every generated immutable object.
///
/// Can also be implemented by hand-written types to designate them as
/// immutable alongside generated ones.
pub trait Immutable {
    /// Clears any memoized state held by this object.
    ///
    /// Generated objects usually memoize `hash_code()` and the rendered
    /// `Display` text. Clearing is optimistic and non-blocking: a clear
    /// racing a concurrent compute may leave a freshly computed value in
    /// place. The observable hash and text values never change, only
    /// whether they are currently memoized. Intended for memory-constrained
    /// environments; calling it any number of times is safe.
    fn clear(&self);
}
