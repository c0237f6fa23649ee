//! Stable 32-bit hashing used by generated `hash_code()` implementations.
//!
//! The contributions here are platform- and run-independent: generated
//! objects XOR a seed derived from the declared type's qualified name with
//! one contribution per property, so two processes hashing the same value
//! agree on the result.

/// A stable 32-bit hash contribution.
///
/// Scalar impls follow fixed bit-level rules (sign-widening for small
/// signed integers, IEEE bit patterns for floats, XOR of halves for 64-bit
/// values); sequences fold element contributions with the 31-multiplier
/// scheme; `Option` contributes `0` when absent.
pub trait HashCode {
    /// Returns the stable hash contribution of this value.
    fn hash_code(&self) -> i32;
}

impl HashCode for i32 {
    fn hash_code(&self) -> i32 {
        *self
    }
}

impl HashCode for i8 {
    fn hash_code(&self) -> i32 {
        i32::from(*self)
    }
}

impl HashCode for i16 {
    fn hash_code(&self) -> i32 {
        i32::from(*self)
    }
}

impl HashCode for i64 {
    fn hash_code(&self) -> i32 {
        ((*self >> 32) as i32) ^ (*self as i32)
    }
}

impl HashCode for u8 {
    fn hash_code(&self) -> i32 {
        i32::from(*self)
    }
}

impl HashCode for u16 {
    fn hash_code(&self) -> i32 {
        i32::from(*self)
    }
}

impl HashCode for u32 {
    fn hash_code(&self) -> i32 {
        *self as i32
    }
}

impl HashCode for u64 {
    fn hash_code(&self) -> i32 {
        ((*self >> 32) as i32) ^ (*self as i32)
    }
}

impl HashCode for usize {
    fn hash_code(&self) -> i32 {
        (*self as u64).hash_code()
    }
}

impl HashCode for isize {
    fn hash_code(&self) -> i32 {
        (*self as i64).hash_code()
    }
}

impl HashCode for char {
    fn hash_code(&self) -> i32 {
        *self as i32
    }
}

impl HashCode for bool {
    fn hash_code(&self) -> i32 {
        i32::from(*self)
    }
}

impl HashCode for f32 {
    fn hash_code(&self) -> i32 {
        self.to_bits() as i32
    }
}

impl HashCode for f64 {
    fn hash_code(&self) -> i32 {
        let bits = self.to_bits();
        ((bits >> 32) as i32) ^ (bits as i32)
    }
}

impl HashCode for str {
    fn hash_code(&self) -> i32 {
        self.chars()
            .fold(0i32, |hash, c| hash.wrapping_mul(31).wrapping_add(c as i32))
    }
}

impl HashCode for String {
    fn hash_code(&self) -> i32 {
        self.as_str().hash_code()
    }
}

impl<T: HashCode> HashCode for [T] {
    fn hash_code(&self) -> i32 {
        self.iter().fold(1i32, |hash, element| {
            hash.wrapping_mul(31).wrapping_add(element.hash_code())
        })
    }
}

impl<T: HashCode> HashCode for Vec<T> {
    fn hash_code(&self) -> i32 {
        self.as_slice().hash_code()
    }
}

impl<T: HashCode> HashCode for Option<T> {
    fn hash_code(&self) -> i32 {
        self.as_ref().map_or(0, HashCode::hash_code)
    }
}

impl<T: HashCode + ?Sized> HashCode for &T {
    fn hash_code(&self) -> i32 {
        (**self).hash_code()
    }
}

/// Returns the stable seed hash for a declared type's qualified name.
///
/// Uses the 31-multiplier character fold, so the seed depends only on the
/// qualifier text.
#[must_use]
pub fn type_name_hash(qualified_name: &str) -> i32 {
    qualified_name.hash_code()
}
