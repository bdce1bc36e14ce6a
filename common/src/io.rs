use core::{
    cmp::PartialEq,
    ops::{BitAnd, BitOr, Not},
};

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
mod pio;

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub use pio::*;

/// IO abstraction
pub trait Io {
    /// Value type for IO, usually some unsigned number
    type Value: Copy
        + PartialEq
        + BitAnd<Output = Self::Value>
        + BitOr<Output = Self::Value>
        + Not<Output = Self::Value>;

    /// Read the underlying value
    fn read(&self) -> Self::Value;
    /// Write the underlying value
    fn write(&mut self, value: Self::Value);
}

/// Read-only IO
#[repr(transparent)]
pub struct ReadOnly<I> {
    inner: I,
}

impl<I: Io> ReadOnly<I> {
    /// Wraps IO
    pub const fn new(inner: I) -> ReadOnly<I> {
        ReadOnly { inner }
    }

    /// Calls [Io::read]
    #[inline(always)]
    pub fn read(&self) -> I::Value {
        self.inner.read()
    }
}

#[repr(transparent)]
/// Write-only IO
pub struct WriteOnly<I> {
    inner: I,
}

impl<I: Io> WriteOnly<I> {
    /// Wraps IO
    pub const fn new(inner: I) -> WriteOnly<I> {
        WriteOnly { inner }
    }

    /// Calls [Io::write]
    #[inline(always)]
    pub fn write(&mut self, value: I::Value) {
        self.inner.write(value)
    }
}

#[cfg(test)]
mod test {
    use super::{Io, ReadOnly, WriteOnly};

    struct Latch(u32);

    impl Io for Latch {
        type Value = u32;

        fn read(&self) -> u32 {
            self.0
        }

        fn write(&mut self, value: u32) {
            self.0 = value;
        }
    }

    #[test]
    fn wrappers_forward_to_inner() {
        let mut w = WriteOnly::new(Latch(0));
        w.write(0x8000_0000);
        assert_eq!(w.inner.0, 0x8000_0000);

        let r = ReadOnly::new(Latch(0xdead_beef));
        assert_eq!(r.read(), 0xdead_beef);
    }
}
