use alloc::{
    borrow::{Cow, ToOwned},
    boxed::Box,
    ffi::CString,
    rc::Rc,
    string::String,
    sync::Arc,
    vec::Vec,
};
use core::ffi::CStr;

/// Any type implementing `AsSymbols` can be decomposed into a sequence of
/// symbols.
///
/// The primary purpose of this trait is to allow different types to be used as
/// keys on the [`crate::RadixSet`] type. Symbols are only ever compared for
/// equality, so no ordering or normalization is applied to them.
pub trait AsSymbols {
    /// The type of a single element of the key.
    type Symbol: PartialEq + Clone;

    /// View the current value as a sequence of symbols.
    ///
    /// Types whose in-memory representation is already a slice of symbols
    /// return a borrowed view, others (like [`str`], which is decoded into
    /// [`char`]s) return an owned buffer.
    fn as_symbols(&self) -> Cow<'_, [Self::Symbol]>;
}

macro_rules! as_symbols_for_integer_types {
    ($($type:ty),*) => {
        $(
            impl AsSymbols for $type {
                type Symbol = u8;

                fn as_symbols(&self) -> Cow<'_, [u8]> {
                    Cow::Borrowed(bytemuck::bytes_of(self))
                }
            }
        )*
    };
}

as_symbols_for_integer_types!(u8, i8, u16, i16, u32, i32, u64, i64, u128, i128, usize, isize);

impl<T: PartialEq + Clone> AsSymbols for [T] {
    type Symbol = T;

    fn as_symbols(&self) -> Cow<'_, [T]> {
        Cow::Borrowed(self)
    }
}

impl<T: PartialEq + Clone, const N: usize> AsSymbols for [T; N] {
    type Symbol = T;

    fn as_symbols(&self) -> Cow<'_, [T]> {
        Cow::Borrowed(self.as_slice())
    }
}

impl<T: PartialEq + Clone> AsSymbols for Vec<T> {
    type Symbol = T;

    fn as_symbols(&self) -> Cow<'_, [T]> {
        Cow::Borrowed(self.as_slice())
    }
}

impl<T: PartialEq + Clone> AsSymbols for Box<[T]> {
    type Symbol = T;

    fn as_symbols(&self) -> Cow<'_, [T]> {
        Cow::Borrowed(self.as_ref())
    }
}

impl AsSymbols for str {
    type Symbol = char;

    fn as_symbols(&self) -> Cow<'_, [char]> {
        Cow::Owned(self.chars().collect())
    }
}

impl AsSymbols for String {
    type Symbol = char;

    fn as_symbols(&self) -> Cow<'_, [char]> {
        <str as AsSymbols>::as_symbols(self.as_str())
    }
}

impl AsSymbols for CStr {
    type Symbol = u8;

    fn as_symbols(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.to_bytes())
    }
}

impl AsSymbols for CString {
    type Symbol = u8;

    fn as_symbols(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.as_bytes())
    }
}

impl<'a, B> AsSymbols for Cow<'a, B>
where
    B: ToOwned + AsSymbols + ?Sized,
{
    type Symbol = B::Symbol;

    fn as_symbols(&self) -> Cow<'_, [Self::Symbol]> {
        <B as AsSymbols>::as_symbols(self.as_ref())
    }
}

impl<T> AsSymbols for &T
where
    T: AsSymbols + ?Sized,
{
    type Symbol = T::Symbol;

    fn as_symbols(&self) -> Cow<'_, [Self::Symbol]> {
        <T as AsSymbols>::as_symbols(self)
    }
}

impl<T> AsSymbols for &mut T
where
    T: AsSymbols + ?Sized,
{
    type Symbol = T::Symbol;

    fn as_symbols(&self) -> Cow<'_, [Self::Symbol]> {
        <T as AsSymbols>::as_symbols(self)
    }
}

impl<T> AsSymbols for Rc<T>
where
    T: AsSymbols + ?Sized,
{
    type Symbol = T::Symbol;

    fn as_symbols(&self) -> Cow<'_, [Self::Symbol]> {
        <T as AsSymbols>::as_symbols(self)
    }
}

impl<T> AsSymbols for Arc<T>
where
    T: AsSymbols + ?Sized,
{
    type Symbol = T::Symbol;

    fn as_symbols(&self) -> Cow<'_, [Self::Symbol]> {
        <T as AsSymbols>::as_symbols(self)
    }
}
