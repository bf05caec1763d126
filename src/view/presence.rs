/// Decides whether an argument counts as supplied.
///
/// `push` ignores values for which `is_present` is false. Absent values are
/// `None`, empty strings and collections, zero, NaN and `false`.
///
/// `Option<T>` only checks for `Some`, so any host type can be pushed
/// wrapped in an `Option` without implementing this trait.
pub trait Presence {
    fn is_present(&self) -> bool;
}

impl<T> Presence for Option<T> {
    fn is_present(&self) -> bool {
        self.is_some()
    }
}

impl<T: Presence + ?Sized> Presence for &T {
    fn is_present(&self) -> bool {
        (**self).is_present()
    }
}

impl<T: Presence + ?Sized> Presence for Box<T> {
    fn is_present(&self) -> bool {
        (**self).is_present()
    }
}

impl Presence for str {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl Presence for String {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Presence for Vec<T> {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl Presence for bool {
    fn is_present(&self) -> bool {
        *self
    }
}

macro_rules! int_presence {
    ($($t: ty), *) => {
        $(
            impl Presence for $t {
                fn is_present(&self) -> bool {
                    *self != 0
                }
            }
        )*
    }
}

int_presence!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! float_presence {
    ($($t: ty), *) => {
        $(
            impl Presence for $t {
                fn is_present(&self) -> bool {
                    *self != 0.0 && !self.is_nan()
                }
            }
        )*
    }
}

float_presence!(f32, f64);
