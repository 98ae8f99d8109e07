macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::trace!($($arg)*);
        }
    };
}

macro_rules! debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::debug!($($arg)*);
        }
    };
}

macro_rules! __impl_slice_eq {
    ([$($vars:tt)*] $lhs:ty, $rhs:ty, $($constraints:tt)*) => {
        impl<'a, T, U, S, $($vars)*> PartialEq<$rhs> for $lhs
        where
            S: ?Sized + Sequence<Item = T>,
            T: PartialEq<U>,
            $($constraints)*
        {
            fn eq(&self, other: &$rhs) -> bool {
                let mut other = other.iter();
                let mut this = self.iter();
                loop {
                    match (this.next(), other.next()) {
                        (Some(a), Some(b)) if a == b => {}
                        (None, None) => return true,
                        _ => return false,
                    }
                }
            }
        }
    }
}
