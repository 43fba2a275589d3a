/// Element types that have a "null" state.
///
/// The `*_null` search, replace and remove operations use this to look for
/// empty slots without needing a value to compare against.
pub trait Nullable {
    fn is_null(&self) -> bool;
}

impl<U> Nullable for Option<U> {
    #[inline]
    fn is_null(&self) -> bool {
        return self.is_none();
    }
}

impl<U: ?Sized> Nullable for *const U {
    #[inline]
    fn is_null(&self) -> bool {
        return <*const U>::is_null(*self);
    }
}

impl<U: ?Sized> Nullable for *mut U {
    #[inline]
    fn is_null(&self) -> bool {
        return <*mut U>::is_null(*self);
    }
}
