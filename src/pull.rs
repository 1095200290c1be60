/// Result of pulling a sequence: either the next element or the end of the sequence.
///
/// `Pull` is the return type of [`Sequence::pull`](crate::Sequence::pull). Exhaustion is a
/// distinct variant rather than an error, so it can never be confused with a failure or
/// with an element value.
///
/// # Examples
///
/// ```rust
/// use seqtool::Pull;
///
/// let next: Pull<i32> = Pull::Item(42);
/// let end: Pull<i32> = Pull::Exhausted;
///
/// assert_eq!(next.map(|x| x * 2), Pull::Item(84));
/// assert!(end.is_exhausted());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Pull<T> {
    /// The next element of the sequence
    Item(T),
    /// No further elements
    Exhausted,
}

impl<T> Pull<T> {
    /// Returns `true` if the pull produced an element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqtool::Pull;
    ///
    /// assert!(Pull::Item(1).is_item());
    /// assert!(!Pull::<i32>::Exhausted.is_item());
    /// ```
    #[inline]
    pub const fn is_item(&self) -> bool {
        matches!(self, Pull::Item(_))
    }

    /// Returns `true` if the sequence signalled exhaustion.
    #[inline]
    pub const fn is_exhausted(&self) -> bool {
        matches!(self, Pull::Exhausted)
    }

    /// Converts from `Pull<T>` to `Option<T>`.
    #[inline]
    pub fn item(self) -> Option<T> {
        match self {
            Pull::Item(x) => Some(x),
            Pull::Exhausted => None,
        }
    }

    /// Maps a `Pull<T>` to `Pull<U>` by applying a function to the element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqtool::Pull;
    ///
    /// assert_eq!(Pull::Item("abc").map(str::len), Pull::Item(3));
    /// assert_eq!(Pull::<&str>::Exhausted.map(str::len), Pull::Exhausted);
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Pull<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Pull::Item(x) => Pull::Item(f(x)),
            Pull::Exhausted => Pull::Exhausted,
        }
    }

    /// Chains another pull-producing computation onto the element, if any.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Pull<U>
    where
        F: FnOnce(T) -> Pull<U>,
    {
        match self {
            Pull::Item(x) => f(x),
            Pull::Exhausted => Pull::Exhausted,
        }
    }

    /// Returns the element or a default.
    #[inline]
    pub fn item_or(self, default: T) -> T {
        match self {
            Pull::Item(x) => x,
            Pull::Exhausted => default,
        }
    }

    /// Returns the element or computes it from a closure.
    #[inline]
    pub fn item_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Pull::Item(x) => x,
            Pull::Exhausted => f(),
        }
    }

    /// Converts from `&Pull<T>` to `Pull<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Pull<&T> {
        match self {
            Pull::Item(x) => Pull::Item(x),
            Pull::Exhausted => Pull::Exhausted,
        }
    }

    /// Converts from `&mut Pull<T>` to `Pull<&mut T>`.
    #[inline]
    pub fn as_mut(&mut self) -> Pull<&mut T> {
        match self {
            Pull::Item(x) => Pull::Item(x),
            Pull::Exhausted => Pull::Exhausted,
        }
    }

    /// Returns `true` if the pull holds an element equal to `x`.
    #[inline]
    pub fn contains<U>(&self, x: &U) -> bool
    where
        U: PartialEq<T>,
    {
        match self {
            Pull::Item(y) => x == y,
            Pull::Exhausted => false,
        }
    }

    /// Returns the element, panicking with `msg` on exhaustion.
    #[inline]
    #[track_caller]
    pub fn expect_item(self, msg: &str) -> T {
        match self {
            Pull::Item(x) => x,
            Pull::Exhausted => panic!("{msg}"),
        }
    }

    /// Returns the element.
    ///
    /// # Panics
    ///
    /// Panics if the sequence was exhausted.
    ///
    /// ```rust
    /// use seqtool::Pull;
    ///
    /// assert_eq!(Pull::Item(7).unwrap_item(), 7);
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap_item(self) -> T {
        match self {
            Pull::Item(x) => x,
            Pull::Exhausted => panic!("called `Pull::unwrap_item()` on an `Exhausted` value"),
        }
    }

    /// Asserts the sequence was exhausted.
    ///
    /// # Panics
    ///
    /// Panics if the pull produced an element.
    #[inline]
    #[track_caller]
    pub fn unwrap_exhausted(self) {
        if let Pull::Item(_) = self {
            panic!("called `Pull::unwrap_exhausted()` on an `Item` value")
        }
    }
}

impl<T> From<Option<T>> for Pull<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(x) => Pull::Item(x),
            None => Pull::Exhausted,
        }
    }
}

impl<T> From<Pull<T>> for Option<T> {
    fn from(value: Pull<T>) -> Self {
        value.item()
    }
}
