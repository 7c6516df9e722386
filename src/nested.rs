/// A list whose elements are leaves or further lists, to any depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nested<T> {
    Leaf(T),
    List(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    pub fn is_list(&self) -> bool {
        matches!(self, Nested::List(_))
    }

    /// All leaves in depth-first, left-to-right order. A lone leaf flattens to
    /// a one-element vector.
    pub fn flatten(self) -> Vec<T> {
        match self {
            Nested::Leaf(value) => vec![value],
            Nested::List(items) => flatten(items),
        }
    }
}

/// Collapses every level of nesting, keeping leaf order.
///
/// Walks with an explicit stack of iterators, so depth is bounded by heap
/// rather than by the call stack. Only `List` is descended into: a leaf that
/// happens to hold a collection stays a single leaf.
pub fn flatten<T>(nested: Vec<Nested<T>>) -> Vec<T> {
    let mut flat = Vec::with_capacity(nested.len());
    let mut stack = vec![nested.into_iter()];

    while let Some(pending) = stack.last_mut() {
        match pending.next() {
            Some(Nested::Leaf(value)) => flat.push(value),
            Some(Nested::List(items)) => stack.push(items.into_iter()),
            None => {
                stack.pop();
            }
        }
    }

    flat
}

impl<T> FromIterator<T> for Nested<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Nested::List(iter.into_iter().map(Nested::Leaf).collect())
    }
}

/// Builds a `Vec<Nested<_>>`. Bracketed groups become `Nested::List`; every
/// other single token tree becomes `Nested::Leaf`. Wrap multi-token leaves in
/// parentheses: `nested![1, [(-2), 3]]`.
#[macro_export]
macro_rules! nested {
    (@item [$($inner:tt)*]) => {
        $crate::Nested::List($crate::nested![$($inner)*])
    };
    (@item $leaf:expr) => {
        $crate::Nested::Leaf($leaf)
    };
    ($($item:tt),* $(,)?) => {
        vec![$($crate::nested!(@item $item)),*]
    };
}
