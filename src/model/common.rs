pub trait Named {
    fn name(&self) -> String;
}

/// Composite identity of an entry, used for lookups and merges.
pub trait Identified<T> {
    fn id(&self) -> T;
}
