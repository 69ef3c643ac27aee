use super::Name;

/// An additional accessor name bound to the same storage slot as its
/// primary field.
///
/// An alias never introduces a second slot; it only widens the accessor
/// surface. Mutability is configurable per alias and defaults to mirroring
/// the primary field.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Alias {
    pub(crate) name: Name,
    pub(crate) getter: bool,
    pub(crate) setter: bool,
}
