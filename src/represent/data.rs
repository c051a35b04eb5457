//! Host value handles
//!
//!     [`Data`] is what the representer consumes: a cloneable handle to a host value of any
//!     `'static` type, or null. The handle owns its value through an `Rc`, which gives every
//!     value a stable address for as long as a handle to it exists. That address is the
//!     value's identity:
//!
//!         - cloning a handle shares identity (`a.clone()` is the same value as `a`)
//!         - building a new handle creates a new identity, even from an equal value
//!
//!     [`List`] and [`Map`] are the built-in containers. They hold further handles behind a
//!     `RefCell` so graphs can be wired up after construction, including graphs where a
//!     container ends up inside itself.

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// Runtime type of a host value: the `TypeId` plus a readable name for messages
///
/// Equality and hashing only look at the `TypeId`.
#[derive(Debug, Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    pub fn of<T: Any>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Address of a live host value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Identity(usize);

#[derive(Clone)]
struct Value {
    key: TypeKey,
    value: Rc<dyn Any>,
}

/// Handle to a host value, or null
#[derive(Clone, Default)]
pub struct Data {
    inner: Option<Value>,
}

impl Data {
    pub fn new<T: Any>(value: T) -> Self {
        Self {
            inner: Some(Value {
                key: TypeKey::of::<T>(),
                value: Rc::new(value),
            }),
        }
    }

    pub fn null() -> Self {
        Self { inner: None }
    }

    /// A new [`List`] holding `items`
    pub fn list(items: impl IntoIterator<Item = Data>) -> Self {
        Self::new(List::new(items))
    }

    /// A new [`Map`] holding `entries` in order
    pub fn map(entries: impl IntoIterator<Item = (Data, Data)>) -> Self {
        Self::new(Map::new(entries))
    }

    pub fn is_null(&self) -> bool {
        self.inner.is_none()
    }

    pub fn type_key(&self) -> Option<TypeKey> {
        self.inner.as_ref().map(|value| value.key)
    }

    /// Readable runtime type name, `"null"` for null
    pub fn type_name(&self) -> &'static str {
        self.inner
            .as_ref()
            .map(|value| value.key.name())
            .unwrap_or("null")
    }

    pub fn identity(&self) -> Option<Identity> {
        self.inner
            .as_ref()
            .map(|value| Identity(Rc::as_ptr(&value.value) as *const () as usize))
    }

    /// Same value, not merely an equal one
    pub fn ptr_eq(&self, other: &Data) -> bool {
        match (&self.inner, &other.inner) {
            (Some(a), Some(b)) => Rc::ptr_eq(&a.value, &b.value),
            (None, None) => true,
            _ => false,
        }
    }

    pub fn is<T: Any>(&self) -> bool {
        self.type_key() == Some(TypeKey::of::<T>())
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner
            .as_ref()
            .and_then(|value| value.value.downcast_ref::<T>())
    }

    pub fn as_list(&self) -> Option<&List> {
        self.downcast_ref::<List>()
    }

    pub fn as_map(&self) -> Option<&Map> {
        self.downcast_ref::<Map>()
    }
}

impl fmt::Debug for Data {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            None => f.write_str("Data(null)"),
            Some(value) => write!(
                f,
                "Data({} @ {:p})",
                value.key.name(),
                Rc::as_ptr(&value.value) as *const ()
            ),
        }
    }
}

impl From<&'static str> for Data {
    fn from(value: &'static str) -> Self {
        Data::new(value)
    }
}

impl From<String> for Data {
    fn from(value: String) -> Self {
        Data::new(value)
    }
}

impl From<bool> for Data {
    fn from(value: bool) -> Self {
        Data::new(value)
    }
}

impl From<char> for Data {
    fn from(value: char) -> Self {
        Data::new(value)
    }
}

impl From<i32> for Data {
    fn from(value: i32) -> Self {
        Data::new(value)
    }
}

impl From<i64> for Data {
    fn from(value: i64) -> Self {
        Data::new(value)
    }
}

impl From<u32> for Data {
    fn from(value: u32) -> Self {
        Data::new(value)
    }
}

impl From<u64> for Data {
    fn from(value: u64) -> Self {
        Data::new(value)
    }
}

impl From<usize> for Data {
    fn from(value: usize) -> Self {
        Data::new(value)
    }
}

impl From<f64> for Data {
    fn from(value: f64) -> Self {
        Data::new(value)
    }
}

/// Raw bytes, represented as binary
impl From<Vec<u8>> for Data {
    fn from(value: Vec<u8>) -> Self {
        Data::new(value)
    }
}

/// Builds a [`List`], not a bare `Vec<Data>`
impl From<Vec<Data>> for Data {
    fn from(items: Vec<Data>) -> Self {
        Data::list(items)
    }
}

impl<T: Into<Data>> From<Option<T>> for Data {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

/// Ordered, growable list of handles
#[derive(Default)]
pub struct List {
    items: RefCell<Vec<Data>>,
}

impl List {
    pub fn new(items: impl IntoIterator<Item = Data>) -> Self {
        Self {
            items: RefCell::new(items.into_iter().collect()),
        }
    }

    pub fn push(&self, item: Data) {
        self.items.borrow_mut().push(item);
    }

    /// Snapshot of the current items (handles are cheap to clone)
    pub fn items(&self) -> Vec<Data> {
        self.items.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

/// Ordered key/value pairs
///
/// Keys are handles, so there is no key equality; `push` always appends.
#[derive(Default)]
pub struct Map {
    entries: RefCell<Vec<(Data, Data)>>,
}

impl Map {
    pub fn new(entries: impl IntoIterator<Item = (Data, Data)>) -> Self {
        Self {
            entries: RefCell::new(entries.into_iter().collect()),
        }
    }

    pub fn push(&self, key: impl Into<Data>, value: impl Into<Data>) {
        self.entries.borrow_mut().push((key.into(), value.into()));
    }

    pub fn entries(&self) -> Vec<(Data, Data)> {
        self.entries.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_shares_identity() {
        let a = Data::from("x");
        let b = a.clone();
        assert!(a.ptr_eq(&b));
        assert_eq!(a.identity(), b.identity());
    }

    #[test]
    fn test_equal_values_have_distinct_identities() {
        let a = Data::from(String::from("x"));
        let b = Data::from(String::from("x"));
        assert!(!a.ptr_eq(&b));
        assert_ne!(a.identity(), b.identity());
    }

    #[test]
    fn test_null_has_no_identity_or_type() {
        let null = Data::null();
        assert!(null.is_null());
        assert_eq!(null.identity(), None);
        assert_eq!(null.type_key(), None);
        assert_eq!(null.type_name(), "null");
    }

    #[test]
    fn test_downcast() {
        let data = Data::from(42i64);
        assert!(data.is::<i64>());
        assert!(!data.is::<i32>());
        assert_eq!(data.downcast_ref::<i64>(), Some(&42));
        assert_eq!(data.downcast_ref::<String>(), None);
    }

    #[test]
    fn test_option_maps_none_to_null() {
        assert!(Data::from(None::<bool>).is_null());
        assert!(Data::from(Some(true)).is::<bool>());
    }

    #[test]
    fn test_list_can_contain_itself() {
        let data = Data::list([Data::from(1i64)]);
        let list = data.as_list().expect("list");
        list.push(data.clone());

        let items = list.items();
        assert_eq!(items.len(), 2);
        assert!(items[1].ptr_eq(&data));
    }

    #[test]
    fn test_type_key_equality_ignores_name() {
        assert_eq!(TypeKey::of::<String>(), TypeKey::of::<String>());
        assert_ne!(TypeKey::of::<String>(), TypeKey::of::<&'static str>());
        assert!(TypeKey::of::<List>().name().ends_with("List"));
    }
}
