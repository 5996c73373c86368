//! # Memory: addresses, aliasing and footprints
//!
//! A Rust binding owns its value. Plain values (`i32`, `f64`, ...) are copied on
//! assignment, so `let b = a;` creates a second, independent slot. To get the
//! "two names, one container" behavior the lesson demonstrates, storage has to
//! be shared explicitly through a reference-counted handle; that is what
//! [`SharedList`] is.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::mem;
use std::rc::Rc;

// ============================================================================
// Addresses
// ============================================================================

/// Address of the value behind `value`
pub fn address_of<T: ?Sized>(value: &T) -> usize {
    value as *const T as *const () as usize
}

/// `0x...` rendering of an address
pub fn format_address(addr: usize) -> String {
    format!("{:#x}", addr)
}

/// Distance in bytes between consecutive slice elements
pub const fn stride_of<T>() -> usize {
    mem::size_of::<T>()
}

/// Address of each element of `items`, in order
pub fn element_addresses<T>(items: &[T]) -> Vec<usize> {
    items.iter().map(address_of).collect()
}

/// Result of copying a small value into a second binding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyDemo {
    pub a: i32,
    pub b: i32,
    pub addr_a: usize,
    pub addr_b: usize,
}

impl CopyDemo {
    /// Whether both bindings occupy the same slot. Rust gives each live
    /// binding its own slot; other runtimes may intern small values.
    pub fn same_address(&self) -> bool {
        self.addr_a == self.addr_b
    }
}

/// `let a = 5; let b = a;` with both addresses captured while both are live
pub fn copy_demo() -> CopyDemo {
    let a: i32 = 5;
    let b = a;
    CopyDemo {
        a,
        b,
        addr_a: address_of(&a),
        addr_b: address_of(&b),
    }
}

/// Writes `value` through a mutable reference and returns what was there
pub fn mutate_through_ref(target: &mut i32, value: i32) -> i32 {
    mem::replace(target, value)
}

/// A value changed through `&mut` to it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerDemo {
    pub before: i32,
    pub after: i32,
    /// Address of the binding
    pub addr_target: usize,
    /// Address the reference points at
    pub addr_ref: usize,
}

/// `let mut age = 12; let r = &mut age; *r = 13;`
pub fn pointer_demo() -> PointerDemo {
    let mut age: i32 = 12;
    let addr_target = address_of(&age);
    let r = &mut age;
    let addr_ref = address_of(&*r);
    let before = mutate_through_ref(r, 13);
    tracing::trace!(before, after = age, "changed value through reference");
    PointerDemo {
        before,
        after: age,
        addr_target,
        addr_ref,
    }
}

// ============================================================================
// Shared containers
// ============================================================================

/// Handle to a growable list whose storage may be shared by several handles.
///
/// [`alias`](Self::alias) duplicates the handle (same storage);
/// [`shallow_copy`](Self::shallow_copy) allocates new storage holding clones
/// of the current top-level elements.
pub struct SharedList<T> {
    inner: Rc<RefCell<Vec<T>>>,
}

impl<T> SharedList<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(items)),
        }
    }

    /// Second handle to the same storage
    pub fn alias(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }

    /// Append through this handle; visible through every alias
    pub fn push(&self, item: T) {
        self.inner.borrow_mut().push(item);
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }

    /// Whether two handles refer to the same storage
    pub fn same_storage(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Address of the shared storage
    pub fn address(&self) -> usize {
        Rc::as_ptr(&self.inner) as *const () as usize
    }

    /// Number of live handles to this storage
    pub fn handle_count(&self) -> usize {
        Rc::strong_count(&self.inner)
    }
}

impl<T: Clone> SharedList<T> {
    /// New storage with clones of the current top-level elements
    pub fn shallow_copy(&self) -> Self {
        let copy = Self::new(self.inner.borrow().clone());
        tracing::trace!(
            from = %format_address(self.address()),
            to = %format_address(copy.address()),
            "shallow copy"
        );
        copy
    }

    /// Current contents
    pub fn snapshot(&self) -> Vec<T> {
        self.inner.borrow().clone()
    }
}

/// Cloning a handle aliases it, exactly like cloning an `Rc`
impl<T> Clone for SharedList<T> {
    fn clone(&self) -> Self {
        self.alias()
    }
}

impl<T: fmt::Debug> fmt::Debug for SharedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedList")
            .field("address", &format_address(self.address()))
            .field("items", &*self.inner.borrow())
            .finish()
    }
}

impl<T: fmt::Debug> fmt::Display for SharedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", &*self.inner.borrow())
    }
}

// ============================================================================
// Footprints
// ============================================================================

/// Bytes a value owns on the heap, beyond its inline size
pub trait HeapSize {
    fn heap_bytes(&self) -> usize;
}

macro_rules! impl_heap_size_zero {
    ($($ty:ty),* $(,)?) => {
        $(impl HeapSize for $ty {
            #[inline]
            fn heap_bytes(&self) -> usize {
                0
            }
        })*
    };
}

impl_heap_size_zero!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char);

impl HeapSize for &str {
    fn heap_bytes(&self) -> usize {
        0
    }
}

impl HeapSize for String {
    fn heap_bytes(&self) -> usize {
        self.capacity()
    }
}

impl<T: HeapSize> HeapSize for Vec<T> {
    fn heap_bytes(&self) -> usize {
        self.capacity() * mem::size_of::<T>() + self.iter().map(HeapSize::heap_bytes).sum::<usize>()
    }
}

impl<T: HeapSize> HeapSize for Box<T> {
    fn heap_bytes(&self) -> usize {
        mem::size_of::<T>() + (**self).heap_bytes()
    }
}

impl<K: HeapSize, V: HeapSize> HeapSize for BTreeMap<K, V> {
    // Node layout is private; count entry payloads only
    fn heap_bytes(&self) -> usize {
        self.iter()
            .map(|(k, v)| {
                mem::size_of::<K>() + mem::size_of::<V>() + k.heap_bytes() + v.heap_bytes()
            })
            .sum()
    }
}

impl<K: HeapSize, V: HeapSize, S> HeapSize for HashMap<K, V, S> {
    fn heap_bytes(&self) -> usize {
        self.capacity() * (mem::size_of::<K>() + mem::size_of::<V>())
            + self
                .iter()
                .map(|(k, v)| k.heap_bytes() + v.heap_bytes())
                .sum::<usize>()
    }
}

/// Inline and heap bytes of one value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Footprint {
    pub inline: usize,
    pub heap: usize,
}

impl Footprint {
    pub fn total(&self) -> usize {
        self.inline + self.heap
    }
}

/// Measure `value`
pub fn footprint<T: HeapSize>(value: &T) -> Footprint {
    Footprint {
        inline: mem::size_of_val(value),
        heap: value.heap_bytes(),
    }
}

/// One line of the size table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeRow {
    pub label: &'static str,
    pub type_name: String,
    pub footprint: Footprint,
}

impl SizeRow {
    fn of<T: HeapSize>(label: &'static str, value: &T) -> Self {
        Self {
            label,
            type_name: crate::survey::short_type_name::<T>(),
            footprint: footprint(value),
        }
    }
}

/// Storage used by a handful of everyday values
pub fn size_table() -> Vec<SizeRow> {
    let empty_map: HashMap<&str, i32> = HashMap::new();
    let map: HashMap<&str, i32> = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();

    vec![
        SizeRow::of("Small integer (1)", &1i64),
        SizeRow::of("Large integer (1000000)", &1_000_000i64),
        SizeRow::of("Float (3.14)", &3.14f64),
        SizeRow::of("Short string (\"Hi\")", &String::from("Hi")),
        SizeRow::of("Long string", &String::from("This is a much longer string!")),
        SizeRow::of("Empty list", &Vec::<i32>::new()),
        SizeRow::of("List with 5 items", &vec![1i32, 2, 3, 4, 5]),
        SizeRow::of("Empty map", &empty_map),
        SizeRow::of("Map with 3 items", &map),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Aliasing
    // ========================================================================

    #[test]
    fn test_alias_sees_mutation() {
        let list1 = SharedList::new(vec![1, 2, 3]);
        let list2 = list1.alias();
        assert!(list1.same_storage(&list2));
        assert_eq!(list1.address(), list2.address());

        list2.push(4);
        assert_eq!(list1.snapshot(), vec![1, 2, 3, 4]);
        assert_eq!(list2.snapshot(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_shallow_copy_is_independent() {
        let list1 = SharedList::new(vec![1, 2, 3, 4]);
        let list3 = list1.shallow_copy();
        assert!(!list1.same_storage(&list3));

        list3.push(5);
        assert_eq!(list1.snapshot(), vec![1, 2, 3, 4]);
        assert_eq!(list3.snapshot(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_shallow_copy_shares_nested_handles() {
        let row = SharedList::new(vec![0]);
        let grid = SharedList::new(vec![row.alias()]);
        let copy = grid.shallow_copy();

        copy.snapshot()[0].push(9);
        assert_eq!(row.snapshot(), vec![0, 9]);
        assert_eq!(grid.snapshot()[0].snapshot(), vec![0, 9]);
    }

    #[test]
    fn test_handle_count() {
        let list = SharedList::new(vec!['a']);
        assert_eq!(list.handle_count(), 1);
        let alias = list.alias();
        assert_eq!(list.handle_count(), 2);
        let copy = list.shallow_copy();
        assert_eq!(copy.handle_count(), 1);
        drop(alias);
        assert_eq!(list.handle_count(), 1);

        let cloned = list.clone();
        assert!(cloned.same_storage(&list));
    }

    #[test]
    fn test_len_and_display() {
        let list = SharedList::new(Vec::<i32>::new());
        assert!(list.is_empty());
        list.push(7);
        assert_eq!(list.len(), 1);
        assert_eq!(list.to_string(), "[7]");
        assert!(format!("{:?}", list).contains("items: [7]"));
    }

    // ========================================================================
    // Addresses
    // ========================================================================

    #[test]
    fn test_copy_demo_values() {
        let demo = copy_demo();
        assert_eq!(demo.a, 5);
        assert_eq!(demo.b, 5);
        assert_ne!(demo.addr_a, 0);
        assert_ne!(demo.addr_b, 0);
    }

    #[test]
    fn test_mutate_through_ref() {
        let mut age = 12;
        let old = mutate_through_ref(&mut age, 13);
        assert_eq!(old, 12);
        assert_eq!(age, 13);
    }

    #[test]
    fn test_pointer_demo() {
        let demo = pointer_demo();
        assert_eq!(demo.before, 12);
        assert_eq!(demo.after, 13);
        assert_eq!(demo.addr_target, demo.addr_ref);
    }

    #[test]
    fn test_element_stride() {
        let numbers = [10i32, 20, 30, 40];
        let addrs = element_addresses(&numbers);
        assert_eq!(addrs.len(), 4);
        for pair in addrs.windows(2) {
            assert_eq!(pair[1] - pair[0], stride_of::<i32>());
        }
        assert_eq!(stride_of::<i32>(), 4);
        assert_eq!(stride_of::<u8>(), 1);
    }

    #[test]
    fn test_format_address() {
        assert_eq!(format_address(0x1000), "0x1000");
    }

    // ========================================================================
    // Footprints
    // ========================================================================

    #[test]
    fn test_scalar_footprint() {
        assert_eq!(footprint(&1i64), Footprint { inline: 8, heap: 0 });
        assert_eq!(footprint(&true), Footprint { inline: 1, heap: 0 });
    }

    #[test]
    fn test_string_footprint() {
        let s = String::from("Hi");
        let fp = footprint(&s);
        assert_eq!(fp.inline, mem::size_of::<String>());
        assert_eq!(fp.heap, s.capacity());
        assert!(fp.heap >= 2);
    }

    #[test]
    fn test_vec_footprint() {
        let v: Vec<i32> = Vec::with_capacity(5);
        assert_eq!(footprint(&v).heap, 20);
        assert_eq!(footprint(&Vec::<i32>::new()).heap, 0);

        let nested = vec![String::from("ab")];
        assert!(footprint(&nested).heap >= mem::size_of::<String>() + 2);
    }

    #[test]
    fn test_box_footprint() {
        let b = Box::new(42i32);
        assert_eq!(footprint(&b).inline, mem::size_of::<usize>());
        assert_eq!(footprint(&b).heap, 4);
    }

    #[test]
    fn test_size_table_shape() {
        let rows = size_table();
        assert_eq!(rows.len(), 9);
        assert_eq!(rows[0].footprint.total(), 8);
        assert_eq!(rows[1].footprint.total(), 8);
        assert_eq!(rows[5].footprint.heap, 0);
        assert_eq!(rows[6].type_name, "Vec<i32>");
        assert_eq!(rows[7].footprint.heap, 0);
        assert!(rows[8].footprint.heap > 0);
        assert!(rows[4].footprint.total() > rows[3].footprint.total());
    }
}
