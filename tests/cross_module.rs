//! Cross-module interaction tests
//!
//! Aliasing and copying laws checked through the same types the memory
//! lesson renders.

use bytewise_core::memory::{address_of, element_addresses, format_address};
use bytewise_core::SharedList;

#[test]
fn test_alias_and_copy_addresses() {
    let list1 = SharedList::new(vec![1, 2, 3]);
    let list2 = list1.alias();
    let list3 = list1.shallow_copy();

    assert_eq!(format_address(list1.address()), format_address(list2.address()));
    assert_ne!(list1.address(), list3.address());
}

#[test]
fn test_mutation_visibility_matrix() {
    let original = SharedList::new(vec![String::from("a")]);
    let alias = original.alias();
    let copy = original.shallow_copy();

    alias.push("via alias".into());
    copy.push("via copy".into());

    assert_eq!(original.snapshot(), vec!["a", "via alias"]);
    assert_eq!(alias.snapshot(), original.snapshot());
    assert_eq!(copy.snapshot(), vec!["a", "via copy"]);
}

#[test]
fn test_dropping_original_keeps_alias_alive() {
    let original = SharedList::new(vec![1]);
    let alias = original.alias();
    drop(original);
    alias.push(2);
    assert_eq!(alias.snapshot(), vec![1, 2]);
    assert_eq!(alias.handle_count(), 1);
}

#[test]
fn test_vec_elements_are_contiguous() {
    let values = vec![1u64, 2, 3];
    let addrs = element_addresses(&values);
    assert_eq!(addrs[0], address_of(&values[0]));
    assert_eq!(addrs[2] - addrs[0], 16);
}
