//! Lesson 3: addresses, aliasing and copies
//!
//! Address lines differ from run to run; everything else is deterministic.

use crate::error::Result;
use crate::page::Page;
use bytewise_core::memory::{
    address_of, copy_demo, element_addresses, footprint, format_address, pointer_demo, size_table,
    stride_of,
};
use bytewise_core::{RenderConfig, SharedList};

/// Render the memory lesson
pub fn render(config: &RenderConfig) -> Result<String> {
    let mut page = Page::new(config);
    page.banner("MEMORY ADDRESSES IN RUST")?;

    tracing::debug!("memory: addresses");
    addresses(&mut page)?;
    copies(&mut page)?;

    tracing::debug!("memory: shared lists");
    shared_lists(&mut page)?;

    tracing::debug!("memory: references");
    references(&mut page)?;

    tracing::debug!("memory: layout");
    page.section("ARRAYS AND THE HEAP")?;
    layout(&mut page)?;

    tracing::debug!("memory: sizes");
    page.section("MEMORY SIZES")?;
    sizes(&mut page)?;

    page.closing(
        &[
            "Key Takeaway: Rust frees memory when its owner goes away!",
            "Sharing has to be asked for with Rc; copies are explicit.",
        ],
        "🦀",
    )?;
    Ok(page.finish())
}

fn addresses(page: &mut Page<'_>) -> Result<()> {
    let x: i32 = 10;
    let y: i32 = 20;
    let name = "Python";

    page.heading(1, "Variable Memory Addresses")?;
    page.item(format!("x = {}, stored at: {}", x, format_address(address_of(&x))))?;
    page.item(format!("y = {}, stored at: {}", y, format_address(address_of(&y))))?;
    page.item(format!(
        "name = '{}', stored at: {}",
        name,
        format_address(address_of(name))
    ))?;
    Ok(())
}

fn copies(page: &mut Page<'_>) -> Result<()> {
    let demo = copy_demo();

    page.heading(2, "Variable Assignment")?;
    page.item(format!("a = {}, address: {}", demo.a, format_address(demo.addr_a)))?;
    page.item("b = a")?;
    page.item(format!("b = {}, address: {}", demo.b, format_address(demo.addr_b)))?;
    page.item(format!("Same address? {}", demo.same_address()))?;
    page.item("(Rust copies small values into their own slot;")?;
    page.item(" some languages reuse one slot for small numbers instead.)")?;
    Ok(())
}

fn shared_lists(page: &mut Page<'_>) -> Result<()> {
    page.line("\n3. Lists and References:")?;
    let list1 = SharedList::new(vec![1, 2, 3]);
    let list2 = list1.alias();
    page.item(format!(
        "list1 = {}, address: {}",
        list1,
        format_address(list1.address())
    ))?;
    page.item("list2 = list1.alias()")?;
    page.item(format!(
        "list2 = {}, address: {}",
        list2,
        format_address(list2.address())
    ))?;
    page.item(format!("Same address? {}", list1.same_storage(&list2)))?;

    list2.push(4);
    page.line(format!("\n{}After list2.push(4):", crate::page::INDENT))?;
    page.item(format!("list1 = {}", list1))?;
    page.item(format!("list2 = {}", list2))?;
    page.item("Both changed because they share the same memory!")?;

    let list3 = list1.shallow_copy();
    list3.push(5);
    page.line(format!("\n{}list3 = list1.shallow_copy()", crate::page::INDENT))?;
    page.item(format!(
        "list3 = {}, address: {}",
        list3,
        format_address(list3.address())
    ))?;
    page.item("After list3.push(5):")?;
    page.item(format!("list1 = {} (not changed)", list1))?;
    page.item(format!("list3 = {} (changed)", list3))?;
    page.item(format!(
        "Handles to list1's storage: {}",
        list1.handle_count()
    ))?;
    Ok(())
}

fn references(page: &mut Page<'_>) -> Result<()> {
    let demo = pointer_demo();
    page.heading(4, "Changing a Value Through a Reference")?;
    page.item(format!("let mut age = {};", demo.before))?;
    page.item("let r = &mut age;")?;
    page.item(format!(
        "age lives at: {}, r points to: {}",
        format_address(demo.addr_target),
        format_address(demo.addr_ref)
    ))?;
    page.item(format!("*r = {};", demo.after))?;
    page.item(format!("age is now: {}", demo.after))?;
    Ok(())
}

fn layout(page: &mut Page<'_>) -> Result<()> {
    let numbers: [i32; 4] = [10, 20, 30, 40];
    page.heading(5, "How Arrays are Stored")?;
    page.item("Arrays store elements next to each other:\n")?;
    for (i, (value, addr)) in numbers
        .iter()
        .zip(element_addresses(&numbers))
        .enumerate()
    {
        page.item(format!(
            "numbers[{}] = {:2} at address {}",
            i,
            value,
            format_address(addr)
        ))?;
    }
    page.line(format!(
        "\n{}Notice: Addresses are {} bytes apart (size of i32)!",
        crate::page::INDENT,
        stride_of::<i32>()
    ))?;

    let boxed = Box::new(42i32);
    let fp = footprint(&boxed);
    page.heading(6, "Allocating on the Heap")?;
    page.item("let boxed = Box::new(42);")?;
    page.item(format!("Address: {}", format_address(address_of(&*boxed))))?;
    page.item(format!("Value: {}", *boxed))?;
    page.item(format!(
        "The Box itself is {} bytes; it owns {} bytes on the heap",
        fp.inline, fp.heap
    ))?;
    drop(boxed);
    page.item("Memory freed when the Box was dropped!")?;
    Ok(())
}

fn sizes(page: &mut Page<'_>) -> Result<()> {
    page.blank()?;
    page.line(format!("{:30} {:>6} {:>6} {:>6}", "", "inline", "heap", "total"))?;
    for row in size_table() {
        page.line(format!(
            "{:30} {:6} {:6} {:6} bytes",
            row.label,
            row.footprint.inline,
            row.footprint.heap,
            row.footprint.total()
        ))?;
    }
    Ok(())
}
