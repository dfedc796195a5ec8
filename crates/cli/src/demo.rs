//! Built-in demo scenarios
//!
//! Both demos fill a three-slot container by pushing empty composites and
//! then populating them in place through the array view, out of order, to
//! show that the stack and the array address the same slots.

use slotstack_core::{
    Composite, Kind, List, Result, TaggedSlotContainer, Value, release_stats, reset_release_stats,
};
use std::io::{self, Write};
use tracing::info;

/// Three nested containers (decimal, string, real) on one stack
pub fn nested_containers() -> Result<TaggedSlotContainer> {
    let mut outer = TaggedSlotContainer::new(3, Kind::Container);
    for kind in [Kind::Decimal, Kind::String, Kind::Real] {
        outer.push(TaggedSlotContainer::new(2, kind).into())?;
    }

    let contents: [(usize, [Value; 2]); 3] = [
        (2, [Value::Real(5.71), Value::Real(1.23)]),
        (0, [Value::Decimal(555), Value::Decimal(666)]),
        (1, [Value::from("hello"), Value::from("world")]),
    ];
    for (index, values) in contents {
        if let Some(inner) = outer.get_mut(index)?.and_then(Value::as_container_mut) {
            for value in values {
                inner.push(value)?;
            }
        }
    }
    Ok(outer)
}

/// Three lists (decimal, string, real) on one stack
pub fn lists_in_container() -> Result<TaggedSlotContainer> {
    let mut array = TaggedSlotContainer::new(3, Kind::List);
    for kind in [Kind::Decimal, Kind::String, Kind::Real] {
        array.push(List::new(kind).into())?;
    }

    let contents: [(usize, [Value; 2]); 3] = [
        (2, [Value::Real(5.71), Value::Real(1.23)]),
        (0, [Value::Decimal(555), Value::Decimal(666)]),
        (1, [Value::from("hello"), Value::from("world")]),
    ];
    for (index, values) in contents {
        if let Some(list) = array.get_mut(index)?.and_then(Value::as_list_mut) {
            for value in values {
                list.push(value)?;
            }
        }
    }
    Ok(array)
}

/// Run both demos, writing their stack renderings to `out`
pub fn run(out: &mut impl Write) -> io::Result<()> {
    let demos: [(&str, fn() -> Result<TaggedSlotContainer>); 2] = [
        ("nested containers", nested_containers),
        ("lists in a container", lists_in_container),
    ];
    for (name, build) in demos {
        let container = build().map_err(io::Error::other)?;
        writeln!(out, "{}", container.render_stack())?;

        reset_release_stats();
        container.deep_free();
        let stats = release_stats();
        info!(
            demo = name,
            composites = stats.composites(),
            total = stats.total(),
            "released"
        );
    }
    Ok(())
}
