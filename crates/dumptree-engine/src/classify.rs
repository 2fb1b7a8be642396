use crate::collection::CollectionNode;
use crate::composite::CompositeNode;
use crate::leaf::LeafNode;
use crate::node::{pad_labels, Node};
use dumptree_types::{
    Error, MapValue, MemberScope, MemberValue, ObjectValue, SeqValue, SharedValue, Value,
};
use std::cell::RefCell;
use std::rc::Rc;

/// Classifies a value into a fully-materialized node tree.
///
/// Decision order, first match wins: null/scalar/string become a leaf,
/// mappings outrank sequences, anything else is treated as a composite
/// object. Construction walks the whole reachable graph eagerly; a
/// visited set keyed on shared-cell identity turns cycles into bounded
/// `<cycle detected>` leaves instead of unbounded recursion.
///
/// Never fails: every introspection fault is converted into a diagnostic
/// leaf carrying the fault's name and message.
pub fn classify(value: &Value, label: &str) -> Node {
    let mut visited = Vec::new();
    classify_inner(value, label.to_string(), &mut visited)
}

type Visited = Vec<*const RefCell<Value>>;

fn classify_inner(value: &Value, label: String, visited: &mut Visited) -> Node {
    match value {
        scalar if scalar.is_scalar() => Node::Leaf(LeafNode::new(label, scalar)),
        Value::Map(map) => build_mapping(map, label, visited),
        Value::Seq(seq) => build_sequence(seq, label, visited),
        Value::Object(obj) => build_composite(obj, label, visited),
        Value::Shared(cell) => resolve_shared(cell, label, visited),
        // is_scalar covers every remaining variant; keep the compiler honest.
        _ => unreachable!("non-scalar value not matched by any classification arm"),
    }
}

/// Follows a shared cell, detecting revisits and concurrent mutable
/// borrows. Faults surface as a `Result` here and are converted to leaf
/// nodes exactly once, at this boundary.
fn resolve_shared(cell: &SharedValue, label: String, visited: &mut Visited) -> Node {
    match try_resolve(cell, visited) {
        Ok(inner) => {
            visited.push(Rc::as_ptr(cell));
            let node = classify_inner(&inner, label, visited);
            visited.pop();
            node
        }
        Err(Error::CycleDetected) => Node::Leaf(LeafNode::cycle(label)),
        Err(err) => Node::Leaf(LeafNode::diagnostic(
            label,
            err.kind_name(),
            &err.to_string(),
        )),
    }
}

fn try_resolve(cell: &SharedValue, visited: &Visited) -> Result<Value, Error> {
    if visited.contains(&Rc::as_ptr(cell)) {
        return Err(Error::CycleDetected);
    }
    match cell.try_borrow() {
        Ok(inner) => Ok(inner.clone()),
        Err(_) => Err(Error::BorrowFailed),
    }
}

/// Instance members in declared order, then statics, as one child list;
/// labels padded to the widest member name so values align vertically.
fn build_composite(obj: &ObjectValue, label: String, visited: &mut Visited) -> Node {
    let instance = obj
        .members
        .iter()
        .filter(|m| m.scope == MemberScope::Instance);
    let statics = obj.members.iter().filter(|m| m.scope == MemberScope::Static);
    let ordered: Vec<_> = instance.chain(statics).collect();

    let names: Vec<String> = ordered.iter().map(|m| m.name.clone()).collect();
    let labels = pad_labels(&names);

    let children = ordered
        .iter()
        .zip(labels)
        .map(|(member, padded)| match &member.value {
            MemberValue::Ready(value) => classify_inner(value, padded, visited),
            MemberValue::Failed {
                error_type,
                message,
            } => Node::Leaf(LeafNode::diagnostic(padded, error_type, message)),
        })
        .collect();

    Node::Composite(CompositeNode::new(label, obj.type_name.clone(), children))
}

fn build_sequence(seq: &SeqValue, label: String, visited: &mut Visited) -> Node {
    let children = seq
        .items
        .iter()
        .map(|item| classify_inner(item, String::new(), visited))
        .collect();
    Node::Collection(CollectionNode::sequence(
        label,
        seq.type_name.clone(),
        children,
    ))
}

/// Entries become alternating `Key{i}` / `Value{i}` children. Indices are
/// left-padded so `Key 9` and `Key10` align, then the whole label column
/// is padded to the widest label.
fn build_mapping(map: &MapValue, label: String, visited: &mut Visited) -> Node {
    let count = map.entries.len();
    let index_width = if count == 0 {
        1
    } else {
        (count - 1).to_string().chars().count()
    };

    let mut names = Vec::with_capacity(count * 2);
    for index in 0..count {
        names.push(format!("Key{:>width$}", index, width = index_width));
        names.push(format!("Value{:>width$}", index, width = index_width));
    }
    let labels = pad_labels(&names);

    let mut children = Vec::with_capacity(count * 2);
    for (index, (key, value)) in map.entries.iter().enumerate() {
        children.push(classify_inner(key, labels[index * 2].clone(), visited));
        children.push(classify_inner(value, labels[index * 2 + 1].clone(), visited));
    }

    Node::Collection(CollectionNode::mapping(
        label,
        map.type_name.clone(),
        children,
    ))
}
