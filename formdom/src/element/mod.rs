mod node;

pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id.as_deref() == Some(id) {
        return Some(root);
    }

    for child in &root.children {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Find the first element with the given tag, depth first.
pub fn find_by_tag<'a>(root: &'a Element, tag: &str) -> Option<&'a Element> {
    if root.tag.eq_ignore_ascii_case(tag) {
        return Some(root);
    }

    root.children.iter().find_map(|child| find_by_tag(child, tag))
}

/// Collect every element with the given tag, in document order.
pub fn find_all_by_tag<'a>(root: &'a Element, tag: &str) -> Vec<&'a Element> {
    let mut found = Vec::new();
    collect_by_tag(root, tag, &mut found);
    found
}

fn collect_by_tag<'a>(el: &'a Element, tag: &str, found: &mut Vec<&'a Element>) {
    if el.tag.eq_ignore_ascii_case(tag) {
        found.push(el);
    }
    for child in &el.children {
        collect_by_tag(child, tag, found);
    }
}
