use super::NodeMap;

/// Construct the path from start to goal out of the predecessor chain.
///
/// Walks backward from the goal entry until a node with no predecessor is
/// reached, then reverses. If that terminal node is not `start`, the goal was
/// never relaxed from anything reachable and there is no path - reported as
/// `None` rather than trusting a dangling chain.
pub(crate) fn reconstruct(nodes: &NodeMap<'_>, goal_index: usize, start: &str) -> Option<Vec<String>> {
    let mut path = Vec::new();
    let mut current = Some(goal_index);

    while let Some(index) = current {
        let (&node, &(predecessor, _)) = nodes.get_index(index)?;
        path.push(node.to_string());
        current = predecessor;
    }

    // The chain must bottom out at the start node
    if path.last().map(String::as_str) != Some(start) {
        return None;
    }

    path.reverse();
    Some(path)
}
