// Tree flattener - depth-first traversal of the reported result tree

use crate::engine::TestNode;
use crate::error::ToolError;
use crate::state::FlatTest;

/// Flatten a reported result tree into leaf entities labeled with their full
/// path from the root. Containers contribute a path segment but never an
/// entity; unrecognized node kinds contribute nothing.
///
/// Output order follows the engine's depth-first, left-to-right reporting
/// order and determines display order downstream. An outcome evaluation
/// failure aborts the traversal.
pub fn flatten_tree(
    node: Option<&TestNode>,
    prefix: &[String],
) -> Result<Vec<FlatTest>, ToolError> {
    let Some(node) = node else {
        return Ok(Vec::new());
    };

    match node {
        TestNode::Case(case) => {
            let outcome = case.outcome()?;
            let mut path = prefix.to_vec();
            path.push(case.name().to_string());
            Ok(vec![FlatTest {
                name: case.name().to_string(),
                path,
                outcome: Some(outcome),
            }])
        }
        TestNode::Suite { name, children } => flatten_children(name, children, prefix),
        TestNode::Module { id, children } => flatten_children(id, children, prefix),
        TestNode::Unknown => Ok(Vec::new()),
    }
}

fn flatten_children(
    label: &str,
    children: &[TestNode],
    prefix: &[String],
) -> Result<Vec<FlatTest>, ToolError> {
    let mut path = prefix.to_vec();
    path.push(label.to_string());

    let mut entities = Vec::new();
    for child in children {
        entities.extend(flatten_tree(Some(child), &path)?);
    }
    Ok(entities)
}
