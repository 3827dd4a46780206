#![no_main]

use libfuzzer_sys::fuzz_target;
use storyscope::{analyze, validation::validate, NodeRole, StoryEdge, StoryNode};

// Byte layout: [node count][role and choice byte per node][source, target pairs...]
// Endpoint bytes may exceed the node count so unknown ids are exercised too.
fuzz_target!(|data: &[u8]| {
    let Some((&count, rest)) = data.split_first() else {
        return;
    };
    let count = usize::from(count % 64);
    if rest.len() < count {
        return;
    }
    let (roles, edge_bytes) = rest.split_at(count);

    let nodes: Vec<StoryNode> = roles
        .iter()
        .enumerate()
        .map(|(i, &b)| {
            let role = match b % 3 {
                0 => NodeRole::Start,
                1 => NodeRole::Normal,
                _ => NodeRole::Ending,
            };
            StoryNode::new(i.to_string(), role).with_choices(usize::from(b >> 5))
        })
        .collect();

    let edges: Vec<StoryEdge> = edge_bytes
        .chunks_exact(2)
        .map(|pair| StoryEdge::new(pair[0].to_string(), pair[1].to_string()))
        .collect();

    let _ = analyze(&nodes, &edges);
    let _ = validate(&nodes, &edges);
});
