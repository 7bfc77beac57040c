use calcgraph::{GraphEngine, NodeGraph, NodeState};

fn main() {
    env_logger::init();

    let mut graph = NodeGraph::new();
    let mut engine = GraphEngine::new();

    // Create nodes
    let dividend = engine.add_node(&mut graph, "NumberSource").unwrap();
    let divisor = engine.add_node(&mut graph, "NumberSource").unwrap();
    let division = engine.add_node(&mut graph, "Division").unwrap();
    let display = engine.add_node(&mut graph, "NumberDisplay").unwrap();

    // Connect them
    engine.connect(&mut graph, dividend, 0, division, 0).unwrap();
    engine.connect(&mut graph, divisor, 0, division, 1).unwrap();
    engine.connect(&mut graph, division, 0, display, 0).unwrap();

    println!(
        "Created graph with {} nodes and {} connections",
        graph.nodes.len(),
        graph.connections.len()
    );

    // Edit the sources; each edit settles the whole chain synchronously
    engine.edit_source(&graph, dividend, "10").unwrap();
    engine.edit_source(&graph, divisor, "4").unwrap();
    println!("10 / 4 = {}", engine.display_text(display).unwrap());

    // Division by zero stays inside the node's validation state
    engine.edit_source(&graph, divisor, "0").unwrap();
    let state = engine.validation_state(division).unwrap();
    let message = engine.validation_message(division).unwrap().to_string();
    assert_eq!(state, NodeState::Error);
    println!("10 / 0 -> {:?}: {}", state, message);
}
