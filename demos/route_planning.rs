// SPDX-License-Identifier: MIT OR Apache-2.0
//! Route planning example.
//!
//! This example demonstrates:
//! - Building a weighted road network
//! - Breadth-first and depth-first traversal
//! - Single-source distances and point-to-point routes
//! - Minimum spanning trees with Kruskal's and Prim's algorithms
//!
//! Run with: `cargo run --example route_planning`

use graph_core::{Edge, Graph, Vertex};

fn main() {
    println!("Route Planning Example\n");

    let cities = [
        "seattle",
        "portland",
        "boise",
        "helena",
        "salt_lake_city",
        "denver",
    ];

    let mut network: Graph<&str> = Graph::new();
    for city in cities {
        network.add_vertex(Vertex::new(city));
    }

    // Approximate driving hours.
    let roads = [
        ("seattle", "portland", 3),
        ("seattle", "boise", 8),
        ("seattle", "helena", 9),
        ("portland", "boise", 7),
        ("boise", "salt_lake_city", 5),
        ("boise", "helena", 7),
        ("helena", "denver", 11),
        ("salt_lake_city", "denver", 8),
    ];
    for (from, to, hours) in roads {
        network.add_edge(Edge::undirected(Vertex::new(from), Vertex::new(to), hours));
    }
    println!(
        "Built road network: {} cities, {} roads\n",
        network.vertex_count(),
        network.edge_count()
    );

    let origin = Vertex::new("seattle");

    // Traversal orders from the origin
    let bfs = network
        .breadth_first_search(&origin)
        .expect("Failed to traverse");
    println!("Breadth-first from seattle:");
    println!("  {}\n", join(&bfs));

    let dfs = network
        .depth_first_search(&origin)
        .expect("Failed to traverse");
    println!("Depth-first from seattle:");
    println!("  {}\n", join(&dfs));

    // Single-source shortest paths
    let paths = network
        .shortest_paths(&origin)
        .expect("Failed to compute distances");
    println!("Driving hours from seattle:");
    for city in cities {
        println!("  {:>14}: {}", city, paths.distance(&Vertex::new(city)));
    }

    // Point-to-point route
    println!("\nBest route from seattle to denver:");
    match network
        .shortest_path_between(&origin, &Vertex::new("denver"))
        .expect("Failed to search")
    {
        Some(route) => {
            println!("  {}", join(&route.vertices));
            println!("  Total: {} hours", route.total_weight);
        },
        None => println!("  No route found"),
    }

    // Minimum spanning tree
    println!("\nCheapest road set connecting every city (Kruskal):");
    let tree = network
        .minimum_spanning_tree_kruskal()
        .expect("network should be connected");
    for edge in &tree.edges {
        println!(
            "  {} - {} ({} hours)",
            edge.u.payload(),
            edge.v.payload(),
            edge.weight
        );
    }
    println!("  Total: {} hours", tree.total_weight);

    let prim = network
        .minimum_spanning_tree_prim(&origin)
        .expect("Failed to compute tree")
        .expect("network should be connected");
    println!("  Prim from seattle agrees: {} hours", prim.total_weight);

    // An isolated city breaks spanning
    println!("\nAdding anchorage (no roads yet)");
    network.add_vertex(Vertex::new("anchorage"));
    let paths = network
        .shortest_paths(&origin)
        .expect("Failed to compute distances");
    println!(
        "  Hours from seattle: {}",
        paths.distance(&Vertex::new("anchorage"))
    );
    match network.minimum_spanning_tree_kruskal() {
        Some(tree) => println!("  Unexpected tree of {} roads", tree.edge_count()),
        None => println!("  No road set can connect every city now"),
    }

    println!("\nNetwork statistics:");
    println!("  Total cities: {}", network.vertex_count());
    println!("  Total roads: {}", network.edge_count());
}

fn join(order: &[Vertex<&str>]) -> String {
    order
        .iter()
        .map(|city| *city.payload())
        .collect::<Vec<_>>()
        .join(" -> ")
}
