//! Algorithm visualizer trace CLI.
//!
//! Provides the `stepviz` binary with one subcommand per tracer. Each
//! subcommand runs the algorithm on the given input and prints the full
//! step trace as JSON to stdout -- the same structure the UI player
//! consumes. Errors go to stderr with a nonzero exit code.

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use serde::Deserialize;

use stepviz_core::{Graph, GraphEdge, GraphNode};
use stepviz_trace::{dijkstra, search, sort};

/// Algorithm step-trace generators.
#[derive(Parser)]
#[command(name = "stepviz", about = "Algorithm step-trace generators")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Trace Dijkstra's shortest paths over a graph JSON document.
    Dijkstra {
        /// Path to a JSON file with `nodes` and `edges` arrays.
        #[arg(short, long)]
        input: PathBuf,

        /// Source node id to run from.
        #[arg(short, long)]
        source: String,
    },

    /// Trace binary search over a sorted array.
    BinarySearch {
        /// Comma-separated ascending values, e.g. `1,3,5,7`.
        #[arg(long, value_delimiter = ',', conflicts_with = "generate")]
        array: Option<Vec<i32>>,

        /// Generate a sorted array of this size instead.
        #[arg(long)]
        generate: Option<usize>,

        /// Upper bound for generated values.
        #[arg(long, default_value_t = 100)]
        max_value: i32,

        /// RNG seed for generation.
        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Value to search for.
        #[arg(short, long)]
        target: i32,
    },

    /// Trace quicksort over an array.
    QuickSort {
        /// Comma-separated values, e.g. `5,3,1`.
        #[arg(long, value_delimiter = ',', conflicts_with = "generate")]
        array: Option<Vec<i32>>,

        /// Generate a random array of this size instead.
        #[arg(long)]
        generate: Option<usize>,

        /// Upper bound for generated values.
        #[arg(long, default_value_t = 50)]
        max_value: i32,

        /// RNG seed for generation.
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

/// On-disk graph document: the node/edge arrays the editor exports.
#[derive(Deserialize)]
struct GraphDoc {
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Dijkstra { input, source } => run_dijkstra(&input, &source),
        Commands::BinarySearch {
            array,
            generate,
            max_value,
            seed,
            target,
        } => run_binary_search(array, generate, max_value, seed, target),
        Commands::QuickSort {
            array,
            generate,
            max_value,
            seed,
        } => run_quick_sort(array, generate, max_value, seed),
    };
    process::exit(exit_code);
}

/// Execute the dijkstra subcommand.
///
/// Returns exit code: 0 = success, 1 = invalid input, 3 = I/O error.
fn run_dijkstra(input: &Path, source: &str) -> i32 {
    let text = match fs::read_to_string(input) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error: failed to read '{}': {}", input.display(), e);
            return 3;
        }
    };

    let doc: GraphDoc = match serde_json::from_str(&text) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error: failed to parse graph document: {}", e);
            return 1;
        }
    };

    // Validate structural invariants (unique ids, endpoints exist) before
    // handing the lists to the tracer.
    let graph = match Graph::from_lists(doc.nodes, doc.edges) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Error: invalid graph: {}", e);
            return 1;
        }
    };

    match dijkstra::run(&graph.nodes(), &graph.edges(), source) {
        Ok(trace) => print_json(&trace),
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

/// Execute the binary-search subcommand.
fn run_binary_search(
    array: Option<Vec<i32>>,
    generate: Option<usize>,
    max_value: i32,
    seed: u64,
    target: i32,
) -> i32 {
    let array = match (array, generate) {
        (Some(values), _) => values,
        (None, Some(size)) => match search::generate_sorted_array(size, max_value, seed) {
            Ok(values) => values,
            Err(e) => {
                eprintln!("Error: {}", e);
                return 1;
            }
        },
        (None, None) => {
            eprintln!("Error: provide --array or --generate");
            return 1;
        }
    };

    let trace = search::run(&array, target);
    print_json(&trace)
}

/// Execute the quick-sort subcommand.
fn run_quick_sort(
    array: Option<Vec<i32>>,
    generate: Option<usize>,
    max_value: i32,
    seed: u64,
) -> i32 {
    let array = match (array, generate) {
        (Some(values), _) => values,
        (None, Some(size)) => sort::generate_random_array(size, max_value, seed),
        (None, None) => {
            eprintln!("Error: provide --array or --generate");
            return 1;
        }
    };

    let trace = sort::run(&array);
    print_json(&trace)
}

/// Print a trace as pretty JSON to stdout for machine-readable output.
fn print_json<T: serde::Serialize>(value: &T) -> i32 {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{}", json);
            0
        }
        Err(e) => {
            eprintln!("Error: failed to serialize trace: {}", e);
            1
        }
    }
}
