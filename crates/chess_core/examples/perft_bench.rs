//! Perft timing over a few diagrams, for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p chess_core -- [depth]
//!
//! Every position is cloned for each move and every legal move probes a
//! further clone, so depth 4 from the start already takes a while.

use std::env;
use std::time::{Duration, Instant};

use chess_core::{perft, Color, Position};

const POSITIONS: &[(&str, [&str; 8])] = &[
    (
        "Starting position",
        [
            "rnbqkbnr", "pppppppp", "........", "........", "........", "........", "PPPPPPPP",
            "RNBQKBNR",
        ],
    ),
    (
        "Kiwipete",
        [
            "r...k..r", "p.ppqpb.", "bn..pnp.", "...PN...", ".p..P...", "..N..Q.p", "PPPBBPPP",
            "R...K..R",
        ],
    ),
    (
        "Rook ending",
        [
            "........", "..p.....", "...p....", "KP.....r", ".R...p.k", "........", "....P.P.",
            "........",
        ],
    ),
];

fn nps(nodes: u64, elapsed: Duration) -> f64 {
    if elapsed.as_secs_f64() > 0.0 {
        nodes as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    }
}

fn main() {
    let depth: u8 = env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(3);

    println!("=== Perft Benchmark Suite ===");
    println!("Depth: {depth}");
    println!();

    let mut total_nodes = 0u64;
    let mut total_time = Duration::ZERO;

    for (name, rows) in POSITIONS {
        let Some(pos) = Position::from_diagram(rows) else {
            eprintln!("{name}: bad diagram");
            continue;
        };

        print!("{name:.<30}");

        let start = Instant::now();
        let nodes = perft(&pos, Color::White, depth);
        let elapsed = start.elapsed();

        total_nodes += nodes;
        total_time += elapsed;

        println!(
            " {nodes:>12} nodes in {elapsed:>8.3?} ({:>10.0} nps)",
            nps(nodes, elapsed)
        );
    }

    println!();
    println!("{:=<70}", "");
    println!(
        "TOTAL: {total_nodes} nodes in {total_time:.3?} ({:.0} nps)",
        nps(total_nodes, total_time)
    );
}
