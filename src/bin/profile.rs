use std::time::{Duration, Instant};

use mazespin::{Generator, MazeConfig, MazeSpinner, Topology};

/// Times every generator on one grid configuration and reports average
/// build time and dead-end count. Logs go to `profile.log`.
///
/// Usage: profile [rectangular|circular] [iterations] [seed]
fn main() -> std::io::Result<()> {
    let file_appender = tracing_appender::rolling::never(".", "profile.log");
    let (writer, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let topology = args
        .next()
        .and_then(|s| s.parse::<Topology>().ok())
        .unwrap_or_default();
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(100);
    let seed = args.next().and_then(|s| s.parse::<u64>().ok());

    let base = match topology {
        Topology::Rectangular => MazeConfig::rectangular(40, 40),
        Topology::Circular => MazeConfig::circular(12, 64, false),
    };

    for generator in Generator::ALL {
        if topology == Topology::Circular && !generator.supports_circular() {
            continue;
        }
        let mut spinner = MazeSpinner::new(base.clone().with_generator(generator), seed);
        let mut elapsed = Duration::ZERO;
        let mut dead_ends = 0;

        for _ in 0..num_iters {
            let started = Instant::now();
            let maze = spinner
                .generate()
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
            elapsed += started.elapsed();
            dead_ends += maze.dead_ends();
        }

        let runs = num_iters.max(1);
        println!(
            "{:<24} {:>10.3?} per maze, {:>8.1} dead ends on average",
            generator.to_string(),
            elapsed / runs as u32,
            dead_ends as f64 / runs as f64
        );
        tracing::info!("[profile] {} finished {} runs", generator, num_iters);
    }
    Ok(())
}
