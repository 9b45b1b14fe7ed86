//! Ladder Mate entry point
//!
//! Native demo: builds a seeded board, prints it, and traces every lane.
//!
//! Usage: `ladder-mate [seed] [lanes] [rows]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(2024);
    let mut settings = ladder_mate::Settings::default();
    if let Some(lanes) = args.next().and_then(|s| s.parse().ok()) {
        settings.lane_count = lanes;
    }
    if let Some(rows) = args.next().and_then(|s| s.parse().ok()) {
        settings.row_count = rows;
    }

    log::info!("Ladder Mate (native) starting, seed {}", seed);

    if let Err(err) = run(&settings, seed) {
        log::error!("{}", err);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The library is driven by the host app on the web; nothing to run here
}

#[cfg(not(target_arch = "wasm32"))]
fn run(settings: &ladder_mate::Settings, seed: u64) -> ladder_mate::Result<()> {
    use ladder_mate::{History, LadderGame, LadderLayout, Playback};

    let mut game = LadderGame::seeded(settings, seed)?;
    let mut history = History::with_limit(settings.history_limit);
    let layout = LadderLayout::default();

    println!("{}", draw_board(game.board()));

    for lane in 0..game.lane_count() {
        game.reset();
        let Some(trace) = game.select(lane)?.cloned() else {
            continue;
        };
        let playback = Playback::new(trace.clone(), settings);
        let end = layout
            .project_trace(&trace, game.board())
            .last()
            .copied()
            .unwrap_or_default();

        println!(
            "lane {} -> {}  ({} waypoints, {} crossings, ends at ({:.1}, {:.1}), result after {:.2}s)",
            trace.start_lane + 1,
            trace.exit_lane + 1,
            trace.waypoints.len(),
            trace.crossings(),
            end.x,
            end.y,
            playback.total_secs()
        );
        history.record_trace(&trace, 0.0);
    }

    println!(
        "permutation: {:?}",
        ladder_mate::ladder::resolve_all(game.board())
    );
    println!("history: {}", history.to_json()?);
    Ok(())
}

/// ASCII rendering, one text line per row
#[cfg(not(target_arch = "wasm32"))]
fn draw_board(board: &ladder_mate::Board) -> String {
    let lanes = board.lane_count();
    let mut out = String::new();

    let header: Vec<String> = (1..=lanes).map(|l| l.to_string()).collect();
    out.push_str(&header.join("   "));
    out.push('\n');

    for row in board.rows() {
        for lane in 0..lanes {
            out.push('|');
            if lane + 1 < lanes {
                out.push_str(if row[lane] { "---" } else { "   " });
            }
        }
        out.push('\n');
    }

    out
}
