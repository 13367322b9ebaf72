//! Demo: the full timed animation, pumped from a plain sleep loop.
//! A randomly marked state is searched at the default pacing, the delay is
//! shortened mid-run to show rescheduling, and the loop exits when the
//! scheduler reaches Complete.

use groviz::{ConsoleRenderer, ControlEvent, Phase, Scheduler, SearchConfig};
use std::io::stdout;
use std::thread;
use std::time::{Duration, Instant};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("--- groviz: Grover's search animation ---\n");

    let config = SearchConfig::with_random_target(3);
    let budget = config.max_iterations;
    let mut scheduler = Scheduler::new(config, ConsoleRenderer::new(stdout()));

    // A snappier pace than the 1200 ms default, this is a terminal after all.
    scheduler.handle(
        ControlEvent::DelayChanged(Duration::from_millis(400)),
        Instant::now(),
    )?;

    scheduler.render_now()?;
    scheduler.start(Instant::now())?;

    let mut shortened = false;
    while scheduler.phase() == Phase::Running {
        thread::sleep(Duration::from_millis(25));
        let now = Instant::now();

        // Speed up partway through: the pending wait restarts with the new
        // delay and exactly one step fires for it.
        if !shortened && scheduler.engine().iteration() >= 2 {
            scheduler.set_delay(now, Duration::from_millis(150))?;
            shortened = true;
        }

        scheduler.tick(now)?;
    }

    println!("--- Run complete after {} iterations ---", budget);
    println!(
        "Final probability of the marked state {}: {:.3}",
        scheduler.engine().config().target_label(),
        scheduler.engine().target_probability()
    );

    Ok(())
}
