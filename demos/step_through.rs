//! Demo: stepping the Grover iterate by hand and reading the narration.
//! Shows the probability climbing to the optimum, then overshooting across
//! the extra post-optimum iterations, with no timer involved at all.

use groviz::{ConsoleRenderer, Phase, Scheduler, SearchConfig};
use std::io::stdout;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("--- groviz: manual step walkthrough ---\n");

    let config = SearchConfig::new(4);
    let optimal = config.optimal_iterations;
    let budget = config.max_iterations;
    println!("{}\n", config);

    let mut scheduler = Scheduler::new(config, ConsoleRenderer::new(stdout()));
    scheduler.render_now()?;

    let mut probability_at_optimum = 0.0;
    for iteration in 1..=budget {
        scheduler.step()?;
        if iteration == optimal {
            probability_at_optimum = scheduler.engine().target_probability();
        }
    }

    let final_probability = scheduler.engine().target_probability();

    println!("--- Analysis ---");
    println!(
        "- Probability at the optimal iterate ({}): {:.3}",
        optimal, probability_at_optimum
    );
    println!(
        "- Probability after all {} iterates:     {:.3}",
        budget, final_probability
    );
    println!("- The four extra iterates rotate past the target on purpose.");

    assert_eq!(scheduler.phase(), Phase::Complete);
    assert!(
        probability_at_optimum > 0.9,
        "expected a near-certain target at the optimum"
    );
    assert!(
        final_probability < probability_at_optimum,
        "expected the overshoot to lower the target probability"
    );
    println!("- Success! The run completed and further steps are refused until reset.");

    Ok(())
}
