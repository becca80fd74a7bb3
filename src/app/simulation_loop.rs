use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::{Duration, Instant};

use tracing::{error, info};

use crate::commands::{process_command, Flow, SimCommand};
use crate::physics::RigidBodies;
use crate::renderer::Renderer;
use crate::simulation::Simulation;

/// Drain every pending command. Returns `Flow::Quit` on `quit` or when the
/// console side hung up.
pub fn drain_commands<P: RigidBodies, R: Renderer>(
    rx: &Receiver<SimCommand>,
    simulation: &mut Simulation<P, R>,
) -> Flow {
    loop {
        match rx.try_recv() {
            Ok(cmd) => {
                if process_command(cmd, simulation) == Flow::Quit {
                    return Flow::Quit;
                }
            }
            Err(TryRecvError::Empty) => return Flow::Continue,
            Err(TryRecvError::Disconnected) => return Flow::Quit,
        }
    }
}

/// Fixed-rate loop: commands, then one tick, then sleep until the next
/// deadline. The wall-clock period does not depend on the time scale; a
/// paused clock still ticks with a zero step.
pub fn run_simulation_loop<P: RigidBodies, R: Renderer>(
    rx: Receiver<SimCommand>,
    mut simulation: Simulation<P, R>,
    period: Duration,
) {
    let mut next = Instant::now();
    loop {
        if drain_commands(&rx, &mut simulation) == Flow::Quit {
            break;
        }

        if let Err(e) = simulation.tick() {
            error!(error = %e, "tick failed");
        }

        #[cfg(feature = "profiling")]
        {
            if simulation.tick_count() % 500 == 0 {
                crate::PROFILER.lock().log_and_clear();
            }
        }

        next += period;
        let now = Instant::now();
        if next > now {
            std::thread::sleep(next - now);
        } else {
            // running behind: do not try to catch up with a burst of ticks
            next = now;
        }
    }
    info!(ticks = simulation.tick_count(), "simulation loop finished");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::init_config::SimConfig;
    use std::sync::mpsc::channel;

    fn sim() -> Simulation {
        Simulation::new(&SimConfig {
            seed: Some(8),
            ..SimConfig::default()
        })
    }

    #[test]
    fn drain_applies_commands_in_order() {
        let (tx, rx) = channel();
        let mut s = sim();
        tx.send(SimCommand::Setup { count: 3 }).unwrap();
        tx.send(SimCommand::AddRandom).unwrap();
        assert_eq!(drain_commands(&rx, &mut s), Flow::Continue);
        assert_eq!(s.store().len(), 4);
    }

    #[test]
    fn drain_stops_at_quit_or_hangup() {
        let (tx, rx) = channel();
        let mut s = sim();
        tx.send(SimCommand::Quit).unwrap();
        tx.send(SimCommand::AddRandom).unwrap();
        assert_eq!(drain_commands(&rx, &mut s), Flow::Quit);
        assert!(s.store().is_empty());
        drop(tx);
        // the queued AddRandom runs before the hangup is noticed
        assert_eq!(drain_commands(&rx, &mut s), Flow::Quit);
    }

    #[test]
    fn loop_ticks_until_quit() {
        let (tx, rx) = channel();
        let handle = std::thread::spawn(move || {
            let mut s = sim();
            s.setup_random_particles(2).unwrap();
            run_simulation_loop(rx, s, Duration::from_millis(1));
        });
        std::thread::sleep(Duration::from_millis(20));
        tx.send(SimCommand::Quit).unwrap();
        handle.join().unwrap();
    }
}
