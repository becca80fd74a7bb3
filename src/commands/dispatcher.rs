use crate::physics::RigidBodies;
use crate::profile_scope;
use crate::renderer::Renderer;
use crate::simulation::Simulation;

use super::{particle, state, SimCommand, HELP};

/// Whether the simulation loop should keep going after a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Process a single `SimCommand` by delegating to the appropriate handler.
pub fn process_command<P: RigidBodies, R: Renderer>(cmd: SimCommand, simulation: &mut Simulation<P, R>) -> Flow {
    profile_scope!("command_handling");
    tracing::debug!(?cmd, "command");
    match cmd {
        SimCommand::AddParticle { charge, mass } => {
            particle::handle_add_particle(simulation, &charge, &mass);
        }
        SimCommand::AddRandom => particle::handle_add_random(simulation),
        SimCommand::Setup { count } => particle::handle_setup(simulation, count),
        SimCommand::DeleteAll => particle::handle_delete_all(simulation),
        SimCommand::Regenerate => particle::handle_regenerate(simulation),
        SimCommand::ToggleBoundaries => state::handle_toggle_boundaries(simulation),
        SimCommand::Slower => state::handle_slower(simulation),
        SimCommand::Faster => state::handle_faster(simulation),
        SimCommand::TogglePause => state::handle_toggle_pause(simulation),
        SimCommand::StepOnce => state::handle_step_once(simulation),
        SimCommand::Status => state::handle_status(simulation),
        SimCommand::Help => println!("{HELP}"),
        SimCommand::Quit => return Flow::Quit,
    }
    Flow::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::parse_command;
    use crate::init_config::SimConfig;

    fn sim() -> Simulation {
        Simulation::new(&SimConfig {
            seed: Some(3),
            ..SimConfig::default()
        })
    }

    fn run(simulation: &mut Simulation, line: &str) -> Flow {
        let cmd = parse_command(line).unwrap().unwrap();
        process_command(cmd, simulation)
    }

    #[test]
    fn particle_commands_reach_the_store() {
        let mut s = sim();
        run(&mut s, "setup 4");
        assert_eq!(s.store().len(), 4);
        run(&mut s, "random");
        run(&mut s, "add 0.001 8");
        assert_eq!(s.store().len(), 6);
        run(&mut s, "clear");
        assert!(s.store().is_empty());
        assert_eq!(s.renderer().live_count(), 0);
    }

    #[test]
    fn time_commands_drive_the_clock() {
        let mut s = sim();
        run(&mut s, "slower");
        assert_eq!(s.clock().time_scale(), 0.5);
        run(&mut s, "pause");
        assert!(s.clock().is_paused());
        run(&mut s, "faster");
        assert!(s.clock().is_paused());
        run(&mut s, "pause");
        assert_eq!(s.clock().time_scale(), 0.5);
        run(&mut s, "faster");
        assert_eq!(s.clock().time_scale(), 1.0);
    }

    #[test]
    fn step_advances_one_tick_and_stays_paused() {
        let mut s = sim();
        run(&mut s, "add 0.001 10");
        run(&mut s, "add 0.001 10");
        run(&mut s, "pause");
        run(&mut s, "step");
        assert_eq!(s.tick_count(), 1);
        assert!(s.sim_time() > 0.0);
        assert!(s.clock().is_paused());
        assert_eq!(s.clock().time_scale(), 0.0);
    }

    #[test]
    fn bounds_and_quit() {
        let mut s = sim();
        run(&mut s, "setup 5");
        assert_eq!(run(&mut s, "bounds"), Flow::Continue);
        assert!(s.boundaries().is_active());
        run(&mut s, "regen");
        run(&mut s, "status");
        assert_eq!(run(&mut s, "quit"), Flow::Quit);
    }
}
