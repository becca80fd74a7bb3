use std::io::BufRead;
use std::sync::mpsc::Sender;

use tracing::debug;

use crate::commands::{parse_command, SimCommand};
use crate::error::Result;

/// Read console lines until `quit`, end of input, or the simulation thread
/// going away. Parse errors are reported and reading continues.
pub fn run_command_loop<B: BufRead>(input: B, tx: &Sender<SimCommand>) -> Result<()> {
    for line in input.lines() {
        let line = line?;
        let cmd = match parse_command(&line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => continue,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };
        let quit = cmd == SimCommand::Quit;
        if tx.send(cmd).is_err() {
            debug!("simulation thread has stopped");
            return Ok(());
        }
        if quit {
            return Ok(());
        }
    }
    // end of input behaves like quit
    let _ = tx.send(SimCommand::Quit);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::channel;

    #[test]
    fn forwards_commands_until_quit() {
        let (tx, rx) = channel();
        let input = "random\n\nbogus\nsetup 3\nquit\nrandom\n".as_bytes();
        run_command_loop(input, &tx).unwrap();
        let got: Vec<SimCommand> = rx.try_iter().collect();
        assert_eq!(
            got,
            vec![SimCommand::AddRandom, SimCommand::Setup { count: 3 }, SimCommand::Quit]
        );
    }

    #[test]
    fn end_of_input_sends_quit() {
        let (tx, rx) = channel();
        run_command_loop("pause\n".as_bytes(), &tx).unwrap();
        let got: Vec<SimCommand> = rx.try_iter().collect();
        assert_eq!(got, vec![SimCommand::TogglePause, SimCommand::Quit]);
    }
}
