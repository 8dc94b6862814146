//! Main TUI runner - entry point for the simulator event loop

use devsim_core::prelude::*;
use ratatui::backend::Backend;
use ratatui::Terminal;

use crate::event;
use crate::simulator::{DeviceSimulator, HostApp};
use crate::terminal;

/// Run the simulator until the user quits.
///
/// Takes over the terminal for the duration and restores it on exit,
/// including when the loop fails or panics.
pub fn run<H: HostApp>(mut simulator: DeviceSimulator<H>) -> Result<()> {
    terminal::install_panic_hook();

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    if let Err(e) = terminal::enable_mouse_capture() {
        // keyboard shortcuts still work
        warn!("{}", e);
    }

    let result = run_loop(&mut term, &mut simulator);

    terminal::restore();
    info!("Simulator exited");
    result
}

/// Draw, then wait for the next event, until quit is requested
fn run_loop<B: Backend, H: HostApp>(
    term: &mut Terminal<B>,
    simulator: &mut DeviceSimulator<H>,
) -> Result<()> {
    while !simulator.should_quit() {
        simulator.draw(term)?;

        if let Some(event) = event::poll()? {
            simulator.handle_event(event);
        }
    }
    Ok(())
}
