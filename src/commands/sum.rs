use crate::api::Surface;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::msg_print;
use anyhow::Result;

/// Prints the dashboard counts: pending tasks, tasks due today, upcoming.
pub fn cmd() -> Result<()> {
    let surface = Surface::new()?;
    let counts = surface.get_counts()?;

    msg_print!(Message::CountsHeader, true);
    View::counts(&counts);

    Ok(())
}
