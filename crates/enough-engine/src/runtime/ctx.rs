/// Runtime context passed to the application.
///
/// Commands are buffered and applied after the current callback returns.
#[derive(Debug, Default)]
pub struct RuntimeCtx {
    commands: Vec<Command>,
}

impl RuntimeCtx {
    /// Schedules one frame. Multiple requests before the next frame collapse into one.
    pub fn request_redraw(&mut self) {
        self.commands.push(Command::Redraw);
    }

    pub fn exit(&mut self) {
        self.commands.push(Command::Exit);
    }

    /// Drains buffered commands as `(redraw, exit)`.
    pub(crate) fn take(&mut self) -> (bool, bool) {
        let mut redraw = false;
        let mut exit = false;
        for command in self.commands.drain(..) {
            match command {
                Command::Redraw => redraw = true,
                Command::Exit => exit = true,
            }
        }
        (redraw, exit)
    }

    /// Whether a redraw is pending.
    pub fn redraw_requested(&self) -> bool {
        self.commands.iter().any(|c| matches!(c, Command::Redraw))
    }
}

#[derive(Debug)]
enum Command {
    Redraw,
    Exit,
}
