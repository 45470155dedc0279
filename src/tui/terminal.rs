// terminal module handles terminal setup, teardown and the pointer shape
use crossterm::{
    cursor::{Hide, Show},
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute, queue,
    style::Print,
    terminal::{
        disable_raw_mode, enable_raw_mode, size, Clear, ClearType, DisableLineWrap,
        EnableLineWrap, EnterAlternateScreen, LeaveAlternateScreen,
    },
};
use std::io::{stdout, Error, Write};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

pub struct Terminal;

impl Terminal {
    pub fn initialize() -> Result<(), Error> {
        enable_raw_mode()?;
        execute!(
            stdout(),
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableFocusChange,
            DisableLineWrap,
            Hide
        )?;
        Self::clear_screen()?;
        Ok(())
    }

    pub fn terminate() -> Result<(), Error> {
        Self::set_pointer_shape("")?;
        execute!(
            stdout(),
            Show,
            EnableLineWrap,
            DisableFocusChange,
            DisableMouseCapture,
            LeaveAlternateScreen
        )?;
        disable_raw_mode()?;
        Ok(())
    }

    pub fn get_size() -> Result<Size, Error> {
        let (width, height) = size()?;
        Ok(Size { width, height })
    }

    pub fn clear_screen() -> Result<(), Error> {
        execute!(stdout(), Clear(ClearType::All))
    }

    pub fn clear_rest_of_line() -> Result<(), Error> {
        queue!(stdout(), Clear(ClearType::UntilNewLine))
    }

    // OSC 22 sets the mouse pointer shape by CSS cursor name; empty resets it
    pub fn set_pointer_shape(shape: &str) -> Result<(), Error> {
        queue!(stdout(), Print(format!("\x1b]22;{}\x07", shape)))?;
        stdout().flush()
    }

    pub fn execute() -> Result<(), Error> {
        stdout().flush()
    }
}
