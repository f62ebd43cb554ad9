use std::io;

use crate::modules::utils::io::{prompt, read_line};

/// The widget layer the shell drives: text fields, a hidden secret field and modal dialogs
pub trait Terminal {
    /// Show plain screen text
    fn show(&mut self, text: &str) -> io::Result<()>;

    /// Ask for one line of input
    fn read_line(&mut self, label: &str) -> io::Result<String>;

    /// Ask for a secret without echoing it
    fn read_secret(&mut self, label: &str) -> io::Result<String>;

    fn show_info(&mut self, title: &str, message: &str) -> io::Result<()>;

    fn show_warning(&mut self, title: &str, message: &str) -> io::Result<()>;

    fn show_error(&mut self, title: &str, message: &str) -> io::Result<()>;
}

/// Interactive terminal on stdin/stdout
#[derive(Debug, Default)]
pub struct StdTerminal;

impl StdTerminal {
    pub fn new() -> Self {
        StdTerminal
    }
}

impl Terminal for StdTerminal {
    fn show(&mut self, text: &str) -> io::Result<()> {
        println!("{}", text);
        Ok(())
    }

    fn read_line(&mut self, label: &str) -> io::Result<String> {
        prompt(label)?;
        read_line()
    }

    fn read_secret(&mut self, label: &str) -> io::Result<String> {
        prompt(label)?;
        rpassword::read_password()
    }

    fn show_info(&mut self, title: &str, message: &str) -> io::Result<()> {
        println!("\n[{}] {}", title, message);
        Ok(())
    }

    fn show_warning(&mut self, title: &str, message: &str) -> io::Result<()> {
        println!("\n[{}] Warning: {}", title, message);
        Ok(())
    }

    fn show_error(&mut self, title: &str, message: &str) -> io::Result<()> {
        eprintln!("\n[{}] Error: {}", title, message);
        Ok(())
    }
}
