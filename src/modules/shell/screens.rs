// src/modules/shell/screens.rs
use log::{debug, error};
use std::io;

use super::terminal::Terminal;
use crate::modules::app::VotingSystem;
use crate::modules::error::{ErrorKind, VotingError};
use crate::modules::utils::time::format_timestamp;
use crate::modules::voters::{LoginForm, RegistrationForm, VoterId};
use crate::modules::voting::candidate_from_choice;
use crate::{CANDIDATES, ELECTION_NAME, GENDERS};

/// Screens of the application and the transitions between them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    RegistrationForm,
    LoginForm,
    VotingScreen(VoterId),
    Exit,
}

/// What the user typed into a form field
enum Field {
    Value(String),
    Back, // Cancel the form and return to the main menu
    Exit, // Quit the program
}

impl Field {
    fn parse(input: String) -> Self {
        match input.trim().to_lowercase().as_str() {
            "back" | "cancel" => Field::Back,
            "exit" | "quit" => Field::Exit,
            _ => Field::Value(input),
        }
    }
}

// Unwrap a field value or leave the current screen
macro_rules! field_value {
    ($field:expr) => {
        match $field {
            Field::Value(value) => value,
            Field::Back => return Ok(Screen::MainMenu),
            Field::Exit => return Ok(Screen::Exit),
        }
    };
}

/// Presentation shell: collects form input, calls the flows and shows their outcome
pub struct Shell<'a, T: Terminal> {
    system: &'a VotingSystem,
    terminal: T,
}

impl<'a, T: Terminal> Shell<'a, T> {
    pub fn new(system: &'a VotingSystem, terminal: T) -> Self {
        Self { system, terminal }
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    /// Run from the main menu until the user exits or input ends
    pub fn run(&mut self) -> io::Result<()> {
        let mut screen = Screen::MainMenu;
        while screen != Screen::Exit {
            screen = match self.step(screen) {
                Ok(next) => next,
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Screen::Exit,
                Err(e) => return Err(e),
            };
        }
        self.terminal.show("Goodbye!")
    }

    /// Show one screen and return the next one
    pub fn step(&mut self, screen: Screen) -> io::Result<Screen> {
        debug!("Showing screen {:?}", screen);
        match screen {
            Screen::MainMenu => self.main_menu(),
            Screen::RegistrationForm => self.registration_form(),
            Screen::LoginForm => self.login_form(),
            Screen::VotingScreen(voter) => self.voting_screen(voter),
            Screen::Exit => Ok(Screen::Exit),
        }
    }

    fn main_menu(&mut self) -> io::Result<Screen> {
        self.terminal.show("\n=== Smart Voting System ===")?;
        self.terminal.show("1. New Voter Registration   (or type 'register')")?;
        self.terminal.show("2. Existing Voter Login     (or type 'login')")?;
        self.terminal.show("3. Exit                     (or type 'exit')")?;

        let choice = self.terminal.read_line("\nEnter your choice (1-3 or command)")?;
        match choice.trim().to_lowercase().as_str() {
            "1" | "register" => Ok(Screen::RegistrationForm),
            "2" | "login" => Ok(Screen::LoginForm),
            "3" | "exit" | "quit" => Ok(Screen::Exit),
            _ => {
                self.terminal.show_error(
                    "Invalid Choice",
                    "Please enter a number (1-3) or command (register/login/exit).",
                )?;
                Ok(Screen::MainMenu)
            }
        }
    }

    fn field(&mut self, label: &str) -> io::Result<Field> {
        Ok(Field::parse(self.terminal.read_line(label)?))
    }

    // Any typed secret is a value; the form can be cancelled from earlier fields
    fn secret_field(&mut self, label: &str) -> io::Result<Field> {
        Ok(Field::Value(self.terminal.read_secret(label)?))
    }

    fn registration_form(&mut self) -> io::Result<Screen> {
        self.terminal.show("\n--- Voter Registration ---")?;
        self.terminal
            .show("(type 'back' to return to the menu, 'exit' to quit)")?;

        let identity_number = field_value!(self.field("Aadhaar Number")?);
        let name = field_value!(self.field("Full Name")?);
        let age = field_value!(self.field("Age")?);
        let gender_label = format!(
            "Gender ({})",
            GENDERS
                .iter()
                .enumerate()
                .map(|(i, g)| format!("{}. {}", i + 1, g))
                .collect::<Vec<_>>()
                .join(", ")
        );
        let gender = gender_choice(field_value!(self.field(&gender_label)?));
        let address = field_value!(self.field("Address")?);
        let secret = field_value!(self.secret_field("Password")?);

        let form = RegistrationForm {
            identity_number,
            name,
            age,
            gender,
            address,
            secret,
        };

        match self.system.register(&form) {
            Ok(_) => {
                self.terminal
                    .show_info("Success", "Voter Registered Successfully!")?;
                Ok(Screen::MainMenu)
            }
            Err(e) => {
                self.report("Registration Error", &e)?;
                Ok(Screen::RegistrationForm)
            }
        }
    }

    fn login_form(&mut self) -> io::Result<Screen> {
        self.terminal.show("\n--- Voter Login ---")?;
        self.terminal
            .show("(type 'back' to return to the menu, 'exit' to quit)")?;

        let identity_number = field_value!(self.field("Aadhaar Number")?);
        let secret = field_value!(self.secret_field("Password")?);
        let form = LoginForm {
            identity_number,
            secret,
        };

        match self.system.authenticate(&form) {
            Ok(voter_id) => {
                match self.system.voter(voter_id) {
                    Ok(Some(voter)) => self.terminal.show(&format!(
                        "\nWelcome, {}! (registered {})",
                        voter.name,
                        format_timestamp(&voter.registration_date)
                    ))?,
                    Ok(None) => {}
                    Err(e) => error!("Failed to load voter {} for greeting: {}", voter_id, e),
                }
                Ok(Screen::VotingScreen(voter_id))
            }
            Err(e) => {
                self.report("Login Error", &e)?;
                Ok(Screen::LoginForm)
            }
        }
    }

    fn voting_screen(&mut self, voter: VoterId) -> io::Result<Screen> {
        self.terminal.show(&format!("\n--- Cast Your Vote: {} ---", ELECTION_NAME))?;
        self.terminal.show("Select Your Candidate")?;
        for (i, candidate) in CANDIDATES.iter().enumerate() {
            self.terminal.show(&format!("{}. {}", i + 1, candidate))?;
        }
        self.terminal
            .show("(type 'back' to return to the menu, 'exit' to quit)")?;

        let choice = field_value!(self.field("Your choice")?);
        let candidate = match candidate_from_choice(&choice) {
            Some(candidate) => candidate.to_string(),
            None => choice,
        };

        match self.system.cast_vote(voter, ELECTION_NAME, &candidate) {
            Ok(()) => {
                self.terminal.show_info("Success", "Vote Casted Successfully!")?;
                Ok(Screen::MainMenu)
            }
            Err(e) if e.kind() == ErrorKind::Validation => {
                self.terminal.show_warning("Vote Error", &e.to_string())?;
                Ok(Screen::VotingScreen(voter))
            }
            Err(e) => {
                self.report("Voting Error", &e)?;
                Ok(Screen::MainMenu)
            }
        }
    }

    fn report(&mut self, title: &str, err: &VotingError) -> io::Result<()> {
        if err.kind() == ErrorKind::Storage {
            error!("{}: {}", title, err);
        }
        self.terminal.show_error(title, &err.to_string())
    }
}

/// Map a numbered gender choice to its label; anything else is kept as typed
fn gender_choice(input: String) -> String {
    match input.trim().parse::<usize>() {
        Ok(n) if (1..=GENDERS.len()).contains(&n) => GENDERS[n - 1].to_string(),
        _ => input,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Terminal fed from a fixed script that records every dialog
    #[derive(Default)]
    struct ScriptedTerminal {
        inputs: VecDeque<String>,
        dialogs: Vec<String>,
    }

    impl ScriptedTerminal {
        fn new(inputs: &[&str]) -> Self {
            Self {
                inputs: inputs.iter().map(|s| s.to_string()).collect(),
                dialogs: Vec::new(),
            }
        }

        fn next(&mut self) -> io::Result<String> {
            self.inputs
                .pop_front()
                .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script ended"))
        }
    }

    impl Terminal for ScriptedTerminal {
        fn show(&mut self, _text: &str) -> io::Result<()> {
            Ok(())
        }

        fn read_line(&mut self, _label: &str) -> io::Result<String> {
            self.next()
        }

        fn read_secret(&mut self, _label: &str) -> io::Result<String> {
            self.next()
        }

        fn show_info(&mut self, title: &str, message: &str) -> io::Result<()> {
            self.dialogs.push(format!("info: {}: {}", title, message));
            Ok(())
        }

        fn show_warning(&mut self, title: &str, message: &str) -> io::Result<()> {
            self.dialogs.push(format!("warning: {}: {}", title, message));
            Ok(())
        }

        fn show_error(&mut self, title: &str, message: &str) -> io::Result<()> {
            self.dialogs.push(format!("error: {}: {}", title, message));
            Ok(())
        }
    }

    const REGISTER_ASHA: [&str; 7] = ["1", "123456789012", "Asha", "30", "2", "Line1", "pw1"];

    fn system() -> VotingSystem {
        VotingSystem::with_database(crate::modules::storage::Database::open_in_memory().unwrap())
    }

    fn script<'s>(parts: &[&[&'s str]]) -> Vec<&'s str> {
        parts.concat()
    }

    #[test]
    fn test_register_login_and_vote() {
        let system = system();
        let inputs = script(&[
            &REGISTER_ASHA,
            &["2", "123456789012", "pw1", "2"],
            &["2", "123456789012", "pw1", "3"],
            &["3"],
        ]);
        let mut shell = Shell::new(&system, ScriptedTerminal::new(&inputs));
        shell.run().unwrap();

        assert_eq!(
            shell.terminal().dialogs,
            vec![
                "info: Success: Voter Registered Successfully!",
                "info: Success: Vote Casted Successfully!",
                "error: Voting Error: Voter has already voted in this election",
            ]
        );

        let voter = system.database().find_voter("123456789012").unwrap().unwrap();
        assert_eq!(voter.gender, "Female");
        let record = system.recorded_vote(voter.id, ELECTION_NAME).unwrap().unwrap();
        assert_eq!(record.candidate, "Candidate B");
    }

    #[test]
    fn test_failed_registration_shows_form_again() {
        let system = system();
        let inputs = script(&[
            &["1", "12345", "Asha", "30", "Female", "Line1", "pw1"],
            &["back"],
            &["exit"],
        ]);
        let mut shell = Shell::new(&system, ScriptedTerminal::new(&inputs));

        assert_eq!(shell.step(Screen::MainMenu).unwrap(), Screen::RegistrationForm);
        assert_eq!(shell.step(Screen::RegistrationForm).unwrap(), Screen::RegistrationForm);
        assert_eq!(shell.step(Screen::RegistrationForm).unwrap(), Screen::MainMenu);
        assert_eq!(shell.step(Screen::MainMenu).unwrap(), Screen::Exit);
        assert_eq!(
            shell.terminal().dialogs,
            vec!["error: Registration Error: Invalid identity number"]
        );
    }

    #[test]
    fn test_login_failures_stay_on_login_form() {
        let system = system();
        let inputs = script(&[
            &REGISTER_ASHA,
            &["2", "123456789012", "wrong"],
            &["999999999999", "pw1"],
            &["123456789012", "pw1"],
        ]);
        let mut shell = Shell::new(&system, ScriptedTerminal::new(&inputs));

        assert_eq!(shell.step(Screen::MainMenu).unwrap(), Screen::RegistrationForm);
        assert_eq!(shell.step(Screen::RegistrationForm).unwrap(), Screen::MainMenu);
        assert_eq!(shell.step(Screen::MainMenu).unwrap(), Screen::LoginForm);
        assert_eq!(shell.step(Screen::LoginForm).unwrap(), Screen::LoginForm);
        assert_eq!(shell.step(Screen::LoginForm).unwrap(), Screen::LoginForm);

        let next = shell.step(Screen::LoginForm).unwrap();
        let voter = system.database().find_voter("123456789012").unwrap().unwrap();
        assert_eq!(next, Screen::VotingScreen(voter.id));

        assert_eq!(
            shell.terminal().dialogs[1..],
            [
                "error: Login Error: Authentication failed".to_string(),
                "error: Login Error: Voter not found or not registered".to_string(),
            ]
        );
    }

    #[test]
    fn test_empty_selection_keeps_voting_screen() {
        let system = system();
        let voter = system
            .register(&RegistrationForm {
                identity_number: "123456789012".to_string(),
                name: "Asha".to_string(),
                age: "30".to_string(),
                gender: "Female".to_string(),
                address: "Line1".to_string(),
                secret: "pw1".to_string(),
            })
            .unwrap();
        let inputs = ["", "Nobody", "back"];
        let mut shell = Shell::new(&system, ScriptedTerminal::new(&inputs));

        let screen = Screen::VotingScreen(voter);
        assert_eq!(shell.step(screen).unwrap(), screen);
        assert_eq!(shell.step(screen).unwrap(), screen);
        assert_eq!(shell.step(screen).unwrap(), Screen::MainMenu);

        assert_eq!(
            shell.terminal().dialogs,
            vec![
                "warning: Vote Error: Please select a candidate",
                "warning: Vote Error: Unknown candidate: Nobody",
            ]
        );
        assert!(!system.database().has_voted(voter, ELECTION_NAME).unwrap());
    }

    #[test]
    fn test_exit_from_any_form() {
        let system = system();
        let inputs = ["1", "123456789012", "exit"];
        let mut shell = Shell::new(&system, ScriptedTerminal::new(&inputs));
        shell.run().unwrap();
        assert!(shell.terminal().inputs.is_empty());
        assert!(shell.terminal().dialogs.is_empty());
    }

    #[test]
    fn test_navigation_words_are_valid_secrets() {
        let system = system();
        let inputs = [
            "123456789012", "Asha", "30", "Female", "Line1", "Exit",
            "123456789012", " back ",
            "123456789012", "Exit",
        ];
        let mut shell = Shell::new(&system, ScriptedTerminal::new(&inputs));

        assert_eq!(shell.step(Screen::RegistrationForm).unwrap(), Screen::MainMenu);
        assert!(system.database().find_voter("123456789012").unwrap().is_some());

        // A wrong secret that looks like a command is just a wrong secret
        assert_eq!(shell.step(Screen::LoginForm).unwrap(), Screen::LoginForm);

        let voter = system.database().find_voter("123456789012").unwrap().unwrap();
        assert_eq!(
            shell.step(Screen::LoginForm).unwrap(),
            Screen::VotingScreen(voter.id)
        );
        assert_eq!(
            shell.terminal().dialogs,
            vec![
                "info: Success: Voter Registered Successfully!",
                "error: Login Error: Authentication failed",
            ]
        );
    }

    #[test]
    fn test_invalid_menu_choice() {
        let system = system();
        let mut shell = Shell::new(&system, ScriptedTerminal::new(&["7"]));
        assert_eq!(shell.step(Screen::MainMenu).unwrap(), Screen::MainMenu);
        assert_eq!(shell.terminal().dialogs.len(), 1);
    }

    #[test]
    fn test_end_of_input_exits() {
        let system = system();
        let mut shell = Shell::new(&system, ScriptedTerminal::new(&["2"]));
        assert!(shell.run().is_ok());
    }

    #[test]
    fn test_gender_choice() {
        assert_eq!(gender_choice("1".to_string()), "Male");
        assert_eq!(gender_choice("3".to_string()), "Other");
        assert_eq!(gender_choice("Nonbinary".to_string()), "Nonbinary");
        assert_eq!(gender_choice("4".to_string()), "4");
    }
}
