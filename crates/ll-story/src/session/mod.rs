//! Game session management.
//!
//! `GameSession` is the single owner of everything that changes during a
//! run. It is advanced one line of input at a time; each call returns the
//! lines to show and leaves the session in the [`Phase`] whose question
//! [`GameSession::prompt`] renders next.

mod detective;
mod murderer;

use chrono::Utc;
use log::{debug, info};

use ll_core::{Cast, LOCATION_NAME, LodgeContent};

use crate::command::{Answer, MenuCommand};
use crate::config::StoryConfig;
use crate::ending::Ending;
use crate::error::{StoryError, StoryResult};
use crate::journal::{Journal, JournalEntry};
use crate::state::{PlayState, Role};

/// The question the session is waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Detective or Murderer?
    ChooseRole,
    /// Name for the chosen role.
    EnterName(Role),
    /// Main menu, before or during a playthrough.
    MainMenu,
    /// In-game action menu for the current role.
    Playing,
    /// Detective: which room to move to.
    ChooseRoom,
    /// Detective: who to talk to.
    ChooseCharacter,
    /// Detective: try the safe?
    ConfirmSafe,
    /// Detective: the safe code.
    EnterSafeCode,
    /// Murderer: which tool to use.
    ChooseTool,
    /// Murderer: follow Valerie into the porta-potty?
    ConfirmPursuit,
    /// Detective: who to arrest.
    ChooseSuspect,
    /// A playthrough ended: start a new game?
    ConfirmRestart(Ending),
    /// The player quit. No more input is accepted.
    Closed,
}

/// An interactive Lonely Lodge session.
pub struct GameSession {
    config: StoryConfig,
    lodge: LodgeContent,
    cast: Cast,
    play: Option<PlayState>,
    phase: Phase,
    journal: Journal,
    playthroughs: u32,
}

impl GameSession {
    /// Create a session waiting for a role choice.
    pub fn new(config: StoryConfig) -> Self {
        Self {
            config,
            lodge: LodgeContent::new(),
            cast: Cast::assemble(),
            play: None,
            phase: Phase::ChooseRole,
            journal: Journal::new(),
            playthroughs: 0,
        }
    }

    /// Start over: drop the current playthrough and ask for a role.
    ///
    /// Returns the welcome text.
    pub fn run(&mut self) -> Vec<String> {
        self.play = None;
        self.set_phase(Phase::ChooseRole);
        [
            "Welcome to 'Name of Game'",
            "You are about to embark on a thrilling adventure as a Detective or Murderer.",
            "Both Choices will lead you down a different path",
            "So Choose Wisely...",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    /// The session configuration.
    pub fn config(&self) -> &StoryConfig {
        &self.config
    }

    /// The lodge content and its flags.
    pub fn lodge(&self) -> &LodgeContent {
        &self.lodge
    }

    /// The characters of the current Detective playthrough.
    pub fn cast(&self) -> &Cast {
        &self.cast
    }

    /// The current playthrough, once a role and name are chosen.
    pub fn play(&self) -> Option<&PlayState> {
        self.play.as_ref()
    }

    /// The session journal.
    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// The question the session is waiting on.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the player has quit.
    pub fn is_closed(&self) -> bool {
        self.phase == Phase::Closed
    }

    /// Text of the question for the current phase.
    pub fn prompt(&self) -> String {
        let role = self.play.as_ref().map(|p| p.role);
        let started = self.play.as_ref().is_some_and(|p| p.started);
        match self.phase {
            Phase::ChooseRole => "Press '1' to choose Detective or '2' for Murderer:".to_string(),
            Phase::EnterName(role) => format!("Enter your {role}'s name:"),
            Phase::MainMenu if !started => "Press 'q' to quit or 's' to start:".to_string(),
            Phase::MainMenu => match role {
                Some(Role::Detective) => {
                    "Press 'q' to quit, 'c' to continue, 'r' to review clues or 'n' for new game:"
                        .to_string()
                }
                _ => "Press 'q' to quit, 'c' to continue, or 'n' for new game:".to_string(),
            },
            Phase::Playing => match role {
                Some(Role::Detective) => "Press 'q' to quit to menu, 'i' to interact, \
                    'e' to examine, 'r' to review clues, 'm' to move room or 'a' to arrest someone:"
                    .to_string(),
                _ => "Press 'q' to quit to menu, 'e' to examine room, 'u' to use tool, \
                    'f' to move forward or 'b' to go back:"
                    .to_string(),
            },
            Phase::ChooseRoom => "Enter the number of the room you want to move to:".to_string(),
            Phase::ChooseCharacter => {
                "Please enter a number to select a character to interact with:".to_string()
            }
            Phase::ConfirmSafe => "Do you want to enter the code for the safe? Yes/No:".to_string(),
            Phase::EnterSafeCode => "Please enter a 4 digit code:".to_string(),
            Phase::ChooseTool => "Select the tool you would like to use:".to_string(),
            Phase::ConfirmPursuit => "Do you want to pursue her? Yes/No:".to_string(),
            Phase::ChooseSuspect => "Choose a Character to arrest:".to_string(),
            Phase::ConfirmRestart(_) => "Do you want to start a new game? Yes/No:".to_string(),
            Phase::Closed => String::new(),
        }
    }

    /// Process a line of player input and return the lines to show.
    pub fn process(&mut self, input: &str) -> StoryResult<Vec<String>> {
        let input = input.trim();
        let mut out = Vec::new();

        let next = match self.phase {
            Phase::Closed => return Err(StoryError::SessionClosed),
            Phase::ChooseRole => self.choose_role(input, &mut out),
            Phase::EnterName(role) => self.enter_name(role, input, &mut out)?,
            Phase::MainMenu => self.main_menu(input, &mut out)?,
            Phase::Playing => match self.state()?.role {
                Role::Detective => self.detective_action(input, &mut out)?,
                Role::Murderer => self.murderer_action(input, &mut out)?,
            },
            Phase::ChooseRoom => self.choose_room(input, &mut out)?,
            Phase::ChooseCharacter => self.choose_character(input, &mut out)?,
            Phase::ConfirmSafe => self.confirm_safe(input, &mut out),
            Phase::EnterSafeCode => self.enter_safe_code(input, &mut out)?,
            Phase::ChooseTool => self.choose_tool(input, &mut out)?,
            Phase::ConfirmPursuit => self.confirm_pursuit(input, &mut out)?,
            Phase::ChooseSuspect => self.choose_suspect(input, &mut out)?,
            Phase::ConfirmRestart(_) => self.confirm_restart(input, &mut out),
        };

        self.set_phase(next);
        Ok(out)
    }

    fn set_phase(&mut self, next: Phase) {
        if next != self.phase {
            debug!("phase {:?} -> {:?}", self.phase, next);
            self.phase = next;
        }
    }

    fn state(&self) -> StoryResult<&PlayState> {
        self.play.as_ref().ok_or(StoryError::NoPlaythrough)
    }

    fn state_mut(&mut self) -> StoryResult<&mut PlayState> {
        self.play.as_mut().ok_or(StoryError::NoPlaythrough)
    }

    fn record(&mut self, entry: JournalEntry) {
        self.journal.append(entry);
    }

    fn choose_role(&mut self, input: &str, out: &mut Vec<String>) -> Phase {
        match Role::parse(input) {
            Some(role) => Phase::EnterName(role),
            None => {
                out.push("Invalid choice.".to_string());
                Phase::ChooseRole
            }
        }
    }

    fn enter_name(&mut self, role: Role, name: &str, out: &mut Vec<String>) -> StoryResult<Phase> {
        self.begin_playthrough(role, name);
        self.open_main_menu(out)
    }

    /// Reset every per-playthrough flag and create the new playthrough.
    fn begin_playthrough(&mut self, role: Role, name: &str) {
        self.lodge.reset();
        if role == Role::Detective {
            self.cast = Cast::assemble();
        }
        self.play = Some(PlayState::new(role, name, &self.config));
        self.playthroughs += 1;
        info!("playthrough {} started as {role}", self.playthroughs);
        self.record(JournalEntry::PlaythroughStarted {
            number: self.playthroughs,
            role,
            name: name.to_string(),
            timestamp: Utc::now(),
        });
    }

    fn open_main_menu(&self, out: &mut Vec<String>) -> StoryResult<Phase> {
        let play = self.state()?;
        out.push(String::new());
        out.push("- - Main Menu - -".to_string());
        out.push(String::new());
        if play.started {
            let room = self.lodge.room(play.room);
            out.push("Game Info:".to_string());
            out.push(format!("- Role - {}", play.role));
            out.push(format!("- Name - {}", play.name));
            out.push(format!("- Location - {LOCATION_NAME}"));
            out.push(format!("- Current room - {}", room.name));
            out.push(format!("- Room Description - {}", room.description));
        }
        Ok(Phase::MainMenu)
    }

    fn main_menu(&mut self, input: &str, out: &mut Vec<String>) -> StoryResult<Phase> {
        let command = MenuCommand::parse(input);
        let (role, started) = {
            let play = self.state()?;
            (play.role, play.started)
        };

        if command == MenuCommand::Quit {
            out.push("Goodbye!".to_string());
            return Ok(Phase::Closed);
        }

        if !started {
            return match command {
                MenuCommand::Start => {
                    self.state_mut()?.started = true;
                    self.start_game(out)
                }
                _ => {
                    out.push("Invalid choice.".to_string());
                    Ok(Phase::MainMenu)
                }
            };
        }

        match (command, role) {
            (MenuCommand::Continue, Role::Detective) => {
                out.push(
                    "You continue your investigation, determined to solve the mystery..."
                        .to_string(),
                );
                Ok(Phase::Playing)
            }
            (MenuCommand::Continue, Role::Murderer) => {
                out.push("You continue your hunt, determined to catch your prey...".to_string());
                Ok(Phase::Playing)
            }
            (MenuCommand::ReviewClues, Role::Detective) => {
                self.review_clues(out)?;
                Ok(Phase::Playing)
            }
            (MenuCommand::NewGame, _) => {
                out.extend(self.run());
                Ok(Phase::ChooseRole)
            }
            _ => {
                out.push("Invalid choice.".to_string());
                Ok(Phase::MainMenu)
            }
        }
    }

    fn start_game(&mut self, out: &mut Vec<String>) -> StoryResult<Phase> {
        let play = self.state_mut()?;
        play.room = play.role.start_room();
        let (role, name, room) = (play.role, play.name.clone(), play.room);
        let room = self.lodge.room(room);

        out.push(format!("Welcome {role} {name} to the {LOCATION_NAME}"));
        out.push(format!("You Enter {}. {}", room.name, room.description));
        match role {
            Role::Detective => out.push(
                "Your goal as Detective is to find clues and interact with people to solve the mystery, Good Luck.."
                    .to_string(),
            ),
            Role::Murderer => {
                out.push(
                    "Your goal as Murderer is to kill your girlfriend named Valerie without getting caught"
                        .to_string(),
                );
                out.push("She has just left your room to go to a party down the road.".to_string());
                out.push(
                    "Use tools that you find to navigate rooms and to kill Valerie, Good luck.."
                        .to_string(),
                );
            }
        }
        Ok(Phase::Playing)
    }

    /// Show the ending and ask about a new game.
    fn finish(&mut self, ending: Ending, out: &mut Vec<String>) -> StoryResult<Phase> {
        self.state_mut()?.started = false;
        out.extend(ending.narration().iter().map(|s| s.to_string()));
        info!("playthrough {} ended: {ending}", self.playthroughs);
        self.record(JournalEntry::Ended {
            ending,
            timestamp: Utc::now(),
        });
        Ok(Phase::ConfirmRestart(ending))
    }

    fn confirm_restart(&mut self, input: &str, out: &mut Vec<String>) -> Phase {
        if Ending::wants_restart(Answer::parse(input)) {
            out.extend(self.run());
            Phase::ChooseRole
        } else {
            out.push("Goodbye!".to_string());
            Phase::Closed
        }
    }

    fn enter_room_line(&self, play: &PlayState) -> String {
        let room = self.lodge.room(play.room);
        format!("You enter the {}. Description: {}", room.name, room.description)
    }
}
