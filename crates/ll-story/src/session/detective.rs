//! Detective handlers: talk, search, move freely, and make the arrest.

use chrono::Utc;
use log::debug;

use ll_core::{CharacterKind, RoomId};

use super::{GameSession, Phase};
use crate::command::{Answer, DetectiveAction, parse_slot};
use crate::ending::Ending;
use crate::error::StoryResult;
use crate::journal::JournalEntry;

impl GameSession {
    pub(super) fn detective_action(
        &mut self,
        input: &str,
        out: &mut Vec<String>,
    ) -> StoryResult<Phase> {
        match DetectiveAction::parse(input) {
            DetectiveAction::Menu => self.open_main_menu(out),
            DetectiveAction::Interact => self.list_characters(out),
            DetectiveAction::Examine => self.examine_for_clue(out),
            DetectiveAction::ReviewClues => {
                self.review_clues(out)?;
                Ok(Phase::Playing)
            }
            DetectiveAction::MoveToRoom => {
                out.push("You decide to move to a different room.".to_string());
                out.push("Available rooms:".to_string());
                out.extend(self.lodge.room_listing());
                Ok(Phase::ChooseRoom)
            }
            DetectiveAction::Arrest => self.list_suspects(out),
            DetectiveAction::Unknown => {
                out.push("Invalid choice.".to_string());
                Ok(Phase::Playing)
            }
        }
    }

    /// Print the clues found so far.
    pub(super) fn review_clues(&self, out: &mut Vec<String>) -> StoryResult<()> {
        let play = self.state()?;
        if play.clues().is_empty() {
            out.push("No clues have been examined yet.".to_string());
        } else {
            out.push("Examined Clues:".to_string());
            for clue in play.clues() {
                out.push(format!("{}: {}", clue.name, clue.description));
            }
        }
        Ok(())
    }

    fn list_characters(&self, out: &mut Vec<String>) -> StoryResult<Phase> {
        let room = self.state()?.room;
        out.push("You decide to interact with the characters in the room.".to_string());
        let present = self.cast.in_room(room);
        if present.is_empty() {
            out.push("No Characters to interact with".to_string());
            return Ok(Phase::Playing);
        }
        out.push("Characters in room:".to_string());
        for (i, character) in present.iter().enumerate() {
            out.push(format!("{}.{}", i + 1, character.name));
        }
        Ok(Phase::ChooseCharacter)
    }

    pub(super) fn choose_character(
        &mut self,
        input: &str,
        out: &mut Vec<String>,
    ) -> StoryResult<Phase> {
        let room = self.state()?.room;
        let chosen: Option<CharacterKind> = parse_slot(input)
            .and_then(|i| self.cast.in_room(room).get(i).map(|c| c.kind));

        match chosen {
            Some(kind) => {
                let line = self.cast.get_mut(kind).interact();
                out.push(line.clone());
                self.record(JournalEntry::Spoke {
                    character: kind,
                    line,
                    timestamp: Utc::now(),
                });
            }
            None => out.push("invalid option".to_string()),
        }
        Ok(Phase::Playing)
    }

    fn examine_for_clue(&mut self, out: &mut Vec<String>) -> StoryResult<Phase> {
        let (room, safe_opened) = {
            let play = self.state()?;
            (play.room, play.safe_opened)
        };

        if self.lodge.room(room).is_examined() {
            if room == RoomId::CouplesRoom && !safe_opened {
                return Ok(Phase::ConfirmSafe);
            }
            out.push("You have already examined this room, review your clues".to_string());
            return Ok(Phase::Playing);
        }

        out.push("You Examine the Room".to_string());
        let Some(clue) = self.lodge.clue_in(room).cloned() else {
            out.push("You find nothing in this room.".to_string());
            return Ok(Phase::Playing);
        };

        out.push(format!("You found a {}", clue.name));
        if room == RoomId::Bar {
            self.cast.reveal_bracelet();
        }
        self.lodge.room_mut(room).examine();
        self.record(JournalEntry::ClueFound {
            clue: clue.name.clone(),
            room,
            timestamp: Utc::now(),
        });
        self.state_mut()?.add_clue(clue);
        Ok(Phase::Playing)
    }

    pub(super) fn confirm_safe(&mut self, input: &str, out: &mut Vec<String>) -> Phase {
        match Answer::parse(input) {
            Answer::Yes => Phase::EnterSafeCode,
            Answer::No => Phase::Playing,
            Answer::Other => {
                out.push("Invalid Input".to_string());
                Phase::Playing
            }
        }
    }

    pub(super) fn enter_safe_code(
        &mut self,
        input: &str,
        out: &mut Vec<String>,
    ) -> StoryResult<Phase> {
        if input != self.config.safe_code {
            debug!("wrong safe code");
            return Ok(Phase::Playing);
        }

        let clue = self.lodge.safe_clue().clone();
        out.push("You opened the safe".to_string());
        out.push(format!("You found a {}", clue.name));
        self.record(JournalEntry::ClueFound {
            clue: clue.name.clone(),
            room: RoomId::CouplesRoom,
            timestamp: Utc::now(),
        });
        let play = self.state_mut()?;
        play.safe_opened = true;
        play.add_clue(clue);
        Ok(Phase::Playing)
    }

    pub(super) fn choose_room(&mut self, input: &str, out: &mut Vec<String>) -> StoryResult<Phase> {
        match RoomId::from_choice(input) {
            Some(to) => {
                let play = self.state_mut()?;
                let from = play.room;
                play.room = to;
                let line = self.enter_room_line(self.state()?);
                out.push(line);
                self.record(JournalEntry::Moved {
                    from,
                    to,
                    timestamp: Utc::now(),
                });
            }
            None => out.push("Invalid room choice.".to_string()),
        }

        let room = self.state()?.room;
        for character in self.cast.in_room(room) {
            out.push(character.perform_action());
        }
        Ok(Phase::Playing)
    }

    fn list_suspects(&self, out: &mut Vec<String>) -> StoryResult<Phase> {
        let found = self.state()?.clues().len();
        if found < self.config.arrest_threshold {
            out.push("You need to find more clues before you arrest someone".to_string());
            return Ok(Phase::Playing);
        }
        for (i, kind) in CharacterKind::SUSPECTS.iter().enumerate() {
            out.push(format!("{}.{}", i + 1, self.cast.get(*kind).name));
        }
        Ok(Phase::ChooseSuspect)
    }

    pub(super) fn choose_suspect(
        &mut self,
        input: &str,
        out: &mut Vec<String>,
    ) -> StoryResult<Phase> {
        let accused = parse_slot(input).and_then(|i| CharacterKind::SUSPECTS.get(i).copied());
        let ending = match accused {
            Some(CharacterKind::Boyfriend) => Ending::CaseClosed,
            _ => Ending::WrongArrest,
        };
        self.finish(ending, out)
    }
}
