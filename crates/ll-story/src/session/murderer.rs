//! Murderer handlers: walk the corridor of rooms, collect tools, kill, escape.

use chrono::Utc;
use log::debug;

use ll_core::{RoomId, ToolKind};

use super::{GameSession, Phase};
use crate::command::{Answer, MurdererAction};
use crate::ending::Ending;
use crate::error::StoryResult;
use crate::journal::JournalEntry;
use crate::state::Victim;

impl GameSession {
    pub(super) fn murderer_action(
        &mut self,
        input: &str,
        out: &mut Vec<String>,
    ) -> StoryResult<Phase> {
        match MurdererAction::parse(input) {
            MurdererAction::Menu => self.open_main_menu(out),
            MurdererAction::Examine => self.examine_for_tool(out),
            MurdererAction::UseTool => self.list_tools(out),
            MurdererAction::Forward => self.move_forward(out),
            MurdererAction::Back => self.move_back(out),
            MurdererAction::Unknown => {
                out.push("Invalid choice.".to_string());
                Ok(Phase::Playing)
            }
        }
    }

    fn examine_for_tool(&mut self, out: &mut Vec<String>) -> StoryResult<Phase> {
        let room = self.state()?.room;
        if self.lodge.room(room).is_examined() {
            out.push("You have already examined this room".to_string());
            return Ok(Phase::Playing);
        }

        out.push("You Examine the Room".to_string());
        let Some(tool) = self.lodge.tool_in_mut(room) else {
            out.push("You find nothing in this room.".to_string());
            return Ok(Phase::Playing);
        };

        tool.mark_found();
        let kind = tool.kind;
        out.push(format!("You found a {}", tool.name));
        self.lodge.room_mut(room).examine();
        self.state_mut()?.add_tool(kind);
        self.record(JournalEntry::ToolFound {
            tool: kind,
            room,
            timestamp: Utc::now(),
        });
        Ok(Phase::Playing)
    }

    fn list_tools(&self, out: &mut Vec<String>) -> StoryResult<Phase> {
        let play = self.state()?;
        if play.tools().is_empty() {
            out.push("You have no tools to use.".to_string());
            return Ok(Phase::Playing);
        }
        for (i, kind) in play.tools().iter().enumerate() {
            let tool = self.lodge.tool(*kind)?;
            out.push(format!("{}. {}: {}", i + 1, tool.name, tool.description));
        }
        Ok(Phase::ChooseTool)
    }

    /// Apply the selected tool to the current room.
    ///
    /// The slot is resolved against the inventory as listed, so a tool's
    /// effect does not depend on the order the tools were found in.
    pub(super) fn choose_tool(&mut self, input: &str, out: &mut Vec<String>) -> StoryResult<Phase> {
        let (room, victim, selected) = {
            let play = self.state()?;
            (play.room, play.victim, play.tool_at_slot(input))
        };
        debug!("tool {selected:?} selected in {room}");

        match (room, selected) {
            (RoomId::PortaPotty, Some(ToolKind::KitchenKnife)) if victim == Victim::Alive => {
                out.push("You stab Valerie Multiple times now you must escape".to_string());
                self.use_tool(ToolKind::KitchenKnife, room);
                self.change_victim(Victim::Dead, room)?;
            }
            (RoomId::PortaPotty, _) if victim == Victim::Alive => {
                out.push("You have no tools to kill Valerie with..".to_string());
                return self.finish(Ending::Caught, out);
            }
            (RoomId::Woods, Some(ToolKind::Flashlight)) => {
                out.push("You can now navigate through the woods".to_string());
                self.state_mut()?.flashlight_lit = true;
                self.use_tool(ToolKind::Flashlight, room);
            }
            (RoomId::Bar, Some(ToolKind::PoisonousBerry)) if victim == Victim::Alive => {
                out.push("You have spiked Valerie's drink".to_string());
                out.push(
                    "Valerie comes back and starts choking on her drink, you must escape"
                        .to_string(),
                );
                self.use_tool(ToolKind::PoisonousBerry, room);
                self.change_victim(Victim::Choked, room)?;
            }
            (RoomId::SlipperySlope, Some(ToolKind::CarKeys)) if victim.is_incapacitated() => {
                out.push("You use the keys to start the strangers car".to_string());
                self.use_tool(ToolKind::CarKeys, room);
                return self.finish(Ending::Escaped, out);
            }
            _ => out.push("Tool cannot be used".to_string()),
        }
        Ok(Phase::Playing)
    }

    fn use_tool(&mut self, tool: ToolKind, room: RoomId) {
        self.record(JournalEntry::ToolUsed {
            tool,
            room,
            timestamp: Utc::now(),
        });
    }

    fn change_victim(&mut self, victim: Victim, room: RoomId) -> StoryResult<()> {
        self.state_mut()?.victim = victim;
        self.record(JournalEntry::VictimChanged {
            victim,
            room,
            timestamp: Utc::now(),
        });
        Ok(())
    }

    /// Step toward the party, unless the current room blocks the way.
    fn move_forward(&mut self, out: &mut Vec<String>) -> StoryResult<Phase> {
        let play = self.state()?;
        let room = play.room;
        let blocked = match room {
            RoomId::CouplesRoom if !play.has_tool(ToolKind::KitchenKnife) => {
                Some("You need to find a weapon before continuing")
            }
            RoomId::Woods if !play.flashlight_lit => {
                Some("The woods are too dark to navigate, you need to use a flashlight")
            }
            RoomId::Bar if play.victim == Victim::Alive => Some(
                "You decide to wait for Valerie, maybe you can use one of your tools while she is gone",
            ),
            _ => None,
        };
        if let Some(reason) = blocked {
            out.push(reason.to_string());
            return Ok(Phase::Playing);
        }

        let Some(to) = room.toward_exit() else {
            out.push("You cannot move forward a room".to_string());
            return Ok(Phase::Playing);
        };
        self.walk(to, out)?;

        let victim = self.state()?.victim;
        match to {
            RoomId::Bar if victim == Victim::Alive => {
                out.push("You see Valerie Kiss another guy, You get really angry".to_string());
                out.push("She then walks away to use the bathroom.".to_string());
                Ok(Phase::ConfirmPursuit)
            }
            RoomId::SlipperySlope => {
                out.push("You must now escape using one of your tools.".to_string());
                Ok(Phase::Playing)
            }
            _ => Ok(Phase::Playing),
        }
    }

    pub(super) fn confirm_pursuit(
        &mut self,
        input: &str,
        out: &mut Vec<String>,
    ) -> StoryResult<Phase> {
        if Answer::parse(input) != Answer::Yes {
            out.push("You decide not to pursue Valerie".to_string());
            return Ok(Phase::Playing);
        }
        self.walk(RoomId::PortaPotty, out)?;
        out.push("Valerie is shocked to see you as you enter the Porta Potty behind her".to_string());
        self.list_tools(out)
    }

    /// Step back toward the couple's room, spending an escape attempt while
    /// the victim is still alive.
    fn move_back(&mut self, out: &mut Vec<String>) -> StoryResult<Phase> {
        let play = self.state()?;
        let (room, victim) = (play.room, play.victim);
        if victim == Victim::Alive && play.escape_attempts == 0 {
            return self.finish(Ending::Caught, out);
        }
        let Some(to) = room.toward_home() else {
            out.push("You cannot move back a room".to_string());
            return Ok(Phase::Playing);
        };
        if room == RoomId::SlipperySlope {
            return self.finish(Ending::Caught, out);
        }

        if victim == Victim::Alive {
            let play = self.state_mut()?;
            play.escape_attempts -= 1;
            let left = play.escape_attempts;
            out.push(format!("You can move back {left} times before getting caught"));
        }
        self.walk(to, out)?;

        if to == RoomId::CouplesRoom && victim.is_incapacitated() {
            return self.finish(Ending::Escaped, out);
        }
        Ok(Phase::Playing)
    }

    fn walk(&mut self, to: RoomId, out: &mut Vec<String>) -> StoryResult<()> {
        let play = self.state_mut()?;
        let from = play.room;
        play.room = to;
        let room = self.lodge.room(to);
        out.push(format!("You enter the {}. Description:{}", room.name, room.description));
        self.record(JournalEntry::Moved {
            from,
            to,
            timestamp: Utc::now(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::config::StoryConfig;
    use crate::ending::Ending;
    use crate::journal::JournalEntry;
    use crate::session::tests::{feed, started};
    use crate::session::{GameSession, Phase};
    use crate::state::Victim;
    use ll_core::{RoomId, ToolKind};

    /// Knife, flashlight, berry collected and standing at the bar with the
    /// pursuit question pending.
    fn at_the_bar() -> GameSession {
        let mut session = started("2");
        feed(&mut session, &["e", "f", "e", "f", "e", "u", "2", "f"]);
        assert_eq!(session.play().unwrap().room, RoomId::Bar);
        assert_eq!(session.phase(), Phase::ConfirmPursuit);
        session
    }

    #[test]
    fn weapon_needed_to_leave() {
        let mut session = started("2");
        let out = session.process("f").unwrap();
        assert_eq!(out, vec!["You need to find a weapon before continuing"]);
        assert_eq!(session.play().unwrap().room, RoomId::CouplesRoom);

        let out = session.process("e").unwrap();
        assert_eq!(out, vec!["You Examine the Room", "You found a Kitchen knife"]);
        let out = session.process("e").unwrap();
        assert_eq!(out, vec!["You have already examined this room"]);

        let out = session.process("f").unwrap();
        assert_eq!(
            out,
            vec!["You enter the Lonely Lodge. Description:A cosy and warm welcoming lodge."]
        );
    }

    #[test]
    fn cannot_go_back_from_the_couples_room() {
        let mut session = started("2");
        let out = session.process("b").unwrap();
        assert_eq!(out, vec!["You cannot move back a room"]);
        assert_eq!(session.play().unwrap().escape_attempts, 3);
    }

    #[test]
    fn woods_are_dark_until_the_flashlight_is_used() {
        let mut session = started("2");
        feed(&mut session, &["e", "f", "e", "f"]);
        let out = session.process("f").unwrap();
        assert_eq!(
            out,
            vec!["The woods are too dark to navigate, you need to use a flashlight"]
        );

        let out = session.process("u").unwrap();
        assert_eq!(
            out,
            vec![
                "1. Kitchen knife: A perfect weapon for murdering",
                "2. Flashlight: Can be used in dark places",
            ]
        );
        let out = session.process("2").unwrap();
        assert_eq!(out, vec!["You can now navigate through the woods"]);
        assert!(session.play().unwrap().flashlight_lit);
    }

    #[test]
    fn flashlight_outside_the_woods_does_nothing() {
        let mut session = started("2");
        feed(&mut session, &["e", "f", "e"]);
        let out = feed(&mut session, &["u", "2"]);
        assert_eq!(out.last().unwrap(), "Tool cannot be used");
        assert!(!session.play().unwrap().flashlight_lit);
    }

    #[test]
    fn use_with_no_tools() {
        let mut session = started("2");
        let out = session.process("u").unwrap();
        assert_eq!(out, vec!["You have no tools to use."]);
        assert_eq!(session.phase(), Phase::Playing);
    }

    #[test]
    fn stab_in_the_porta_potty_then_drive_away() {
        let mut session = at_the_bar();
        let out = session.process("yes").unwrap();
        assert_eq!(
            out[1],
            "Valerie is shocked to see you as you enter the Porta Potty behind her"
        );
        assert_eq!(session.phase(), Phase::ChooseTool);

        let out = session.process("1").unwrap();
        assert_eq!(out, vec!["You stab Valerie Multiple times now you must escape"]);
        assert_eq!(session.play().unwrap().victim, Victim::Dead);

        let out = feed(&mut session, &["u", "1"]);
        assert_eq!(out.last().unwrap(), "Tool cannot be used");

        let out = session.process("f").unwrap();
        assert_eq!(out.last().unwrap(), "You must now escape using one of your tools.");
        let out = session.process("f").unwrap();
        assert_eq!(out, vec!["You cannot move forward a room"]);

        feed(&mut session, &["e", "u"]);
        let out = session.process("4").unwrap();
        assert_eq!(out[0], "You use the keys to start the strangers car");
        assert_eq!(session.phase(), Phase::ConfirmRestart(Ending::Escaped));
    }

    #[test]
    fn wrong_tool_in_the_porta_potty_is_caught() {
        let mut session = at_the_bar();
        session.process("yes").unwrap();
        let out = session.process("3").unwrap();
        assert_eq!(out[0], "You have no tools to kill Valerie with..");
        assert_eq!(session.phase(), Phase::ConfirmRestart(Ending::Caught));
    }

    #[test]
    fn poison_then_walk_home() {
        let mut session = at_the_bar();
        let out = session.process("no").unwrap();
        assert_eq!(out, vec!["You decide not to pursue Valerie"]);

        let out = session.process("f").unwrap();
        assert!(out[0].starts_with("You decide to wait for Valerie"));

        let out = feed(&mut session, &["u", "3"]);
        assert_eq!(
            &out[out.len() - 2..],
            &[
                "You have spiked Valerie's drink",
                "Valerie comes back and starts choking on her drink, you must escape",
            ]
        );
        assert_eq!(session.play().unwrap().victim, Victim::Choked);

        let out = feed(&mut session, &["b", "b"]);
        assert!(!out.iter().any(|l| l.contains("times before getting caught")));
        let out = session.process("b").unwrap();
        assert!(out.contains(&"You have Escaped!".to_string()));
        assert_eq!(session.phase(), Phase::ConfirmRestart(Ending::Escaped));
    }

    #[test]
    fn keys_need_an_incapacitated_victim() {
        let mut session = GameSession::new(StoryConfig::default());
        feed(&mut session, &["2", "Rex", "s"]);
        {
            let play = session.play.as_mut().unwrap();
            play.room = RoomId::SlipperySlope;
            play.add_tool(ToolKind::CarKeys);
        }
        let out = feed(&mut session, &["u", "1"]);
        assert_eq!(out.last().unwrap(), "Tool cannot be used");
        assert_eq!(session.phase(), Phase::Playing);
    }

    #[test]
    fn back_moves_are_counted_while_she_lives() {
        let mut session = started("2");
        feed(&mut session, &["e", "f"]);
        for left in [2, 1, 0] {
            let out = session.process("b").unwrap();
            assert_eq!(out[0], format!("You can move back {left} times before getting caught"));
            assert_eq!(session.play().unwrap().escape_attempts, left);
            session.process("f").unwrap();
        }
        let out = session.process("b").unwrap();
        assert_eq!(out, vec!["You have been caught!"]);
        assert_eq!(session.phase(), Phase::ConfirmRestart(Ending::Caught));
    }

    #[test]
    fn back_from_the_slope_is_caught() {
        let mut session = at_the_bar();
        feed(&mut session, &["yes", "1", "f"]);
        assert_eq!(session.play().unwrap().room, RoomId::SlipperySlope);
        session.process("b").unwrap();
        assert_eq!(session.phase(), Phase::ConfirmRestart(Ending::Caught));
    }

    #[test]
    fn journal_tracks_the_kill() {
        let mut session = at_the_bar();
        feed(&mut session, &["yes", "1"]);
        let entries = session.journal().entries();
        assert!(entries.iter().any(|e| matches!(
            e,
            JournalEntry::VictimChanged {
                victim: Victim::Dead,
                room: RoomId::PortaPotty,
                ..
            }
        )));
        let found = entries
            .iter()
            .filter(|e| matches!(e, JournalEntry::ToolFound { .. }))
            .count();
        assert_eq!(found, 3);
    }
}
