use crate::constants::*;
use crate::error::SixgunError;
use anchor_lang::prelude::*;

// turn: false -> player one acts, true -> player two
#[account]
pub struct Session {
    pub player_one: Pubkey,              // 32
    pub player_two: Pubkey,              // 32
    pub mint: Pubkey,                    // 32
    pub stake_each: u64,                 // 8
    pub turn: bool,                      // 1
    pub trigger: u8,                     // 1
    pub load: [bool; CHAMBER_COUNT],     // 1 * CHAMBER_COUNT
    pub state: SessionState,             // 1 + 32
    pub bump: u8,                        // 1
    pub vault_bump: u8,                  // 1
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum SessionState {
    Active,
    Won { winner: Pubkey },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    Survived,
    Fatal {
        shooter: Pubkey,
        target: Pubkey,
        winner: Pubkey,
    },
}

/// Full read surface of a session, in one borsh-serializable stamp.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, PartialEq, Eq, Debug)]
pub struct SessionView {
    pub player_one: Pubkey,
    pub player_two: Pubkey,
    pub mint: Pubkey,
    pub stake_each: u64,
    pub turn: bool,
    pub trigger: u8,
    pub load: [bool; CHAMBER_COUNT],
    pub state: SessionState,
}

impl Session {
    pub const SPACE: usize = 8 + (32 * 3) + 8 + 1 + 1 + CHAMBER_COUNT + (1 + 32) + 1 + 1;

    pub fn start(
        &mut self,
        player_one: Pubkey,
        player_two: Pubkey,
        mint: Pubkey,
        stake_each: u64,
        load: [bool; CHAMBER_COUNT],
        bump: u8,
        vault_bump: u8,
    ) -> Result<()> {
        require!(!self.is_started(), SixgunError::SessionAlreadyStarted);

        self.player_one = player_one;
        self.player_two = player_two;
        self.mint = mint;
        self.stake_each = stake_each;
        self.turn = false;
        self.trigger = 0;
        self.load = load;
        self.state = SessionState::Active;
        self.bump = bump;
        self.vault_bump = vault_bump;
        Ok(())
    }

    pub fn assert_turn(&self, signer: &Pubkey) -> Result<()> {
        require_keys_eq!(*signer, self.current_player(), SixgunError::NotPlayersTurn);
        Ok(())
    }

    /// Pull the trigger on the current chamber. On a lethal chamber the
    /// target loses, the other player wins, and the session freezes; the
    /// trigger and turn are only advanced on a survived shot.
    pub fn shoot(&mut self, target: Pubkey) -> Result<ShotOutcome> {
        require!(self.is_active(), SixgunError::SessionAlreadyOver);
        require!(
            target == self.player_one || target == self.player_two,
            SixgunError::InvalidTarget
        );

        let chamber = *self
            .load
            .get(self.trigger as usize)
            .ok_or(error!(SixgunError::InternalGameError))?;

        if chamber {
            let shooter = self.current_player();
            let winner = if target == self.player_one {
                self.player_two
            } else {
                self.player_one
            };
            self.state = SessionState::Won { winner };
            Ok(ShotOutcome::Fatal {
                shooter,
                target,
                winner,
            })
        } else {
            self.trigger += 1;
            self.turn = !self.turn;
            Ok(ShotOutcome::Survived)
        }
    }

    pub fn pass(&mut self) -> Result<()> {
        require!(self.is_active(), SixgunError::SessionAlreadyOver);
        self.turn = !self.turn;
        Ok(())
    }

    pub fn current_player(&self) -> Pubkey {
        if self.turn {
            self.player_two
        } else {
            self.player_one
        }
    }

    pub fn other_player(&self) -> Pubkey {
        if self.turn {
            self.player_one
        } else {
            self.player_two
        }
    }

    pub fn is_active(&self) -> bool {
        self.state == SessionState::Active
    }

    pub fn is_started(&self) -> bool {
        self.player_one != Pubkey::default()
    }

    pub fn snapshot(&self) -> SessionView {
        SessionView {
            player_one: self.player_one,
            player_two: self.player_two,
            mint: self.mint,
            stake_each: self.stake_each,
            turn: self.turn,
            trigger: self.trigger,
            load: self.load,
            state: self.state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank() -> Session {
        Session {
            player_one: Pubkey::default(),
            player_two: Pubkey::default(),
            mint: Pubkey::default(),
            stake_each: 0,
            turn: false,
            trigger: 0,
            load: [false; CHAMBER_COUNT],
            state: SessionState::Active,
            bump: 0,
            vault_bump: 0,
        }
    }

    fn started(load: [bool; CHAMBER_COUNT]) -> (Session, Pubkey, Pubkey) {
        let p1 = Pubkey::new_unique();
        let p2 = Pubkey::new_unique();
        let mut session = blank();
        session
            .start(p1, p2, Pubkey::new_unique(), 1_000, load, 254, 253)
            .unwrap();
        (session, p1, p2)
    }

    #[test]
    fn start_initializes_record() {
        let load = [false, false, true, false, false, false];
        let (session, p1, p2) = started(load);
        assert_eq!(session.player_one, p1);
        assert_eq!(session.player_two, p2);
        assert_eq!(session.trigger, 0);
        assert!(!session.turn);
        assert_eq!(session.current_player(), p1);
        assert_eq!(session.other_player(), p2);
        assert_eq!(session.state, SessionState::Active);
        assert_eq!(session.load, load);
        assert!(session.is_started());
    }

    #[test]
    fn start_twice_is_rejected() {
        let load = [false, false, true, false, false, false];
        let (mut session, p1, p2) = started(load);
        let before = session.snapshot();
        let err = session
            .start(p1, p2, Pubkey::new_unique(), 500, load, 1, 1)
            .unwrap_err();
        assert_eq!(err, SixgunError::SessionAlreadyStarted.into());
        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn wrong_signer_cannot_act() {
        let (session, p1, p2) = started([false, true, false, false, false, false]);
        assert_eq!(
            session.assert_turn(&p2).unwrap_err(),
            SixgunError::NotPlayersTurn.into()
        );
        assert_eq!(
            session.assert_turn(&Pubkey::new_unique()).unwrap_err(),
            SixgunError::NotPlayersTurn.into()
        );
        assert!(session.assert_turn(&p1).is_ok());
    }

    #[test]
    fn survived_shot_advances_and_flips() {
        let (mut session, _p1, p2) = started([false, false, false, false, false, true]);
        assert_eq!(session.shoot(p2).unwrap(), ShotOutcome::Survived);
        assert_eq!(session.trigger, 1);
        assert!(session.turn);
        assert_eq!(session.current_player(), p2);
        assert!(session.is_active());
    }

    #[test]
    fn lethal_shot_at_opponent_wins_for_shooter() {
        let (mut session, p1, p2) = started([true, false, false, false, false, false]);
        let outcome = session.shoot(p2).unwrap();
        assert_eq!(
            outcome,
            ShotOutcome::Fatal {
                shooter: p1,
                target: p2,
                winner: p1
            }
        );
        assert_eq!(session.state, SessionState::Won { winner: p1 });
        // terminal shot leaves trigger and turn untouched
        assert_eq!(session.trigger, 0);
        assert!(!session.turn);
    }

    #[test]
    fn lethal_shot_at_self_wins_for_opponent() {
        let (mut session, p1, p2) = started([true, false, false, false, false, false]);
        let outcome = session.shoot(p1).unwrap();
        assert_eq!(
            outcome,
            ShotOutcome::Fatal {
                shooter: p1,
                target: p1,
                winner: p2
            }
        );
        assert_eq!(session.state, SessionState::Won { winner: p2 });
    }

    #[test]
    fn outsider_target_is_rejected() {
        let (mut session, _p1, _p2) = started([true, false, false, false, false, false]);
        assert_eq!(
            session.shoot(Pubkey::new_unique()).unwrap_err(),
            SixgunError::InvalidTarget.into()
        );
        assert_eq!(session.trigger, 0);
        assert!(session.is_active());
    }

    #[test]
    fn terminal_session_rejects_everything() {
        let (mut session, _p1, p2) = started([true, false, false, false, false, false]);
        session.shoot(p2).unwrap();
        let won = session.state;
        assert_eq!(
            session.shoot(p2).unwrap_err(),
            SixgunError::SessionAlreadyOver.into()
        );
        assert_eq!(
            session.pass().unwrap_err(),
            SixgunError::SessionAlreadyOver.into()
        );
        assert_eq!(session.state, won);
        assert_eq!(session.trigger, 0);
    }

    #[test]
    fn pass_flips_turn_only() {
        let (mut session, p1, p2) = started([false, true, false, false, false, false]);
        session.pass().unwrap();
        assert!(session.turn);
        assert_eq!(session.current_player(), p2);
        assert_eq!(session.trigger, 0);
        session.pass().unwrap();
        assert_eq!(session.current_player(), p1);
        assert!(session.is_active());
    }

    #[test]
    fn exhausted_load_is_an_internal_error() {
        // an all-blank load cannot come out of the generator; the bounds
        // guard still has to hold if one ever appears
        let (mut session, p1, _p2) = started([false; CHAMBER_COUNT]);
        for _ in 0..CHAMBER_COUNT {
            assert_eq!(session.shoot(p1).unwrap(), ShotOutcome::Survived);
        }
        assert_eq!(
            session.shoot(p1).unwrap_err(),
            SixgunError::InternalGameError.into()
        );
    }

    #[test]
    fn full_game_walk() {
        let (mut session, p1, p2) = started([false, false, false, true, false, false]);

        // p1 survives chamber 0
        assert_eq!(session.shoot(p2).unwrap(), ShotOutcome::Survived);
        assert_eq!(session.current_player(), p2);

        // p2 passes the gun straight back
        session.pass().unwrap();
        assert_eq!(session.current_player(), p1);
        assert_eq!(session.trigger, 1);

        // p1 survives chamber 1, p2 survives chamber 2
        assert_eq!(session.shoot(p1).unwrap(), ShotOutcome::Survived);
        assert_eq!(session.shoot(p1).unwrap(), ShotOutcome::Survived);
        assert_eq!(session.trigger, 3);
        assert_eq!(session.current_player(), p1);

        // chamber 3 is hot: p1 aims at p2 and takes the pot
        assert_eq!(
            session.shoot(p2).unwrap(),
            ShotOutcome::Fatal {
                shooter: p1,
                target: p2,
                winner: p1
            }
        );
        assert_eq!(session.state, SessionState::Won { winner: p1 });
    }
}
