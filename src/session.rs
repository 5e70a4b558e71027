//! Fixed-frame driver for one encounter.
//!
//! Each `frame` polls at most one key, feeds it to the combat engine,
//! turns the resulting events into effects, redraws the combat screen if
//! anything changed, and finally ticks and draws the effects.

use log::debug;

use crate::combat::{render_combat, CombatEngine, CombatState};
use crate::deck::{Deck, DeckService};
use crate::enemy::{EnemyService, Opponent};
use crate::fx::{cue, EffectScheduler};
use crate::ui::{Canvas, InputSource, Key};

/// An encounter plus its effect pool.
///
/// ## Example
///
/// ```
/// use ccg_combat::cards::starter::{starter_catalog, starter_deck};
/// use ccg_combat::combat::{CombatEngine, CombatState};
/// use ccg_combat::core::CombatConfig;
/// use ccg_combat::enemy::{starter_bestiary, SLIME};
/// use ccg_combat::session::Session;
/// use ccg_combat::ui::{CharGrid, ScriptedInput};
///
/// let catalog = starter_catalog();
/// let combat = CombatEngine::standard(
///     &catalog,
///     CombatConfig::default().with_seed(7),
///     starter_bestiary(),
///     starter_deck(),
///     SLIME,
/// )
/// .unwrap();
///
/// let mut session = Session::new(combat);
/// let mut input = ScriptedInput::from_keys("e");
/// let mut screen = CharGrid::screen();
///
/// assert_eq!(session.frame(&mut input, &mut screen), CombatState::PlayerTurn);
/// assert_eq!(session.combat().turn(), 2);
/// assert!(screen.row_contains(24, "[E]nd Turn"));
/// ```
pub struct Session<'c, D: DeckService = Deck, E: EnemyService = Opponent> {
    combat: CombatEngine<'c, D, E>,
    fx: EffectScheduler,
    /// Highlight drawn by the last redraw.
    last_highlight: Option<usize>,
    dirty: bool,
    frames: u64,
}

impl<'c, D: DeckService, E: EnemyService> Session<'c, D, E> {
    /// Wrap an initialized engine. The first frame draws the full screen.
    pub fn new(combat: CombatEngine<'c, D, E>) -> Self {
        let fx = EffectScheduler::with_capacity(combat.config().effect_capacity);
        Self {
            combat,
            fx,
            last_highlight: None,
            dirty: true,
            frames: 0,
        }
    }

    /// Run one frame and return the combat state after it.
    pub fn frame<I, C>(&mut self, input: &mut I, canvas: &mut C) -> CombatState
    where
        I: InputSource,
        C: Canvas,
    {
        self.frames += 1;

        if let Some(key) = input.poll_key() {
            self.dispatch(key);
        }

        let events = self.combat.drain_events();
        for event in &events {
            cue(event, &mut self.fx);
        }

        let highlight = self.fx.highlighted_card();
        if !events.is_empty() || highlight != self.last_highlight || self.fx.active_count() > 0 {
            self.dirty = true;
        }
        if self.dirty {
            render_combat(&self.combat, canvas, highlight);
            self.last_highlight = highlight;
            self.dirty = false;
        }

        self.fx.update(canvas);
        self.fx.render(canvas);

        self.combat.state()
    }

    fn dispatch(&mut self, key: Key) {
        if self.combat.state() != CombatState::PlayerTurn {
            debug!("ignoring {:?}, combat is over", key);
            return;
        }
        match key {
            Key::EndTurn => self.combat.end_turn(),
            Key::Digit(_) => {
                if let Some(slot) = key.hand_slot() {
                    self.combat.play_card(slot);
                }
            }
            Key::Other(_) => {}
        }
    }

    /// Force a full redraw on the next frame.
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    #[must_use]
    pub fn combat(&self) -> &CombatEngine<'c, D, E> {
        &self.combat
    }

    #[must_use]
    pub fn fx(&self) -> &EffectScheduler {
        &self.fx
    }

    /// Frames run so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::starter::{starter_catalog, STRIKE};
    use crate::cards::CardCatalog;
    use crate::core::{CombatConfig, Player};
    use crate::enemy::{starter_bestiary, SLIME};
    use crate::ui::{CharGrid, ScriptedInput};

    fn session(catalog: &CardCatalog) -> Session<'_> {
        let config = CombatConfig::default();
        let deck = Deck::stacked(vec![STRIKE; 10], config.hand_capacity());
        let mut combat = CombatEngine::new(
            catalog,
            config,
            Player::new(50, 3),
            deck,
            Opponent::new(starter_bestiary()),
        );
        combat.init(SLIME).unwrap();
        Session::new(combat)
    }

    #[test]
    fn test_first_frame_draws() {
        let catalog = starter_catalog();
        let mut session = session(&catalog);
        let mut screen = CharGrid::screen();
        session.frame(&mut ScriptedInput::new(), &mut screen);
        assert!(screen.row_contains(0, "HP:"));
        assert_eq!(session.frames(), 1);
    }

    #[test]
    fn test_play_key_cues_effects() {
        let catalog = starter_catalog();
        let mut session = session(&catalog);
        let mut screen = CharGrid::screen();
        let mut input = ScriptedInput::from_keys("1");

        session.frame(&mut input, &mut screen);
        assert_eq!(session.combat().enemy().enemy().hp, 14);
        // Highlight, shake and damage number.
        assert_eq!(session.fx().active_count(), 3);
        assert_eq!(session.fx().highlighted_card(), Some(0));
        assert!(screen.row_contains(8, "You attack for 6!"));
    }

    #[test]
    fn test_invalidate_redraws_idle_frame() {
        let catalog = starter_catalog();
        let mut session = session(&catalog);
        let mut screen = CharGrid::screen();
        let mut idle = ScriptedInput::new();
        session.frame(&mut idle, &mut screen);

        screen.clear();
        session.frame(&mut idle, &mut screen);
        assert!(!screen.row_contains(0, "HP:"));

        session.invalidate();
        session.frame(&mut idle, &mut screen);
        assert!(screen.row_contains(0, "HP:"));
    }

    #[test]
    fn test_other_keys_ignored() {
        let catalog = starter_catalog();
        let mut session = session(&catalog);
        let mut screen = CharGrid::screen();
        let mut input = ScriptedInput::from_keys("xq");
        session.frame(&mut input, &mut screen);
        session.frame(&mut input, &mut screen);
        assert_eq!(session.combat().deck().hand_len(), 5);
        assert!(session.combat().events().is_empty());
    }
}
