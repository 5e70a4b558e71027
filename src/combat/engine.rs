//! The combat state machine.
//!
//! `CombatEngine` owns one encounter: the player, the deck service, the
//! enemy service and the turn state. Every call runs to completion
//! synchronously. Bad requests (empty slot, not enough energy, acting
//! after the fight is over) are ignored and reported as
//! `CombatEvent::Rejected`, never as errors.
//!
//! ## Turn Flow
//!
//! ```text
//! init ──► PlayerTurn ──play_card──► PlayerTurn ──enemy dies──► Victory
//!              ▲   │
//!              │   └─end_turn──► EnemyTurn ──player dies──► Defeat
//!              └──── start_turn ◄──┘
//! ```

use log::{debug, info};
use thiserror::Error;

use crate::abilities::{resolve, AbilityPlan, ResolveContext};
use crate::cards::{CardCatalog, CardId};
use crate::core::{CombatConfig, ConfigError, GameRng, Player};
use crate::deck::{Deck, DeckError, DeckService};
use crate::enemy::{Bestiary, EnemyId, EnemyService, Opponent};

use super::event::{CombatEvent, Rejection};
use super::state::CombatState;

/// Errors raised while setting up an encounter.
#[derive(Debug, Error)]
pub enum CombatError {
    #[error("no enemy with id {0}")]
    UnknownEnemy(EnemyId),

    #[error(transparent)]
    Deck(#[from] DeckError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// One encounter's combat state machine.
///
/// ## Example
///
/// ```
/// use ccg_combat::cards::starter::{starter_catalog, starter_deck};
/// use ccg_combat::combat::{CombatEngine, CombatState};
/// use ccg_combat::core::CombatConfig;
/// use ccg_combat::deck::DeckService;
/// use ccg_combat::enemy::{starter_bestiary, SLIME};
///
/// let catalog = starter_catalog();
/// let mut combat = CombatEngine::standard(
///     &catalog,
///     CombatConfig::default().with_seed(1),
///     starter_bestiary(),
///     starter_deck(),
///     SLIME,
/// )
/// .unwrap();
///
/// assert_eq!(combat.state(), CombatState::PlayerTurn);
/// assert_eq!(combat.deck().hand_len(), 5);
///
/// combat.end_turn();
/// assert_eq!(combat.turn(), 2);
/// ```
pub struct CombatEngine<'c, D: DeckService = Deck, E: EnemyService = Opponent> {
    catalog: &'c CardCatalog,
    config: CombatConfig,
    player: Player,
    deck: D,
    enemy: E,
    state: CombatState,
    turn: u32,
    /// Events since the last `drain_events`.
    events: Vec<CombatEvent>,
    /// Latest event worth showing on the status line.
    status: Option<CombatEvent>,
}

impl<'c> CombatEngine<'c> {
    /// Build and start an encounter with the standard deck and opponent.
    pub fn standard(
        catalog: &'c CardCatalog,
        config: CombatConfig,
        bestiary: Bestiary,
        deck_list: Vec<CardId>,
        enemy: EnemyId,
    ) -> Result<Self, CombatError> {
        config.validate()?;
        let rng = GameRng::new(config.seed);
        let deck = Deck::from_catalog(catalog, deck_list, config.hand_capacity(), rng)?;
        let player = Player::new(config.player_max_hp, config.player_max_energy);

        let mut engine = Self::new(catalog, config, player, deck, Opponent::new(bestiary));
        engine.init(enemy)?;
        Ok(engine)
    }
}

impl<'c, D: DeckService, E: EnemyService> CombatEngine<'c, D, E> {
    /// Assemble an engine. Call `init` to start the encounter.
    pub fn new(catalog: &'c CardCatalog, config: CombatConfig, player: Player, deck: D, enemy: E) -> Self {
        Self {
            catalog,
            config,
            player,
            deck,
            enemy,
            state: CombatState::PlayerTurn,
            turn: 0,
            events: Vec::new(),
            status: None,
        }
    }

    /// Start an encounter against `enemy_id`.
    ///
    /// Resets the enemy and the deck, refills energy, clears block and
    /// draws the opening hand. Player hp carries over.
    pub fn init(&mut self, enemy_id: EnemyId) -> Result<(), CombatError> {
        self.enemy.init(enemy_id)?;
        self.deck.reset();
        self.player.reset_for_turn();
        self.events.clear();
        self.status = None;

        let drawn = self.deck.draw_to_hand_size(self.config.hand_size);
        self.turn = 1;
        self.state = CombatState::PlayerTurn;

        info!("encounter started against {}", self.enemy.current_name());
        self.record(CombatEvent::EncounterStarted { enemy: enemy_id });
        self.record(CombatEvent::TurnStarted { turn: self.turn, drawn });
        Ok(())
    }

    /// Begin a player turn: refill energy, clear block, redraw the hand.
    pub fn start_turn(&mut self) {
        if self.state.is_terminal() {
            self.reject(Rejection::CombatOver);
            return;
        }

        self.player.reset_for_turn();
        self.deck.discard_hand();
        let drawn = self.deck.draw_to_hand_size(self.config.hand_size);
        self.turn += 1;
        self.state = CombatState::PlayerTurn;

        debug!("turn {} started, drew {}", self.turn, drawn);
        self.record(CombatEvent::TurnStarted { turn: self.turn, drawn });
    }

    /// Play the card in hand slot `index`.
    ///
    /// Returns `true` if the card was played. On failure nothing changes
    /// except the status line.
    pub fn play_card(&mut self, index: usize) -> bool {
        if self.state.is_terminal() {
            self.reject(Rejection::CombatOver);
            return false;
        }

        let Some(card_id) = self.deck.card_at(index) else {
            self.reject(Rejection::NoSuchCard { index });
            return false;
        };
        let catalog = self.catalog;
        let Some(card) = catalog.get(card_id) else {
            self.reject(Rejection::UnknownCard { card: card_id });
            return false;
        };
        if !self.player.spend_energy(card.cost) {
            self.reject(Rejection::NotEnoughEnergy {
                cost: card.cost,
                energy: self.player.energy,
            });
            return false;
        }

        debug!("playing {} from slot {}", card.name, index);
        self.record(CombatEvent::CardPlayed {
            card: card_id,
            hand_index: index,
            cost: card.cost,
        });

        let plan = AbilityPlan::for_card(card, &self.config);
        for ability in &plan {
            let mut ctx = ResolveContext::new(&mut self.player, &mut self.deck, &mut self.enemy);
            let event = resolve(ability, &mut ctx);
            self.record(event);
        }

        self.deck.play_card(index);

        if self.enemy.is_dead() {
            self.state = CombatState::Victory;
            info!("victory on turn {}", self.turn);
            self.record(CombatEvent::Victory);
        }
        true
    }

    /// End the player turn and run the enemy turn.
    ///
    /// The enemy acts before this returns. If the player survives, the
    /// next player turn starts immediately; otherwise the combat ends in
    /// `Defeat` and the hand and energy are left as they were.
    pub fn end_turn(&mut self) {
        if self.state.is_terminal() {
            self.reject(Rejection::CombatOver);
            return;
        }

        self.state = CombatState::EnemyTurn;
        let action = self.enemy.execute_action(&mut self.player);
        self.record(CombatEvent::EnemyActed(action));

        if self.player.is_dead() {
            self.state = CombatState::Defeat;
            info!("defeat on turn {}", self.turn);
            self.record(CombatEvent::Defeat);
            return;
        }

        self.start_turn();
    }

    #[must_use]
    pub fn state(&self) -> CombatState {
        self.state
    }

    #[must_use]
    pub fn player(&self) -> &Player {
        &self.player
    }

    #[must_use]
    pub fn deck(&self) -> &D {
        &self.deck
    }

    #[must_use]
    pub fn enemy(&self) -> &E {
        &self.enemy
    }

    /// Current turn number, starting at 1.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &'c CardCatalog {
        self.catalog
    }

    /// The latest event worth showing on the status line.
    #[must_use]
    pub fn status(&self) -> Option<&CombatEvent> {
        self.status.as_ref()
    }

    /// Events recorded since the last drain.
    #[must_use]
    pub fn events(&self) -> &[CombatEvent] {
        &self.events
    }

    /// Take all events recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<CombatEvent> {
        std::mem::take(&mut self.events)
    }

    fn reject(&mut self, reason: Rejection) {
        debug!("request rejected: {:?}", reason);
        self.record(CombatEvent::Rejected(reason));
    }

    fn record(&mut self, event: CombatEvent) {
        if event.is_status() {
            self.status = Some(event);
        }
        self.events.push(event);
    }
}
