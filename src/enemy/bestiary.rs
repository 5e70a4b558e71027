//! Enemy definitions and their lookup table.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::intent::Intent;

/// Identifier for an enemy definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnemyId(pub u8);

impl EnemyId {
    /// Create a new enemy ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for EnemyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Enemy({})", self.0)
    }
}

/// Static enemy data.
///
/// `pattern` is cycled in order, one intent per enemy turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyDefinition {
    pub id: EnemyId,
    pub name: String,
    pub max_hp: u32,
    pub pattern: SmallVec<[Intent; 4]>,
}

impl EnemyDefinition {
    /// Create a definition. An empty pattern is replaced by `Defend 0`.
    #[must_use]
    pub fn new(
        id: EnemyId,
        name: impl Into<String>,
        max_hp: u32,
        pattern: impl IntoIterator<Item = Intent>,
    ) -> Self {
        let mut pattern: SmallVec<[Intent; 4]> = pattern.into_iter().collect();
        if pattern.is_empty() {
            pattern.push(Intent::defend(0));
        }
        Self {
            id,
            name: name.into(),
            max_hp,
            pattern,
        }
    }

    /// The intent used on the `step`-th enemy turn.
    #[must_use]
    pub fn intent_at(&self, step: usize) -> Intent {
        self.pattern[step % self.pattern.len()]
    }
}

/// Lookup table of enemy definitions.
#[derive(Clone, Debug, Default)]
pub struct Bestiary {
    enemies: FxHashMap<EnemyId, EnemyDefinition>,
}

impl Bestiary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an enemy definition.
    ///
    /// Panics if an enemy with the same ID already exists.
    pub fn register(&mut self, enemy: EnemyDefinition) {
        if self.enemies.contains_key(&enemy.id) {
            panic!("Enemy with ID {:?} already registered", enemy.id);
        }
        self.enemies.insert(enemy.id, enemy);
    }

    #[must_use]
    pub fn get(&self, id: EnemyId) -> Option<&EnemyDefinition> {
        self.enemies.get(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }
}

impl FromIterator<EnemyDefinition> for Bestiary {
    fn from_iter<I: IntoIterator<Item = EnemyDefinition>>(iter: I) -> Self {
        let mut bestiary = Self::new();
        for enemy in iter {
            bestiary.register(enemy);
        }
        bestiary
    }
}

pub const SLIME: EnemyId = EnemyId::new(1);
pub const CULTIST: EnemyId = EnemyId::new(2);
pub const GOLEM: EnemyId = EnemyId::new(3);

/// The default enemies.
#[must_use]
pub fn starter_bestiary() -> Bestiary {
    [
        EnemyDefinition::new(
            SLIME,
            "Slime",
            20,
            [Intent::attack(5), Intent::defend(4), Intent::attack(7)],
        ),
        EnemyDefinition::new(CULTIST, "Cultist", 30, [Intent::attack(6), Intent::attack(8)]),
        EnemyDefinition::new(GOLEM, "Golem", 45, [Intent::defend(8), Intent::attack(12)]),
    ]
    .into_iter()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_cycles() {
        let def = EnemyDefinition::new(
            EnemyId::new(1),
            "Test",
            10,
            [Intent::attack(1), Intent::defend(2)],
        );
        assert_eq!(def.intent_at(0), Intent::attack(1));
        assert_eq!(def.intent_at(1), Intent::defend(2));
        assert_eq!(def.intent_at(2), Intent::attack(1));
    }

    #[test]
    fn test_empty_pattern_gets_placeholder() {
        let def = EnemyDefinition::new(EnemyId::new(9), "Dummy", 10, std::iter::empty());
        assert_eq!(def.intent_at(3), Intent::defend(0));
    }

    #[test]
    fn test_starter_bestiary() {
        let bestiary = starter_bestiary();
        assert_eq!(bestiary.len(), 3);
        assert_eq!(bestiary.get(SLIME).unwrap().max_hp, 20);
        assert!(bestiary.get(EnemyId::new(200)).is_none());
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_enemy_panics() {
        let mut bestiary = starter_bestiary();
        bestiary.register(EnemyDefinition::new(SLIME, "Again", 1, std::iter::empty()));
    }
}
