//! Fixed-capacity effect pool.
//!
//! Slots are allocated once. A new effect takes the first free slot; when
//! every slot is busy the request is dropped. `update` advances every
//! timer by one tick and `render` draws the current state without
//! touching it, so a frame is always `update` then `render`.

use log::{trace, warn};

use crate::ui::{Canvas, Color, Region};

use super::effect::{Effect, EffectHandle, EffectKind, ShakeBackup, MAX_ACTIVE_EFFECTS, SHAKE_BACKUP_CELLS};

/// Pool of timed visual effects for one encounter.
///
/// ## Example
///
/// ```
/// use ccg_combat::fx::EffectScheduler;
/// use ccg_combat::ui::{CharGrid, Color, Region};
///
/// let mut fx = EffectScheduler::with_capacity(1);
/// let mut screen = CharGrid::screen();
///
/// assert!(fx.add_flash(Region::new(0, 0, 4, 1), Color::RED).is_some());
/// assert!(fx.add_card_highlight(2).is_none()); // pool full
///
/// for _ in 0..6 {
///     fx.update(&mut screen);
///     fx.render(&mut screen);
/// }
/// assert_eq!(fx.active_count(), 0);
/// ```
#[derive(Clone, Debug)]
pub struct EffectScheduler {
    slots: Box<[Option<Effect>]>,
}

impl EffectScheduler {
    /// Create a pool with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(MAX_ACTIVE_EFFECTS)
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity].into_boxed_slice(),
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of busy slots.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    #[must_use]
    pub fn get(&self, handle: EffectHandle) -> Option<&Effect> {
        self.slots.get(handle.index())?.as_ref()
    }

    /// Active effects with their handles, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (EffectHandle, &Effect)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|effect| (EffectHandle(i), effect)))
    }

    // === Adding Effects ===

    /// Recolor `region` on even ticks for six ticks.
    pub fn add_flash(&mut self, region: Region, color: Color) -> Option<EffectHandle> {
        self.add(EffectKind::Flash { color }, region)
    }

    /// Jitter the characters in `region` for six ticks, then restore them.
    pub fn add_shake(&mut self, region: Region) -> Option<EffectHandle> {
        self.add(EffectKind::Shake { backup: None }, region)
    }

    /// Show `value` at `(x, y)` for thirty ticks.
    ///
    /// Damage dealt to the enemy is red, damage taken by the player light red.
    pub fn add_damage_number(&mut self, x: u16, y: u16, value: u8, to_enemy: bool) -> Option<EffectHandle> {
        let color = if to_enemy { Color::RED } else { Color::LIGHT_RED };
        self.add(EffectKind::DamageNumber { value, color }, Region::new(x, y, 0, 0))
    }

    /// Mark hand slot `card_index` for four ticks.
    pub fn add_card_highlight(&mut self, card_index: usize) -> Option<EffectHandle> {
        self.add(EffectKind::Highlight { card_index }, Region::default())
    }

    fn add(&mut self, kind: EffectKind, region: Region) -> Option<EffectHandle> {
        let Some(index) = self.slots.iter().position(Option::is_none) else {
            warn!("effect pool full, dropping {:?}", kind.tag());
            return None;
        };
        trace!("effect {:?} added in slot {}", kind.tag(), index);
        self.slots[index] = Some(Effect::new(kind, region));
        Some(EffectHandle(index))
    }

    /// The hand slot under an active highlight, if any.
    #[must_use]
    pub fn highlighted_card(&self) -> Option<usize> {
        self.slots.iter().flatten().find_map(|effect| match effect.kind {
            EffectKind::Highlight { card_index } => Some(card_index),
            _ => None,
        })
    }

    // === Frame Steps ===

    /// Advance every active effect by one tick.
    ///
    /// Expired effects are torn down (shakes put their characters back)
    /// and their slots freed. A shake then saves its region on its first
    /// tick; cells already saved by a live shake are read from that backup,
    /// not from the jittered canvas.
    pub fn update<C: Canvas>(&mut self, canvas: &mut C) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            let Some(effect) = slot.as_mut() else {
                continue;
            };
            effect.timer = effect.timer.saturating_sub(1);

            if effect.timer == 0 {
                if let EffectKind::Shake { backup: Some(backup) } = &effect.kind {
                    restore(backup, canvas);
                }
                trace!("effect {:?} in slot {} expired", effect.tag(), index);
                *slot = None;
            }
        }

        for index in 0..self.slots.len() {
            let region = match &self.slots[index] {
                Some(Effect { kind: EffectKind::Shake { backup: None }, region, .. }) => *region,
                _ => continue,
            };
            let saved = snapshot(region, &*canvas, &self.slots);
            if let Some(Effect { kind: EffectKind::Shake { backup }, .. }) = &mut self.slots[index] {
                *backup = Some(saved);
            }
        }
    }

    /// Draw every active effect.
    pub fn render<C: Canvas>(&self, canvas: &mut C) {
        for effect in self.slots.iter().flatten() {
            match &effect.kind {
                EffectKind::Flash { color } => {
                    if effect.even_tick() {
                        recolor(effect.region, *color, canvas);
                    }
                }
                EffectKind::Shake { backup: Some(backup) } => {
                    jitter(backup, effect.even_tick(), canvas);
                }
                EffectKind::Shake { backup: None } | EffectKind::Highlight { .. } => {}
                EffectKind::DamageNumber { value, color } => {
                    canvas.print_number(effect.region.x, effect.region.y, *value, *color);
                }
            }
        }
    }

    /// Drop every effect, putting back anything a shake has moved.
    pub fn reset<C: Canvas>(&mut self, canvas: &mut C) {
        for slot in self.slots.iter_mut() {
            if let Some(Effect { kind: EffectKind::Shake { backup: Some(backup) }, .. }) = slot {
                restore(backup, canvas);
            }
            *slot = None;
        }
    }
}

impl Default for EffectScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// Save the characters under `region`, clipped to the canvas and the cell
/// bound. Cells covered by a backup in `live` come from that backup.
fn snapshot<C: Canvas>(region: Region, canvas: &C, live: &[Option<Effect>]) -> ShakeBackup {
    let mut region = region.clipped_to(canvas.width(), canvas.height());
    region.width = region.width.min(SHAKE_BACKUP_CELLS as u16);
    if region.width > 0 {
        let rows = SHAKE_BACKUP_CELLS / usize::from(region.width);
        region.height = region.height.min(rows as u16);
    }

    let mut cells = Vec::with_capacity(region.cells());
    for row in region.y..region.y + region.height {
        for col in region.x..region.x + region.width {
            let saved = live.iter().flatten().find_map(|effect| match &effect.kind {
                EffectKind::Shake { backup: Some(backup) } => backup.char_at(col, row),
                _ => None,
            });
            cells.push(saved.or_else(|| canvas.char_at(col, row)).unwrap_or(b' '));
        }
    }
    ShakeBackup { region, cells }
}

fn restore<C: Canvas>(backup: &ShakeBackup, canvas: &mut C) {
    let Region { x, y, height, .. } = backup.region;
    for row in 0..height {
        for (col, &ch) in backup.row(row).iter().enumerate() {
            canvas.set_char(x + col as u16, y + row, ch);
        }
    }
}

/// Draw the saved characters one cell right (`right`) or left.
///
/// The edge cell the row moves away from keeps its original character.
fn jitter<C: Canvas>(backup: &ShakeBackup, right: bool, canvas: &mut C) {
    let Region { x, y, height, .. } = backup.region;
    for row in 0..height {
        let saved = backup.row(row);
        if saved.len() < 2 {
            continue;
        }
        for col in 0..saved.len() {
            let source = if right {
                col.saturating_sub(1)
            } else {
                (col + 1).min(saved.len() - 1)
            };
            canvas.set_char(x + col as u16, y + row, saved[source]);
        }
    }
}

fn recolor<C: Canvas>(region: Region, color: Color, canvas: &mut C) {
    let region = region.clipped_to(canvas.width(), canvas.height());
    for row in region.y..region.y + region.height {
        for col in region.x..region.x + region.width {
            canvas.set_color(col, row, color);
        }
    }
}
