//! The version contract and the lookup structures behind it

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::types::{ActionPointer, Ammo, Miscellany, Sound, State, Thing, Weapon};

/// The capability contract implemented by every supported executable
/// version.
///
/// Index-based accessors are total on `[0, count)` of their catalog and
/// fail with [`Error::IndexOutOfRange`] outside it. Name lookups that miss
/// and subsystems a version does not support return `None`; neither is an
/// error.
pub trait DehPatch: Sync {
    /// The miscellany record of loose patchable gameplay values
    fn miscellany(&self) -> &Miscellany;

    /// Number of ammo table entries
    fn ammo_count(&self) -> usize;

    /// One ammo table entry
    fn ammo(&self, index: usize) -> Result<&Ammo>;

    /// Number of string table entries (0 when the version does not address
    /// strings by index)
    fn string_count(&self) -> usize;

    /// One string table entry
    fn string(&self, index: usize) -> Result<&str>;

    /// String-table index where sound names start, or `None` when the
    /// version does not derive sound names from the string table
    fn sound_string_index(&self) -> Option<usize>;

    /// String-table index where sprite names start, or `None` when the
    /// version does not derive sprite names from the string table
    fn sprite_string_index(&self) -> Option<usize>;

    /// Resolve a sound name (case-insensitive) to its sound table index
    fn sound_index(&self, name: &str) -> Option<usize>;

    /// Resolve a sprite name (case-insensitive) to its sprite catalog index
    fn sprite_index(&self, name: &str) -> Option<usize>;

    /// Number of sprite catalog entries
    fn sprite_count(&self) -> usize;

    /// Number of sound table entries (index 0 is the reserved silence)
    fn sound_count(&self) -> usize;

    /// One sound table entry
    fn sound(&self, index: usize) -> Result<&Sound>;

    /// Number of thing table entries
    fn thing_count(&self) -> usize;

    /// One thing table entry
    fn thing(&self, index: usize) -> Result<&Thing>;

    /// Number of weapon table entries
    fn weapon_count(&self) -> usize;

    /// One weapon table entry
    fn weapon(&self, index: usize) -> Result<&Weapon>;

    /// Number of state table entries
    fn state_count(&self) -> usize;

    /// One state table entry
    fn state(&self, index: usize) -> Result<&State>;

    /// The action-pointer index associated with a state, or `None` when the
    /// state carries no behavior hook.
    ///
    /// Pointer indices are not state indices: historically only a subset of
    /// states have executable hooks, and that subset is numbered on its own.
    fn state_action_pointer_index(&self, state_index: usize) -> Result<Option<usize>>;

    /// Number of action-pointer catalog entries
    fn action_pointer_count(&self) -> usize;

    /// One action-pointer catalog entry; `None` is a reserved placeholder
    /// slot (Boom-format catalogs mirror the state table and leave slots
    /// for actionless states)
    fn action_pointer(&self, index: usize) -> Result<Option<ActionPointer>>;
}

/// Bounds check shared by every index accessor
pub(crate) fn check_index(table: &'static str, index: usize, count: usize) -> Result<()> {
    if index < count {
        Ok(())
    } else {
        Err(Error::IndexOutOfRange {
            table,
            index,
            count,
        })
    }
}

/// A case-insensitive name-to-index map for sounds or sprites.
///
/// Keys are stored uppercased; lookups uppercase the query, matching the
/// original executables' case-insensitive name handling.
#[derive(Debug)]
pub(crate) struct NameLookup {
    map: HashMap<String, usize>,
}

impl NameLookup {
    /// Build a lookup from a string-table sub-range.
    ///
    /// Entry `i` of the sub-range maps `strings[start + i]` to index
    /// `base + i` of the target catalog (`base` is 1 for sounds, whose
    /// index 0 is the reserved silence, and 0 for sprites). The sub-range
    /// must fit inside the string table; a violation is a defect in the
    /// version's constant data.
    pub(crate) fn from_string_range(
        table: &'static str,
        strings: &[&str],
        start: usize,
        len: usize,
        base: usize,
    ) -> Result<Self> {
        let end = start.checked_add(len);
        if end.is_none_or(|end| end > strings.len()) {
            return Err(Error::StringRange {
                table,
                start,
                len,
                string_count: strings.len(),
            });
        }
        let map = strings[start..start + len]
            .iter()
            .enumerate()
            .map(|(i, name)| (name.to_uppercase(), base + i))
            .collect();
        Ok(Self { map })
    }

    /// Build a lookup from a version's own name catalog
    pub(crate) fn from_names(names: &[&str], base: usize) -> Self {
        let map = names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.to_uppercase(), base + i))
            .collect();
        Self { map }
    }

    pub(crate) fn get(&self, name: &str) -> Option<usize> {
        self.map.get(&name.to_uppercase()).copied()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }
}

/// The action-pointer catalog of the v1.9 executable family, derived from
/// the state table.
///
/// The catalog is the ordered subset of states that carry a behavior hook;
/// a pointer's index is its position in that subset, independent of the
/// state's own index.
#[derive(Debug)]
pub(crate) struct PointerCatalog {
    pointers: Vec<ActionPointer>,
    // state index -> pointer index, None for states without a hook
    by_state: Vec<Option<usize>>,
}

impl PointerCatalog {
    pub(crate) fn from_states(states: &[State]) -> Self {
        let mut pointers = Vec::new();
        let mut by_state = Vec::with_capacity(states.len());
        for state in states {
            by_state.push(state.action.map(|action| {
                pointers.push(action);
                pointers.len() - 1
            }));
        }
        Self { pointers, by_state }
    }

    pub(crate) fn len(&self) -> usize {
        self.pointers.len()
    }

    pub(crate) fn get(&self, index: usize) -> Option<ActionPointer> {
        self.pointers.get(index).copied()
    }

    pub(crate) fn pointer_index_for_state(&self, state_index: usize) -> Option<usize> {
        self.by_state.get(state_index).copied().flatten()
    }

    pub(crate) fn state_count(&self) -> usize {
        self.by_state.len()
    }
}

/// Structural validation of a version's constant tables.
///
/// The tables are hand-authored data; every cross-reference (state sprite
/// and successor, thing state and sound references, weapon states) must be
/// in bounds. A failure here is a defect in the tables themselves, so the
/// per-version constructors treat it as fatal.
pub(crate) fn validate_tables(
    states: &[State],
    things: &[Thing],
    weapons: &[Weapon],
    sprite_count: usize,
    sound_count: usize,
) -> Result<()> {
    for (i, state) in states.iter().enumerate() {
        check_index("sprite (state reference)", state.sprite_index, sprite_count)
            .map_err(|e| log_defect(i, "state", e))?;
        check_index("state (successor)", state.next_state_index, states.len())
            .map_err(|e| log_defect(i, "state", e))?;
    }
    for (i, thing) in things.iter().enumerate() {
        for state_ref in [
            thing.spawn_state,
            thing.see_state,
            thing.pain_state,
            thing.melee_state,
            thing.missile_state,
            thing.death_state,
            thing.xdeath_state,
            thing.raise_state,
        ] {
            check_index("state (thing reference)", state_ref, states.len())
                .map_err(|e| log_defect(i, "thing", e))?;
        }
        for sound_ref in [
            thing.see_sound,
            thing.attack_sound,
            thing.pain_sound,
            thing.death_sound,
            thing.active_sound,
        ] {
            check_index("sound (thing reference)", sound_ref, sound_count)
                .map_err(|e| log_defect(i, "thing", e))?;
        }
    }
    for (i, weapon) in weapons.iter().enumerate() {
        for state_ref in [
            weapon.up_state,
            weapon.down_state,
            weapon.ready_state,
            weapon.fire_state,
            weapon.flash_state,
        ] {
            check_index("state (weapon reference)", state_ref, states.len())
                .map_err(|e| log_defect(i, "weapon", e))?;
        }
    }
    Ok(())
}

fn log_defect(entry: usize, table: &str, err: Error) -> Error {
    log::error!("constant table defect in {table} entry {entry}: {err}");
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ActionPointer;

    #[test]
    fn test_check_index_bounds() {
        assert!(check_index("sound", 0, 109).is_ok());
        assert!(check_index("sound", 108, 109).is_ok());
        assert_eq!(
            check_index("sound", 109, 109),
            Err(Error::IndexOutOfRange {
                table: "sound",
                index: 109,
                count: 109,
            })
        );
    }

    #[test]
    fn test_name_lookup_from_string_range() {
        let strings = ["junk", "pistol", "shotgn", "TROO"];
        let sounds = NameLookup::from_string_range("sound", &strings, 1, 2, 1)
            .expect("range fits");
        assert_eq!(sounds.get("PISTOL"), Some(1));
        assert_eq!(sounds.get("Shotgn"), Some(2));
        assert_eq!(sounds.get("junk"), None);
        assert_eq!(sounds.len(), 2);
    }

    #[test]
    fn test_name_lookup_range_violation() {
        let strings = ["a", "b"];
        let err = NameLookup::from_string_range("sprite", &strings, 1, 2, 0)
            .expect_err("range must not fit");
        assert_eq!(
            err,
            Error::StringRange {
                table: "sprite",
                start: 1,
                len: 2,
                string_count: 2,
            }
        );
    }

    #[test]
    fn test_pointer_catalog_indexing_is_independent() {
        let blank = State {
            sprite_index: 0,
            frame: 0,
            bright: false,
            tics: -1,
            next_state_index: 0,
            action: None,
        };
        let hooked = State {
            action: Some(ActionPointer::Chase),
            ..blank
        };
        // hooks at state indices 1 and 3 get pointer indices 0 and 1
        let catalog = PointerCatalog::from_states(&[blank, hooked, blank, hooked]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.pointer_index_for_state(0), None);
        assert_eq!(catalog.pointer_index_for_state(1), Some(0));
        assert_eq!(catalog.pointer_index_for_state(3), Some(1));
        assert_eq!(catalog.get(1), Some(ActionPointer::Chase));
        assert_eq!(catalog.get(2), None);
    }
}
