//! Boom-compatible patch target
//!
//! Boom-format patches dropped the executable's string-table addressing:
//! strings are patched by mnemonic key, so there is no string table to
//! index and no sound/sprite name offsets into it. Sound and sprite name
//! lookups resolve against the catalogs directly, and action pointers are
//! addressed by state index, with placeholder slots for states that carry
//! no behavior hook.

use std::sync::LazyLock;

use crate::error::{Error, Result};
use crate::patch::{DehPatch, NameLookup, check_index, validate_tables};
use crate::types::{ActionPointer, Ammo, Miscellany, Sound, State, Thing, Weapon};

use super::doom19;

static INSTANCE: LazyLock<Boom> = LazyLock::new(Boom::build);

/// The Boom patch target
#[derive(Debug)]
pub struct Boom {
    sounds: NameLookup,
    sprites: NameLookup,
}

impl Boom {
    /// The shared instance; tables are validated on first access
    pub fn get() -> &'static Self {
        &INSTANCE
    }

    #[allow(clippy::expect_used)]
    fn build() -> Self {
        validate_tables(
            &doom19::STATES,
            &doom19::THINGS,
            &doom19::WEAPONS,
            doom19::SPRITE_NAMES.len(),
            doom19::SOUNDS.len(),
        )
        .expect("boom: constant tables failed structural validation");
        Self {
            // sound index 0 is the reserved silence, names start at 1
            sounds: NameLookup::from_names(&doom19::SOUND_NAMES, 1),
            sprites: NameLookup::from_names(&doom19::SPRITE_NAMES, 0),
        }
    }
}

impl DehPatch for Boom {
    fn miscellany(&self) -> &Miscellany {
        &doom19::MISC
    }

    fn ammo_count(&self) -> usize {
        doom19::AMMO.len()
    }

    fn ammo(&self, index: usize) -> Result<&Ammo> {
        check_index("ammo", index, doom19::AMMO.len())?;
        Ok(&doom19::AMMO[index])
    }

    fn string_count(&self) -> usize {
        // Boom patches address strings by mnemonic, not by table index
        0
    }

    fn string(&self, index: usize) -> Result<&str> {
        Err(Error::IndexOutOfRange {
            table: "string",
            index,
            count: 0,
        })
    }

    fn sound_string_index(&self) -> Option<usize> {
        None
    }

    fn sprite_string_index(&self) -> Option<usize> {
        None
    }

    fn sound_index(&self, name: &str) -> Option<usize> {
        self.sounds.get(name)
    }

    fn sprite_index(&self, name: &str) -> Option<usize> {
        self.sprites.get(name)
    }

    fn sprite_count(&self) -> usize {
        doom19::SPRITE_NAMES.len()
    }

    fn sound_count(&self) -> usize {
        doom19::SOUNDS.len()
    }

    fn sound(&self, index: usize) -> Result<&Sound> {
        check_index("sound", index, doom19::SOUNDS.len())?;
        Ok(&doom19::SOUNDS[index])
    }

    fn thing_count(&self) -> usize {
        doom19::THINGS.len()
    }

    fn thing(&self, index: usize) -> Result<&Thing> {
        check_index("thing", index, doom19::THINGS.len())?;
        Ok(&doom19::THINGS[index])
    }

    fn weapon_count(&self) -> usize {
        doom19::WEAPONS.len()
    }

    fn weapon(&self, index: usize) -> Result<&Weapon> {
        check_index("weapon", index, doom19::WEAPONS.len())?;
        Ok(&doom19::WEAPONS[index])
    }

    fn state_count(&self) -> usize {
        doom19::STATES.len()
    }

    fn state(&self, index: usize) -> Result<&State> {
        check_index("state", index, doom19::STATES.len())?;
        Ok(&doom19::STATES[index])
    }

    fn state_action_pointer_index(&self, state_index: usize) -> Result<Option<usize>> {
        check_index("state", state_index, doom19::STATES.len())?;
        // Boom pointer slots mirror the state table one-to-one
        Ok(doom19::STATES[state_index].action.map(|_| state_index))
    }

    fn action_pointer_count(&self) -> usize {
        doom19::STATES.len()
    }

    fn action_pointer(&self, index: usize) -> Result<Option<ActionPointer>> {
        check_index("action pointer", index, doom19::STATES.len())?;
        Ok(doom19::STATES[index].action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_table_is_unsupported() {
        let boom = Boom::get();
        assert_eq!(boom.string_count(), 0);
        assert_eq!(boom.sound_string_index(), None);
        assert_eq!(boom.sprite_string_index(), None);
        assert!(boom.string(0).is_err());
    }

    #[test]
    fn test_name_lookups_come_from_the_catalogs() {
        let boom = Boom::get();
        assert_eq!(boom.sound_index("pistol"), Some(1));
        assert_eq!(boom.sprite_index("TROO"), Some(0));
    }

    #[test]
    fn test_pointer_slots_mirror_states() {
        let boom = Boom::get();
        assert_eq!(boom.action_pointer_count(), boom.state_count());
        // state 0 is the null state and has no hook
        assert_eq!(boom.action_pointer(0).expect("in bounds"), None);
        assert_eq!(
            boom.state_action_pointer_index(0).expect("in bounds"),
            None
        );
    }
}
