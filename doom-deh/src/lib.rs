//! `doom-deh` - DeHackEd patch data model
//!
//! A representation of the patchable constant tables of historical
//! Doom-engine executables: strings, ammo, sounds, sprites, things,
//! weapons, animation states and action pointers, addressed exactly the
//! way the original binaries laid them out. DeHackEd patches overwrite
//! entries of these tables by index, so the indices here must reproduce
//! the executables' layout quirks (sound and sprite names sliced out of
//! the string table at fixed offsets, action pointers numbered
//! independently of states) for patches to resolve correctly.
//!
//! Each supported executable version implements the [`DehPatch`] contract
//! and is obtained through [`PatchVersion`]:
//!
//! ```
//! use doom_deh::PatchVersion;
//!
//! let patch = PatchVersion::UltimateDoom19.patch();
//! assert_eq!(patch.sprite_index("TROO"), Some(0));
//! assert_eq!(patch.string(655).unwrap(), "E1M1: Hangar");
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod error;
mod patch;
pub mod patches;
mod types;

pub use error::{Error, Result};
pub use patch::DehPatch;
pub use patches::PatchVersion;
pub use types::{
    ActionPointer, Ammo, AmmoKind, Miscellany, Sound, State, Thing, ThingFlags, Weapon, WeaponKind,
};
