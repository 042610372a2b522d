//! Entity definitions shared by every patch version
//!
//! These model the patchable records of the original executables: ammo,
//! sounds, things, weapons, animation states and the miscellany block.
//! The catalogs themselves live in the per-version modules under
//! [`crate::patches`]; everything here is plain data.

use std::fmt;

use bitflags::bitflags;

/// The four ammo types of the original executables.
///
/// The discriminant is the ammo table index used by patches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum AmmoKind {
    /// Pistol and chaingun rounds (slot 0)
    Bullets = 0,
    /// Shotgun shells (slot 1)
    Shells = 1,
    /// Plasma rifle and BFG cells (slot 2)
    Cells = 2,
    /// Rocket launcher ammunition (slot 3)
    Rockets = 3,
}

impl AmmoKind {
    /// All ammo kinds in table order
    pub const ALL: [Self; 4] = [Self::Bullets, Self::Shells, Self::Cells, Self::Rockets];

    /// The ammo table index of this kind
    pub fn index(self) -> usize {
        self as usize
    }

    /// Resolve an ammo table index back to its kind
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for AmmoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bullets => "Bullets",
            Self::Shells => "Shells",
            Self::Cells => "Cells",
            Self::Rockets => "Rockets",
        };
        write!(f, "{name}")
    }
}

/// The nine weapon slots of the v1.9 executables.
///
/// The discriminant is the weapon table index used by patches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum WeaponKind {
    /// Slot 0
    Fist = 0,
    /// Slot 1
    Pistol = 1,
    /// Slot 2
    Shotgun = 2,
    /// Slot 3
    Chaingun = 3,
    /// Slot 4
    RocketLauncher = 4,
    /// Slot 5
    PlasmaRifle = 5,
    /// Slot 6
    Bfg9000 = 6,
    /// Slot 7
    Chainsaw = 7,
    /// Slot 8 (Doom II executables)
    SuperShotgun = 8,
}

impl WeaponKind {
    /// All weapon kinds in table order
    pub const ALL: [Self; 9] = [
        Self::Fist,
        Self::Pistol,
        Self::Shotgun,
        Self::Chaingun,
        Self::RocketLauncher,
        Self::PlasmaRifle,
        Self::Bfg9000,
        Self::Chainsaw,
        Self::SuperShotgun,
    ];

    /// The weapon table index of this kind
    pub fn index(self) -> usize {
        self as usize
    }

    /// Resolve a weapon table index back to its kind
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// One ammo table entry: capacity and pickup amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Ammo {
    /// Which ammo slot this entry describes
    pub kind: AmmoKind,
    /// Maximum carriable amount (doubled by a backpack)
    pub max: u32,
    /// Amount granted by the small pickup
    pub pickup: u32,
}

/// One sound table entry.
///
/// Sound *names* are not stored here; they come from the string table
/// sub-range (or the version's own name catalog) so that patched strings
/// and sound lookups stay consistent. Index 0 of the sound table is the
/// reserved "no sound" entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Sound {
    /// Mixing priority (higher wins a channel)
    pub priority: u32,
    /// Whether only one instance may play at a time
    pub singular: bool,
}

bitflags! {
    /// The 32-bit thing flag word (`MF_*` in the original executables)
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize))]
    pub struct ThingFlags: u32 {
        /// Can be picked up by walking over it
        const SPECIAL = 0x0000_0001;
        /// Blocks movement
        const SOLID = 0x0000_0002;
        /// Can be damaged
        const SHOOTABLE = 0x0000_0004;
        /// Invisible, but touchable
        const NO_SECTOR = 0x0000_0008;
        /// Inert, but displayable
        const NO_BLOCKMAP = 0x0000_0010;
        /// Deaf: does not react to sound
        const AMBUSH = 0x0000_0020;
        /// Will try to attack soon
        const JUST_HIT = 0x0000_0040;
        /// Will take at least one step before attacking
        const JUST_ATTACKED = 0x0000_0080;
        /// Hangs from the ceiling
        const SPAWN_CEILING = 0x0000_0100;
        /// Not affected by gravity
        const NO_GRAVITY = 0x0000_0200;
        /// May move over tall drops
        const DROP_OFF = 0x0000_0400;
        /// Picks up items
        const PICKUP = 0x0000_0800;
        /// Passes through walls and actors
        const NO_CLIP = 0x0000_1000;
        /// Keeps sliding along walls
        const SLIDE = 0x0000_2000;
        /// Can fly at any height
        const FLOAT = 0x0000_4000;
        /// Does not cross lines or look at heights
        const TELEPORT = 0x0000_8000;
        /// Is a projectile
        const MISSILE = 0x0001_0000;
        /// Dropped by a demised actor (ammo halved)
        const DROPPED = 0x0002_0000;
        /// Drawn with fuzz (spectre effect)
        const SHADOW = 0x0004_0000;
        /// Bleeds puffs instead of blood
        const NO_BLOOD = 0x0008_0000;
        /// Corpse: falls off ledges
        const CORPSE = 0x0010_0000;
        /// Floating actor adjusting height
        const IN_FLOAT = 0x0020_0000;
        /// Counts toward the kill percentage
        const COUNT_KILL = 0x0040_0000;
        /// Counts toward the item percentage
        const COUNT_ITEM = 0x0080_0000;
        /// Charging lost soul
        const SKULL_FLY = 0x0100_0000;
        /// Not spawned in deathmatch
        const NOT_DEATHMATCH = 0x0200_0000;
    }
}

/// One actor template: monster, item, projectile or decoration.
///
/// State and sound fields are catalog indices; `0` is the "none" value for
/// both (state 0 is the reserved null state, sound 0 the reserved silence).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Thing {
    /// Human-readable template name
    pub name: &'static str,
    /// Map editor number, or -1 when not directly placeable
    pub editor_number: i32,
    /// Spawn health
    pub health: u32,
    /// Movement (or projectile) speed
    pub speed: u32,
    /// Collision radius in map units
    pub radius: u32,
    /// Collision height in map units
    pub height: u32,
    /// Projectile/contact damage amount
    pub damage: u32,
    /// Tics before first action after waking
    pub reaction_time: u32,
    /// Chance out of 256 of entering the pain state when hurt
    pub pain_chance: u32,
    /// Mass, used for thrust calculations
    pub mass: u32,
    /// Behavior flag word
    pub flags: ThingFlags,
    /// Initial state
    pub spawn_state: usize,
    /// State entered when a target is acquired
    pub see_state: usize,
    /// State entered when hurt (pain chance permitting)
    pub pain_state: usize,
    /// Melee attack state
    pub melee_state: usize,
    /// Ranged attack state
    pub missile_state: usize,
    /// Death animation state
    pub death_state: usize,
    /// Gib death animation state
    pub xdeath_state: usize,
    /// Resurrection animation state
    pub raise_state: usize,
    /// Sound on waking
    pub see_sound: usize,
    /// Sound on attacking
    pub attack_sound: usize,
    /// Sound on entering the pain state
    pub pain_sound: usize,
    /// Sound on dying
    pub death_sound: usize,
    /// Idle sound
    pub active_sound: usize,
}

/// One weapon table entry: ammo type and the states driving its animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Weapon {
    /// Human-readable weapon name
    pub name: &'static str,
    /// Ammo consumed, or `None` for the fist and chainsaw
    pub ammo: Option<AmmoKind>,
    /// State while being raised
    pub up_state: usize,
    /// State while being lowered
    pub down_state: usize,
    /// State while ready to fire
    pub ready_state: usize,
    /// State entered on firing
    pub fire_state: usize,
    /// Muzzle flash state, or 0 for none
    pub flash_state: usize,
}

/// One animation frame of the state table.
///
/// Next-state indices form a directed graph over the table; cycles are
/// animation loops and are valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct State {
    /// Index into the sprite catalog
    pub sprite_index: usize,
    /// Sprite frame (0 = A, 1 = B, ...)
    pub frame: u32,
    /// Render at full brightness
    pub bright: bool,
    /// Duration in tics; -1 means the frame never advances
    pub tics: i32,
    /// State entered when the duration elapses
    pub next_state_index: usize,
    /// Behavior hook invoked when the frame is entered, if any
    pub action: Option<ActionPointer>,
}

macro_rules! action_pointers {
    ($($(#[$meta:meta])* $variant:ident => $mnemonic:literal),+ $(,)?) => {
        /// A native behavior hook invoked from an animation state.
        ///
        /// Only a subset of states carry one of these; the catalog of
        /// pointers is indexed independently of the state table.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize))]
        pub enum ActionPointer {
            $($(#[$meta])* $variant,)+
        }

        impl ActionPointer {
            /// The historical `A_*` mnemonic of this hook
            pub fn mnemonic(self) -> &'static str {
                match self {
                    $(Self::$variant => $mnemonic,)+
                }
            }

            /// Resolve an `A_*` mnemonic (case-sensitive) to its hook
            pub fn from_mnemonic(name: &str) -> Option<Self> {
                match name {
                    $($mnemonic => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

action_pointers! {
    /// Dim the player's gun flash light level to none
    Light0 => "A_Light0",
    /// Bob the ready weapon, fire on demand
    WeaponReady => "A_WeaponReady",
    /// Lower the current weapon off screen
    Lower => "A_Lower",
    /// Raise the pending weapon on screen
    Raise => "A_Raise",
    /// Fist attack
    Punch => "A_Punch",
    /// Re-trigger the attack while fire is held
    ReFire => "A_ReFire",
    /// Fire the pistol
    FirePistol => "A_FirePistol",
    /// Gun flash light level one
    Light1 => "A_Light1",
    /// Fire the shotgun
    FireShotgun => "A_FireShotgun",
    /// Gun flash light level two
    Light2 => "A_Light2",
    /// Fire the super shotgun
    FireShotgun2 => "A_FireShotgun2",
    /// Abort the super shotgun reload when out of shells
    CheckReload => "A_CheckReload",
    /// Super shotgun break-open sound
    OpenShotgun2 => "A_OpenShotgun2",
    /// Super shotgun load sound
    LoadShotgun2 => "A_LoadShotgun2",
    /// Super shotgun snap-shut sound
    CloseShotgun2 => "A_CloseShotgun2",
    /// Fire the chaingun
    FireCGun => "A_FireCGun",
    /// Start the weapon's muzzle flash state
    GunFlash => "A_GunFlash",
    /// Fire the rocket launcher
    FireMissile => "A_FireMissile",
    /// Chainsaw attack
    Saw => "A_Saw",
    /// Fire the plasma rifle
    FirePlasma => "A_FirePlasma",
    /// BFG charge-up sound
    BfgSound => "A_BFGsound",
    /// Fire the BFG
    FireBfg => "A_FireBFG",
    /// BFG secondary tracer spray
    BfgSpray => "A_BFGSpray",
    /// Radius damage explosion
    Explode => "A_Explode",
    /// Play the actor's pain sound
    Pain => "A_Pain",
    /// Play the player death sound
    PlayerScream => "A_PlayerScream",
    /// Make the corpse non-solid
    Fall => "A_Fall",
    /// Play the gib death sound
    XScream => "A_XScream",
    /// Watch for targets
    Look => "A_Look",
    /// Pursue the current target
    Chase => "A_Chase",
    /// Turn toward the current target
    FaceTarget => "A_FaceTarget",
    /// Zombieman hitscan attack
    PosAttack => "A_PosAttack",
    /// Play the actor's death sound
    Scream => "A_Scream",
    /// Shotgun guy hitscan attack
    SPosAttack => "A_SPosAttack",
    /// Chase, resurrecting corpses along the way
    VileChase => "A_VileChase",
    /// Arch-vile attack scream
    VileStart => "A_VileStart",
    /// Place arch-vile fire on the target
    VileTarget => "A_VileTarget",
    /// Arch-vile flame damage burst
    VileAttack => "A_VileAttack",
    /// Arch-vile fire ignition sound
    StartFire => "A_StartFire",
    /// Keep arch-vile fire on its victim
    Fire => "A_Fire",
    /// Arch-vile fire crackle sound
    FireCrackle => "A_FireCrackle",
    /// Revenant punch wind-up sound
    SkelWhoosh => "A_SkelWhoosh",
    /// Revenant punch
    SkelFist => "A_SkelFist",
    /// Launch a revenant tracer
    SkelMissile => "A_SkelMissile",
    /// Home a revenant tracer toward its target
    Tracer => "A_Tracer",
    /// Mancubus attack roar
    FatRaise => "A_FatRaise",
    /// Mancubus volley, first spread
    FatAttack1 => "A_FatAttack1",
    /// Mancubus volley, second spread
    FatAttack2 => "A_FatAttack2",
    /// Mancubus volley, third spread
    FatAttack3 => "A_FatAttack3",
    /// Chaingunner hitscan attack
    CPosAttack => "A_CPosAttack",
    /// Chaingunner sustained-fire check
    CPosRefire => "A_CPosRefire",
    /// Imp claw or fireball
    TroopAttack => "A_TroopAttack",
    /// Demon bite
    SargAttack => "A_SargAttack",
    /// Cacodemon bite or fireball
    HeadAttack => "A_HeadAttack",
    /// Baron/knight claw or fireball
    BruisAttack => "A_BruisAttack",
    /// Trigger special level actions on boss death
    BossDeath => "A_BossDeath",
    /// Lost soul charge
    SkullAttack => "A_SkullAttack",
    /// Spiderdemon footstep clank
    Metal => "A_Metal",
    /// Spiderdemon sustained-fire check
    SpidRefire => "A_SpidRefire",
    /// Arachnotron footstep clank
    BabyMetal => "A_BabyMetal",
    /// Arachnotron plasma attack
    BspiAttack => "A_BspiAttack",
    /// Cyberdemon footstep thud
    Hoof => "A_Hoof",
    /// Cyberdemon rocket attack
    CyberAttack => "A_CyberAttack",
    /// Pain elemental lost soul spawn attack
    PainAttack => "A_PainAttack",
    /// Pain elemental death burst of lost souls
    PainDie => "A_PainDie",
    /// Trigger door actions on Commander Keen death
    KeenDie => "A_KeenDie",
    /// Boss brain pain sound
    BrainPain => "A_BrainPain",
    /// Boss brain death explosion wave
    BrainScream => "A_BrainScream",
    /// End the level on boss brain death
    BrainDie => "A_BrainDie",
    /// Boss eye wake-up
    BrainAwake => "A_BrainAwake",
    /// Launch a spawn cube
    BrainSpit => "A_BrainSpit",
    /// Spawn cube flight sound
    SpawnSound => "A_SpawnSound",
    /// Spawn cube travel and monster materialization
    SpawnFly => "A_SpawnFly",
    /// One explosion of the brain death wave
    BrainExplode => "A_BrainExplode",
}

impl fmt::Display for ActionPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}

/// The miscellany block: loose gameplay values patchable as one record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Miscellany {
    /// Health a player spawns with
    pub initial_health: u32,
    /// Bullets a player spawns with
    pub initial_bullets: u32,
    /// Health cap for medikits and stimpacks
    pub max_health: u32,
    /// Armor cap
    pub max_armor: u32,
    /// Armor class granted by green armor
    pub green_armor_class: u32,
    /// Armor class granted by blue armor
    pub blue_armor_class: u32,
    /// Health granted by a soul sphere
    pub soulsphere_health: u32,
    /// Health cap for soul spheres
    pub max_soulsphere_health: u32,
    /// Health set by a megasphere
    pub megasphere_health: u32,
    /// Health set by the god mode cheat
    pub god_mode_health: u32,
    /// Armor granted by the IDFA cheat
    pub idfa_armor: u32,
    /// Armor class granted by the IDFA cheat
    pub idfa_armor_class: u32,
    /// Armor granted by the IDKFA cheat
    pub idkfa_armor: u32,
    /// Armor class granted by the IDKFA cheat
    pub idkfa_armor_class: u32,
    /// Cells consumed per BFG shot
    pub bfg_cells_per_shot: u32,
    /// Whether monsters of the same species damage each other
    pub monsters_infight: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ammo_kind_round_trip() {
        for kind in AmmoKind::ALL {
            assert_eq!(AmmoKind::from_index(kind.index()), Some(kind));
        }
        assert_eq!(AmmoKind::from_index(4), None);
    }

    #[test]
    fn test_weapon_kind_round_trip() {
        for kind in WeaponKind::ALL {
            assert_eq!(WeaponKind::from_index(kind.index()), Some(kind));
        }
        assert_eq!(WeaponKind::from_index(9), None);
    }

    #[test]
    fn test_action_pointer_mnemonics() {
        assert_eq!(ActionPointer::BfgSound.mnemonic(), "A_BFGsound");
        assert_eq!(
            ActionPointer::from_mnemonic("A_WeaponReady"),
            Some(ActionPointer::WeaponReady)
        );
        assert_eq!(ActionPointer::from_mnemonic("A_Missing"), None);
        assert_eq!(ActionPointer::Chase.to_string(), "A_Chase");
    }

    #[test]
    fn test_thing_flags_word_layout() {
        assert_eq!(ThingFlags::COUNT_KILL.bits(), 0x0040_0000);
        let monster = ThingFlags::SOLID | ThingFlags::SHOOTABLE | ThingFlags::COUNT_KILL;
        assert!(monster.contains(ThingFlags::SOLID));
        assert!(!monster.contains(ThingFlags::SHADOW));
    }
}
