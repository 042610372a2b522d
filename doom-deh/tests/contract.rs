//! Integration tests for the version contract
//!
//! Every shipped version must honor the same addressing rules: index
//! accessors total on their declared counts, name lookups and unsupported
//! subsystems as `None`, and the state/pointer association consistent in
//! both directions.

use doom_deh::{AmmoKind, DehPatch, Error, PatchVersion, WeaponKind};
use pretty_assertions::assert_eq;
use test_case::test_case;

#[test_case(PatchVersion::UltimateDoom19; "udoom19")]
#[test_case(PatchVersion::Boom; "boom")]
fn index_accessors_are_total_on_their_counts(version: PatchVersion) {
    let patch = version.patch();

    for i in 0..patch.ammo_count() {
        patch.ammo(i).expect("ammo in bounds");
    }
    for i in 0..patch.string_count() {
        patch.string(i).expect("string in bounds");
    }
    for i in 0..patch.sound_count() {
        patch.sound(i).expect("sound in bounds");
    }
    for i in 0..patch.thing_count() {
        patch.thing(i).expect("thing in bounds");
    }
    for i in 0..patch.weapon_count() {
        patch.weapon(i).expect("weapon in bounds");
    }
    for i in 0..patch.state_count() {
        patch.state(i).expect("state in bounds");
        patch
            .state_action_pointer_index(i)
            .expect("pointer index in bounds");
    }
    for i in 0..patch.action_pointer_count() {
        patch.action_pointer(i).expect("action pointer in bounds");
    }
}

#[test_case(PatchVersion::UltimateDoom19; "udoom19")]
#[test_case(PatchVersion::Boom; "boom")]
fn out_of_range_indices_fail(version: PatchVersion) {
    let patch = version.patch();

    assert!(matches!(
        patch.ammo(patch.ammo_count()),
        Err(Error::IndexOutOfRange { table: "ammo", .. })
    ));
    assert!(patch.string(patch.string_count()).is_err());
    assert!(patch.sound(patch.sound_count()).is_err());
    assert!(patch.thing(patch.thing_count()).is_err());
    assert!(patch.weapon(patch.weapon_count()).is_err());
    assert!(patch.state(patch.state_count()).is_err());
    assert!(patch.state_action_pointer_index(patch.state_count()).is_err());
    assert!(patch.action_pointer(patch.action_pointer_count()).is_err());
}

#[test_case(PatchVersion::UltimateDoom19; "udoom19")]
#[test_case(PatchVersion::Boom; "boom")]
fn catalog_counts_match_the_executable_family(version: PatchVersion) {
    let patch = version.patch();

    assert_eq!(patch.ammo_count(), 4);
    assert_eq!(patch.sound_count(), 109);
    assert_eq!(patch.sprite_count(), 138);
    assert_eq!(patch.thing_count(), 137);
    assert_eq!(patch.weapon_count(), 9);
    assert_eq!(patch.state_count(), 967);
}

#[test]
fn udoom19_string_table_anchors() {
    let patch = PatchVersion::UltimateDoom19.patch();

    assert_eq!(patch.string_count(), 1094);
    assert_eq!(patch.string(654).expect("in bounds"), "Red: ");
    assert_eq!(patch.string(655).expect("in bounds"), "E1M1: Hangar");
    assert_eq!(patch.string(692).expect("in bounds"), "level 1: entryway");
}

#[test]
fn udoom19_string_sub_range_offsets() {
    let patch = PatchVersion::UltimateDoom19.patch();

    assert_eq!(patch.sound_string_index(), Some(842));
    assert_eq!(patch.sprite_string_index(), Some(954));
    assert_eq!(patch.string(842).expect("in bounds"), "pistol");
    assert_eq!(patch.string(954).expect("in bounds"), "TROO");
}

#[test]
fn udoom19_documented_offsets_land_on_their_entries() {
    use doom_deh::patches::udoom19::{
        STRING_INDEX_INTERMISSION_E1, STRING_INDEX_INTERMISSION_FLAT_E1,
        STRING_INDEX_INTERMISSION_FLAT_MAP06, STRING_INDEX_MAP_NAMES_DOOM1,
        STRING_INDEX_MAP_NAMES_DOOM2, STRING_INDEX_MUSIC_NAMES_DOOM1,
        STRING_INDEX_MUSIC_NAMES_DOOM2, STRING_INDEX_SOUNDS, STRING_INDEX_SPRITES,
    };

    let patch = PatchVersion::UltimateDoom19.patch();
    let at = |index: usize| patch.string(index).expect("in bounds");

    assert!(at(STRING_INDEX_INTERMISSION_E1).starts_with("Once you beat the big badasses"));
    assert_eq!(at(STRING_INDEX_INTERMISSION_FLAT_E1), "FLOOR4_8");
    assert_eq!(at(STRING_INDEX_INTERMISSION_FLAT_MAP06), "SLIME16");
    assert_eq!(at(STRING_INDEX_MAP_NAMES_DOOM1), "E1M1: Hangar");
    assert_eq!(at(STRING_INDEX_MAP_NAMES_DOOM2), "level 1: entryway");
    assert_eq!(at(STRING_INDEX_MUSIC_NAMES_DOOM1), "e1m1");
    assert_eq!(at(STRING_INDEX_MUSIC_NAMES_DOOM2), "runnin");
    assert_eq!(Some(STRING_INDEX_SOUNDS), patch.sound_string_index());
    assert_eq!(Some(STRING_INDEX_SPRITES), patch.sprite_string_index());
}

#[test_case(PatchVersion::UltimateDoom19; "udoom19")]
#[test_case(PatchVersion::Boom; "boom")]
fn sprite_lookup(version: PatchVersion) {
    let patch = version.patch();

    assert_eq!(patch.sprite_index("TROO"), Some(0));
    assert_eq!(patch.sprite_index("troo"), Some(0));
    assert_eq!(patch.sprite_index("ZZZZ"), None);
}

#[test_case(PatchVersion::UltimateDoom19; "udoom19")]
#[test_case(PatchVersion::Boom; "boom")]
fn sound_lookup_is_case_insensitive(version: PatchVersion) {
    let patch = version.patch();

    assert_eq!(patch.sound_index("pistol"), Some(1));
    assert_eq!(patch.sound_index("PISTOL"), Some(1));
    assert_eq!(patch.sound_index("Pistol"), Some(1));
    assert_eq!(patch.sound_index("itemup"), patch.sound_index("ITEMUP"));
    assert_eq!(patch.sound_index("nosuchsound"), None);
}

#[test]
fn udoom19_sound_names_round_trip_through_the_string_table() {
    let patch = PatchVersion::UltimateDoom19.patch();
    let base = patch.sound_string_index().expect("supported");

    // sound i (for i >= 1) is named by string base + i - 1
    for i in 1..patch.sound_count() {
        let name = patch.string(base + i - 1).expect("in bounds");
        assert_eq!(patch.sound_index(name), Some(i), "sound name {name}");
        assert_eq!(patch.sound_index(&name.to_uppercase()), Some(i));
    }
}

#[test]
fn udoom19_sprite_names_round_trip_through_the_string_table() {
    let patch = PatchVersion::UltimateDoom19.patch();
    let base = patch.sprite_string_index().expect("supported");

    for i in 0..patch.sprite_count() {
        let name = patch.string(base + i).expect("in bounds");
        assert_eq!(patch.sprite_index(name), Some(i), "sprite name {name}");
    }
}

#[test]
fn udoom19_pointer_association_is_consistent_both_ways() {
    let patch = PatchVersion::UltimateDoom19.patch();

    let mut hooked_states = 0;
    for i in 0..patch.state_count() {
        let state = patch.state(i).expect("in bounds");
        match patch.state_action_pointer_index(i).expect("in bounds") {
            Some(p) => {
                hooked_states += 1;
                let pointer = patch.action_pointer(p).expect("pointer in bounds");
                assert_eq!(pointer, state.action, "state {i} pointer {p}");
            }
            None => assert_eq!(state.action, None, "state {i}"),
        }
    }

    // pointer indexing is dense and independent of state indexing
    assert_eq!(hooked_states, patch.action_pointer_count());
    for p in 0..patch.action_pointer_count() {
        assert!(patch.action_pointer(p).expect("in bounds").is_some());
    }
}

#[test]
fn udoom19_null_state_has_no_pointer() {
    let patch = PatchVersion::UltimateDoom19.patch();
    assert_eq!(patch.state_action_pointer_index(0).expect("in bounds"), None);
}

#[test]
fn boom_does_not_address_strings_by_index() {
    let patch = PatchVersion::Boom.patch();

    assert_eq!(patch.string_count(), 0);
    assert_eq!(patch.sound_string_index(), None);
    assert_eq!(patch.sprite_string_index(), None);
    assert!(matches!(
        patch.string(0),
        Err(Error::IndexOutOfRange {
            table: "string",
            index: 0,
            count: 0,
        })
    ));
}

#[test]
fn boom_pointers_are_addressed_by_state_index() {
    let patch = PatchVersion::Boom.patch();

    assert_eq!(patch.action_pointer_count(), patch.state_count());
    for i in 0..patch.state_count() {
        let state = patch.state(i).expect("in bounds");
        let slot = patch.action_pointer(i).expect("in bounds");
        assert_eq!(slot, state.action, "state {i}");
        let index = patch.state_action_pointer_index(i).expect("in bounds");
        match state.action {
            Some(_) => assert_eq!(index, Some(i)),
            None => assert_eq!(index, None),
        }
    }
}

#[test]
fn weapon_table_matches_the_weapon_slots() {
    let patch = PatchVersion::UltimateDoom19.patch();

    let fist = patch.weapon(WeaponKind::Fist.index()).expect("in bounds");
    assert_eq!(fist.ammo, None);

    let pistol = patch.weapon(WeaponKind::Pistol.index()).expect("in bounds");
    assert_eq!(pistol.ammo, Some(AmmoKind::Bullets));

    let ssg = patch
        .weapon(WeaponKind::SuperShotgun.index())
        .expect("in bounds");
    assert_eq!(ssg.ammo, Some(AmmoKind::Shells));

    // every weapon state reference resolves
    for i in 0..patch.weapon_count() {
        let weapon = patch.weapon(i).expect("in bounds");
        for state_ref in [
            weapon.up_state,
            weapon.down_state,
            weapon.ready_state,
            weapon.fire_state,
            weapon.flash_state,
        ] {
            patch.state(state_ref).expect("weapon state reference");
        }
    }
}

#[test]
fn ammo_table_baseline_values() {
    let patch = PatchVersion::UltimateDoom19.patch();

    let bullets = patch.ammo(AmmoKind::Bullets.index()).expect("in bounds");
    assert_eq!(bullets.max, 200);
    assert_eq!(bullets.pickup, 10);

    let rockets = patch.ammo(AmmoKind::Rockets.index()).expect("in bounds");
    assert_eq!(rockets.max, 50);
    assert_eq!(rockets.pickup, 1);
}

#[test]
fn miscellany_baseline_values() {
    let misc = PatchVersion::UltimateDoom19.patch().miscellany();

    assert_eq!(misc.initial_health, 100);
    assert_eq!(misc.initial_bullets, 50);
    assert_eq!(misc.max_armor, 200);
    assert_eq!(misc.bfg_cells_per_shot, 40);
    assert!(!misc.monsters_infight);
}

#[test]
fn thing_table_baseline_values() {
    let patch = PatchVersion::UltimateDoom19.patch();

    let zombieman = patch.thing(1).expect("in bounds");
    assert_eq!(zombieman.editor_number, 3004);
    assert_eq!(zombieman.health, 20);

    // every thing state and sound reference resolves
    for i in 0..patch.thing_count() {
        let thing = patch.thing(i).expect("in bounds");
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
            patch.state(state_ref).expect("thing state reference");
        }
        for sound_ref in [
            thing.see_sound,
            thing.attack_sound,
            thing.pain_sound,
            thing.death_sound,
            thing.active_sound,
        ] {
            patch.sound(sound_ref).expect("thing sound reference");
        }
    }
}

#[test]
fn state_references_resolve() {
    let patch = PatchVersion::UltimateDoom19.patch();

    for i in 0..patch.state_count() {
        let state = patch.state(i).expect("in bounds");
        assert!(state.sprite_index < patch.sprite_count(), "state {i}");
        patch
            .state(state.next_state_index)
            .expect("successor state reference");
    }
}

#[test_case(PatchVersion::UltimateDoom19; "udoom19")]
#[test_case(PatchVersion::Boom; "boom")]
fn repeated_lookups_are_idempotent(version: PatchVersion) {
    let patch = version.patch();

    assert_eq!(patch.sound_index("pistol"), patch.sound_index("pistol"));
    assert_eq!(patch.sprite_index("TROO"), patch.sprite_index("TROO"));
    assert_eq!(patch.thing(0), patch.thing(0));
    assert_eq!(
        patch.state_action_pointer_index(1),
        patch.state_action_pointer_index(1)
    );
}
