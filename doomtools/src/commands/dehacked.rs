//! DeHackEd patch table command implementations

use anyhow::{Context, Result, anyhow, bail};
use clap::{Subcommand, ValueEnum};
use doom_deh::{DehPatch, PatchVersion};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum DehackedCommands {
    /// Show the entity counts and string sub-range offsets of a patch version
    Info {
        /// Patch version (udoom19, boom)
        #[arg(short, long, default_value = "udoom19")]
        patch: String,
    },

    /// Print one string-table entry
    String {
        /// String-table index
        index: usize,

        /// Patch version (udoom19, boom)
        #[arg(short, long, default_value = "udoom19")]
        patch: String,
    },

    /// Resolve a sound or sprite name to its catalog index
    Lookup {
        /// Name to resolve (case-insensitive)
        name: String,

        /// Look the name up in the sound table
        #[arg(long, conflicts_with = "sprite")]
        sound: bool,

        /// Look the name up in the sprite catalog
        #[arg(long)]
        sprite: bool,

        /// Patch version (udoom19, boom)
        #[arg(short, long, default_value = "udoom19")]
        patch: String,
    },

    /// Export a catalog as JSON
    Export {
        /// Catalog to export
        #[arg(value_enum)]
        catalog: Catalog,

        /// Patch version (udoom19, boom)
        #[arg(short, long, default_value = "udoom19")]
        patch: String,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Catalog {
    /// The ammo table
    Ammo,
    /// The sound table
    Sounds,
    /// The state table
    States,
    /// The thing table
    Things,
    /// The weapon table
    Weapons,
    /// The miscellany record
    Misc,
}

pub fn execute(command: DehackedCommands) -> Result<()> {
    match command {
        DehackedCommands::Info { patch } => info_command(parse_version(&patch)?),
        DehackedCommands::String { index, patch } => {
            string_command(parse_version(&patch)?, index)
        }
        DehackedCommands::Lookup {
            name,
            sound,
            sprite,
            patch,
        } => lookup_command(parse_version(&patch)?, &name, sound, sprite),
        DehackedCommands::Export {
            catalog,
            patch,
            output,
        } => export_command(parse_version(&patch)?, catalog, output.as_deref()),
    }
}

fn parse_version(name: &str) -> Result<PatchVersion> {
    name.parse::<PatchVersion>().map_err(|err| anyhow!(err))
}

fn info_command(version: PatchVersion) -> Result<()> {
    let patch = version.patch();

    println!("Patch Version Information");
    println!("=========================");
    println!();
    println!("Version: {version}");
    println!("Strings: {}", patch.string_count());
    println!("Ammo Types: {}", patch.ammo_count());
    println!("Sounds: {}", patch.sound_count());
    println!("Sprites: {}", patch.sprite_count());
    println!("Things: {}", patch.thing_count());
    println!("Weapons: {}", patch.weapon_count());
    println!("States: {}", patch.state_count());
    println!("Action Pointers: {}", patch.action_pointer_count());
    println!();

    match (patch.sound_string_index(), patch.sprite_string_index()) {
        (Some(sounds), Some(sprites)) => {
            println!("String Sub-Ranges:");
            println!("  Sound Names At: {sounds}");
            println!("  Sprite Names At: {sprites}");
        }
        _ => {
            println!("String Sub-Ranges: not addressed by table index");
        }
    }

    Ok(())
}

fn string_command(version: PatchVersion, index: usize) -> Result<()> {
    let patch = version.patch();
    let entry = patch
        .string(index)
        .with_context(|| format!("no string {index} in {version}"))?;
    println!("{entry}");
    Ok(())
}

fn lookup_command(version: PatchVersion, name: &str, sound: bool, sprite: bool) -> Result<()> {
    let patch = version.patch();
    let (table, index) = if sound {
        ("sound", patch.sound_index(name))
    } else if sprite {
        ("sprite", patch.sprite_index(name))
    } else {
        bail!("specify --sound or --sprite");
    };

    match index {
        Some(index) => {
            log::info!("resolved {table} name '{name}' in {version}");
            println!("{index}");
            Ok(())
        }
        None => bail!("no {table} named '{name}' in {version}"),
    }
}

fn export_command(version: PatchVersion, catalog: Catalog, output: Option<&std::path::Path>) -> Result<()> {
    let patch = version.patch();

    let json = match catalog {
        Catalog::Ammo => {
            let entries = collect(patch.ammo_count(), |i| patch.ammo(i))?;
            serde_json::to_string_pretty(&entries)?
        }
        Catalog::Sounds => {
            let entries = collect(patch.sound_count(), |i| patch.sound(i))?;
            serde_json::to_string_pretty(&entries)?
        }
        Catalog::States => {
            let entries = collect(patch.state_count(), |i| patch.state(i))?;
            serde_json::to_string_pretty(&entries)?
        }
        Catalog::Things => {
            let entries = collect(patch.thing_count(), |i| patch.thing(i))?;
            serde_json::to_string_pretty(&entries)?
        }
        Catalog::Weapons => {
            let entries = collect(patch.weapon_count(), |i| patch.weapon(i))?;
            serde_json::to_string_pretty(&entries)?
        }
        Catalog::Misc => serde_json::to_string_pretty(patch.miscellany())?,
    };

    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            writer.write_all(json.as_bytes())?;
            writer.write_all(b"\n")?;
            println!("Exported to {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}

fn collect<'a, T, F>(count: usize, accessor: F) -> Result<Vec<&'a T>>
where
    F: Fn(usize) -> doom_deh::Result<&'a T>,
{
    (0..count)
        .map(|i| accessor(i).context("catalog accessor failed inside its declared bounds"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_export_covers_the_whole_table() {
        let patch = PatchVersion::UltimateDoom19.patch();
        let entries = collect(patch.state_count(), |i| patch.state(i)).expect("in bounds");
        let json = serde_json::to_string_pretty(&entries).expect("serializable");

        let parsed: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");
        let array = parsed.as_array().expect("array of states");
        assert_eq!(array.len(), patch.state_count());
        // the null state: sprite TROO, no behavior hook
        assert_eq!(array[0]["action"], serde_json::Value::Null);
    }
}
