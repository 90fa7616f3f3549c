//! Edit character fields locally

use crate::{config, util};
use anyhow::{Context, Result};
use clap::Args;
use holodex_core::CharacterFields;
use owo_colors::OwoColorize;

/// The editable fields, one optional flag each. Flags not given keep their
/// current value (the existing override, or the remote record).
#[derive(Debug, Args)]
pub struct FieldArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub height: Option<String>,
    #[arg(long)]
    pub mass: Option<String>,
    #[arg(long)]
    pub hair_color: Option<String>,
    #[arg(long)]
    pub skin_color: Option<String>,
    #[arg(long)]
    pub eye_color: Option<String>,
    #[arg(long)]
    pub birth_year: Option<String>,
    #[arg(long)]
    pub gender: Option<String>,
}

impl FieldArgs {
    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.height.is_none()
            && self.mass.is_none()
            && self.hair_color.is_none()
            && self.skin_color.is_none()
            && self.eye_color.is_none()
            && self.birth_year.is_none()
            && self.gender.is_none()
    }

    fn apply(self, fields: &mut CharacterFields) {
        if let Some(v) = self.name {
            fields.name = v;
        }
        if let Some(v) = self.height {
            fields.height = v;
        }
        if let Some(v) = self.mass {
            fields.mass = v;
        }
        if let Some(v) = self.hair_color {
            fields.hair_color = v;
        }
        if let Some(v) = self.skin_color {
            fields.skin_color = v;
        }
        if let Some(v) = self.eye_color {
            fields.eye_color = v;
        }
        if let Some(v) = self.birth_year {
            fields.birth_year = v;
        }
        if let Some(v) = self.gender {
            fields.gender = v;
        }
    }
}

pub async fn run(uid: &str, args: FieldArgs) -> Result<()> {
    if args.is_empty() {
        anyhow::bail!(
            "Nothing to change: pass at least one field flag (--name, --height, --mass, \
             --hair-color, --skin-color, --eye-color, --birth-year, --gender)"
        );
    }

    let store = util::open_store()?;

    // An existing override is the editing baseline; only characters that
    // were never edited need a remote fetch.
    let mut fields = match store.load_one(uid) {
        Some(stored) => stored.fields,
        None => {
            let config = config::load()?;
            let client = util::api_client(&config)?;

            let bar = util::spinner("Fetching character...");
            let result = client.get_character_details(uid).await;
            bar.finish_and_clear();

            let detail = result.with_context(|| format!("Failed to fetch character {uid}"))?;
            CharacterFields::from(&detail.result.properties)
        }
    };

    args.apply(&mut fields);
    let record = store.save(uid, fields)?;

    println!(
        "{} Saved local edits for {} {}",
        "✓".green(),
        record.fields.name.bold(),
        format!("(uid {uid})").dimmed()
    );
    println!(
        "{}",
        "Note: edits live only in this profile; the remote record is untouched.".dimmed()
    );

    Ok(())
}
