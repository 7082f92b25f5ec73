//! Settings file persistence.

use std::env;
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use super::Settings;
use crate::pass::Selection;

pub fn save(settings: &Settings) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(get_path())?;

    file.write_all(encode(settings).as_bytes())?;
    Ok(())
}

pub fn load(settings: &mut Settings) -> std::io::Result<()> {
    let path = get_path();
    if !Path::new(&path).exists()
        && let Some(parent) = Path::new(&path).parent()
        && let Err(e) = std::fs::create_dir_all(parent)
    {
        eprintln!("Failed to create directory for settings file: {}", e);
        return Ok(());
    }

    let file = OpenOptions::new()
        .read(true)
        .create(true)
        .truncate(false)
        .write(true)
        .open(&path)?;

    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    match decode(line.trim()) {
        Some(parsed) => *settings = parsed,
        // Empty or malformed file: rewrite with current defaults
        None => save(settings)?,
    }

    Ok(())
}

#[inline]
fn get_path() -> String {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    format!("{}/.config/passform/settings", home)
}

fn encode(settings: &Settings) -> String {
    format!(
        "{},{},{},{},{}\n",
        settings.length,
        settings.selection.lowercase,
        settings.selection.uppercase,
        settings.selection.digits,
        settings.selection.symbols,
    )
}

fn decode(line: &str) -> Option<Settings> {
    let parts: Vec<&str> = line.split(',').collect();
    if parts.len() != 5 {
        return None;
    }

    Some(Settings {
        length: parts[0].parse().ok()?,
        selection: Selection {
            lowercase: parts[1].parse().ok()?,
            uppercase: parts[2].parse().ok()?,
            digits: parts[3].parse().ok()?,
            symbols: parts[4].parse().ok()?,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_decode_round_trips() {
        let settings = Settings {
            length: 12,
            selection: Selection {
                lowercase: false,
                uppercase: true,
                digits: true,
                symbols: false,
            },
        };
        assert_eq!(decode(encode(&settings).trim()), Some(settings));
    }

    #[test]
    fn defaults_encode_to_expected_line() {
        assert_eq!(encode(&Settings::default()), "8,true,false,false,false\n");
    }

    #[test]
    fn decode_rejects_malformed_lines() {
        assert_eq!(decode(""), None);
        assert_eq!(decode("8,true,false,false"), None);
        assert_eq!(decode("8,true,false,false,false,extra"), None);
        assert_eq!(decode("eight,true,false,false,false"), None);
        assert_eq!(decode("8,yes,false,false,false"), None);
    }
}
