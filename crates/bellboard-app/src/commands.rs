//! Console command parsing and dispatch.

use bellboard_client::DeviceService;
use bellboard_client::wire::DoorSide;
use bellboard_core::{Panel, Section};
use bellboard_types::config::PanelConfig;

const HELP: &str = "\
Commands:
  play                 trigger playback and watch until it finishes
  status               show playing state, volume, and filter summary
  filter <text>        set the option filter
  clear                clear the option filter
  all                  check every visible option
  none                 uncheck every visible option
  checked              list checked option values
  reload               re-fetch options and the sound list
  volume <0-100>       set device volume
  mute                 toggle mute
  door <id> open|close flip a sound's door-trigger binding
  section <name>       toggle a panel section (header, sounds, footer)
  help                 show this help
  quit                 exit";

/// One parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Play,
    Status,
    Filter(String),
    ClearFilter,
    CheckAll,
    CheckNone,
    Checked,
    Reload,
    Volume(u8),
    Mute,
    Door { id: u64, side: DoorSide },
    Section(Section),
    Help,
    Quit,
}

/// Parse one console line. The error is a user-facing usage message.
pub fn parse(line: &str) -> Result<Command, String> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Err(HELP.to_string());
    };
    let rest: Vec<&str> = words.collect();

    match verb {
        "play" => Ok(Command::Play),
        "status" => Ok(Command::Status),
        "filter" => {
            if rest.is_empty() {
                Err("Usage: filter <text>".to_string())
            } else {
                Ok(Command::Filter(rest.join(" ")))
            }
        },
        "clear" => Ok(Command::ClearFilter),
        "all" => Ok(Command::CheckAll),
        "none" => Ok(Command::CheckNone),
        "checked" => Ok(Command::Checked),
        "reload" => Ok(Command::Reload),
        "volume" => match rest.first().map(|w| w.parse::<u8>()) {
            Some(Ok(level)) if level <= 100 => Ok(Command::Volume(level)),
            _ => Err("Usage: volume <0-100>".to_string()),
        },
        "mute" => Ok(Command::Mute),
        "door" => {
            let id = rest.first().and_then(|w| w.parse::<u64>().ok());
            let side = match rest.get(1).copied() {
                Some("open") => Some(DoorSide::Open),
                Some("close") => Some(DoorSide::Close),
                _ => None,
            };
            match (id, side) {
                (Some(id), Some(side)) => Ok(Command::Door { id, side }),
                _ => Err("Usage: door <id> open|close".to_string()),
            }
        },
        "section" => match rest.first().and_then(|w| Section::from_name(w)) {
            Some(section) => Ok(Command::Section(section)),
            None => Err("Usage: section header|sounds|footer".to_string()),
        },
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("Unknown command '{other}'. Type 'help'.")),
    }
}

/// Run one command against the panel. `Play` and `Quit` are handled by
/// the caller; everything else produces output lines here.
pub fn dispatch(
    cmd: Command,
    panel: &mut Panel,
    svc: &mut dyn DeviceService,
    config: &PanelConfig,
) -> Vec<String> {
    match cmd {
        Command::Play | Command::Quit => Vec::new(),
        Command::Status => {
            let playing = if panel.is_playing() { "playing" } else { "idle" };
            let checked = panel.filter.checked_values().len();
            let total = panel.filter.options().len();
            vec![
                format!("Device: {playing}"),
                format!("Volume: {}%", panel.volume.level()),
                format!("Options: {checked}/{total} checked, filter '{}'", panel.filter.filter()),
                format!("Sounds: {}", panel.sounds.rows().len()),
            ]
        },
        Command::Filter(text) => {
            panel.filter.set_filter(&text);
            vec![format!("{} option(s) visible.", panel.filter.visible_count())]
        },
        Command::ClearFilter => {
            panel.filter.clear_filter();
            vec![format!("Filter cleared. {} option(s) visible.", panel.filter.visible_count())]
        },
        Command::CheckAll => {
            panel.filter.check_all_visible();
            let _ = panel.filter.take_change();
            vec![format!("{} option(s) checked.", panel.filter.checked_values().len())]
        },
        Command::CheckNone => {
            panel.filter.check_none_visible();
            let _ = panel.filter.take_change();
            vec![format!("{} option(s) checked.", panel.filter.checked_values().len())]
        },
        Command::Checked => {
            let values = panel.filter.checked_values();
            if values.is_empty() {
                vec!["No options checked.".to_string()]
            } else {
                values
            }
        },
        Command::Reload => {
            panel.reload(svc, &config.options_path);
            vec![format!(
                "Reloaded: {} option(s), {} sound(s).",
                panel.filter.options().len(),
                panel.sounds.rows().len()
            )]
        },
        Command::Volume(level) => match panel.set_volume(svc, level) {
            Ok(()) => vec![format!("Volume set to {level}%.")],
            Err(err) => vec![format!("Volume error: {err}")],
        },
        Command::Mute => {
            let level = panel.toggle_mute(svc);
            if level == 0 {
                vec!["Muted.".to_string()]
            } else {
                vec![format!("Unmuted at {level}%.")]
            }
        },
        Command::Door { id, side } => match panel.toggle_door(svc, id, side) {
            Some(value) => {
                let name = panel
                    .sounds
                    .get(id)
                    .map(|r| r.name.clone())
                    .unwrap_or_default();
                vec![format!("{name}: {} = {value}", side.field())]
            },
            None => vec![format!("No sound with id {id}.")],
        },
        Command::Section(section) => {
            let visible = panel.toggle_section(section);
            let state = if visible { "shown" } else { "hidden" };
            vec![format!("Section {} {state}.", section.label())]
        },
        Command::Help => vec![HELP.to_string()],
    }
}
