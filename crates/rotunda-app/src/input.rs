//! Operator console: one line of text becomes one kiosk input event.

use rotunda_types::input::{EmbeddedMessage, InputEvent, PanelAction};
use rotunda_types::page::PageId;

pub const HELP: &str = "commands: move X Y | click X Y | key C | scroll DY | toggle | \
page ja|en|ch | interval N | idle N | interaction on|off | controls | embedded RAW | quit";

/// Parse one console line.
pub fn parse_command(line: &str) -> Result<InputEvent, String> {
    let line = line.trim();
    let (cmd, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();
    let args: Vec<&str> = rest.split_whitespace().collect();

    match cmd {
        "move" => {
            let (x, y) = point(&args)?;
            Ok(InputEvent::PointerMove { x, y })
        },
        "click" => {
            let (x, y) = point(&args)?;
            Ok(InputEvent::PointerClick { x, y })
        },
        "key" => {
            let mut chars = rest.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(InputEvent::KeyPress(c)),
                _ => Err("usage: key C".into()),
            }
        },
        "scroll" => match args.as_slice() {
            [dy] => Ok(InputEvent::Scroll {
                dy: number(dy, "DY")?,
            }),
            _ => Err("usage: scroll DY".into()),
        },
        "toggle" => Ok(InputEvent::Panel(PanelAction::ToggleRotation)),
        "controls" => Ok(InputEvent::Panel(PanelAction::ToggleVisibility)),
        "page" => match args.as_slice() {
            [code] => code
                .parse::<PageId>()
                .map(|p| InputEvent::Panel(PanelAction::SelectPage(p)))
                .map_err(|e| e.to_string()),
            _ => Err("usage: page ja|en|ch".into()),
        },
        "interval" => match args.as_slice() {
            [n] => Ok(InputEvent::Panel(PanelAction::SetInterval(number(n, "N")?))),
            _ => Err("usage: interval N".into()),
        },
        "idle" => match args.as_slice() {
            [n] => Ok(InputEvent::Panel(PanelAction::SetIdleThreshold(number(
                n, "N",
            )?))),
            _ => Err("usage: idle N".into()),
        },
        "interaction" => match args.as_slice() {
            ["on"] => Ok(InputEvent::Panel(PanelAction::SetContentInteraction(true))),
            ["off"] => Ok(InputEvent::Panel(PanelAction::SetContentInteraction(false))),
            _ => Err("usage: interaction on|off".into()),
        },
        "embedded" => EmbeddedMessage::parse(rest)
            .map(InputEvent::Embedded)
            .map_err(|e| {
                log::warn!("Ignoring embedded message: {e}");
                e.to_string()
            }),
        "quit" | "exit" => Ok(InputEvent::Quit),
        "" => Err(HELP.into()),
        other => Err(format!("unknown command '{other}'; {HELP}")),
    }
}

fn point(args: &[&str]) -> Result<(i32, i32), String> {
    match args {
        [x, y] => Ok((number(x, "X")?, number(y, "Y")?)),
        _ => Err("expected two coordinates: X Y".into()),
    }
}

fn number<T: std::str::FromStr>(s: &str, name: &str) -> Result<T, String> {
    s.parse()
        .map_err(|_| format!("{name} must be a number, got '{s}'"))
}
