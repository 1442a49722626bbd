//! Slash commands understood by the REPL.

use std::path::PathBuf;
use std::str::FromStr;

use nagar_core::complaint::{ComplaintDetails, ComplaintKind};

/// Every command, for completion and hints.
pub const COMMANDS: &[&str] = &[
    "/attach", "/detach", "/lang", "/clear", "/track", "/complaint", "/letter", "/quick",
    "/tips", "/help", "/quit",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Plain chat input.
    Say(String),
    Attach(PathBuf),
    Detach,
    ToggleLanguage,
    Clear,
    Track(String),
    Complaint {
        details: ComplaintDetails,
        formal: bool,
    },
    Quick(String),
    Tips,
    Help,
    Quit,
}

/// Parses one input line. Errors are usage messages.
pub fn parse(line: &str) -> Result<Command, String> {
    let line = line.trim();
    if line == "quit" || line == "exit" {
        return Ok(Command::Quit);
    }
    if !line.starts_with('/') {
        return Ok(Command::Say(line.to_string()));
    }

    let (name, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();
    match name {
        "/attach" if !rest.is_empty() => Ok(Command::Attach(PathBuf::from(rest))),
        "/attach" => Err("usage: /attach <image file>".to_string()),
        "/detach" => Ok(Command::Detach),
        "/lang" => Ok(Command::ToggleLanguage),
        "/clear" => Ok(Command::Clear),
        "/track" if !rest.is_empty() => Ok(Command::Track(rest.to_string())),
        "/track" => Err("usage: /track <tracking id>".to_string()),
        "/complaint" | "/letter" => Ok(Command::Complaint {
            details: parse_complaint(rest)?,
            formal: name == "/letter",
        }),
        "/quick" if !rest.is_empty() => Ok(Command::Quick(rest.to_string())),
        "/quick" => Err("usage: /quick <action id>".to_string()),
        "/tips" => Ok(Command::Tips),
        "/help" => Ok(Command::Help),
        "/quit" | "/exit" => Ok(Command::Quit),
        other => Err(format!("Unknown command: {}", other)),
    }
}

/// `<kind> <location> | <description>`
fn parse_complaint(rest: &str) -> Result<ComplaintDetails, String> {
    const USAGE: &str = "usage: /complaint <kind> <location> | <description>";

    let (kind, rest) = rest.split_once(' ').unwrap_or((rest, ""));
    if kind.is_empty() {
        return Err(USAGE.to_string());
    }
    let kind = ComplaintKind::from_str(kind).map_err(|_| {
        format!("Unknown issue type '{}' (garbage, water, road, streetlight, drainage, other)", kind)
    })?;
    let (location, description) = rest.split_once('|').unwrap_or((rest, ""));

    Ok(ComplaintDetails {
        kind: Some(kind),
        location: location.trim().to_string(),
        description: description.trim().to_string(),
    })
}

pub fn help_text() -> &'static str {
    "Commands:
  /attach <file>                           attach an image
  /detach                                  remove the attached image
  /lang                                    switch between English and Hindi
  /clear                                   start over
  /track <id>                              look up a complaint (e.g. GC-2023-4512)
  /complaint <kind> <location> | <text>    file a complaint
  /letter <kind> <location> | <text>       file a complaint as a formal letter
  /quick <id>                              file_complaint, pay_tax, certificates, waste_collection
  /tips                                    show the next waste management tip
  /quit                                    exit"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_chat_input() {
        assert_eq!(parse("  hello  ").unwrap(), Command::Say("hello".into()));
        assert_eq!(parse("exit").unwrap(), Command::Quit);
    }

    #[test]
    fn test_attach_keeps_spaces_in_path() {
        assert_eq!(
            parse("/attach my photos/bin.png").unwrap(),
            Command::Attach(PathBuf::from("my photos/bin.png"))
        );
        assert!(parse("/attach").is_err());
    }

    #[test]
    fn test_complaint() {
        let Command::Complaint { details, formal } =
            parse("/complaint Water Katra, Shivkuti Colony | No supply for 2 days").unwrap()
        else {
            panic!("expected complaint");
        };
        assert!(!formal);
        assert_eq!(details.kind, Some(ComplaintKind::Water));
        assert_eq!(details.location, "Katra, Shivkuti Colony");
        assert_eq!(details.description, "No supply for 2 days");
    }

    #[test]
    fn test_letter_without_description() {
        let Command::Complaint { details, formal } = parse("/letter road Daraganj").unwrap() else {
            panic!("expected complaint");
        };
        assert!(formal);
        assert_eq!(details.location, "Daraganj");
        assert!(details.description.is_empty());
    }

    #[test]
    fn test_bad_input() {
        assert!(parse("/complaint").is_err());
        assert!(parse("/complaint lake Katra").is_err());
        assert!(parse("/nope").is_err());
    }
}
