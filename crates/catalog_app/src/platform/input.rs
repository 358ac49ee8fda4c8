use catalog_core::{CategorySelection, DismissReason, ItemId, Msg};
use thiserror::Error;

pub const HELP: &str = "\
commands:
  category <name|All>   filter by category
  page <n>              jump to page n (clamped)
  next | prev           step one page
  open <id>             open the preview of an item
  close                 close the preview
  toggle <id>           show or hide item details
  width <px>            resize the viewport
  help                  show this list
  quit                  exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Msg),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("`{command}` expects a number, got `{value}`")]
    NotANumber {
        command: &'static str,
        value: String,
    },
}

/// Parses one input line. Blank lines map to `Msg::NoOp`.
pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let msg = match verb.to_ascii_lowercase().as_str() {
        "" => Msg::NoOp,
        "help" | "?" => return Ok(Command::Help),
        "quit" | "exit" => return Ok(Command::Quit),
        "next" => Msg::NextPage,
        "prev" | "previous" => Msg::PreviousPage,
        "close" => Msg::PreviewDismissed(DismissReason::CloseButton),
        // Category names contain spaces, so the whole remainder is the argument.
        "category" => Msg::CategorySelected(CategorySelection::from_label(required(
            "category", rest,
        )?)),
        "page" => Msg::PageRequested(number("page", rest)?),
        "width" => Msg::ViewportResized {
            width: number("width", rest)?,
        },
        "open" => Msg::ItemActivated(ItemId::new(required("open", rest)?)),
        "toggle" => Msg::DetailsToggled(ItemId::new(required("toggle", rest)?)),
        _ => return Err(InputError::Unknown(verb.to_string())),
    };
    Ok(Command::Dispatch(msg))
}

fn required<'a>(command: &'static str, rest: &'a str) -> Result<&'a str, InputError> {
    if rest.is_empty() {
        Err(InputError::MissingArgument(command))
    } else {
        Ok(rest)
    }
}

fn number<T: std::str::FromStr>(command: &'static str, rest: &str) -> Result<T, InputError> {
    required(command, rest)?
        .parse()
        .map_err(|_| InputError::NotANumber {
            command,
            value: rest.to_string(),
        })
}
