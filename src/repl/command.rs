use std::str::FromStr;

use thiserror::Error;

use crate::catalog::ProductId;
use crate::form::{DraftField, ProductForm, UnknownField};

/// One line of shell input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Show(ProductId),
    /// Set a field of the create form.
    Draft { field: DraftField, value: String },
    /// Submit the create form, or create directly from `title | description [| image]`.
    Add(Option<ProductForm>),
    Edit(ProductId),
    /// Set a field of the open edit session.
    Set { field: DraftField, value: String },
    /// Commit the open session, or the session for an explicit id.
    Save(Option<ProductId>),
    Cancel,
    Delete(ProductId),
    Reload,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command '{0}' (try 'help')")]
    Unknown(String),
    #[error("'{command}' needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error("Invalid product id '{0}'")]
    InvalidId(String),
    #[error(transparent)]
    UnknownField(#[from] UnknownField),
}

pub const HELP: &str = "\
Commands:
  list                         show all products
  show <id>                    show one product
  draft <field> <text>         fill the create form (title, description, image)
  add                          create a product from the form
  add <title> | <desc> [| <image>]
  edit <id>                    start editing a product
  set <field> <text>           change a field of the product being edited
  save [<id>]                  save the edit
  cancel                       leave edit mode without saving
  delete <id>                  delete a product (asks first)
  reload                       fetch the product list again
  help                         show this help
  quit                         exit";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim_start()),
            None => (line, ""),
        };

        match name.to_ascii_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "list" | "ls" => Ok(Self::List),
            "show" => parse_id("show", rest).map(Self::Show),
            "draft" => {
                let (field, value) = parse_field_value("draft", rest)?;
                Ok(Self::Draft { field, value })
            }
            "add" => parse_inline_form(rest).map(Self::Add),
            "edit" => parse_id("edit", rest).map(Self::Edit),
            "set" => {
                let (field, value) = parse_field_value("set", rest)?;
                Ok(Self::Set { field, value })
            }
            "save" => {
                if rest.is_empty() {
                    Ok(Self::Save(None))
                } else {
                    parse_id("save", rest).map(|id| Self::Save(Some(id)))
                }
            }
            "cancel" => Ok(Self::Cancel),
            "delete" | "rm" => parse_id("delete", rest).map(Self::Delete),
            "reload" => Ok(Self::Reload),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn parse_id(command: &'static str, rest: &str) -> Result<ProductId, CommandError> {
    if rest.is_empty() {
        return Err(CommandError::MissingArgument {
            command,
            argument: "a product id",
        });
    }
    rest.parse()
        .map_err(|_| CommandError::InvalidId(rest.to_string()))
}

/// `<field> <value>`; the value keeps its inner spacing and may be empty.
fn parse_field_value(
    command: &'static str,
    rest: &str,
) -> Result<(DraftField, String), CommandError> {
    if rest.is_empty() {
        return Err(CommandError::MissingArgument {
            command,
            argument: "a field name",
        });
    }
    let (field, value) = rest.split_once(' ').unwrap_or((rest, ""));
    Ok((field.parse()?, value.to_string()))
}

fn parse_inline_form(rest: &str) -> Result<Option<ProductForm>, CommandError> {
    if rest.is_empty() {
        return Ok(None);
    }
    let mut parts = rest.split('|').map(str::trim);
    let title = parts.next().unwrap_or_default();
    let Some(description) = parts.next() else {
        return Err(CommandError::MissingArgument {
            command: "add",
            argument: "'<title> | <description>'",
        });
    };
    let form = ProductForm::new(title, description);
    Ok(Some(match parts.next() {
        Some(image) if !image.is_empty() => form.with_image_url(image),
        _ => form,
    }))
}
