use crate::commands::{CommandArgs, Context, Reply};
use crate::error::CommandError;

pub const GREETING: &str = "How can I help you?";

pub const HELP_TEXT: &str = "\
This bot keeps your contacts for the current session.
Commands:
  hello | hi                       greet the bot
  add <name> <phone>               add a contact, or another phone to an existing one
      example: add User_name 095-xxx-xx-xx
  change <name> <old> <new>        replace one of the contact's phones
      example: change User_name 095-xxx-xx-xx 050-xxx-xx-xx
  delete <name>                    delete the contact and all its phones
      example: delete User_name
  phone <name>                     show the contact's phones
      example: phone User_name
  show all                         show every contact
  help                             show this text
  exit | . | bye | good bye | close
                                   leave the bot";

pub fn hello(_ctx: &mut Context<'_>, _args: &CommandArgs) -> Result<Reply, CommandError> {
    Ok(Reply::text(GREETING))
}

pub fn help(_ctx: &mut Context<'_>, _args: &CommandArgs) -> Result<Reply, CommandError> {
    Ok(Reply::text(HELP_TEXT))
}

pub fn bye(_ctx: &mut Context<'_>, _args: &CommandArgs) -> Result<Reply, CommandError> {
    Ok(Reply::Exit)
}
