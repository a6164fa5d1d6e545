use crate::commands::{CommandArgs, Context, Reply};
use crate::error::CommandError;
use phonebook_core::domain::{normalize_phone, Name, PhoneNumber};

pub const EMPTY_BOOK: &str = "Address book is empty";

pub fn add(ctx: &mut Context<'_>, args: &CommandArgs) -> Result<Reply, CommandError> {
    let name = Name::new(args.get("name")?)?;
    let phone = PhoneNumber::new(args.get("phone")?)?;
    let reply = format!("Contact {} {} added", name, phone);
    ctx.book.upsert(name, phone)?;
    Ok(Reply::Text(reply))
}

pub fn change(ctx: &mut Context<'_>, args: &CommandArgs) -> Result<Reply, CommandError> {
    let old = args.get("old_phone")?;
    let new = args.get("new_phone")?;
    let contact = ctx.book.change_contact_phone(args.get("name")?, old, new)?;
    Ok(Reply::Text(format!(
        "Contact {} {} to {} changed",
        contact.name(),
        normalize_phone(old)?,
        normalize_phone(new)?
    )))
}

pub fn delete(ctx: &mut Context<'_>, args: &CommandArgs) -> Result<Reply, CommandError> {
    let name = Name::new(args.get("name")?)?;
    let reply = if ctx.book.remove(&name) {
        format!("Contact {} deleted", name)
    } else {
        format!("Contact {} not found", name)
    };
    Ok(Reply::Text(reply))
}

pub fn phone(ctx: &mut Context<'_>, args: &CommandArgs) -> Result<Reply, CommandError> {
    let line = ctx.book.render(args.get("name")?)?;
    Ok(Reply::Text(line))
}

pub fn show_all(ctx: &mut Context<'_>, _args: &CommandArgs) -> Result<Reply, CommandError> {
    if ctx.book.is_empty() {
        return Ok(Reply::text(EMPTY_BOOK));
    }
    Ok(Reply::Text(ctx.book.render_all().join("\n")))
}
