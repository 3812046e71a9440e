use crate::commands::{print_json, Context};
use crate::error::not_found;
use crate::util::{format_timestamp_datetime, now_utc, parse_entry_id};
use anyhow::Result;
use clap::Args;
use phonefield_core::dto::EntryDto;
use phonefield_core::{Entry, PhoneNumber, PhoneValue};
use phonefield_store::repo::EntryNew;

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub ext: Option<String>,
}

#[derive(Debug, Args)]
pub struct ListArgs {}

#[derive(Debug, Args)]
pub struct ShowArgs {
    pub id: String,
}

#[derive(Debug, Args)]
pub struct FindArgs {
    pub phone: String,
}

#[derive(Debug, Args)]
pub struct SetPhoneArgs {
    pub id: String,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub ext: Option<String>,
}

#[derive(Debug, Args)]
pub struct RemoveArgs {
    pub id: String,
}

pub fn add_entry(ctx: &Context<'_>, args: AddArgs) -> Result<()> {
    let phone = clean_phone_input(ctx, args.phone.as_deref(), args.ext.as_deref())?;
    let entry = ctx.store.entries().create(
        now_utc(),
        EntryNew {
            name: args.name,
            phone,
        },
    )?;

    if ctx.json {
        print_json(&EntryDto::from(&entry))?;
    } else {
        println!("created {} {}", entry.id, entry.name);
    }
    Ok(())
}

pub fn list_entries(ctx: &Context<'_>, _args: ListArgs) -> Result<()> {
    let entries = ctx.store.entries().list_all()?;
    print_entries(ctx, &entries, "no entries")
}

pub fn show_entry(ctx: &Context<'_>, args: ShowArgs) -> Result<()> {
    let id = parse_entry_id(&args.id)?;
    let entry = ctx
        .store
        .entries()
        .get(id)?
        .ok_or_else(|| not_found(format!("entry {id}")))?;

    if ctx.json {
        return print_json(&EntryDto::from(&entry));
    }

    println!("id: {}", entry.id);
    println!("name: {}", entry.name);
    println!("phone: {}", display_phone(&entry.phone));
    if !entry.phone.is_empty() {
        println!("stored: {}", PhoneValue::from(entry.phone.clone()).raw_display());
    }
    println!("created: {}", format_timestamp_datetime(entry.created_at));
    println!("updated: {}", format_timestamp_datetime(entry.updated_at));
    Ok(())
}

pub fn find_entries(ctx: &Context<'_>, args: FindArgs) -> Result<()> {
    let phone = PhoneNumber::parse_with(&args.phone, ctx.config.plan.plan());
    let entries = ctx.store.entries().find_by_phone(&phone)?;
    print_entries(ctx, &entries, "no matching entries")
}

pub fn set_phone(ctx: &Context<'_>, args: SetPhoneArgs) -> Result<()> {
    let id = parse_entry_id(&args.id)?;
    let phone = clean_phone_input(ctx, args.phone.as_deref(), args.ext.as_deref())?;
    let entry = ctx.store.entries().update_phone(now_utc(), id, phone)?;

    if ctx.json {
        print_json(&EntryDto::from(&entry))?;
    } else {
        println!("updated {} {}", entry.id, display_phone(&entry.phone));
    }
    Ok(())
}

pub fn remove_entry(ctx: &Context<'_>, args: RemoveArgs) -> Result<()> {
    let id = parse_entry_id(&args.id)?;
    ctx.store.entries().delete(id)?;

    if ctx.json {
        print_json(&serde_json::json!({ "id": id, "deleted": true }))?;
    } else {
        println!("deleted {}", id);
    }
    Ok(())
}

// An optional field turns empty input into an empty number.
fn clean_phone_input(
    ctx: &Context<'_>,
    main: Option<&str>,
    ext: Option<&str>,
) -> Result<PhoneNumber> {
    let phone = ctx
        .config
        .field
        .clean(main.unwrap_or_default(), ext.unwrap_or_default())?;
    Ok(phone.unwrap_or_default())
}

fn display_phone(phone: &PhoneNumber) -> String {
    if phone.is_empty() {
        return "-".to_string();
    }
    PhoneValue::from(phone.clone()).display()
}

fn print_entries(ctx: &Context<'_>, entries: &[Entry], empty_message: &str) -> Result<()> {
    if ctx.json {
        let items: Vec<EntryDto> = entries.iter().map(EntryDto::from).collect();
        return print_json(&items);
    }

    if entries.is_empty() {
        println!("{empty_message}");
        return Ok(());
    }

    for entry in entries {
        println!("{}  {}  {}", entry.id, entry.name, display_phone(&entry.phone));
    }
    Ok(())
}
