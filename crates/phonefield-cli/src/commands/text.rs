use crate::commands::{print_json, TextContext};
use anyhow::Result;
use clap::Args;
use phonefield_core::dto::PhoneNumberDto;
use phonefield_core::{decompose, recompose, PhoneNumber, PhoneValue};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Args)]
pub struct ParseArgs {
    #[arg(required = true, value_name = "INPUT")]
    pub inputs: Vec<String>,
}

#[derive(Debug, Args)]
pub struct DisplayArgs {
    pub value: String,
    /// Print the machine form instead of the human form
    #[arg(long)]
    pub raw: bool,
}

#[derive(Debug, Args)]
pub struct SplitArgs {
    pub input: String,
}

#[derive(Debug, Args)]
pub struct JoinArgs {
    pub main: String,
    #[arg(default_value = "")]
    pub ext: String,
}

#[derive(Debug, Serialize)]
struct DisplayDto {
    value: String,
    display: String,
}

#[derive(Debug, Serialize)]
struct SplitDto {
    main: String,
    ext: String,
}

pub fn parse(ctx: &TextContext<'_>, args: ParseArgs) -> Result<()> {
    let plan = ctx.config.plan.plan();
    let items: Vec<PhoneNumberDto> = args
        .inputs
        .iter()
        .map(|input| {
            let phone = PhoneNumber::parse_with(input, plan);
            debug!(
                input = %input,
                region = ?phone.region(),
                extensions = phone.extensions().len(),
                "parsed phone number"
            );
            PhoneNumberDto::from(&phone)
        })
        .collect();

    if ctx.json {
        return print_json(&items);
    }

    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            println!();
        }
        print_phone(item);
    }
    Ok(())
}

pub fn display(ctx: &TextContext<'_>, args: DisplayArgs) -> Result<()> {
    let value = PhoneValue::Raw(args.value.clone());
    let display = if args.raw {
        value.raw_display()
    } else {
        value.display()
    };

    if ctx.json {
        return print_json(&DisplayDto {
            value: args.value,
            display,
        });
    }
    println!("{display}");
    Ok(())
}

pub fn split(ctx: &TextContext<'_>, args: SplitArgs) -> Result<()> {
    let phone = PhoneNumber::parse_with(&args.input, ctx.config.plan.plan());
    let (main, ext) = decompose(&phone);

    if ctx.json {
        return print_json(&SplitDto { main, ext });
    }
    println!("main: {main}");
    println!("ext: {ext}");
    Ok(())
}

pub fn join(ctx: &TextContext<'_>, args: JoinArgs) -> Result<()> {
    let raw = recompose(&args.main, &args.ext);
    debug!(raw = %raw, "recomposed phone input");
    let phone = ctx.config.field.clean_raw(&raw)?;

    if ctx.json {
        return print_json(&phone.as_ref().map(PhoneNumberDto::from));
    }
    match phone {
        Some(phone) => println!("{}\t{}", phone.cleaned(), phone),
        None => println!("no phone"),
    }
    Ok(())
}

fn print_phone(item: &PhoneNumberDto) {
    println!("input: {:?}", item.raw);
    println!("cleaned: {}", item.cleaned);
    println!("formatted: {}", item.formatted);
    println!("base_number: {}", item.base_number);
    println!("base_number_fmt: {}", item.base_number_fmt);
    if item.extensions.is_empty() {
        println!("extensions: -");
    } else {
        println!("extensions: {}", item.extensions.join(", "));
    }
    println!("is_e164: {}", item.is_e164);
    println!("is_standard: {}", item.is_standard);
    println!("is_usa: {}", item.is_usa);
}
