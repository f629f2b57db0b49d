//! Execution of the session steps against a store.

use std::io::Write;

use intelitile_core::{Directive, Policy, SessionStore, place_from_store};
use tracing::{debug, info};

use crate::{
    cli::{Commands, InitArgs, WindowArgs},
    error::Result,
};

/// Run one session step, writing any directives to `out`.
pub fn run<S, W>(command: &Commands, store: &S, out: &mut W) -> Result<()>
where
    S: SessionStore + ?Sized,
    W: Write,
{
    match command {
        Commands::Init(args) => init(args, store, out),
        Commands::Add(args) => add(args, store),
        Commands::Place(args) => place(Policy::Place, args, store, out),
        Commands::TallPlace(args) => place(Policy::TallPlace, args, store, out),
        Commands::WidePlace(args) => place(Policy::WidePlace, args, store, out),
    }
}

/// Create a session and hand its id back through the environment.
fn init<S, W>(args: &InitArgs, store: &S, out: &mut W) -> Result<()>
where
    S: SessionStore + ?Sized,
    W: Write,
{
    let id = store.create(args.width, args.height)?;
    let directive = Directive::SetEnv {
        name: args.env_name.clone(),
        value: id.to_string(),
    };
    write!(out, "{directive}")?;
    Ok(())
}

/// Append an occupied window to an existing session.
fn add<S>(args: &WindowArgs, store: &S) -> Result<()>
where
    S: SessionStore + ?Sized,
{
    let window = args.rect()?;
    store.append(&args.session_id(), window)?;
    debug!(session = %args.session, %window, "window added");
    Ok(())
}

/// Consume the session and emit a resize directive when a space qualifies.
fn place<S, W>(policy: Policy, args: &WindowArgs, store: &S, out: &mut W) -> Result<()>
where
    S: SessionStore + ?Sized,
    W: Write,
{
    let target = args.rect()?;
    let placement = place_from_store(store, &args.session_id(), policy, target)?;
    match placement.directive() {
        Some(directive) => {
            write!(out, "{directive}")?;
            debug!(%policy, ?placement, "placement emitted");
        }
        None => info!(%policy, %target, "no free space qualifies; leaving window alone"),
    }
    Ok(())
}
