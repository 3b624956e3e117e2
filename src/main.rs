use std::io::Write;

use anyhow::{Context, Result};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use monoid_traits::ops::{PlusGeneric, PlusMonoid};
use monoid_traits::{MonoidTraits, MonoidTraitsFor};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // "Tightly typed" identity: the operator declares it.
    let tight_identity = <PlusMonoid<i32> as MonoidTraits>::identity();

    // "Loosely typed" identity: chosen by the operand type.
    let loose_identity = <PlusGeneric as MonoidTraitsFor<i32>>::identity();

    debug!(tight_identity, loose_identity, "resolved identities");

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{tight_identity} {loose_identity}").context("Failed to write identities")?;
    stdout.flush().context("Failed to flush stdout")?;

    Ok(())
}
