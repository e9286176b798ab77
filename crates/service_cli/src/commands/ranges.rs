//! Ranges command implementation
//!
//! Lists parameter identifiers, labels, valid ranges, input steps and
//! defaults for one or every model variant.

use std::io::{self, Write};

use pricer_models::models::ModelKind;

use crate::output;
use crate::Result;

/// Run the ranges command
pub fn run(model: Option<&str>) -> Result<()> {
    let kinds = match model {
        Some(name) => vec![name.parse::<ModelKind>()?],
        None => ModelKind::ALL.to_vec(),
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&kinds, &mut out)
}

fn execute<W: Write>(kinds: &[ModelKind], out: &mut W) -> Result<()> {
    for (i, &kind) in kinds.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        output::write_ranges(out, kind)?;
    }
    Ok(())
}
