//! Reads cases of `K A B` until `K = 0` and prints, per case, how many pairs of equal
//! substrings of length at least `K` there are between `A` and `B`.

use std::io::{self, Read, Write};

use anyhow::{Context, Result};

fn main() -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;
    let mut tokens = input.split_ascii_whitespace();

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    while let Some(token) = tokens.next() {
        let k: u32 = token
            .parse()
            .with_context(|| format!("invalid minimum length {:?}", token))?;
        if k == 0 {
            break;
        }
        let a = tokens.next().context("missing string A")?;
        let b = tokens.next().context("missing string B")?;
        let count = common_substrings::count_common_substrings(a.as_bytes(), b.as_bytes(), k)?;
        writeln!(out, "{}", count)?;
    }
    out.flush()?;
    Ok(())
}
