//! Reads cases of `n` followed by `n` words until `n = 0`. For every case prints the longest
//! substrings shared by more than half of the words, one per line, or `?` if there is none,
//! followed by an empty line.

use std::io::{self, Read, Write};

use anyhow::{bail, Context, Result};

fn main() -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;
    let mut tokens = input.split_ascii_whitespace();

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    loop {
        let n: usize = match tokens.next() {
            None => break,
            Some(token) => token
                .parse()
                .with_context(|| format!("invalid string count {:?}", token))?,
        };
        if n == 0 {
            break;
        }
        let mut words = Vec::with_capacity(n);
        for i in 0..n {
            match tokens.next() {
                Some(word) => words.push(word),
                None => bail!("expected {} strings, found {}", n, i),
            }
        }

        let found = common_substrings::longest_quorum_substrings(&words)?;
        if found.max_len == 0 {
            writeln!(out, "?")?;
        }
        for s in &found.substrings {
            out.write_all(s)?;
            writeln!(out)?;
        }
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}
