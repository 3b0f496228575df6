use std::io::{BufRead, Write};

use rand::Rng;

use crate::{structs::RandomizedQueue, utils::*};

/// Read whitespace-delimited tokens from `input` and write `k` of them,
/// chosen uniformly at random, one per line.
///
/// Fails with [`QueueError::EmptyContainer`] once `k` exceeds the number of
/// tokens; lines written before that point stay written.
pub fn run(k: usize, input: impl BufRead, output: impl Write) -> Result<()> {
    run_with_rng(k, input, output, rand::thread_rng())
}

pub fn run_with_rng<R: Rng>(
    k: usize,
    input: impl BufRead,
    mut output: impl Write,
    rng: R,
) -> Result<()> {
    let mut queue = RandomizedQueue::with_rng(rng);

    for line in input.lines() {
        for token in line?.split_whitespace() {
            queue.enqueue(token.to_string())?;
        }
    }

    debug!("Subset tokens read   : {}, picking {}", queue.len(), k);

    for _ in 0..k {
        writeln!(output, "{}", queue.dequeue()?)?;
    }
    output.flush()?;

    Ok(())
}
