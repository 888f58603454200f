use std::io::{BufRead, Write};

use draughtsman::prelude::*;

#[derive(Clone, Copy, Debug, Default)]
/// Reads a human player's moves from stdin.
///
/// Every legal move is listed with its index; the player answers with an index or with move text like `5,0-4,1`, and
/// is asked again until the answer names a legal move.
pub struct Console;

impl MoveSource for Console
{
    fn request(&mut self, board: &Board, color: Color, legal: &[Move]) -> Result<Move>
    {
        println!("\n{}\n", board);
        for (i, mv) in legal.iter().enumerate()
        {
            println!("{: >3}. {}", i + 1, mv);
        }

        let stdin = std::io::stdin();
        loop
        {
            print!("{} to move> ", color);
            std::io::stdout().flush()?;

            let mut answer = String::new();
            if stdin.lock().read_line(&mut answer)? == 0
            {
                let err_msg = format!("stdin closed while waiting for {}'s move.", color);
                return Err(Error::new(Kind::StrategyFailure, err_msg));
            }

            match Move::resolve(&answer, legal)
            {
                | Ok(mv) => return Ok(mv),
                | Err(err) => println!("{}", err),
            }
        }
    }
}
