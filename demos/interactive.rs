// Copyright (c) the pma authors.
//
// This source code is dual-licensed under either the MIT license found in the
// LICENSE-MIT file in the root directory of this source tree or the Apache
// License, Version 2.0 found in the LICENSE-APACHE file in the root directory
// of this source tree. You may select, at your option, one of the above-listed licenses.

//! A simple interactive demonstration of the Packed Memory Array, mirroring
//! the teacher crate's `examples/interactive.rs` read-eval-print loop.

use pma::Pma;
use rustyline::history::FileHistory;
use rustyline::Editor;

fn parse_number(
    prompt: &str,
    rl: &mut Editor<(), FileHistory>,
) -> Result<i64, Box<dyn std::error::Error>> {
    Ok(loop {
        println!("{prompt}");
        let readline = rl.readline("> ")?;
        match readline.trim().parse::<i64>() {
            Ok(number) => break number,
            Err(_) => {
                println!("Expected a number. Try again.");
                continue;
            }
        }
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut rl = Editor::<(), _>::new()?;
    let mut pma: Pma<i64> = Pma::new();

    println!("Packed Memory Array demo. Capacity starts at {}.", pma.size());

    loop {
        let action = loop {
            println!("Enter an option (I=insert, D=delete, F=find, Q=quit):");
            let action = rl.readline("> ")?;
            let action = action.trim().to_uppercase();
            if ["I", "D", "F", "Q"].contains(&action.as_str()) {
                break action;
            }
            println!("Try again.");
        };

        if action == "Q" {
            break;
        }

        let key = parse_number("Which key?", &mut rl)?;

        match action.as_str() {
            "I" => match pma.insert(key) {
                Ok(true) => println!("Inserted {key}. count={}, size={}", pma.count(), pma.size()),
                Ok(false) => println!("{key} is already present."),
                Err(e) => println!("Insert failed: {e}"),
            },
            "D" => match pma.delete(key) {
                Ok(true) => println!("Deleted {key}. count={}, size={}", pma.count(), pma.size()),
                Ok(false) => println!("{key} was not present."),
                Err(e) => println!("Delete failed: {e}"),
            },
            "F" => {
                let (found, index) = pma.find(key);
                if found {
                    println!("{key} found at slot {index}.");
                } else {
                    println!("{key} not found (predecessor slot {index}).");
                }
            }
            _ => unreachable!(),
        }
    }

    Ok(())
}
