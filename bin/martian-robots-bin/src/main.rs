/*
 * Copyright (C) 2023 Asim Ihsan
 * SPDX-License-Identifier: AGPL-3.0-only
 *
 * This program is free software: you can redistribute it and/or modify it under
 * the terms of the GNU Affero General Public License as published by the Free
 * Software Foundation, version 3.
 *
 * This program is distributed in the hope that it will be useful, but WITHOUT ANY
 * WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A
 * PARTICULAR PURPOSE. See the GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License along
 * with this program. If not, see <https://www.gnu.org/licenses/>
 */

use martian_robots::mission::Mission;

const DEFAULT_INPUT_PATH: &str = "instructions.txt";

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let path = prompt_for_input_path()?;
    let input = std::fs::read_to_string(&path)
        .map_err(|e| format!("failed to read '{}': {}", path, e))?;

    // Each robot's report line is printed as soon as its record finishes, so
    // a fatal error later in the batch still leaves the earlier lines.
    let mission = Mission::parse(&input)?;
    for robot in mission {
        println!("{}", robot?);
    }
    Ok(())
}

fn prompt_for_input_path() -> Result<String, std::io::Error> {
    println!(
        "enter the input file path (pressing enter defaults to '{}')",
        DEFAULT_INPUT_PATH
    );
    let mut entered = String::new();
    std::io::stdin().read_line(&mut entered)?;
    Ok(resolve_input_path(&entered))
}

fn resolve_input_path(entered: &str) -> String {
    let entered = entered.trim();
    if entered.is_empty() {
        DEFAULT_INPUT_PATH.to_string()
    } else {
        entered.to_string()
    }
}
