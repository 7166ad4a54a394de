//! Manual Entry
//!
//! This example checks hand-typed facelet strings before loading them,
//! showing both the first-problem and all-problems validators.
//!
//! Run with: cargo run --example manual_entry

use facecube::machine::CubeState;
use facecube::validation::{validate, validate_all};
use stillwater::validation::Validation;

fn main() {
    let entries = [
        ("solved", "WWWWWWWWWRRRRRRRRRGGGGGGGGGYYYYYYYYYOOOOOOOOOBBBBBBBBB"),
        ("after L", "BWWBWWBWWRRRRRRRRRWGGWGGWGGGYYGYYGYYOOOOOOOOOBBYBBYBBY"),
        ("too short", "WWWWWWWWWRRRRRRRRR"),
        ("swapped centers", "WWWWRWWWWRRRRWRRRRGGGGGGGGGYYYYYYYYYOOOOOOOOOBBBBBBBBB"),
        ("miscounted", "WWWWWWWWWWRRRRRRRRGGGGGGGGGYYYYYYYYYOOOOOOOOOBBBBBBBBB"),
    ];

    let mut cube = CubeState::new();

    for (name, facelets) in entries {
        println!("{name}:");
        match validate(facelets) {
            Ok(()) => match cube.load_str(facelets) {
                Ok(()) => println!("  accepted, solved = {}", cube.is_solved()),
                Err(err) => println!("  could not load: {err}"),
            },
            Err(first) => {
                println!("  rejected: {first}");
                if let Validation::Failure(all) = validate_all(facelets) {
                    for err in all.iter() {
                        println!("    - {err}");
                    }
                }
            }
        }
    }
}
