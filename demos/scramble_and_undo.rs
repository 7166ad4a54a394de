//! Scramble and Undo
//!
//! This example scrambles a cube, prints the net, then takes every move
//! back one at a time.
//!
//! Key concepts:
//! - Scrambles with optional half turns
//! - Undo walks the history in reverse
//! - Saving the session as JSON
//!
//! Run with: RUST_LOG=debug cargo run --example scramble_and_undo

use facecube::checkpoint::SavedSession;
use facecube::core::{Face, FaceletState};
use facecube::machine::CubeState;
use facecube::scramble::Scrambler;
use tracing_subscriber::EnvFilter;

fn print_net(state: &FaceletState) {
    for face in Face::ALL {
        let stickers: String = state.face(face).iter().map(|c| c.code()).collect();
        println!(
            "  {face}: {} {} {}",
            &stickers[0..3],
            &stickers[3..6],
            &stickers[6..9]
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let mut cube = CubeState::new();
    let scrambler = Scrambler::builder().length(12).double_turns(true).build();

    let steps = cube.scramble(&scrambler);
    let notation: Vec<String> = steps.iter().map(ToString::to_string).collect();
    println!("Scramble: {}", notation.join(" "));
    print_net(cube.facelets());

    let saved = SavedSession::capture("demo", &cube);
    println!("\nSaved session:\n{}", saved.to_json()?);

    println!("\nUndoing {} quarter turns...", cube.history().len());
    while let Some(mv) = cube.undo() {
        println!("  undo {mv}");
    }

    println!("\nSolved again: {}", cube.is_solved());
    Ok(())
}
