use color_eyre::owo_colors::{AnsiColors, OwoColorize};
use hollow_cube::{Cube, Face};
use itertools::Itertools;
use std::fmt::Write;

fn face_color(face: Face) -> AnsiColors {
    match face.index() {
        0 => AnsiColors::Yellow,
        1 => AnsiColors::White,
        2 => AnsiColors::Blue,
        3 => AnsiColors::Green,
        4 => AnsiColors::Red,
        _ => AnsiColors::Magenta,
    }
}

fn cell(label: Option<Face>, color: bool) -> String {
    match label {
        Some(face) if color => face.index().color(face_color(face)).to_string(),
        Some(face) => face.index().to_string(),
        None => "?".to_owned(),
    }
}

/// Print every face as a grid of the face numbers of the labels showing on
/// it, one face after another.
pub fn render(cube: &Cube, color: bool) -> String {
    let mut out = String::new();
    for face in Face::ALL {
        let labels = cube.face_labels(face);
        let _ = writeln!(out, "{face}");
        for row in labels.rows() {
            let _ = writeln!(
                out,
                "  {}",
                row.iter().map(|&label| cell(label, color)).join(" ")
            );
        }
    }
    out
}
