use std::fmt::Write;

use cube_core::{Color, CubeState, Face};
use owo_colors::OwoColorize;

/// Faces of each band of the unfolded net, top to bottom.
const NET: [&[Option<Face>]; 3] = [
    &[None, Some(Face::U)],
    &[Some(Face::L), Some(Face::F), Some(Face::R), Some(Face::B)],
    &[None, Some(Face::D)],
];

fn sticker(color: Color, colored: bool) -> String {
    if !colored {
        return format!("{} ", color.letter());
    }

    let block = "██";
    match color {
        Color::W => block.white().to_string(),
        Color::Y => block.yellow().to_string(),
        Color::O => block.truecolor(255, 140, 0).to_string(),
        Color::R => block.red().to_string(),
        Color::G => block.green().to_string(),
        Color::B => block.blue().to_string(),
    }
}

/// Draw `state` as an unfolded net, `U` on top and `D` below `F`.
pub fn render_net(state: &CubeState, colored: bool) -> String {
    let mut out = String::new();

    for band in NET {
        for row in 0..3 {
            let mut line = String::new();
            for slot in band {
                match slot {
                    Some(face) => {
                        for &color in &state[*face][row] {
                            line.push_str(&sticker(color, colored));
                        }
                    }
                    None => line.push_str("      "),
                }
                line.push(' ');
            }
            // Infallible when writing to a `String`
            let _ = writeln!(out, "{}", line.trim_end());
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use cube_core::{Direction, engine};

    #[test]
    fn solved_net() {
        let net = render_net(&CubeState::solved(), false);
        let lines = net.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "       W W W");
        assert_eq!(lines[4], "O O O  G G G  R R R  B B B");
        assert_eq!(lines[8], "       Y Y Y");
    }

    #[test]
    fn turned_net() {
        let mut state = CubeState::solved();
        engine::turn(&mut state, Face::U, Direction::Clockwise);
        let net = render_net(&state, false);
        assert_eq!(net.lines().nth(3), Some("G G G  R R R  B B B  O O O"));
    }
}
