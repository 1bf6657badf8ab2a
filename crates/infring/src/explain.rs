//! Plain-language account of how a ring was drawn.

use modring::{Diagram, Mode, gcd};

pub fn narrate(diagram: &Diagram) -> Vec<String> {
    match diagram.mode {
        Mode::Additive => additive(diagram),
        Mode::Multiplicative => multiplicative(diagram),
    }
}

fn additive(diagram: &Diagram) -> Vec<String> {
    let (a, b) = (diagram.operand, diagram.base);
    let walk = &diagram.walk;
    let mut lines = vec![format!(
        "The infinity ring follows x <- (x + {a}) (mod {b}), starting at x = 0, the 12 o'clock position."
    )];

    let Some(first) = walk.first() else {
        return lines;
    };
    lines.push(format!(
        "Draw a line from 0 to the remainder of (0 + {a}) / {b}: (0 + {a}) (mod {b}) = {}.",
        first.to
    ));

    if first.is_loop() {
        lines.push(format!(
            "{a} is a multiple of {b}, so the walk is back at 12 o'clock after a single step."
        ));
        return lines;
    }

    if let Some(second) = walk.get(1) {
        lines.push(format!(
            "The new number is assigned to x and the iteration repeats: draw a line from {} to ({} + {a}) (mod {b}) = {}.",
            second.from, second.from, second.to
        ));
    }
    lines.push(format!(
        "The process continues until the end point is back at 12 o'clock: {} / gcd({b}, {a}) = {} segments.",
        b,
        walk.len()
    ));
    lines
}

fn multiplicative(diagram: &Diagram) -> Vec<String> {
    let (m, b) = (diagram.operand, diagram.base);
    let fixed = diagram.walk.iter().filter(|s| s.is_loop()).count();
    let mut lines = vec![
        format!("Every x from 0 to {} is joined to y = (x × {m}) (mod {b}).", b - 1),
        format!(
            "That is {} arrows; {fixed} of them start and end on the same tick.",
            diagram.walk.len()
        ),
    ];
    let shared = gcd(b as u64, m as u64);
    if shared > 1 {
        lines.push(format!(
            "gcd({b}, {m}) = {shared}, so arrows only ever land on multiples of {shared}."
        ));
    }
    lines
}
