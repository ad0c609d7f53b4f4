//! Backslash-escape interpretation for `-e`.
//!
//! Interprets the standard escape sequences the way `echo -e` does:
//! `\n`, `\t`, `\\`, `\xHH`, octal `\NNN`, and friends. Unknown escapes
//! are kept literally. This is a fixed table, not expression evaluation.

/// Interpret backslash escapes in one argument.
pub fn interpret(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            // Trailing backslash stays literal.
            None => out.push('\\'),
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('\\') => out.push('\\'),
            Some('\'') => out.push('\''),
            Some('"') => out.push('"'),
            Some('a') => out.push('\x07'),
            Some('b') => out.push('\x08'),
            Some('e') => out.push('\x1b'),
            Some('f') => out.push('\x0c'),
            Some('v') => out.push('\x0b'),
            Some('x') => {
                let mut value: u32 = 0;
                let mut digits = 0;
                while digits < 2 {
                    match chars.peek().and_then(|d| d.to_digit(16)) {
                        Some(d) => {
                            value = value * 16 + d;
                            chars.next();
                            digits += 1;
                        }
                        None => break,
                    }
                }
                if digits == 0 {
                    // \x with no digits stays literal.
                    out.push_str("\\x");
                } else if let Some(ch) = char::from_u32(value) {
                    out.push(ch);
                }
            }
            Some(d @ '0'..='7') => {
                let mut value = d.to_digit(8).unwrap_or(0);
                let mut digits = 1;
                while digits < 3 {
                    match chars.peek().and_then(|o| o.to_digit(8)) {
                        Some(o) => {
                            value = value * 8 + o;
                            chars.next();
                            digits += 1;
                        }
                        None => break,
                    }
                }
                if let Some(ch) = char::from_u32(value & 0xff) {
                    out.push(ch);
                }
            }
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
        }
    }

    out
}
